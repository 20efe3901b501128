use std::fmt;

use crate::error::{LabError, LabResult};

// ---------------------------------------------------------------------------
// Operation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operation {
    #[default]
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Evaluate `lhs <op> rhs`. Only division can fail.
    pub fn apply(self, lhs: f64, rhs: f64) -> LabResult<f64> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => divide(lhs, rhs),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

pub fn divide(lhs: f64, rhs: f64) -> LabResult<f64> {
    if rhs == 0.0 {
        return Err(LabError::DivisionByZero);
    }
    Ok(lhs / rhs)
}

// ---------------------------------------------------------------------------
// HistoryEntry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HistoryEntry {
    pub value: f64,
    pub operation: Operation,
}

impl HistoryEntry {
    pub fn new(value: f64, operation: Operation) -> Self {
        Self { value, operation }
    }
}

// ---------------------------------------------------------------------------
// HistoryStats
// ---------------------------------------------------------------------------

/// Aggregates over the ledger. All values are 0.0 when the ledger is empty.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HistoryStats {
    pub count: usize,
    pub average: f64,
    pub max: f64,
    pub min: f64,
}

impl HistoryStats {
    pub fn from_entries(entries: &[HistoryEntry]) -> Self {
        let Some(first) = entries.first() else {
            return Self::default();
        };
        let mut sum = 0.0;
        let mut max = first.value;
        let mut min = first.value;
        for entry in entries {
            sum += entry.value;
            if entry.value > max {
                max = entry.value;
            }
            if entry.value < min {
                min = entry.value;
            }
        }
        Self {
            count: entries.len(),
            average: sum / entries.len() as f64,
            max,
            min,
        }
    }
}
