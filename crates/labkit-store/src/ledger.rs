use tracing::debug;

use labkit_core::{HistoryEntry, HistoryStore, LabError, LabResult, Operation};

use crate::arena::FixedArena;

pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Calculator history with FIFO eviction once `capacity` entries are held.
#[derive(Debug, Clone)]
pub struct BoundedLedger {
    entries: FixedArena<HistoryEntry>,
    log_failed_division: bool,
}

impl BoundedLedger {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: FixedArena::new(capacity),
            log_failed_division: true,
        }
    }

    /// Whether a division by zero still logs a `0.0` result.
    pub fn with_failed_division_logging(mut self, enabled: bool) -> Self {
        self.log_failed_division = enabled;
        self
    }

    /// Evaluate `lhs <op> rhs` and log the result.
    ///
    /// A division by zero returns the error; with failed-division logging on
    /// (the default) a `0.0` entry is still appended first.
    pub fn record(&mut self, operation: Operation, lhs: f64, rhs: f64) -> LabResult<f64> {
        match operation.apply(lhs, rhs) {
            Ok(value) => {
                self.append(HistoryEntry::new(value, operation));
                Ok(value)
            }
            Err(LabError::DivisionByZero) => {
                if self.log_failed_division {
                    self.append(HistoryEntry::new(0.0, operation));
                }
                Err(LabError::DivisionByZero)
            }
            Err(e) => Err(e),
        }
    }
}

impl Default for BoundedLedger {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryStore for BoundedLedger {
    fn append(&mut self, entry: HistoryEntry) {
        if let Some(evicted) = self.entries.push_evicting(entry) {
            debug!(
                "history full ({}), evicted {} {}",
                self.entries.capacity(),
                evicted.operation,
                evicted.value
            );
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn entries(&self) -> &[HistoryEntry] {
        self.entries.as_slice()
    }

    fn capacity(&self) -> usize {
        self.entries.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(value: f64) -> HistoryEntry {
        HistoryEntry::new(value, Operation::Add)
    }

    #[test]
    fn test_length_tracks_appends_up_to_capacity() {
        let mut ledger = BoundedLedger::default();
        for count in 1..=150usize {
            ledger.append(add(count as f64));
            assert_eq!(ledger.len(), count.min(DEFAULT_HISTORY_CAPACITY));
        }
    }

    #[test]
    fn test_fifo_eviction_on_101st() {
        let mut ledger = BoundedLedger::default();
        for i in 0..100 {
            ledger.append(add(i as f64));
        }
        ledger.append(HistoryEntry::new(1000.0, Operation::Multiply));

        let entries = ledger.entries();
        assert_eq!(entries.len(), 100);
        // first appended (0.0) is gone, the other 99 keep their order
        for (i, entry) in entries[..99].iter().enumerate() {
            assert_eq!(entry.value, (i + 1) as f64);
        }
        assert_eq!(entries[99], HistoryEntry::new(1000.0, Operation::Multiply));
    }

    #[test]
    fn test_aggregates_empty() {
        let ledger = BoundedLedger::default();
        assert_eq!(ledger.average(), 0.0);
        assert_eq!(ledger.max(), 0.0);
        assert_eq!(ledger.min(), 0.0);
    }

    #[test]
    fn test_aggregates_one_two_three() {
        let mut ledger = BoundedLedger::default();
        for v in [1.0, 2.0, 3.0] {
            ledger.append(add(v));
        }
        assert_eq!(ledger.average(), 2.0);
        assert_eq!(ledger.max(), 3.0);
        assert_eq!(ledger.min(), 1.0);
    }

    #[test]
    fn test_clear() {
        let mut ledger = BoundedLedger::new(5);
        ledger.append(add(1.0));
        ledger.append(add(2.0));
        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.capacity(), 5);
        assert_eq!(ledger.average(), 0.0);
    }

    #[test]
    fn test_record_logs_result() {
        let mut ledger = BoundedLedger::default();
        assert_eq!(ledger.record(Operation::Multiply, 3.0, 4.0).unwrap(), 12.0);
        assert_eq!(ledger.entries(), &[HistoryEntry::new(12.0, Operation::Multiply)]);
    }

    #[test]
    fn test_record_division_by_zero_logs_zero() {
        let mut ledger = BoundedLedger::default();
        let err = ledger.record(Operation::Divide, 5.0, 0.0).unwrap_err();
        assert_eq!(err, LabError::DivisionByZero);
        assert_eq!(ledger.entries(), &[HistoryEntry::new(0.0, Operation::Divide)]);
    }

    #[test]
    fn test_record_division_by_zero_skips_when_disabled() {
        let mut ledger = BoundedLedger::default().with_failed_division_logging(false);
        assert!(ledger.record(Operation::Divide, 5.0, 0.0).is_err());
        assert!(ledger.is_empty());
    }
}
