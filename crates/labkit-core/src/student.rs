use std::fmt;

pub const NUM_SUBJECTS: usize = 3;
pub const MAX_NAME_CHARS: usize = 49;
/// Inclusive pass mark on a student's average.
pub const PASS_THRESHOLD: f64 = 60.0;

// ---------------------------------------------------------------------------
// Grade
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grade {
    A,
    B,
    C,
    D,
    #[default]
    F,
}

impl Grade {
    /// Thresholds are inclusive lower bounds: 90 A, 80 B, 70 C, 60 D.
    pub fn from_average(average: f64) -> Self {
        if average >= 90.0 {
            Self::A
        } else if average >= 80.0 {
            Self::B
        } else if average >= 70.0 {
            Self::C
        } else if average >= 60.0 {
            Self::D
        } else {
            Self::F
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::F => 'F',
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// ---------------------------------------------------------------------------
// StudentRecord
// ---------------------------------------------------------------------------

/// A student with marks and the fields derived from them.
///
/// `average` and `grade` are private and recomputed on every mark change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StudentRecord {
    pub id: i32,
    pub name: String,
    marks: [i32; NUM_SUBJECTS],
    average: f64,
    grade: Grade,
}

impl StudentRecord {
    /// Names longer than `MAX_NAME_CHARS` are truncated.
    pub fn new(id: i32, name: &str, marks: [i32; NUM_SUBJECTS]) -> Self {
        let mut record = Self {
            id,
            name: name.chars().take(MAX_NAME_CHARS).collect(),
            ..Self::default()
        };
        record.set_marks(marks);
        record
    }

    pub fn marks(&self) -> &[i32; NUM_SUBJECTS] {
        &self.marks
    }

    pub fn average(&self) -> f64 {
        self.average
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn passed(&self) -> bool {
        self.average >= PASS_THRESHOLD
    }

    pub fn set_marks(&mut self, marks: [i32; NUM_SUBJECTS]) {
        self.marks = marks;
        self.average = average_of(&marks);
        self.grade = Grade::from_average(self.average);
    }
}

fn average_of(marks: &[i32]) -> f64 {
    if marks.is_empty() {
        return 0.0;
    }
    let sum: i64 = marks.iter().map(|&m| i64::from(m)).sum();
    sum as f64 / marks.len() as f64
}

// ---------------------------------------------------------------------------
// ClassStats
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassStats {
    pub total: usize,
    pub class_average: f64,
    pub highest: f64,
    pub lowest: f64,
    pub pass_count: usize,
    pub fail_count: usize,
}

impl ClassStats {
    /// Single pass over the records. `None` for an empty table.
    pub fn compute(records: &[StudentRecord]) -> Option<Self> {
        let first = records.first()?;
        let mut stats = Self {
            total: records.len(),
            class_average: 0.0,
            highest: first.average,
            lowest: first.average,
            pass_count: 0,
            fail_count: 0,
        };
        let mut sum = 0.0;
        for record in records {
            sum += record.average;
            if record.average > stats.highest {
                stats.highest = record.average;
            }
            if record.average < stats.lowest {
                stats.lowest = record.average;
            }
            if record.passed() {
                stats.pass_count += 1;
            } else {
                stats.fail_count += 1;
            }
        }
        stats.class_average = sum / records.len() as f64;
        Some(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_marks_grade_a() {
        let rec = StudentRecord::new(1, "Alice", [90, 85, 95]);
        assert_eq!(rec.average(), 90.0);
        assert_eq!(rec.grade(), Grade::A);
    }

    #[test]
    fn test_low_marks_grade_f() {
        let rec = StudentRecord::new(2, "Bob", [55, 60, 58]);
        assert!((rec.average() - 57.666_666).abs() < 1e-3);
        assert_eq!(rec.grade(), Grade::F);
        assert!(!rec.passed());
    }

    #[test]
    fn test_grade_boundaries_inclusive() {
        assert_eq!(StudentRecord::new(1, "d", [60, 60, 60]).grade(), Grade::D);
        assert_eq!(StudentRecord::new(1, "c", [70, 70, 70]).grade(), Grade::C);
        assert_eq!(StudentRecord::new(1, "b", [80, 80, 80]).grade(), Grade::B);
        assert_eq!(StudentRecord::new(1, "a", [90, 90, 90]).grade(), Grade::A);
        assert_eq!(Grade::from_average(59.99), Grade::F);
        assert_eq!(Grade::from_average(89.99), Grade::B);
    }

    #[test]
    fn test_set_marks_recomputes_derived_fields() {
        let mut rec = StudentRecord::new(3, "Carol", [50, 50, 50]);
        assert_eq!(rec.grade(), Grade::F);
        rec.set_marks([100, 95, 90]);
        assert_eq!(rec.average(), 95.0);
        assert_eq!(rec.grade(), Grade::A);
        assert_eq!(rec.marks(), &[100, 95, 90]);
    }

    #[test]
    fn test_name_truncated() {
        let long = "x".repeat(80);
        let rec = StudentRecord::new(4, &long, [0, 0, 0]);
        assert_eq!(rec.name.chars().count(), MAX_NAME_CHARS);
    }

    #[test]
    fn test_class_stats_empty() {
        assert!(ClassStats::compute(&[]).is_none());
    }

    #[test]
    fn test_class_stats_values() {
        let records = [
            StudentRecord::new(1, "a", [90, 90, 90]),
            StudentRecord::new(2, "b", [60, 60, 60]),
            StudentRecord::new(3, "c", [30, 30, 30]),
        ];
        let stats = ClassStats::compute(&records).unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.class_average, 60.0);
        assert_eq!(stats.highest, 90.0);
        assert_eq!(stats.lowest, 30.0);
        assert_eq!(stats.pass_count, 2);
        assert_eq!(stats.fail_count, 1);
    }
}
