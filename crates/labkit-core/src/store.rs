use crate::error::LabResult;
use crate::history::{HistoryEntry, HistoryStats};
use crate::student::{ClassStats, StudentRecord, NUM_SUBJECTS};

pub trait HistoryStore {
    // Mutation
    fn append(&mut self, entry: HistoryEntry);
    fn clear(&mut self);

    // Views
    fn entries(&self) -> &[HistoryEntry];
    fn capacity(&self) -> usize;

    fn len(&self) -> usize {
        self.entries().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Aggregates, 0.0 when empty
    fn average(&self) -> f64 {
        self.stats().average
    }

    fn max(&self) -> f64 {
        self.stats().max
    }

    fn min(&self) -> f64 {
        self.stats().min
    }

    fn stats(&self) -> HistoryStats {
        HistoryStats::from_entries(self.entries())
    }
}

pub trait StudentStore {
    // CRUD
    fn add(&mut self, record: StudentRecord) -> LabResult<()>;
    fn find_by_id(&self, id: i32) -> Option<&StudentRecord>;
    fn update_marks(&mut self, id: i32, marks: [i32; NUM_SUBJECTS])
        -> LabResult<&StudentRecord>;

    // Views
    fn records(&self) -> &[StudentRecord];
    fn capacity(&self) -> usize;

    fn len(&self) -> usize {
        self.records().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    // Ordering
    /// Stable descending sort by average. Returns the number of swaps made.
    fn sort_by_average_desc(&mut self) -> usize;

    /// Sorts the whole table, then returns the first `min(k, len)` records.
    fn top_performers(&mut self, k: usize) -> &[StudentRecord] {
        self.sort_by_average_desc();
        let n = k.min(self.len());
        &self.records()[..n]
    }

    // Stats
    fn statistics(&self) -> Option<ClassStats> {
        ClassStats::compute(self.records())
    }
}
