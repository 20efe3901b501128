use tracing::{debug, warn};

use labkit_core::{LabError, LabResult, StudentRecord, StudentStore, NUM_SUBJECTS};

use crate::arena::FixedArena;

pub const DEFAULT_STUDENT_CAPACITY: usize = 50;

/// Insertion-ordered student records. Ids are not required to be unique;
/// lookups return the first match in the current order.
#[derive(Debug, Clone)]
pub struct StudentTable {
    records: FixedArena<StudentRecord>,
}

impl StudentTable {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: FixedArena::new(capacity),
        }
    }

    fn position(&self, id: i32) -> Option<usize> {
        self.records.as_slice().iter().position(|r| r.id == id)
    }
}

impl Default for StudentTable {
    fn default() -> Self {
        Self::new(DEFAULT_STUDENT_CAPACITY)
    }
}

impl StudentStore for StudentTable {
    fn add(&mut self, record: StudentRecord) -> LabResult<()> {
        if self.records.is_full() {
            warn!("student table full, rejecting id {}", record.id);
            return Err(LabError::TableFull(self.records.capacity()));
        }
        self.records.push(record)
    }

    fn find_by_id(&self, id: i32) -> Option<&StudentRecord> {
        self.position(id).and_then(|i| self.records.get(i))
    }

    fn update_marks(
        &mut self,
        id: i32,
        marks: [i32; NUM_SUBJECTS],
    ) -> LabResult<&StudentRecord> {
        let index = self.position(id).ok_or(LabError::NotFound(id))?;
        let record = &mut self.records.as_mut_slice()[index];
        record.set_marks(marks);
        Ok(&*record)
    }

    fn records(&self) -> &[StudentRecord] {
        self.records.as_slice()
    }

    fn capacity(&self) -> usize {
        self.records.capacity()
    }

    /// Bubble sort that only swaps strictly smaller-before-larger pairs, so
    /// equal averages keep their relative order. Stops after a clean pass.
    fn sort_by_average_desc(&mut self) -> usize {
        let records = self.records.as_mut_slice();
        let n = records.len();
        let mut swaps = 0;
        for pass in 0..n.saturating_sub(1) {
            let mut swapped = false;
            for j in 0..n - pass - 1 {
                if records[j].average() < records[j + 1].average() {
                    records.swap(j, j + 1);
                    swapped = true;
                    swaps += 1;
                }
            }
            if !swapped {
                break;
            }
        }
        debug!("sorted {n} students by average, {swaps} swaps");
        swaps
    }
}
