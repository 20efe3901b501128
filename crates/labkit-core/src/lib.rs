pub mod error;
pub mod history;
pub mod matrix;
pub mod store;
pub mod student;

pub use error::{LabError, LabResult};
pub use history::{HistoryEntry, HistoryStats, Operation};
pub use matrix::{Matrix, MAX_SIZE};
pub use store::{HistoryStore, StudentStore};
pub use student::{ClassStats, Grade, StudentRecord, MAX_NAME_CHARS, NUM_SUBJECTS, PASS_THRESHOLD};
