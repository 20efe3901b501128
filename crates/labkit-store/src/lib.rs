pub mod arena;
pub mod buffers;
pub mod ledger;
pub mod table;

pub use arena::FixedArena;
pub use buffers::MatrixBuffers;
pub use ledger::{BoundedLedger, DEFAULT_HISTORY_CAPACITY};
pub use table::{StudentTable, DEFAULT_STUDENT_CAPACITY};
