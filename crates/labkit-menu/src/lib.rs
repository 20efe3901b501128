pub mod calculator;
pub mod console;
pub mod grades;
pub mod matrix;
pub mod protocol;
pub mod session;

pub use calculator::Calculator;
pub use console::Console;
pub use grades::Gradebook;
pub use matrix::MatrixLab;
pub use protocol::Reply;
pub use session::{run_session, Program, Step};
