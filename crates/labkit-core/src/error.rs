use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabError {
    #[error("invalid dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("dimension mismatch for {op}: {left:?} vs {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    #[error("cell [{row}][{col}] is outside the matrix")]
    OutOfBounds { row: usize, col: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow during {0}")]
    Overflow(&'static str),

    #[error("student not found: {0}")]
    NotFound(i32),

    #[error("table is full ({0} records)")]
    TableFull(usize),

    #[error("config error: {0}")]
    Config(String),
}

pub type LabResult<T> = Result<T, LabError>;
