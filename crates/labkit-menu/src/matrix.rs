use std::io::{self, BufRead, Write};

use labkit_core::matrix::check_dimensions;
use labkit_core::{LabResult, Matrix};
use labkit_store::MatrixBuffers;

use crate::console::Console;
use crate::protocol::Reply;
use crate::session::{Program, Step};

const MENU: &str = "\n=== Menu ===\n\
1. Matrix Addition\n\
2. Matrix Subtraction\n\
3. Matrix Multiplication\n\
4. Matrix Transpose\n\
5. Diagonal Sum\n\
6. Find Maximum Element\n\
7. Check Symmetric Matrix\n\
0. Exit\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
}

impl BinaryOp {
    fn title(self) -> &'static str {
        match self {
            Self::Add => "Addition",
            Self::Subtract => "Subtraction",
            Self::Multiply => "Multiplication",
        }
    }

    /// Shape check done before any element is read.
    fn accepts(self, a: (usize, usize), b: (usize, usize)) -> Result<(), &'static str> {
        match self {
            Self::Add | Self::Subtract if a != b => {
                Err("Matrices must have same dimensions for addition/subtraction!\n")
            }
            Self::Multiply if a.1 != b.0 => Err(
                "Invalid dimensions for multiplication!\nColumns of A must equal rows of B.\n",
            ),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixChoice {
    Binary(BinaryOp),
    Transpose,
    Trace,
    MaxElement,
    Symmetric,
}

const CHOICES: [(i64, MatrixChoice); 7] = [
    (1, MatrixChoice::Binary(BinaryOp::Add)),
    (2, MatrixChoice::Binary(BinaryOp::Subtract)),
    (3, MatrixChoice::Binary(BinaryOp::Multiply)),
    (4, MatrixChoice::Transpose),
    (5, MatrixChoice::Trace),
    (6, MatrixChoice::MaxElement),
    (7, MatrixChoice::Symmetric),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixCommand {
    Binary { op: BinaryOp, a: Matrix, b: Matrix },
    Transpose(Matrix),
    Trace(Matrix),
    MaxElement(Matrix),
    Symmetric(Matrix),
}

/// Matrix program state: the A/B/Result buffers and the print cell width.
pub struct MatrixLab {
    buffers: MatrixBuffers,
    cell_width: usize,
}

impl MatrixLab {
    pub fn new(cell_width: usize) -> Self {
        Self {
            buffers: MatrixBuffers::new(),
            cell_width,
        }
    }

    pub fn buffers(&self) -> &MatrixBuffers {
        &self.buffers
    }

    fn display(&self, matrix: &Matrix, name: char) -> String {
        format!("\nMatrix {name}:\n{}", matrix.format_grid(self.cell_width))
    }

    fn binary(&mut self, op: BinaryOp, a: Matrix, b: Matrix) -> Reply {
        self.buffers.load_a(a);
        self.buffers.load_b(b);
        let result = match op {
            BinaryOp::Add => self.buffers.add(),
            BinaryOp::Subtract => self.buffers.subtract(),
            BinaryOp::Multiply => self.buffers.multiply(),
        };
        match result.cloned() {
            Ok(r) => Reply::text(format!(
                "\nResult of {}:\n{}",
                op.title(),
                self.display(&r, 'R')
            )),
            Err(e) => Reply::error(format!("Error: {e}\n")),
        }
    }
}

impl Default for MatrixLab {
    fn default() -> Self {
        Self::new(4)
    }
}

/// Read `rows cols` and validate; `None` means the input was out of range.
fn read_dims<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    message: &str,
) -> io::Result<Option<(usize, usize)>> {
    let values = console.prompt_ints(message, 2)?;
    Ok(to_dims(values[0], values[1]).ok())
}

fn read_size<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<Option<usize>> {
    let size = console.prompt_int("Enter size of square matrix: ")?;
    Ok(to_dims(size, size).ok().map(|(n, _)| n))
}

fn to_dims(rows: i64, cols: i64) -> LabResult<(usize, usize)> {
    let rows = usize::try_from(rows).unwrap_or(0);
    let cols = usize::try_from(cols).unwrap_or(0);
    check_dimensions(rows, cols)?;
    Ok((rows, cols))
}

fn read_matrix<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    (rows, cols): (usize, usize),
    name: char,
) -> io::Result<Matrix> {
    console.write(&format!(
        "\nEnter elements for Matrix {name} ({rows}x{cols}):\n"
    ))?;
    let mut matrix = Matrix::new(rows, cols)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    for i in 0..rows {
        for j in 0..cols {
            let value = console.prompt_int(&format!("Element [{i}][{j}]: "))?;
            let value = value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
            matrix
                .set(i, j, value)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        }
    }
    Ok(matrix)
}

impl Program for MatrixLab {
    type Choice = MatrixChoice;
    type Command = MatrixCommand;

    fn banner(&self) -> &'static str {
        "=== Matrix Operations Processor ===\nWelcome to the matrix calculator!\n"
    }

    fn menu(&self) -> &'static str {
        MENU
    }

    fn farewell(&self) -> &'static str {
        "Exiting program. Thank you!\n"
    }

    fn lookup(&self, number: i64) -> Option<MatrixChoice> {
        CHOICES
            .iter()
            .find(|(n, _)| *n == number)
            .map(|(_, choice)| *choice)
    }

    fn gather<R: BufRead, W: Write>(
        &self,
        choice: MatrixChoice,
        console: &mut Console<R, W>,
    ) -> io::Result<Step<MatrixCommand>> {
        let invalid_dims = || Step::Reject(Reply::error("Invalid dimensions!\n"));
        let invalid_size = || Step::Reject(Reply::error("Invalid size!\n"));

        let command = match choice {
            MatrixChoice::Binary(op) => {
                let Some(dims_a) =
                    read_dims(console, "Enter dimensions for Matrix A (rows cols): ")?
                else {
                    return Ok(invalid_dims());
                };
                let Some(dims_b) =
                    read_dims(console, "Enter dimensions for Matrix B (rows cols): ")?
                else {
                    return Ok(invalid_dims());
                };
                if let Err(message) = op.accepts(dims_a, dims_b) {
                    return Ok(Step::Reject(Reply::error(message)));
                }
                let a = read_matrix(console, dims_a, 'A')?;
                let b = read_matrix(console, dims_b, 'B')?;
                MatrixCommand::Binary { op, a, b }
            }
            MatrixChoice::Transpose | MatrixChoice::MaxElement => {
                let Some(dims) = read_dims(console, "Enter dimensions for Matrix (rows cols): ")?
                else {
                    return Ok(invalid_dims());
                };
                let a = read_matrix(console, dims, 'A')?;
                if choice == MatrixChoice::Transpose {
                    MatrixCommand::Transpose(a)
                } else {
                    MatrixCommand::MaxElement(a)
                }
            }
            MatrixChoice::Trace | MatrixChoice::Symmetric => {
                let Some(size) = read_size(console)? else {
                    return Ok(invalid_size());
                };
                let a = read_matrix(console, (size, size), 'A')?;
                if choice == MatrixChoice::Trace {
                    MatrixCommand::Trace(a)
                } else {
                    MatrixCommand::Symmetric(a)
                }
            }
        };
        Ok(Step::Run(command))
    }

    fn execute(&mut self, command: MatrixCommand) -> Reply {
        match command {
            MatrixCommand::Binary { op, a, b } => self.binary(op, a, b),
            MatrixCommand::Transpose(a) => {
                self.buffers.load_a(a);
                let t = self.buffers.transpose().clone();
                Reply::text(format!("\nTranspose of Matrix:\n{}", self.display(&t, 'T')))
            }
            MatrixCommand::Trace(a) => {
                self.buffers.load_a(a);
                match self.buffers.trace() {
                    Ok(sum) => Reply::text(format!("\nDiagonal sum: {sum}\n")),
                    Err(e) => Reply::error(format!("Error: {e}\n")),
                }
            }
            MatrixCommand::MaxElement(a) => {
                self.buffers.load_a(a);
                Reply::text(format!(
                    "\nMaximum element: {}\n",
                    self.buffers.max_element()
                ))
            }
            MatrixCommand::Symmetric(a) => {
                self.buffers.load_a(a);
                match self.buffers.is_symmetric() {
                    Ok(true) => Reply::text("\nMatrix is symmetric.\n"),
                    Ok(false) => Reply::text("\nMatrix is not symmetric.\n"),
                    Err(e) => Reply::error(format!("Error: {e}\n")),
                }
            }
        }
    }
}
