//! Fixed-size integer matrices.
//!
//! Every matrix owns a `MAX_SIZE x MAX_SIZE` backing grid; only the
//! `rows x cols` sub-rectangle starting at `[0][0]` is meaningful. Dimensions
//! are validated on construction, so a zero-sized matrix cannot exist.

use std::fmt;

use crate::error::{LabError, LabResult};

pub const MAX_SIZE: usize = 10;

/// Accept `1..=MAX_SIZE` on both axes.
pub fn check_dimensions(rows: usize, cols: usize) -> LabResult<()> {
    if rows == 0 || rows > MAX_SIZE || cols == 0 || cols > MAX_SIZE {
        return Err(LabError::InvalidDimensions { rows, cols });
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    cells: [[i32; MAX_SIZE]; MAX_SIZE],
}

impl Matrix {
    /// Zero-filled matrix of the given dimensions.
    pub fn new(rows: usize, cols: usize) -> LabResult<Self> {
        check_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: [[0; MAX_SIZE]; MAX_SIZE],
        })
    }

    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> LabResult<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut matrix = Self::new(rows.len(), cols)?;
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(LabError::InvalidDimensions {
                    rows: rows.len(),
                    cols: row.len(),
                });
            }
            matrix.cells[i][..cols].copy_from_slice(row);
        }
        Ok(matrix)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn set(&mut self, row: usize, col: usize, value: i32) -> LabResult<()> {
        if row >= self.rows || col >= self.cols {
            return Err(LabError::OutOfBounds { row, col });
        }
        self.cells[row][col] = value;
        Ok(())
    }

    /// Logical slice of row `i`. Panics if `i >= rows`.
    pub fn row(&self, i: usize) -> &[i32] {
        &self.cells[i][..self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[i32]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Change the logical dimensions and zero that region.
    pub fn reset(&mut self, rows: usize, cols: usize) -> LabResult<()> {
        check_dimensions(rows, cols)?;
        self.rows = rows;
        self.cols = cols;
        for row in self.cells.iter_mut().take(rows) {
            row[..cols].fill(0);
        }
        Ok(())
    }

    fn require_square(&self) -> LabResult<()> {
        if !self.is_square() {
            return Err(LabError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn require_same_dims(&self, other: &Self, op: &'static str) -> LabResult<()> {
        if self.dims() != other.dims() {
            return Err(LabError::DimensionMismatch {
                op,
                left: self.dims(),
                right: other.dims(),
            });
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Transforms
    // -----------------------------------------------------------------------

    pub fn add_into(&self, other: &Self, out: &mut Self) -> LabResult<()> {
        self.elementwise_into(other, out, "addition", i32::checked_add)
    }

    pub fn subtract_into(&self, other: &Self, out: &mut Self) -> LabResult<()> {
        self.elementwise_into(other, out, "subtraction", i32::checked_sub)
    }

    fn elementwise_into(
        &self,
        other: &Self,
        out: &mut Self,
        op: &'static str,
        f: fn(i32, i32) -> Option<i32>,
    ) -> LabResult<()> {
        self.require_same_dims(other, op)?;
        let mut staged = out.clone();
        staged.reset(self.rows, self.cols)?;
        for i in 0..self.rows {
            for j in 0..self.cols {
                staged.cells[i][j] =
                    f(self.cells[i][j], other.cells[i][j]).ok_or(LabError::Overflow(op))?;
            }
        }
        *out = staged;
        Ok(())
    }

    /// `self (r x n) * other (n x c)`, written into `out` as `r x c`.
    pub fn multiply_into(&self, other: &Self, out: &mut Self) -> LabResult<()> {
        if self.cols != other.rows {
            return Err(LabError::DimensionMismatch {
                op: "multiplication",
                left: self.dims(),
                right: other.dims(),
            });
        }
        let mut staged = out.clone();
        staged.reset(self.rows, other.cols)?;
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum: i32 = 0;
                for k in 0..self.cols {
                    sum = self.cells[i][k]
                        .checked_mul(other.cells[k][j])
                        .and_then(|p| sum.checked_add(p))
                        .ok_or(LabError::Overflow("multiplication"))?;
                }
                staged.cells[i][j] = sum;
            }
        }
        *out = staged;
        Ok(())
    }

    pub fn add(&self, other: &Self) -> LabResult<Self> {
        let mut out = self.clone();
        self.add_into(other, &mut out)?;
        Ok(out)
    }

    pub fn subtract(&self, other: &Self) -> LabResult<Self> {
        let mut out = self.clone();
        self.subtract_into(other, &mut out)?;
        Ok(out)
    }

    pub fn multiply(&self, other: &Self) -> LabResult<Self> {
        let mut out = self.clone();
        self.multiply_into(other, &mut out)?;
        Ok(out)
    }

    pub fn transpose(&self) -> Self {
        let mut out = Self {
            rows: self.cols,
            cols: self.rows,
            cells: [[0; MAX_SIZE]; MAX_SIZE],
        };
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.cells[j][i] = self.cells[i][j];
            }
        }
        out
    }

    /// Sum of the main diagonal.
    pub fn trace(&self) -> LabResult<i32> {
        self.require_square()?;
        (0..self.rows).try_fold(0i32, |acc, i| {
            acc.checked_add(self.cells[i][i])
                .ok_or(LabError::Overflow("trace"))
        })
    }

    pub fn max_element(&self) -> i32 {
        let mut max = self.cells[0][0];
        for row in self.iter_rows() {
            for &value in row {
                if value > max {
                    max = value;
                }
            }
        }
        max
    }

    /// Stops at the first asymmetric pair.
    pub fn is_symmetric(&self) -> LabResult<bool> {
        self.require_square()?;
        for i in 0..self.rows {
            for j in (i + 1)..self.cols {
                if self.cells[i][j] != self.cells[j][i] {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Grid text with each cell right-aligned in `width` columns plus a space.
    pub fn format_grid(&self, width: usize) -> String {
        let mut out = String::new();
        for row in self.iter_rows() {
            for value in row {
                out.push_str(&format!("{value:>width$} "));
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Matrix {
    /// The full `MAX_SIZE x MAX_SIZE` grid, zeroed.
    fn default() -> Self {
        Self {
            rows: MAX_SIZE,
            cols: MAX_SIZE,
            cells: [[0; MAX_SIZE]; MAX_SIZE],
        }
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.dims() == other.dims() && self.iter_rows().eq(other.iter_rows())
    }
}

impl Eq for Matrix {}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_grid(4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m<R: AsRef<[i32]>>(rows: &[R]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_dimension_bounds() {
        assert!(check_dimensions(1, 1).is_ok());
        assert!(check_dimensions(MAX_SIZE, MAX_SIZE).is_ok());
        assert!(check_dimensions(0, 3).is_err());
        assert!(check_dimensions(3, 0).is_err());
        assert!(check_dimensions(MAX_SIZE + 1, 1).is_err());
        assert!(Matrix::new(0, 0).is_err());
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Matrix::from_rows(&[vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(err, LabError::InvalidDimensions { .. }));
        let empty: [[i32; 0]; 0] = [];
        assert!(Matrix::from_rows(&empty).is_err());
    }

    #[test]
    fn test_set_bounds() {
        let mut mat = Matrix::new(2, 3).unwrap();
        mat.set(1, 2, 7).unwrap();
        assert_eq!(mat.row(1), &[0, 0, 7]);
        assert_eq!(
            mat.set(2, 0, 1),
            Err(LabError::OutOfBounds { row: 2, col: 0 })
        );
        assert_eq!(
            mat.set(0, 3, 1),
            Err(LabError::OutOfBounds { row: 0, col: 3 })
        );
    }

    #[test]
    fn test_add_and_subtract() {
        let a = m(&[[1, 2], [3, 4]]);
        let b = m(&[[10, 20], [30, 40]]);
        assert_eq!(a.add(&b).unwrap(), m(&[[11, 22], [33, 44]]));
        assert_eq!(b.subtract(&a).unwrap(), m(&[[9, 18], [27, 36]]));
    }

    #[test]
    fn test_add_dimension_mismatch() {
        let a = m(&[[1, 2]]);
        let b = m(&[[1], [2]]);
        let err = a.add(&b).unwrap_err();
        assert!(matches!(err, LabError::DimensionMismatch { op: "addition", .. }));
    }

    #[test]
    fn test_mismatch_leaves_output_untouched() {
        let a = m(&[[1, 2]]);
        let b = m(&[[1, 2, 3]]);
        let mut out = m(&[[9, 9]]);
        assert!(a.subtract_into(&b, &mut out).is_err());
        assert_eq!(out, m(&[[9, 9]]));
    }

    #[test]
    fn test_into_resizes_previous_output() {
        let a = m(&[[1, 2], [3, 4]]);
        let mut out = m(&[[9, 9, 9], [9, 9, 9], [9, 9, 9]]);
        a.add_into(&a, &mut out).unwrap();
        assert_eq!(out, m(&[[2, 4], [6, 8]]));

        a.multiply_into(&m(&[[1], [1]]), &mut out).unwrap();
        assert_eq!(out, m(&[[3], [7]]));
    }

    #[test]
    fn test_multiply_2x3_by_3x2() {
        let a = m(&[[1, 2, 3], [4, 5, 6]]);
        let b = m(&[[7, 8], [9, 10], [11, 12]]);
        let result = a.multiply(&b).unwrap();
        assert_eq!(result.dims(), (2, 2));
        assert_eq!(result, m(&[[58, 64], [139, 154]]));
    }

    #[test]
    fn test_multiply_inner_mismatch() {
        let a = m(&[[1, 2, 3]]);
        let b = m(&[[1, 2, 3]]);
        assert!(matches!(
            a.multiply(&b),
            Err(LabError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_multiply_overflow() {
        let a = m(&[[i32::MAX, 1]]);
        let b = m(&[[2], [1]]);
        assert_eq!(
            a.multiply(&b),
            Err(LabError::Overflow("multiplication"))
        );
    }

    #[test]
    fn test_transpose_swaps_dims() {
        let a = m(&[[1, 2, 3], [4, 5, 6]]);
        let t = a.transpose();
        assert_eq!(t.dims(), (3, 2));
        assert_eq!(t, m(&[[1, 4], [2, 5], [3, 6]]));
    }

    #[test]
    fn test_transpose_is_self_inverse() {
        for rows in 1..=MAX_SIZE {
            for cols in 1..=MAX_SIZE {
                let mut mat = Matrix::new(rows, cols).unwrap();
                for i in 0..rows {
                    for j in 0..cols {
                        mat.set(i, j, (i * 31 + j * 7) as i32 - 40).unwrap();
                    }
                }
                assert_eq!(mat.transpose().transpose(), mat);
            }
        }
    }

    #[test]
    fn test_trace() {
        let a = m(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(a.trace().unwrap(), 15);
        let rect = m(&[[1, 2]]);
        assert_eq!(rect.trace(), Err(LabError::NotSquare { rows: 1, cols: 2 }));
    }

    #[test]
    fn test_max_element() {
        assert_eq!(m(&[[-5, -2], [-9, -3]]).max_element(), -2);
        assert_eq!(m(&[[4]]).max_element(), 4);
        assert_eq!(m(&[[1, 2, 30], [4, 5, 6]]).max_element(), 30);
    }

    #[test]
    fn test_symmetric_cases() {
        assert!(m(&[[7]]).is_symmetric().unwrap());
        assert!(m(&[[1, 0, 0], [0, 1, 0], [0, 0, 1]]).is_symmetric().unwrap());
        let sym = m(&[[1, 2, 3], [2, 4, 5], [3, 5, 6]]);
        assert!(sym.is_symmetric().unwrap());
        assert_eq!(sym.transpose(), sym);
        let asym = m(&[[1, 2, 3], [2, 4, 5], [3, 6, 6]]);
        assert!(!asym.is_symmetric().unwrap());
        assert!(m(&[[1, 2]]).is_symmetric().is_err());
    }

    #[test]
    fn test_reset_zeroes_region() {
        let mut mat = m(&[[1, 2], [3, 4]]);
        mat.reset(1, 2).unwrap();
        assert_eq!(mat, m(&[[0, 0]]));
        assert!(mat.reset(0, 2).is_err());
    }

    #[test]
    fn test_equality_ignores_backing_cells() {
        let mut shrunk = m(&[[1, 2], [3, 4]]);
        shrunk.reset(1, 1).unwrap();
        shrunk.set(0, 0, 5).unwrap();
        let mut other = Matrix::new(1, 1).unwrap();
        other.set(0, 0, 5).unwrap();
        assert_eq!(shrunk, other);
    }

    #[test]
    fn test_format_grid() {
        let a = m(&[[1, -20], [300, 4]]);
        assert_eq!(a.format_grid(4), "   1  -20 \n 300    4 \n");
        assert_eq!(a.to_string(), a.format_grid(4));
    }
}
