use tracing::debug;

use labkit_core::{LabResult, Matrix};

/// The A, B and Result buffers of the matrix program.
///
/// Binary operations validate operand dimensions before touching `result`;
/// on error the previous result is left as it was.
#[derive(Debug, Clone, Default)]
pub struct MatrixBuffers {
    a: Matrix,
    b: Matrix,
    result: Matrix,
}

impl MatrixBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn a(&self) -> &Matrix {
        &self.a
    }

    pub fn b(&self) -> &Matrix {
        &self.b
    }

    pub fn result(&self) -> &Matrix {
        &self.result
    }

    pub fn load_a(&mut self, matrix: Matrix) {
        self.a = matrix;
    }

    pub fn load_b(&mut self, matrix: Matrix) {
        self.b = matrix;
    }

    pub fn add(&mut self) -> LabResult<&Matrix> {
        self.a.add_into(&self.b, &mut self.result)?;
        debug!("A + B -> {:?}", self.result.dims());
        Ok(&self.result)
    }

    pub fn subtract(&mut self) -> LabResult<&Matrix> {
        self.a.subtract_into(&self.b, &mut self.result)?;
        debug!("A - B -> {:?}", self.result.dims());
        Ok(&self.result)
    }

    pub fn multiply(&mut self) -> LabResult<&Matrix> {
        self.a.multiply_into(&self.b, &mut self.result)?;
        debug!("A * B -> {:?}", self.result.dims());
        Ok(&self.result)
    }

    pub fn transpose(&mut self) -> &Matrix {
        self.result = self.a.transpose();
        &self.result
    }

    pub fn trace(&self) -> LabResult<i32> {
        self.a.trace()
    }

    pub fn max_element(&self) -> i32 {
        self.a.max_element()
    }

    pub fn is_symmetric(&self) -> LabResult<bool> {
        self.a.is_symmetric()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labkit_core::{LabError, MAX_SIZE};

    fn m<R: AsRef<[i32]>>(rows: &[R]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_starts_zeroed() {
        let buffers = MatrixBuffers::new();
        assert_eq!(buffers.a().dims(), (MAX_SIZE, MAX_SIZE));
        assert_eq!(buffers.max_element(), 0);
        assert!(buffers.is_symmetric().unwrap());
    }

    #[test]
    fn test_multiply_into_result() {
        let mut buffers = MatrixBuffers::new();
        buffers.load_a(m(&[[1, 2, 3], [4, 5, 6]]));
        buffers.load_b(m(&[[7, 8], [9, 10], [11, 12]]));
        let result = buffers.multiply().unwrap();
        assert_eq!(result, &m(&[[58, 64], [139, 154]]));
    }

    #[test]
    fn test_result_region_follows_last_operation() {
        let mut buffers = MatrixBuffers::new();
        buffers.load_a(m(&[[1, 2, 3], [4, 5, 6]]));
        buffers.load_b(m(&[[1, 1, 1], [1, 1, 1]]));
        assert_eq!(buffers.add().unwrap().dims(), (2, 3));

        buffers.load_b(m(&[[1], [0], [0]]));
        assert_eq!(buffers.multiply().unwrap(), &m(&[[1], [4]]));
    }

    #[test]
    fn test_failed_op_keeps_previous_result() {
        let mut buffers = MatrixBuffers::new();
        buffers.load_a(m(&[[1, 2]]));
        buffers.load_b(m(&[[3, 4]]));
        buffers.add().unwrap();

        buffers.load_b(m(&[[1], [2], [3]]));
        let err = buffers.subtract().unwrap_err();
        assert!(matches!(err, LabError::DimensionMismatch { .. }));
        assert_eq!(buffers.result(), &m(&[[4, 6]]));
    }

    #[test]
    fn test_transpose_and_square_queries() {
        let mut buffers = MatrixBuffers::new();
        buffers.load_a(m(&[[1, 2], [2, 5]]));
        assert_eq!(buffers.transpose(), &m(&[[1, 2], [2, 5]]));
        assert_eq!(buffers.trace().unwrap(), 6);
        assert_eq!(buffers.max_element(), 5);
        assert!(buffers.is_symmetric().unwrap());
        assert_eq!(buffers.b().dims(), (MAX_SIZE, MAX_SIZE));
    }
}
