use serde::{Serialize, Deserialize};

use crate::error::{NetworkError, Result};

/// Dense row-major matrix of `f64`.
///
/// `data[i][j]` is the entry at row `i`, column `j`. Every operation that
/// combines two operands checks their shapes and returns
/// `NetworkError::ShapeMismatch` instead of panicking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Builds a matrix from rows. All rows must have the same length.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let rows = data.len();
        let cols = data.first().map_or(0, |row| row.len());
        let matrix = Matrix { rows, cols, data };
        matrix.check_data()?;
        Ok(matrix)
    }

    /// Checks that `data` really holds `rows` rows of `cols` entries each.
    ///
    /// The fields are public, so a matrix built by hand or deserialized can
    /// declare a shape its data does not have.
    pub fn check_data(&self) -> Result<()> {
        if self.data.len() != self.rows {
            return Err(NetworkError::ShapeMismatch {
                op: "check_data",
                left: self.shape(),
                right: (self.data.len(), self.cols),
            });
        }
        if let Some(bad) = self.data.iter().find(|row| row.len() != self.cols) {
            return Err(NetworkError::ShapeMismatch {
                op: "check_data",
                left: self.shape(),
                right: (1, bad.len()),
            });
        }
        Ok(())
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Matrix-vector product `self · v`.
    pub fn mul_vec(&self, v: &[f64]) -> Result<Vec<f64>> {
        if v.len() != self.cols {
            return Err(NetworkError::ShapeMismatch {
                op: "mul_vec",
                left: self.shape(),
                right: (v.len(), 1),
            });
        }

        Ok(self
            .data
            .iter()
            .map(|row| row.iter().zip(v).map(|(w, x)| w * x).sum())
            .collect())
    }

    /// Transposed matrix-vector product `selfᵀ · v`, without materialising the transpose.
    pub fn transpose_mul_vec(&self, v: &[f64]) -> Result<Vec<f64>> {
        if v.len() != self.rows {
            return Err(NetworkError::ShapeMismatch {
                op: "transpose_mul_vec",
                left: (self.cols, self.rows),
                right: (v.len(), 1),
            });
        }

        let mut res = vec![0.0; self.cols];
        for (row, &scale) in self.data.iter().zip(v) {
            for (acc, &w) in res.iter_mut().zip(row) {
                *acc += w * scale;
            }
        }
        Ok(res)
    }

    /// Outer product `a ⊗ bᵀ`, an (a.len() × b.len()) matrix.
    pub fn outer(a: &[f64], b: &[f64]) -> Matrix {
        Matrix {
            rows: a.len(),
            cols: b.len(),
            data: a
                .iter()
                .map(|&x| b.iter().map(|&y| x * y).collect())
                .collect(),
        }
    }

    /// `self += factor * other`, elementwise.
    pub fn add_scaled(&mut self, other: &Matrix, factor: f64) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(NetworkError::ShapeMismatch {
                op: "add_scaled",
                left: self.shape(),
                right: other.shape(),
            });
        }

        for (row, other_row) in self.data.iter_mut().zip(&other.data) {
            for (x, &y) in row.iter_mut().zip(other_row) {
                *x += factor * y;
            }
        }
        Ok(())
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}
