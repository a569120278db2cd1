//! Dense row-major matrix.

use crate::error::{ContainerError, ContainerResult};

/// A dense 2D matrix of `f64`s, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix2D {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix2D {
    /// Creates a zero matrix of the given shape.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, data: vec![0.0; rows * cols] }
    }

    /// Creates the n-by-n identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::new(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Creates a matrix from nested rows. Every row must have the same
    /// length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> ContainerResult<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if let Some(bad) = rows.iter().find(|r| r.len() != cols) {
            return Err(ContainerError::IndexOutOfBounds { index: bad.len(), length: cols });
        }
        let row_count = rows.len();
        Ok(Self { rows: row_count, cols, data: rows.into_iter().flatten().collect() })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        (row < self.rows && col < self.cols).then(|| self.data[row * self.cols + col])
    }

    /// Writes the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> ContainerResult<()> {
        if row >= self.rows || col >= self.cols {
            return Err(ContainerError::IndexOutOfBounds {
                index: row * self.cols + col,
                length: self.data.len(),
            });
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Element-wise sum; `None` on shape mismatch.
    pub fn add(&self, other: &Self) -> Option<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return None;
        }
        let data = self.data.iter().zip(&other.data).map(|(a, b)| a + b).collect();
        Some(Self { rows: self.rows, cols: self.cols, data })
    }

    /// Every element multiplied by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|a| a * factor).collect(),
        }
    }

    /// Matrix product; `None` when the inner dimensions disagree.
    pub fn multiply(&self, other: &Self) -> Option<Self> {
        if self.cols != other.rows {
            return None;
        }
        let mut out = Self::new(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self.data[i * self.cols + k];
                if a == 0.0 {
                    continue;
                }
                for j in 0..other.cols {
                    out.data[i * other.cols + j] += a * other.data[k * other.cols + j];
                }
            }
        }
        Some(out)
    }

    /// The transpose.
    pub fn transpose(&self) -> Self {
        let mut out = Self::new(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_and_access() {
        let mut m = Matrix2D::new(2, 3);
        assert_eq!(m.get(1, 2), Some(0.0));
        m.set(1, 2, 7.0).unwrap();
        assert_eq!(m.get(1, 2), Some(7.0));
        assert_eq!(m.get(2, 0), None);
        assert!(m.set(2, 0, 1.0).is_err());

        assert!(Matrix2D::from_rows(vec![vec![1.0], vec![1.0, 2.0]]).is_err());
    }

    #[test]
    fn test_identity_multiply() {
        let m = Matrix2D::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let id = Matrix2D::identity(2);
        assert_eq!(m.multiply(&id), Some(m.clone()));
        assert_eq!(id.multiply(&m), Some(m.clone()));

        let product = m.multiply(&m).unwrap();
        assert_eq!(product, Matrix2D::from_rows(vec![vec![7.0, 10.0], vec![15.0, 22.0]]).unwrap());
    }

    #[test]
    fn test_add_scale_transpose() {
        let m = Matrix2D::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let doubled = m.scale(2.0);
        assert_eq!(m.add(&m), Some(doubled.clone()));
        assert_eq!(m.add(&Matrix2D::new(3, 2)), None);

        let t = m.transpose();
        assert_eq!(t.rows(), 3);
        assert_eq!(t.get(2, 1), Some(6.0));
        assert_eq!(t.transpose(), m);
    }
}
