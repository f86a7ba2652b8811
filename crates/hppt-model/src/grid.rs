//! Dense row-major 2-D array used for the (Q, E) maps.

use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::ops::Index;

/// An `rows x cols` grid of `f64`, indexed `[(row, col)]`.
///
/// NaN marks an undefined cell and is serialized as `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2d {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl Grid2d {
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut values = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                values.push(f(row, col));
            }
        }
        Self { rows, cols, values }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.values[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.values[start..start + self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.cols.max(1)).take(self.rows)
    }

    /// All cells in row-major order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of cells holding a finite value.
    pub fn finite_count(&self) -> usize {
        self.values.iter().filter(|value| value.is_finite()).count()
    }

    /// Smallest and largest finite value, or `None` when every cell is NaN.
    pub fn finite_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .filter(|value| value.is_finite())
            .fold(None, |range, value| match range {
                None => Some((value, value)),
                Some((low, high)) => Some((low.min(value), high.max(value))),
            })
    }
}

impl Index<(usize, usize)> for Grid2d {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "grid index ({row}, {col}) out of bounds for {}x{}",
            self.rows,
            self.cols
        );
        &self.values[row * self.cols + col]
    }
}

impl Serialize for Grid2d {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows))?;
        for row in self.iter_rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}
