use crate::Energy;
use rayon::prelude::*;

/// Dense row-major matrix of `f64`.
///
/// Kernel, cost, Gibbs, and transport-plan matrices are all small
/// (one row per measurable outcome), so a flat `Vec` with explicit
/// shape is all we need. Construction fills rows in parallel.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Builds a matrix by evaluating `f(i, j)` at every entry.
    pub fn from_fn<F>(rows: usize, cols: usize, f: F) -> Self
    where
        F: Fn(usize, usize) -> f64 + Sync,
    {
        let mut data = vec![0.; rows * cols];
        if cols > 0 {
            data.par_chunks_mut(cols)
                .enumerate()
                .for_each(|(i, row)| {
                    row.iter_mut()
                        .enumerate()
                        .for_each(|(j, x)| *x = f(i, j))
                });
        }
        Self { rows, cols, data }
    }
    pub fn zeroes(rows: usize, cols: usize) -> Self {
        Self::from_fn(rows, cols, |_, _| 0.)
    }
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { 1. } else { 0. })
    }
    /// Rank-one matrix `u vᵀ`.
    pub fn outer(u: &[f64], v: &[f64]) -> Self {
        Self::from_fn(u.len(), v.len(), |i, j| u[i] * v[j])
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.cols + j]
    }
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().copied()
    }

    /// Applies `f` to every entry.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().copied().map(f).collect(),
        }
    }
    /// Combines two same-shaped matrices entrywise.
    pub fn zip<F>(&self, other: &Self, f: F) -> Self
    where
        F: Fn(f64, f64) -> f64,
    {
        debug_assert!(self.rows == other.rows && self.cols == other.cols);
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| f(*a, *b))
                .collect(),
        }
    }
    /// Matrix-vector product `M x`.
    pub fn apply(&self, x: &[f64]) -> Vec<f64> {
        debug_assert!(x.len() == self.cols);
        (0..self.rows)
            .map(|i| self.row(i).iter().zip(x).map(|(m, x)| m * x).sum())
            .collect()
    }
    /// Transposed matrix-vector product `Mᵀ x`.
    pub fn apply_transpose(&self, x: &[f64]) -> Vec<f64> {
        debug_assert!(x.len() == self.rows);
        let mut y = vec![0.; self.cols];
        for (i, xi) in x.iter().enumerate() {
            for (yj, m) in y.iter_mut().zip(self.row(i)) {
                *yj += m * xi;
            }
        }
        y
    }
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        self.is_square()
            && (0..self.rows)
                .flat_map(|i| (0..i).map(move |j| (i, j)))
                .all(|(i, j)| (self.get(i, j) - self.get(j, i)).abs() <= tolerance)
    }
}

/// Pairwise squared distances `(s_i - s_j)²` over a one-dimensional support.
pub fn squared_distances(space: &[f64]) -> Matrix {
    Matrix::from_fn(space.len(), space.len(), |i, j| {
        let d: Energy = space[i] - space[j];
        d * d
    })
}

impl From<Vec<Vec<f64>>> for Matrix {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        debug_assert!(rows.iter().all(|r| r.len() == cols), "ragged rows");
        Self {
            rows: rows.len(),
            cols,
            data: rows.into_iter().flatten().collect(),
        }
    }
}
