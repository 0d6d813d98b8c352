use crate::Entropy;
use crate::Matrix;
use crate::matrix::squared_distances;

/// Quadratic ground cost `C[i, j] = (s_i - s_j)²`.
pub fn build_cost_matrix(space: &[f64]) -> Matrix {
    squared_distances(space)
}

/// Gibbs kernel `exp(-C / epsilon)` of the entropic relaxation.
pub fn sinkhorn_kernel(cost: &Matrix, epsilon: Entropy) -> Matrix {
    cost.map(|c| (-c / epsilon).exp())
}
