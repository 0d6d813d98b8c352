//! Radial basis function kernels over a one-dimensional outcome space.
use crate::Energy;
use crate::Entropy;
use crate::Error;
use crate::Matrix;
use crate::Probability;
use crate::Result;
use crate::matrix::squared_distances;

/// `exp(-gamma (x - y)²)`
pub fn rbf_kernel(x: f64, y: f64, gamma: Entropy) -> Energy {
    (-gamma * (x - y) * (x - y)).exp()
}

/// Gram matrix averaged over several RBF bandwidths.
///
/// A single bandwidth saturates or vanishes depending on how the spread
/// of `space` compares to `1/gamma`; averaging a handful of them keeps
/// the kernel informative across scales. The result is symmetric, positive
/// semi-definite, and bounded by 1 with ones on the diagonal.
pub fn compute_kernel_matrix(space: &[f64], gammas: &[Entropy]) -> Result<Matrix> {
    if gammas.is_empty() {
        return Err(Error::Dimension {
            expected: 1,
            found: 0,
        });
    }
    let n = gammas.len() as Entropy;
    Ok(squared_distances(space).map(|d| gammas.iter().map(|g| (-g * d).exp()).sum::<Energy>() / n))
}

/// Bilinear form `pxᵀ K py`.
pub fn kernel_expectation(px: &[Probability], py: &[Probability], kernel: &Matrix) -> Result<Energy> {
    Error::check(kernel.rows(), kernel.cols())?;
    Error::check(kernel.rows(), px.len())?;
    Error::check(kernel.cols(), py.len())?;
    Ok(px
        .iter()
        .zip(kernel.apply(py))
        .map(|(x, ky)| x * ky)
        .sum())
}
