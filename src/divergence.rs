//! Discrepancies between an observed distribution and a target.
use crate::Energy;
use crate::Error;
use crate::Matrix;
use crate::Probability;
use crate::Result;
use crate::kernel::kernel_expectation;

pub use crate::probability::safe_log;

/// Squared Maximum Mean Discrepancy under the kernel embedding `kernel`.
///
/// Equals `(px - py)ᵀ K (px - py)`. Non-negative whenever `kernel` is positive
/// semi-definite, which holds for any Gram matrix from
/// [`compute_kernel_matrix`](crate::compute_kernel_matrix), and zero exactly
/// when the two embeddings coincide.
pub fn mmd_loss(px: &[Probability], py: &[Probability], kernel: &Matrix) -> Result<Energy> {
    Error::check(px.len(), py.len())?;
    let ref diff = px
        .iter()
        .zip(py.iter())
        .map(|(x, y)| x - y)
        .collect::<Vec<Probability>>();
    kernel_expectation(diff, diff, kernel)
}

/// `Σ p ln(p / q)` after clipping both arguments into `[eps, 1]`.
///
/// Sampled distributions almost always contain exact zeros, so the clip keeps
/// the sum finite. Once anything is clipped this is only an approximation of
/// the KL divergence: it may go slightly negative, and treat `eps` as a
/// numerical knob rather than a statistical parameter.
pub fn kl_divergence(p: &[Probability], q: &[Probability], eps: Probability) -> Result<Energy> {
    Error::check(p.len(), q.len())?;
    Ok(p.iter()
        .zip(q.iter())
        .map(|(p, q)| (p.max(eps).min(1.), q.max(eps).min(1.)))
        .map(|(p, q)| p * (p / q).ln())
        .sum())
}
