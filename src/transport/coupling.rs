use crate::Energy;
use crate::Probability;

/// A transport plan (coupling) between two discrete distributions.
///
/// A coupling is a joint distribution π(i, j) whose marginals match the
/// source distribution p and target distribution q. The transport cost is
/// the expected ground cost under this joint distribution.
///
/// Implementations must ensure that after [`minimize`](Coupling::minimize)
/// is called, [`cost`](Coupling::cost) returns the (regularized) optimal cost.
pub trait Coupling {
    /// Optimizes the coupling to minimize total transport cost.
    fn minimize(self) -> Self;
    /// Returns the mass transported from outcome `i` to outcome `j`.
    fn flow(&self, i: usize, j: usize) -> Probability;
    /// Returns the total transport cost of this coupling.
    fn cost(&self) -> Energy;
}
