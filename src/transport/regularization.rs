use crate::Energy;
use crate::Entropy;
use crate::SINKHORN_ITERATIONS;
use crate::SINKHORN_TEMPERATURE;
use crate::SINKHORN_TOLERANCE;

/// Hyperparameters of a Sinkhorn run.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Regularization {
    /// entropic regularization strength
    pub epsilon: Entropy,
    /// iteration budget
    pub iterations: usize,
    /// L1 threshold on the change of the LHS scaling vector
    pub tolerance: Energy,
}

impl Default for Regularization {
    fn default() -> Self {
        Self {
            epsilon: SINKHORN_TEMPERATURE,
            iterations: SINKHORN_ITERATIONS,
            tolerance: SINKHORN_TOLERANCE,
        }
    }
}

impl From<Entropy> for Regularization {
    fn from(epsilon: Entropy) -> Self {
        Self {
            epsilon,
            ..Self::default()
        }
    }
}

/// How a Sinkhorn run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convergence {
    /// not yet iterated
    Pending,
    /// tolerance reached after this many iterations
    Converged(usize),
    /// iteration budget spent without reaching tolerance
    Exhausted(usize),
}

impl Convergence {
    pub fn converged(&self) -> bool {
        matches!(self, Convergence::Converged(_))
    }
    pub fn iterations(&self) -> usize {
        match self {
            Convergence::Pending => 0,
            Convergence::Converged(t) | Convergence::Exhausted(t) => *t,
        }
    }
}
