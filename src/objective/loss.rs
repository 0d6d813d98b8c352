use crate::DEFAULT_GAMMAS;
use crate::Energy;
use crate::Entropy;
use crate::KL_CLIP;
use crate::Probability;
use crate::Regularization;
use crate::Result;
use crate::compute_kernel_matrix;
use crate::kl_divergence;
use crate::mmd_loss;
use crate::sinkhorn_loss;

/// Which discrepancy drives training, with its parameters.
///
/// Deserializes from JSON tagged by `kind`, e.g.
/// `{"kind": "sinkhorn", "epsilon": 0.1}`; omitted fields take their defaults.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Loss {
    /// squared MMD under an averaged RBF kernel
    Mmd {
        #[serde(default = "Loss::gammas")]
        gammas: Vec<Entropy>,
    },
    /// KL(target ‖ observed) with both sides clipped at `eps`
    Kl {
        #[serde(default = "Loss::clip")]
        eps: Probability,
    },
    /// entropy-regularized transport cost
    Sinkhorn {
        #[serde(flatten)]
        regularization: Regularization,
    },
}

impl Default for Loss {
    fn default() -> Self {
        Loss::Mmd {
            gammas: Self::gammas(),
        }
    }
}

impl Loss {
    fn gammas() -> Vec<Entropy> {
        DEFAULT_GAMMAS.to_vec()
    }
    fn clip() -> Probability {
        KL_CLIP
    }
    /// one of each, at default parameters
    pub fn all() -> Vec<Self> {
        vec![
            Loss::default(),
            Loss::Kl { eps: Self::clip() },
            Loss::Sinkhorn {
                regularization: Regularization::default(),
            },
        ]
    }
    /// Compares an observed distribution against the target.
    ///
    /// `space` defaults to the integer grid `0..len(observed)`.
    pub fn evaluate(
        &self,
        observed: &[Probability],
        target: &[Probability],
        space: Option<&[f64]>,
    ) -> Result<Energy> {
        match self {
            Loss::Mmd { gammas } => {
                let grid;
                let space = match space {
                    Some(space) => space,
                    None => {
                        grid = (0..observed.len()).map(|i| i as f64).collect::<Vec<_>>();
                        &grid
                    }
                };
                let ref kernel = compute_kernel_matrix(space, gammas)?;
                mmd_loss(observed, target, kernel)
            }
            Loss::Kl { eps } => kl_divergence(target, observed, *eps),
            Loss::Sinkhorn { regularization } => sinkhorn_loss(
                observed,
                target,
                space,
                regularization.epsilon,
                regularization.iterations,
                regularization.tolerance,
            ),
        }
    }
}

impl std::fmt::Display for Loss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Loss::Mmd { .. } => write!(f, "mmd"),
            Loss::Kl { .. } => write!(f, "kl"),
            Loss::Sinkhorn { .. } => write!(f, "sinkhorn"),
        }
    }
}
