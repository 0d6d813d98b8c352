//! Distribution metrics for training quantum circuit Born machines.
//!
//! A Born machine is trained so that the bitstring distribution it samples
//! approximates a target density. This crate provides the loss side of that
//! loop: pure functions comparing an observed distribution against a target.
//!
//! ## Modules
//!
//! - [`probability`]: normalization, bitstring ↔ index conversion, support filtering
//! - [`kernel`]: multi-bandwidth RBF Gram matrices and bilinear expectations
//! - [`divergence`]: squared Maximum Mean Discrepancy and clipped KL divergence
//! - [`transport`]: entropy-regularized optimal transport via Sinkhorn scaling
//! - [`datasets`]: mixture-of-Gaussians targets over bitstring-indexed bins
//! - [`objective`]: the loss-function boundary handed to an external optimizer
pub mod datasets;
pub mod divergence;
pub mod error;
pub mod fixture;
pub mod kernel;
pub mod matrix;
pub mod objective;
pub mod probability;
pub mod transport;

pub use datasets::*;
pub use divergence::*;
pub use error::*;
pub use fixture::*;
pub use kernel::*;
pub use matrix::*;
pub use objective::*;
pub use probability::*;
pub use transport::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Probability mass of a single outcome.
pub type Probability = f64;
/// Losses, transport costs, and squared distances.
pub type Energy = f64;
/// Bandwidths, temperatures, and other regularization strengths.
pub type Entropy = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// SINKHORN OPTIMAL TRANSPORT
// Entropy-regularized transport cost between measured and target distributions.
// ============================================================================
/// Entropy regularization strength. Lower = closer to exact transport, slower convergence.
pub const SINKHORN_TEMPERATURE: Entropy = 0.05;
/// Maximum Sinkhorn-Knopp iterations before stopping.
pub const SINKHORN_ITERATIONS: usize = 200;
/// Early stopping threshold on the L1 change of the LHS scaling vector.
pub const SINKHORN_TOLERANCE: Energy = 1e-9;
/// Added to every Gibbs kernel entry so scaling updates never divide by zero.
pub const GIBBS_FLOOR: Energy = 1e-300;

// ============================================================================
// KERNEL & DIVERGENCE
// ============================================================================
/// RBF bandwidths averaged into the default MMD kernel.
pub const DEFAULT_GAMMAS: [Entropy; 3] = [0.25, 0.5, 1.0];
/// Lower clip applied to both arguments of the KL divergence.
pub const KL_CLIP: Probability = 1e-12;
/// Lower clip applied before taking logarithms of empirical probabilities.
pub const LOG_FLOOR: Probability = 1e-12;

// ============================================================================
// MEASUREMENT DECODING
// ============================================================================
/// Outcomes at or below this probability are dropped from the support.
pub const BITSTRING_THRESHOLD: Probability = 1e-6;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at INFO.
#[cfg(feature = "cli")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
