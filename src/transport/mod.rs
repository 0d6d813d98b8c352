//! Entropy-regularized optimal transport between distributions on a line.
//!
//! ## Algorithm
//!
//! - [`Sinkhorn`]: alternating scaling of the Gibbs kernel toward both marginals
//!
//! ## Core Types
//!
//! - [`Coupling`]: a transport plan between two distributions
//! - [`Regularization`]: temperature, iteration budget, and tolerance
//! - [`Convergence`]: how a Sinkhorn run terminated
//!
//! Lower temperature yields sharper transport plans at the cost of slower
//! convergence and kernel entries that underflow toward zero.
mod cost;
mod coupling;
mod regularization;
mod sinkhorn;

pub use cost::*;
pub use coupling::*;
pub use regularization::*;
pub use sinkhorn::*;
