//! The loss-function boundary handed to an external optimizer.
//!
//! Circuit execution and optimization live outside this crate. The optimizer
//! only needs something that maps a parameter vector to a scalar; this crate
//! supplies the body of that function via [`Loss`].
mod loss;

pub use loss::*;

use crate::Energy;

/// A black-box objective: parameters in, scalar loss out.
///
/// Any `Fn(&[f64]) -> Energy` closure is an `Objective`, which is how a
/// training loop typically wires circuit sampling and [`Loss::evaluate`]
/// together.
pub trait Objective {
    fn loss(&self, params: &[f64]) -> Energy;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> Energy,
{
    fn loss(&self, params: &[f64]) -> Energy {
        self(params)
    }
}
