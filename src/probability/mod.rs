//! Probability vectors and the bitstrings that index them.
//!
//! Measurement outcomes arrive as fixed-width bitstrings; the metrics operate
//! on dense probability vectors of length `2^n` indexed by the big-endian
//! integer value of each bitstring.
mod bitstring;
mod distribution;

pub use bitstring::*;
pub use distribution::*;
