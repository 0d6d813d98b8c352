/// Failures that must reach the caller before any arithmetic happens.
///
/// Numerical degeneracies (zero-sum vectors, empty sample batches,
/// non-converged Sinkhorn runs) are absorbed locally and never show up here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Operand lengths or matrix shapes disagree.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    Dimension { expected: usize, found: usize },
    /// A bitstring contained something other than '0' and '1'.
    #[error("malformed bitstring {0:?}")]
    Format(String),
}

impl Error {
    /// Returns `Ok(())` when `found == expected`.
    pub fn check(expected: usize, found: usize) -> Result<()> {
        if expected == found {
            Ok(())
        } else {
            Err(Error::Dimension { expected, found })
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_passes_on_match() {
        assert_eq!(Error::check(4, 4), Ok(()));
    }
    #[test]
    fn check_reports_both_lengths() {
        let err = Error::check(4, 3).unwrap_err();
        assert_eq!(err, Error::Dimension { expected: 4, found: 3 });
        assert_eq!(err.to_string(), "dimension mismatch: expected 4, found 3");
    }
}
