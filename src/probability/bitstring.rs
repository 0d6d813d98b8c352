use super::distribution::normalize;
use crate::Error;
use crate::Probability;
use crate::Result;
use std::collections::BTreeMap;
use std::collections::HashSet;

/// A measurement outcome: an unsigned integer rendered at a fixed bit width.
///
/// Bit order is big-endian, so qubit 0 is the leftmost character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bitstring {
    index: usize,
    width: usize,
}

impl Bitstring {
    /// position of this outcome in a probability vector of length `2^width`
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn width(&self) -> usize {
        self.width
    }
}

/// (value, width). bits above `width` are dropped.
impl From<(usize, usize)> for Bitstring {
    fn from((index, width): (usize, usize)) -> Self {
        let mask = match u32::try_from(width).ok().and_then(|w| 1usize.checked_shl(w)) {
            Some(bound) => bound - 1,
            None => usize::MAX,
        };
        Self {
            index: index & mask,
            width,
        }
    }
}

impl TryFrom<&str> for Bitstring {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self> {
        Ok(Self {
            index: bitstring_to_int(s)?,
            width: s.len(),
        })
    }
}

impl std::fmt::Display for Bitstring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", int_to_bitstring(self.index, self.width))
    }
}

/// Zero-padded big-endian binary of `n` at exactly `length` characters.
pub fn int_to_bitstring(n: usize, length: usize) -> String {
    (0..length)
        .rev()
        .map(|bit| u32::try_from(bit).ok().and_then(|b| n.checked_shr(b)).unwrap_or(0))
        .map(|shifted| if shifted & 1 == 1 { '1' } else { '0' })
        .collect()
}

/// Parses a base-2 string. Anything other than a non-empty run of
/// '0' and '1' that fits in a `usize` is a [`Error::Format`].
pub fn bitstring_to_int(s: &str) -> Result<usize> {
    if s.is_empty() {
        return Err(Error::Format(s.to_string()));
    }
    s.chars().try_fold(0usize, |acc, c| {
        let bit = match c {
            '0' => 0,
            '1' => 1,
            _ => return Err(Error::Format(s.to_string())),
        };
        acc.checked_mul(2)
            .and_then(|acc| acc.checked_add(bit))
            .ok_or_else(|| Error::Format(s.to_string()))
    })
}

/// Bitstrings whose probability is strictly above `threshold`, in index order.
///
/// The width is `log2(len)`, so `prob_vector` should have power-of-two length;
/// any other length is truncated down to the nearest width.
pub fn probs_to_bitstrings(prob_vector: &[Probability], threshold: Probability) -> Vec<String> {
    let n = prob_vector.len().checked_ilog2().unwrap_or(0) as usize;
    prob_vector
        .iter()
        .enumerate()
        .filter(|(_, p)| **p > threshold)
        .map(|(i, _)| int_to_bitstring(i, n))
        .collect()
}

/// Fraction of `samples` that land inside `valid`. Zero for no samples.
pub fn compute_chi<S>(samples: &[S], valid: &HashSet<String>) -> Probability
where
    S: AsRef<str>,
{
    if samples.is_empty() {
        log::warn!("chi requested over an empty sample batch");
        return 0.;
    }
    let hits = samples
        .iter()
        .filter(|s| valid.contains(s.as_ref()))
        .count();
    hits as Probability / samples.len() as Probability
}

/// Decodes raw measurement counts into a normalized vector of length `2^n`.
///
/// Every key must be an `n`-character bitstring.
pub fn counts_to_probs(counts: &BTreeMap<String, usize>, n: usize) -> Result<Vec<Probability>> {
    let size = u32::try_from(n)
        .ok()
        .and_then(|w| 1usize.checked_shl(w))
        .ok_or(Error::Dimension {
            expected: usize::BITS as usize - 1,
            found: n,
        })?;
    let mut probs = vec![0.; size];
    for (key, count) in counts {
        let outcome = Bitstring::try_from(key.as_str())?;
        Error::check(n, outcome.width())?;
        probs[outcome.index()] += *count as Probability;
    }
    Ok(normalize(&probs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitstring_is_zero_padded_big_endian() {
        assert_eq!(int_to_bitstring(1, 4), "0001");
        assert_eq!(int_to_bitstring(6, 3), "110");
        assert_eq!(int_to_bitstring(0, 0), "");
    }
    #[test]
    fn bitstring_drops_overflow_bits() {
        assert_eq!(int_to_bitstring(5, 2), "01");
        assert_eq!(Bitstring::from((5usize, 2usize)).index(), 1);
    }
    #[test]
    fn bitstring_roundtrip() {
        for n in 1..=8 {
            for k in 0..(1usize << n) {
                assert_eq!(bitstring_to_int(&int_to_bitstring(k, n)), Ok(k));
            }
        }
    }
    #[test]
    fn bitstring_rejects_non_binary() {
        assert_eq!(bitstring_to_int("012"), Err(Error::Format("012".into())));
        assert_eq!(bitstring_to_int(""), Err(Error::Format("".into())));
        assert!(bitstring_to_int(&"1".repeat(usize::BITS as usize + 1)).is_err());
        assert!(Bitstring::try_from("1x").is_err());
    }
    #[test]
    fn bitstring_display_keeps_width() {
        let b = Bitstring::try_from("0010").unwrap();
        assert_eq!((b.index(), b.width()), (2, 4));
        assert_eq!(b.to_string(), "0010");
    }
    #[test]
    fn probs_to_bitstrings_filters_by_threshold() {
        let bits = probs_to_bitstrings(&[0.0, 0.9, 0.05, 0.05], 0.01);
        assert_eq!(bits, vec!["01", "10", "11"]);
    }
    #[test]
    fn probs_to_bitstrings_is_strict() {
        let bits = probs_to_bitstrings(&[0.5, 0.5], 0.5);
        assert!(bits.is_empty());
    }
    #[test]
    fn chi_counts_valid_fraction() {
        let valid: HashSet<String> = ["00", "11"].iter().map(|s| s.to_string()).collect();
        assert_eq!(compute_chi(&["00", "01", "11", "11"][..], &valid), 0.75);
    }
    #[test]
    fn chi_of_nothing_is_zero() {
        let valid = HashSet::from(["0".to_string()]);
        let empty: [&str; 0] = [];
        assert_eq!(compute_chi(&empty[..], &valid), 0.);
    }
    #[test]
    fn counts_decode_into_probabilities() {
        let counts = BTreeMap::from([("00".to_string(), 1), ("11".to_string(), 3)]);
        assert_eq!(counts_to_probs(&counts, 2), Ok(vec![0.25, 0., 0., 0.75]));
    }
    #[test]
    fn counts_reject_wrong_width() {
        let counts = BTreeMap::from([("001".to_string(), 1)]);
        assert_eq!(
            counts_to_probs(&counts, 2),
            Err(Error::Dimension { expected: 2, found: 3 })
        );
    }
}
