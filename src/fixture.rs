use crate::Arbitrary;
use crate::Probability;
use crate::normalize;

/// this guy is used just to construct arbitrary (space, p, q, r) tuples
/// to test kernel, divergence, and transport mechanisms.
///
/// space is the integer grid over `2^n` outcomes for n in 1..=4, and every
/// distribution has strictly positive mass everywhere.
pub struct Marginals(Vec<f64>, Vec<Probability>, Vec<Probability>, Vec<Probability>);

impl Marginals {
    pub fn inner(self) -> (Vec<f64>, Vec<Probability>, Vec<Probability>, Vec<Probability>) {
        (self.0, self.1, self.2, self.3)
    }
    fn distribution(n: usize) -> Vec<Probability> {
        normalize(
            &(0..n)
                .map(|_| rand::random::<Probability>() + 0.01)
                .collect::<Vec<_>>(),
        )
    }
}

impl Arbitrary for Marginals {
    fn random() -> Self {
        let n = 1usize << rand::random_range(1..=4u32);
        let space = (0..n).map(|i| i as f64).collect();
        Self(
            space,
            Self::distribution(n),
            Self::distribution(n),
            Self::distribution(n),
        )
    }
}
