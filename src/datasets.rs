//! Target distributions for a Born machine to learn.
use crate::Error;
use crate::Probability;
use crate::Result;
use crate::normalize;

/// Mixture of normal densities discretized over the grid `x`.
///
/// Each component is evaluated on the grid and normalized to unit mass on its
/// own before the components are summed, so every mode carries equal weight
/// regardless of how much of its tail the grid clips. The sum is normalized
/// again on the way out.
///
/// `sigmas` holds one standard deviation per mean, or a single one shared by
/// every mean.
pub fn mixture_gaussian_pdf(x: &[f64], mus: &[f64], sigmas: &[f64]) -> Result<Vec<Probability>> {
    if mus.is_empty() {
        return Err(Error::Dimension {
            expected: 1,
            found: 0,
        });
    }
    if sigmas.len() != 1 {
        Error::check(mus.len(), sigmas.len())?;
    }
    let mut total = vec![0.; x.len()];
    for (i, mu) in mus.iter().enumerate() {
        let sigma = sigmas[i % sigmas.len()];
        let component = normalize(&gaussian(x, *mu, sigma));
        total.iter_mut().zip(component).for_each(|(t, c)| *t += c);
    }
    Ok(normalize(&total))
}

/// Normal pdf with mean `mu` and standard deviation `sigma` at every point of `x`.
fn gaussian(x: &[f64], mu: f64, sigma: f64) -> Vec<Probability> {
    let var = sigma * sigma;
    let scale = 1. / (2. * std::f64::consts::PI * var).sqrt();
    x.iter()
        .map(|x| scale * (-(x - mu) * (x - mu) / (2. * var)).exp())
        .collect()
}

/// Integer coordinates `0..2^n` of the outcomes of an `n`-qubit measurement.
pub fn bitstring_grid(n: usize) -> Vec<f64> {
    (0..1usize << n).map(|i| i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixture_is_normalized() {
        let x = bitstring_grid(4);
        let p = mixture_gaussian_pdf(&x, &[4., 11.], &[1.5, 2.]).unwrap();
        assert_eq!(p.len(), 16);
        assert!((p.iter().sum::<Probability>() - 1.).abs() < 1e-12);
        assert!(p.iter().all(|p| *p > 0.));
    }
    #[test]
    fn mixture_peaks_at_its_means() {
        let x = bitstring_grid(5);
        let p = mixture_gaussian_pdf(&x, &[8., 23.], &[2.]).unwrap();
        assert!(p[8] > p[4] && p[8] > p[15]);
        assert!(p[23] > p[19] && p[23] > p[16]);
        assert!((p[8] - p[23]).abs() < 1e-12);
    }
    #[test]
    fn single_component_is_symmetric_about_its_mean() {
        let x = bitstring_grid(3);
        let p = mixture_gaussian_pdf(&x, &[3.5], &[1.]).unwrap();
        assert!((0..4).all(|i| (p[i] - p[7 - i]).abs() < 1e-12));
    }
    #[test]
    fn mixture_rejects_bad_parameters() {
        let x = bitstring_grid(2);
        assert!(mixture_gaussian_pdf(&x, &[], &[1.]).is_err());
        assert_eq!(
            mixture_gaussian_pdf(&x, &[1., 2., 3.], &[1., 2.]),
            Err(Error::Dimension { expected: 3, found: 2 })
        );
    }
    #[test]
    fn grid_has_one_point_per_outcome() {
        assert_eq!(bitstring_grid(2), vec![0., 1., 2., 3.]);
    }
}
