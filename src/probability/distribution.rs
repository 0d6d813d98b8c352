use crate::Probability;

/// Rescales `probs` to sum to one.
///
/// A vector whose total is not positive is returned unchanged; empty shot
/// batches produce exactly that, and they must not abort a training run.
pub fn normalize(probs: &[Probability]) -> Vec<Probability> {
    let total = probs.iter().sum::<Probability>();
    if total > 0. {
        probs.iter().map(|p| p / total).collect()
    } else {
        log::warn!("cannot normalize distribution with total mass {}", total);
        probs.to_vec()
    }
}

/// Elementwise `ln(max(x, eps))`.
pub fn safe_log(x: &[Probability], eps: Probability) -> Vec<f64> {
    x.iter().map(|x| x.max(eps).ln()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LOG_FLOOR;

    #[test]
    fn normalize_sums_to_one() {
        let p = normalize(&[1., 3., 4.]);
        assert_eq!(p, vec![0.125, 0.375, 0.5]);
    }
    #[test]
    fn normalize_leaves_zero_mass_untouched() {
        assert_eq!(normalize(&[0., 0., 0.]), vec![0., 0., 0.]);
        assert!(normalize(&[]).is_empty());
    }
    #[test]
    fn safe_log_floors_zeros() {
        let logs = safe_log(&[0., 1., std::f64::consts::E], LOG_FLOOR);
        assert_eq!(logs[0], LOG_FLOOR.ln());
        assert_eq!(logs[1], 0.);
        assert!((logs[2] - 1.).abs() < 1e-12);
        assert!(logs.iter().all(|x| x.is_finite()));
    }
}
