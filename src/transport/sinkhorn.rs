use super::*;
use crate::Energy;
use crate::Entropy;
use crate::Error;
use crate::GIBBS_FLOOR;
use crate::Matrix;
use crate::Probability;
use crate::Result;

/// Entropic optimal transport via Sinkhorn scaling.
///
/// Computes the regularized transport cost between two distributions over
/// the same one-dimensional support under the quadratic ground cost.
///
/// # Algorithm
///
/// 1. Normalize both marginals and build the Gibbs kernel `K = exp(-C/ε)`
/// 2. Start from all-ones scaling vectors `u`, `v`
/// 3. Alternately set `u ← p / (K v)` and `v ← q / (Kᵀ u)`
/// 4. Stop once `‖u - u_prev‖₁` falls below tolerance, or the budget runs out
/// 5. Recover the plan `T = diag(u) K diag(v)` and report `Σ T ⊙ C`
///
/// Running out of iterations is not an error: the latest estimate is
/// returned, and [`Convergence`] records what happened.
pub struct Sinkhorn {
    /// normalized source distribution
    mu: Vec<Probability>,
    /// normalized target distribution
    nu: Vec<Probability>,
    /// quadratic ground cost
    cost: Matrix,
    /// floored Gibbs kernel
    kernel: Matrix,
    /// LHS scaling vector
    lhs: Vec<Energy>,
    /// RHS scaling vector
    rhs: Vec<Energy>,
    regularization: Regularization,
    convergence: Convergence,
}

impl Sinkhorn {
    /// Prepares a solver over `space`, or over `0..len(p)` when `space` is absent.
    ///
    /// Zero-mass marginals are not rejected; they drive the result to NaN.
    pub fn new(
        p: &[Probability],
        q: &[Probability],
        space: Option<&[f64]>,
        regularization: Regularization,
    ) -> Result<Self> {
        Error::check(p.len(), q.len())?;
        let space = match space {
            Some(space) => {
                Error::check(p.len(), space.len())?;
                space.to_vec()
            }
            None => (0..p.len()).map(|i| i as f64).collect(),
        };
        let cost = build_cost_matrix(&space);
        let kernel = sinkhorn_kernel(&cost, regularization.epsilon).map(|k| k + GIBBS_FLOOR);
        Ok(Self {
            mu: Self::marginal(p),
            nu: Self::marginal(q),
            lhs: vec![1.; p.len()],
            rhs: vec![1.; q.len()],
            cost,
            kernel,
            regularization,
            convergence: Convergence::Pending,
        })
    }

    /// Runs Sinkhorn iteration until convergence.
    fn sinkhorn(&mut self) {
        for t in 0..self.iterations() {
            let next = self.lhs();
            let delta = Self::delta(&self.lhs, &next);
            self.lhs = next;
            self.rhs = self.rhs();
            if delta < self.tolerance() {
                self.convergence = Convergence::Converged(t + 1);
                log::debug!("sinkhorn converged after {} iterations", t + 1);
                return;
            }
        }
        self.convergence = Convergence::Exhausted(self.iterations());
        log::debug!("sinkhorn exhausted {} iterations", self.iterations());
    }
    /// Computes updated LHS scaling `p / (K v)`.
    fn lhs(&self) -> Vec<Energy> {
        self.kernel
            .apply(&self.rhs)
            .into_iter()
            .zip(self.mu.iter())
            .map(|(kv, p)| p / kv)
            .collect()
    }
    /// Computes updated RHS scaling `q / (Kᵀ u)`.
    fn rhs(&self) -> Vec<Energy> {
        self.kernel
            .apply_transpose(&self.lhs)
            .into_iter()
            .zip(self.nu.iter())
            .map(|(ku, q)| q / ku)
            .collect()
    }
    /// Computes L1 change in the scaling vector (stopping criterion).
    fn delta(prev: &[Energy], next: &[Energy]) -> Energy {
        prev.iter()
            .zip(next.iter())
            .map(|(a, b)| (a - b).abs())
            .sum::<Energy>()
    }
    /// Divides by total mass with no guard, so zero-mass input becomes NaN.
    fn marginal(x: &[Probability]) -> Vec<Probability> {
        let total = x.iter().sum::<Probability>();
        if total <= 0. {
            log::warn!("sinkhorn marginal has total mass {}", total);
        }
        x.iter().map(|x| x / total).collect()
    }

    /// Transport plan `outer(u, v) ⊙ K`.
    pub fn plan(&self) -> Matrix {
        Matrix::outer(&self.lhs, &self.rhs).zip(&self.kernel, |t, k| t * k)
    }
    pub fn convergence(&self) -> Convergence {
        self.convergence
    }
    /// Entropic regularization strength. Lower = closer to exact transport.
    const fn temperature(&self) -> Entropy {
        self.regularization.epsilon
    }
    /// Maximum iteration count before forced termination.
    const fn iterations(&self) -> usize {
        self.regularization.iterations
    }
    /// Convergence tolerance for early stopping.
    const fn tolerance(&self) -> Energy {
        self.regularization.tolerance
    }
}

impl Coupling for Sinkhorn {
    fn minimize(mut self) -> Self {
        self.sinkhorn();
        self
    }
    fn flow(&self, i: usize, j: usize) -> Probability {
        self.lhs[i] * self.kernel.get(i, j) * self.rhs[j]
    }
    fn cost(&self) -> Energy {
        self.plan().zip(&self.cost, |t, c| t * c).sum()
    }
}

/// Regularized transport cost between `p` and `q`.
///
/// `space` defaults to `0..len(p)`. See [`Sinkhorn`] for the algorithm and
/// [`SINKHORN_TEMPERATURE`](crate::SINKHORN_TEMPERATURE),
/// [`SINKHORN_ITERATIONS`](crate::SINKHORN_ITERATIONS),
/// [`SINKHORN_TOLERANCE`](crate::SINKHORN_TOLERANCE) for the usual parameters.
pub fn sinkhorn_loss(
    p: &[Probability],
    q: &[Probability],
    space: Option<&[f64]>,
    epsilon: Entropy,
    max_iter: usize,
    tol: Energy,
) -> Result<Energy> {
    let regularization = Regularization {
        epsilon,
        iterations: max_iter,
        tolerance: tol,
    };
    Ok(Sinkhorn::new(p, q, space, regularization)?.minimize().cost())
}

/// [`sinkhorn_loss`] over the integer grid, logged at INFO.
pub fn sinkhorn_report(p: &[Probability], q: &[Probability], epsilon: Entropy) -> Result<Energy> {
    let solver = Sinkhorn::new(p, q, None, Regularization::from(epsilon))?.minimize();
    let cost = solver.cost();
    log::info!(
        "Sinkhorn OT (eps={}): {} ({:?})",
        solver.temperature(),
        cost,
        solver.convergence()
    );
    Ok(cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::Marginals;
    use crate::SINKHORN_ITERATIONS;
    use crate::SINKHORN_TEMPERATURE;
    use crate::SINKHORN_TOLERANCE;

    fn loss(p: &[Probability], q: &[Probability], space: &[f64], epsilon: Entropy) -> Energy {
        sinkhorn_loss(p, q, Some(space), epsilon, SINKHORN_ITERATIONS, SINKHORN_TOLERANCE).unwrap()
    }

    /// temperature on the scale of the largest cost, so the kernel stays well conditioned
    fn temperature(space: &[f64]) -> Entropy {
        (space.len() * space.len()) as Entropy
    }

    /// sinkhorn implementation should be
    /// 1. approximately self-annihilating
    /// 2. positive semidefinite
    /// 3. marginal-preserving at convergence
    /// 4. approximately symmetric

    #[test]
    fn is_sinkhorn_zero() {
        const TOLERANCE: Energy = 1e-3;
        let (space, p, ..) = Marginals::random().inner();
        let d = loss(&p, &p, &space, SINKHORN_TEMPERATURE);
        assert!(d.abs() <= TOLERANCE, "consider decreasing temp\n{d} {TOLERANCE}");
    }
    #[test]
    fn is_sinkhorn_positive() {
        let (space, p, q, _) = Marginals::random().inner();
        assert!(loss(&p, &q, &space, SINKHORN_TEMPERATURE) >= 0.);
        assert!(loss(&q, &p, &space, SINKHORN_TEMPERATURE) >= 0.);
    }
    #[test]
    fn is_sinkhorn_marginal() {
        const TOLERANCE: Probability = 1e-6;
        let (space, p, q, _) = Marginals::random().inner();
        let solver = Sinkhorn::new(&p, &q, Some(space.as_slice()), Regularization::from(temperature(&space)))
            .unwrap()
            .minimize();
        let ref ones = vec![1.; space.len()];
        let rows = solver.plan().apply(ones);
        let cols = solver.plan().apply_transpose(ones);
        assert!(solver.convergence().converged());
        assert!(rows.iter().zip(&p).all(|(r, p)| (r - p).abs() < TOLERANCE));
        assert!(cols.iter().zip(&q).all(|(c, q)| (c - q).abs() < TOLERANCE));
    }
    #[test]
    fn is_sinkhorn_symmetric() {
        let (space, p, q, _) = Marginals::random().inner();
        let pq = loss(&p, &q, &space, temperature(&space));
        let qp = loss(&q, &p, &space, temperature(&space));
        assert!((pq - qp).abs() < 1e-6, "{pq} {qp}");
    }

    #[test]
    fn identical_halves_cost_nothing() {
        let d = loss(&[0.5, 0.5], &[0.5, 0.5], &[0., 1.], 0.1);
        assert!(d.abs() < 1e-3, "{d}");
    }
    #[test]
    fn opposite_point_masses_cost_unit_distance() {
        let d = loss(&[1., 0.], &[0., 1.], &[0., 1.], 0.05);
        assert!((d - 1.).abs() < 1e-6, "{d}");
    }
    #[test]
    fn flow_matches_plan() {
        let solver = Sinkhorn::new(&[0.3, 0.7], &[0.6, 0.4], None, Regularization::from(0.5))
            .unwrap()
            .minimize();
        let plan = solver.plan();
        assert!((solver.flow(1, 0) - plan.get(1, 0)).abs() < 1e-15);
        let cost = (0..2)
            .flat_map(|i| (0..2).map(move |j| (i, j)))
            .map(|(i, j)| solver.flow(i, j) * (i as f64 - j as f64).powi(2))
            .sum::<Energy>();
        assert!((cost - solver.cost()).abs() < 1e-12);
    }
    #[test]
    fn unnormalized_inputs_are_rescaled() {
        let a = loss(&[2., 6.], &[4., 4.], &[0., 1.], 0.5);
        let b = loss(&[0.25, 0.75], &[0.5, 0.5], &[0., 1.], 0.5);
        assert!((a - b).abs() < 1e-12);
    }
    #[test]
    fn default_space_is_integer_grid() {
        let (space, p, q, _) = Marginals::random().inner();
        let explicit = loss(&p, &q, &space, 0.5);
        let implicit = sinkhorn_loss(&p, &q, None, 0.5, SINKHORN_ITERATIONS, SINKHORN_TOLERANCE).unwrap();
        assert_eq!(explicit, implicit);
    }
    #[test]
    fn budget_exhaustion_is_not_an_error() {
        let solver = Sinkhorn::new(&[0.2, 0.8], &[0.7, 0.3], None, Regularization {
            epsilon: 0.5,
            iterations: 1,
            tolerance: 0.,
        })
        .unwrap()
        .minimize();
        assert_eq!(solver.convergence(), Convergence::Exhausted(1));
        assert!(solver.cost().is_finite());
    }
    #[test]
    fn zero_mass_yields_nan() {
        let d = loss(&[0., 0.], &[0.5, 0.5], &[0., 1.], 0.5);
        assert!(d.is_nan());
    }
    #[test]
    fn mismatched_shapes_are_rejected() {
        assert!(sinkhorn_loss(&[1.], &[0.5, 0.5], None, 0.1, 10, 1e-9).is_err());
        assert_eq!(
            sinkhorn_loss(&[0.5, 0.5], &[0.5, 0.5], Some(&[0., 1., 2.][..]), 0.1, 10, 1e-9),
            Err(Error::Dimension { expected: 2, found: 3 })
        );
    }
    #[test]
    fn report_matches_loss() {
        let p = [0.1, 0.2, 0.3, 0.4];
        let q = [0.4, 0.3, 0.2, 0.1];
        let reported = sinkhorn_report(&p, &q, SINKHORN_TEMPERATURE).unwrap();
        let computed = sinkhorn_loss(&p, &q, None, SINKHORN_TEMPERATURE, SINKHORN_ITERATIONS, SINKHORN_TOLERANCE).unwrap();
        assert_eq!(reported, computed);
    }
}
