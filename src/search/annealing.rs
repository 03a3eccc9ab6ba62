//! Simulated annealing over priority vectors.
//!
//! Single-coordinate neighborhood moves with Metropolis acceptance and a
//! geometric cooling schedule. The iteration budget bounds the run; an
//! optional wall-clock deadline cuts it short while still returning the
//! best vector seen so far.
//!
//! # Reference
//! Kirkpatrick et al. (1983), "Optimization by Simulated Annealing"

use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::{SearchError, SearchOutcome, SearchStrategy};

/// Bounded simulated-annealing minimizer.
#[derive(Debug, Clone)]
pub struct SimulatedAnnealing {
    /// Iteration budget (one neighbor evaluation per iteration).
    pub max_iterations: usize,
    /// Starting temperature, in objective units (seconds of makespan).
    pub initial_temperature: f64,
    /// Geometric cooling factor, strictly inside (0, 1).
    pub cooling: f64,
    /// Maximum single-coordinate perturbation.
    pub step: f64,
    /// RNG seed; `None` draws from the OS.
    pub seed: Option<u64>,
    /// Wall-clock budget; best-so-far is returned when it runs out.
    pub deadline: Option<Duration>,
}

impl SimulatedAnnealing {
    /// Creates an annealer with default parameters.
    pub fn new() -> Self {
        Self {
            max_iterations: 1000,
            initial_temperature: 500.0,
            cooling: 0.995,
            step: 0.2,
            seed: None,
            deadline: None,
        }
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the starting temperature.
    pub fn with_initial_temperature(mut self, temperature: f64) -> Self {
        self.initial_temperature = temperature;
        self
    }

    /// Sets the cooling factor.
    pub fn with_cooling(mut self, cooling: f64) -> Self {
        self.cooling = cooling;
        self
    }

    /// Sets the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock budget.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }
}

impl Default for SimulatedAnnealing {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStrategy for SimulatedAnnealing {
    fn minimize(
        &self,
        objective: &dyn Fn(&[f64]) -> f64,
        dimension: usize,
    ) -> Result<SearchOutcome, SearchError> {
        if !(self.cooling > 0.0 && self.cooling < 1.0) {
            return Err(SearchError::Unsupported(format!(
                "cooling factor {} outside (0, 1)",
                self.cooling
            )));
        }
        if self.initial_temperature <= 0.0 || self.step <= 0.0 {
            return Err(SearchError::Unsupported(
                "temperature and step must be positive".into(),
            ));
        }

        if dimension == 0 {
            return Ok(SearchOutcome {
                vector: Vec::new(),
                objective: objective(&[]),
                evaluations: 1,
            });
        }

        let started = Instant::now();
        let mut rng = self.rng();

        let mut current: Vec<f64> = (0..dimension).map(|_| rng.random_range(0.0..=1.0)).collect();
        let mut current_value = objective(&current);
        let mut best = current.clone();
        let mut best_value = current_value;
        let mut evaluations = 1usize;

        let mut temperature = self.initial_temperature;

        for iteration in 0..self.max_iterations {
            if let Some(deadline) = self.deadline {
                if started.elapsed() >= deadline {
                    debug!(iteration, best_value, "deadline reached, stopping early");
                    break;
                }
            }

            let mut candidate = current.clone();
            let coord = rng.random_range(0..dimension);
            let nudge = rng.random_range(-self.step..=self.step);
            candidate[coord] = (candidate[coord] + nudge).clamp(0.0, 1.0);

            let value = objective(&candidate);
            evaluations += 1;

            let delta = value - current_value;
            let accept = delta <= 0.0 || {
                let p = (-delta / temperature).exp();
                rng.random_bool(p.clamp(0.0, 1.0))
            };

            if accept {
                current = candidate;
                current_value = value;
                if current_value < best_value {
                    best = current.clone();
                    best_value = current_value;
                }
            }

            temperature = (temperature * self.cooling).max(f64::MIN_POSITIVE);
        }

        debug!(best_value, evaluations, "annealing finished");
        Ok(SearchOutcome {
            vector: best,
            objective: best_value,
            evaluations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sum of coordinates: minimum at the origin.
    fn sum_objective(v: &[f64]) -> f64 {
        v.iter().sum()
    }

    #[test]
    fn test_minimizes_toward_origin() {
        let sa = SimulatedAnnealing::new().with_seed(42).with_max_iterations(2000);
        let outcome = sa.minimize(&sum_objective, 4).unwrap();

        assert_eq!(outcome.vector.len(), 4);
        assert!(outcome.vector.iter().all(|&x| (0.0..=1.0).contains(&x)));
        // Random start averages 2.0; a working annealer lands well below.
        assert!(outcome.objective < 1.0, "objective = {}", outcome.objective);
        assert!(outcome.evaluations > 1);
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let sa = SimulatedAnnealing::new().with_seed(7);
        let a = sa.minimize(&sum_objective, 5).unwrap();
        let b = sa.minimize(&sum_objective, 5).unwrap();
        assert_eq!(a.vector, b.vector);
        assert_eq!(a.objective, b.objective);
    }

    #[test]
    fn test_zero_dimension() {
        let sa = SimulatedAnnealing::new().with_seed(1);
        let outcome = sa.minimize(&|_| 0.0, 0).unwrap();
        assert!(outcome.vector.is_empty());
        assert_eq!(outcome.objective, 0.0);
    }

    #[test]
    fn test_invalid_cooling_rejected() {
        let sa = SimulatedAnnealing::new().with_cooling(1.5);
        assert!(matches!(
            sa.minimize(&sum_objective, 3),
            Err(SearchError::Unsupported(_))
        ));
    }

    #[test]
    fn test_deadline_still_returns_best() {
        let sa = SimulatedAnnealing::new()
            .with_seed(3)
            .with_max_iterations(1_000_000)
            .with_deadline(Duration::ZERO);
        let outcome = sa.minimize(&sum_objective, 3).unwrap();
        // Budget exhausted immediately, but the initial vector still counts.
        assert_eq!(outcome.vector.len(), 3);
        assert!(outcome.objective.is_finite());
    }

    #[test]
    fn test_outcome_matches_reported_objective() {
        let sa = SimulatedAnnealing::new().with_seed(11);
        let outcome = sa.minimize(&sum_objective, 6).unwrap();
        assert!((sum_objective(&outcome.vector) - outcome.objective).abs() < 1e-12);
    }
}
