//! Random-sampling fallback search.
//!
//! Draws a handful of independent uniform priority vectors and keeps the
//! best. Not competitive with annealing, but it cannot fail, which is the
//! point: it is the strategy of last resort behind the engine's
//! always-produce-a-result guarantee.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::{SearchError, SearchOutcome, SearchStrategy};

/// Best-of-N uniform sampling minimizer.
#[derive(Debug, Clone)]
pub struct RandomSearch {
    /// Number of vectors drawn (at least one is always evaluated).
    pub samples: usize,
    /// RNG seed; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl RandomSearch {
    /// Creates a sampler with the given draw count.
    pub fn new(samples: usize) -> Self {
        Self {
            samples,
            seed: None,
        }
    }

    /// Sets the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl SearchStrategy for RandomSearch {
    fn minimize(
        &self,
        objective: &dyn Fn(&[f64]) -> f64,
        dimension: usize,
    ) -> Result<SearchOutcome, SearchError> {
        if dimension == 0 {
            return Ok(SearchOutcome {
                vector: Vec::new(),
                objective: objective(&[]),
                evaluations: 1,
            });
        }

        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let samples = self.samples.max(1);
        let mut best: Option<SearchOutcome> = None;

        for _ in 0..samples {
            let vector: Vec<f64> = (0..dimension).map(|_| rng.random_range(0.0..=1.0)).collect();
            let value = objective(&vector);

            if best.as_ref().map_or(true, |b| value < b.objective) {
                best = Some(SearchOutcome {
                    vector,
                    objective: value,
                    evaluations: 0,
                });
            }
        }

        let mut outcome = best.expect("at least one sample is drawn");
        outcome.evaluations = samples;
        debug!(samples, objective = outcome.objective, "random search finished");
        Ok(outcome)
    }
}
