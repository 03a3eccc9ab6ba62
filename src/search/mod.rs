//! Stochastic search over priority vectors.
//!
//! The optimizer treats the decoder as a black-box objective over the unit
//! box `[0, 1]^n` — one coordinate per operation, values meaningful only
//! through the execution order they induce. [`SearchStrategy`] is the seam:
//! the engine holds one primary strategy and falls back to [`RandomSearch`]
//! if the primary fails, so a request always completes with some schedule.
//!
//! # Submodules
//!
//! - [`annealing`]: bounded simulated annealing (the metaheuristic path)
//! - [`random`]: independent uniform sampling (the fallback path)

pub mod annealing;
pub mod random;

pub use annealing::SimulatedAnnealing;
pub use random::RandomSearch;

use thiserror::Error;

/// Failure at the search boundary.
///
/// Never escapes the engine: a failed strategy triggers the fallback path.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The strategy cannot run with its current parameters.
    #[error("search rejected the problem: {0}")]
    Unsupported(String),
    /// The strategy gave up mid-run.
    #[error("search aborted: {0}")]
    Aborted(String),
}

/// Outcome of a minimization run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best priority vector found; every coordinate in `[0, 1]`.
    pub vector: Vec<f64>,
    /// Objective value at `vector`.
    pub objective: f64,
    /// Objective evaluations spent.
    pub evaluations: usize,
}

/// A pluggable minimizer over the unit box `[0, 1]^dimension`.
///
/// Implementations must return the best vector found within their budget
/// and must not panic on degenerate inputs (`dimension == 0` is legal and
/// yields an empty vector).
pub trait SearchStrategy {
    /// Minimizes `objective` and returns the best vector found.
    fn minimize(
        &self,
        objective: &dyn Fn(&[f64]) -> f64,
        dimension: usize,
    ) -> Result<SearchOutcome, SearchError>;
}
