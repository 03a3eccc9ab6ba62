//! Optimization engine: the crate's entry point.
//!
//! Ties the pipeline together for one request: normalize the raw job map,
//! search the priority-vector space with the decoder as objective, decode
//! the best vector, and anchor the result on the calendar.
//!
//! # Failure policy
//!
//! The engine never fails a request. Empty input yields the degenerate
//! result directly; a primary-strategy failure engages the random fallback;
//! a fallback failure (not expected in practice) still yields the
//! degenerate result. Callers read an empty `team_assignments` as "no
//! assignment could be computed", not as an error.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::calendar::map_schedule;
use crate::decoder;
use crate::models::AssignmentResult;
use crate::problem::{JobsRequest, Problem};
use crate::render::ScheduleRenderer;
use crate::search::{RandomSearch, SearchStrategy, SimulatedAnnealing};

/// Explicit per-engine configuration.
///
/// Replaces the ambient constants of earlier designs (fixed iteration
/// counts, hard-coded fallback names) with caller-supplied parameters.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Annealing iteration budget.
    pub max_iterations: usize,
    /// Vectors drawn by the random fallback.
    pub fallback_samples: usize,
    /// RNG seed for reproducible runs; `None` draws from the OS.
    pub seed: Option<u64>,
    /// Wall-clock budget for the search; best-so-far wins when it expires.
    pub deadline: Option<std::time::Duration>,
    /// Result name used when the schedule is empty.
    pub default_name: String,
}

impl EngineConfig {
    /// Sets the annealing iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the fallback sample count.
    pub fn with_fallback_samples(mut self, fallback_samples: usize) -> Self {
        self.fallback_samples = fallback_samples;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock budget.
    pub fn with_deadline(mut self, deadline: std::time::Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets the default result name.
    pub fn with_default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = name.into();
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            fallback_samples: 16,
            seed: None,
            deadline: None,
            default_name: "Job".into(),
        }
    }
}

/// The scheduling engine.
///
/// Holds a primary [`SearchStrategy`] (simulated annealing by default) and
/// an optional [`ScheduleRenderer`]. No state is shared between requests:
/// every call builds fresh availability maps and vectors.
pub struct Engine {
    config: EngineConfig,
    strategy: Box<dyn SearchStrategy>,
    renderer: Option<Box<dyn ScheduleRenderer>>,
}

impl Engine {
    /// Creates an engine with the annealing strategy configured from `config`.
    pub fn new(config: EngineConfig) -> Self {
        let mut annealing = SimulatedAnnealing::new().with_max_iterations(config.max_iterations);
        if let Some(seed) = config.seed {
            annealing = annealing.with_seed(seed);
        }
        if let Some(deadline) = config.deadline {
            annealing = annealing.with_deadline(deadline);
        }

        Self {
            config,
            strategy: Box::new(annealing),
            renderer: None,
        }
    }

    /// Replaces the primary search strategy.
    pub fn with_strategy(mut self, strategy: Box<dyn SearchStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    /// Attaches a renderer. Render failures are logged, never surfaced.
    pub fn with_renderer(mut self, renderer: Box<dyn ScheduleRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Optimizes a request into a calendar-anchored assignment.
    ///
    /// `start_at` anchors the schedule; `None` means now.
    pub fn optimize(
        &self,
        jobs: &JobsRequest,
        start_at: Option<DateTime<Utc>>,
    ) -> AssignmentResult {
        let start_at = start_at.unwrap_or_else(Utc::now);

        let problem = Problem::from_request(jobs);
        let operations = problem.flattened_operations();
        if operations.is_empty() {
            debug!("empty request, returning degenerate result");
            return AssignmentResult::degenerate(&self.config.default_name, start_at);
        }

        info!(
            jobs = problem.jobs.len(),
            operations = operations.len(),
            "starting optimization"
        );

        let objective = |vector: &[f64]| decoder::makespan(&operations, vector) as f64;

        let outcome = match self.strategy.minimize(&objective, operations.len()) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(error = %err, "primary search failed, engaging random fallback");
                let mut fallback = RandomSearch::new(self.config.fallback_samples);
                if let Some(seed) = self.config.seed {
                    fallback = fallback.with_seed(seed);
                }
                match fallback.minimize(&objective, operations.len()) {
                    Ok(outcome) => outcome,
                    Err(err) => {
                        warn!(error = %err, "fallback search failed, returning degenerate result");
                        return AssignmentResult::degenerate(
                            &self.config.default_name,
                            start_at,
                        );
                    }
                }
            }
        };

        let schedule = decoder::decode(&operations, &outcome.vector);
        info!(
            makespan_s = schedule.makespan_s(),
            evaluations = outcome.evaluations,
            "optimization complete"
        );

        if let Some(renderer) = &self.renderer {
            if let Err(err) = renderer.render(&schedule) {
                warn!(error = %err, "schedule rendering failed, result unaffected");
            }
        }

        map_schedule(&schedule, start_at, &self.config.default_name)
    }
}
