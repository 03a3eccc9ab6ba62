//! Job-shop scheduling engine.
//!
//! Schedules jobs — each an ordered sequence of operations executable by
//! any one of several candidate teams — onto shared team capacity,
//! minimizing makespan, and anchors the result on the calendar as a
//! per-team assignment timeline.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `Operation`, `Schedule`,
//!   `AssignmentResult`
//! - **`problem`**: Raw request normalization and operation flattening
//! - **`decoder`**: Deterministic priority-vector → schedule simulator
//! - **`search`**: Pluggable minimizers — simulated annealing, random fallback
//! - **`calendar`**: Relative schedule → absolute team assignments
//! - **`engine`**: The `Optimize` entry point with its fallback policy
//! - **`render`**: Visualization seam (interface only)
//!
//! # Data flow
//!
//! ```text
//! JobsRequest → Problem → flattened operations
//!     → search (decoder as objective) → best priority vector
//!     → decode → Schedule → calendar map → AssignmentResult
//! ```
//!
//! The engine never fails a request: malformed input and search failures
//! degrade to a well-formed empty result.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Bierwirth (1995), "A generalized permutation approach to JSSP"
//! - Kirkpatrick et al. (1983), "Optimization by Simulated Annealing"

pub mod calendar;
pub mod decoder;
pub mod engine;
pub mod models;
pub mod problem;
pub mod render;
pub mod search;

pub use engine::{Engine, EngineConfig};
pub use models::{AssignmentResult, Job, Operation, Schedule, ScheduleEntry, TaskSlot, TeamAssignment};
pub use problem::{FlatOperation, JobsRequest, OperationSpec, Problem, TASK_REF_PREFIX};
pub use render::{RenderError, ScheduleRenderer};
pub use search::{RandomSearch, SearchError, SearchOutcome, SearchStrategy, SimulatedAnnealing};
