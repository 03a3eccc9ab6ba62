//! Job and operation models.
//!
//! A job is a named, ordered sequence of operations. Each operation names
//! the candidate teams that could execute it, the equipment it needs, and
//! its processing duration.
//!
//! # Time Representation
//! All durations and offsets are in whole seconds. Relative offsets are
//! anchored to an absolute instant by the calendar mapper.

use serde::{Deserialize, Serialize};

/// A single schedulable operation.
///
/// Belongs to exactly one [`Job`]. Any one of the candidate teams may
/// execute it; the candidate order only matters for tie-breaking during
/// decoding. Equipment is informational and not capacity-scheduled.
/// Operations are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Candidate team names (any one may execute this operation).
    pub teams: Vec<String>,
    /// Required equipment names (not scheduled for capacity).
    pub equipment: Vec<String>,
    /// Processing time (s).
    pub duration_s: i64,
    /// External task reference, correlated back to the caller's task entity.
    pub task: Option<i64>,
}

impl Operation {
    /// Creates an operation with no equipment and no task reference.
    ///
    /// Non-positive durations are normalized to zero; rejecting them is the
    /// caller's input-validation concern.
    pub fn new(teams: Vec<String>, duration_s: i64) -> Self {
        Self {
            teams,
            equipment: Vec::new(),
            duration_s: duration_s.max(0),
            task: None,
        }
    }

    /// Sets the required equipment.
    pub fn with_equipment(mut self, equipment: Vec<String>) -> Self {
        self.equipment = equipment;
        self
    }

    /// Sets the external task reference.
    pub fn with_task(mut self, task: i64) -> Self {
        self.task = Some(task);
        self
    }
}

/// A job: a name plus the declared execution order of its operations.
///
/// The declared order is the intended precedence — operation `n` may not
/// start before operation `n − 1` ends, which the decoder enforces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Job name (unique within one request).
    pub name: String,
    /// Operations in declared execution order.
    pub operations: Vec<Operation>,
}

impl Job {
    /// Creates an empty job.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operations: Vec::new(),
        }
    }

    /// Appends an operation.
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Total processing time across all operations (s).
    pub fn total_duration_s(&self) -> i64 {
        self.operations.iter().map(|op| op.duration_s).sum()
    }

    /// Number of operations.
    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }
}
