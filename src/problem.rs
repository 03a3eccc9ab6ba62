//! Problem model: raw request normalization.
//!
//! Turns the caller's job-name → operation-spec map into [`Job`]s and a
//! flattened operation list for the decoder. Equipment entries using the
//! reserved `task_<id>` convention are stripped into the operation's task
//! reference during normalization.
//!
//! Nothing is rejected here: validation of referenced external entities is
//! the caller's responsibility. The only guarantee is that the flattened
//! ordering is stable and reproducible for a given input.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Job, Operation};

/// Reserved equipment-name prefix embedding an external task reference.
pub const TASK_REF_PREFIX: &str = "task_";

/// Raw operation specification as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationSpec {
    /// Candidate team names.
    pub teams: Vec<String>,
    /// Equipment names; entries like `task_42` carry the task reference.
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Processing time (s, positive).
    pub duration_s: i64,
}

impl OperationSpec {
    /// Creates a spec with no equipment.
    pub fn new(teams: Vec<String>, duration_s: i64) -> Self {
        Self {
            teams,
            equipment: Vec::new(),
            duration_s,
        }
    }

    /// Sets the equipment list.
    pub fn with_equipment(mut self, equipment: Vec<String>) -> Self {
        self.equipment = equipment;
        self
    }
}

/// Ordered job-name → operation-spec map.
///
/// A `BTreeMap` so the flattened operation order is reproducible for a
/// given input regardless of hash seeding.
pub type JobsRequest = BTreeMap<String, Vec<OperationSpec>>;

/// A flattened operation annotated with its owning job.
///
/// Position in the flattened list is the operation's global index; the
/// priority vector is parallel to this list.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatOperation {
    /// Owning job name.
    pub job: String,
    /// Candidate team names.
    pub teams: Vec<String>,
    /// Processing time (s).
    pub duration_s: i64,
    /// External task reference.
    pub task: Option<i64>,
}

/// A normalized scheduling problem.
///
/// Exists only for the duration of one optimization call.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    /// Jobs in request order.
    pub jobs: Vec<Job>,
}

impl Problem {
    /// Normalizes a raw request.
    ///
    /// Per-job operation order is preserved; `task_<id>` equipment entries
    /// with a numeric suffix become the operation's task reference and are
    /// removed from the equipment list. Non-numeric suffixes stay put.
    pub fn from_request(request: &JobsRequest) -> Self {
        let jobs = request
            .iter()
            .map(|(name, specs)| {
                let mut job = Job::new(name);
                for spec in specs {
                    let (equipment, task) = split_task_ref(&spec.equipment);
                    let mut op = Operation::new(spec.teams.clone(), spec.duration_s)
                        .with_equipment(equipment);
                    if let Some(task) = task {
                        op = op.with_task(task);
                    }
                    job = job.with_operation(op);
                }
                job
            })
            .collect();

        Self { jobs }
    }

    /// Flattens all operations, annotated with their owning job name.
    ///
    /// Jobs appear in request order; operations keep their declared
    /// per-job order.
    pub fn flattened_operations(&self) -> Vec<FlatOperation> {
        self.jobs
            .iter()
            .flat_map(|job| {
                job.operations.iter().map(|op| FlatOperation {
                    job: job.name.clone(),
                    teams: op.teams.clone(),
                    duration_s: op.duration_s,
                    task: op.task,
                })
            })
            .collect()
    }

    /// Total number of operations across all jobs.
    pub fn operation_count(&self) -> usize {
        self.jobs.iter().map(|j| j.operation_count()).sum()
    }
}

/// Splits the reserved task reference out of an equipment list.
///
/// The last parseable `task_<id>` entry wins if several are present.
fn split_task_ref(equipment: &[String]) -> (Vec<String>, Option<i64>) {
    let mut filtered = Vec::with_capacity(equipment.len());
    let mut task = None;

    for name in equipment {
        match name
            .strip_prefix(TASK_REF_PREFIX)
            .and_then(|suffix| suffix.parse::<i64>().ok())
        {
            Some(id) => task = Some(id),
            None => filtered.push(name.clone()),
        }
    }

    (filtered, task)
}
