//! Schedule decoder: deterministic list-scheduling simulator.
//!
//! Given the flattened operation list and a priority vector of equal
//! length, produces a concrete, constraint-respecting [`Schedule`] and its
//! makespan.
//!
//! # Algorithm
//!
//! 1. Sort operation slots by ascending priority value (stable, so ties
//!    keep their original index order).
//! 2. The sorted order decides which *job* advances next; within a job the
//!    declared operation order always holds — the k-th time a job is drawn,
//!    its k-th declared operation is placed.
//! 3. Each operation goes to the candidate team with the smallest current
//!    available time (ties go to the first listed candidate), starting at
//!    `max(team_available, job_available)`.
//!
//! # Guarantees
//!
//! - Team exclusivity: entries sharing a team never overlap, by construction.
//! - Intra-job precedence: operation *n* never starts before *n − 1* ends.
//! - Determinism: identical operations and priorities yield an identical
//!   schedule.
//!
//! # Reference
//! Bierwirth (1995), "A generalized permutation approach to JSSP"

use std::collections::{HashMap, VecDeque};

use tracing::trace;

use crate::models::{Schedule, ScheduleEntry};
use crate::problem::FlatOperation;

/// Decodes a priority vector into a schedule.
///
/// `priorities` is parallel to `operations`; values only derive the
/// execution order. Missing values (shorter vector) sort last. An empty
/// operation list yields an empty schedule with makespan 0.
pub fn decode(operations: &[FlatOperation], priorities: &[f64]) -> Schedule {
    let mut schedule = Schedule::new();
    if operations.is_empty() {
        return schedule;
    }

    // Ascending priority; stable sort keeps ties in original index order.
    // NaN and missing values compare as equal / last rather than panicking.
    let mut order: Vec<usize> = (0..operations.len()).collect();
    order.sort_by(|&a, &b| {
        let pa = priorities.get(a).copied().unwrap_or(f64::INFINITY);
        let pb = priorities.get(b).copied().unwrap_or(f64::INFINITY);
        pa.partial_cmp(&pb).unwrap_or(std::cmp::Ordering::Equal)
    });

    // Per-job queues of flattened indices in declared order.
    let mut pending: HashMap<&str, VecDeque<usize>> = HashMap::new();
    for (idx, op) in operations.iter().enumerate() {
        pending.entry(op.job.as_str()).or_default().push_back(idx);
    }

    let mut team_available: HashMap<&str, i64> = HashMap::new();
    let mut job_available: HashMap<&str, i64> = HashMap::new();

    for &slot in &order {
        let job = operations[slot].job.as_str();
        // The slot selects the job; the job's next pending operation runs.
        let Some(idx) = pending.get_mut(job).and_then(|q| q.pop_front()) else {
            continue;
        };
        let op = &operations[idx];

        // Earliest-available candidate team; min_by_key keeps the first
        // minimal element, so ties go to the first listed candidate.
        let Some(team) = op
            .teams
            .iter()
            .min_by_key(|t| team_available.get(t.as_str()).copied().unwrap_or(0))
        else {
            // No candidate team supplied; the caller should have substituted
            // a sentinel before calling in. Skip rather than fail.
            continue;
        };

        let team_ready = team_available.get(team.as_str()).copied().unwrap_or(0);
        let job_ready = job_available.get(job).copied().unwrap_or(0);
        let start = team_ready.max(job_ready);
        let end = start + op.duration_s;

        trace!(job, team = team.as_str(), start, end, "placed operation");

        schedule.add_entry(ScheduleEntry {
            job: op.job.clone(),
            team: team.clone(),
            start_s: start,
            end_s: end,
            duration_s: op.duration_s,
            op_index: idx,
            task: op.task,
        });

        team_available.insert(team.as_str(), end);
        job_available.insert(job, end);
    }

    schedule
}

/// Convenience objective: makespan of the decoded schedule (s).
pub fn makespan(operations: &[FlatOperation], priorities: &[f64]) -> i64 {
    decode(operations, priorities).makespan_s()
}
