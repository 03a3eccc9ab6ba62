//! Schedule (decoder output) model.
//!
//! A schedule is a relative-time placement of every operation on a team:
//! one entry per operation, offsets in seconds from t=0. The decoder
//! guarantees that entries sharing a team never overlap.

use serde::{Deserialize, Serialize};

/// One operation placed on a team at a relative time offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Owning job name.
    pub job: String,
    /// Team executing the operation.
    pub team: String,
    /// Start offset (s, inclusive).
    pub start_s: i64,
    /// End offset (s, exclusive).
    pub end_s: i64,
    /// Processing time (s); equals `end_s - start_s`.
    pub duration_s: i64,
    /// Index into the flattened operation list.
    pub op_index: usize,
    /// External task reference carried through from the operation.
    pub task: Option<i64>,
}

/// A complete relative-time schedule.
///
/// Entries appear in execution order (the order the decoder placed them).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// One entry per scheduled operation.
    pub entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn add_entry(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Makespan: latest end offset across all entries (s). Zero when empty.
    pub fn makespan_s(&self) -> i64 {
        self.entries.iter().map(|e| e.end_s).max().unwrap_or(0)
    }

    /// Whether the schedule has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns all entries assigned to a team.
    pub fn entries_for_team(&self, team: &str) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.team == team).collect()
    }

    /// Returns all entries belonging to a job.
    pub fn entries_for_job(&self, job: &str) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.job == job).collect()
    }

    /// Completion offset for a job: latest end among its entries (s).
    pub fn job_completion_s(&self, job: &str) -> Option<i64> {
        self.entries
            .iter()
            .filter(|e| e.job == job)
            .map(|e| e.end_s)
            .max()
    }

    /// Distinct team names with at least one entry, sorted.
    pub fn team_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.iter().map(|e| e.team.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}
