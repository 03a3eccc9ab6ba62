//! Assignment result model (output contract).
//!
//! The calendar-anchored form of a schedule: absolute timestamps, grouped
//! per team. This is what callers persist; it owns no state beyond the
//! optimization call that produced it.
//!
//! Timestamps serialize as ISO-8601 with a `Z` suffix (chrono's RFC 3339
//! serde representation for `DateTime<Utc>`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task slot on a team's calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSlot {
    /// External task reference, if the operation carried one.
    pub task_id: Option<i64>,
    /// Absolute start.
    pub begin_time: DateTime<Utc>,
    /// Absolute end.
    pub end_time: DateTime<Utc>,
    /// Processing time (s).
    pub duration: i64,
}

/// All slots assigned to one team, chronologically ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAssignment {
    /// Team name.
    pub team: String,
    /// Slots ordered by begin time, mutually non-overlapping.
    pub tasks: Vec<TaskSlot>,
}

/// The calendar-anchored result of one optimization request.
///
/// An empty `team_assignments` list means no assignment could be computed
/// (empty input or total search failure); it is not an error signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentResult {
    /// Display name (leading job of the schedule, or the configured default).
    pub name: String,
    /// Earliest begin across all slots.
    pub begin: DateTime<Utc>,
    /// Latest end across all slots.
    pub end: DateTime<Utc>,
    /// `end - begin` (s).
    pub timespan: i64,
    /// Per-team assignment timelines.
    pub team_assignments: Vec<TeamAssignment>,
}

impl AssignmentResult {
    /// Creates the degenerate (empty but well-formed) result anchored at `at`.
    pub fn degenerate(name: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            begin: at,
            end: at,
            timespan: 0,
            team_assignments: Vec::new(),
        }
    }

    /// Whether no assignment was computed.
    pub fn is_empty(&self) -> bool {
        self.team_assignments.is_empty()
    }

    /// Returns the assignment timeline for a team, if present.
    pub fn team(&self, team: &str) -> Option<&TeamAssignment> {
        self.team_assignments.iter().find(|t| t.team == team)
    }

    /// Total number of task slots across all teams.
    pub fn task_count(&self) -> usize {
        self.team_assignments.iter().map(|t| t.tasks.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 5, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_degenerate_result() {
        let r = AssignmentResult::degenerate("Job", anchor());
        assert!(r.is_empty());
        assert_eq!(r.begin, r.end);
        assert_eq!(r.timespan, 0);
        assert_eq!(r.task_count(), 0);
    }

    #[test]
    fn test_team_lookup() {
        let r = AssignmentResult {
            name: "Overhaul".into(),
            begin: anchor(),
            end: anchor() + chrono::Duration::seconds(900),
            timespan: 900,
            team_assignments: vec![TeamAssignment {
                team: "A".into(),
                tasks: vec![TaskSlot {
                    task_id: Some(267),
                    begin_time: anchor(),
                    end_time: anchor() + chrono::Duration::seconds(900),
                    duration: 900,
                }],
            }],
        };

        assert_eq!(r.team("A").unwrap().tasks.len(), 1);
        assert!(r.team("B").is_none());
        assert_eq!(r.task_count(), 1);
    }

    #[test]
    fn test_wire_format() {
        // Field names and timestamp shape match the persistence contract.
        let r = AssignmentResult {
            name: "Overhaul".into(),
            begin: anchor(),
            end: anchor() + chrono::Duration::seconds(600),
            timespan: 600,
            team_assignments: vec![TeamAssignment {
                team: "Team A".into(),
                tasks: vec![TaskSlot {
                    task_id: Some(42),
                    begin_time: anchor(),
                    end_time: anchor() + chrono::Duration::seconds(600),
                    duration: 600,
                }],
            }],
        };

        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["name"], "Overhaul");
        assert_eq!(json["begin"], "2026-01-05T08:00:00Z");
        assert_eq!(json["end"], "2026-01-05T08:10:00Z");
        assert_eq!(json["timespan"], 600);
        assert_eq!(json["team_assignments"][0]["team"], "Team A");
        assert_eq!(json["team_assignments"][0]["tasks"][0]["task_id"], 42);
        assert_eq!(
            json["team_assignments"][0]["tasks"][0]["begin_time"],
            "2026-01-05T08:00:00Z"
        );
        assert_eq!(json["team_assignments"][0]["tasks"][0]["duration"], 600);
    }
}
