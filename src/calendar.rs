//! Calendar mapper: relative schedule → absolute team assignments.
//!
//! Anchors a decoder schedule to an absolute start instant and regroups it
//! into the per-team [`AssignmentResult`] the persistence layer consumes.
//! Per-team slot lists come out chronologically ordered and, because the
//! decoder never overlaps a team, mutually non-overlapping.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

use crate::models::{AssignmentResult, Schedule, TaskSlot, TeamAssignment};

/// Maps a relative schedule onto the calendar.
///
/// Every entry's absolute begin/end is `start_at` plus its offsets. The
/// result's `name` is the job of the first-placed entry, falling back to
/// `default_name` for an empty schedule, which yields the degenerate
/// result: `begin = end = start_at`, zero timespan, no assignments.
pub fn map_schedule(
    schedule: &Schedule,
    start_at: DateTime<Utc>,
    default_name: &str,
) -> AssignmentResult {
    let Some(first) = schedule.entries.first() else {
        return AssignmentResult::degenerate(default_name, start_at);
    };
    let name = first.job.clone();

    // BTreeMap keeps team order deterministic (sorted by name).
    let mut by_team: BTreeMap<&str, Vec<TaskSlot>> = BTreeMap::new();
    for entry in &schedule.entries {
        by_team.entry(entry.team.as_str()).or_default().push(TaskSlot {
            task_id: entry.task,
            begin_time: start_at + Duration::seconds(entry.start_s),
            end_time: start_at + Duration::seconds(entry.end_s),
            duration: entry.duration_s,
        });
    }
    for slots in by_team.values_mut() {
        slots.sort_by_key(|slot| slot.begin_time);
    }

    let begin = start_at
        + Duration::seconds(schedule.entries.iter().map(|e| e.start_s).min().unwrap_or(0));
    let end = start_at + Duration::seconds(schedule.makespan_s());

    AssignmentResult {
        name,
        begin,
        end,
        timespan: (end - begin).num_seconds(),
        team_assignments: by_team
            .into_iter()
            .map(|(team, tasks)| TeamAssignment {
                team: team.to_string(),
                tasks,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleEntry;
    use chrono::TimeZone;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap()
    }

    fn entry(
        job: &str,
        team: &str,
        start_s: i64,
        end_s: i64,
        task: Option<i64>,
    ) -> ScheduleEntry {
        ScheduleEntry {
            job: job.into(),
            team: team.into(),
            start_s,
            end_s,
            duration_s: end_s - start_s,
            op_index: 0,
            task,
        }
    }

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.add_entry(entry("Overhaul", "A", 0, 900, Some(267)));
        s.add_entry(entry("Overhaul", "B", 900, 1500, Some(269)));
        s.add_entry(entry("Overhaul", "A", 900, 2100, Some(271)));
        s
    }

    #[test]
    fn test_empty_schedule_is_degenerate() {
        let result = map_schedule(&Schedule::new(), anchor(), "Job");
        assert_eq!(result.name, "Job");
        assert_eq!(result.begin, anchor());
        assert_eq!(result.end, anchor());
        assert_eq!(result.timespan, 0);
        assert!(result.is_empty());
    }

    #[test]
    fn test_absolute_anchoring() {
        let result = map_schedule(&sample_schedule(), anchor(), "Job");

        assert_eq!(result.name, "Overhaul");
        assert_eq!(result.begin, anchor());
        assert_eq!(result.end, anchor() + Duration::seconds(2100));
        assert_eq!(result.timespan, 2100);

        let a = result.team("A").unwrap();
        assert_eq!(a.tasks[0].begin_time, anchor());
        assert_eq!(a.tasks[0].end_time, anchor() + Duration::seconds(900));
        assert_eq!(a.tasks[1].begin_time, anchor() + Duration::seconds(900));
    }

    #[test]
    fn test_grouping_and_order() {
        let result = map_schedule(&sample_schedule(), anchor(), "Job");

        assert_eq!(result.team_assignments.len(), 2);
        // Teams sorted by name.
        assert_eq!(result.team_assignments[0].team, "A");
        assert_eq!(result.team_assignments[1].team, "B");

        // Per-team slots chronological and non-overlapping.
        for team in &result.team_assignments {
            for window in team.tasks.windows(2) {
                assert!(window[0].end_time <= window[1].begin_time);
            }
        }
    }

    #[test]
    fn test_task_references_carried() {
        let result = map_schedule(&sample_schedule(), anchor(), "Job");
        let ids: Vec<Option<i64>> = result
            .team_assignments
            .iter()
            .flat_map(|t| t.tasks.iter().map(|s| s.task_id))
            .collect();
        assert!(ids.contains(&Some(267)));
        assert!(ids.contains(&Some(269)));
        assert!(ids.contains(&Some(271)));
    }

    #[test]
    fn test_per_team_duration_round_trip() {
        let schedule = sample_schedule();
        let result = map_schedule(&schedule, anchor(), "Job");

        for team in &result.team_assignments {
            let mapped: i64 = team.tasks.iter().map(|t| t.duration).sum();
            let scheduled: i64 = schedule
                .entries_for_team(&team.team)
                .iter()
                .map(|e| e.duration_s)
                .sum();
            assert_eq!(mapped, scheduled);
        }
    }

    #[test]
    fn test_late_first_start_shifts_begin() {
        // A schedule whose earliest offset is nonzero begins later than the
        // anchor, and the timespan only covers the occupied window.
        let mut s = Schedule::new();
        s.add_entry(entry("J1", "A", 300, 700, None));
        let result = map_schedule(&s, anchor(), "Job");

        assert_eq!(result.begin, anchor() + Duration::seconds(300));
        assert_eq!(result.end, anchor() + Duration::seconds(700));
        assert_eq!(result.timespan, 400);
    }
}
