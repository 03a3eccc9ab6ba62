//! Scheduling domain models.
//!
//! Core data types for one optimization request and its result:
//!
//! | Type | Role |
//! |------|------|
//! | [`Job`] / [`Operation`] | Normalized problem input |
//! | [`Schedule`] / [`ScheduleEntry`] | Relative-time decoder output |
//! | [`AssignmentResult`] | Calendar-anchored output contract |
//!
//! All types are plain data: created, consumed, and discarded per request.

mod assignment;
mod job;
mod schedule;

pub use assignment::{AssignmentResult, TaskSlot, TeamAssignment};
pub use job::{Job, Operation};
pub use schedule::{Schedule, ScheduleEntry};
