//! Schedule rendering seam.
//!
//! Visualization is an external collaborator: the engine only knows this
//! trait. Any backend (plotting crate, external service) can implement it;
//! a render failure is logged by the engine and never affects the
//! scheduling result.

use thiserror::Error;

use crate::models::Schedule;

/// Rendering failure.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The backend could not produce an image.
    #[error("rendering backend failed: {0}")]
    Backend(String),
}

/// Renders a schedule as an image artifact (a per-team timeline).
pub trait ScheduleRenderer {
    /// Produces the encoded image bytes for `schedule`.
    fn render(&self, schedule: &Schedule) -> Result<Vec<u8>, RenderError>;
}
