//! # Height Sources
//!
//! The box height can come from several places depending on the capture
//! flow; the strategy is picked per measurement rather than baked into
//! separate code paths.

use crate::session::PlaneSession;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Strategy for resolving the box height of a plane-anchored outline.
///
/// # Example
///
/// ```rust
/// use arbox_capture::{HeightSource, PlaneSession};
///
/// let session = PlaneSession::new();
/// assert_eq!(HeightSource::Fixed(0.4).resolve(&session), 0.4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HeightSource {
    /// Caller-supplied constant height, in meters.
    Fixed(f64),
    /// Height measured from a reference point (e.g. a tap on the object's
    /// top) above the horizontal anchor plane.
    PointDerived(DVec3),
    /// Height derived from accumulated vertical-plane observations.
    VerticalPlaneDerived,
}

impl HeightSource {
    /// Resolves the height against the session's observations.
    ///
    /// Strategies that need an anchor or cues the session does not have
    /// fall back to the session's configured default height.
    pub fn resolve(&self, session: &PlaneSession) -> f64 {
        let default_height = session.config().default_height;

        match self {
            Self::Fixed(value) => *value,
            Self::PointDerived(point) => match session.horizontal() {
                Some(plane) => (point.y - plane.center.y).abs(),
                None => {
                    trace!("point-derived height without anchor, using fallback");
                    default_height
                }
            },
            Self::VerticalPlaneDerived => {
                session.derived_height().unwrap_or(default_height)
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
