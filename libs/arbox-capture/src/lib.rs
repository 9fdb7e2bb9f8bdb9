//! # Arbox Capture
//!
//! Observation and session layer above the geometry core. Receives the
//! inputs an AR layer produces (plane detections, tapped corner points),
//! resolves a box height through a pluggable strategy, and assembles the
//! renderable outline plus measurements.
//!
//! ## Architecture
//!
//! ```text
//! AR layer (planes, taps) → arbox-capture (session + strategies) → arbox-geometry
//! ```
//!
//! ## Example
//!
//! ```rust
//! use arbox_capture::{outline_from_extent, Extent};
//!
//! let outline = outline_from_extent(Extent::new(2.0, 1.0), 0.5);
//! assert_eq!(outline.segments.len(), 12);
//! assert!((outline.measurements.volume - 1.0).abs() < 1e-9);
//! ```

pub mod accumulator;
pub mod error;
pub mod height;
pub mod observation;
pub mod outline;
pub mod report;
pub mod session;

// Re-export public API
pub use accumulator::{AccumulatorState, CornerAccumulator};
pub use error::CaptureError;
pub use height::HeightSource;
pub use observation::{Extent, PlaneAlignment, PlaneObservation};
pub use outline::BoxOutline;
pub use report::MeasurementReport;
pub use session::PlaneSession;

use arbox_geometry::BoxFrame;
use glam::DVec3;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Builds the outline for a detected horizontal extent and a resolved
/// height.
///
/// This is the entry point for the plane-detection flow once a height has
/// been settled (see [`HeightSource`] and [`PlaneSession`] for resolving
/// one from observations).
///
/// # Example
///
/// ```rust
/// use arbox_capture::{outline_from_extent, Extent};
///
/// let outline = outline_from_extent(Extent::new(1.0, 1.0), 1.0);
/// assert!((outline.measurements.volume - 1.0).abs() < 1e-9);
/// ```
pub fn outline_from_extent(extent: Extent, height: f64) -> BoxOutline {
    let frame = BoxFrame::from_extent(extent.width, extent.depth, height);
    BoxOutline::build(&frame)
}

/// Builds the outline for eight collected corner points.
///
/// This is the entry point for the tap-collection flow; points must follow
/// the base/top corner ordering of [`BoxFrame`](arbox_geometry::BoxFrame).
///
/// # Example
///
/// ```rust
/// use arbox_capture::outline_from_corners;
/// use glam::DVec3;
///
/// let too_few = vec![DVec3::ZERO; 3];
/// assert!(outline_from_corners(&too_few).is_err());
/// ```
pub fn outline_from_corners(points: &[DVec3]) -> Result<BoxOutline, CaptureError> {
    let frame = BoxFrame::from_corners(points)?;
    Ok(BoxOutline::build(&frame))
}
