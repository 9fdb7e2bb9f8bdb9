//! # Box Outline
//!
//! The assembled deliverable for one measured box: twelve oriented
//! segments for the rendering layer plus the scalar measurements.

use crate::report::MeasurementReport;
use arbox_geometry::{BoxFrame, LineSegment, Measurements};
use config::constants::EDGE_RADIUS;
use serde::{Deserialize, Serialize};

/// Renderable outline and measurements for one box.
///
/// Segments appear in edge-table order (base, top, verticals) so the
/// rendering layer sees a stable node ordering across frames.
///
/// # Example
///
/// ```rust
/// use arbox_capture::BoxOutline;
/// use arbox_geometry::BoxFrame;
///
/// let outline = BoxOutline::build(&BoxFrame::from_extent(2.0, 1.0, 0.5));
/// assert_eq!(outline.segments.len(), 12);
/// assert!((outline.measurements.volume - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxOutline {
    /// The twelve renderable segments, in edge-table order.
    pub segments: Vec<LineSegment>,
    /// Scalar measurements of the framed box.
    pub measurements: Measurements,
    /// Cylinder radius, in meters, for the rendering layer.
    pub edge_radius: f64,
}

impl BoxOutline {
    /// Assembles the outline for a frame with the default edge radius.
    pub fn build(frame: &BoxFrame) -> Self {
        Self::with_radius(frame, EDGE_RADIUS)
    }

    /// Assembles the outline for a frame with an explicit edge radius.
    pub fn with_radius(frame: &BoxFrame, edge_radius: f64) -> Self {
        Self {
            segments: frame.segments(),
            measurements: Measurements::of(frame),
            edge_radius,
        }
    }

    /// Formats the measurements for display.
    pub fn report(&self) -> MeasurementReport {
        MeasurementReport::from(self.measurements)
    }
}

// =============================================================================
// TESTS
// =============================================================================
