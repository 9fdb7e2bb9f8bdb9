//! # Measurements
//!
//! Scalar width/depth/height/volume extraction from a box frame.

use crate::frame::BoxFrame;
use serde::{Deserialize, Serialize};

/// Derived scalar measurements of a box frame.
///
/// All values are non-negative and share the frame's linear unit (meters
/// in the capture domain); no unit conversion is applied.
///
/// # Example
///
/// ```rust
/// use arbox_geometry::{BoxFrame, Measurements};
///
/// let measurements = Measurements::of(&BoxFrame::from_extent(2.0, 1.0, 0.5));
/// assert_eq!(measurements.width, 2.0);
/// assert_eq!(measurements.depth, 1.0);
/// assert_eq!(measurements.height, 0.5);
/// assert_eq!(measurements.volume, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    /// Extent along X, meters.
    pub width: f64,
    /// Extent along Z, meters.
    pub depth: f64,
    /// Extent along Y, meters.
    pub height: f64,
    /// width × depth × height, cubic meters.
    pub volume: f64,
}

impl Measurements {
    /// Extracts measurements from a frame.
    ///
    /// Width is read along the 0→1 base edge, depth along the 0→3 base
    /// edge, height along the 0→4 vertical. The absolute values keep all
    /// outputs non-negative even for mirrored (negative-extent) frames.
    pub fn of(frame: &BoxFrame) -> Self {
        let width = (frame.corner(1).x - frame.corner(0).x).abs();
        let depth = (frame.corner(3).z - frame.corner(0).z).abs();
        let height = (frame.corner(4).y - frame.corner(0).y).abs();

        Self {
            width,
            depth,
            height,
            volume: width * depth * height,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
