//! # Observations
//!
//! Fully-resolved input types handed over by the AR layer. Plane tracking
//! itself is out of scope; these types carry only what the measurement
//! pipeline consumes.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Horizontal width/depth of a detected planar surface, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    /// Extent along X.
    pub width: f64,
    /// Extent along Z.
    pub depth: f64,
}

impl Extent {
    /// Creates an extent from width and depth.
    pub fn new(width: f64, depth: f64) -> Self {
        Self { width, depth }
    }
}

/// Alignment of a detected plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaneAlignment {
    /// A floor- or table-like surface the box rests on.
    Horizontal,
    /// A wall- or side-like surface used as a height cue.
    Vertical,
}

/// One detected plane, fully resolved by the AR layer.
///
/// # Example
///
/// ```rust
/// use arbox_capture::{Extent, PlaneAlignment, PlaneObservation};
/// use glam::DVec3;
///
/// let plane = PlaneObservation::horizontal(DVec3::ZERO, Extent::new(2.0, 1.0));
/// assert_eq!(plane.alignment, PlaneAlignment::Horizontal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneObservation {
    /// Detected alignment.
    pub alignment: PlaneAlignment,
    /// Plane center in the shared world frame.
    pub center: DVec3,
    /// Planar extent.
    pub extent: Extent,
}

impl PlaneObservation {
    /// Creates a horizontal plane observation.
    pub fn horizontal(center: DVec3, extent: Extent) -> Self {
        Self {
            alignment: PlaneAlignment::Horizontal,
            center,
            extent,
        }
    }

    /// Creates a vertical plane observation.
    pub fn vertical(center: DVec3, extent: Extent) -> Self {
        Self {
            alignment: PlaneAlignment::Vertical,
            center,
            extent,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
