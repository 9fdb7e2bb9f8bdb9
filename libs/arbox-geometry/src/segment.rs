//! # Line Segments
//!
//! Renderable edge primitives. Each segment carries everything the
//! rendering layer needs to place an oriented thin cylinder: endpoints,
//! midpoint, length, and the rotation aligning the canonical cylinder
//! axis with the segment direction.

use crate::edge::Edge;
use crate::frame::BoxFrame;
use config::constants::EPSILON;
use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Canonical axis of an unrotated cylinder, +Y.
pub const CYLINDER_AXIS: DVec3 = DVec3::Y;

/// A renderable line segment derived from one box edge.
///
/// Length, midpoint, and rotation are derived views computed on demand;
/// the segment itself is just the endpoint pair.
///
/// # Example
///
/// ```rust
/// use arbox_geometry::LineSegment;
/// use glam::DVec3;
///
/// let segment = LineSegment::new(DVec3::ZERO, DVec3::new(0.0, 2.0, 0.0));
/// assert_eq!(segment.length(), 2.0);
/// assert_eq!(segment.midpoint(), DVec3::new(0.0, 1.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    /// Segment start point.
    pub start: DVec3,
    /// Segment end point.
    pub end: DVec3,
}

impl LineSegment {
    /// Creates a segment between two points.
    pub fn new(start: DVec3, end: DVec3) -> Self {
        Self { start, end }
    }

    /// Creates the segment for one edge of a frame.
    ///
    /// Panics if the edge references a corner index outside 0-7; the
    /// constant edge table never does.
    pub fn between(frame: &BoxFrame, edge: Edge) -> Self {
        Self {
            start: frame.corner(edge.start),
            end: frame.corner(edge.end),
        }
    }

    /// Direction vector from start to end (not normalized).
    #[inline]
    pub fn direction(&self) -> DVec3 {
        self.end - self.start
    }

    /// Euclidean length of the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Placement point for the rendered cylinder, halfway between the
    /// endpoints.
    #[inline]
    pub fn midpoint(&self) -> DVec3 {
        (self.start + self.end) / 2.0
    }

    /// Rotation aligning the canonical cylinder axis with this segment.
    ///
    /// See [`alignment_rotation`] for the convention and the degenerate
    /// contract.
    pub fn rotation(&self) -> DQuat {
        alignment_rotation(self.direction())
    }
}

/// Computes the unit quaternion rotating [`CYLINDER_AXIS`] onto
/// `direction`.
///
/// The rotation is built from the axis-angle pair
/// axis = cross(+Y, direction), angle = acos(clamp(dot, -1, 1)) and
/// normalized through [`DQuat::from_axis_angle`], so the result is always
/// a valid unit quaternion. Convention: right-handed frame, Y up,
/// counter-clockwise rotation looking down the axis toward the origin.
///
/// Degenerate contract (never NaN):
///
/// - zero-length direction → identity;
/// - direction parallel to the axis → identity;
/// - direction anti-parallel → half-turn about +X (any axis
///   perpendicular to +Y is valid; +X is the documented choice).
///
/// # Example
///
/// ```rust
/// use arbox_geometry::segment::alignment_rotation;
/// use glam::{DQuat, DVec3};
///
/// assert_eq!(alignment_rotation(DVec3::ZERO), DQuat::IDENTITY);
///
/// let rotation = alignment_rotation(DVec3::X);
/// let aligned = rotation * DVec3::Y;
/// assert!((aligned - DVec3::X).length() < 1e-9);
/// ```
pub fn alignment_rotation(direction: DVec3) -> DQuat {
    let length = direction.length();
    if length < EPSILON {
        return DQuat::IDENTITY;
    }

    let dir = direction / length;
    let dot = CYLINDER_AXIS.dot(dir).clamp(-1.0, 1.0);
    let axis = CYLINDER_AXIS.cross(dir);

    if axis.length_squared() < EPSILON {
        // Parallel or anti-parallel to the cylinder axis.
        if dot > 0.0 {
            return DQuat::IDENTITY;
        }
        return DQuat::from_axis_angle(DVec3::X, PI);
    }

    DQuat::from_axis_angle(axis.normalize(), dot.acos())
}

// =============================================================================
// TESTS
// =============================================================================
