//! # Box Frame
//!
//! The eight-corner representation of a rectangular box, in a fixed
//! base/top ordering that the edge table depends on.

use crate::edge::{Edge, EDGES};
use crate::error::GeometryError;
use crate::segment::LineSegment;
use config::constants::CORNER_COUNT;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Ordered corner points of a rectangular box.
///
/// Corners 0-3 form the base rectangle (counter-clockwise when viewed from
/// above), corners 4-7 the top rectangle directly above 0-3. For a valid
/// right rectangular prism each top corner differs from its base
/// counterpart only in the y coordinate; this is not validated, matching
/// the tolerance of the capture flow that feeds user-tapped points in.
///
/// A frame is constructed once per detection or tap-collection event and
/// is immutable thereafter.
///
/// # Example
///
/// ```rust
/// use arbox_geometry::BoxFrame;
/// use glam::DVec3;
///
/// let frame = BoxFrame::from_extent(2.0, 1.0, 0.5);
/// assert_eq!(frame.corner(0), DVec3::new(-1.0, 0.0, -0.5));
/// assert_eq!(frame.corner(4), DVec3::new(-1.0, 0.5, -0.5));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxFrame {
    /// Corner positions (f64 for precision), base 0-3 then top 4-7.
    corners: [DVec3; CORNER_COUNT],
}

impl BoxFrame {
    /// Builds a frame from a horizontal extent and a height.
    ///
    /// The box is centered on the origin in the horizontal plane and
    /// extends from y=0 to y=height. Degenerate (zero) and negative
    /// values are accepted; they propagate to a zero-volume or mirrored
    /// result rather than failing.
    ///
    /// # Arguments
    ///
    /// * `width` - Extent along X, in meters
    /// * `depth` - Extent along Z, in meters
    /// * `height` - Extent along Y, in meters
    pub fn from_extent(width: f64, depth: f64, height: f64) -> Self {
        let half_w = width / 2.0;
        let half_d = depth / 2.0;

        // Base rectangle (y = 0), counter-clockwise from above
        let c0 = DVec3::new(-half_w, 0.0, -half_d); // 0: left-back
        let c1 = DVec3::new(half_w, 0.0, -half_d); // 1: right-back
        let c2 = DVec3::new(half_w, 0.0, half_d); // 2: right-front
        let c3 = DVec3::new(-half_w, 0.0, half_d); // 3: left-front

        // Top rectangle (y = height), directly above the base
        let c4 = DVec3::new(-half_w, height, -half_d); // 4: above 0
        let c5 = DVec3::new(half_w, height, -half_d); // 5: above 1
        let c6 = DVec3::new(half_w, height, half_d); // 6: above 2
        let c7 = DVec3::new(-half_w, height, half_d); // 7: above 3

        Self {
            corners: [c0, c1, c2, c3, c4, c5, c6, c7],
        }
    }

    /// Builds a frame from exactly eight collected corner points.
    ///
    /// Points must follow the fixed base/top ordering described on
    /// [`BoxFrame`]. No prism validation is performed beyond the count
    /// check; skewed input produces a skewed outline.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arbox_geometry::BoxFrame;
    /// use glam::DVec3;
    ///
    /// let too_few = vec![DVec3::ZERO; 5];
    /// assert!(BoxFrame::from_corners(&too_few).is_err());
    /// ```
    pub fn from_corners(points: &[DVec3]) -> Result<Self, GeometryError> {
        if points.len() != CORNER_COUNT {
            return Err(GeometryError::WrongCornerCount {
                expected: CORNER_COUNT,
                got: points.len(),
            });
        }

        let mut corners = [DVec3::ZERO; CORNER_COUNT];
        corners.copy_from_slice(points);
        Ok(Self { corners })
    }

    /// Returns the corner at the given index (0-7).
    #[inline]
    pub fn corner(&self, index: usize) -> DVec3 {
        self.corners[index]
    }

    /// Returns all eight corners, base 0-3 then top 4-7.
    #[inline]
    pub fn corners(&self) -> &[DVec3; CORNER_COUNT] {
        &self.corners
    }

    /// Returns the constant edge table applied to any frame.
    #[inline]
    pub fn edges() -> &'static [Edge] {
        &EDGES
    }

    /// Returns the renderable segment for one edge of this frame.
    pub fn segment(&self, edge: Edge) -> LineSegment {
        LineSegment::between(self, edge)
    }

    /// Returns the twelve renderable segments in edge-table order.
    ///
    /// Order is deterministic (base, top, then verticals) so the rendering
    /// layer can rely on stable node ordering.
    pub fn segments(&self) -> Vec<LineSegment> {
        EDGES.iter().map(|&edge| self.segment(edge)).collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extent_base_corners() {
        let frame = BoxFrame::from_extent(2.0, 1.0, 0.5);
        assert_eq!(frame.corner(0), DVec3::new(-1.0, 0.0, -0.5));
        assert_eq!(frame.corner(1), DVec3::new(1.0, 0.0, -0.5));
        assert_eq!(frame.corner(2), DVec3::new(1.0, 0.0, 0.5));
        assert_eq!(frame.corner(3), DVec3::new(-1.0, 0.0, 0.5));
    }

    #[test]
    fn test_from_extent_top_above_base() {
        let frame = BoxFrame::from_extent(2.0, 1.0, 0.5);
        for base in 0..4 {
            let top = frame.corner(base + 4);
            let bottom = frame.corner(base);
            assert_eq!(top.x, bottom.x);
            assert_eq!(top.z, bottom.z);
            assert_eq!(top.y, 0.5);
        }
    }

    #[test]
    fn test_from_extent_degenerate_is_accepted() {
        let frame = BoxFrame::from_extent(0.0, 0.0, 0.0);
        for index in 0..CORNER_COUNT {
            assert_eq!(frame.corner(index), DVec3::ZERO);
        }
    }

    #[test]
    fn test_from_corners_roundtrip() {
        let points: Vec<DVec3> = (0..8)
            .map(|i| DVec3::new(i as f64, 0.0, -(i as f64)))
            .collect();
        let frame = BoxFrame::from_corners(&points).unwrap();
        assert_eq!(frame.corners().as_slice(), points.as_slice());
    }

    #[test]
    fn test_from_corners_rejects_wrong_count() {
        let too_few = vec![DVec3::ZERO; 7];
        let too_many = vec![DVec3::ZERO; 9];
        assert_eq!(
            BoxFrame::from_corners(&too_few).unwrap_err(),
            GeometryError::WrongCornerCount {
                expected: 8,
                got: 7
            }
        );
        assert_eq!(
            BoxFrame::from_corners(&too_many).unwrap_err(),
            GeometryError::WrongCornerCount {
                expected: 8,
                got: 9
            }
        );
    }

    #[test]
    fn test_segments_are_twelve() {
        let frame = BoxFrame::from_extent(1.0, 1.0, 1.0);
        assert_eq!(frame.segments().len(), 12);
    }
}
