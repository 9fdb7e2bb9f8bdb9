//! # Corner Accumulator
//!
//! Explicit collection state for the tap flow: corners arrive one at a
//! time and the frame becomes buildable at exactly eight.

use crate::error::CaptureError;
use arbox_geometry::BoxFrame;
use config::constants::CORNER_COUNT;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Progress of corner collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccumulatorState {
    /// Fewer than eight corners collected so far.
    Collecting(usize),
    /// Exactly eight corners collected; the frame can be built.
    Ready,
}

/// Collects tapped corner points until a frame can be built.
///
/// `push` reports the state after each point so the caller can react to
/// the `Ready` transition exactly at the eighth corner. Pushing into a
/// complete accumulator is an error rather than a silent drop.
///
/// # Example
///
/// ```rust
/// use arbox_capture::{AccumulatorState, CornerAccumulator};
/// use glam::DVec3;
///
/// let mut accumulator = CornerAccumulator::new();
/// for i in 0..8 {
///     let state = accumulator.push(DVec3::splat(i as f64)).unwrap();
///     if i < 7 {
///         assert_eq!(state, AccumulatorState::Collecting(i + 1));
///     } else {
///         assert_eq!(state, AccumulatorState::Ready);
///     }
/// }
/// assert!(accumulator.push(DVec3::ZERO).is_err());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CornerAccumulator {
    points: Vec<DVec3>,
}

impl CornerAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Current collection state.
    pub fn state(&self) -> AccumulatorState {
        if self.points.len() == CORNER_COUNT {
            AccumulatorState::Ready
        } else {
            AccumulatorState::Collecting(self.points.len())
        }
    }

    /// Number of corners collected so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if no corner has been collected yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true once all eight corners are collected.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.points.len() == CORNER_COUNT
    }

    /// Records one corner and returns the state after it.
    pub fn push(&mut self, point: DVec3) -> Result<AccumulatorState, CaptureError> {
        if self.is_ready() {
            return Err(CaptureError::AlreadyComplete);
        }

        self.points.push(point);
        debug!(collected = self.points.len(), "corner recorded");
        Ok(self.state())
    }

    /// The corners collected so far, in tap order.
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Consumes the accumulator and builds the frame.
    ///
    /// Fails with [`CaptureError::Incomplete`] before the eighth corner.
    pub fn into_frame(self) -> Result<BoxFrame, CaptureError> {
        if !self.is_ready() {
            return Err(CaptureError::Incomplete {
                collected: self.points.len(),
            });
        }

        Ok(BoxFrame::from_corners(&self.points)?)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn corner(i: usize) -> DVec3 {
        DVec3::new(i as f64, 0.0, 0.0)
    }

    #[test]
    fn test_starts_empty() {
        let accumulator = CornerAccumulator::new();
        assert!(accumulator.is_empty());
        assert_eq!(accumulator.state(), AccumulatorState::Collecting(0));
    }

    #[test]
    fn test_ready_fires_exactly_at_eight() {
        let mut accumulator = CornerAccumulator::new();
        for i in 0..7 {
            assert_eq!(
                accumulator.push(corner(i)).unwrap(),
                AccumulatorState::Collecting(i + 1)
            );
        }
        assert_eq!(
            accumulator.push(corner(7)).unwrap(),
            AccumulatorState::Ready
        );
        assert!(accumulator.is_ready());
    }

    #[test]
    fn test_ninth_push_is_rejected() {
        let mut accumulator = CornerAccumulator::new();
        for i in 0..8 {
            accumulator.push(corner(i)).unwrap();
        }
        assert_eq!(
            accumulator.push(corner(8)).unwrap_err(),
            CaptureError::AlreadyComplete
        );
        // The rejected point must not corrupt the collection.
        assert_eq!(accumulator.len(), 8);
    }

    #[test]
    fn test_into_frame_requires_all_corners() {
        let mut accumulator = CornerAccumulator::new();
        for i in 0..5 {
            accumulator.push(corner(i)).unwrap();
        }
        assert_eq!(
            accumulator.into_frame().unwrap_err(),
            CaptureError::Incomplete { collected: 5 }
        );
    }

    #[test]
    fn test_into_frame_preserves_tap_order() {
        let mut accumulator = CornerAccumulator::new();
        for i in 0..8 {
            accumulator.push(corner(i)).unwrap();
        }
        let frame = accumulator.into_frame().unwrap();
        for i in 0..8 {
            assert_eq!(frame.corner(i), corner(i));
        }
    }
}
