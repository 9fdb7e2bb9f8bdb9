//! # Geometry Errors
//!
//! Error types for box-frame construction.

use thiserror::Error;

/// Errors that can occur while building box geometry.
///
/// Degenerate geometry (zero extents, zero-length edges) is not an error:
/// it resolves to zero lengths and identity rotations by contract. The only
/// hard failure is a corner list of the wrong size.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Wrong number of corner points supplied to `BoxFrame::from_corners`.
    #[error("Wrong number of corner points: expected {expected}, got {got}")]
    WrongCornerCount { expected: usize, got: usize },
}

// =============================================================================
// TESTS
// =============================================================================
