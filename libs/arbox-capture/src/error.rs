//! # Capture Errors
//!
//! Error types for the observation and accumulation layer.

use arbox_geometry::GeometryError;
use thiserror::Error;

/// Errors that can occur while collecting observations into a box frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    /// A ninth corner was pushed into a complete accumulator.
    #[error("Corner accumulator already holds a complete frame")]
    AlreadyComplete,

    /// A frame was requested before all corners were collected.
    #[error("Corner collection incomplete: {collected} of 8 points")]
    Incomplete { collected: usize },

    /// Error from the geometry core.
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CaptureError::Incomplete { collected: 3 };
        assert!(err.to_string().contains("3 of 8"));
    }

    #[test]
    fn test_geometry_error_converts() {
        let geometry = GeometryError::WrongCornerCount {
            expected: 8,
            got: 2,
        };
        let err: CaptureError = geometry.into();
        assert!(matches!(err, CaptureError::Geometry(_)));
    }
}
