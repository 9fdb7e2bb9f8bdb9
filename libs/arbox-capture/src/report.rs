//! # Measurement Report
//!
//! Human-readable formatting of box measurements.

use arbox_geometry::Measurements;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display wrapper rendering measurements as the four-line summary shown
/// to the user, two decimals per value, meters throughout.
///
/// # Example
///
/// ```rust
/// use arbox_capture::MeasurementReport;
/// use arbox_geometry::{BoxFrame, Measurements};
///
/// let report = MeasurementReport::from(Measurements::of(&BoxFrame::from_extent(2.0, 1.0, 0.5)));
/// assert!(report.to_string().ends_with("Volume: 1.00 m³"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementReport {
    measurements: Measurements,
}

impl From<Measurements> for MeasurementReport {
    fn from(measurements: Measurements) -> Self {
        Self { measurements }
    }
}

impl fmt::Display for MeasurementReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Width: {:.2} m", self.measurements.width)?;
        writeln!(f, "Depth: {:.2} m", self.measurements.depth)?;
        writeln!(f, "Height: {:.2} m", self.measurements.height)?;
        write!(f, "Volume: {:.2} m³", self.measurements.volume)
    }
}

// =============================================================================
// TESTS
// =============================================================================
