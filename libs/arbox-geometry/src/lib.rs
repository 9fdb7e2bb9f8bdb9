//! # Arbox Geometry
//!
//! Pure geometry core for box measurement. Converts box-defining inputs
//! (a planar extent plus a height, or eight collected corner points) into
//! renderable edge segments and scalar measurements.
//!
//! ## Architecture
//!
//! ```text
//! arbox-capture (observations) → arbox-geometry (BoxFrame → segments + measurements)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use arbox_geometry::{BoxFrame, Measurements};
//!
//! let frame = BoxFrame::from_extent(2.0, 1.0, 0.5);
//! let measurements = Measurements::of(&frame);
//! assert!((measurements.volume - 1.0).abs() < 1e-9);
//! ```

pub mod edge;
pub mod error;
pub mod frame;
pub mod measure;
pub mod segment;

// Re-export public API
pub use edge::{Edge, EDGES};
pub use error::GeometryError;
pub use frame::BoxFrame;
pub use measure::Measurements;
pub use segment::{LineSegment, CYLINDER_AXIS};
