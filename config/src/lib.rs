//! # Config Crate
//!
//! Centralized configuration constants for the arbox measurement pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_BOX_HEIGHT};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.0000000001; // 1e-10, smaller than EPSILON (1e-9)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // Use the fallback height when no vertical surface was detected
//! let detected: f64 = 0.0;
//! let height = if detected > 0.0 { detected } else { DEFAULT_BOX_HEIGHT };
//! assert_eq!(height, DEFAULT_BOX_HEIGHT);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Unit Discipline**: Every length is in meters, matching the capture frame
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
