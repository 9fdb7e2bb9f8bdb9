//! # Edge Table
//!
//! The fixed twelve-edge connectivity of a box frame. The table is a
//! constant of the model, not derived per instance.

use config::constants::EDGE_COUNT;
use serde::{Deserialize, Serialize};

/// Corner-index pair identifying two frame corners connected by a
/// rendered segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Index of the first corner (0-7).
    pub start: usize,
    /// Index of the second corner (0-7).
    pub end: usize,
}

impl Edge {
    /// Creates an edge between two corner indices.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// The twelve edges of a box frame: 4 base, 4 top, 4 vertical.
///
/// Order is significant only for deterministic rendering order, not for
/// correctness.
pub const EDGES: [Edge; EDGE_COUNT] = [
    // Base rectangle
    Edge::new(0, 1),
    Edge::new(1, 2),
    Edge::new(2, 3),
    Edge::new(3, 0),
    // Top rectangle
    Edge::new(4, 5),
    Edge::new(5, 6),
    Edge::new(6, 7),
    Edge::new(7, 4),
    // Verticals
    Edge::new(0, 4),
    Edge::new(1, 5),
    Edge::new(2, 6),
    Edge::new(3, 7),
];

// =============================================================================
// TESTS
// =============================================================================
