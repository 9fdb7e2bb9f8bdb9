//! # Plane Session
//!
//! Accumulated plane-detection state for one measurement. The first
//! horizontal plane anchors the box; every vertical plane contributes a
//! height cue.

use crate::height::HeightSource;
use crate::observation::{PlaneAlignment, PlaneObservation};
use crate::outline::BoxOutline;
use arbox_geometry::BoxFrame;
use config::constants::MeasureConfig;
use tracing::{debug, trace};

/// Plane-detection state for one measurement session.
///
/// The session adopts the first horizontal plane it observes and ignores
/// later ones; replacing the anchor mid-session would re-seat the box.
/// Vertical planes are all retained as height cues.
///
/// # Example
///
/// ```rust
/// use arbox_capture::{Extent, HeightSource, PlaneObservation, PlaneSession};
/// use glam::DVec3;
///
/// let mut session = PlaneSession::new();
/// session.observe(PlaneObservation::horizontal(DVec3::ZERO, Extent::new(2.0, 1.0)));
/// session.observe(PlaneObservation::vertical(DVec3::new(0.0, 0.5, 0.0), Extent::new(1.0, 1.0)));
///
/// let outline = session.outline(HeightSource::VerticalPlaneDerived).unwrap();
/// assert!((outline.measurements.height - 0.5).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct PlaneSession {
    config: MeasureConfig,
    horizontal: Option<PlaneObservation>,
    verticals: Vec<PlaneObservation>,
}

impl PlaneSession {
    /// Creates a session with default measurement settings.
    pub fn new() -> Self {
        Self::with_config(MeasureConfig::default())
    }

    /// Creates a session with explicit measurement settings.
    pub fn with_config(config: MeasureConfig) -> Self {
        Self {
            config,
            horizontal: None,
            verticals: Vec::new(),
        }
    }

    /// Routes one plane observation into the session.
    pub fn observe(&mut self, plane: PlaneObservation) {
        match plane.alignment {
            PlaneAlignment::Horizontal => {
                if self.horizontal.is_none() {
                    debug!(center = ?plane.center, "horizontal plane adopted");
                    self.horizontal = Some(plane);
                } else {
                    trace!("later horizontal plane ignored");
                }
            }
            PlaneAlignment::Vertical => {
                trace!(center = ?plane.center, "vertical plane recorded");
                self.verticals.push(plane);
            }
        }
    }

    /// The adopted horizontal plane, if one has been observed.
    #[inline]
    pub fn horizontal(&self) -> Option<&PlaneObservation> {
        self.horizontal.as_ref()
    }

    /// Number of vertical planes recorded so far.
    #[inline]
    pub fn vertical_count(&self) -> usize {
        self.verticals.len()
    }

    /// The session's measurement settings.
    #[inline]
    pub fn config(&self) -> &MeasureConfig {
        &self.config
    }

    /// Height estimated from vertical-plane cues.
    ///
    /// Returns the largest vertical offset between any vertical plane's
    /// center and the horizontal anchor. Falls back to the configured
    /// default height when no vertical plane yields a positive offset,
    /// and returns `None` while no horizontal plane has been observed.
    pub fn derived_height(&self) -> Option<f64> {
        let horizontal = self.horizontal.as_ref()?;

        let mut max_height: f64 = 0.0;
        for vertical in &self.verticals {
            let height = (vertical.center.y - horizontal.center.y).abs();
            if height > max_height {
                max_height = height;
            }
        }

        if max_height > 0.0 {
            Some(max_height)
        } else {
            debug!(
                fallback = self.config.default_height,
                "no usable vertical plane, using fallback height"
            );
            Some(self.config.default_height)
        }
    }

    /// Assembles the outline for the adopted horizontal plane.
    ///
    /// Returns `None` while no horizontal plane has been observed. The
    /// box height comes from the supplied [`HeightSource`].
    pub fn outline(&self, source: HeightSource) -> Option<BoxOutline> {
        let horizontal = self.horizontal.as_ref()?;
        let height = source.resolve(self);

        let frame = BoxFrame::from_extent(horizontal.extent.width, horizontal.extent.depth, height);
        Some(BoxOutline::with_radius(&frame, self.config.edge_radius))
    }
}

impl Default for PlaneSession {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
