//! Project: the durable state of one digitizing session.

use crate::data::axes::AxisRange;
use crate::data::calibration::{CalibrationAnchors, CalibrationError};
use crate::data::datasets::{Datasets, PointRef};
use crate::data::{point_select, transform};

/// Everything that survives save/load: labels, axis ranges, calibration
/// anchors and the dataset slots.
///
/// Anchors are private so they can only be committed wholesale or cleared,
/// never partially edited.
#[derive(Debug, Clone, Default)]
pub struct Project {
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    pub axes: AxisRange,
    anchors: Option<CalibrationAnchors>,
    pub datasets: Datasets,
}

impl Project {
    /// Whether a transform between pixel and data space is available.
    ///
    /// The transforms themselves fall back to `[0.0, 0.0]` when it is not;
    /// this predicate is how callers tell a valid zero from that fallback.
    pub fn is_calibrated(&self) -> bool {
        self.anchors.is_some()
    }

    pub fn anchors(&self) -> Option<&CalibrationAnchors> {
        self.anchors.as_ref()
    }

    /// Commit a finished calibration session, replacing any previous anchors.
    pub fn set_anchors(&mut self, anchors: CalibrationAnchors) {
        self.anchors = Some(anchors);
    }

    /// Drop the anchors, e.g. when the image they were clicked on goes away.
    pub fn clear_anchors(&mut self) {
        self.anchors = None;
    }

    /// Apply numeric axis bounds. Requires committed anchors.
    pub fn apply_calibration(&mut self, axes: AxisRange) -> Result<(), CalibrationError> {
        if self.anchors.is_none() {
            return Err(CalibrationError::NotCalibrated);
        }
        self.axes = axes;
        Ok(())
    }

    /// See [`transform::data_to_pixel`].
    pub fn data_to_pixel(&self, x: f64, y: f64) -> [f64; 2] {
        transform::data_to_pixel(self.anchors.as_ref(), &self.axes, x, y)
    }

    /// See [`transform::pixel_to_data`].
    pub fn pixel_to_data(&self, px: f64, py: f64) -> [f64; 2] {
        transform::pixel_to_data(self.anchors.as_ref(), &self.axes, px, py)
    }

    /// See [`point_select::find_nearest`].
    pub fn find_nearest(&self, pos: [f64; 2], max_distance: f64) -> Option<PointRef> {
        point_select::find_nearest(
            &self.datasets,
            self.anchors.as_ref(),
            &self.axes,
            pos,
            max_distance,
        )
    }
}
