//! Nearest-point lookup in canvas pixel space.

use crate::data::axes::AxisRange;
use crate::data::calibration::CalibrationAnchors;
use crate::data::datasets::{Datasets, PointRef};
use crate::data::transform::data_to_pixel;

/// Find the closest digitized point within `max_distance` canvas pixels.
///
/// Datasets are scanned in slot order and points in insertion order; an
/// exact distance tie keeps the first match. A point exactly at
/// `max_distance` is eligible.
pub fn find_nearest(
    datasets: &Datasets,
    anchors: Option<&CalibrationAnchors>,
    axes: &AxisRange,
    pos: [f64; 2],
    max_distance: f64,
) -> Option<PointRef> {
    let mut best: Option<PointRef> = None;
    let mut best_d = max_distance;
    for (di, ds) in datasets.iter().enumerate() {
        for (pi, p) in ds.points.iter().enumerate() {
            let px = data_to_pixel(anchors, axes, p[0], p[1]);
            let d = ((px[0] - pos[0]).powi(2) + (px[1] - pos[1]).powi(2)).sqrt();
            let closer = match best {
                None => d <= best_d,
                Some(_) => d < best_d,
            };
            if closer {
                best_d = d;
                best = Some(PointRef { dataset: di, point: pi });
            }
        }
    }
    best
}
