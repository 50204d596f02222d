//! The bidirectional pixel↔data coordinate transform.
//!
//! Both directions are pure functions of the calibration anchors and the
//! axis range. Degenerate inputs (missing anchors, zero-width ranges,
//! non-positive values on log axes) map to defined fallback values instead
//! of failing; callers that need to distinguish "valid zero" from "not yet
//! calibrated" check [`crate::data::project::Project::is_calibrated`].

use crate::data::axes::AxisRange;
use crate::data::calibration::CalibrationAnchors;

/// Map a data point to canvas pixel coordinates.
///
/// Returns `[0.0, 0.0]` until calibration anchors exist.
pub fn data_to_pixel(
    anchors: Option<&CalibrationAnchors>,
    axes: &AxisRange,
    x: f64,
    y: f64,
) -> [f64; 2] {
    let Some(a) = anchors else {
        return [0.0, 0.0];
    };
    let tx = axis_fraction(x, axes.x_min, axes.x_max, axes.x_log);
    let ty = axis_fraction(y, axes.y_min, axes.y_max, axes.y_log);
    [
        a.x_min_px[0] + tx * (a.x_max_px[0] - a.x_min_px[0]),
        a.y_min_px[1] + ty * (a.y_max_px[1] - a.y_min_px[1]),
    ]
}

/// Map a canvas pixel position to data coordinates.
///
/// Returns `[0.0, 0.0]` until calibration anchors exist.
pub fn pixel_to_data(
    anchors: Option<&CalibrationAnchors>,
    axes: &AxisRange,
    px: f64,
    py: f64,
) -> [f64; 2] {
    let Some(a) = anchors else {
        return [0.0, 0.0];
    };
    let span_x = a.x_max_px[0] - a.x_min_px[0];
    let tx = if span_x == 0.0 { 0.0 } else { (px - a.x_min_px[0]) / span_x };
    let span_y = a.y_max_px[1] - a.y_min_px[1];
    let ty = if span_y == 0.0 { 0.0 } else { (py - a.y_min_px[1]) / span_y };
    [
        axis_value(tx, axes.x_min, axes.x_max, axes.x_log),
        axis_value(ty, axes.y_min, axes.y_max, axes.y_log),
    ]
}

/// Fraction of the axis covered by `value`, 0.0 at `min` and 1.0 at `max`.
///
/// Zero-width ranges and log-domain violations yield 0.0.
fn axis_fraction(value: f64, min: f64, max: f64, log: bool) -> f64 {
    if log {
        if value <= 0.0 || min <= 0.0 || max <= 0.0 {
            return 0.0;
        }
        let span = max.log10() - min.log10();
        if span == 0.0 {
            0.0
        } else {
            (value.log10() - min.log10()) / span
        }
    } else {
        let span = max - min;
        if span == 0.0 {
            0.0
        } else {
            (value - min) / span
        }
    }
}

/// Inverse of [`axis_fraction`], with the same fallbacks.
fn axis_value(frac: f64, min: f64, max: f64, log: bool) -> f64 {
    if log {
        if min <= 0.0 || max <= 0.0 {
            return 0.0;
        }
        let lmin = min.log10();
        10f64.powf(lmin + frac * (max.log10() - lmin))
    } else {
        min + frac * (max - min)
    }
}
