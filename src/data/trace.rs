//! Auto-trace: extract one point per image column by color matching.

use image::RgbImage;

use crate::color::color_distance;
use crate::data::axes::AxisRange;
use crate::data::calibration::CalibrationAnchors;
use crate::data::canvas::ImagePlacement;
use crate::data::transform::pixel_to_data;

/// Trace the curve whose color best matches `target` between the X anchors.
///
/// Canvas columns are sampled inclusively between the two X anchors, one
/// data point per column, in ascending column order. Columns that fall
/// outside the image, or whose pixels cannot all be read, produce no point.
/// Without anchors the result is empty.
pub fn auto_trace(
    image: &RgbImage,
    placement: &ImagePlacement,
    anchors: Option<&CalibrationAnchors>,
    axes: &AxisRange,
    target: [f64; 3],
) -> Vec<[f64; 2]> {
    let Some(a) = anchors else {
        return Vec::new();
    };
    let x0 = a.x_min_px[0];
    let x1 = a.x_max_px[0];
    let ncols = ((x1 - x0).abs().round() as usize).max(1);
    let mut points = Vec::with_capacity(ncols);
    for i in 0..ncols {
        let frac = if ncols > 1 { i as f64 / (ncols - 1) as f64 } else { 0.0 };
        let canvas_x = x0 + frac * (x1 - x0);
        let col = placement.canvas_to_image([canvas_x, 0.0])[0].round();
        if col < 0.0 || col >= image.width() as f64 {
            continue;
        }
        let col = col as u32;
        if let Some(row) = best_matching_row(image, col, target) {
            let canvas = placement.image_to_canvas([col as f64, row as f64]);
            points.push(pixel_to_data(Some(a), axes, canvas[0], canvas[1]));
        }
    }
    points
}

/// Row in `col` whose pixel is closest in color to `target`; the first row
/// wins exact ties. Unreadable pixels count as infinitely distant; `None`
/// when the whole column is unreadable.
fn best_matching_row(image: &RgbImage, col: u32, target: [f64; 3]) -> Option<u32> {
    let mut best: Option<u32> = None;
    let mut best_d = f64::INFINITY;
    for row in 0..image.height() {
        let Some(p) = image.get_pixel_checked(col, row) else {
            continue;
        };
        let rgb = [
            p.0[0] as f64 / 255.0,
            p.0[1] as f64 / 255.0,
            p.0[2] as f64 / 255.0,
        ];
        let d = color_distance(rgb, target);
        if d < best_d {
            best_d = d;
            best = Some(row);
        }
    }
    best
}
