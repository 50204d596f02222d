use digiplot::data::axes::AxisRange;
use digiplot::data::calibration::CalibrationAnchors;
use digiplot::data::canvas::ImagePlacement;
use digiplot::data::trace::auto_trace;
use image::{Rgb, RgbImage};

const BLUE: [f64; 3] = [0.0, 0.0, 1.0];

/// 101x51 white image with a pure blue horizontal line at row 25.
fn line_image() -> RgbImage {
    let mut img = RgbImage::from_pixel(101, 51, Rgb([255, 255, 255]));
    for col in 0..101 {
        img.put_pixel(col, 25, Rgb([0, 0, 255]));
    }
    img
}

/// Anchors spanning the image at native scale: X along row 50, Y up the
/// left edge, with data ranges x 0..10 and y 0..5.
fn setup() -> (CalibrationAnchors, AxisRange) {
    (
        CalibrationAnchors {
            x_min_px: [0.0, 50.0],
            x_max_px: [100.0, 50.0],
            y_min_px: [10.0, 50.0],
            y_max_px: [10.0, 0.0],
        },
        AxisRange {
            x_min: 0.0,
            x_max: 10.0,
            y_min: 0.0,
            y_max: 5.0,
            x_log: false,
            y_log: false,
        },
    )
}

#[test]
fn traces_a_horizontal_line_at_its_data_height() {
    let img = line_image();
    let (a, ax) = setup();
    let points = auto_trace(&img, &ImagePlacement::default(), Some(&a), &ax, BLUE);
    // one point per sampled column, every column readable
    assert_eq!(points.len(), 100);
    for p in &points {
        // row 25 sits halfway between the Y anchors
        assert!((p[1] - 2.5).abs() < 1e-9, "y was {}", p[1]);
        assert!((0.0..=10.0).contains(&p[0]));
    }
    // ascending column order
    for w in points.windows(2) {
        assert!(w[0][0] < w[1][0]);
    }
}

#[test]
fn tracing_is_deterministic() {
    let img = line_image();
    let (a, ax) = setup();
    let first = auto_trace(&img, &ImagePlacement::default(), Some(&a), &ax, BLUE);
    let second = auto_trace(&img, &ImagePlacement::default(), Some(&a), &ax, BLUE);
    assert_eq!(first, second);
}

#[test]
fn without_anchors_the_trace_is_empty() {
    let img = line_image();
    let (_a, ax) = setup();
    assert!(auto_trace(&img, &ImagePlacement::default(), None, &ax, BLUE).is_empty());
}

#[test]
fn uniform_images_pick_the_first_row() {
    let img = RgbImage::from_pixel(101, 51, Rgb([255, 255, 255]));
    let (a, ax) = setup();
    let points = auto_trace(&img, &ImagePlacement::default(), Some(&a), &ax, BLUE);
    assert_eq!(points.len(), 100);
    for p in &points {
        // every row ties, so row 0 wins, which is the Y maximum anchor
        assert!((p[1] - 5.0).abs() < 1e-9);
    }
}

#[test]
fn columns_outside_the_image_are_skipped() {
    let img = line_image();
    let (mut a, ax) = setup();
    // X anchors reach twice as far as the image
    a.x_max_px = [200.0, 50.0];
    let points = auto_trace(&img, &ImagePlacement::default(), Some(&a), &ax, BLUE);
    assert!(!points.is_empty());
    assert!(points.len() < 200);
    for p in &points {
        // surviving columns cover at most half the data range
        assert!(p[0] <= 5.0 + 1e-9);
        assert!((p[1] - 2.5).abs() < 1e-9);
    }
}

#[test]
fn placement_scale_maps_canvas_columns_to_image_columns() {
    let img = line_image();
    let placement = ImagePlacement { offset: [0.0, 0.0], scale: 0.5 };
    // anchors in canvas space, where the image is 50.5 units wide
    let a = CalibrationAnchors {
        x_min_px: [0.0, 25.0],
        x_max_px: [50.0, 25.0],
        y_min_px: [5.0, 25.0],
        y_max_px: [5.0, 0.0],
    };
    let ax = AxisRange {
        x_min: 0.0,
        x_max: 10.0,
        y_min: 0.0,
        y_max: 5.0,
        x_log: false,
        y_log: false,
    };
    let points = auto_trace(&img, &placement, Some(&a), &ax, BLUE);
    assert_eq!(points.len(), 50);
    for p in &points {
        // image row 25 lands at canvas y 12.5, halfway up the Y anchors
        assert!((p[1] - 2.5).abs() < 1e-9, "y was {}", p[1]);
    }
}

#[test]
fn placement_mapping_round_trips() {
    let placement = ImagePlacement { offset: [12.0, 8.0], scale: 0.5 };
    let img_pos = placement.canvas_to_image([37.0, 21.0]);
    assert_eq!(img_pos, [50.0, 26.0]);
    assert_eq!(placement.image_to_canvas(img_pos), [37.0, 21.0]);
}

#[test]
fn single_column_anchor_span_samples_one_column() {
    let img = line_image();
    let (mut a, ax) = setup();
    a.x_max_px = a.x_min_px;
    let points = auto_trace(&img, &ImagePlacement::default(), Some(&a), &ax, BLUE);
    assert_eq!(points.len(), 1);
}
