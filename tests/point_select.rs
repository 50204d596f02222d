use digiplot::data::axes::AxisRange;
use digiplot::data::calibration::CalibrationAnchors;
use digiplot::data::datasets::{Datasets, PointRef};
use digiplot::data::point_select::find_nearest;

/// Anchors and range chosen so data coordinates equal canvas pixels.
fn identity_setup() -> (CalibrationAnchors, AxisRange) {
    (
        CalibrationAnchors {
            x_min_px: [0.0, 0.0],
            x_max_px: [100.0, 0.0],
            y_min_px: [0.0, 0.0],
            y_max_px: [0.0, 100.0],
        },
        AxisRange {
            x_min: 0.0,
            x_max: 100.0,
            y_min: 0.0,
            y_max: 100.0,
            x_log: false,
            y_log: false,
        },
    )
}

#[test]
fn finds_the_closest_point_within_threshold() {
    let (a, ax) = identity_setup();
    let mut ds = Datasets::default();
    ds.add_point(0, [10.0, 10.0]);
    ds.add_point(0, [50.0, 50.0]);
    let hit = find_nearest(&ds, Some(&a), &ax, [48.0, 50.0], 5.0);
    assert_eq!(hit, Some(PointRef { dataset: 0, point: 1 }));
}

#[test]
fn respects_the_max_distance() {
    let (a, ax) = identity_setup();
    let mut ds = Datasets::default();
    ds.add_point(0, [10.0, 10.0]);
    assert_eq!(find_nearest(&ds, Some(&a), &ax, [80.0, 80.0], 5.0), None);
}

#[test]
fn boundary_distance_is_eligible() {
    let (a, ax) = identity_setup();
    let mut ds = Datasets::default();
    ds.add_point(0, [10.0, 10.0]);
    // distance is exactly 5
    let hit = find_nearest(&ds, Some(&a), &ax, [13.0, 14.0], 5.0);
    assert_eq!(hit, Some(PointRef { dataset: 0, point: 0 }));
}

#[test]
fn tie_breaks_on_the_first_dataset_in_order() {
    let (a, ax) = identity_setup();
    let mut ds = Datasets::default();
    ds.add_point(2, [30.0, 40.0]);
    ds.add_point(4, [30.0, 40.0]);
    let hit = find_nearest(&ds, Some(&a), &ax, [30.0, 42.0], 10.0);
    assert_eq!(hit, Some(PointRef { dataset: 2, point: 0 }));
}

#[test]
fn tie_breaks_on_the_first_point_within_a_dataset() {
    let (a, ax) = identity_setup();
    let mut ds = Datasets::default();
    ds.add_point(1, [20.0, 30.0]);
    ds.add_point(1, [20.0, 30.0]);
    let hit = find_nearest(&ds, Some(&a), &ax, [20.0, 30.0], 10.0);
    assert_eq!(hit, Some(PointRef { dataset: 1, point: 0 }));
}

#[test]
fn uncalibrated_stores_collapse_to_the_origin() {
    // without anchors every point projects to (0, 0)
    let (_a, ax) = identity_setup();
    let mut ds = Datasets::default();
    ds.add_point(1, [55.0, 55.0]);
    let hit = find_nearest(&ds, None, &ax, [0.0, 0.0], 1.0);
    assert_eq!(hit, Some(PointRef { dataset: 1, point: 0 }));
}
