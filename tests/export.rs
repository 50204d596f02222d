use digiplot::data::datasets::Datasets;
use digiplot::data::export::{default_file_stem, sanitize_file_stem, write_csv};

#[test]
fn csv_has_a_header_and_one_row_per_point() {
    let mut ds = Datasets::default();
    ds.rename_active("alpha");
    ds.add_point(0, [1.0, 2.0]);
    ds.add_point(0, [3.5, -4.25]);
    ds.select_active(2);
    ds.rename_active("gamma");
    ds.add_point(2, [0.5, 0.25]);

    let mut buf = Vec::new();
    write_csv(&mut buf, &ds).unwrap();
    let s = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = s.trim().split('\n').collect();
    assert_eq!(lines[0], "dataset,x,y");
    assert_eq!(lines[1], "alpha,1,2");
    assert_eq!(lines[2], "alpha,3.5,-4.25");
    assert_eq!(lines[3], "gamma,0.5,0.25");
    assert_eq!(lines.len(), 4, "empty datasets contribute no rows");
}

#[test]
fn csv_uses_display_names_even_when_they_collide() {
    let mut ds = Datasets::default();
    ds.rename_active("same");
    ds.add_point(0, [1.0, 1.0]);
    ds.select_active(1);
    ds.rename_active("same");
    ds.add_point(1, [2.0, 2.0]);

    let mut buf = Vec::new();
    write_csv(&mut buf, &ds).unwrap();
    let s = String::from_utf8(buf).unwrap();
    assert_eq!(s.matches("same,").count(), 2);
}

#[test]
fn sanitizes_titles_to_safe_stems() {
    assert_eq!(sanitize_file_stem("My Plot (v2)"), "My_Plot_v2");
    assert_eq!(sanitize_file_stem("__hello__"), "hello");
    assert_eq!(sanitize_file_stem("data.v1-final"), "data.v1-final");
    assert_eq!(sanitize_file_stem("a  b   c"), "a_b_c");
    assert_eq!(sanitize_file_stem("..."), "");
    assert_eq!(sanitize_file_stem("äöü"), "");
}

#[test]
fn empty_titles_fall_back_to_a_timestamp_stem() {
    let stem = default_file_stem("   ");
    assert!(stem.starts_with("digitized_"));
    assert!(stem.len() > "digitized_".len());
    assert_eq!(default_file_stem("run 7"), "run_7");
}
