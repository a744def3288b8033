// File: crates/curvegraph-core/tests/paths.rs
// Purpose: Validate path generation: sharp and smooth emission, gap
// splitting, area closure, and degenerate inputs.

use curvegraph_core::{area_path, line_path, normalize_points, Interpolation, PixelPoint, Point, Range};

#[test]
fn sharp_line_end_to_end() {
    // Two points on a 100x100 rect with a fixed [0, 10] y range: the path
    // runs from the bottom-left to the top-right corner.
    let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 10.0)];
    let normalized =
        normalize_points(&points, 100.0, 100.0, Some(Range::new(0.0, 10.0)), None, 0.0).unwrap();
    let d = line_path(&normalized, Interpolation::Sharp);
    assert_eq!(d, "M 0,100 L 100,0");
}

#[test]
fn null_point_splits_into_two_subpaths() {
    let points = vec![Point::new(0.0, 0.0), Point::gap(), Point::new(2.0, 5.0)];
    let normalized = normalize_points(&points, 100.0, 100.0, None, None, 0.0).unwrap();
    let d = line_path(&normalized, Interpolation::Sharp);
    assert_eq!(d.matches("M ").count(), 2, "each run starts its own subpath");
    assert!(!d.contains('L'), "no segment may connect across the gap");
}

#[test]
fn smooth_path_bends_through_midpoints() {
    let pts: Vec<Option<PixelPoint>> = vec![
        Some(PixelPoint::new(0.0, 0.0)),
        Some(PixelPoint::new(10.0, 10.0)),
        Some(PixelPoint::new(20.0, 0.0)),
    ];
    let d = line_path(&pts, Interpolation::Smooth);
    // Curve to each midpoint with the previous point as control, then one
    // closing curve through the final point.
    assert_eq!(
        d,
        "M 0,0 Q 0,0 5,5 Q 10,10 15,5 Q 10,10 20,0"
    );
}

#[test]
fn smooth_degenerate_inputs() {
    let empty: Vec<Option<PixelPoint>> = Vec::new();
    assert_eq!(line_path(&empty, Interpolation::Smooth), "");

    let single = vec![Some(PixelPoint::new(3.0, 4.0))];
    assert_eq!(line_path(&single, Interpolation::Smooth), "M 3,4");
    assert_eq!(line_path(&single, Interpolation::Sharp), "M 3,4");
}

#[test]
fn area_path_closes_to_the_floor() {
    let pts = vec![
        Some(PixelPoint::new(0.0, 50.0)),
        Some(PixelPoint::new(100.0, 20.0)),
    ];
    let d = area_path(&pts, Interpolation::Sharp, 120.0);
    assert_eq!(d, "M 0,50 L 100,20 L 100,120 L 0,120 Z");
}

#[test]
fn area_path_closes_each_run_independently() {
    let pts = vec![
        Some(PixelPoint::new(0.0, 10.0)),
        Some(PixelPoint::new(10.0, 20.0)),
        None,
        Some(PixelPoint::new(30.0, 20.0)),
        Some(PixelPoint::new(40.0, 10.0)),
    ];
    let d = area_path(&pts, Interpolation::Sharp, 100.0);
    assert_eq!(d.matches('Z').count(), 2, "one closed polygon per run");
    assert_eq!(d.matches("M ").count(), 2);
}

#[test]
fn area_path_skips_single_point_runs() {
    let pts = vec![
        Some(PixelPoint::new(5.0, 5.0)),
        None,
        Some(PixelPoint::new(20.0, 20.0)),
        Some(PixelPoint::new(30.0, 10.0)),
    ];
    let d = area_path(&pts, Interpolation::Sharp, 50.0);
    assert_eq!(d.matches('Z').count(), 1, "an isolated point has no fillable area");
}
