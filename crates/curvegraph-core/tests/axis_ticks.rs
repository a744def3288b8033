// File: crates/curvegraph-core/tests/axis_ticks.rs
// Purpose: Validate axis tick layout: margin extrapolation, primary
// flagging, anchor generation, and X sub-labels.

use curvegraph_core::{
    determine_y_range_points, layout_x_ticks, layout_y_ticks, normalize_values, LabeledXPoint,
    LabeledYPoint, Range,
};

const EPS: f32 = 1e-4;

#[test]
fn margin_ticks_continue_the_progression() {
    // Anchors 0 and 10 across a 10px drawable band, 20px reserved below:
    // the band fits two synthetic ticks at the same pixel step, labeled by
    // continuing the value progression downward.
    let anchors = vec![LabeledYPoint::new(0.0, "0"), LabeledYPoint::new(10.0, "10")];
    let pixels = normalize_values(&[0.0, 10.0], 10.0, None, true).unwrap();
    assert_eq!(pixels, vec![10.0, 0.0]);

    let label = |v: f64| v.to_string();
    let ticks = layout_y_ticks(&anchors, &pixels, 30.0, 1, Some(&label)).unwrap();

    let positions: Vec<f32> = ticks.iter().map(|t| t.pixel).collect();
    let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(positions, vec![0.0, 10.0, 20.0, 30.0], "ascending pixel order, even steps");
    assert_eq!(labels, vec!["10", "0", "-10", "-20"]);
    assert!(ticks.iter().all(|t| t.primary), "frequency 1 labels every tick");
}

#[test]
fn margin_ticks_are_blank_without_a_label_callback() {
    let anchors = vec![LabeledYPoint::new(0.0, "0"), LabeledYPoint::new(10.0, "10")];
    let pixels = normalize_values(&[0.0, 10.0], 10.0, None, true).unwrap();
    let ticks = layout_y_ticks(&anchors, &pixels, 30.0, 1, None).unwrap();
    assert_eq!(ticks[2].label, "");
    assert_eq!(ticks[3].label, "");
}

#[test]
fn no_margin_ticks_when_the_band_is_smaller_than_a_step() {
    let anchors = vec![LabeledYPoint::new(0.0, "0"), LabeledYPoint::new(10.0, "10")];
    let pixels = normalize_values(&[0.0, 10.0], 100.0, None, true).unwrap();
    // 100px drawable, 5px reserved: the next step lands at 200, beyond it.
    let ticks = layout_y_ticks(&anchors, &pixels, 105.0, 1, None).unwrap();
    assert_eq!(ticks.len(), 2);
}

#[test]
fn every_nth_tick_is_primary() {
    let anchors: Vec<LabeledYPoint> =
        (0..10).map(|i| LabeledYPoint::new(i as f64, i.to_string())).collect();
    let values: Vec<f64> = (0..10).map(f64::from).collect();
    let pixels = normalize_values(&values, 90.0, None, true).unwrap();
    let ticks = layout_y_ticks(&anchors, &pixels, 90.0, 5, None).unwrap();

    let primaries: Vec<usize> = ticks
        .iter()
        .enumerate()
        .filter(|(_, t)| t.primary)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(primaries, vec![0, 5]);
}

#[test]
fn uneven_anchors_still_extrapolate_from_the_first_step() {
    // Not evenly spaced: the engine warns and projects the first step.
    let anchors = vec![
        LabeledYPoint::new(0.0, "0"),
        LabeledYPoint::new(10.0, "10"),
        LabeledYPoint::new(35.0, "35"),
    ];
    let pixels = vec![30.0, 20.0, 0.0];
    let label = |v: f64| v.to_string();
    let ticks = layout_y_ticks(&anchors, &pixels, 50.0, 1, Some(&label)).unwrap();
    let synthetic: Vec<&str> = ticks
        .iter()
        .filter(|t| t.pixel > 30.0)
        .map(|t| t.label.as_str())
        .collect();
    assert_eq!(synthetic, vec!["-10", "-20"]);
}

#[test]
fn too_few_anchors_is_an_error() {
    let anchors = vec![LabeledYPoint::new(0.0, "0")];
    assert!(layout_y_ticks(&anchors, &[0.0], 10.0, 1, None).is_err());
}

#[test]
fn x_ticks_carry_sub_labels_in_pixel_order() {
    let anchors = vec![
        LabeledXPoint::new(0.0, "12:00 AM").with_sub_label("Sun"),
        LabeledXPoint::new(1.0, "6:00 AM"),
        LabeledXPoint::new(2.0, "12:00 PM"),
    ];
    let pixels = normalize_values(&[0.0, 1.0, 2.0], 200.0, None, false).unwrap();
    let ticks = layout_x_ticks(&anchors, &pixels, 2);

    assert!((ticks[0].pixel - 0.0).abs() < EPS);
    assert!((ticks[2].pixel - 200.0).abs() < EPS);
    assert_eq!(ticks[0].sub_label.as_deref(), Some("Sun"));
    assert_eq!(ticks[1].sub_label, None);
    assert!(ticks[0].primary && !ticks[1].primary && ticks[2].primary);
}

#[test]
fn anchor_generation_steps_from_the_minimum() {
    let points = determine_y_range_points(Range::new(0.0, 100.0), 10, |v| format!("{v}%"));
    assert_eq!(points.len(), 10);
    assert!((points[0].y - 0.0).abs() < 1e-9);
    assert!((points[1].y - 10.0).abs() < 1e-9);
    assert!((points[9].y - 90.0).abs() < 1e-9);
    assert_eq!(points[1].label, "10%");

    // Consecutive steps are even, as the extrapolation contract requires.
    for pair in points.windows(2) {
        assert!(((pair[1].y - pair[0].y) - 10.0).abs() < 1e-9);
    }
}
