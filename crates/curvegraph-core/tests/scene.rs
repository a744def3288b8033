// File: crates/curvegraph-core/tests/scene.rs
// Purpose: End-to-end scene assembly: two-pass layout, tick generation,
// per-series geometry, failure isolation, and the too-small placeholder.

use std::sync::Arc;

use curvegraph_core::{
    determine_y_range_points, Chart, DataSet, Gradient, GraphStyle, Interpolation, LabeledXPoint,
    LayoutState, Point, Range, RevealPhase, TextStyle, XAxisConfig, YAxisConfig,
};

fn six_px_per_char(text: &str, _style: TextStyle) -> f32 {
    (text.chars().count() * 6) as f32
}

fn temps() -> Vec<Point> {
    (0..10).map(|i| Point::new(i as f64, 40.0 + i as f64 * 2.0)).collect()
}

fn weather_chart() -> Chart {
    let mut chart = Chart::new()
        .with_title("Hourly Temperatures")
        .with_space_below_data(20.0);
    chart.y_axis = YAxisConfig {
        anchors: determine_y_range_points(Range::new(0.0, 100.0), 20, |v| format!("{v}°F")),
        label_frequency: 5,
        margin_label: Some(Arc::new(|v| format!("{v}°F"))),
        range: Some(Range::new(0.0, 100.0)),
    };
    chart.x_axis = XAxisConfig {
        anchors: (0..10)
            .map(|i| LabeledXPoint::new(i as f64, format!("{i}:00 AM")))
            .collect(),
        label_frequency: 4,
        range: None,
    };
    chart.add_dataset(
        DataSet::new("temps", temps())
            .with_label("TEMPERATURE", "#5D6CE9")
            .with_style(GraphStyle::Area)
            .with_gradient(Gradient::vertical("#2FF3E0", "#5D6CE9").with_opacity(0.5, 0.0))
            .with_animation_delay(500.0),
    );
    chart
}

#[test]
fn scene_resolves_rect_ticks_and_series() {
    let chart = weather_chart();
    let scene = chart.scene(600.0, 400.0, &six_px_per_char).unwrap();

    let LayoutState::Ready(rect) = scene.layout else {
        panic!("expected a resolved layout");
    };
    assert_eq!(rect.top, 59.0, "title band");
    assert_eq!(rect.height, 400.0 - 59.0 - 67.0, "x-axis band");
    assert!(rect.width > 0.0 && rect.left > 0.0);

    // 20 anchors plus one synthetic tick inside the 20px reserved band.
    assert_eq!(scene.y_ticks.len(), 21);
    let last = scene.y_ticks.last().unwrap();
    assert_eq!(last.label, "-5°F", "margin label continues the progression");
    assert!(last.pixel <= rect.height);

    assert_eq!(scene.x_ticks.len(), 10);
    assert!(scene.x_ticks[0].primary && scene.x_ticks[4].primary);
    assert!(!scene.x_ticks[1].primary);

    assert_eq!(scene.series.len(), 1);
    let series = &scene.series[0];
    assert!(series.line_path.starts_with("M "));
    assert!(series.area_path.as_ref().unwrap().ends_with('Z'));
    assert_eq!(series.animation_delay_ms, 500.0);
    assert!(series.trailing_label_y.is_some());
}

#[test]
fn empty_series_is_dropped_without_failing_siblings() {
    let mut chart = weather_chart();
    chart.add_dataset(DataSet::new("ghost", vec![Point::gap(), Point::gap()]));

    let scene = chart.scene(600.0, 400.0, &six_px_per_char).unwrap();
    assert_eq!(scene.series.len(), 1);
    assert_eq!(scene.series[0].id, "temps");
}

#[test]
fn too_small_host_yields_the_placeholder_state() {
    let chart = weather_chart();
    let scene = chart.scene(90.0, 400.0, &six_px_per_char).unwrap();
    assert!(scene.is_too_small());
    assert!(scene.series.is_empty());
    assert!(scene.x_ticks.is_empty());
}

#[test]
fn resolving_twice_is_identical() {
    let chart = weather_chart();
    let a = chart.scene(600.0, 400.0, &six_px_per_char).unwrap();
    let b = chart.scene(600.0, 400.0, &six_px_per_char).unwrap();
    assert_eq!(a.layout, b.layout);
    assert_eq!(a.series[0].line_path, b.series[0].line_path);
}

#[test]
fn dashed_and_line_series_share_the_drawable_rect() {
    let mut chart = weather_chart();
    chart.add_dataset(
        DataSet::new("humidity", (0..10).map(|i| Point::new(i as f64, (30 + i * 7) as f64)).collect())
            .with_label("HUMIDITY", "#E3A5F0")
            .with_style(GraphStyle::DashedLine)
            .with_interpolation(Interpolation::Sharp)
            .with_y_range(Range::new(0.0, 100.0)),
    );

    let scene = chart.scene(600.0, 400.0, &six_px_per_char).unwrap();
    assert_eq!(scene.series.len(), 2);
    assert!(scene.series[1].area_path.is_none());

    // Both series span the same pixel width regardless of their units.
    let first_x = |id: &str| {
        scene
            .series
            .iter()
            .find(|s| s.id == id)
            .and_then(|s| s.normalized.first().copied().flatten())
            .unwrap()
            .x
    };
    assert_eq!(first_x("temps"), first_x("humidity"));
}

#[test]
fn reveal_animators_follow_plotting_order_and_the_animate_switch() {
    let chart = weather_chart();
    let mut animators = chart.reveal_animators();
    assert_eq!(animators.len(), 1);
    assert!(animators[0].retrigger(&temps(), 300.0));
    assert_eq!(animators[0].phase(), RevealPhase::Animating);

    let still = weather_chart().with_animate(false);
    let mut animators = still.reveal_animators();
    assert!(!animators[0].retrigger(&temps(), 300.0));
    assert_eq!(animators[0].width(), 300.0, "disabled animation snaps to the target");
}
