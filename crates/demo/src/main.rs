// File: crates/demo/src/main.rs
// Summary: Demo loads hourly weather CSV and renders the humidity vs
// temperature chart (line, dashed line, area) to SVG, settled and
// mid-reveal.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use curvegraph_core::labels::{hourly_x_points, month_day_label, weekday_label};
use curvegraph_core::types::CAPTURE_RADIUS_PX;
use curvegraph_core::{
    determine_y_range_points, hit_test, Chart, DataSet, Gradient, GraphStyle, LabeledYPoint,
    PixelPoint, Point, Range, SeriesHitData, TooltipConfig, XAxisConfig, YAxisConfig,
};
use curvegraph_svg::{render_to_file, CharRuler, SvgOptions};

const GRAPH_WIDTH: f32 = 640.0;
const GRAPH_HEIGHT: f32 = 360.0;

struct Observation {
    time: NaiveDateTime,
    temperature_f: Option<f64>,
    humidity: Option<f64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "crates/demo/data/hourly_weather.csv".to_string());
    let path = resolve_path(&raw)?;
    println!("Using input file: {}", path.display());

    let observations = load_weather_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} observations", observations.len());
    if observations.is_empty() {
        anyhow::bail!("no observations loaded; check headers/delimiter.");
    }

    let temps: Vec<Point> = observations
        .iter()
        .enumerate()
        .map(|(i, o)| Point { x: Some(i as f64), y: o.temperature_f })
        .collect();
    let humidity: Vec<Point> = observations
        .iter()
        .enumerate()
        .map(|(i, o)| Point { x: Some(i as f64), y: o.humidity })
        .collect();

    let temp_range = curvegraph_core::resolve_range(temps.iter().map(|p| p.y), None)?;
    let day = observations[0].time;
    let title = format!(
        "Humidity and Temperature ({} {})",
        weekday_label(day),
        month_day_label(day)
    );

    let mut chart = Chart::new().with_title(title).with_space_below_data(20.0);
    chart.y_axis = YAxisConfig {
        anchors: combined_y_points(temp_range),
        label_frequency: 5,
        margin_label: Some(Arc::new(|y| {
            format!("{} \u{2022} N/A", temperature_label(y))
        })),
        range: Some(temp_range),
    };
    let mut x_anchors = hourly_x_points(
        &observations.iter().map(|o| o.time).collect::<Vec<_>>(),
    );
    if let Some(first) = x_anchors.first_mut() {
        first.sub_label = Some(format!("{} {}", weekday_label(day), month_day_label(day)));
    }
    chart.x_axis = XAxisConfig { anchors: x_anchors, label_frequency: 4, range: None };

    chart.add_dataset(
        DataSet::new("humidity", humidity)
            .with_label("HUMIDITY", "#E3A5F0")
            .with_style(GraphStyle::DashedLine)
            .with_gradient(Gradient::horizontal("#C332DF", "white"))
            .with_y_range(Range::new(0.0, 100.0))
            .with_tooltip(TooltipConfig::Xy {
                format_x: None,
                format_y: Some(Arc::new(humidity_label)),
                x_alias: Some("Hour".to_string()),
                y_alias: Some("Humidity".to_string()),
            }),
    );
    chart.add_dataset(
        DataSet::new("temperature-line", temps.clone())
            .with_label("TEMPERATURE", "#5D6CE9")
            .with_gradient(Gradient::vertical("#2FF3E0", "#5D6CE9"))
            .with_animation_delay(500.0)
            .with_tooltip(TooltipConfig::Custom(Arc::new(|x, y| {
                format!("{} at hour {}", temperature_label(y), x)
            }))),
    );
    chart.add_dataset(
        DataSet::new("temperature-area", temps)
            .with_style(GraphStyle::Area)
            .with_gradient(Gradient::vertical("#2FF3E0", "#5D6CE9").with_opacity(0.5, 0.0))
            .with_animation_delay(500.0)
            .with_area_shadow(),
    );

    let ruler = CharRuler::default();
    let scene = chart.scene(GRAPH_WIDTH, GRAPH_HEIGHT, &ruler)?;

    let opts = SvgOptions { background: Some("#14141a".to_string()), ..SvgOptions::default() };
    let out = out_name(&path, "settled");
    render_to_file(&scene, &opts, GRAPH_WIDTH, GRAPH_HEIGHT, &out)?;
    println!("Wrote {}", out.display());

    // A frame from the middle of the reveal sweep: humidity mid-draw, the
    // delayed temperature series just starting.
    let mid = SvgOptions { reveal_at_ms: Some(800.0), ..opts };
    let out = out_name(&path, "reveal_800ms");
    render_to_file(&scene, &mid, GRAPH_WIDTH, GRAPH_HEIGHT, &out)?;
    println!("Wrote {}", out.display());

    // Hover probe: what a pointer near the 3pm peak would show.
    if let Some(rect) = scene.layout.rect() {
        let sets: Vec<SeriesHitData<'_>> = scene
            .series
            .iter()
            .filter_map(|geometry| {
                let dataset = chart.datasets.iter().find(|d| d.id == geometry.id)?;
                Some(SeriesHitData {
                    id: &geometry.id,
                    label: &geometry.label,
                    normalized: &geometry.normalized,
                    data: &dataset.data,
                    tooltip: &dataset.tooltip,
                })
            })
            .collect();
        let probe = scene.series[1].normalized[15]
            .map(|p| PixelPoint::new(p.x + 3.0, p.y - 2.0))
            .unwrap_or(PixelPoint::new(rect.width / 2.0, rect.height / 2.0));
        match hit_test(probe, &sets, CAPTURE_RADIUS_PX) {
            Some(hit) => println!("Hover at 3 PM: {} -> {:?}", hit.series_id, hit.label),
            None => println!("Hover at 3 PM: no point in range"),
        }
    }

    Ok(())
}

/// Combined dual-unit labels: temperature and humidity share one visual
/// axis, so each anchor shows both readings for its pixel row.
fn combined_y_points(temp_range: Range) -> Vec<LabeledYPoint> {
    let count = 24;
    let temp_points = determine_y_range_points(temp_range, count, temperature_label);
    let humidity_points =
        determine_y_range_points(Range::new(0.0, 100.0), count, humidity_label);
    temp_points
        .into_iter()
        .zip(humidity_points)
        .map(|(temp, hum)| {
            LabeledYPoint::new(temp.y, format!("{} \u{2022} {}", temp.label, hum.label))
        })
        .collect()
}

fn temperature_label(degrees_f: f64) -> String {
    format!("{}°F", degrees_f.round())
}

fn humidity_label(humidity: f64) -> String {
    let percent = humidity.round();
    if !(0.0..=100.0).contains(&percent) {
        "N/A".to_string()
    } else {
        format!("{percent}%")
    }
}

/// Resolve path, falling back to the crate manifest directory so the demo
/// works from the workspace root or the crate directory.
fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    let alt = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/hourly_weather.csv");
    if alt.exists() {
        return Ok(alt);
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn out_name(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("{stem}_{suffix}.svg"));
    out
}

fn load_weather_csv(path: &Path) -> Result<Vec<Observation>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.contains(&h.as_str()))
    };

    let i_time = idx(&["time", "timestamp", "date", "datetime"])
        .context("missing time column")?;
    let i_temp = idx(&["temperature_f", "temp", "temperature"]);
    let i_humidity = idx(&["relative_humidity", "humidity", "rh"]);
    if i_temp.is_none() && i_humidity.is_none() {
        anyhow::bail!("no temperature or humidity column found");
    }

    let mut out = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let parse = |i: Option<usize>| -> Option<f64> {
            i.and_then(|ix| record.get(ix))
                .and_then(|s| s.trim().parse::<f64>().ok())
        };
        let Some(time) = record
            .get(i_time)
            .and_then(|s| NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M:%S").ok())
        else {
            tracing::warn!(row = out.len() + 1, "unparseable timestamp; skipping row");
            continue;
        };
        out.push(Observation {
            time,
            temperature_f: parse(i_temp),
            humidity: parse(i_humidity),
        });
    }
    Ok(out)
}
