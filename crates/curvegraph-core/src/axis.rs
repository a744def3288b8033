// File: crates/curvegraph-core/src/axis.rs
// Summary: Axis tick layout, margin extrapolation, and anchor generation.

use tracing::warn;

use crate::error::GraphError;
use crate::range::Range;
use crate::types::{LabeledXPoint, LabeledYPoint};

/// One renderable axis tick. Primary ticks carry a label and a guideline;
/// secondary ticks are unlabeled intermediates.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub pixel: f32,
    pub label: String,
    pub sub_label: Option<String>,
    pub primary: bool,
}

/// Lay out Y-axis ticks from labeled anchors, extrapolating synthetic ticks
/// into the reserved band below the lowest anchor.
///
/// `anchors` must be in ascending domain order and evenly spaced in domain
/// value; `anchor_pixels` are their normalized pixel positions (inverted Y,
/// within the drawable height). `total_height` is the drawable height plus
/// the reserved space below the data: synthetic ticks are emitted at the
/// anchor pixel step until the next one would pass that bottom edge, with
/// labels continuing the anchors' arithmetic progression downward through
/// `margin_label` (blank when absent).
///
/// Returned ticks are in ascending pixel order; every `frequency`-th tick
/// (counting from index 0) is primary.
pub fn layout_y_ticks(
    anchors: &[LabeledYPoint],
    anchor_pixels: &[f32],
    total_height: f32,
    frequency: usize,
    margin_label: Option<&dyn Fn(f64) -> String>,
) -> Result<Vec<Tick>, GraphError> {
    if anchors.len() < 2 {
        return Err(GraphError::NotEnoughAnchors { got: anchors.len() });
    }
    debug_assert_eq!(anchors.len(), anchor_pixels.len());
    check_even_spacing(anchors);

    let mut ticks: Vec<Tick> = anchors
        .iter()
        .zip(anchor_pixels)
        .map(|(anchor, pixel)| Tick {
            pixel: *pixel,
            label: anchor.label.clone(),
            sub_label: None,
            primary: false,
        })
        .collect();

    // Project the first anchor step downward through the reserved band.
    let step_value = anchors[1].y - anchors[0].y;
    let step_px = anchor_pixels[0] - anchor_pixels[1];
    if step_px > 0.0 {
        let mut pixel = anchor_pixels[0] + step_px;
        let mut value = anchors[0].y - step_value;
        while pixel <= total_height + f32::EPSILON {
            ticks.push(Tick {
                pixel,
                label: margin_label.map(|f| f(value)).unwrap_or_default(),
                sub_label: None,
                primary: false,
            });
            pixel += step_px;
            value -= step_value;
        }
    }

    ticks.sort_by(|a, b| a.pixel.total_cmp(&b.pixel));
    flag_primary(&mut ticks, frequency);
    Ok(ticks)
}

/// Lay out X-axis ticks from labeled anchors at their normalized pixel
/// positions, in ascending pixel order. Primary ticks carry the label and
/// the optional sub-label.
pub fn layout_x_ticks(
    anchors: &[LabeledXPoint],
    anchor_pixels: &[f32],
    frequency: usize,
) -> Vec<Tick> {
    debug_assert_eq!(anchors.len(), anchor_pixels.len());
    let mut ticks: Vec<Tick> = anchors
        .iter()
        .zip(anchor_pixels)
        .map(|(anchor, pixel)| Tick {
            pixel: *pixel,
            label: anchor.label.clone(),
            sub_label: anchor.sub_label.clone(),
            primary: false,
        })
        .collect();
    ticks.sort_by(|a, b| a.pixel.total_cmp(&b.pixel));
    flag_primary(&mut ticks, frequency);
    ticks
}

/// Generate `count` evenly spaced labeled Y anchors across `range`,
/// starting at the minimum with a step of `span / count`.
pub fn determine_y_range_points(
    range: Range,
    count: usize,
    label: impl Fn(f64) -> String,
) -> Vec<LabeledYPoint> {
    if count == 0 {
        return Vec::new();
    }
    let step = range.span() / count as f64;
    let mut out = Vec::with_capacity(count);
    let mut value = range.min;
    while out.len() < count {
        out.push(LabeledYPoint::new(value, label(value)));
        value += step;
    }
    out
}

fn flag_primary(ticks: &mut [Tick], frequency: usize) {
    let frequency = frequency.max(1);
    for (index, tick) in ticks.iter_mut().enumerate() {
        tick.primary = index % frequency == 0;
    }
}

/// The margin extrapolation projects the first anchor step indefinitely,
/// which only lines up when the anchors themselves are evenly spaced.
fn check_even_spacing(anchors: &[LabeledYPoint]) {
    let step = anchors[1].y - anchors[0].y;
    let tolerance = step.abs().max(1e-9) * 1e-6;
    for window in anchors.windows(2) {
        let current = window[1].y - window[0].y;
        if (current - step).abs() > tolerance {
            warn!(
                expected = step,
                got = current,
                "axis anchors are not evenly spaced; extrapolated ticks will be inconsistent"
            );
            return;
        }
    }
}
