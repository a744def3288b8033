// File: crates/curvegraph-core/src/normalize.rs
// Summary: Linear mapping of data points into target pixel space.

use tracing::warn;

use crate::error::GraphError;
use crate::range::{resolve_range, Range};
use crate::types::{NormPoint, PixelPoint, Point};

/// Map a list of data points into a `width` x `height` pixel rectangle.
///
/// X increases left to right; Y is inverted so the domain maximum lands on
/// pixel 0 and the domain minimum on `height - space_below`. The reserved
/// band of `space_below` pixels keeps the lowest data clear of the axis
/// line. Gaps (`None` on either axis) are preserved slot-for-slot.
///
/// A degenerate axis range (`min == max`) collapses every value to that
/// axis's pixel center instead of producing NaN. Series whose domains share
/// the same shape and are normalized with the same arguments are guaranteed
/// identical pixel placement.
pub fn normalize_points(
    points: &[Point],
    width: f32,
    height: f32,
    y_range: Option<Range>,
    x_range: Option<Range>,
    space_below: f32,
) -> Result<Vec<NormPoint>, GraphError> {
    let x_range = resolve_range(points.iter().map(|p| p.x), x_range)?;
    let y_range = resolve_range(points.iter().map(|p| p.y), y_range)?;
    let drawable_h = (height - space_below).max(0.0);

    if x_range.is_degenerate() {
        warn!(min = x_range.min, "degenerate x range; collapsing to pixel center");
    }
    if y_range.is_degenerate() {
        warn!(min = y_range.min, "degenerate y range; collapsing to pixel center");
    }

    let normalized = points
        .iter()
        .map(|point| {
            let (x, y) = point.xy()?;
            Some(PixelPoint::new(
                scale(x, x_range, width, false),
                scale(y, y_range, drawable_h, true),
            ))
        })
        .collect();
    Ok(normalized)
}

/// Map a bare value list onto a single pixel axis. Used by the axis layout
/// engine, which normalizes anchor values without a second coordinate.
pub fn normalize_values(
    values: &[f64],
    extent: f32,
    range: Option<Range>,
    inverted: bool,
) -> Result<Vec<f32>, GraphError> {
    let range = resolve_range(values.iter().map(|v| Some(*v)), range)?;
    if range.is_degenerate() {
        warn!(min = range.min, "degenerate axis range; collapsing to pixel center");
    }
    Ok(values.iter().map(|v| scale(*v, range, extent, inverted)).collect())
}

fn scale(value: f64, range: Range, extent: f32, inverted: bool) -> f32 {
    if range.is_degenerate() {
        return extent / 2.0;
    }
    let fraction = ((value - range.min) / range.span()) as f32;
    if inverted {
        extent - fraction * extent
    } else {
        fraction * extent
    }
}
