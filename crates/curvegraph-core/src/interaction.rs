// File: crates/curvegraph-core/src/interaction.rs
// Summary: Nearest-point hit-testing, tooltip labels, and input timing policy.

use std::sync::Arc;

use crate::types::{NormPoint, PixelPoint, Point};

/// Tooltip label configuration for one series.
#[derive(Clone, Default)]
pub enum TooltipConfig {
    /// Plain `x`/`y` values with default aliases.
    #[default]
    Default,
    /// A fully custom label built from the raw data values.
    Custom(Arc<dyn Fn(f64, f64) -> String + Send + Sync>),
    /// Separately formatted X/Y values with display aliases.
    Xy {
        format_x: Option<Arc<dyn Fn(f64) -> String + Send + Sync>>,
        format_y: Option<Arc<dyn Fn(f64) -> String + Send + Sync>>,
        x_alias: Option<String>,
        y_alias: Option<String>,
    },
}

impl std::fmt::Debug for TooltipConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "TooltipConfig::Default"),
            Self::Custom(_) => write!(f, "TooltipConfig::Custom(..)"),
            Self::Xy { .. } => write!(f, "TooltipConfig::Xy(..)"),
        }
    }
}

/// Rendered tooltip content for a hit point.
#[derive(Clone, Debug, PartialEq)]
pub enum PointLabel {
    Custom(String),
    Xy {
        x_label: String,
        y_label: String,
        x_alias: String,
        y_alias: String,
    },
}

/// The nearest rendered point for a pointer position.
#[derive(Clone, Debug)]
pub struct InteractionHit {
    pub series_id: String,
    pub series_label: String,
    pub point_index: usize,
    /// Pixel position of the hit point (tooltip anchor).
    pub pixel: PixelPoint,
    pub label: PointLabel,
}

/// One series' hit-test inputs: the normalized points, the raw data they
/// came from (for label formatting), and the tooltip configuration.
pub struct SeriesHitData<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub normalized: &'a [NormPoint],
    pub data: &'a [Point],
    pub tooltip: &'a TooltipConfig,
}

/// Find the single nearest rendered point across all series within the
/// capture radius, or None. Gaps never match. Ties keep the earliest
/// series/point, matching plotting order. Linear scan by design.
pub fn hit_test(
    pointer: PixelPoint,
    series: &[SeriesHitData<'_>],
    capture_radius_px: f32,
) -> Option<InteractionHit> {
    let radius_sq = capture_radius_px * capture_radius_px;
    let mut best: Option<(f32, InteractionHit)> = None;

    for s in series {
        for (index, slot) in s.normalized.iter().enumerate() {
            let Some(pixel) = slot else {
                continue;
            };
            let dist = distance_sq(*pixel, pointer);
            if dist > radius_sq {
                continue;
            }
            if best.as_ref().is_none_or(|(best_dist, _)| dist < *best_dist) {
                let Some((x, y)) = s.data.get(index).and_then(|p| p.xy()) else {
                    continue;
                };
                best = Some((
                    dist,
                    InteractionHit {
                        series_id: s.id.to_string(),
                        series_label: s.label.to_string(),
                        point_index: index,
                        pixel: *pixel,
                        label: point_label(x, y, s.tooltip),
                    },
                ));
            }
        }
    }
    best.map(|(_, hit)| hit)
}

fn point_label(x: f64, y: f64, tooltip: &TooltipConfig) -> PointLabel {
    match tooltip {
        TooltipConfig::Custom(build) => PointLabel::Custom(build(x, y)),
        TooltipConfig::Xy { format_x, format_y, x_alias, y_alias } => PointLabel::Xy {
            x_label: format_x.as_ref().map_or_else(|| x.to_string(), |f| f(x)),
            y_label: format_y.as_ref().map_or_else(|| y.to_string(), |f| f(y)),
            x_alias: x_alias.clone().unwrap_or_else(|| "x".to_string()),
            y_alias: y_alias.clone().unwrap_or_else(|| "y".to_string()),
        },
        TooltipConfig::Default => PointLabel::Xy {
            x_label: x.to_string(),
            y_label: y.to_string(),
            x_alias: "x".to_string(),
            y_alias: "y".to_string(),
        },
    }
}

fn distance_sq(a: PixelPoint, b: PixelPoint) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Trailing debounce over hover events: a submitted value is delivered only
/// once no newer value arrives within the delay. Pure over timestamps; the
/// host polls from its frame callback.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay_ms: u64,
    pending: Option<(u64, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u64) -> Self {
        Self { delay_ms, pending: None }
    }

    /// Replace any pending value and restart the delay.
    pub fn submit(&mut self, value: T, now_ms: u64) {
        self.pending = Some((now_ms, value));
    }

    /// Deliver the pending value once its delay has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        let ready = matches!(
            &self.pending,
            Some((at, _)) if now_ms.saturating_sub(*at) >= self.delay_ms
        );
        if ready {
            self.pending.take().map(|(_, value)| value)
        } else {
            None
        }
    }
}

/// Touch input has no hover-exit: a shown tooltip auto-dismisses after a
/// fixed timeout instead.
#[derive(Debug, Default)]
pub struct TouchDismiss {
    shown_at_ms: Option<u64>,
}

impl TouchDismiss {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a touch tooltip was shown (restarts the timeout).
    pub fn shown(&mut self, now_ms: u64) {
        self.shown_at_ms = Some(now_ms);
    }

    /// True exactly once when the timeout expires; the tooltip should hide.
    pub fn should_dismiss(&mut self, now_ms: u64, timeout_ms: u64) -> bool {
        match self.shown_at_ms {
            Some(at) if now_ms.saturating_sub(at) >= timeout_ms => {
                self.shown_at_ms = None;
                true
            }
            _ => false,
        }
    }
}
