// File: crates/curvegraph-core/src/layout.rs
// Summary: Text-measurement-driven layout resolution and resize tracking.

use crate::text::{MeasureCache, TextMeasurer, TextStyle};
use crate::types::{MIN_DRAWABLE_PX, RESIZE_SETTLE_MS};

/// Tick mark length on the Y axis, in pixels.
pub const TICK_LENGTH_PX: f32 = 10.0;
/// Gap between a tick label and its tick mark.
pub const TICK_TEXT_PADDING_PX: f32 = 7.0;
/// Gap between the data area and a trailing series label.
pub const TRAILING_LABEL_GAP_PX: f32 = 7.0;
/// Vertical band reserved for the chart title.
pub const TITLE_BAND_PX: f32 = 59.0;
/// Vertical band reserved for the X axis ticks and labels.
pub const X_AXIS_BAND_PX: f32 = 67.0;

/// Resolved pixel geometry of the data area: origin offsets within the
/// overall chart box plus usable width and height. Recomputed whenever the
/// host size, the measurement oracle's output, or the axis configuration
/// changes; it has no lifecycle beyond "current computed layout".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawableRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl DrawableRect {
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Outcome of layout resolution. A usable extent under the minimum
/// threshold is a degraded placeholder state, not an error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayoutState {
    Ready(DrawableRect),
    TooSmall { width: f32, height: f32 },
}

impl LayoutState {
    pub fn rect(&self) -> Option<DrawableRect> {
        match self {
            Self::Ready(rect) => Some(*rect),
            Self::TooSmall { .. } => None,
        }
    }
}

/// Label content whose rendered width determines the chart margins.
///
/// Label strings are a pure function of domain values; they never depend on
/// pixel geometry. That one-way dependency is what lets resolution finish
/// in exactly two passes: measure first, then derive the rectangle.
#[derive(Clone, Debug)]
pub struct LabelSets {
    /// Y-axis tick labels (including synthetic margin tick labels).
    pub tick_labels: Vec<String>,
    pub tick_style: TextStyle,
    /// Per-series trailing labels drawn to the right of the data.
    pub trailing_labels: Vec<String>,
    pub trailing_style: TextStyle,
    pub has_title: bool,
    pub has_x_axis: bool,
}

/// Two-pass layout resolver.
///
/// Pass 1 pushes every candidate label through the measurement oracle and
/// records the widest per group (memoized). Pass 2 folds those widths into
/// the margin formulas and produces the drawable rectangle. Identical label
/// sets with an identical oracle resolve to a bit-identical rectangle.
#[derive(Debug, Default)]
pub struct LayoutResolver {
    cache: MeasureCache,
}

impl LayoutResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(
        &mut self,
        labels: &LabelSets,
        measurer: &dyn TextMeasurer,
        graph_width: f32,
        graph_height: f32,
    ) -> LayoutState {
        // Pass 1: measurement.
        let tick_width = self
            .cache
            .max_width(&labels.tick_labels, labels.tick_style, measurer);
        let trailing_width =
            self.cache
                .max_width(&labels.trailing_labels, labels.trailing_style, measurer);

        // Pass 2: geometry.
        let left = TICK_LENGTH_PX + TICK_TEXT_PADDING_PX + tick_width;
        let right = if trailing_width > 0.0 {
            trailing_width + TRAILING_LABEL_GAP_PX
        } else {
            0.0
        };
        let top = if labels.has_title { TITLE_BAND_PX } else { 0.0 };
        let bottom = if labels.has_x_axis { X_AXIS_BAND_PX } else { 0.0 };

        let width = graph_width - left - right;
        let height = graph_height - top - bottom;
        if width < MIN_DRAWABLE_PX || height < MIN_DRAWABLE_PX {
            return LayoutState::TooSmall {
                width: width.max(0.0),
                height: height.max(0.0),
            };
        }
        LayoutState::Ready(DrawableRect { left, top, width, height })
    }
}

/// Trailing-debounce tracker for host container resizes.
///
/// While notifications keep arriving inside the settle window the host is
/// "still resizing"; layout recomputation and the re-animation sweep are
/// deferred until the window goes quiet.
#[derive(Debug, Default)]
pub struct ResizeTracker {
    size: Option<(f32, f32)>,
    last_change_ms: Option<u64>,
}

impl ResizeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a size notification. Returns true when the size changed.
    pub fn observe(&mut self, width: f32, height: f32, now_ms: u64) -> bool {
        let next = Some((width, height));
        if self.size == next {
            return false;
        }
        self.size = next;
        self.last_change_ms = Some(now_ms);
        true
    }

    pub fn is_resizing(&self, now_ms: u64) -> bool {
        match self.last_change_ms {
            Some(at) => now_ms.saturating_sub(at) < RESIZE_SETTLE_MS,
            None => false,
        }
    }

    /// The current size once the settle window has gone quiet.
    pub fn settled_size(&self, now_ms: u64) -> Option<(f32, f32)> {
        if self.is_resizing(now_ms) {
            None
        } else {
            self.size
        }
    }
}
