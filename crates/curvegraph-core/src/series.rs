// File: crates/curvegraph-core/src/series.rs
// Summary: Series model: data sets with style descriptors and range overrides.

use crate::interaction::TooltipConfig;
use crate::path::Interpolation;
use crate::range::Range;
use crate::types::Point;

/// Visual style of a series. The core only routes this to the renderer; it
/// decides geometry, never appearance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphStyle {
    Line,
    DashedLine,
    /// Line plus a closed fill down to the bottom of the data band.
    Area,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradientDirection {
    Vertical,
    Horizontal,
}

/// Two-stop gradient descriptor, passed through to the renderer untouched.
/// Colors are opaque strings in whatever form the renderer understands.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    pub start: String,
    pub end: String,
    pub start_opacity: f32,
    pub end_opacity: f32,
    pub direction: GradientDirection,
}

impl Gradient {
    pub fn vertical(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            start_opacity: 1.0,
            end_opacity: 1.0,
            direction: GradientDirection::Vertical,
        }
    }

    pub fn horizontal(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            direction: GradientDirection::Horizontal,
            ..Self::vertical(start, end)
        }
    }

    pub fn with_opacity(mut self, start: f32, end: f32) -> Self {
        self.start_opacity = start;
        self.end_opacity = end;
        self
    }
}

/// One plottable series. Insertion order into the chart is plotting order,
/// z-order, and animation order: later series draw on top.
#[derive(Clone, Debug)]
pub struct DataSet {
    /// Unique within a chart.
    pub id: String,
    /// Trailing label text; empty to draw no trailing label.
    pub label: String,
    pub label_color: String,
    pub style: GraphStyle,
    pub interpolation: Interpolation,
    pub gradient: Gradient,
    pub show_area_shadow: bool,
    /// Explicit domain overrides; when absent the range resolver derives
    /// them from the series' own data.
    pub y_range: Option<Range>,
    pub x_range: Option<Range>,
    /// Reveal start delay, in milliseconds.
    pub animation_delay_ms: f64,
    pub tooltip: TooltipConfig,
    pub data: Vec<Point>,
}

impl DataSet {
    pub fn new(id: impl Into<String>, data: Vec<Point>) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            label_color: String::new(),
            style: GraphStyle::Line,
            interpolation: Interpolation::Smooth,
            gradient: Gradient::vertical("#000000", "#000000"),
            show_area_shadow: false,
            y_range: None,
            x_range: None,
            animation_delay_ms: 0.0,
            tooltip: TooltipConfig::Default,
            data,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>, color: impl Into<String>) -> Self {
        self.label = label.into();
        self.label_color = color.into();
        self
    }

    pub fn with_style(mut self, style: GraphStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn with_gradient(mut self, gradient: Gradient) -> Self {
        self.gradient = gradient;
        self
    }

    pub fn with_area_shadow(mut self) -> Self {
        self.show_area_shadow = true;
        self
    }

    pub fn with_y_range(mut self, range: Range) -> Self {
        self.y_range = Some(range);
        self
    }

    pub fn with_x_range(mut self, range: Range) -> Self {
        self.x_range = Some(range);
        self
    }

    pub fn with_animation_delay(mut self, delay_ms: f64) -> Self {
        self.animation_delay_ms = delay_ms;
        self
    }

    pub fn with_tooltip(mut self, tooltip: TooltipConfig) -> Self {
        self.tooltip = tooltip;
        self
    }
}
