// File: crates/curvegraph-core/src/chart.rs
// Summary: Chart model and scene assembly: the two-pass pipeline from data
// and axis configuration to renderer-consumable geometry.

use std::cell::RefCell;
use std::sync::Arc;

use tracing::warn;

use crate::axis::{layout_x_ticks, layout_y_ticks, Tick};
use crate::error::GraphError;
use crate::layout::{LabelSets, LayoutResolver, LayoutState};
use crate::normalize::{normalize_points, normalize_values};
use crate::path::{area_path, line_path};
use crate::range::Range;
use crate::reveal::RevealAnimator;
use crate::series::{DataSet, GraphStyle, Gradient};
use crate::text::{TextMeasurer, TextStyle};
use crate::types::{LabeledXPoint, LabeledYPoint, NormPoint};

/// Y-axis configuration: labeled anchors plus labeling policy.
#[derive(Clone, Default)]
pub struct YAxisConfig {
    /// Anchor ticks in ascending domain order, evenly spaced in value.
    pub anchors: Vec<LabeledYPoint>,
    /// Every Nth tick is primary (labeled, guideline). 0 acts as 1.
    pub label_frequency: usize,
    /// Labels for the synthetic ticks extrapolated into the reserved band.
    pub margin_label: Option<Arc<dyn Fn(f64) -> String + Send + Sync>>,
    /// Explicit range for anchor normalization; derived from the anchor
    /// values when absent.
    pub range: Option<Range>,
}

impl std::fmt::Debug for YAxisConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YAxisConfig")
            .field("anchors", &self.anchors)
            .field("label_frequency", &self.label_frequency)
            .field("margin_label", &self.margin_label.is_some())
            .field("range", &self.range)
            .finish()
    }
}

/// X-axis configuration.
#[derive(Clone, Debug, Default)]
pub struct XAxisConfig {
    pub anchors: Vec<LabeledXPoint>,
    pub label_frequency: usize,
    pub range: Option<Range>,
}

/// Geometry for one series, ready for any renderer.
#[derive(Clone, Debug)]
pub struct SeriesGeometry {
    pub id: String,
    pub label: String,
    pub label_color: String,
    pub style: GraphStyle,
    pub gradient: Gradient,
    pub show_area_shadow: bool,
    /// Line path description (moveto/lineto/curveto primitives).
    pub line_path: String,
    /// Closed fill path, present for `GraphStyle::Area`.
    pub area_path: Option<String>,
    /// Normalized points, gaps preserved; shared with hit-testing.
    pub normalized: Vec<NormPoint>,
    /// Y anchor for the trailing label (last non-gap point).
    pub trailing_label_y: Option<f32>,
    pub animation_delay_ms: f64,
}

/// The resolved chart: drawable rectangle, axis ticks, and per-series
/// geometry. Purely geometric; the rendering layer decides appearance.
#[derive(Clone, Debug)]
pub struct ChartScene {
    pub layout: LayoutState,
    pub title: Option<String>,
    pub y_ticks: Vec<Tick>,
    pub x_ticks: Vec<Tick>,
    pub series: Vec<SeriesGeometry>,
    pub space_below_data: f32,
    pub animate: bool,
}

impl ChartScene {
    /// True when the chart should render the "too small" placeholder.
    pub fn is_too_small(&self) -> bool {
        matches!(self.layout, LayoutState::TooSmall { .. })
    }
}

/// A multi-series chart: title, data sets, axis configuration, and the
/// reserved band below the data.
pub struct Chart {
    pub title: Option<String>,
    pub datasets: Vec<DataSet>,
    pub y_axis: YAxisConfig,
    pub x_axis: XAxisConfig,
    /// Reserved pixels beneath the lowest data point.
    pub space_below_data: f32,
    pub animate: bool,
    pub tick_label_style: TextStyle,
    pub trailing_label_style: TextStyle,
    resolver: RefCell<LayoutResolver>,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            datasets: Vec::new(),
            y_axis: YAxisConfig::default(),
            x_axis: XAxisConfig::default(),
            space_below_data: 0.0,
            animate: true,
            tick_label_style: TextStyle::new(12.0),
            trailing_label_style: TextStyle::bold(14.0),
            resolver: RefCell::new(LayoutResolver::new()),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_space_below_data(mut self, pixels: f32) -> Self {
        self.space_below_data = pixels;
        self
    }

    pub fn with_animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    pub fn add_dataset(&mut self, dataset: DataSet) {
        self.datasets.push(dataset);
    }

    /// One reveal animator per series, in plotting order, honoring the
    /// chart-level animation switch and per-series delays.
    pub fn reveal_animators(&self) -> Vec<RevealAnimator> {
        self.datasets
            .iter()
            .map(|ds| RevealAnimator::new(ds.animation_delay_ms, self.animate))
            .collect()
    }

    /// Assemble the scene for a `graph_width` x `graph_height` pixel box.
    ///
    /// Runs the two-pass resolution: Y tick geometry and labels first (they
    /// depend only on the vertical chrome, which is constant), then label
    /// measurement, then the drawable rectangle and everything that needs
    /// its width. Per-series failures drop that series and keep siblings.
    pub fn scene(
        &self,
        graph_width: f32,
        graph_height: f32,
        measurer: &dyn TextMeasurer,
    ) -> Result<ChartScene, GraphError> {
        let has_x_axis = !self.x_axis.anchors.is_empty();

        // Vertical geometry is independent of measured label widths, so the
        // full Y tick list (and with it every candidate label string) is
        // known before the rectangle is.
        let data_band_h = (graph_height - self.top_band() - self.bottom_band(has_x_axis)).max(0.0);
        let drawable_h = (data_band_h - self.space_below_data).max(0.0);

        if self.y_axis.anchors.len() < 2 {
            return Err(GraphError::NotEnoughAnchors { got: self.y_axis.anchors.len() });
        }
        let anchor_values: Vec<f64> = self.y_axis.anchors.iter().map(|a| a.y).collect();
        let anchor_pixels = normalize_values(&anchor_values, drawable_h, self.y_axis.range, true)?;
        let y_ticks = layout_y_ticks(
            &self.y_axis.anchors,
            &anchor_pixels,
            data_band_h,
            self.y_axis.label_frequency,
            match &self.y_axis.margin_label {
                Some(f) => Some(&**f),
                None => None,
            },
        )?;

        // Pass 1 + 2: measure the labels that will render, derive the rect.
        let labels = LabelSets {
            tick_labels: y_ticks
                .iter()
                .filter(|t| t.primary)
                .map(|t| t.label.clone())
                .collect(),
            tick_style: self.tick_label_style,
            trailing_labels: self
                .datasets
                .iter()
                .filter(|ds| !ds.label.is_empty())
                .map(|ds| ds.label.clone())
                .collect(),
            trailing_style: self.trailing_label_style,
            has_title: self.title.is_some(),
            has_x_axis,
        };
        let layout =
            self.resolver
                .borrow_mut()
                .resolve(&labels, measurer, graph_width, graph_height);

        let Some(rect) = layout.rect() else {
            return Ok(ChartScene {
                layout,
                title: self.title.clone(),
                y_ticks: Vec::new(),
                x_ticks: Vec::new(),
                series: Vec::new(),
                space_below_data: self.space_below_data,
                animate: self.animate,
            });
        };

        let x_values: Vec<f64> = self.x_axis.anchors.iter().map(|a| a.x).collect();
        let x_ticks = if has_x_axis {
            let x_pixels = normalize_values(&x_values, rect.width, self.x_axis.range, false)?;
            layout_x_ticks(&self.x_axis.anchors, &x_pixels, self.x_axis.label_frequency)
        } else {
            Vec::new()
        };

        let mut series = Vec::with_capacity(self.datasets.len());
        for dataset in &self.datasets {
            match self.series_geometry(dataset, rect.width, rect.height) {
                Ok(geometry) => series.push(geometry),
                Err(GraphError::EmptySeries) => {
                    warn!(series = %dataset.id, "series has no drawable points; skipping");
                }
                Err(err) => return Err(err),
            }
        }

        Ok(ChartScene {
            layout,
            title: self.title.clone(),
            y_ticks,
            x_ticks,
            series,
            space_below_data: self.space_below_data,
            animate: self.animate,
        })
    }

    fn series_geometry(
        &self,
        dataset: &DataSet,
        width: f32,
        height: f32,
    ) -> Result<SeriesGeometry, GraphError> {
        let normalized = normalize_points(
            &dataset.data,
            width,
            height,
            dataset.y_range,
            dataset.x_range,
            self.space_below_data,
        )?;

        let line = line_path(&normalized, dataset.interpolation);
        let area = match dataset.style {
            GraphStyle::Area => Some(area_path(&normalized, dataset.interpolation, height)),
            _ => None,
        };
        let trailing_label_y = normalized.iter().rev().flatten().next().map(|p| p.y);

        Ok(SeriesGeometry {
            id: dataset.id.clone(),
            label: dataset.label.clone(),
            label_color: dataset.label_color.clone(),
            style: dataset.style,
            gradient: dataset.gradient.clone(),
            show_area_shadow: dataset.show_area_shadow,
            line_path: line,
            area_path: area,
            normalized,
            trailing_label_y,
            animation_delay_ms: dataset.animation_delay_ms,
        })
    }

    fn top_band(&self) -> f32 {
        if self.title.is_some() {
            crate::layout::TITLE_BAND_PX
        } else {
            0.0
        }
    }

    fn bottom_band(&self, has_x_axis: bool) -> f32 {
        if has_x_axis {
            crate::layout::X_AXIS_BAND_PX
        } else {
            0.0
        }
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}
