// File: crates/curvegraph-core/src/lib.rs
// Summary: Core library entry point; exports the geometry and layout engine.

pub mod axis;
pub mod chart;
pub mod error;
pub mod interaction;
pub mod labels;
pub mod layout;
pub mod normalize;
pub mod path;
pub mod range;
pub mod reveal;
pub mod series;
pub mod text;
pub mod types;

pub use axis::{determine_y_range_points, layout_x_ticks, layout_y_ticks, Tick};
pub use chart::{Chart, ChartScene, SeriesGeometry, XAxisConfig, YAxisConfig};
pub use error::GraphError;
pub use interaction::{hit_test, InteractionHit, PointLabel, SeriesHitData, TooltipConfig};
pub use layout::{DrawableRect, LabelSets, LayoutResolver, LayoutState, ResizeTracker};
pub use normalize::{normalize_points, normalize_values};
pub use path::{area_path, line_path, Interpolation};
pub use range::{resolve_range, Range};
pub use reveal::{advance_reveal, RevealAnimator, RevealPhase};
pub use series::{DataSet, Gradient, GradientDirection, GraphStyle};
pub use text::{MeasureCache, TextMeasurer, TextStyle};
pub use types::{LabeledXPoint, LabeledYPoint, NormPoint, PixelPoint, Point};
