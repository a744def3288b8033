// File: crates/curvegraph-core/src/error.rs
// Summary: Error taxonomy for the geometry and layout engine.
//
// Only genuinely fatal conditions are errors. Degenerate ranges and uneven
// anchor steps are recoverable and surface as `tracing::warn!` events; a
// too-small drawable area is a layout state (`LayoutState::TooSmall`).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    /// A series had no non-null points and no explicit range was supplied.
    /// Fatal to that series only; siblings and the axis layout proceed.
    #[error("series has no non-null data points and no explicit range")]
    EmptySeries,

    /// Axis layout needs at least two anchors to derive a step.
    #[error("axis layout requires at least 2 anchors, got {got}")]
    NotEnoughAnchors { got: usize },
}
