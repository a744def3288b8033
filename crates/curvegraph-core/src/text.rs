// File: crates/curvegraph-core/src/text.rs
// Summary: Injected text-measurement oracle and memoized batch measurement.

use std::collections::HashMap;

/// Text attributes that affect measured width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub size: f32,
    pub bold: bool,
}

impl TextStyle {
    pub const fn new(size: f32) -> Self {
        Self { size, bold: false }
    }

    pub const fn bold(size: f32) -> Self {
        Self { size, bold: true }
    }
}

/// Measurement oracle: "how wide would this string render, in this style?"
///
/// The rendering surface injects an implementation (off-screen glyph layout,
/// a font metrics table, a fixed-advance ruler); the core never touches a
/// surface itself. Implementations must be reusable across calls without
/// retained mutable state.
pub trait TextMeasurer {
    fn measure(&self, text: &str, style: TextStyle) -> f32;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, TextStyle) -> f32,
{
    fn measure(&self, text: &str, style: TextStyle) -> f32 {
        self(text, style)
    }
}

/// Memoized widest-label lookup.
///
/// Keyed on (label batch, style): identical inputs skip the oracle entirely,
/// so re-resolving an unchanged layout never re-measures.
#[derive(Debug, Default)]
pub struct MeasureCache {
    widths: HashMap<(String, u32, bool), f32>,
}

impl MeasureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Widest label in the batch, rounded up to a whole pixel.
    pub fn max_width(
        &mut self,
        labels: &[String],
        style: TextStyle,
        measurer: &dyn TextMeasurer,
    ) -> f32 {
        if labels.is_empty() {
            return 0.0;
        }
        let key = (labels.join("\u{1f}"), style.size.to_bits(), style.bold);
        if let Some(width) = self.widths.get(&key) {
            return *width;
        }
        let width = labels
            .iter()
            .map(|label| measurer.measure(label, style))
            .fold(0.0_f32, f32::max)
            .ceil();
        self.widths.insert(key, width);
        width
    }
}
