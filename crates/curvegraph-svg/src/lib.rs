// File: crates/curvegraph-svg/src/lib.rs
// Summary: SVG renderer over core chart scenes: gradients, clipped series
// paths, axis ticks/labels, and a deterministic text ruler for headless use.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use curvegraph_core::layout::{
    TICK_LENGTH_PX, TICK_TEXT_PADDING_PX, TRAILING_LABEL_GAP_PX,
};
use curvegraph_core::reveal::advance_reveal;
use curvegraph_core::types::REVEAL_DURATION_MS;
use curvegraph_core::{ChartScene, GradientDirection, GraphStyle, SeriesGeometry, TextMeasurer, TextStyle};

/// Rendering options: colors and typography are decided here, never in the
/// core.
#[derive(Clone, Debug)]
pub struct SvgOptions {
    pub background: Option<String>,
    pub text_color: String,
    pub font_family: String,
    pub primary_tick_color: String,
    pub secondary_tick_color: String,
    pub show_guide_lines: bool,
    pub stroke_width: f32,
    /// Snapshot the reveal animation at this instant. `None` renders the
    /// settled chart (every clip at full width).
    pub reveal_at_ms: Option<f64>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            background: None,
            text_color: "#E0E1E2".to_string(),
            font_family: "sans-serif".to_string(),
            primary_tick_color: "#E0E1E2".to_string(),
            secondary_tick_color: "#3A3D4B".to_string(),
            show_guide_lines: true,
            stroke_width: 4.5,
            reveal_at_ms: None,
        }
    }
}

/// Fixed-advance text ruler: every glyph advances `advance_em` of the font
/// size. Deterministic stand-in for surface measurement in headless runs
/// and tests.
#[derive(Clone, Copy, Debug)]
pub struct CharRuler {
    pub advance_em: f32,
}

impl Default for CharRuler {
    fn default() -> Self {
        Self { advance_em: 0.6 }
    }
}

impl TextMeasurer for CharRuler {
    fn measure(&self, text: &str, style: TextStyle) -> f32 {
        text.chars().count() as f32 * style.size * self.advance_em
    }
}

/// Render a resolved scene into a standalone SVG document of the given
/// overall pixel size.
pub fn render_scene(scene: &ChartScene, opts: &SvgOptions, width: f32, height: f32) -> String {
    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         font-family=\"{}\">\n",
        escape(&opts.font_family)
    );
    if let Some(background) = &opts.background {
        let _ = write!(
            svg,
            "  <rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" fill=\"{}\"/>\n",
            escape(background)
        );
    }

    let Some(rect) = scene.layout.rect() else {
        draw_too_small(&mut svg, opts, width, height);
        svg.push_str("</svg>\n");
        return svg;
    };

    if let Some(title) = &scene.title {
        let _ = write!(
            svg,
            "  <text x=\"{}\" y=\"29\" text-anchor=\"middle\" font-size=\"22\" \
             font-weight=\"700\" fill=\"{}\">{}</text>\n",
            rect.left + rect.width / 2.0,
            opts.text_color,
            escape(title)
        );
    }

    draw_defs(&mut svg, scene, &rect, opts);
    draw_y_axis(&mut svg, scene, &rect, opts);
    draw_series(&mut svg, scene, &rect, opts);
    draw_trailing_labels(&mut svg, scene, &rect, opts);
    draw_x_axis(&mut svg, scene, &rect, opts);

    svg.push_str("</svg>\n");
    svg
}

/// Render and write to disk, creating parent directories as needed.
pub fn render_to_file(
    scene: &ChartScene,
    opts: &SvgOptions,
    width: f32,
    height: f32,
    path: impl AsRef<Path>,
) -> Result<()> {
    let svg = render_scene(scene, opts, width, height);
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, svg).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn draw_too_small(svg: &mut String, opts: &SvgOptions, width: f32, height: f32) {
    let _ = write!(
        svg,
        "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"12\" fill=\"{}\">\
         too small to display</text>\n",
        width / 2.0,
        height / 2.0,
        opts.text_color
    );
}

fn draw_defs(
    svg: &mut String,
    scene: &ChartScene,
    rect: &curvegraph_core::DrawableRect,
    opts: &SvgOptions,
) {
    svg.push_str("  <defs>\n");
    for series in &scene.series {
        let (x2, y2) = match series.gradient.direction {
            GradientDirection::Horizontal => ("100%", "0%"),
            GradientDirection::Vertical => ("0%", "100%"),
        };
        let _ = write!(
            svg,
            "    <linearGradient id=\"{id}-gradient\" x1=\"0%\" y1=\"0%\" x2=\"{x2}\" y2=\"{y2}\">\n\
             \x20     <stop offset=\"0%\" stop-color=\"{}\" stop-opacity=\"{}\"/>\n\
             \x20     <stop offset=\"100%\" stop-color=\"{}\" stop-opacity=\"{}\"/>\n\
             \x20   </linearGradient>\n",
            escape(&series.gradient.start),
            series.gradient.start_opacity,
            escape(&series.gradient.end),
            series.gradient.end_opacity,
            id = escape(&series.id),
        );
        if series.show_area_shadow {
            let _ = write!(
                svg,
                "    <filter id=\"{id}-shadow\" x=\"-50%\" y=\"-50%\" width=\"200%\" height=\"200%\">\n\
                 \x20     <feDropShadow dx=\"0\" dy=\"-2\" stdDeviation=\"4\" flood-color=\"rgba(0,0,0,0.15)\"/>\n\
                 \x20   </filter>\n",
                id = escape(&series.id),
            );
        }
        let _ = write!(
            svg,
            "    <clipPath id=\"{id}-clip\">\
             <rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\"/></clipPath>\n",
            reveal_width(scene, series, rect.width, opts),
            rect.height,
            id = escape(&series.id),
        );
    }
    svg.push_str("  </defs>\n");
}

/// Clip width for a series: the reveal snapshot when one was requested,
/// otherwise the settled full width.
fn reveal_width(
    scene: &ChartScene,
    series: &SeriesGeometry,
    target_width: f32,
    opts: &SvgOptions,
) -> f32 {
    match opts.reveal_at_ms {
        Some(at_ms) if scene.animate => advance_reveal(
            at_ms,
            series.animation_delay_ms,
            REVEAL_DURATION_MS,
            target_width,
        ),
        _ => target_width,
    }
}

fn draw_y_axis(
    svg: &mut String,
    scene: &ChartScene,
    rect: &curvegraph_core::DrawableRect,
    opts: &SvgOptions,
) {
    let tick_end = rect.left;
    let tick_start = tick_end - TICK_LENGTH_PX;
    let text_x = tick_start - TICK_TEXT_PADDING_PX;
    for tick in &scene.y_ticks {
        let y = rect.top + tick.pixel;
        let color = if tick.primary {
            &opts.primary_tick_color
        } else {
            &opts.secondary_tick_color
        };
        let _ = write!(
            svg,
            "  <line x1=\"{tick_start}\" x2=\"{tick_end}\" y1=\"{y}\" y2=\"{y}\" \
             stroke=\"{color}\" stroke-width=\"1.5\"/>\n"
        );
        if tick.primary {
            if opts.show_guide_lines {
                let _ = write!(
                    svg,
                    "  <line x1=\"{tick_end}\" x2=\"{}\" y1=\"{y}\" y2=\"{y}\" \
                     stroke=\"{}\" stroke-width=\"1.5\"/>\n",
                    rect.right(),
                    opts.secondary_tick_color
                );
            }
            if !tick.label.is_empty() {
                let _ = write!(
                    svg,
                    "  <text x=\"{text_x}\" y=\"{}\" text-anchor=\"end\" font-size=\"12\" \
                     fill=\"{}\">{}</text>\n",
                    y + 4.0,
                    opts.text_color,
                    escape(&tick.label)
                );
            }
        }
    }
}

fn draw_x_axis(
    svg: &mut String,
    scene: &ChartScene,
    rect: &curvegraph_core::DrawableRect,
    opts: &SvgOptions,
) {
    let axis_top = rect.bottom() + 7.0;
    for tick in &scene.x_ticks {
        let x = rect.left + tick.pixel;
        let color = if tick.primary {
            &opts.primary_tick_color
        } else {
            &opts.secondary_tick_color
        };
        let _ = write!(
            svg,
            "  <line x1=\"{x}\" x2=\"{x}\" y1=\"{axis_top}\" y2=\"{}\" \
             stroke=\"{color}\" stroke-width=\"1.5\"/>\n",
            axis_top + 10.0
        );
        if tick.primary {
            let _ = write!(
                svg,
                "  <text x=\"{x}\" y=\"{}\" text-anchor=\"middle\" font-size=\"12\" \
                 fill=\"{}\">{}</text>\n",
                axis_top + 28.0,
                opts.text_color,
                escape(&tick.label)
            );
            if let Some(sub_label) = &tick.sub_label {
                let _ = write!(
                    svg,
                    "  <text x=\"{x}\" y=\"{}\" text-anchor=\"middle\" font-size=\"12\" \
                     fill=\"{}\">{}</text>\n",
                    axis_top + 48.0,
                    opts.text_color,
                    escape(sub_label)
                );
            }
        }
    }
}

fn draw_series(
    svg: &mut String,
    scene: &ChartScene,
    rect: &curvegraph_core::DrawableRect,
    opts: &SvgOptions,
) {
    for series in &scene.series {
        let id = escape(&series.id);
        let _ = write!(
            svg,
            "  <g transform=\"translate({},{})\" clip-path=\"url(#{id}-clip)\">\n",
            rect.left, rect.top
        );
        match series.style {
            GraphStyle::Area => {
                let shadow = if series.show_area_shadow {
                    format!(" filter=\"url(#{id}-shadow)\"")
                } else {
                    String::new()
                };
                if let Some(area) = &series.area_path {
                    let _ = write!(
                        svg,
                        "    <path d=\"{area}\" fill=\"url(#{id}-gradient)\" stroke=\"none\"{shadow}/>\n"
                    );
                }
            }
            GraphStyle::Line | GraphStyle::DashedLine => {
                let dash = if series.style == GraphStyle::DashedLine {
                    " stroke-dasharray=\"6, 9\""
                } else {
                    ""
                };
                let _ = write!(
                    svg,
                    "    <path d=\"{}\" fill=\"none\" stroke=\"url(#{id}-gradient)\" \
                     stroke-width=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"{dash}/>\n",
                    series.line_path, opts.stroke_width
                );
            }
        }
        svg.push_str("  </g>\n");
    }
}

fn draw_trailing_labels(
    svg: &mut String,
    scene: &ChartScene,
    rect: &curvegraph_core::DrawableRect,
    opts: &SvgOptions,
) {
    let letter_height = 14.0;
    for series in &scene.series {
        if series.label.is_empty() {
            continue;
        }
        let Some(anchor_y) = series.trailing_label_y else {
            continue;
        };
        let _ = write!(
            svg,
            "  <text x=\"{}\" y=\"{}\" text-anchor=\"start\" font-size=\"{letter_height}\" \
             font-weight=\"700\" fill=\"{}\">{}</text>\n",
            rect.right() + TRAILING_LABEL_GAP_PX,
            rect.top + anchor_y + letter_height,
            escape(&series.label_color),
            escape(&series.label)
        );
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
