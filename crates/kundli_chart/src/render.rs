//! SVG rendering of the diamond chart.

use std::fmt::Write;
use std::path::Path;

use log::debug;

use crate::data::ChartData;
use crate::error::ChartError;
use crate::layout::{DIAMOND_POINTS, DIAMOND_POLYGONS, LABEL_OFFSET, polygon_vertices};

pub const DEFAULT_SIZE_PX: u32 = 800;
pub const DEFAULT_TITLE: &str = "Vedic Kundli Chart with Ascendants";

/// Styling for one rendered chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Width and height of the square canvas in pixels.
    pub size_px: u32,
    pub title: String,
    pub line_color: String,
    pub ascendant_color: String,
    pub line_width: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size_px: DEFAULT_SIZE_PX,
            title: DEFAULT_TITLE.to_string(),
            line_color: "black".to_string(),
            ascendant_color: "blue".to_string(),
            line_width: 2.0,
        }
    }
}

impl RenderOptions {
    fn validate(&self) -> Result<(), ChartError> {
        if self.size_px < 100 {
            return Err(ChartError::InvalidOptions("size_px must be at least 100"));
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(ChartError::InvalidOptions("line_width must be positive"));
        }
        Ok(())
    }
}

/// Maps chart units ([-1, 1], +y up) to pixels (+y down).
struct Canvas {
    size: f64,
}

impl Canvas {
    fn px(&self, x: f64, y: f64) -> (f64, f64) {
        ((x + 1.0) * 0.5 * self.size, (1.0 - y) * 0.5 * self.size)
    }

    /// Font size in pixels for a point size given against an 800 px canvas.
    fn font(&self, pt: f64) -> f64 {
        pt * 1.5 * self.size / DEFAULT_SIZE_PX as f64
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn write_text(
    svg: &mut String,
    (x, y): (f64, f64),
    text: &str,
    font_size: f64,
    extra: &str,
) -> std::fmt::Result {
    if text.is_empty() {
        return Ok(());
    }
    writeln!(
        svg,
        r#"  <text x="{x:.2}" y="{y:.2}" text-anchor="middle" dominant-baseline="middle" font-size="{font_size:.2}"{extra}>{}</text>"#,
        escape(text)
    )
}

/// Render `data` as a standalone SVG document.
pub fn render_svg(data: &ChartData, opts: &RenderOptions) -> Result<String, ChartError> {
    opts.validate()?;
    let canvas = Canvas {
        size: opts.size_px as f64,
    };
    let size = opts.size_px;
    let mut svg = String::with_capacity(4096);

    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}" font-family="sans-serif">"#
    )?;
    writeln!(svg, r#"  <rect width="100%" height="100%" fill="white"/>"#)?;

    let title_y = canvas.size * 0.06;
    write_text(
        &mut svg,
        (canvas.size * 0.5, title_y),
        &opts.title,
        canvas.font(16.0),
        r#" font-weight="bold""#,
    )?;

    for vertices in (0..DIAMOND_POLYGONS.len()).filter_map(polygon_vertices) {
        let mut points = String::new();
        for (vx, vy) in vertices {
            let (x, y) = canvas.px(vx, vy);
            if !points.is_empty() {
                points.push(' ');
            }
            write!(points, "{x:.2},{y:.2}")?;
        }
        writeln!(
            svg,
            r#"  <polygon points="{points}" fill="none" stroke="{}" stroke-width="{:.2}"/>"#,
            escape(&opts.line_color),
            opts.line_width
        )?;
    }

    let sign_style = format!(r#" fill="{}""#, escape(&opts.ascendant_color));
    for p in DIAMOND_POINTS {
        write_text(
            &mut svg,
            canvas.px(p.x, p.y + LABEL_OFFSET),
            data.house_label(p.house),
            canvas.font(12.0),
            r#" font-weight="bold""#,
        )?;
        write_text(
            &mut svg,
            canvas.px(p.x, p.y),
            &data.occupant_line(p.house),
            canvas.font(9.0),
            "",
        )?;
        write_text(
            &mut svg,
            canvas.px(p.x, p.y - LABEL_OFFSET),
            data.ascendant(p.house),
            canvas.font(10.0),
            &sign_style,
        )?;
    }

    writeln!(svg, "</svg>")?;
    debug!("rendered chart svg: {} bytes", svg.len());
    Ok(svg)
}

/// Render and write the SVG to `path`.
pub fn write_svg(path: &Path, data: &ChartData, opts: &RenderOptions) -> Result<(), ChartError> {
    let svg = render_svg(data, opts)?;
    std::fs::write(path, svg)?;
    Ok(())
}
