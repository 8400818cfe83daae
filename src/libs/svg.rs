//! SVG serialisation of recorded charts.
//!
//! Produces a standalone document sized like the canvas, one element per
//! recorded operation, in drawing order.

use super::renderer::{render_segments, ChartLayout};
use super::segment::DutySegment;
use super::surface::{Canvas, DrawOp, LineCap, Surface, TextAnchor};

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

pub fn to_svg(canvas: &Canvas) -> String {
    let (width, height) = canvas.size();
    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
        w = width,
        h = height
    ));
    svg.push('\n');

    for op in canvas.ops() {
        let element = match op {
            DrawOp::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => {
                format!(
                    r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
                    x, y, width, height, color
                )
            }
            DrawOp::Line { from, to, stroke } => {
                let cap = match stroke.cap {
                    LineCap::Butt => "butt",
                    LineCap::Round => "round",
                };
                format!(
                    r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}" stroke-linecap="{}"/>"#,
                    from.x, from.y, to.x, to.y, stroke.color, stroke.width, cap
                )
            }
            DrawOp::Text { text, at, style } => {
                let anchor = match style.anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::Middle => "middle",
                };
                format!(
                    r#"  <text x="{:.2}" y="{:.2}" fill="{}" font-size="{}" text-anchor="{}" dominant-baseline="middle">{}</text>"#,
                    at.x,
                    at.y,
                    style.color,
                    style.size,
                    anchor,
                    escape(text)
                )
            }
        };
        svg.push_str(&element);
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

/// Renders one day's segments straight to an SVG document.
pub fn render_svg(segments: &[DutySegment], layout: &ChartLayout) -> String {
    let mut canvas = Canvas::new(layout.width, layout.height);
    render_segments(Some(&mut canvas), segments, layout.label_width);
    to_svg(&canvas)
}
