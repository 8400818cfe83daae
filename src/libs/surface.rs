//! Drawing destination for log charts.
//!
//! The renderer only needs four primitives (clear, filled rectangle, straight
//! line, text), expressed by the [`Surface`] trait. [`Canvas`] implements it
//! by recording every call as a [`DrawOp`], which is what the SVG writer
//! serialises and what tests inspect.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f64,
    pub cap: LineCap,
}

impl Stroke {
    pub const fn new(color: &'static str, width: f64) -> Self {
        Self {
            color,
            width,
            cap: LineCap::Butt,
        }
    }

    pub const fn round(self) -> Self {
        Self {
            cap: LineCap::Round,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
}

/// Text is always vertically centred on its anchor point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: &'static str,
    pub size: f64,
    pub anchor: TextAnchor,
}

impl TextStyle {
    pub const fn new(color: &'static str, size: f64, anchor: TextAnchor) -> Self {
        Self { color, size, anchor }
    }
}

/// A 2D drawing target with its origin at the top-left corner.
pub trait Surface {
    /// Width and height in pixels.
    fn size(&self) -> (f64, f64);
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &'static str);
    fn line(&mut self, from: Point, to: Point, stroke: Stroke);
    fn text(&mut self, text: &str, at: Point, style: TextStyle);
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: &'static str,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Text {
        text: String,
        at: Point,
        style: TextStyle,
    },
}

/// Recording surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: f64,
    height: f64,
    ops: Vec<DrawOp>,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Lines drawn with exactly `stroke`, in drawing order.
    pub fn lines_with(&self, stroke: Stroke) -> Vec<(Point, Point)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { from, to, stroke: s } if *s == stroke => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Canvas {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.ops.clear();
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &'static str) {
        self.ops.push(DrawOp::FillRect { x, y, width, height, color });
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.ops.push(DrawOp::Line { from, to, stroke });
    }

    fn text(&mut self, text: &str, at: Point, style: TextStyle) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            at,
            style,
        });
    }
}
