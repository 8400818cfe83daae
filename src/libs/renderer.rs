//! Hours-of-Service log chart rendering.
//!
//! Draws one day's duty segments as the familiar four-row log grid:
//!
//! ```text
//!                 0       4       8       12      16      20      24
//! Off Duty        |━━━━━━━|       |       |   ┃━━━━━━━━━━━━━━━━━━━━|
//! Sleeper Berth   |       |       |       |   ┃   |       |       |
//! Driving         |       |  ┃━━━━━━━━━━━━━━━━┛   |       |       |
//! On Duty (ND)    |       |  ┃   |       |       |       |       |
//! ```
//!
//! The left `label_width` pixels hold the row labels; hours `0..24` map
//! linearly onto the remaining width. Segments are sorted by start before
//! drawing, and every pair of consecutive segments whose boundary matches
//! within [`ADJACENCY_EPSILON_HOURS`] is joined by a vertical connector, so
//! a correctly tiled day reads as one continuous trace.
//!
//! Bars are clamped to the visible hour range; start/end tick marks use the
//! unclamped position.

use super::segment::{sort_by_start, DutySegment, DutyStatus};
use super::surface::{Point, Stroke, Surface, TextAnchor, TextStyle};

/// Two segments closer than this (0.01 h, about 36 s) count as adjacent.
pub const ADJACENCY_EPSILON_HOURS: f64 = 0.01;

pub const HOURS_PER_DAY: f64 = 24.0;

pub const DEFAULT_WIDTH: f64 = 1000.0;
pub const DEFAULT_HEIGHT: f64 = 220.0;
pub const DEFAULT_LABEL_WIDTH: f64 = 120.0;

pub const BACKGROUND: &str = "#ece9f0";
pub const DIVIDER_STROKE: Stroke = Stroke::new("#d9d3e0", 1.0);
pub const GRID_STROKE: Stroke = Stroke::new("#e0dde5", 0.5);
pub const CONNECTOR_STROKE: Stroke = Stroke::new("#333333", 2.0);
pub const BAR_STROKE: Stroke = Stroke::new("#6d5efc", 6.0).round();
pub const TICK_STROKE: Stroke = Stroke::new("#333333", 1.5);
pub const LABEL_TEXT: TextStyle = TextStyle::new("#333333", 12.0, TextAnchor::Start);
pub const HOUR_TEXT: TextStyle = TextStyle::new("#666666", 10.0, TextAnchor::Middle);

const LABEL_X: f64 = 10.0;
const HOUR_LABEL_Y: f64 = 10.0;
const TICK_MARGIN: f64 = 2.0;

/// Pixel mapping for a chart of a given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub label_width: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            label_width: DEFAULT_LABEL_WIDTH,
        }
    }
}

impl ChartLayout {
    pub fn new(width: f64, height: f64, label_width: f64) -> Self {
        Self {
            width,
            height,
            label_width,
        }
    }

    pub fn chart_width(&self) -> f64 {
        self.width - self.label_width
    }

    pub fn row_height(&self) -> f64 {
        self.height / DutyStatus::ALL.len() as f64
    }

    /// x for an hour offset, without clamping.
    pub fn x_at(&self, hour: f64) -> f64 {
        self.label_width + (hour / HOURS_PER_DAY) * self.chart_width()
    }

    /// x for an hour offset, clamped to the visible `[0, 24]` range.
    pub fn clamped_x_at(&self, hour: f64) -> f64 {
        self.label_width + (hour / HOURS_PER_DAY).clamp(0.0, 1.0) * self.chart_width()
    }

    /// Vertical centre of a status row.
    pub fn row_mid(&self, status: DutyStatus) -> f64 {
        (status.row() - 1) as f64 * self.row_height() + self.row_height() / 2.0
    }
}

/// Renders `segments` as a log chart.
///
/// A missing surface means there is nowhere to draw, which is not an error.
/// An empty segment list still produces the background and grid.
pub fn render_segments(surface: Option<&mut dyn Surface>, segments: &[DutySegment], label_width: f64) {
    let Some(surface) = surface else {
        return;
    };
    let (width, height) = surface.size();
    let layout = ChartLayout::new(width, height, label_width);

    surface.clear();
    surface.fill_rect(0.0, 0.0, width, height, BACKGROUND);
    draw_rows(surface, &layout);
    draw_hour_grid(surface, &layout);

    let sorted = sort_by_start(segments);
    draw_connectors(surface, &layout, &sorted);
    draw_bars(surface, &layout, &sorted);
    draw_ticks(surface, &layout, &sorted);
}

fn draw_rows(surface: &mut dyn Surface, layout: &ChartLayout) {
    for (idx, status) in DutyStatus::ALL.iter().enumerate() {
        let y = idx as f64 * layout.row_height();
        surface.line(Point::new(0.0, y), Point::new(layout.width, y), DIVIDER_STROKE);
        surface.text(status.label(), Point::new(LABEL_X, layout.row_mid(*status)), LABEL_TEXT);
    }
}

fn draw_hour_grid(surface: &mut dyn Surface, layout: &ChartLayout) {
    for hour in 0..=24u32 {
        let x = layout.x_at(hour as f64);
        surface.line(Point::new(x, 0.0), Point::new(x, layout.height), GRID_STROKE);
        if hour % 4 == 0 || hour == 24 {
            surface.text(&hour.to_string(), Point::new(x, HOUR_LABEL_Y), HOUR_TEXT);
        }
    }
}

fn draw_connectors(surface: &mut dyn Surface, layout: &ChartLayout, sorted: &[DutySegment]) {
    for pair in sorted.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        if (current.end - next.start).abs() < ADJACENCY_EPSILON_HOURS {
            let x = layout.x_at(current.end);
            surface.line(
                Point::new(x, layout.row_mid(current.status)),
                Point::new(x, layout.row_mid(next.status)),
                CONNECTOR_STROKE,
            );
        }
    }
}

fn draw_bars(surface: &mut dyn Surface, layout: &ChartLayout, sorted: &[DutySegment]) {
    for segment in sorted {
        let x1 = layout.clamped_x_at(segment.start);
        let x2 = layout.clamped_x_at(segment.end);
        let y = layout.row_mid(segment.status);
        if x2 > x1 {
            surface.line(Point::new(x1, y), Point::new(x2, y), BAR_STROKE);
        }
    }
}

fn draw_ticks(surface: &mut dyn Surface, layout: &ChartLayout, sorted: &[DutySegment]) {
    let half_row = layout.row_height() / 2.0;
    for segment in sorted {
        let y = layout.row_mid(segment.status);
        for x in [layout.x_at(segment.start), layout.x_at(segment.end)] {
            surface.line(
                Point::new(x, y - half_row + TICK_MARGIN),
                Point::new(x, y + half_row - TICK_MARGIN),
                TICK_STROKE,
            );
        }
    }
}
