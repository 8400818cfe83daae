//! Display formatting for log sheet values.
//!
//! ## Format Specifications
//!
//! - Coordinates: `"{lat:.4}, {lon:.4}"`, about 11 m of precision
//! - Dates: `MM/DD/YYYY`, as printed on a paper log
//! - Miles: `"{n} mi"`
//! - Hours: `HH:MM`, rounded to the nearest minute
//!
//! ## Examples
//!
//! ```rust
//! use hoslog::libs::formatter::{format_coordinate, format_miles};
//! use hoslog::libs::trip::Coordinate;
//!
//! assert_eq!(format_coordinate(&Coordinate::new(40.7128, -74.006)), "40.7128, -74.0060");
//! assert_eq!(format_miles(67), "67 mi");
//! ```

use super::trip::Coordinate;
use chrono::NaiveDate;

/// Placeholder shown while a location name is being resolved.
pub const LOADING: &str = "Loading...";

/// Shown when no coordinate could be determined for a location.
pub const NOT_AVAILABLE: &str = "N/A";

/// Raw coordinate text used whenever a place name is unavailable.
pub fn format_coordinate(coordinate: &Coordinate) -> String {
    format!("{:.4}, {:.4}", coordinate.lat, coordinate.lon)
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

pub fn format_miles(miles: i64) -> String {
    format!("{} mi", miles)
}

/// Formats fractional hours as `HH:MM`. Negative input is shown as zero.
pub fn format_hours(hours: f64) -> String {
    let minutes = (hours.max(0.0) * 60.0).round() as i64;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
