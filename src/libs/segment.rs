//! Duty-status segments and the per-day log model.
//!
//! A trip's log arrives as a list of days, each carrying the duty segments
//! that fall inside its 24-hour window. Offsets are fractional hours from the
//! start of that window, so a full day tiles `[0, 24]`.
//!
//! ## Status Codes
//!
//! The planning backend encodes duty status as an integer:
//!
//! | Code | Status                  | Chart row |
//! |------|-------------------------|-----------|
//! | 1    | Off Duty                | 1 (top)   |
//! | 2    | Sleeper Berth           | 2         |
//! | 3    | Driving                 | 3         |
//! | 4    | On Duty (Not Driving)   | 4         |
//!
//! A bare [`DutyStatus`] rejects unknown codes. Inside a [`LogDay`] a segment
//! with an unknown code is logged and skipped, so the rest of the day still
//! draws.
//!
//! ## Usage
//!
//! ```rust
//! use hoslog::libs::segment::{DutySegment, DutyStatus, LogDay};
//!
//! let day = LogDay::new(vec![
//!     DutySegment::new(0.0, 0.5, DutyStatus::OnDutyNotDriving),
//!     DutySegment::new(0.5, 8.5, DutyStatus::Driving),
//! ]);
//! assert_eq!(day.driving_hours(), 8.0);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::trip::Coordinate;

/// Raised when an integer status code does not name a duty status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown duty status code {0} (expected 1-4)")]
pub struct StatusError(pub u8);

/// One of the four Hours-of-Service duty statuses.
///
/// The discriminant is the wire code and also the 1-based chart row,
/// counting from the top of the log sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DutyStatus {
    OffDuty = 1,
    SleeperBerth = 2,
    Driving = 3,
    OnDutyNotDriving = 4,
}

impl DutyStatus {
    /// All statuses in chart row order, top to bottom.
    pub const ALL: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::SleeperBerth,
        DutyStatus::Driving,
        DutyStatus::OnDutyNotDriving,
    ];

    /// Wire code of the status.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// 1-based row index on the log sheet.
    pub fn row(self) -> usize {
        self as usize
    }

    /// Row label printed in the chart's left margin.
    pub fn label(self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "Off Duty",
            DutyStatus::SleeperBerth => "Sleeper Berth",
            DutyStatus::Driving => "Driving",
            DutyStatus::OnDutyNotDriving => "On Duty (Not Driving)",
        }
    }
}

impl TryFrom<u8> for DutyStatus {
    type Error = StatusError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(DutyStatus::OffDuty),
            2 => Ok(DutyStatus::SleeperBerth),
            3 => Ok(DutyStatus::Driving),
            4 => Ok(DutyStatus::OnDutyNotDriving),
            other => Err(StatusError(other)),
        }
    }
}

impl From<DutyStatus> for u8 {
    fn from(status: DutyStatus) -> Self {
        status.code()
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single interval spent in one duty status.
///
/// `start` and `end` are hours from the beginning of the day's window.
/// Segments produced by the planner satisfy `end >= start`, but nothing here
/// relies on it: a reversed segment simply contributes a negative duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DutySegment {
    pub start: f64,
    pub end: f64,
    pub status: DutyStatus,
}

impl DutySegment {
    pub fn new(start: f64, end: f64, status: DutyStatus) -> Self {
        Self { start, end, status }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    pub fn is_driving(&self) -> bool {
        self.status == DutyStatus::Driving
    }
}

#[derive(Deserialize)]
struct RawSegment {
    start: f64,
    end: f64,
    status: i64,
}

fn known_segments<'de, D>(deserializer: D) -> Result<Vec<DutySegment>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<RawSegment>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|segment| {
            let status = u8::try_from(segment.status).ok().and_then(|code| DutyStatus::try_from(code).ok());
            if status.is_none() {
                tracing::warn!(
                    code = segment.status,
                    start = segment.start,
                    end = segment.end,
                    "skipping segment with unknown duty status"
                );
            }
            status.map(|status| DutySegment::new(segment.start, segment.end, status))
        })
        .collect())
}

/// One 24-hour page of the driver's log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogDay {
    /// Duty segments for the day, in no guaranteed order.
    #[serde(default, deserialize_with = "known_segments")]
    pub segments: Vec<DutySegment>,

    /// Compliance remark attached by the planner, e.g. a required reset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Explicit calendar date; when absent the date is derived from the trip start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_location: Option<Coordinate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_location: Option<Coordinate>,
}

impl LogDay {
    pub fn new(segments: Vec<DutySegment>) -> Self {
        Self {
            segments,
            ..Self::default()
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Sum of durations over the day's driving segments.
    pub fn driving_hours(&self) -> f64 {
        self.segments.iter().filter(|s| s.is_driving()).map(DutySegment::duration).sum()
    }

    /// Segments ordered by start time. Ties keep their input order.
    pub fn sorted_segments(&self) -> Vec<DutySegment> {
        sort_by_start(&self.segments)
    }
}

/// Returns a copy of `segments` sorted ascending by start, stable on ties.
pub fn sort_by_start(segments: &[DutySegment]) -> Vec<DutySegment> {
    let mut sorted = segments.to_vec();
    sorted.sort_by(|a, b| a.start.total_cmp(&b.start));
    sorted
}

/// Sum of driving hours across a run of days.
pub fn total_driving_hours(days: &[LogDay]) -> f64 {
    days.iter().map(LogDay::driving_hours).sum()
}

/// Log-fetch result: one entry per 24-hour window of the trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogsResponse {
    #[serde(default)]
    pub days: Vec<LogDay>,
}
