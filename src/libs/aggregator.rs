//! Per-day summary derivation for a multi-day trip log.
//!
//! Each log day is summarised from three inputs: its own segments, the full
//! ordered day list, and the trip context. Nothing is memoised; every figure
//! is recomputed from the inputs on each call.
//!
//! ## Mileage
//!
//! The planner reports only a trip-wide distance, so miles are apportioned
//! by driving time:
//!
//! ```text
//! driving_miles  = round(total_miles * driving_hours_today / total_driving_hours)
//! total_mileage  = round(total_miles * (hours_before + driving_hours_today) / total_driving_hours)
//! ```
//!
//! Without a known distance (or without any driving in the trip) both fall
//! back to `round(hours * average_speed_mph)`.
//!
//! ## Endpoints
//!
//! | Day           | From                                          | To                                                       |
//! |---------------|-----------------------------------------------|----------------------------------------------------------|
//! | First         | day.from → trip.current → trip.pickup         | day.to → trip.dropoff (if last) → route(end) → pickup    |
//! | Middle        | route(start) when start ratio > 0             | route(end) when end ratio > 0 → trip.pickup              |
//! | Last          | as middle                                     | day.to → trip.dropoff                                    |
//!
//! `route(r)` samples the route geometry at ratio `r` of cumulative driving
//! hours, see [`super::geometry::coordinates_at_ratio`].

use super::geometry::coordinates_at_ratio;
use super::segment::{total_driving_hours, LogDay};
use super::trip::{Coordinate, TripContext};
use chrono::{Days, Local, NaiveDate};
use serde::Serialize;

/// Assumed average speed used when the trip distance is unknown.
pub const AVERAGE_SPEED_MPH: f64 = 55.0;

/// Resolved start and end coordinates of one day's driving.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Endpoints {
    pub from: Option<Coordinate>,
    pub to: Option<Coordinate>,
}

/// Display-ready figures for one log day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    /// Zero-based position in the trip.
    pub index: usize,
    pub date: NaiveDate,
    pub driving_hours: f64,
    pub driving_miles: i64,
    /// Cumulative trip mileage through the end of this day.
    pub total_mileage: i64,
    #[serde(skip)]
    pub from: Option<Coordinate>,
    #[serde(skip)]
    pub to: Option<Coordinate>,
    pub note: Option<String>,
    pub segment_count: usize,
}

impl DaySummary {
    pub fn day_number(&self) -> usize {
        self.index + 1
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            from: self.from,
            to: self.to,
        }
    }
}

/// Derives [`DaySummary`] values for the days of one trip.
#[derive(Debug, Clone)]
pub struct DayAggregator<'a> {
    trip: &'a TripContext,
    days: &'a [LogDay],
    initial_date: Option<NaiveDate>,
    average_speed_mph: f64,
}

impl<'a> DayAggregator<'a> {
    pub fn new(trip: &'a TripContext, days: &'a [LogDay]) -> Self {
        Self {
            trip,
            days,
            initial_date: None,
            average_speed_mph: AVERAGE_SPEED_MPH,
        }
    }

    /// Date of the first log day, used for days without an explicit date.
    pub fn with_initial_date(mut self, initial_date: Option<NaiveDate>) -> Self {
        self.initial_date = initial_date;
        self
    }

    pub fn with_average_speed(mut self, average_speed_mph: f64) -> Self {
        self.average_speed_mph = average_speed_mph;
        self
    }

    /// Explicit date, else the initial date advanced by `index` days, else today.
    pub fn log_date(&self, day: &LogDay, index: usize) -> NaiveDate {
        if let Some(date) = day.date {
            return date;
        }
        match self.initial_date {
            Some(initial) => initial.checked_add_days(Days::new(index as u64)).unwrap_or(initial),
            None => Local::now().date_naive(),
        }
    }

    /// Driving hours summed over every day of the trip.
    pub fn total_driving_hours(&self) -> f64 {
        total_driving_hours(self.days)
    }

    /// Driving hours over the days strictly before `index`.
    pub fn cumulative_hours_before(&self, index: usize) -> f64 {
        total_driving_hours(&self.days[..index.min(self.days.len())])
    }

    /// Fractions of total driving completed at the start and end of the day.
    /// Both are zero when the trip has no driving.
    pub fn route_ratios(&self, day: &LogDay, index: usize) -> (f64, f64) {
        let total = self.total_driving_hours();
        if total <= 0.0 {
            return (0.0, 0.0);
        }
        let before = self.cumulative_hours_before(index);
        (before / total, (before + day.driving_hours()) / total)
    }

    fn apportion_miles(&self, hours: f64) -> i64 {
        let total_miles = self.trip.total_distance_miles();
        let total_hours = self.total_driving_hours();
        if total_miles > 0.0 && total_hours > 0.0 {
            (total_miles * (hours / total_hours)).round() as i64
        } else {
            (hours * self.average_speed_mph).round() as i64
        }
    }

    pub fn driving_miles_today(&self, day: &LogDay) -> i64 {
        self.apportion_miles(day.driving_hours())
    }

    /// Trip mileage through the end of the day at `index`.
    pub fn cumulative_miles(&self, day: &LogDay, index: usize) -> i64 {
        self.apportion_miles(self.cumulative_hours_before(index) + day.driving_hours())
    }

    /// Where the day's driving starts and stops.
    pub fn endpoints(&self, day: &LogDay, index: usize) -> Endpoints {
        let is_first = index == 0;
        let is_last = index + 1 == self.days.len();
        let (start_ratio, end_ratio) = self.route_ratios(day, index);
        let route = self.trip.route_geometry.as_ref();
        let along_route = |ratio: f64| if ratio > 0.0 { coordinates_at_ratio(route, ratio) } else { None };

        let from = if is_first {
            day.from_location.or(self.trip.current_location).or(self.trip.pickup_location)
        } else {
            along_route(start_ratio)
        };

        let to = if is_first {
            day.to_location
                .or(if is_last { self.trip.dropoff_location } else { None })
                .or_else(|| along_route(end_ratio))
                .or(self.trip.pickup_location)
        } else if is_last {
            day.to_location.or(self.trip.dropoff_location)
        } else {
            along_route(end_ratio).or(self.trip.pickup_location)
        };

        Endpoints { from, to }
    }

    /// Everything a day card shows except resolved place names.
    pub fn summarize(&self, day: &LogDay, index: usize) -> DaySummary {
        let endpoints = self.endpoints(day, index);
        DaySummary {
            index,
            date: self.log_date(day, index),
            driving_hours: day.driving_hours(),
            driving_miles: self.driving_miles_today(day),
            total_mileage: self.cumulative_miles(day, index),
            from: endpoints.from,
            to: endpoints.to,
            note: day.note.clone(),
            segment_count: day.segments.len(),
        }
    }

    /// Summaries for every day of the trip, in order.
    pub fn summarize_all(&self) -> Vec<DaySummary> {
        self.days.iter().enumerate().map(|(index, day)| self.summarize(day, index)).collect()
    }
}
