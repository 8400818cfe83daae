//! Trip-level context consumed by the day aggregator.
//!
//! The planner hands back a route (distance, duration, geometry) for a trip
//! described by three coordinates: where the driver is now, the pickup and
//! the dropoff. `TripFile` is the on-disk form of that pair; `TripContext`
//! is the read-only view the aggregator works from.

use super::geometry::Geometry;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Meters in a statute mile.
pub const METERS_PER_MILE: f64 = 1609.34;

/// A WGS84 position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Reference to a persisted trip on the planning backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRef {
    pub id: i64,
}

/// Trip-planning result as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    #[serde(default)]
    pub distance_m: Option<f64>,
    #[serde(default)]
    pub duration_s: Option<f64>,
    /// GeoJSON-like route geometry, decoded lazily into [`Geometry`].
    #[serde(default)]
    pub geometry: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip: Option<TripRef>,
}

/// Trip description as stored on disk: the form inputs plus the plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripFile {
    #[serde(default)]
    pub current_location: Option<Coordinate>,
    #[serde(default)]
    pub pickup_location: Option<Coordinate>,
    #[serde(default)]
    pub dropoff_location: Option<Coordinate>,
    #[serde(default)]
    pub current_cycle_hours_used: Option<f64>,
    #[serde(default)]
    pub plan: Option<TripPlan>,
}

impl TripFile {
    pub fn read(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| format!("reading trip file {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing trip file {}", path.display()))
    }
}

/// Read-only trip context shared by every day of the log.
///
/// Total driving hours are intentionally absent: they are always recomputed
/// from the day list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripContext {
    pub distance_m: Option<f64>,
    pub current_location: Option<Coordinate>,
    pub pickup_location: Option<Coordinate>,
    pub dropoff_location: Option<Coordinate>,
    pub route_geometry: Option<Geometry>,
}

impl TripContext {
    /// Builds the context from a trip file, decoding the route geometry.
    ///
    /// A geometry that cannot be decoded is dropped with a warning; the
    /// aggregator then skips route interpolation.
    pub fn from_file(file: &TripFile) -> Self {
        let plan = file.plan.as_ref();
        let route_geometry = plan.and_then(|p| p.geometry.as_ref()).and_then(|value| match Geometry::from_value(value) {
            Ok(geometry) => Some(geometry),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unusable route geometry");
                None
            }
        });

        Self {
            distance_m: plan.and_then(|p| p.distance_m),
            current_location: file.current_location,
            pickup_location: file.pickup_location,
            dropoff_location: file.dropoff_location,
            route_geometry,
        }
    }

    /// Total trip distance in miles, or zero when unknown.
    pub fn total_distance_miles(&self) -> f64 {
        match self.distance_m {
            Some(meters) if meters > 0.0 => meters / METERS_PER_MILE,
            _ => 0.0,
        }
    }
}
