//! Route geometry decoding and position-along-route interpolation.
//!
//! The planner returns its route as GeoJSON-like JSON. Only line shapes are
//! meaningful here, optionally wrapped in a `Feature` or in a
//! `FeatureCollection` (of which only the first feature is used).
//!
//! Interpolation works in vertex-index space, not arc length: a ratio `r`
//! selects fractional vertex `r * (n - 1)` and blends the two bracketing
//! vertices linearly. A `MultiLineString` is flattened by concatenating its
//! lines in order, so the blend can jump across the gap between two lines.

use super::trip::Coordinate;
use serde::Deserialize;

/// A raw GeoJSON position, `[lon, lat, ...]`.
pub type Position = Vec<f64>;

/// Why a geometry could not produce a point list.
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("malformed geometry: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unsupported geometry type")]
    Unsupported,
    #[error("feature collection has no features")]
    EmptyCollection,
    #[error("feature does not wrap a line geometry")]
    NotALine,
    #[error("position {index} has {len} values, expected at least 2")]
    ShortPosition { index: usize, len: usize },
}

/// Closed set of route shapes understood by the interpolator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    LineString {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    Feature {
        #[serde(default)]
        geometry: Option<Box<Geometry>>,
    },
    FeatureCollection {
        #[serde(default)]
        features: Vec<Geometry>,
    },
    /// Any other GeoJSON type (Point, Polygon, ...).
    #[serde(other)]
    Unsupported,
}

impl Geometry {
    pub fn from_value(value: &serde_json::Value) -> Result<Self, GeometryError> {
        Ok(Geometry::deserialize(value)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, GeometryError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn line_string(points: &[Coordinate]) -> Self {
        Geometry::LineString {
            coordinates: points.iter().map(|p| vec![p.lon, p.lat]).collect(),
        }
    }

    /// Flattens the geometry into an ordered vertex list.
    pub fn points(&self) -> Result<Vec<Coordinate>, GeometryError> {
        match self {
            Geometry::LineString { .. } | Geometry::MultiLineString { .. } => self.line_points(),
            Geometry::Feature { geometry } => match geometry {
                Some(inner) => inner.line_points(),
                None => Err(GeometryError::NotALine),
            },
            Geometry::FeatureCollection { features } => match features.first() {
                Some(Geometry::Feature { geometry: Some(inner) }) => inner.line_points(),
                Some(_) => Err(GeometryError::NotALine),
                None => Err(GeometryError::EmptyCollection),
            },
            Geometry::Unsupported => Err(GeometryError::Unsupported),
        }
    }

    // Wrappers do not nest: a Feature must hold a line directly.
    fn line_points(&self) -> Result<Vec<Coordinate>, GeometryError> {
        let positions: Vec<&Position> = match self {
            Geometry::LineString { coordinates } => coordinates.iter().collect(),
            Geometry::MultiLineString { coordinates } => coordinates.iter().flatten().collect(),
            _ => return Err(GeometryError::NotALine),
        };

        positions
            .into_iter()
            .enumerate()
            .map(|(index, position)| match position.as_slice() {
                [lon, lat, ..] => Ok(Coordinate::new(*lat, *lon)),
                short => Err(GeometryError::ShortPosition { index, len: short.len() }),
            })
            .collect()
    }
}

/// Returns the position at `ratio` along the route, or `None` when there is
/// no usable geometry.
///
/// The ratio is clamped to `[0, 1]` (NaN counts as 0), so 0 and 1 yield the
/// first and last vertex exactly.
pub fn coordinates_at_ratio(geometry: Option<&Geometry>, ratio: f64) -> Option<Coordinate> {
    let points = match geometry?.points() {
        Ok(points) => points,
        Err(e) => {
            tracing::debug!(error = %e, "route geometry has no usable points");
            return None;
        }
    };
    interpolate(&points, ratio)
}

/// Index-fraction interpolation over an already flattened vertex list.
pub fn interpolate(points: &[Coordinate], ratio: f64) -> Option<Coordinate> {
    let last = points.len().checked_sub(1)?;
    let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };

    let index = ratio * last as f64;
    let lower = (index.floor() as usize).min(last);
    let upper = (lower + 1).min(last);
    let fraction = index - lower as f64;

    let (a, b) = (points[lower], points[upper]);
    Some(Coordinate {
        lat: a.lat + (b.lat - a.lat) * fraction,
        lon: a.lon + (b.lon - a.lon) * fraction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_feature_is_not_a_line() {
        let nested = Geometry::Feature {
            geometry: Some(Box::new(Geometry::Feature { geometry: None })),
        };
        assert!(matches!(nested.points(), Err(GeometryError::NotALine)));
    }

    #[test]
    fn test_interpolate_empty() {
        assert_eq!(interpolate(&[], 0.5), None);
    }
}
