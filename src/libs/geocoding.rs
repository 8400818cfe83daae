//! Reverse geocoding with a shared, process-lifetime cache.
//!
//! Day cards ask for a display name per resolved coordinate. Lookups go
//! through a [`Geocoder`], which owns three concerns:
//!
//! - **Caching**: results are keyed by the coordinate rounded to 4 decimal
//!   places and kept for the life of the process. The cache is unbounded;
//!   a trip itinerary only ever produces a handful of keys.
//! - **Delegation**: misses go to the wrapped lookup (normally Nominatim).
//! - **Degradation**: a failed lookup yields the raw coordinate text instead
//!   of an error. Fallbacks are not cached, so a later call may still succeed.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hoslog::api::nominatim::{Nominatim, NominatimConfig};
//! use hoslog::libs::geocoding::{Geocoder, MemoryCache};
//! use hoslog::libs::trip::Coordinate;
//! use std::sync::Arc;
//!
//! # async fn demo() {
//! let cache = Arc::new(MemoryCache::new());
//! let geocoder = Geocoder::new(Nominatim::new(&NominatimConfig::default()), cache);
//! let info = geocoder.resolve(Coordinate::new(39.7817, -89.6501)).await;
//! println!("{}", info.name);
//! # }
//! ```

use super::formatter::format_coordinate;
use super::trip::Coordinate;
use crate::api::{GeocodeError, ReverseGeocode};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Display name for a coordinate, with the full address when known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl LocationInfo {
    pub fn new(name: impl Into<String>, address: Option<String>) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }

    /// The coordinate itself, used when no name can be obtained.
    pub fn fallback(coordinate: Coordinate) -> Self {
        Self {
            name: format_coordinate(&coordinate),
            address: None,
        }
    }
}

/// Cache key: the coordinate rounded to 4 decimal places.
pub fn cache_key(coordinate: Coordinate) -> String {
    format!("{:.4},{:.4}", coordinate.lat, coordinate.lon)
}

/// Storage for resolved names, shared by every geocoder user.
pub trait GeocodeCache: Send + Sync {
    fn get(&self, key: &str) -> Option<LocationInfo>;
    fn put(&self, key: String, value: LocationInfo);
}

/// Unbounded in-memory cache. Entries are never evicted.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, LocationInfo>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl GeocodeCache for MemoryCache {
    fn get(&self, key: &str) -> Option<LocationInfo> {
        self.entries.read().get(key).cloned()
    }

    // Two racing lookups for the same key store equal values; last write wins.
    fn put(&self, key: String, value: LocationInfo) {
        self.entries.write().insert(key, value);
    }
}

/// Caching, never-failing front for a reverse geocoding lookup.
#[derive(Debug)]
pub struct Geocoder<L, C> {
    lookup: L,
    cache: Arc<C>,
}

impl<L: ReverseGeocode, C: GeocodeCache> Geocoder<L, C> {
    pub fn new(lookup: L, cache: Arc<C>) -> Self {
        Self { lookup, cache }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    pub fn cache(&self) -> &Arc<C> {
        &self.cache
    }

    /// Resolves a coordinate to a display name.
    ///
    /// Always returns a value: the cached name, a fresh lookup, or the
    /// coordinate text when the lookup fails.
    pub async fn resolve(&self, coordinate: Coordinate) -> LocationInfo {
        let key = cache_key(coordinate);
        if let Some(hit) = self.cache.get(&key) {
            tracing::debug!(%key, "geocode cache hit");
            return hit;
        }

        match self.lookup.reverse_geocode(coordinate).await {
            Ok(info) => {
                self.cache.put(key, info.clone());
                info
            }
            Err(e) => {
                tracing::warn!(%key, error = %e, "reverse geocoding failed, using coordinates");
                LocationInfo::fallback(coordinate)
            }
        }
    }
}

impl<L: ReverseGeocode, C: GeocodeCache> ReverseGeocode for Geocoder<L, C> {
    async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<LocationInfo, GeocodeError> {
        Ok(self.resolve(coordinate).await)
    }
}

/// Resolves several coordinates concurrently, preserving input order.
///
/// A lookup whose task fails outright is reported as its coordinate text.
pub async fn reverse_geocode_multiple<G>(geocoder: Arc<G>, coordinates: &[Coordinate]) -> Vec<LocationInfo>
where
    G: ReverseGeocode + 'static,
{
    let mut tasks = JoinSet::new();
    for (index, coordinate) in coordinates.iter().copied().enumerate() {
        let geocoder = Arc::clone(&geocoder);
        tasks.spawn(async move {
            let info = geocoder
                .reverse_geocode(coordinate)
                .await
                .unwrap_or_else(|_| LocationInfo::fallback(coordinate));
            (index, info)
        });
    }

    let mut resolved: Vec<Option<LocationInfo>> = vec![None; coordinates.len()];
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, info)) => resolved[index] = Some(info),
            Err(e) => tracing::warn!(error = %e, "geocoding task did not complete"),
        }
    }

    resolved
        .into_iter()
        .zip(coordinates)
        .map(|(info, coordinate)| info.unwrap_or_else(|| LocationInfo::fallback(*coordinate)))
        .collect()
}
