//! API client modules for external service integrations.
//!
//! The log sheet depends on two outside services, both treated as black boxes:
//!
//! - **Nominatim**: reverse geocoding of coordinates to place names
//! - **Planning server**: the backend that plans trips and generates ELD logs
//!
//! Reverse geocoding sits behind the [`ReverseGeocode`] trait so that the
//! network client, the caching [`crate::libs::geocoding::Geocoder`] and test
//! doubles are interchangeable.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hoslog::api::{nominatim::{Nominatim, NominatimConfig}, ReverseGeocode};
//! use hoslog::libs::trip::Coordinate;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let client = Nominatim::new(&NominatimConfig::default());
//! let info = client.reverse_geocode(Coordinate::new(41.8781, -87.6298)).await?;
//! println!("{}", info.name);
//! # Ok(())
//! # }
//! ```

use crate::libs::geocoding::LocationInfo;
use crate::libs::trip::Coordinate;
use std::future::Future;

pub mod eld;
pub mod nominatim;

// Re-export configuration structs for easier access from other modules
pub use eld::ServerConfig;
pub use nominatim::NominatimConfig;

/// Why a reverse geocoding lookup produced no name.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("geocoding request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("geocoding failed: {0}")]
    Status(reqwest::StatusCode),
    #[error("geocoding unavailable: {0}")]
    Unavailable(String),
}

/// Resolves a coordinate to a human-readable place.
pub trait ReverseGeocode: Send + Sync {
    fn reverse_geocode(&self, coordinate: Coordinate) -> impl Future<Output = Result<LocationInfo, GeocodeError>> + Send;
}

/// Lookup used when network geocoding is disabled. Every call fails, so
/// callers fall back to coordinate text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Offline;

impl ReverseGeocode for Offline {
    async fn reverse_geocode(&self, _coordinate: Coordinate) -> Result<LocationInfo, GeocodeError> {
        Err(GeocodeError::Unavailable("offline mode".to_string()))
    }
}
