//! OpenStreetMap Nominatim reverse geocoding client.
//!
//! Nominatim is free and needs no API key, but its usage policy requires an
//! identifying `User-Agent`, which is taken from configuration.
//!
//! ## Naming Rule
//!
//! The display name is built from the returned address components:
//!
//! 1. `city`, `town` or `village`, followed by `", <state>"` when a state is known
//! 2. otherwise `"<road> <house_number>"`
//! 3. otherwise `road`
//! 4. otherwise the coordinate itself (`"40.7128, -74.0060"`)
//!
//! The full `display_name` is kept as the address.

use super::{GeocodeError, ReverseGeocode};
use crate::libs::config::ConfigModule;
use crate::libs::formatter::format_coordinate;
use crate::libs::geocoding::LocationInfo;
use crate::libs::messages::Message;
use crate::libs::trip::Coordinate;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_USER_AGENT: &str = "SpotterAI/1.0";
/// City-level detail.
pub const DEFAULT_ZOOM: u8 = 10;

/// Nominatim connection settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NominatimConfig {
    pub base_url: String,
    pub user_agent: String,
    pub zoom: u8,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl NominatimConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "geocoder".to_string(),
            name: "Reverse geocoding".to_string(),
        }
    }

    /// Prompts for the geocoder settings, pre-filled with the current ones.
    pub fn init(config: &Option<NominatimConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleGeocoder);

        Ok(Self {
            base_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptGeocoderUrl.to_string())
                .default(config.base_url)
                .interact_text()?,
            user_agent: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptGeocoderUserAgent.to_string())
                .default(config.user_agent)
                .interact_text()?,
            zoom: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptGeocoderZoom.to_string())
                .default(config.zoom)
                .interact_text()?,
        })
    }
}

/// Address components of a reverse geocoding response.
#[derive(Debug, Default, Deserialize)]
pub struct Address {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub state: Option<String>,
    pub road: Option<String>,
    pub house_number: Option<String>,
}

/// Body of `GET /reverse?format=json`.
#[derive(Debug, Default, Deserialize)]
pub struct ReverseResponse {
    #[serde(default)]
    pub address: Address,
    pub display_name: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl ReverseResponse {
    /// Applies the naming rule to this response.
    pub fn into_location(self, coordinate: Coordinate) -> LocationInfo {
        let address = &self.address;
        let settlement = present(&address.city).or(present(&address.town)).or(present(&address.village));

        let name = match (settlement, present(&address.road), present(&address.house_number)) {
            (Some(place), _, _) => match present(&address.state) {
                Some(state) => format!("{}, {}", place, state),
                None => place.to_string(),
            },
            (None, Some(road), Some(number)) => format!("{} {}", road, number),
            (None, Some(road), None) => road.to_string(),
            (None, None, _) => format_coordinate(&coordinate),
        };

        LocationInfo {
            name,
            address: self.display_name,
        }
    }
}

/// Nominatim HTTP client.
#[derive(Debug, Clone)]
pub struct Nominatim {
    client: Client,
    config: NominatimConfig,
}

impl Nominatim {
    pub fn new(config: &NominatimConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    pub fn reverse_url(&self) -> String {
        format!("{}/reverse", self.config.base_url.trim_end_matches('/'))
    }
}

impl ReverseGeocode for Nominatim {
    async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<LocationInfo, GeocodeError> {
        let response = self
            .client
            .get(self.reverse_url())
            .query(&[
                ("format", "json".to_string()),
                ("lat", coordinate.lat.to_string()),
                ("lon", coordinate.lon.to_string()),
                ("zoom", self.config.zoom.to_string()),
                ("addressdetails", "1".to_string()),
            ])
            .header(reqwest::header::USER_AGENT, &self.config.user_agent)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeocodeError::Status(response.status()));
        }

        let body = response.json::<ReverseResponse>().await?;
        Ok(body.into_location(coordinate))
    }
}
