//! Application configuration.
//!
//! Stored as pretty-printed JSON in `config.json` inside the platform data
//! directory (see [`DataStorage`]). A missing file is not an error: every
//! section has defaults, and optional sections are simply absent.
//!
//! ```json
//! {
//!   "chart": { "width": 1000.0, "height": 220.0, "label_width": 120.0 },
//!   "estimate": { "average_speed_mph": 55.0 },
//!   "geocoder": { "base_url": "https://nominatim.openstreetmap.org", "user_agent": "SpotterAI/1.0", "zoom": 10 },
//!   "server": { "api_url": "https://planner.example.com" }
//! }
//! ```
//!
//! `hoslog init` walks through the sections with an interactive wizard.

use super::aggregator::AVERAGE_SPEED_MPH;
use super::data_storage::DataStorage;
use super::renderer::{ChartLayout, DEFAULT_HEIGHT, DEFAULT_LABEL_WIDTH, DEFAULT_WIDTH};
use crate::api::{NominatimConfig, ServerConfig};
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Separator used to edit multi-line addresses in a single-line prompt.
const ADDRESS_LINE_SEPARATOR: &str = "; ";

/// A selectable section of the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Log chart dimensions in pixels.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub label_width: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            label_width: DEFAULT_LABEL_WIDTH,
        }
    }
}

impl ChartConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "chart".to_string(),
            name: "Log chart".to_string(),
        }
    }

    pub fn layout(&self) -> ChartLayout {
        ChartLayout::new(self.width, self.height, self.label_width)
    }

    pub fn init(config: &Option<ChartConfig>) -> Result<Self> {
        let config = config.unwrap_or_default();
        msg_print!(Message::ConfigModuleChart);

        Ok(Self {
            width: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptChartWidth.to_string())
                .default(config.width)
                .interact_text()?,
            height: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptChartHeight.to_string())
                .default(config.height)
                .interact_text()?,
            label_width: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptLabelWidth.to_string())
                .default(config.label_width)
                .interact_text()?,
        })
    }
}

/// Parameters of the time-based mileage estimate.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct EstimateConfig {
    pub average_speed_mph: f64,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            average_speed_mph: AVERAGE_SPEED_MPH,
        }
    }
}

impl EstimateConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "estimate".to_string(),
            name: "Mileage estimate".to_string(),
        }
    }

    pub fn init(config: &Option<EstimateConfig>) -> Result<Self> {
        let config = config.unwrap_or_default();
        msg_print!(Message::ConfigModuleEstimate);

        Ok(Self {
            average_speed_mph: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptAverageSpeed.to_string())
                .default(config.average_speed_mph)
                .interact_text()?,
        })
    }
}

/// Header information printed on every driver's daily log.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LogInfo {
    pub truck_trailer: String,
    pub carrier_name: String,
    pub home_office: String,
    pub home_terminal: String,
}

impl Default for LogInfo {
    fn default() -> Self {
        Self {
            truck_trailer: "TRK-2024-001 / TRL-2024-001".to_string(),
            carrier_name: "Acme Transport Solutions".to_string(),
            home_office: "123 Main Street, Suite 100\nSpringfield, IL 62701".to_string(),
            home_terminal: "456 Industrial Blvd\nSpringfield, IL 62702".to_string(),
        }
    }
}

impl LogInfo {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "log_info".to_string(),
            name: "Driver log information".to_string(),
        }
    }

    pub fn init(config: &Option<LogInfo>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleLogInfo);

        let home_office: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptHomeOffice.to_string())
            .default(join_address(&config.home_office))
            .interact_text()?;
        let home_terminal: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptHomeTerminal.to_string())
            .default(join_address(&config.home_terminal))
            .interact_text()?;

        Ok(Self {
            truck_trailer: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTruckTrailer.to_string())
                .default(config.truck_trailer)
                .interact_text()?,
            carrier_name: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptCarrierName.to_string())
                .default(config.carrier_name)
                .interact_text()?,
            home_office: split_address(&home_office),
            home_terminal: split_address(&home_terminal),
        })
    }
}

/// Joins address lines for single-line editing.
pub fn join_address(address: &str) -> String {
    address.lines().collect::<Vec<_>>().join(ADDRESS_LINE_SEPARATOR)
}

/// Inverse of [`join_address`].
pub fn split_address(address: &str) -> String {
    address
        .split(ADDRESS_LINE_SEPARATOR.trim())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub chart: ChartConfig,

    #[serde(default)]
    pub estimate: EstimateConfig,

    #[serde(default)]
    pub geocoder: NominatimConfig,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_info: Option<LogInfo>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    pub fn read() -> Result<Config> {
        let config_file_path = Self::path()?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file = File::create(Self::path()?)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns whether one existed.
    pub fn delete() -> Result<bool> {
        let config_file_path = Self::path()?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Log info from the configuration, or the built-in placeholder values.
    pub fn log_info(&self) -> LogInfo {
        self.log_info.clone().unwrap_or_default()
    }

    /// Runs the setup wizard, starting from the saved configuration.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ChartConfig::module(),
            EstimateConfig::module(),
            NominatimConfig::module(),
            ServerConfig::module(),
            LogInfo::module(),
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "chart" => config.chart = ChartConfig::init(&Some(config.chart))?,
                "estimate" => config.estimate = EstimateConfig::init(&Some(config.estimate))?,
                "geocoder" => config.geocoder = NominatimConfig::init(&Some(config.geocoder.clone()))?,
                "server" => config.server = Some(ServerConfig::init(&config.server)?),
                "log_info" => config.log_info = Some(LogInfo::init(&config.log_info)?),
                _ => {}
            }
        }

        Ok(config)
    }
}
