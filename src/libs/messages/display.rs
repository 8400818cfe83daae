//! Display text for application messages.
//!
//! All wording is defined here in one match so that message variants stay
//! the only thing call sites deal with.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file found, nothing to remove".to_string(),
            Message::ConfigModuleChart => "Log chart settings:".to_string(),
            Message::ConfigModuleEstimate => "Mileage estimate settings:".to_string(),
            Message::ConfigModuleGeocoder => "Reverse geocoding settings:".to_string(),
            Message::ConfigModuleServer => "Planning server settings:".to_string(),
            Message::ConfigModuleLogInfo => "Driver log information:".to_string(),

            // === LOG SOURCE MESSAGES ===
            Message::LogsSourceMissing => "Provide --logs <file>, --trip-id <id> or --duration-s <seconds>".to_string(),
            Message::ServerNotConfigured => "Planning server is not configured. Run `hoslog init` first".to_string(),
            Message::LogsFetched(count) => format!("Fetched {} log day(s) from the planning server", count),
            Message::LogsFileLoaded(path) => format!("Loaded logs from {}", path),
            Message::NoLogsAvailable => "No ELD logs available. Plan a trip to generate logs.".to_string(),
            Message::DayOutOfRange(day, count) => format!("Day {} does not exist, the log has {} day(s)", day, count),
            Message::TripFileLoaded(path) => format!("Loaded trip from {}", path),
            Message::TripFileMissing(mph) => {
                format!("No trip file given: mileage is estimated at {} mph and only logged locations are shown", mph)
            }
            Message::InvalidDate(raw) => format!("Invalid date '{}', expected YYYY-MM-DD", raw),

            // === RENDER MESSAGES ===
            Message::ChartWritten(path) => format!("Chart written to {}", path),
            Message::ChartsWritten(count) => format!("{} chart(s) written", count),

            // === DAY SUMMARY MESSAGES ===
            Message::LogSheetHeader(count) => format!("ELD Logs ({} day(s))", count),
            Message::DayNote(day, note) => format!("Day {}: {}", day, note),
            Message::DriverInfoHeader => "Driver's Log Information".to_string(),
            Message::ResolvingLocations(count) => format!("Resolving locations for {} day(s)...", count),
            Message::OfflineGeocoding => "Offline mode: locations are shown as coordinates".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::ExportFailed(reason) => format!("Export failed: {}", reason),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptChartWidth => "Chart width in pixels".to_string(),
            Message::PromptChartHeight => "Chart height in pixels".to_string(),
            Message::PromptLabelWidth => "Status label column width in pixels".to_string(),
            Message::PromptAverageSpeed => "Average speed for mileage estimates (mph)".to_string(),
            Message::PromptGeocoderUrl => "Nominatim base URL".to_string(),
            Message::PromptGeocoderUserAgent => "User-Agent sent to the geocoder".to_string(),
            Message::PromptGeocoderZoom => "Reverse geocoding zoom level".to_string(),
            Message::PromptServerApiUrl => "Planning server API URL".to_string(),
            Message::PromptTruckTrailer => "Truck and trailer number".to_string(),
            Message::PromptCarrierName => "Name of carrier".to_string(),
            Message::PromptHomeOffice => "Home office address".to_string(),
            Message::PromptHomeTerminal => "Home terminal address".to_string(),
        };
        write!(f, "{}", s)
    }
}
