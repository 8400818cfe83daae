//! Where a command gets its log days and trip context from.
//!
//! Logs come either from a local JSON file (`--logs`) or from the planning
//! server (`--trip-id` / `--duration-s`). The trip context is optional; without
//! it mileage falls back to the time-based estimate and only explicit
//! per-day locations are shown.

use crate::{
    api::eld::{EldApi, LogsQuery},
    libs::{
        config::Config,
        messages::Message,
        segment::{LogDay, LogsResponse},
        trip::{TripContext, TripFile},
    },
    msg_bail_anyhow, msg_info, msg_warning,
};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct LogsArgs {
    /// JSON file with a `{"days": [...]}` logs response
    #[arg(short, long, conflicts_with_all = ["trip_id", "duration_s"])]
    pub logs: Option<PathBuf>,

    /// Fetch logs for a planned trip from the server
    #[arg(long, conflicts_with = "duration_s")]
    pub trip_id: Option<i64>,

    /// Fetch logs for an ad-hoc trip duration in seconds
    #[arg(long)]
    pub duration_s: Option<u64>,

    /// JSON file with trip locations and the route plan
    #[arg(short, long)]
    pub trip: Option<PathBuf>,

    /// Date of the first log day (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub initial_date: Option<String>,
}

/// Inputs shared by every log-sheet command.
#[derive(Debug, Clone)]
pub struct LoadedLogs {
    pub days: Vec<LogDay>,
    pub trip: TripContext,
    pub initial_date: Option<NaiveDate>,
}

impl LogsArgs {
    pub fn query(&self) -> Option<LogsQuery> {
        match (self.trip_id, self.duration_s) {
            (Some(id), _) => Some(LogsQuery::Trip(id)),
            (None, Some(seconds)) => Some(LogsQuery::Duration(seconds)),
            (None, None) => None,
        }
    }

    pub fn parse_initial_date(&self) -> Result<Option<NaiveDate>> {
        match &self.initial_date {
            None => Ok(None),
            Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => Ok(Some(date)),
                Err(_) => msg_bail_anyhow!(Message::InvalidDate(raw.clone())),
            },
        }
    }

    pub fn read_trip(&self) -> Result<TripContext> {
        match &self.trip {
            None => Ok(TripContext::default()),
            Some(path) => {
                let file = TripFile::read(path)?;
                msg_info!(Message::TripFileLoaded(path.display().to_string()));
                Ok(TripContext::from_file(&file))
            }
        }
    }

    pub async fn fetch_days(&self, config: &Config) -> Result<Vec<LogDay>> {
        if let Some(path) = &self.logs {
            let raw = fs::read_to_string(path).with_context(|| format!("reading logs file {}", path.display()))?;
            let response: LogsResponse =
                serde_json::from_str(&raw).with_context(|| format!("parsing logs file {}", path.display()))?;
            msg_info!(Message::LogsFileLoaded(path.display().to_string()));
            return Ok(response.days);
        }

        let Some(query) = self.query() else {
            msg_bail_anyhow!(Message::LogsSourceMissing);
        };
        let Some(server) = &config.server else {
            msg_bail_anyhow!(Message::ServerNotConfigured);
        };

        let response = EldApi::new(server).fetch_logs(query).await?;
        msg_info!(Message::LogsFetched(response.days.len()));
        Ok(response.days)
    }

    pub async fn load(&self, config: &Config) -> Result<LoadedLogs> {
        let initial_date = self.parse_initial_date()?;
        let trip = self.read_trip()?;
        if self.trip.is_none() {
            msg_warning!(Message::TripFileMissing(config.estimate.average_speed_mph));
        }
        let days = self.fetch_days(config).await?;

        Ok(LoadedLogs {
            days,
            trip,
            initial_date,
        })
    }
}
