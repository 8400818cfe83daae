//! Planning server client for generated ELD logs.
//!
//! The server plans a trip and splits its duty timeline into 24-hour log
//! days. Logs are fetched either for a persisted trip or, for ad-hoc
//! previews, for a bare trip duration.
//!
//! `GET {api_url}/api/eld_logs/?trip_id={id}` or `?duration_s={seconds}`

use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::libs::segment::LogsResponse;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Planning server connection settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL, e.g. `https://planner.example.com`.
    pub api_url: String,
}

impl ServerConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "server".to_string(),
            name: "Planning server".to_string(),
        }
    }

    pub fn init(config: &Option<ServerConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self { api_url: "".to_string() });
        msg_print!(Message::ConfigModuleServer);

        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServerApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
        })
    }
}

/// Which logs to ask the server for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogsQuery {
    Trip(i64),
    Duration(u64),
}

impl LogsQuery {
    pub fn query_pair(&self) -> (&'static str, String) {
        match self {
            LogsQuery::Trip(id) => ("trip_id", id.to_string()),
            LogsQuery::Duration(seconds) => ("duration_s", seconds.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EldApi {
    client: Client,
    config: ServerConfig,
}

impl EldApi {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    pub fn logs_url(&self) -> String {
        format!("{}/api/eld_logs/", self.config.api_url.trim_end_matches('/'))
    }

    pub async fn fetch_logs(&self, query: LogsQuery) -> Result<LogsResponse> {
        let (key, value) = query.query_pair();
        tracing::debug!(url = %self.logs_url(), key, %value, "fetching ELD logs");

        let logs = self
            .client
            .get(self.logs_url())
            .query(&[(key, value)])
            .send()
            .await?
            .error_for_status()?
            .json::<LogsResponse>()
            .await?;
        Ok(logs)
    }
}
