//! Exports resolved log days to CSV or JSON.

use super::{days::resolve_days, source::LogsArgs};
use crate::{
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_error_anyhow, msg_info,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(value_enum, default_value = "csv")]
    format: ExportFormat,

    #[command(flatten)]
    logs: LogsArgs,

    /// Output file; defaults to a timestamped name in the current directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip network geocoding and export coordinates
    #[arg(long)]
    offline: bool,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let Some(days) = resolve_days(&args.logs, &config, args.offline).await? else {
        msg_info!(Message::NoLogsAvailable);
        return Ok(());
    };

    Exporter::new(args.format, args.output)
        .export(&days, &config.log_info())
        .map_err(|e| msg_error_anyhow!(Message::ExportFailed(e.to_string())))
}
