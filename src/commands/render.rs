//! Writes log charts as SVG files, one per day.

use super::source::LogsArgs;
use crate::{
    libs::{config::Config, messages::Message, renderer::ChartLayout, segment::LogDay, svg::render_svg},
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    logs: LogsArgs,

    /// Render only this day (1-based)
    #[arg(short, long)]
    day: Option<usize>,

    /// Output directory
    #[arg(default_value = ".")]
    output: PathBuf,
}

pub async fn cmd(args: RenderArgs) -> Result<()> {
    let config = Config::read()?;
    let days = args.logs.fetch_days(&config).await?;
    if days.is_empty() {
        msg_info!(Message::NoLogsAvailable);
        return Ok(());
    }

    let written = write_charts(&days, &config.chart.layout(), &args.output, args.day)?;
    for path in &written {
        msg_success!(Message::ChartWritten(path.display().to_string()));
    }
    msg_info!(Message::ChartsWritten(written.len()));
    Ok(())
}

pub fn chart_file_name(day_number: usize) -> String {
    format!("day-{:02}.svg", day_number)
}

/// Renders `days` (or only `only_day`) into `output` and returns the written paths.
pub fn write_charts(days: &[LogDay], layout: &ChartLayout, output: &Path, only_day: Option<usize>) -> Result<Vec<PathBuf>> {
    if let Some(day) = only_day {
        if day == 0 || day > days.len() {
            msg_bail_anyhow!(Message::DayOutOfRange(day, days.len()));
        }
    }

    fs::create_dir_all(output)?;
    let mut written = Vec::new();
    for (index, day) in days.iter().enumerate() {
        let day_number = index + 1;
        if only_day.is_some_and(|only| only != day_number) {
            continue;
        }
        let path = output.join(chart_file_name(day_number));
        fs::write(&path, render_svg(&day.segments, layout))?;
        written.push(path);
    }
    Ok(written)
}
