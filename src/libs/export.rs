//! Export of resolved log days.
//!
//! - **CSV**: one row per day, ready for a spreadsheet
//! - **JSON**: driver log info plus the day list
//!
//! Without an explicit output path the file is named
//! `hoslog_export_<timestamp>.<ext>` in the current directory.

use super::card::ResolvedDay;
use super::config::LogInfo;
use super::formatter::{format_date, format_hours};
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// One exported day, with display formatting already applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportDay {
    pub day: usize,
    pub date: String,
    pub from: String,
    pub to: String,
    pub driving_hours: f64,
    pub driving_time: String,
    pub driving_miles: i64,
    pub total_mileage: i64,
    pub segments: usize,
    pub note: Option<String>,
}

impl From<&ResolvedDay> for ExportDay {
    fn from(day: &ResolvedDay) -> Self {
        Self {
            day: day.summary.day_number(),
            date: format_date(&day.summary.date),
            from: day.names.from.clone(),
            to: day.names.to.clone(),
            driving_hours: day.summary.driving_hours,
            driving_time: format_hours(day.summary.driving_hours),
            driving_miles: day.summary.driving_miles,
            total_mileage: day.summary.total_mileage,
            segments: day.summary.segment_count,
            note: day.summary.note.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ExportSheet<'a> {
    log_info: &'a LogInfo,
    days: Vec<ExportDay>,
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "hoslog_export_{}.{}",
                Local::now().format("%Y%m%d_%H%M%S"),
                format.extension()
            ))
        });

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export(&self, days: &[ResolvedDay], log_info: &LogInfo) -> Result<()> {
        let rows: Vec<ExportDay> = days.iter().map(ExportDay::from).collect();

        match self.format {
            ExportFormat::Csv => self.export_csv(&rows)?,
            ExportFormat::Json => {
                let sheet = ExportSheet { log_info, days: rows };
                let json = serde_json::to_string_pretty(&sheet)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_csv(&self, rows: &[ExportDay]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record([
            "Day",
            "Date",
            "From",
            "To",
            "Driving Hours",
            "Driving Time",
            "Driving Miles",
            "Total Mileage",
            "Segments",
            "Note",
        ])?;

        for row in rows {
            wtr.write_record(&[
                row.day.to_string(),
                row.date.clone(),
                row.from.clone(),
                row.to.clone(),
                format!("{:.2}", row.driving_hours),
                row.driving_time.clone(),
                row.driving_miles.to_string(),
                row.total_mileage.to_string(),
                row.segments.to_string(),
                row.note.clone().unwrap_or_default(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}
