use super::card::ResolvedDay;
use super::config::LogInfo;
use super::formatter::{format_date, format_hours, format_miles};
use super::messages::Message;
use crate::msg_print;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn days_table(days: &[ResolvedDay]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["DAY", "DATE", "FROM", "TO", "DRIVING", "MILES", "TOTAL MILEAGE"]);
        for day in days {
            table.add_row(row![
                day.summary.day_number(),
                format_date(&day.summary.date),
                day.names.from,
                day.names.to,
                format_hours(day.summary.driving_hours),
                format_miles(day.summary.driving_miles),
                format_miles(day.summary.total_mileage)
            ]);
        }

        table
    }

    pub fn log_info_table(info: &LogInfo) -> Table {
        let mut table = Table::new();

        table.add_row(row!["TRUCK/TRAILER", "CARRIER", "HOME OFFICE", "HOME TERMINAL"]);
        table.add_row(row![info.truck_trailer, info.carrier_name, info.home_office, info.home_terminal]);

        table
    }

    /// Prints the log sheet: driver info, one row per day, then the notes.
    pub fn days(days: &[ResolvedDay], info: &LogInfo) -> Result<()> {
        msg_print!(Message::DriverInfoHeader, true);
        Self::log_info_table(info).printstd();

        msg_print!(Message::LogSheetHeader(days.len()), true);
        Self::days_table(days).printstd();

        for day in days {
            if let Some(note) = &day.summary.note {
                msg_print!(Message::DayNote(day.summary.day_number(), note.clone()));
            }
        }

        Ok(())
    }
}
