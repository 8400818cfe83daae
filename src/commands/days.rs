//! Prints the log sheet: one row per day with resolved locations.

use super::source::LogsArgs;
use crate::{
    api::{nominatim::Nominatim, Offline, ReverseGeocode},
    libs::{
        card::{LogSheet, ResolvedDay, SheetOptions},
        config::Config,
        geocoding::{Geocoder, MemoryCache},
        messages::Message,
        segment::LogDay,
        trip::TripContext,
        view::View,
    },
    msg_info,
};
use anyhow::Result;
use clap::Args;
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct DaysArgs {
    #[command(flatten)]
    logs: LogsArgs,

    /// Skip network geocoding and show coordinates
    #[arg(long)]
    offline: bool,
}

pub async fn cmd(args: DaysArgs) -> Result<()> {
    let config = Config::read()?;
    let Some(days) = resolve_days(&args.logs, &config, args.offline).await? else {
        msg_info!(Message::NoLogsAvailable);
        return Ok(());
    };

    View::days(&days, &config.log_info())
}

/// Loads the logs and settles a card for every day.
/// Returns `None` when the source has no days.
pub async fn resolve_days(logs: &LogsArgs, config: &Config, offline: bool) -> Result<Option<Vec<ResolvedDay>>> {
    let loaded = logs.load(config).await?;
    if loaded.days.is_empty() {
        return Ok(None);
    }

    let options = SheetOptions {
        initial_date: loaded.initial_date,
        average_speed_mph: config.estimate.average_speed_mph,
    };
    let days = Arc::new(loaded.days);
    let trip = Arc::new(loaded.trip);

    msg_info!(Message::ResolvingLocations(days.len()));
    let resolved = if offline {
        msg_info!(Message::OfflineGeocoding);
        settle(Offline, days, trip, options).await
    } else {
        settle(Nominatim::new(&config.geocoder), days, trip, options).await
    };
    Ok(Some(resolved))
}

async fn settle<L>(lookup: L, days: Arc<Vec<LogDay>>, trip: Arc<TripContext>, options: SheetOptions) -> Vec<ResolvedDay>
where
    L: ReverseGeocode + 'static,
{
    let geocoder = Arc::new(Geocoder::new(lookup, Arc::new(MemoryCache::new())));
    LogSheet::build(geocoder, days, trip, options).settle().await
}
