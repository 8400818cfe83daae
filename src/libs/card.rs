//! Day cards: a day summary plus asynchronously resolved place names.
//!
//! Each card owns its own lookup task. Cards never wait on each other, so a
//! slow lookup for one day leaves every other day's names unaffected.
//!
//! ## Stale Results
//!
//! Updating a card with new inputs bumps its generation, resets the names to
//! the loading placeholder, aborts the running lookup and starts a new one.
//! A lookup only publishes its names if the generation it started under is
//! still current; anything older is dropped.
//!
//! ```text
//! update(A) ── gen 1 ── lookup A ─────────────────────▶ apply(1) ✗ stale
//! update(B) ─────────── gen 2 ── lookup B ──▶ apply(2) ✓
//! ```

use super::aggregator::{DayAggregator, DaySummary, Endpoints, AVERAGE_SPEED_MPH};
use super::formatter::{format_coordinate, LOADING, NOT_AVAILABLE};
use super::segment::LogDay;
use super::trip::{Coordinate, TripContext};
use crate::api::ReverseGeocode;
use chrono::NaiveDate;
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Resolved display names for a day's start and end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationNames {
    pub from: String,
    pub to: String,
}

impl LocationNames {
    pub fn loading() -> Self {
        Self {
            from: LOADING.to_string(),
            to: LOADING.to_string(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.from == LOADING || self.to == LOADING
    }
}

/// Options shared by every card of a sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetOptions {
    pub initial_date: Option<NaiveDate>,
    pub average_speed_mph: f64,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            initial_date: None,
            average_speed_mph: AVERAGE_SPEED_MPH,
        }
    }
}

/// Everything a card's content is derived from.
#[derive(Debug, Clone)]
pub struct CardInputs {
    pub days: Arc<Vec<LogDay>>,
    pub index: usize,
    pub trip: Arc<TripContext>,
    pub options: SheetOptions,
}

impl CardInputs {
    pub fn summarize(&self) -> Option<DaySummary> {
        let day = self.days.get(self.index)?;
        let aggregator = DayAggregator::new(&self.trip, &self.days)
            .with_initial_date(self.options.initial_date)
            .with_average_speed(self.options.average_speed_mph);
        Some(aggregator.summarize(day, self.index))
    }
}

#[derive(Debug)]
struct SlotState {
    generation: u64,
    names: LocationNames,
}

/// Generation-guarded holder of a card's names.
#[derive(Debug)]
pub struct NameSlot {
    state: Mutex<SlotState>,
}

impl Default for NameSlot {
    fn default() -> Self {
        Self {
            state: Mutex::new(SlotState {
                generation: 0,
                names: LocationNames::loading(),
            }),
        }
    }
}

impl NameSlot {
    /// Starts a new generation and resets the names to the placeholder.
    pub fn begin(&self) -> u64 {
        let mut state = self.state.lock();
        state.generation += 1;
        state.names = LocationNames::loading();
        state.generation
    }

    /// Publishes `names` if `generation` is still current.
    pub fn apply(&self, generation: u64, names: LocationNames) -> bool {
        let mut state = self.state.lock();
        if state.generation != generation {
            return false;
        }
        state.names = names;
        true
    }

    pub fn generation(&self) -> u64 {
        self.state.lock().generation
    }

    pub fn names(&self) -> LocationNames {
        self.state.lock().names.clone()
    }
}

/// Name for one side of the day: the geocoded name, the coordinate text when
/// geocoding fails, or "N/A" when there is no coordinate at all.
pub async fn resolve_name<G: ReverseGeocode>(geocoder: &G, coordinate: Option<Coordinate>) -> String {
    let Some(coordinate) = coordinate else {
        return NOT_AVAILABLE.to_string();
    };
    match geocoder.reverse_geocode(coordinate).await {
        Ok(info) => info.name,
        Err(e) => {
            tracing::debug!(error = %e, "location name unavailable, showing coordinates");
            format_coordinate(&coordinate)
        }
    }
}

pub async fn resolve_names<G: ReverseGeocode>(geocoder: &G, endpoints: Endpoints) -> LocationNames {
    let (from, to) = tokio::join!(resolve_name(geocoder, endpoints.from), resolve_name(geocoder, endpoints.to));
    LocationNames { from, to }
}

/// One day of the log sheet.
#[derive(Debug, Default)]
pub struct DayCard {
    slot: Arc<NameSlot>,
    summary: Option<DaySummary>,
    task: Option<JoinHandle<()>>,
}

impl DayCard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes the summary for `inputs` and starts resolving its names.
    ///
    /// Must be called from within a tokio runtime.
    pub fn update<G>(&mut self, geocoder: Arc<G>, inputs: CardInputs)
    where
        G: ReverseGeocode + 'static,
    {
        let generation = self.slot.begin();
        if let Some(task) = self.task.take() {
            task.abort();
        }

        self.summary = inputs.summarize();
        let endpoints = self.summary.as_ref().map(DaySummary::endpoints).unwrap_or_default();
        let slot = Arc::clone(&self.slot);

        self.task = Some(tokio::spawn(async move {
            let names = resolve_names(geocoder.as_ref(), endpoints).await;
            if !slot.apply(generation, names) {
                tracing::debug!(generation, "dropping stale location names");
            }
        }));
    }

    pub fn summary(&self) -> Option<&DaySummary> {
        self.summary.as_ref()
    }

    /// Current names; the loading placeholder until the lookup completes.
    pub fn names(&self) -> LocationNames {
        self.slot.names()
    }

    pub fn generation(&self) -> u64 {
        self.slot.generation()
    }

    /// Waits for the in-flight lookup, if any, and returns the names.
    pub async fn settled(&mut self) -> LocationNames {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::warn!(error = %e, "location lookup task failed");
            }
        }
        self.names()
    }
}

impl Drop for DayCard {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// A resolved card, ready for display or export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedDay {
    #[serde(flatten)]
    pub summary: DaySummary,
    #[serde(flatten)]
    pub names: LocationNames,
}

/// All day cards of one trip log.
#[derive(Debug, Default)]
pub struct LogSheet {
    cards: Vec<DayCard>,
}

impl LogSheet {
    /// Creates one card per day; every card starts its lookup immediately.
    pub fn build<G>(geocoder: Arc<G>, days: Arc<Vec<LogDay>>, trip: Arc<TripContext>, options: SheetOptions) -> Self
    where
        G: ReverseGeocode + 'static,
    {
        let cards = (0..days.len())
            .map(|index| {
                let mut card = DayCard::new();
                card.update(
                    Arc::clone(&geocoder),
                    CardInputs {
                        days: Arc::clone(&days),
                        index,
                        trip: Arc::clone(&trip),
                        options,
                    },
                );
                card
            })
            .collect();
        Self { cards }
    }

    pub fn cards(&self) -> &[DayCard] {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut [DayCard] {
        &mut self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Waits for every card and returns them in day order.
    pub async fn settle(&mut self) -> Vec<ResolvedDay> {
        let mut resolved = Vec::with_capacity(self.cards.len());
        for card in &mut self.cards {
            let names = card.settled().await;
            if let Some(summary) = card.summary().cloned() {
                resolved.push(ResolvedDay { summary, names });
            }
        }
        resolved
    }
}
