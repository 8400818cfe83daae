#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use hoslog::api::{GeocodeError, ReverseGeocode};
    use hoslog::libs::card::{resolve_names, CardInputs, DayCard, LocationNames, LogSheet, NameSlot, SheetOptions};
    use hoslog::libs::aggregator::Endpoints;
    use hoslog::libs::geocoding::LocationInfo;
    use hoslog::libs::segment::{DutySegment, DutyStatus, LogDay};
    use hoslog::libs::trip::{Coordinate, TripContext, METERS_PER_MILE};
    use std::sync::Arc;
    use std::time::Duration;

    /// Names coordinates `"<label> <lat>"`. Latitudes at or above
    /// `slow_from_lat` take five seconds.
    struct NamedLookup {
        label: &'static str,
        delay: Duration,
        slow_from_lat: f64,
    }

    impl NamedLookup {
        fn new(label: &'static str) -> Self {
            Self {
                label,
                delay: Duration::from_millis(5),
                slow_from_lat: f64::INFINITY,
            }
        }
    }

    impl ReverseGeocode for NamedLookup {
        async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<LocationInfo, GeocodeError> {
            let delay = if coordinate.lat >= self.slow_from_lat { Duration::from_secs(5) } else { self.delay };
            tokio::time::sleep(delay).await;
            Ok(LocationInfo::new(format!("{} {:.1}", self.label, coordinate.lat), None))
        }
    }

    struct FailingLookup;

    impl ReverseGeocode for FailingLookup {
        async fn reverse_geocode(&self, _coordinate: Coordinate) -> Result<LocationInfo, GeocodeError> {
            Err(GeocodeError::Unavailable("down".to_string()))
        }
    }

    fn driving_day(hours: f64) -> LogDay {
        LogDay::new(vec![
            DutySegment::new(0.0, hours, DutyStatus::Driving),
            DutySegment::new(hours, 24.0, DutyStatus::OffDuty),
        ])
    }

    fn single_day_inputs() -> CardInputs {
        CardInputs {
            days: Arc::new(vec![driving_day(8.0)]),
            index: 0,
            trip: Arc::new(TripContext {
                current_location: Some(Coordinate::new(41.8781, -87.6298)),
                dropoff_location: Some(Coordinate::new(34.0522, -118.2437)),
                ..TripContext::default()
            }),
            options: SheetOptions::default(),
        }
    }

    #[test]
    fn test_name_slot_drops_stale_generation() {
        let slot = NameSlot::default();
        let first = slot.begin();
        let second = slot.begin();
        assert_eq!((first, second), (1, 2));

        let stale = LocationNames {
            from: "Old".to_string(),
            to: "Old".to_string(),
        };
        assert!(!slot.apply(first, stale));
        assert!(slot.names().is_loading());

        let fresh = LocationNames {
            from: "New".to_string(),
            to: "New".to_string(),
        };
        assert!(slot.apply(second, fresh.clone()));
        assert_eq!(slot.names(), fresh);
    }

    #[test]
    fn test_begin_resets_names() {
        let slot = NameSlot::default();
        let generation = slot.begin();
        slot.apply(
            generation,
            LocationNames {
                from: "A".to_string(),
                to: "B".to_string(),
            },
        );
        slot.begin();
        assert_eq!(slot.names(), LocationNames::loading());
    }

    #[tokio::test]
    async fn test_card_loads_then_resolves() {
        let mut card = DayCard::new();
        card.update(Arc::new(NamedLookup::new("City")), single_day_inputs());

        assert_eq!(card.names(), LocationNames::loading());
        assert_eq!(card.names().from, "Loading...");
        assert_eq!(card.summary().map(|s| s.driving_miles), Some(440));

        let names = card.settled().await;
        assert_eq!(names.from, "City 41.9");
        assert_eq!(names.to, "City 34.1");
        assert_eq!(card.names(), names);
    }

    #[tokio::test]
    async fn test_new_inputs_supersede_running_lookup() {
        let mut card = DayCard::new();
        let slow = NamedLookup {
            label: "Old",
            delay: Duration::from_millis(200),
            slow_from_lat: f64::INFINITY,
        };
        card.update(Arc::new(slow), single_day_inputs());

        let mut inputs = single_day_inputs();
        inputs.days = Arc::new(vec![driving_day(4.0)]);
        card.update(Arc::new(NamedLookup::new("New")), inputs);

        assert_eq!(card.generation(), 2);
        assert_eq!(card.summary().map(|s| s.driving_miles), Some(220));

        let names = card.settled().await;
        assert_eq!(names.from, "New 41.9");
        assert_eq!(names.to, "New 34.1");

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(card.names(), names);
    }

    #[tokio::test]
    async fn test_failed_lookup_shows_coordinates() {
        let mut card = DayCard::new();
        card.update(Arc::new(FailingLookup), single_day_inputs());
        let names = card.settled().await;
        assert_eq!(names.from, "41.8781, -87.6298");
        assert_eq!(names.to, "34.0522, -118.2437");
    }

    #[tokio::test]
    async fn test_missing_coordinates_show_not_available() {
        let names = resolve_names(&NamedLookup::new("City"), Endpoints::default()).await;
        assert_eq!(names.from, "N/A");
        assert_eq!(names.to, "N/A");

        let mut card = DayCard::new();
        card.update(
            Arc::new(NamedLookup::new("City")),
            CardInputs {
                days: Arc::new(vec![LogDay::default()]),
                index: 0,
                trip: Arc::new(TripContext::default()),
                options: SheetOptions::default(),
            },
        );
        assert_eq!(card.settled().await, LocationNames {
            from: "N/A".to_string(),
            to: "N/A".to_string(),
        });
    }

    #[tokio::test]
    async fn test_out_of_range_index_has_no_summary() {
        let mut inputs = single_day_inputs();
        inputs.index = 3;
        let mut card = DayCard::new();
        card.update(Arc::new(NamedLookup::new("City")), inputs);

        assert!(card.summary().is_none());
        assert_eq!(card.settled().await.from, "N/A");
    }

    #[tokio::test]
    async fn test_slow_day_does_not_block_other_days() {
        let mut first = driving_day(5.0);
        first.from_location = Some(Coordinate::new(1.0, 1.0));
        first.to_location = Some(Coordinate::new(2.0, 2.0));
        let mut second = driving_day(5.0);
        second.to_location = Some(Coordinate::new(45.0, 45.0));

        let lookup = NamedLookup {
            label: "Place",
            delay: Duration::from_millis(5),
            slow_from_lat: 40.0,
        };
        let mut sheet = LogSheet::build(
            Arc::new(lookup),
            Arc::new(vec![first, second]),
            Arc::new(TripContext::default()),
            SheetOptions::default(),
        );

        let names = tokio::time::timeout(Duration::from_secs(1), sheet.cards_mut()[0].settled())
            .await
            .expect("first day must resolve while the second is still pending");
        assert_eq!(names.from, "Place 1.0");
        assert_eq!(names.to, "Place 2.0");
        assert!(sheet.cards()[1].names().is_loading());
    }

    #[tokio::test]
    async fn test_sheet_settles_every_day_in_order() {
        let days = vec![
            driving_day(8.0).with_note("Reset required"),
            driving_day(4.0),
        ];
        let trip = TripContext {
            distance_m: Some(100.0 * METERS_PER_MILE),
            current_location: Some(Coordinate::new(10.0, 10.0)),
            dropoff_location: Some(Coordinate::new(20.0, 20.0)),
            ..TripContext::default()
        };
        let options = SheetOptions {
            initial_date: NaiveDate::from_ymd_opt(2024, 5, 1),
            ..SheetOptions::default()
        };

        let mut sheet = LogSheet::build(Arc::new(NamedLookup::new("Stop")), Arc::new(days), Arc::new(trip), options);
        assert_eq!(sheet.len(), 2);

        let resolved = sheet.settle().await;
        assert_eq!(resolved.len(), 2);

        assert_eq!(resolved[0].summary.driving_miles, 67);
        assert_eq!(resolved[0].summary.note.as_deref(), Some("Reset required"));
        assert_eq!(resolved[0].names.from, "Stop 10.0");

        assert_eq!(resolved[1].summary.date, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
        assert_eq!(resolved[1].summary.total_mileage, 100);
        assert_eq!(resolved[1].names.from, "N/A");
        assert_eq!(resolved[1].names.to, "Stop 20.0");
    }

    #[tokio::test]
    async fn test_empty_sheet() {
        let mut sheet = LogSheet::build(
            Arc::new(NamedLookup::new("Stop")),
            Arc::new(Vec::new()),
            Arc::new(TripContext::default()),
            SheetOptions::default(),
        );
        assert!(sheet.is_empty());
        assert!(sheet.settle().await.is_empty());
    }
}
