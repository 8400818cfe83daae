#[cfg(test)]
mod tests {
    use hoslog::libs::segment::{sort_by_start, total_driving_hours, DutySegment, DutyStatus, LogDay, LogsResponse, StatusError};

    fn seg(start: f64, end: f64, status: DutyStatus) -> DutySegment {
        DutySegment::new(start, end, status)
    }

    #[test]
    fn test_status_codes_and_rows() {
        for (code, status) in [
            (1u8, DutyStatus::OffDuty),
            (2, DutyStatus::SleeperBerth),
            (3, DutyStatus::Driving),
            (4, DutyStatus::OnDutyNotDriving),
        ] {
            assert_eq!(DutyStatus::try_from(code), Ok(status));
            assert_eq!(status.code(), code);
            assert_eq!(status.row(), code as usize);
        }
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert_eq!(DutyStatus::try_from(0), Err(StatusError(0)));
        assert_eq!(DutyStatus::try_from(5), Err(StatusError(5)));

        let result: Result<DutySegment, _> = serde_json::from_str(r#"{"start": 0, "end": 1, "status": 7}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(DutyStatus::OffDuty.label(), "Off Duty");
        assert_eq!(DutyStatus::SleeperBerth.label(), "Sleeper Berth");
        assert_eq!(DutyStatus::Driving.label(), "Driving");
        assert_eq!(DutyStatus::OnDutyNotDriving.to_string(), "On Duty (Not Driving)");
    }

    #[test]
    fn test_driving_hours_sums_driving_only() {
        let day = LogDay::new(vec![
            seg(0.0, 6.0, DutyStatus::OffDuty),
            seg(6.0, 7.0, DutyStatus::OnDutyNotDriving),
            seg(7.0, 11.5, DutyStatus::Driving),
            seg(11.5, 12.0, DutyStatus::OffDuty),
            seg(12.0, 17.5, DutyStatus::Driving),
            seg(17.5, 24.0, DutyStatus::SleeperBerth),
        ]);
        assert!((day.driving_hours() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_driving_hours_empty_day() {
        assert_eq!(LogDay::default().driving_hours(), 0.0);
        assert_eq!(total_driving_hours(&[]), 0.0);
    }

    #[test]
    fn test_total_driving_hours_across_days() {
        let days = vec![
            LogDay::new(vec![seg(8.0, 18.0, DutyStatus::Driving)]),
            LogDay::new(vec![seg(0.0, 5.0, DutyStatus::Driving), seg(5.0, 24.0, DutyStatus::OffDuty)]),
        ];
        assert!((total_driving_hours(&days) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_sort_by_start_is_stable() {
        let segments = vec![
            seg(8.0, 9.0, DutyStatus::Driving),
            seg(0.0, 8.0, DutyStatus::OffDuty),
            seg(8.0, 8.0, DutyStatus::OnDutyNotDriving),
        ];
        let sorted = sort_by_start(&segments);
        assert_eq!(sorted[0].status, DutyStatus::OffDuty);
        assert_eq!(sorted[1].status, DutyStatus::Driving);
        assert_eq!(sorted[2].status, DutyStatus::OnDutyNotDriving);
        // Input untouched.
        assert_eq!(segments[0].status, DutyStatus::Driving);
    }

    #[test]
    fn test_logs_response_decodes() {
        let raw = r#"{
            "days": [
                {"segments": [{"start": 0, "end": 6, "status": 1}, {"start": 6, "end": 16, "status": 3}], "note": "34-hour reset required"},
                {"segments": [], "date": "2024-03-02", "to_location": {"lat": 34.05, "lon": -118.24}}
            ]
        }"#;
        let response: LogsResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.days.len(), 2);
        assert_eq!(response.days[0].segments[1].status, DutyStatus::Driving);
        assert_eq!(response.days[0].note.as_deref(), Some("34-hour reset required"));
        assert_eq!(response.days[1].date, chrono::NaiveDate::from_ymd_opt(2024, 3, 2));
        assert_eq!(response.days[1].to_location.map(|c| c.lat), Some(34.05));
    }

    #[test]
    fn test_unknown_status_skipped_within_day() {
        let raw = r#"{
            "days": [
                {"segments": [{"start": 0, "end": 6, "status": 1}, {"start": 6, "end": 9, "status": 7}, {"start": 9, "end": 12, "status": 3}]},
                {"segments": [{"start": 0, "end": 24, "status": 300}]}
            ]
        }"#;
        let response: LogsResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.days.len(), 2);
        assert_eq!(
            response.days[0].segments,
            vec![seg(0.0, 6.0, DutyStatus::OffDuty), seg(9.0, 12.0, DutyStatus::Driving)]
        );
        assert_eq!(response.days[0].driving_hours(), 3.0);
        assert!(response.days[1].segments.is_empty());
    }

    #[test]
    fn test_logs_response_without_days() {
        let response: LogsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.days.is_empty());
    }
}
