#[cfg(test)]
mod tests {
    use hoslog::libs::geometry::{coordinates_at_ratio, interpolate, Geometry, GeometryError};
    use hoslog::libs::trip::Coordinate;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: Option<Coordinate>, lat: f64, lon: f64) {
        let actual = actual.expect("expected a coordinate");
        assert!((actual.lat - lat).abs() < EPS, "lat {} != {}", actual.lat, lat);
        assert!((actual.lon - lon).abs() < EPS, "lon {} != {}", actual.lon, lon);
    }

    fn route() -> Geometry {
        Geometry::from_json(r#"{"type": "LineString", "coordinates": [[-87.0, 41.0], [-88.0, 42.0], [-90.0, 44.0]]}"#).unwrap()
    }

    #[test]
    fn test_line_string_positions_are_lon_lat() {
        let points = route().points().unwrap();
        assert_eq!(points[0], Coordinate::new(41.0, -87.0));
        assert_eq!(points[2], Coordinate::new(44.0, -90.0));
    }

    #[test]
    fn test_ratio_endpoints_are_exact_vertices() {
        let geometry = route();
        assert_close(coordinates_at_ratio(Some(&geometry), 0.0), 41.0, -87.0);
        assert_close(coordinates_at_ratio(Some(&geometry), 1.0), 44.0, -90.0);
    }

    #[test]
    fn test_ratio_interpolates_by_vertex_index() {
        let geometry = route();
        // index 0.5 → halfway between the first two vertices
        assert_close(coordinates_at_ratio(Some(&geometry), 0.25), 41.5, -87.5);
        // index 1.5 → halfway between the last two vertices
        assert_close(coordinates_at_ratio(Some(&geometry), 0.75), 43.0, -89.0);
        assert_close(coordinates_at_ratio(Some(&geometry), 0.5), 42.0, -88.0);
    }

    #[test]
    fn test_ratio_is_clamped() {
        let geometry = route();
        assert_close(coordinates_at_ratio(Some(&geometry), -0.5), 41.0, -87.0);
        assert_close(coordinates_at_ratio(Some(&geometry), 1.7), 44.0, -90.0);
        assert_close(coordinates_at_ratio(Some(&geometry), f64::NAN), 41.0, -87.0);
    }

    #[test]
    fn test_single_vertex_line() {
        let points = [Coordinate::new(35.0, -100.0)];
        assert_close(interpolate(&points, 0.0), 35.0, -100.0);
        assert_close(interpolate(&points, 0.6), 35.0, -100.0);
    }

    #[test]
    fn test_multi_line_string_is_flattened() {
        let geometry = Geometry::from_json(
            r#"{"type": "MultiLineString", "coordinates": [[[0.0, 0.0], [1.0, 1.0]], [[2.0, 2.0], [3.0, 3.0], [4.0, 4.0]]]}"#,
        )
        .unwrap();
        assert_eq!(geometry.points().unwrap().len(), 5);
        assert_close(coordinates_at_ratio(Some(&geometry), 0.5), 2.0, 2.0);
    }

    #[test]
    fn test_feature_and_collection_unwrap_to_line() {
        let feature = Geometry::from_json(
            r#"{"type": "Feature", "properties": {}, "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [10.0, 20.0]]}}"#,
        )
        .unwrap();
        assert_close(coordinates_at_ratio(Some(&feature), 0.5), 10.0, 5.0);

        let collection = Geometry::from_json(
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [2.0, 2.0]]}},
                {"type": "Feature", "geometry": {"type": "LineString", "coordinates": [[50.0, 50.0], [60.0, 60.0]]}}
            ]}"#,
        )
        .unwrap();
        assert_close(coordinates_at_ratio(Some(&collection), 1.0), 2.0, 2.0);
    }

    #[test]
    fn test_unusable_geometry_yields_none() {
        let point = Geometry::from_json(r#"{"type": "Point", "coordinates": [1.0, 2.0]}"#).unwrap();
        assert_eq!(point, Geometry::Unsupported);
        assert!(matches!(point.points(), Err(GeometryError::Unsupported)));
        assert_eq!(coordinates_at_ratio(Some(&point), 0.5), None);

        let empty = Geometry::from_json(r#"{"type": "FeatureCollection", "features": []}"#).unwrap();
        assert!(matches!(empty.points(), Err(GeometryError::EmptyCollection)));
        assert_eq!(coordinates_at_ratio(Some(&empty), 0.5), None);

        let no_points = Geometry::from_json(r#"{"type": "LineString", "coordinates": []}"#).unwrap();
        assert_eq!(coordinates_at_ratio(Some(&no_points), 0.5), None);

        assert_eq!(coordinates_at_ratio(None, 0.5), None);
    }

    #[test]
    fn test_short_position_is_an_error() {
        let geometry = Geometry::from_json(r#"{"type": "LineString", "coordinates": [[0.0, 0.0], [1.0]]}"#).unwrap();
        assert!(matches!(geometry.points(), Err(GeometryError::ShortPosition { index: 1, len: 1 })));
        assert_eq!(coordinates_at_ratio(Some(&geometry), 0.5), None);
    }

    #[test]
    fn test_altitude_is_ignored() {
        let geometry = Geometry::from_json(r#"{"type": "LineString", "coordinates": [[1.0, 2.0, 300.0], [3.0, 4.0, 310.0]]}"#).unwrap();
        assert_close(coordinates_at_ratio(Some(&geometry), 1.0), 4.0, 3.0);
    }

    #[test]
    fn test_malformed_json_is_a_decode_error() {
        assert!(matches!(Geometry::from_json("not json"), Err(GeometryError::Decode(_))));
        assert!(matches!(Geometry::from_json(r#"{"coordinates": []}"#), Err(GeometryError::Decode(_))));
    }

    #[test]
    fn test_line_string_builder() {
        let geometry = Geometry::line_string(&[Coordinate::new(1.0, 2.0), Coordinate::new(3.0, 4.0)]);
        assert_eq!(geometry.points().unwrap(), vec![Coordinate::new(1.0, 2.0), Coordinate::new(3.0, 4.0)]);
    }
}
