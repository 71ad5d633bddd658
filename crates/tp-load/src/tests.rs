//! Unit tests for tp-load.
//!
//! Most tests feed in-memory readers; the file tests use `tempfile`.

#[cfg(test)]
mod grid {
    use std::io::Cursor;

    use tp_core::{Coord, GridError, Terrain};

    use crate::{load_grid_json, load_grid_reader, LoadError};

    #[test]
    fn plain_labels() {
        let g = load_grid_reader(Cursor::new(r#"[["plains","sea"],["Void","mountain"]]"#)).unwrap();
        assert_eq!((g.cols(), g.rows()), (2, 2));
        assert_eq!(g.terrain(Coord::new(0, 1)), Some(Terrain::Void));
        assert_eq!(g.label(Coord::new(1, 1)), Some("mountain"));
    }

    #[test]
    fn non_string_labels_are_coerced() {
        let g = load_grid_reader(Cursor::new(r#"[[null, 7, true, "sea"]]"#)).unwrap();
        assert_eq!(g.label(Coord::new(0, 0)), Some(""));
        assert_eq!(g.label(Coord::new(1, 0)), Some("7"));
        assert_eq!(g.label(Coord::new(2, 0)), Some("true"));
        assert_eq!(g.terrain(Coord::new(0, 0)), Some(Terrain::Plain));
        assert_eq!(g.terrain(Coord::new(3, 0)), Some(Terrain::Sea));
    }

    #[test]
    fn empty_map_loads_as_empty_grid() {
        let g = load_grid_reader(Cursor::new("[]")).unwrap();
        assert!(g.is_empty());
    }

    #[test]
    fn ragged_map_rejected() {
        let err = load_grid_reader(Cursor::new(r#"[["a","b"],["c"]]"#)).unwrap_err();
        assert!(matches!(err, LoadError::Grid(GridError::Ragged { row: 1, expected: 2, found: 1 })));
        assert_eq!(err.to_string(), "malformed grid: row 1 has 1 cells, expected 2");
    }

    #[test]
    fn wrong_shapes_rejected() {
        assert!(matches!(load_grid_reader(Cursor::new(r#"{"rows":[]}"#)), Err(LoadError::Parse(_))));
        assert!(matches!(load_grid_reader(Cursor::new(r#"["plains"]"#)), Err(LoadError::Parse(_))));
        assert!(matches!(load_grid_reader(Cursor::new("not json")), Err(LoadError::Json(_))));
    }

    #[test]
    fn missing_map_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_grid_json(&dir.path().join("map.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.json");
        std::fs::write(&path, r#"[["plains","plains"],["sea","void"]]"#).unwrap();
        let g = load_grid_json(&path).unwrap();
        assert_eq!(g.len(), 4);
    }
}

#[cfg(test)]
mod normalize {
    use serde_json::json;

    use tp_core::{Coord, Ferry};

    use crate::{normalize_ferries, normalize_ferry};

    #[test]
    fn nested_shape() {
        let f = normalize_ferry(&json!({ "origin": [3, 4], "destination": [10, 2], "cost": 5 })).unwrap();
        assert_eq!(f, Ferry::new((3, 4), (10, 2), 5));
    }

    #[test]
    fn nested_shape_cost_fallbacks() {
        let f = normalize_ferry(&json!({ "origin": [0, 0], "destination": [1, 1], "cost": null, "c": 3 })).unwrap();
        assert_eq!(f.cost, 3);
        let f = normalize_ferry(&json!({ "origin": [0, 0], "destination": [1, 1], "cost required": "4" })).unwrap();
        assert_eq!(f.cost, 4);
        let f = normalize_ferry(&json!({ "origin": [0, 0], "destination": [1, 1] })).unwrap();
        assert_eq!(f.cost, 0);
    }

    #[test]
    fn nested_shape_short_arrays_default_to_zero() {
        let f = normalize_ferry(&json!({ "origin": [7], "destination": [], "cost": 1 })).unwrap();
        assert_eq!(f.origin, Coord::new(7, 0));
        assert_eq!(f.destination, Coord::new(0, 0));
    }

    #[test]
    fn flat_shape_with_spaced_keys() {
        let f = normalize_ferry(&json!({
            "Origin X": 3, "Origin Y": 4,
            "Destination X": 10, "Destination Y": 2,
            "Cost Required": 5
        }))
        .unwrap();
        assert_eq!(f, Ferry::new((3, 4), (10, 2), 5));
    }

    #[test]
    fn flat_shape_short_keys() {
        let f = normalize_ferry(&json!({ "ox": 1, "oy": 2, "dx": 3, "dy": 4, "c": 9 })).unwrap();
        assert_eq!(f, Ferry::new((1, 2), (3, 4), 9));
        let f = normalize_ferry(&json!({
            "origin_0": 1, "origin_1": 2, "destination[0]": 3, "destination[1]": 4, "cost_ap_required": 2
        }))
        .unwrap();
        assert_eq!(f, Ferry::new((1, 2), (3, 4), 2));
    }

    #[test]
    fn cost_required_preferred_over_cost() {
        let f = normalize_ferry(&json!({ "ox": 0, "oy": 0, "dx": 1, "dy": 1, "cost": 8, "costRequired": 2 })).unwrap();
        assert_eq!(f.cost, 2);
    }

    #[test]
    fn flat_shape_missing_coordinate_dropped() {
        assert!(normalize_ferry(&json!({ "ox": 1, "oy": 2, "dx": 3, "cost": 1 })).is_none());
        assert!(normalize_ferry(&json!({ "ox": 1, "oy": 2, "dx": 3, "dy": null })).is_none());
    }

    #[test]
    fn null_primary_name_shadows_later_primaries() {
        // `origin x` is present but null; `ox` is never consulted and no
        // fallback name exists, so the record is unusable.
        let record = json!({ "origin x": null, "ox": 5, "oy": 1, "dx": 2, "dy": 2, "cost": 1 });
        assert!(normalize_ferry(&record).is_none());
    }

    #[test]
    fn null_primary_name_falls_back_to_indexed_names() {
        let f = normalize_ferry(&json!({
            "origin x": null, "origin_0": 5, "oy": 1, "dx": 2, "dy": 2, "cost": 1
        }))
        .unwrap();
        assert_eq!(f.origin, Coord::new(5, 1));
    }

    #[test]
    fn null_fallback_value_is_kept_as_zero() {
        let f = normalize_ferry(&json!({ "origin[0]": null, "oy": 1, "dx": 2, "dy": 2 })).unwrap();
        assert_eq!(f.origin, Coord::new(0, 1));
    }

    #[test]
    fn null_cost_shadows_later_cost_names() {
        let f = normalize_ferry(&json!({
            "ox": 0, "oy": 0, "dx": 1, "dy": 1, "cost required": null, "cost": 7
        }))
        .unwrap();
        assert_eq!(f.cost, 0);
    }

    #[test]
    fn numeric_coercion() {
        let f = normalize_ferry(&json!({
            "ox": " 12 ", "oy": -1.7, "dx": true, "dy": "abc", "cost": 2.9
        }))
        .unwrap();
        assert_eq!(f.origin, Coord::new(12, -1));
        assert_eq!(f.destination, Coord::new(1, 0));
        assert_eq!(f.cost, 2);
    }

    #[test]
    fn huge_coordinates_saturate() {
        let f = normalize_ferry(&json!({ "origin": [1e12, -1e12], "destination": [0, 0], "cost": 1 })).unwrap();
        assert_eq!(f.origin, Coord::new(i32::MAX, i32::MIN));
    }

    #[test]
    fn negative_cost_dropped() {
        assert!(normalize_ferry(&json!({ "origin": [0, 0], "destination": [1, 1], "cost": -3 })).is_none());
    }

    #[test]
    fn non_objects_dropped() {
        let records = vec![json!(null), json!(5), json!("ferry"), json!([1, 2, 3, 4])];
        assert!(normalize_ferries(&records).is_empty());
    }

    #[test]
    fn mixed_list_keeps_order() {
        let records = vec![
            json!({ "origin": [0, 0], "destination": [1, 0], "cost": 1 }),
            json!({ "bogus": true }),
            json!({ "ox": 2, "oy": 0, "dx": 3, "dy": 0, "cost": 2 }),
        ];
        let ferries = normalize_ferries(&records);
        assert_eq!(ferries, vec![Ferry::new((0, 0), (1, 0), 1), Ferry::new((2, 0), (3, 0), 2)]);
    }
}

#[cfg(test)]
mod ferry_files {
    use std::io::Cursor;

    use tp_core::Ferry;

    use crate::{load_ferries, load_ferries_csv_reader, load_ferries_json, load_ferries_reader, LoadError};

    #[test]
    fn json_reader() {
        let ferries = load_ferries_reader(Cursor::new(
            r#"[{"origin":[0,0],"destination":[2,2],"cost":1},{"Origin X":1,"Origin Y":1,"Destination X":0,"Destination Y":0,"Cost Required":3}]"#,
        ))
        .unwrap();
        assert_eq!(ferries, vec![Ferry::new((0, 0), (2, 2), 1), Ferry::new((1, 1), (0, 0), 3)]);
    }

    #[test]
    fn non_array_json_is_empty() {
        let ferries = load_ferries_reader(Cursor::new(r#"{"origin":[0,0]}"#)).unwrap();
        assert!(ferries.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(load_ferries_reader(Cursor::new("[{")), Err(LoadError::Json(_))));
    }

    #[test]
    fn csv_reader() {
        let csv = "\
Origin X, Origin Y, Destination X, Destination Y, Cost Required\n\
0,0,2,2,1\n\
1,1,0,0,\n\
3,,4,4,2\n\
";
        let ferries = load_ferries_csv_reader(Cursor::new(csv)).unwrap();
        // The third row has an empty origin y, which coerces to 0.
        assert_eq!(
            ferries,
            vec![Ferry::new((0, 0), (2, 2), 1), Ferry::new((1, 1), (0, 0), 0), Ferry::new((3, 0), (4, 4), 2)]
        );
    }

    #[test]
    fn missing_files_are_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_ferries_json(&dir.path().join("ferry.json")).unwrap().is_empty());
        assert!(load_ferries(&dir.path().join("ferry.csv")).unwrap().is_empty());
    }

    #[test]
    fn dispatch_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("ferry.json");
        std::fs::write(&json_path, r#"[{"origin":[0,0],"destination":[1,1],"cost":2}]"#).unwrap();
        assert_eq!(load_ferries(&json_path).unwrap(), vec![Ferry::new((0, 0), (1, 1), 2)]);

        let csv_path = dir.path().join("ferry.CSV");
        std::fs::write(&csv_path, "ox,oy,dx,dy,c\n4,5,6,7,8\n").unwrap();
        assert_eq!(load_ferries(&csv_path).unwrap(), vec![Ferry::new((4, 5), (6, 7), 8)]);
    }
}
