//! Unit tests for cd-input.

use std::io::Cursor;

use crate::{
    InputError, InputKind, load_cities_reader, load_missions_reader, load_packages_reader,
    load_vehicles_reader,
};

fn cursor(s: &str) -> Cursor<&[u8]> {
    Cursor::new(s.as_bytes())
}

// ── Cities ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod cities {
    use super::*;

    #[test]
    fn one_name_per_line_trimmed() {
        let names = load_cities_reader(cursor("Istanbul\n  Ankara  \n\nNew York\n")).unwrap();
        let names: Vec<_> = names.iter().map(|n| n.as_str()).collect();
        assert_eq!(names, ["Istanbul", "Ankara", "New York"]);
    }

    #[test]
    fn empty_file_is_empty_list() {
        assert!(load_cities_reader(cursor("")).unwrap().is_empty());
    }
}

// ── Packages ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod packages {
    use super::*;

    #[test]
    fn parses_records_in_file_order() {
        let recs = load_packages_reader(cursor("P1 X\nP2 Y\r\n\nP3 X\n")).unwrap();
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].id.as_str(), "P1");
        assert_eq!(recs[1].city.as_str(), "Y");
        assert_eq!(recs[2].id.as_str(), "P3");
    }

    #[test]
    fn blanks_around_a_line_add_no_field() {
        let recs = load_packages_reader(cursor("P1 X \n P2 X\nP3 Y  \n")).unwrap();
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].city.as_str(), "X");
        assert_eq!(recs[1].id.as_str(), "P2");
        assert_eq!(recs[2].city.as_str(), "Y");
    }

    #[test]
    fn inner_double_space_is_still_rejected() {
        let err = load_packages_reader(cursor("P1  X\n")).unwrap_err();
        assert!(err.to_string().contains("expected 2 fields, found 3"));
    }

    #[test]
    fn wrong_field_count_reports_line() {
        let err = load_packages_reader(cursor("P1 X\nP2\n")).unwrap_err();
        match err {
            InputError::Parse { kind, line, .. } => {
                assert_eq!(kind, InputKind::Packages);
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}

// ── Vehicles ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod vehicles {
    use super::*;

    #[test]
    fn parses_volume() {
        let recs = load_vehicles_reader(cursor("V1 X 12.5\nV2 Z 40\n")).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].volume, 12.5);
        assert_eq!(recs[1].volume, 40.0);
        assert_eq!(recs[1].city.as_str(), "Z");
    }

    #[test]
    fn trailing_blank_after_volume_is_accepted() {
        let recs = load_vehicles_reader(cursor("V1 X 1.5 \nV2 Y 3\n")).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].volume, 1.5);
        assert_eq!(recs[0].city.as_str(), "X");
    }

    #[test]
    fn malformed_volume_is_fatal() {
        let err = load_vehicles_reader(cursor("V1 X big\n")).unwrap_err();
        assert!(matches!(err, InputError::Parse { kind: InputKind::Vehicles, line: 1, .. }));
    }
}

// ── Missions ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod missions {
    use cd_core::Mission;

    use super::*;

    #[test]
    fn parses_full_mission() {
        let ms = load_missions_reader(cursor("X-Y-Z-2-1-0,1\n")).unwrap();
        assert_eq!(ms, vec![Mission::new("X", "Y", "Z").loading(2, 1).dropping([0, 1])]);
    }

    #[test]
    fn empty_drop_list_drops_nothing() {
        let ms = load_missions_reader(cursor("A-B-C-3-0-\n")).unwrap();
        assert_eq!(ms[0].load_at_source, 3);
        assert!(ms[0].drop_positions.is_empty());
    }

    #[test]
    fn trailing_blank_keeps_empty_drop_list() {
        let ms = load_missions_reader(cursor("A-B-C-3-0- \n")).unwrap();
        assert!(ms[0].drop_positions.is_empty());
    }

    #[test]
    fn positions_tolerate_spaces_and_empty_entries() {
        let ms = load_missions_reader(cursor("A-B-C-1-1- 2, ,0,\n")).unwrap();
        assert_eq!(ms[0].drop_positions, vec![2, 0]);
    }

    #[test]
    fn missions_keep_file_order() {
        let ms = load_missions_reader(cursor("A-B-C-1-0-0\n\nC-B-A-0-1-0\n")).unwrap();
        assert_eq!(ms.len(), 2);
        assert_eq!(ms[1].source.as_str(), "C");
    }

    #[test]
    fn non_numeric_count_is_fatal() {
        let err = load_missions_reader(cursor("A-B-C-x-1-0\n")).unwrap_err();
        assert!(matches!(err, InputError::Parse { kind: InputKind::Missions, .. }));
    }

    #[test]
    fn non_numeric_position_is_fatal() {
        let err = load_missions_reader(cursor("A-B-C-1-1-0,z\n")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("missions input, line 1"), "got {msg}");
        assert!(msg.contains("\"z\""), "got {msg}");
    }

    #[test]
    fn missing_fields_are_fatal() {
        let err = load_missions_reader(cursor("A-B-C-1-1\n")).unwrap_err();
        assert!(err.to_string().contains("expected 6 fields, found 5"));
    }
}

// ── Files ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod files {
    use std::fs;

    use crate::{InputPaths, load_inputs, load_packages_path};

    use super::*;

    #[test]
    fn load_inputs_reads_all_four_files() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let p = |name: &str| dir.path().join(name);
        fs::write(p("cities.txt"), "X\nY\nZ\n").unwrap();
        fs::write(p("packages.txt"), "P1 X\nQ1 Y\n").unwrap();
        fs::write(p("vehicles.txt"), "V1 X 10\n").unwrap();
        fs::write(p("missions.txt"), "X-Y-Z-1-1-0\n").unwrap();

        let set = load_inputs(&InputPaths {
            cities:   p("cities.txt"),
            packages: p("packages.txt"),
            vehicles: p("vehicles.txt"),
            missions: p("missions.txt"),
        })
        .unwrap();

        assert_eq!(set.cities.len(), 3);
        assert_eq!(set.packages.len(), 2);
        assert_eq!(set.vehicles.len(), 1);
        assert_eq!(set.missions.len(), 1);
    }

    #[test]
    fn missing_file_names_kind_and_path() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("absent.txt");
        let err = load_packages_path(&path).unwrap_err();
        assert!(matches!(err, InputError::Open { kind: InputKind::Packages, .. }));
        assert!(err.to_string().contains("absent.txt"));
    }
}
