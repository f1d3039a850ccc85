//! Integration tests for cd-output.

use cd_core::Registry;

/// `Ankara` holds `[P2, P1]` (P2 on top) and vehicles `V1, V2`; `Bursa` is empty.
fn sample_registry() -> Registry {
    let mut r = Registry::new();
    r.register("Ankara").unwrap();
    r.register("Bursa").unwrap();
    r.stock_package("P1", "Ankara").unwrap();
    r.stock_package("P2", "Ankara").unwrap();
    r.station_vehicle("V1", "Ankara", 10.0).unwrap();
    r.station_vehicle("V2", "Ankara", 20.0).unwrap();
    r
}

// ── Rows ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod row_tests {
    use super::*;
    use crate::row::{CityInventory, InventoryRow, ItemKind};

    #[test]
    fn inventory_in_pop_and_dequeue_order() {
        let r = sample_registry();
        let inv = CityInventory::from_city(r.get("Ankara").unwrap());
        assert_eq!(inv.city.as_str(), "Ankara");
        assert_eq!(inv.packages, ["P2", "P1"]);
        assert_eq!(inv.vehicles, ["V1", "V2"]);
    }

    #[test]
    fn rows_number_each_kind_from_zero() {
        let r = sample_registry();
        let inv = CityInventory::from_city(r.get("Ankara").unwrap());
        let rows: Vec<_> = inv.rows().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(
            rows[0],
            InventoryRow { city: "Ankara", kind: ItemKind::Package, position: 0, id: "P2" }
        );
        assert_eq!(
            rows[2],
            InventoryRow { city: "Ankara", kind: ItemKind::Vehicle, position: 0, id: "V1" }
        );
    }

    #[test]
    fn empty_city_has_no_rows() {
        let r = sample_registry();
        let inv = CityInventory::from_city(r.get("Bursa").unwrap());
        assert_eq!(inv.rows().count(), 0);
    }
}

// ── Text ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod text_tests {
    use super::*;
    use crate::text::TextWriter;
    use crate::writer::{InventoryWriter, write_registry};

    #[test]
    fn text_layout() {
        let r = sample_registry();
        let mut w = TextWriter::new(Vec::new());
        write_registry(&r, &mut w).unwrap();
        let text = String::from_utf8(w.into_inner()).unwrap();
        assert_eq!(
            text,
            "Ankara\nPackages:\nP2\nP1\nVehicles:\nV1\nV2\n-------------\n\
             Bursa\nPackages:\nVehicles:\n-------------\n"
        );
    }

    #[test]
    fn text_file_created() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("result.txt");
        let mut w = TextWriter::from_path(&path).unwrap();
        write_registry(&sample_registry(), &mut w).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Ankara\nPackages:\n"));
        assert_eq!(text.lines().filter(|l| *l == "-------------").count(), 2);
    }

    #[test]
    fn text_finish_idempotent() {
        let mut w = TextWriter::new(Vec::new());
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn writing_leaves_registry_untouched() {
        let r = sample_registry();
        let before = r.clone();
        let mut w = TextWriter::new(Vec::new());
        write_registry(&r, &mut w).unwrap();
        write_registry(&r, &mut TextWriter::new(Vec::new())).unwrap();
        assert!(r.iter().eq(before.iter()));
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::*;
    use crate::csv::CsvWriter;
    use crate::writer::{InventoryWriter, write_registry};

    #[test]
    fn csv_header_and_rows() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("result.csv");
        let mut w = CsvWriter::from_path(&path).unwrap();
        write_registry(&sample_registry(), &mut w).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["city", "kind", "position", "id"]);

        let rows: Vec<Vec<String>> = rdr
            .records()
            .map(|r| r.unwrap().iter().map(str::to_owned).collect())
            .collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], ["Ankara", "package", "0", "P2"]);
        assert_eq!(rows[1], ["Ankara", "package", "1", "P1"]);
        assert_eq!(rows[3], ["Ankara", "vehicle", "1", "V2"]);
    }

    #[test]
    fn csv_in_memory() {
        let mut w = CsvWriter::new(Vec::new()).unwrap();
        write_registry(&sample_registry(), &mut w).unwrap();
        let out = String::from_utf8(w.into_inner().unwrap()).unwrap();
        assert!(out.starts_with("city,kind,position,id\n"));
        assert!(out.contains("Ankara,vehicle,0,V1\n"));
        assert!(!out.contains("Bursa"));
    }

    #[test]
    fn csv_finish_idempotent() {
        let mut w = CsvWriter::new(Vec::new()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn boxed_writer_dispatches() {
        let mut w: Box<dyn InventoryWriter> = Box::new(CsvWriter::new(Vec::new()).unwrap());
        write_registry(&sample_registry(), &mut w).unwrap();
    }
}

// ── End to end ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod integration {
    use cd_core::{EngineConfig, Mission};
    use cd_mission::{NoopObserver, SimBuilder};

    use crate::text::TextWriter;
    use crate::writer::write_registry;

    #[test]
    fn mission_results_written_as_text() {
        let mut sim = SimBuilder::new(EngineConfig::default())
            .cities(vec!["X".into(), "Y".into(), "Z".into()])
            .packages(
                [("P1", "X"), ("P2", "X"), ("P3", "X"), ("Q1", "Y"), ("Q2", "Y")]
                    .into_iter()
                    .map(|(id, city)| cd_input::PackageRecord { id: id.into(), city: city.into() })
                    .collect(),
            )
            .vehicles(vec![cd_input::VehicleRecord { id: "V1".into(), city: "X".into(), volume: 5.0 }])
            .build()
            .unwrap();

        let missions = vec![Mission::new("X", "Y", "Z").loading(2, 1).dropping([0, 1])];
        let summary = sim.run(&missions, &mut NoopObserver);
        assert_eq!(summary.completed, 1);

        let mut w = TextWriter::new(Vec::new());
        write_registry(sim.registry(), &mut w).unwrap();
        let text = String::from_utf8(w.into_inner()).unwrap();
        assert_eq!(
            text,
            "X\nPackages:\nP1\nVehicles:\n-------------\n\
             Y\nPackages:\nQ2\nP2\nQ1\nVehicles:\n-------------\n\
             Z\nPackages:\nP3\nVehicles:\nV1\n-------------\n"
        );
    }
}

// ── SQLite ────────────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use super::*;
    use crate::sqlite::SqliteWriter;
    use crate::writer::{InventoryWriter, write_registry};

    #[test]
    fn sqlite_row_count_and_order() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("result.db");
        let mut w = SqliteWriter::new(&path).unwrap();
        write_registry(&sample_registry(), &mut w).unwrap();

        let conn = rusqlite::Connection::open(&path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM inventory", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 4);

        let top: String = conn
            .query_row(
                "SELECT id FROM inventory WHERE city = 'Ankara' AND kind = 'package' AND position = 0",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(top, "P2");
    }

    #[test]
    fn sqlite_reopen_replaces_rows() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("result.db");
        for _ in 0..2 {
            let mut w = SqliteWriter::new(&path).unwrap();
            write_registry(&sample_registry(), &mut w).unwrap();
        }
        let conn = rusqlite::Connection::open(&path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM inventory", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 4);
    }

    #[test]
    fn sqlite_finish_idempotent() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut w = SqliteWriter::new(&dir.path().join("result.db")).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}
