//! Save/load round trips through the public API.

use ntest::timeout;
use tempfile::tempdir;

use record_db_core::config::StoreConfig;
use record_db_core::persistence::PersistenceManager;
use record_db_core::{Database, ErrorKind};

use crate::helpers::populated_database;

#[timeout(2000)]
#[test]
fn test_round_trip_matches_every_table() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("company.db");
    let db = populated_database();

    db.save(&path).unwrap();
    let loaded = Database::load(&path).unwrap();

    assert_eq!(loaded.name(), db.name());
    assert_eq!(loaded.table_names(), db.table_names());
    for table in db.table_names() {
        assert_eq!(loaded.show_table(&table).unwrap(), db.show_table(&table).unwrap());
    }
    assert_eq!(
        loaded.intersect_tables("people", "people").unwrap(),
        db.intersect_tables("people", "people").unwrap()
    );
}

#[timeout(2000)]
#[test]
fn test_failed_load_leaves_current_database_untouched() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("garbage.db");
    std::fs::write(&path, b"RCDB this is not a snapshot").unwrap();

    let db = populated_database();
    let err = Database::load(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CorruptData);

    assert_eq!(db.table_count(), 2);
    assert_eq!(db.show_table("people").unwrap().len(), 6);
}

#[timeout(2000)]
#[test]
fn test_save_load_save_is_stable() {
    let temp_dir = tempdir().unwrap();
    let first = temp_dir.path().join("first.db");
    let second = temp_dir.path().join("second.db");
    let persistence = PersistenceManager::new(&StoreConfig::default());

    persistence.save(&populated_database(), &first).unwrap();
    let loaded = persistence.load(&first).unwrap();
    persistence.save(&loaded, &second).unwrap();

    assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());
}
