//! Table and field CRUD through the database.

use ntest::timeout;
use record_db_core::{Database, DbError, ErrorKind, Field, FieldType, Value};

use crate::helpers::{one_of_each_type, populated_database};

#[timeout(1000)]
#[test]
fn test_every_type_stores_exact_value() {
    let db = populated_database();
    let shown = db.show_table("people").unwrap();
    assert_eq!(shown.len(), 6);
    for (name, _, value) in one_of_each_type() {
        assert_eq!(shown[name], value, "field {}", name);
    }
}

#[timeout(1000)]
#[test]
fn test_create_duplicate_table_keeps_count() {
    let mut db = Database::new("db");
    db.create_table("X").unwrap();
    let err = db.create_table("X").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateName);
    assert_eq!(db.table_count(), 1);
}

#[timeout(1000)]
#[test]
fn test_delete_never_created_table() {
    let mut db = Database::new("db");
    let err = db.delete_table("X").unwrap_err();
    assert_eq!(
        err,
        DbError::TableNotFound {
            table: "X".to_string()
        }
    );
}

#[timeout(1000)]
#[test]
fn test_update_with_wrong_shape_keeps_prior_value() {
    let mut db = populated_database();
    let err = db.update_field("people", "age", "abc").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
    assert_eq!(db.show_table("people").unwrap()["age"], Value::Integer(37));

    db.update_field("people", "age", 38_i64).unwrap();
    assert_eq!(db.show_table("people").unwrap()["age"], Value::Integer(38));
}

#[timeout(1000)]
#[test]
fn test_add_duplicate_field_keeps_existing_value() {
    let mut db = populated_database();
    let err = db
        .add_field("people", Field::new("age", 99_i64, FieldType::Integer).unwrap())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateName);
    assert_eq!(db.show_table("people").unwrap()["age"], Value::Integer(37));
}

#[timeout(1000)]
#[test]
fn test_delete_field_then_readd_with_new_type() {
    let mut db = populated_database();
    db.delete_field("people", "age").unwrap();
    assert!(!db.show_table("people").unwrap().contains_key("age"));

    db.add_field("people", Field::new("age", "unknown", FieldType::String).unwrap())
        .unwrap();
    assert_eq!(
        db.show_table("people").unwrap()["age"],
        Value::String("unknown".to_string())
    );

    let err = db.delete_field("people", "nope").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[timeout(1000)]
#[test]
fn test_table_access_by_reference() {
    let mut db = populated_database();
    {
        let table = db.get_table_mut("audit").unwrap();
        table
            .add_field(Field::new("last_run", (0_i64, 5_i64), FieldType::IntegerInterval).unwrap())
            .unwrap();
    }
    let table = db.get_table("audit").unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(db.table_names(), vec!["audit", "people"]);
    assert_eq!(db.get_table("ghost").unwrap_err().kind(), ErrorKind::NotFound);
}
