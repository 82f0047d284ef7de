//! Intersection scenarios across tables.

use ntest::timeout;
use record_db_core::{Database, ErrorKind, Field, FieldType, Intersection, Value};

fn two_tables() -> Database {
    let mut db = Database::new("TestDB");
    db.create_table("Table1").unwrap();
    db.create_table("Table2").unwrap();
    db.add_field("Table1", Field::new("id", 1_i64, FieldType::Integer).unwrap())
        .unwrap();
    db.add_field("Table1", Field::new("name", "Alice", FieldType::String).unwrap())
        .unwrap();
    db.add_field("Table2", Field::new("id", 1_i64, FieldType::Integer).unwrap())
        .unwrap();
    db.add_field("Table2", Field::new("name", "Bob", FieldType::String).unwrap())
        .unwrap();
    db
}

#[timeout(1000)]
#[test]
fn test_only_equal_shared_fields_match() {
    let db = two_tables();
    let result = db.intersect_tables("Table1", "Table2").unwrap();

    let mut expected = Intersection::new();
    expected.insert("id".to_string(), vec![Value::Integer(1)]);
    assert_eq!(result, expected);
    assert!(!result.contains_key("name"));
}

#[timeout(1000)]
#[test]
fn test_intersection_is_symmetric() {
    let db = two_tables();
    assert_eq!(
        db.intersect_tables("Table1", "Table2").unwrap(),
        db.intersect_tables("Table2", "Table1").unwrap()
    );
}

#[timeout(1000)]
#[test]
fn test_intersection_tracks_updates() {
    let mut db = two_tables();
    db.update_field("Table2", "name", "Alice").unwrap();
    let result = db.intersect_tables("Table1", "Table2").unwrap();
    assert_eq!(result.len(), 2);
    assert_eq!(result["name"], vec![Value::String("Alice".to_string())]);

    db.delete_field("Table1", "id").unwrap();
    let result = db.intersect_tables("Table1", "Table2").unwrap();
    assert_eq!(result.len(), 1);
}

#[timeout(1000)]
#[test]
fn test_interval_intersection_respects_order() {
    let mut db = Database::new("db");
    db.create_table("a").unwrap();
    db.create_table("b").unwrap();
    db.add_field("a", Field::new("r", (1_i64, 2_i64), FieldType::IntegerInterval).unwrap())
        .unwrap();
    db.add_field("b", Field::new("r", (2_i64, 1_i64), FieldType::IntegerInterval).unwrap())
        .unwrap();
    assert!(db.intersect_tables("a", "b").unwrap().is_empty());

    db.update_field("b", "r", (1_i64, 2_i64)).unwrap();
    assert_eq!(
        db.intersect_tables("a", "b").unwrap()["r"],
        vec![Value::IntegerInterval(1, 2)]
    );
}

#[timeout(1000)]
#[test]
fn test_intersection_with_missing_table() {
    let db = two_tables();
    let err = db.intersect_tables("Table1", "NonExistentTable").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[timeout(1000)]
#[test]
fn test_intersection_of_empty_tables() {
    let mut db = Database::new("db");
    db.create_table("a").unwrap();
    db.create_table("b").unwrap();
    assert!(db.intersect_tables("a", "b").unwrap().is_empty());
}

#[timeout(1000)]
#[test]
fn test_text_and_numeric_kinds_match_across_types() {
    let mut db = Database::new("db");
    db.create_table("left").unwrap();
    db.create_table("right").unwrap();
    db.add_field("left", Field::new("c", 'x', FieldType::Char).unwrap())
        .unwrap();
    db.add_field("left", Field::new("p", "/tmp", FieldType::String).unwrap())
        .unwrap();
    db.add_field("left", Field::new("n", 1_i64, FieldType::Integer).unwrap())
        .unwrap();
    db.add_field("right", Field::new("c", "x", FieldType::String).unwrap())
        .unwrap();
    db.add_field("right", Field::new("p", "/tmp", FieldType::FilePath).unwrap())
        .unwrap();
    db.add_field("right", Field::new("n", 1.0, FieldType::Real).unwrap())
        .unwrap();

    let result = db.intersect_tables("left", "right").unwrap();
    assert_eq!(result.len(), 3);
    assert_eq!(result["c"], vec![Value::String("x".to_string())]);
    assert_eq!(result["p"], vec![Value::FilePath("/tmp".to_string())]);
    assert_eq!(result["n"], vec![Value::Real(1.0)]);

    let reversed = db.intersect_tables("right", "left").unwrap();
    assert_eq!(reversed["c"], vec![Value::Char('x')]);
    assert_eq!(reversed["n"], vec![Value::Integer(1)]);
}
