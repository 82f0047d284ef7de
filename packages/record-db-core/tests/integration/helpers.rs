//! Shared fixtures for integration tests.

use record_db_core::{Database, Field, FieldType, Value};

/// One sample value per field type.
pub fn one_of_each_type() -> Vec<(&'static str, FieldType, Value)> {
    vec![
        ("age", FieldType::Integer, Value::Integer(37)),
        ("height", FieldType::Real, Value::Real(1.82)),
        ("initial", FieldType::Char, Value::Char('J')),
        ("full_name", FieldType::String, Value::String("Jane Doe".into())),
        ("avatar", FieldType::FilePath, Value::FilePath("img/jane.png".into())),
        ("shift", FieldType::IntegerInterval, Value::IntegerInterval(9, 17)),
    ]
}

/// Builds a database with a `people` table holding one field of every type
/// and an empty `audit` table.
pub fn populated_database() -> Database {
    let mut db = Database::new("company");
    db.create_table("people").unwrap();
    db.create_table("audit").unwrap();
    for (name, ty, value) in one_of_each_type() {
        db.add_field("people", Field::new(name, value, ty).unwrap())
            .unwrap();
    }
    db
}
