//! Schema structs for persistence.

use serde::{Deserialize, Serialize};

/// Snapshot payload: the database with every table and field.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseSchema {
    /// Database name
    pub name: String,
    /// Tables sorted by name
    pub tables: Vec<TableSchema>,
}

/// Table schema for persistence.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableSchema {
    /// Table name
    pub name: String,
    /// Fields sorted by name
    pub fields: Vec<FieldSchema>,
}

/// Field schema for persistence.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSchema {
    /// Field name
    pub name: String,
    /// Type tag
    pub r#type: String,
    /// Encoded value, shape determined by `type`
    pub value: serde_json::Value,
}
