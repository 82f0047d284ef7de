//! Field type tags and value admission.

use std::fmt;
use std::str::FromStr;

use super::Value;
use crate::error::DbError;

/// Field types supported by the store.
///
/// Each variant fixes the shape of the [`Value`] a field of that type holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Signed 64-bit integer
    Integer,
    /// 64-bit floating point number
    Real,
    /// Exactly one character
    Char,
    /// Arbitrary text
    String,
    /// Opaque path text, never checked against the filesystem
    FilePath,
    /// Pair of signed 64-bit integers, in either order
    IntegerInterval,
}

impl FieldType {
    /// All supported field types.
    pub const ALL: [FieldType; 6] = [
        FieldType::Integer,
        FieldType::Real,
        FieldType::Char,
        FieldType::String,
        FieldType::FilePath,
        FieldType::IntegerInterval,
    ];

    /// Returns the canonical tag used in snapshots and on the command line.
    pub fn tag(&self) -> &'static str {
        match self {
            FieldType::Integer => "integer",
            FieldType::Real => "real",
            FieldType::Char => "char",
            FieldType::String => "string",
            FieldType::FilePath => "file_path",
            FieldType::IntegerInterval => "integer_interval",
        }
    }

    /// Returns `true` if values of this type are stored as text.
    pub fn is_textual(&self) -> bool {
        matches!(self, FieldType::Char | FieldType::String | FieldType::FilePath)
    }

    /// Checks `value` against this type and returns the value to store.
    ///
    /// Textual values are interchangeable at this boundary: a `String`
    /// holding exactly one character is admitted into a `Char` field, and
    /// any text is admitted into `String` and `FilePath` fields. The
    /// returned value always carries this type's tag. Numeric and interval
    /// values must match exactly.
    ///
    /// # Arguments
    /// * `field` - Name of the field, used in the error message
    /// * `value` - Candidate value
    ///
    /// # Returns
    /// `Result<Value, DbError>` with the normalized value or `InvalidValue`.
    pub fn admit(&self, field: &str, value: Value) -> Result<Value, DbError> {
        let admitted = match (self, value) {
            (FieldType::Integer, v @ Value::Integer(_)) => v,
            (FieldType::Real, v @ Value::Real(_)) => v,
            (FieldType::IntegerInterval, v @ Value::IntegerInterval(_, _)) => v,
            (FieldType::Char, Value::Char(c)) => Value::Char(c),
            (FieldType::Char, Value::String(s) | Value::FilePath(s)) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Value::Char(c),
                    _ => {
                        return Err(DbError::InvalidValue {
                            field: field.to_string(),
                            expected: "a single character".to_string(),
                            got: format!("text of length {}", s.chars().count()),
                        })
                    }
                }
            }
            (FieldType::String, v) if v.field_type().is_textual() => {
                Value::String(v.into_text().unwrap_or_default())
            }
            (FieldType::FilePath, v) if v.field_type().is_textual() => {
                Value::FilePath(v.into_text().unwrap_or_default())
            }
            (_, other) => {
                return Err(DbError::InvalidValue {
                    field: field.to_string(),
                    expected: self.to_string(),
                    got: other.field_type().to_string(),
                })
            }
        };
        Ok(admitted)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FieldType {
    type Err = DbError;

    /// Parses a type tag. The short forms `file` and `integerInvl` are
    /// accepted alongside the canonical tags.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "integer" => Ok(FieldType::Integer),
            "real" => Ok(FieldType::Real),
            "char" => Ok(FieldType::Char),
            "string" => Ok(FieldType::String),
            "file_path" | "file" => Ok(FieldType::FilePath),
            "integer_interval" | "integerInvl" => Ok(FieldType::IntegerInterval),
            other => Err(DbError::InvalidType {
                type_name: other.to_string(),
            }),
        }
    }
}
