//! Field types and typed values.
//!
//! [`FieldType`] is the closed set of kinds a field may be declared with and
//! [`Value`] is the matching tagged payload. A field only ever stores a value
//! whose [`Value::field_type`] equals its declared type.

mod field_type;
mod value;

pub use field_type::FieldType;
pub use value::Value;
