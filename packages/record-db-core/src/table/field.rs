//! Named, typed, single-valued field.

use crate::error::DbError;
use crate::types::{FieldType, Value};

/// Field holding one value of a fixed type.
///
/// # Invariants
///
/// - `value.field_type() == ty` at all times
/// - `name` and `ty` never change after construction
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: String,
    ty: FieldType,
    value: Value,
}

impl Field {
    /// Creates a new field after checking `value` against `ty`.
    ///
    /// # Arguments
    /// * `name` - Field name
    /// * `value` - Initial value
    /// * `ty` - Declared field type
    ///
    /// # Returns
    /// `Result<Field, DbError>` with `InvalidValue` on a shape mismatch.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<Value>,
        ty: FieldType,
    ) -> Result<Self, DbError> {
        let name = name.into();
        let value = ty.admit(&name, value.into())?;
        Ok(Self { name, ty, value })
    }

    /// Creates a new field from a textual type tag.
    ///
    /// Fails with `InvalidType` if `type_name` is not a known tag.
    pub fn with_type_name(
        name: impl Into<String>,
        value: impl Into<Value>,
        type_name: &str,
    ) -> Result<Self, DbError> {
        let ty = type_name.parse::<FieldType>()?;
        Self::new(name, value, ty)
    }

    /// Replaces the value, keeping the old one if `new_value` is rejected.
    pub fn update(&mut self, new_value: impl Into<Value>) -> Result<(), DbError> {
        self.value = self.ty.admit(&self.name, new_value.into())?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> FieldType {
        self.ty
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}
