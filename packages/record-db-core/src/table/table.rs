//! Table of uniquely named fields.

use std::collections::{BTreeMap, HashMap};

use crate::error::DbError;
use crate::types::Value;

use super::field::Field;

/// Named collection of fields keyed by field name.
///
/// Field iteration order carries no meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Table name
    name: String,
    /// Fields keyed by their name
    fields: HashMap<String, Field>,
}

impl Table {
    /// Creates an empty table.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a field, failing if one with the same name is already present.
    pub fn add_field(&mut self, field: Field) -> Result<(), DbError> {
        if self.fields.contains_key(field.name()) {
            return Err(DbError::FieldAlreadyExists {
                table: self.name.clone(),
                field: field.name().to_string(),
            });
        }
        tracing::debug!(
            table = %self.name,
            field = field.name(),
            ty = %field.field_type(),
            "field added"
        );
        self.fields.insert(field.name().to_string(), field);
        Ok(())
    }

    /// Updates the value of an existing field.
    ///
    /// # Arguments
    /// * `name` - Field name
    /// * `new_value` - Replacement value, checked against the field's type
    ///
    /// # Returns
    /// `Result<(), DbError>` with `FieldNotFound` or `InvalidValue` on failure.
    pub fn update_field(
        &mut self,
        name: &str,
        new_value: impl Into<Value>,
    ) -> Result<(), DbError> {
        let field = self
            .fields
            .get_mut(name)
            .ok_or_else(|| DbError::FieldNotFound {
                table: self.name.clone(),
                field: name.to_string(),
            })?;
        field.update(new_value)?;
        tracing::debug!(table = %self.name, field = name, "field updated");
        Ok(())
    }

    /// Removes a field by name.
    pub fn delete_field(&mut self, name: &str) -> Result<Field, DbError> {
        let field = self
            .fields
            .remove(name)
            .ok_or_else(|| DbError::FieldNotFound {
                table: self.name.clone(),
                field: name.to_string(),
            })?;
        tracing::debug!(table = %self.name, field = name, "field deleted");
        Ok(field)
    }

    /// Returns the field with the given name, if any.
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns all field names in sorted order.
    pub fn field_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.fields.keys().cloned().collect();
        names.sort();
        names
    }

    /// Iterates over all fields in unspecified order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns a copy of every field's current value keyed by field name.
    pub fn snapshot(&self) -> BTreeMap<String, Value> {
        self.fields
            .iter()
            .map(|(name, field)| (name.clone(), field.value().clone()))
            .collect()
    }
}
