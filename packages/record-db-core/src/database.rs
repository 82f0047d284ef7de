//! Database container managing tables.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::config::StoreConfig;
use crate::error::DbError;
use crate::persistence::PersistenceManager;
use crate::table::{Field, Table};
use crate::types::Value;

/// Result of [`Database::intersect_tables`]: shared field name to the
/// values both tables hold under it.
pub type Intersection = BTreeMap<String, Vec<Value>>;

/// Named collection of tables.
///
/// A database has a single owner; it provides no internal locking. Wrap it
/// in a lock if it must be shared.
#[derive(Debug, Clone, PartialEq)]
pub struct Database {
    /// Database name
    name: String,
    /// Map of table name to table instance
    tables: HashMap<String, Table>,
}

impl Database {
    /// Creates a new empty database.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tables: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creates a new empty table.
    ///
    /// # Arguments
    /// * `name` - Table name
    ///
    /// # Returns
    /// `Result<(), DbError>` with `TableAlreadyExists` if the name is taken.
    pub fn create_table(&mut self, name: impl Into<String>) -> Result<(), DbError> {
        let name = name.into();
        if self.tables.contains_key(&name) {
            return Err(DbError::TableAlreadyExists(name));
        }
        tracing::debug!(database = %self.name, table = %name, "table created");
        self.tables.insert(name.clone(), Table::new(name));
        Ok(())
    }

    /// Inserts a fully built table, failing if the name is taken.
    pub(crate) fn insert_table(&mut self, table: Table) -> Result<(), DbError> {
        if self.tables.contains_key(table.name()) {
            return Err(DbError::TableAlreadyExists(table.name().to_string()));
        }
        self.tables.insert(table.name().to_string(), table);
        Ok(())
    }

    /// Deletes a table and all of its fields.
    pub fn delete_table(&mut self, name: &str) -> Result<(), DbError> {
        self.tables
            .remove(name)
            .ok_or_else(|| DbError::TableNotFound {
                table: name.to_string(),
            })?;
        tracing::debug!(database = %self.name, table = name, "table deleted");
        Ok(())
    }

    /// Gets a reference to a table by name.
    pub fn get_table(&self, name: &str) -> Result<&Table, DbError> {
        self.tables.get(name).ok_or_else(|| DbError::TableNotFound {
            table: name.to_string(),
        })
    }

    /// Gets a mutable reference to a table by name.
    pub fn get_table_mut(&mut self, name: &str) -> Result<&mut Table, DbError> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| DbError::TableNotFound {
                table: name.to_string(),
            })
    }

    /// Returns all table names in sorted order.
    pub fn table_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tables.keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns the number of tables in the database.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Iterates over all tables in unspecified order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    /// Adds a field to the named table.
    pub fn add_field(&mut self, table: &str, field: Field) -> Result<(), DbError> {
        self.get_table_mut(table)?.add_field(field)
    }

    /// Updates a field of the named table.
    pub fn update_field(
        &mut self,
        table: &str,
        field: &str,
        new_value: impl Into<Value>,
    ) -> Result<(), DbError> {
        self.get_table_mut(table)?.update_field(field, new_value)
    }

    /// Deletes a field of the named table.
    pub fn delete_field(&mut self, table: &str, field: &str) -> Result<(), DbError> {
        self.get_table_mut(table)?.delete_field(field).map(|_| ())
    }

    /// Returns the current value of every field in the named table.
    pub fn show_table(&self, name: &str) -> Result<BTreeMap<String, Value>, DbError> {
        Ok(self.get_table(name)?.snapshot())
    }

    /// Collects field names present in both tables with matching values.
    ///
    /// Each field holds a single value, so a shared name either matches with
    /// a one-element list or is left out. Values are compared with
    /// [`Value::matches`]: text kinds compare as text and integers compare
    /// numerically with reals. The listed value is the one from `name2`.
    ///
    /// # Arguments
    /// * `name1` - First table name
    /// * `name2` - Second table name
    ///
    /// # Returns
    /// `Result<Intersection, DbError>` with `TableNotFound` if either table
    /// is missing.
    pub fn intersect_tables(&self, name1: &str, name2: &str) -> Result<Intersection, DbError> {
        let table1 = self.get_table(name1)?;
        let table2 = self.get_table(name2)?;

        let common: Intersection = table1
            .fields()
            .filter_map(|field1| {
                let field2 = table2.get_field(field1.name())?;
                field1
                    .value()
                    .matches(field2.value())
                    .then(|| (field1.name().to_string(), vec![field2.value().clone()]))
            })
            .collect();

        tracing::debug!(
            table1 = name1,
            table2 = name2,
            matches = common.len(),
            "tables intersected"
        );
        Ok(common)
    }

    /// Writes the whole database to `path` using the default configuration.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DbError> {
        PersistenceManager::new(&StoreConfig::default()).save(self, path.as_ref())
    }

    /// Reads a database previously written by [`Database::save`].
    pub fn load(path: impl AsRef<Path>) -> Result<Database, DbError> {
        PersistenceManager::new(&StoreConfig::default()).load(path.as_ref())
    }
}
