//! Minimal in-process record store.
//!
//! A [`Database`](database::Database) owns named tables, each table owns
//! uniquely named fields holding one strongly typed value. The whole
//! database can be written to a checksummed snapshot file and restored.

pub mod config;
pub mod database;
pub mod error;
pub mod persistence;
pub mod table;
pub mod types;

pub use database::{Database, Intersection};
pub use error::{DbError, DbResult, ErrorKind};
pub use table::{Field, Table};
pub use types::{FieldType, Value};
