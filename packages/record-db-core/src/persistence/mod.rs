//! Snapshot persistence for whole databases.
//!
//! A snapshot file is a fixed header followed by a JSON payload:
//!
//! | bytes | content                               |
//! |-------|---------------------------------------|
//! | 0..4  | magic `RCDB`                          |
//! | 4..8  | format version, u32 little endian     |
//! | 8..12 | CRC-32 of the payload, u32 little end |
//! | 12..  | JSON [`DatabaseSchema`]               |
//!
//! Tables and fields are written sorted by name, so saving the same
//! database twice yields identical bytes.


pub mod io_utils;
pub mod schema;

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crc32fast::Hasher;

use crate::config::StoreConfig;
use crate::database::Database;
use crate::error::DbError;
use crate::table::{Field, Table};
use crate::types::{FieldType, Value};

pub use io_utils::{classify_io_error, retry_io_operation};
pub use schema::{DatabaseSchema, FieldSchema, TableSchema};

/// Leading bytes of every snapshot file.
pub const SNAPSHOT_MAGIC: [u8; 4] = *b"RCDB";
/// Snapshot format version written by this crate.
pub const SNAPSHOT_VERSION: u32 = 1;
/// Size of the fixed header preceding the payload.
pub const HEADER_LEN: usize = 12;

/// Persistence manager for snapshot files.
#[derive(Debug, Clone)]
pub struct PersistenceManager {
    /// Maximum retry attempts for transient I/O errors
    max_retries: u32,
    /// Delay between retries in milliseconds
    retry_delay_ms: u64,
    /// Whether to fsync the temporary file before renaming it
    sync_on_save: bool,
}

impl PersistenceManager {
    /// Creates a new persistence manager with the given configuration.
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            max_retries: config.persistence_max_retries,
            retry_delay_ms: config.persistence_retry_delay_ms,
            sync_on_save: config.sync_on_save,
        }
    }

    /// Saves the database to `path`, replacing any existing file.
    ///
    /// The snapshot is written to a temporary sibling file which is then
    /// renamed over `path`, so an interrupted save leaves the previous
    /// snapshot intact.
    ///
    /// # Arguments
    /// * `db` - Database to save
    /// * `path` - Destination file
    ///
    /// # Returns
    /// `Result<(), DbError>` indicating success or an I/O failure.
    pub fn save(&self, db: &Database, path: &Path) -> Result<(), DbError> {
        let bytes = encode_snapshot(db)?;
        let temp_path = temp_path_for(path)?;

        retry_io_operation(
            || self.write_atomically(&bytes, &temp_path, path),
            self.max_retries,
            self.retry_delay_ms,
            "save snapshot",
        )?;

        tracing::info!(
            path = %path.display(),
            database = db.name(),
            tables = db.table_count(),
            bytes = bytes.len(),
            "database saved"
        );
        Ok(())
    }

    /// Loads a database from a snapshot file.
    ///
    /// # Arguments
    /// * `path` - Snapshot file
    ///
    /// # Returns
    /// `Result<Database, DbError>` with an I/O failure if the file cannot be
    /// read, or `DataCorruption` if its contents are not a valid snapshot.
    pub fn load(&self, path: &Path) -> Result<Database, DbError> {
        let bytes = retry_io_operation(
            || {
                fs::read(path).map_err(|e| {
                    classify_io_error(e, &format!("Failed to read {}", path.display()))
                })
            },
            self.max_retries,
            self.retry_delay_ms,
            "load snapshot",
        )?;

        let db = decode_snapshot(&bytes)?;
        tracing::info!(
            path = %path.display(),
            database = db.name(),
            tables = db.table_count(),
            bytes = bytes.len(),
            "database loaded"
        );
        Ok(db)
    }

    fn write_atomically(
        &self,
        bytes: &[u8],
        temp_path: &Path,
        path: &Path,
    ) -> Result<(), DbError> {
        let result = self.write_temp(bytes, temp_path).and_then(|()| {
            fs::rename(temp_path, path)
                .map_err(|e| classify_io_error(e, "Failed to rename snapshot file"))
        });
        if result.is_err() {
            // Best-effort removal of the partial temp file.
            let _ = fs::remove_file(temp_path);
        }
        result
    }

    fn write_temp(&self, bytes: &[u8], temp_path: &Path) -> Result<(), DbError> {
        let mut file = File::create(temp_path)
            .map_err(|e| classify_io_error(e, "Failed to create temp file"))?;
        file.write_all(bytes)
            .map_err(|e| classify_io_error(e, "Failed to write snapshot"))?;
        if self.sync_on_save {
            file.sync_all()
                .map_err(|e| classify_io_error(e, "Failed to sync snapshot"))?;
        }
        Ok(())
    }
}

impl Default for PersistenceManager {
    fn default() -> Self {
        Self::new(&StoreConfig::default())
    }
}

/// Encodes a database into snapshot bytes (header and payload).
pub fn encode_snapshot(db: &Database) -> Result<Vec<u8>, DbError> {
    let schema = build_schema(db);
    let payload = serde_json::to_vec(&schema)
        .map_err(|e| DbError::IoError(format!("Failed to encode snapshot: {}", e)))?;

    let mut hasher = Hasher::new();
    hasher.update(&payload);
    let checksum = hasher.finalize();

    let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len());
    bytes.extend_from_slice(&SNAPSHOT_MAGIC);
    bytes.extend_from_slice(&SNAPSHOT_VERSION.to_le_bytes());
    bytes.extend_from_slice(&checksum.to_le_bytes());
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

/// Decodes snapshot bytes into a fully validated database.
///
/// Every failure other than I/O is reported as `DataCorruption`.
pub fn decode_snapshot(bytes: &[u8]) -> Result<Database, DbError> {
    if bytes.len() < HEADER_LEN {
        return Err(DbError::DataCorruption(format!(
            "Snapshot too short: {} bytes",
            bytes.len()
        )));
    }
    let (header, payload) = bytes.split_at(HEADER_LEN);

    if header[0..4] != SNAPSHOT_MAGIC {
        return Err(DbError::DataCorruption(
            "Missing snapshot magic bytes".to_string(),
        ));
    }

    let version = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);
    if version != SNAPSHOT_VERSION {
        return Err(DbError::DataCorruption(format!(
            "Unsupported snapshot version: {}",
            version
        )));
    }

    let expected = u32::from_le_bytes([header[8], header[9], header[10], header[11]]);
    let mut hasher = Hasher::new();
    hasher.update(payload);
    let actual = hasher.finalize();
    if actual != expected {
        return Err(DbError::DataCorruption(format!(
            "Checksum mismatch: expected {:08x}, got {:08x}",
            expected, actual
        )));
    }

    let schema: DatabaseSchema = serde_json::from_slice(payload)
        .map_err(|e| DbError::DataCorruption(format!("Failed to parse snapshot: {}", e)))?;

    build_database(schema)
}

fn temp_path_for(path: &Path) -> Result<PathBuf, DbError> {
    let file_name = path.file_name().ok_or_else(|| {
        DbError::IoError(format!("Invalid snapshot path: {}", path.display()))
    })?;
    let mut temp_name = file_name.to_os_string();
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}

fn build_schema(db: &Database) -> DatabaseSchema {
    let mut tables: Vec<TableSchema> = db
        .tables()
        .map(|table| {
            let mut fields: Vec<FieldSchema> = table
                .fields()
                .map(|field| FieldSchema {
                    name: field.name().to_string(),
                    r#type: field.field_type().tag().to_string(),
                    value: encode_value(field.value()),
                })
                .collect();
            fields.sort_by(|a, b| a.name.cmp(&b.name));
            TableSchema {
                name: table.name().to_string(),
                fields,
            }
        })
        .collect();
    tables.sort_by(|a, b| a.name.cmp(&b.name));

    DatabaseSchema {
        name: db.name().to_string(),
        tables,
    }
}

fn build_database(schema: DatabaseSchema) -> Result<Database, DbError> {
    let mut db = Database::new(schema.name);

    for table_schema in schema.tables {
        let mut table = Table::new(table_schema.name);

        for field_schema in table_schema.fields {
            let field = build_field(table.name(), field_schema)?;
            table.add_field(field).map_err(corruption)?;
        }

        db.insert_table(table).map_err(corruption)?;
    }

    Ok(db)
}

fn build_field(table: &str, field_schema: FieldSchema) -> Result<Field, DbError> {
    let ty = field_schema
        .r#type
        .parse::<FieldType>()
        .map_err(corruption)?;
    let value = decode_value(ty, &field_schema.value).ok_or_else(|| {
        DbError::DataCorruption(format!(
            "Field '{}' in table '{}' does not hold a valid {} value",
            field_schema.name, table, ty
        ))
    })?;
    Field::new(field_schema.name, value, ty).map_err(corruption)
}

fn corruption(err: DbError) -> DbError {
    DbError::DataCorruption(err.to_string())
}

fn encode_value(value: &Value) -> serde_json::Value {
    match value {
        Value::Integer(i) => serde_json::Value::from(*i),
        // Debug formatting round-trips exactly, including NaN and infinities.
        Value::Real(r) => serde_json::Value::String(format!("{:?}", r)),
        Value::Char(c) => serde_json::Value::String(c.to_string()),
        Value::String(s) | Value::FilePath(s) => serde_json::Value::String(s.clone()),
        Value::IntegerInterval(a, b) => serde_json::Value::from(vec![*a, *b]),
    }
}

fn decode_value(ty: FieldType, raw: &serde_json::Value) -> Option<Value> {
    match ty {
        FieldType::Integer => raw.as_i64().map(Value::Integer),
        FieldType::Real => raw.as_str()?.parse::<f64>().ok().map(Value::Real),
        FieldType::Char => {
            let mut chars = raw.as_str()?.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(Value::Char(c)),
                _ => None,
            }
        }
        FieldType::String => raw.as_str().map(|s| Value::String(s.to_string())),
        FieldType::FilePath => raw.as_str().map(|s| Value::FilePath(s.to_string())),
        FieldType::IntegerInterval => match raw.as_array()?.as_slice() {
            [a, b] => Some(Value::IntegerInterval(a.as_i64()?, b.as_i64()?)),
            _ => None,
        },
    }
}
