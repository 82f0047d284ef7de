//! Store configuration.

/// Persistence configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Maximum retry attempts for transient I/O errors
    pub persistence_max_retries: u32,
    /// Delay between retry attempts in milliseconds
    pub persistence_retry_delay_ms: u64,
    /// Flush the snapshot to stable storage before it replaces the old one
    pub sync_on_save: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            persistence_max_retries: 3,      // Default retry attempts
            persistence_retry_delay_ms: 100, // 100ms delay between retries
            sync_on_save: true,
        }
    }
}
