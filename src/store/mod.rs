//! Key-value persistence for completed analyses and bookings.
//!
//! Storage is an injected capability (`KvStore`), never ambient state:
//! the production server hands components a SQLite-backed store, tests
//! hand them an in-memory one. Each well-known slot has a fixed key.

pub mod memory;
pub mod results;
pub mod sqlite;

pub use memory::MemoryStore;
pub use results::ResultStore;
pub use sqlite::SqliteStore;

use thiserror::Error;

/// Storage slot for the latest completed analysis snapshot.
/// Overwritten by each new completed conversation.
pub const ANALYSIS_KEY: &str = "symptom_analysis";

/// Storage slot for the booking list. Distinct from the analysis slot;
/// appointments never touch `ANALYSIS_KEY`.
pub const APPOINTMENTS_KEY: &str = "appointments";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}

/// Minimal get/set key-value capability.
///
/// Values are opaque strings; callers own the (de)serialization. A `set`
/// on an existing key overwrites it.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Shared contract exercised against both implementations.
    fn exercise_store(store: &dyn KvStore) {
        assert!(store.get("missing").unwrap().is_none());

        store.set("slot", "first").unwrap();
        assert_eq!(store.get("slot").unwrap().as_deref(), Some("first"));

        // Overwrite semantics
        store.set("slot", "second").unwrap();
        assert_eq!(store.get("slot").unwrap().as_deref(), Some("second"));

        // Keys are independent
        store.set("other", "value").unwrap();
        assert_eq!(store.get("slot").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn memory_store_contract() {
        exercise_store(&MemoryStore::new());
    }

    #[test]
    fn sqlite_store_contract() {
        exercise_store(&SqliteStore::open_in_memory().unwrap());
    }

    #[test]
    fn fixed_keys_are_distinct() {
        assert_ne!(ANALYSIS_KEY, APPOINTMENTS_KEY);
    }
}
