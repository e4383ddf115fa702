//! Durable store for the recently-visited companies list.
//!
//! Defines the `RecentStore` boundary and its SQLite implementation,
//! which keeps the whole list as one JSON document in the `kv_store`
//! table, scoped per profile via the storage key.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::params;
use tracing::warn;

use crate::database::connection::Database;
use crate::types::company::CompanyDescriptor;
use crate::types::errors::StoreError;

/// Storage key for the default (single-profile) recent list.
const DEFAULT_STORE_KEY: &str = "recent_companies";

/// Trait defining the durable store boundary for the recent list.
///
/// Implementations are best-effort: `load` never fails (absent or corrupt
/// data is treated as an empty list) and `save` makes a single attempt.
pub trait RecentStore {
    fn load(&self) -> Vec<CompanyDescriptor>;
    fn save(&self, list: &[CompanyDescriptor]) -> Result<(), StoreError>;
}

/// SQLite-backed store keeping the list as a JSON array in `kv_store`.
pub struct SqliteRecentStore {
    db: Arc<Database>,
    key: String,
}

impl SqliteRecentStore {
    /// Creates a store over the default profile key.
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            db,
            key: DEFAULT_STORE_KEY.to_string(),
        }
    }

    /// Creates a store scoped to the given profile.
    ///
    /// Each profile gets its own `kv_store` row, so recent lists of
    /// different users on the same database never mix.
    pub fn for_profile(db: Arc<Database>, profile: &str) -> Self {
        Self {
            db,
            key: format!("{}:{}", DEFAULT_STORE_KEY, profile),
        }
    }

    /// Returns the storage key this store reads and writes.
    pub fn key(&self) -> &str {
        &self.key
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

impl RecentStore for SqliteRecentStore {
    /// Loads the persisted list.
    ///
    /// Returns an empty list when no prior state exists or when the stored
    /// document fails to parse — corrupt data is treated as absent, never
    /// surfaced as an error to the caller.
    fn load(&self) -> Vec<CompanyDescriptor> {
        let conn = self.db.connection();

        let raw: Option<String> = match conn.query_row(
            "SELECT value FROM kv_store WHERE key = ?1",
            params![self.key],
            |row| row.get(0),
        ) {
            Ok(value) => Some(value),
            Err(rusqlite::Error::QueryReturnedNoRows) => None,
            Err(e) => {
                warn!(key = %self.key, error = %e, "recent list read failed, starting empty");
                None
            }
        };

        match raw {
            Some(json) => match serde_json::from_str(&json) {
                Ok(list) => list,
                Err(e) => {
                    warn!(key = %self.key, error = %e, "recent list corrupt, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        }
    }

    /// Persists the list as one JSON document. Single attempt, no retry.
    fn save(&self, list: &[CompanyDescriptor]) -> Result<(), StoreError> {
        let json = serde_json::to_string(list)
            .map_err(|e| StoreError::PersistenceFailed(e.to_string()))?;

        self.db
            .connection()
            .execute(
                "INSERT OR REPLACE INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)",
                params![self.key, json, Self::now()],
            )
            .map_err(|e| StoreError::PersistenceFailed(e.to_string()))?;

        Ok(())
    }
}
