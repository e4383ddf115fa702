//! Recently-visited companies registry for Taqyeem.
//!
//! Implements `RecentCompaniesTrait` — a bounded, deduplicated,
//! recency-ordered list of visited companies with change subscriptions,
//! backed by a durable `RecentStore`.

use tracing::warn;

use crate::managers::recent_store::RecentStore;
use crate::types::company::CompanyDescriptor;
use crate::types::errors::RegistryError;

/// Default maximum length of the recent list.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Callback invoked with the updated list after every registry mutation.
pub type RecentListener = Box<dyn Fn(&[CompanyDescriptor])>;

/// Trait defining the recently-visited registry operations.
pub trait RecentCompaniesTrait {
    fn add_company(&mut self, descriptor: CompanyDescriptor) -> Result<(), RegistryError>;
    fn get_list(&self) -> Vec<CompanyDescriptor>;
    fn clear(&mut self);
    fn subscribe(&mut self, listener: RecentListener) -> u64;
    fn unsubscribe(&mut self, token: u64) -> bool;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
    fn limit(&self) -> usize;
    fn persist_failures(&self) -> u64;
}

/// Registry owning the in-memory recent list.
///
/// The in-memory state is authoritative; the store is written best-effort
/// after every mutation and a failed write never propagates to the caller.
pub struct RecentCompanies {
    entries: Vec<CompanyDescriptor>,
    limit: usize,
    store: Box<dyn RecentStore>,
    subscribers: Vec<(u64, RecentListener)>,
    next_token: u64,
    persist_failures: u64,
}

impl RecentCompanies {
    /// Creates a registry with the default limit, loading prior state from the store.
    pub fn new(store: Box<dyn RecentStore>) -> Self {
        Self::with_limit(store, DEFAULT_RECENT_LIMIT)
    }

    /// Creates a registry bounded to `limit` entries.
    ///
    /// State loaded from the store is trimmed to `limit` immediately, so a
    /// lowered limit takes effect on the persisted tail as well.
    pub fn with_limit(store: Box<dyn RecentStore>, limit: usize) -> Self {
        let mut entries = store.load();
        entries.truncate(limit);
        Self {
            entries,
            limit,
            store,
            subscribers: Vec::new(),
            next_token: 1,
            persist_failures: 0,
        }
    }

    /// Validates a descriptor against the data model.
    ///
    /// The id must be non-blank and the rating a finite number in [0, 5].
    fn validate(descriptor: &CompanyDescriptor) -> Result<(), RegistryError> {
        if descriptor.id.trim().is_empty() {
            return Err(RegistryError::InvalidDescriptor(
                "company id must be non-empty".to_string(),
            ));
        }
        if !descriptor.rating.is_finite() || !(0.0..=5.0).contains(&descriptor.rating) {
            return Err(RegistryError::InvalidDescriptor(format!(
                "rating {} outside [0, 5]",
                descriptor.rating
            )));
        }
        Ok(())
    }

    /// One best-effort persistence attempt. Failure is logged and counted,
    /// never retried or propagated; the in-memory list stays authoritative.
    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.entries) {
            self.persist_failures += 1;
            warn!(error = %e, failures = self.persist_failures, "recent list not persisted");
        }
    }

    fn notify(&self) {
        for (_, listener) in &self.subscribers {
            listener(&self.entries);
        }
    }

    /// Writes the current list to the store without mutating it.
    /// Used by the application shutdown sequence.
    pub fn flush(&mut self) {
        self.persist();
    }
}

impl RecentCompaniesTrait for RecentCompanies {
    /// Records a company visit.
    ///
    /// If an entry with the same id already exists it is removed from its
    /// current position; the (possibly refreshed) descriptor is inserted at
    /// index 0 and the list is trimmed to the limit. Idempotent under
    /// immediate repetition with an identical descriptor.
    fn add_company(&mut self, descriptor: CompanyDescriptor) -> Result<(), RegistryError> {
        Self::validate(&descriptor)?;

        if let Some(pos) = self.entries.iter().position(|e| e.id == descriptor.id) {
            self.entries.remove(pos);
        }
        self.entries.insert(0, descriptor);
        self.entries.truncate(self.limit);

        self.persist();
        self.notify();
        Ok(())
    }

    /// Returns a snapshot of the list, most recently visited first.
    /// Caller mutation of the returned vector does not affect the registry.
    fn get_list(&self) -> Vec<CompanyDescriptor> {
        self.entries.clone()
    }

    /// Empties the list and persists the empty state.
    fn clear(&mut self) {
        self.entries.clear();
        self.persist();
        self.notify();
    }

    /// Registers a change listener. Returns a token for `unsubscribe`.
    fn subscribe(&mut self, listener: RecentListener) -> u64 {
        let token = self.next_token;
        self.next_token += 1;
        self.subscribers.push((token, listener));
        token
    }

    /// Removes a previously registered listener. Returns false for an
    /// unknown token.
    fn unsubscribe(&mut self, token: u64) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(t, _)| *t != token);
        self.subscribers.len() != before
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn limit(&self) -> usize {
        self.limit
    }

    /// Number of failed persistence attempts this session.
    fn persist_failures(&self) -> u64 {
        self.persist_failures
    }
}
