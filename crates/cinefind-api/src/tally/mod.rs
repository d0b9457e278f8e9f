//! Search tally store: how often each query was searched.
//!
//! One entry per normalized query text. Recording a search increments the
//! counter of the existing entry (refreshing its movie snapshot) or seeds a
//! new entry with count 1. Trending lists are the top entries by count.
//!
//! Backends:
//! - [`MemoryTallyStore`] - in-process key-value map
//! - [`AppwriteTallyStore`] - Appwrite Databases REST API

mod appwrite;
mod memory;

pub use appwrite::{AppwriteConfig, AppwriteTallyStore};
pub use memory::{MemoryTallyStore, TallyRecord};

use cinefind_core::prelude::*;
use cinefind_core::{MovieSummary, TallyEntry};

/// Default number of entries in the trending panel
pub const DEFAULT_TRENDING_LIMIT: usize = 5;

/// Persistent per-query search counters
///
/// Errors are returned to the caller untouched; deciding whether a failure
/// matters is the caller's job.
#[trait_variant::make(TallyStore: Send)]
pub trait LocalTallyStore {
    /// Increment-or-insert the entry for `query`, associating it with `movie`
    async fn record_search(&self, query: &str, movie: &MovieSummary) -> Result<TallyEntry>;

    /// Up to `limit` entries ordered by count descending
    async fn top_searches(&self, limit: usize) -> Result<Vec<TallyEntry>>;
}

/// Tally backend selected by configuration
#[derive(Debug)]
pub enum TallyBackend {
    Memory(MemoryTallyStore),
    Appwrite(AppwriteTallyStore),
}

impl TallyBackend {
    pub fn name(&self) -> &'static str {
        match self {
            TallyBackend::Memory(_) => "memory",
            TallyBackend::Appwrite(_) => "appwrite",
        }
    }
}

impl TallyStore for TallyBackend {
    async fn record_search(&self, query: &str, movie: &MovieSummary) -> Result<TallyEntry> {
        match self {
            TallyBackend::Memory(store) => TallyStore::record_search(store, query, movie).await,
            TallyBackend::Appwrite(store) => TallyStore::record_search(store, query, movie).await,
        }
    }

    async fn top_searches(&self, limit: usize) -> Result<Vec<TallyEntry>> {
        match self {
            TallyBackend::Memory(store) => TallyStore::top_searches(store, limit).await,
            TallyBackend::Appwrite(store) => TallyStore::top_searches(store, limit).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_backend_dispatches_to_memory() {
        let backend = TallyBackend::Memory(MemoryTallyStore::new("https://img"));
        assert_eq!(backend.name(), "memory");

        TallyStore::record_search(&backend, "Dune", &MovieSummary::new(438631, "Dune"))
            .await
            .unwrap();
        let top = TallyStore::top_searches(&backend, DEFAULT_TRENDING_LIMIT)
            .await
            .unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].query, "dune");
    }
}
