//! Test utilities for catalog and tally clients
//!
//! Provides in-process fakes for [`MovieCatalog`] and [`TallyStore`] that
//! record every call, plus helpers for building test movies.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use cinefind_core::prelude::*;
use cinefind_core::{MovieSummary, TallyEntry};

use crate::catalog::{CatalogPage, CatalogRequest, MovieCatalog, DEFAULT_IMAGE_BASE_URL};
use crate::tally::{MemoryTallyStore, TallyStore};

/// Creates a test movie with every display field filled in.
pub fn test_movie(id: u64, title: &str) -> MovieSummary {
    MovieSummary {
        id,
        title: title.to_string(),
        poster_path: Some(format!("/poster-{}.jpg", id)),
        vote_average: Some(7.5),
        release_date: Some("2021-10-22".to_string()),
        original_language: Some("en".to_string()),
    }
}

/// Creates `count` test movies with ids starting at 1.
pub fn test_movies(count: usize) -> Vec<MovieSummary> {
    (1..=count as u64)
        .map(|id| test_movie(id, &format!("Movie {}", id)))
        .collect()
}

// ---------------------------------------------------------------------------
// FakeCatalog
// ---------------------------------------------------------------------------

/// One scripted catalog answer
#[derive(Debug)]
pub struct FakeResponse {
    pub delay: Option<Duration>,
    pub result: Result<CatalogPage>,
}

impl FakeResponse {
    pub fn results(movies: Vec<MovieSummary>) -> Self {
        Self {
            delay: None,
            result: Ok(CatalogPage::Results(movies)),
        }
    }

    pub fn unavailable(message: &str) -> Self {
        Self {
            delay: None,
            result: Ok(CatalogPage::Unavailable(message.to_string())),
        }
    }

    pub fn error(error: Error) -> Self {
        Self {
            delay: None,
            result: Err(error),
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Catalog that replays scripted responses in order
///
/// Once the script is exhausted every call answers with an empty result list.
#[derive(Debug)]
pub struct FakeCatalog {
    script: Mutex<VecDeque<FakeResponse>>,
    requests: Mutex<Vec<CatalogRequest>>,
}

impl Default for FakeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_responses(responses: impl IntoIterator<Item = FakeResponse>) -> Self {
        let catalog = Self::new();
        for response in responses {
            catalog.push(response);
        }
        catalog
    }

    pub fn push(&self, response: FakeResponse) {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(response);
    }

    /// Every request received so far, in order
    pub fn requests(&self) -> Vec<CatalogRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    async fn answer(&self, request: CatalogRequest) -> Result<CatalogPage> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        let next = self
            .script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();

        match next {
            Some(response) => {
                if let Some(delay) = response.delay {
                    tokio::time::sleep(delay).await;
                }
                response.result
            }
            None => Ok(CatalogPage::Results(Vec::new())),
        }
    }
}

impl MovieCatalog for FakeCatalog {
    async fn search_movies(&self, text: &str) -> Result<CatalogPage> {
        self.answer(CatalogRequest::Search(text.to_string())).await
    }

    async fn discover_movies(&self) -> Result<CatalogPage> {
        self.answer(CatalogRequest::Discover).await
    }
}

// ---------------------------------------------------------------------------
// FakeTallyStore
// ---------------------------------------------------------------------------

/// Memory tally store with switchable failures and a call log
#[derive(Debug)]
pub struct FakeTallyStore {
    inner: MemoryTallyStore,
    fail_record: AtomicBool,
    fail_top: AtomicBool,
    recorded: Mutex<Vec<(String, u64)>>,
    top_calls: Mutex<Vec<usize>>,
}

impl Default for FakeTallyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeTallyStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryTallyStore::new(DEFAULT_IMAGE_BASE_URL),
            fail_record: AtomicBool::new(false),
            fail_top: AtomicBool::new(false),
            recorded: Mutex::new(Vec::new()),
            top_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn inner(&self) -> &MemoryTallyStore {
        &self.inner
    }

    pub fn set_fail_record(&self, fail: bool) {
        self.fail_record.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_top(&self, fail: bool) {
        self.fail_top.store(fail, Ordering::SeqCst);
    }

    /// `(query, movie id)` for every `record_search` call, failed ones included
    pub fn recorded(&self) -> Vec<(String, u64)> {
        self.recorded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// `limit` for every `top_searches` call
    pub fn top_calls(&self) -> Vec<usize> {
        self.top_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl TallyStore for FakeTallyStore {
    async fn record_search(&self, query: &str, movie: &MovieSummary) -> Result<TallyEntry> {
        self.recorded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((query.to_string(), movie.id));

        if self.fail_record.load(Ordering::SeqCst) {
            return Err(Error::tally("tally store unavailable"));
        }
        TallyStore::record_search(&self.inner, query, movie).await
    }

    async fn top_searches(&self, limit: usize) -> Result<Vec<TallyEntry>> {
        self.top_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(limit);

        if self.fail_top.load(Ordering::SeqCst) {
            return Err(Error::tally("tally store unavailable"));
        }
        TallyStore::top_searches(&self.inner, limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_fields() {
        let movie = test_movie(7, "Seven");
        assert_eq!(movie.id, 7);
        assert_eq!(movie.rating_label(), "7.5");
        assert_eq!(movie.release_year(), Some(2021));
    }

    #[tokio::test]
    async fn test_fake_catalog_replays_script_then_empty() {
        let catalog = FakeCatalog::with_responses([
            FakeResponse::results(test_movies(2)),
            FakeResponse::unavailable("Invalid page"),
        ]);

        let first = MovieCatalog::search_movies(&catalog, "dune").await.unwrap();
        let second = MovieCatalog::discover_movies(&catalog).await.unwrap();
        let third = MovieCatalog::discover_movies(&catalog).await.unwrap();

        assert!(matches!(first, CatalogPage::Results(ref m) if m.len() == 2));
        assert_eq!(second, CatalogPage::Unavailable("Invalid page".to_string()));
        assert_eq!(third, CatalogPage::Results(Vec::new()));
        assert_eq!(
            catalog.requests(),
            vec![
                CatalogRequest::Search("dune".to_string()),
                CatalogRequest::Discover,
                CatalogRequest::Discover,
            ]
        );
    }

    #[tokio::test]
    async fn test_fake_tally_failure_toggle() {
        let store = FakeTallyStore::new();
        store.set_fail_record(true);

        let movie = test_movie(1, "One");
        assert!(TallyStore::record_search(&store, "one", &movie).await.is_err());

        store.set_fail_record(false);
        let entry = TallyStore::record_search(&store, "one", &movie).await.unwrap();
        assert_eq!(entry.count, 1);
        assert_eq!(store.recorded().len(), 2);
    }
}
