//! In-process tally store backed by a map from normalized query to record

use std::collections::HashMap;

use tokio::sync::RwLock;

use cinefind_core::prelude::*;
use cinefind_core::{normalize_query, sort_trending, MovieSnapshot, MovieSummary, TallyEntry};

use super::TallyStore;

/// Counter plus the snapshot of the top result last seen for a query
#[derive(Debug, Clone, PartialEq)]
pub struct TallyRecord {
    pub count: u64,
    pub movie: MovieSnapshot,
}

#[derive(Debug)]
pub struct MemoryTallyStore {
    image_base_url: String,
    records: RwLock<HashMap<String, TallyRecord>>,
}

impl MemoryTallyStore {
    pub fn new(image_base_url: impl Into<String>) -> Self {
        Self {
            image_base_url: image_base_url.into(),
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Bump the counter for `key` and replace its snapshot, or seed it at 1
    pub async fn increment_or_insert(&self, key: String, movie: MovieSnapshot) -> TallyEntry {
        let mut records = self.records.write().await;
        let record = records
            .entry(key.clone())
            .and_modify(|r| {
                r.count += 1;
                r.movie = movie.clone();
            })
            .or_insert_with(|| TallyRecord {
                count: 1,
                movie: movie.clone(),
            });

        TallyEntry {
            query: key,
            count: record.count,
            movie: record.movie.clone(),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    pub async fn get(&self, query: &str) -> Option<TallyRecord> {
        self.records.read().await.get(&normalize_query(query)).cloned()
    }
}

impl TallyStore for MemoryTallyStore {
    async fn record_search(&self, query: &str, movie: &MovieSummary) -> Result<TallyEntry> {
        let key = normalize_query(query);
        if key.is_empty() {
            return Err(Error::tally("Cannot record an empty query"));
        }

        let snapshot = MovieSnapshot::from_movie(movie, &self.image_base_url);
        let entry = self.increment_or_insert(key, snapshot).await;
        trace!("Tally '{}' -> {}", entry.query, entry.count);
        Ok(entry)
    }

    async fn top_searches(&self, limit: usize) -> Result<Vec<TallyEntry>> {
        let records = self.records.read().await;
        let mut entries: Vec<TallyEntry> = records
            .iter()
            .map(|(query, record)| TallyEntry {
                query: query.clone(),
                count: record.count,
                movie: record.movie.clone(),
            })
            .collect();
        drop(records);

        sort_trending(&mut entries);
        entries.truncate(limit);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MemoryTallyStore {
        MemoryTallyStore::new("https://image.tmdb.org/t/p/w500")
    }

    #[tokio::test]
    async fn test_first_search_seeds_entry() {
        let store = store();
        let mut movie = MovieSummary::new(11, "Star Wars");
        movie.poster_path = Some("/sw.jpg".to_string());

        let entry = store.record_search("Star Wars", &movie).await.unwrap();

        assert_eq!(entry.query, "star wars");
        assert_eq!(entry.count, 1);
        assert_eq!(entry.movie.movie_id, 11);
        assert_eq!(
            entry.movie.poster_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/sw.jpg")
        );
    }

    #[tokio::test]
    async fn test_same_normalized_query_increments_single_entry() {
        let store = store();
        let movie = MovieSummary::new(11, "Star Wars");

        store.record_search("star wars", &movie).await.unwrap();
        let entry = store.record_search("  Star   WARS ", &movie).await.unwrap();

        assert_eq!(entry.count, 2);
        assert_eq!(store.len().await, 1);
        assert_eq!(store.get("star wars").await.map(|r| r.count), Some(2));
    }

    #[tokio::test]
    async fn test_increment_refreshes_snapshot() {
        let store = store();
        store
            .record_search("batman", &MovieSummary::new(1, "Batman"))
            .await
            .unwrap();
        let entry = store
            .record_search("batman", &MovieSummary::new(2, "The Batman"))
            .await
            .unwrap();

        assert_eq!(entry.count, 2);
        assert_eq!(entry.movie.movie_id, 2);
        assert_eq!(entry.movie.title, "The Batman");
    }

    #[tokio::test]
    async fn test_empty_query_is_rejected() {
        let store = store();
        let err = store
            .record_search("   ", &MovieSummary::new(1, "x"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Tally { .. }));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_top_searches_limit_and_order() {
        let store = store();
        let movie = MovieSummary::new(1, "x");
        let searches = [
            ("a", 1),
            ("b", 4),
            ("c", 2),
            ("d", 7),
            ("e", 3),
            ("f", 5),
            ("g", 6),
        ];
        for (query, times) in searches {
            for _ in 0..times {
                store.record_search(query, &movie).await.unwrap();
            }
        }

        let top = store.top_searches(5).await.unwrap();

        assert_eq!(top.len(), 5);
        let counts: Vec<u64> = top.iter().map(|e| e.count).collect();
        assert_eq!(counts, vec![7, 6, 5, 4, 3]);
        assert!(top.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[tokio::test]
    async fn test_top_searches_fewer_than_limit() {
        let store = store();
        store
            .record_search("solo", &MovieSummary::new(1, "Solo"))
            .await
            .unwrap();

        let top = store.top_searches(5).await.unwrap();
        assert_eq!(top.len(), 1);
        assert!(store.top_searches(0).await.unwrap().is_empty());
    }
}
