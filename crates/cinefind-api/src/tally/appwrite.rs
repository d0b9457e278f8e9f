//! Tally store backed by an Appwrite Databases collection.
//!
//! Each document holds one query's counter:
//!
//! ```json
//! { "$id": "...", "searchTerm": "star wars", "count": 3,
//!   "movie_id": 11, "title": "Star Wars", "poster_url": "https://..." }
//! ```
//!
//! Increment is a read-then-write (list by `searchTerm`, then PATCH or
//! POST); the REST API offers no atomic increment for this shape.

use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use url::Url;

use cinefind_core::prelude::*;
use cinefind_core::{normalize_query, sort_trending, MovieSnapshot, MovieSummary, TallyEntry};

use super::TallyStore;

const SEARCH_TERM_ATTR: &str = "searchTerm";
const COUNT_ATTR: &str = "count";

/// Connection settings for the Appwrite collection
#[derive(Debug, Clone)]
pub struct AppwriteConfig {
    /// API root, e.g. `https://cloud.appwrite.io/v1`
    pub endpoint: String,
    pub project_id: String,
    pub database_id: String,
    pub collection_id: String,
    /// Server API key; browser-style sessions work without one
    pub api_key: Option<String>,
}

// ---------------------------------------------------------------------------
// Query syntax
// ---------------------------------------------------------------------------

/// `Query.equal(attribute, value)`
pub fn query_equal(attribute: &str, value: &str) -> String {
    json!({ "method": "equal", "attribute": attribute, "values": [value] }).to_string()
}

/// `Query.limit(n)`
pub fn query_limit(limit: usize) -> String {
    json!({ "method": "limit", "values": [limit] }).to_string()
}

/// `Query.orderDesc(attribute)`
pub fn query_order_desc(attribute: &str) -> String {
    json!({ "method": "orderDesc", "attribute": attribute }).to_string()
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TallyDocument {
    #[serde(rename = "$id", default, skip_serializing)]
    id: String,
    #[serde(rename = "searchTerm")]
    search_term: String,
    count: u64,
    movie_id: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    poster_url: Option<String>,
}

impl TallyDocument {
    fn new(search_term: String, count: u64, movie: MovieSnapshot) -> Self {
        Self {
            id: String::new(),
            search_term,
            count,
            movie_id: movie.movie_id,
            title: movie.title,
            poster_url: movie.poster_url,
        }
    }
}

impl From<TallyDocument> for TallyEntry {
    fn from(doc: TallyDocument) -> Self {
        TallyEntry {
            query: doc.search_term,
            count: doc.count,
            movie: MovieSnapshot {
                movie_id: doc.movie_id,
                title: doc.title,
                poster_url: doc.poster_url,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct DocumentList {
    #[serde(default)]
    documents: Vec<TallyDocument>,
}

/// `{endpoint}/databases/{db}/collections/{coll}/documents`
fn documents_url(config: &AppwriteConfig) -> Result<Url> {
    let mut url = Url::parse(&config.endpoint).map_err(|e| {
        Error::config_invalid(format!("Invalid Appwrite endpoint '{}': {}", config.endpoint, e))
    })?;

    url.path_segments_mut()
        .map_err(|_| Error::config_invalid("Appwrite endpoint cannot carry a path"))?
        .pop_if_empty()
        .extend([
            "databases",
            config.database_id.as_str(),
            "collections",
            config.collection_id.as_str(),
            "documents",
        ]);

    Ok(url)
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct AppwriteTallyStore {
    http: reqwest::Client,
    documents_url: Url,
    image_base_url: String,
}

impl AppwriteTallyStore {
    pub fn new(config: AppwriteConfig, image_base_url: impl Into<String>) -> Result<Self> {
        let documents_url = documents_url(&config)?;

        let mut headers = HeaderMap::new();
        let project = HeaderValue::from_str(&config.project_id)
            .map_err(|e| Error::config_invalid(format!("Invalid Appwrite project id: {}", e)))?;
        headers.insert("X-Appwrite-Project", project);
        if let Some(key) = &config.api_key {
            let mut value = HeaderValue::from_str(key)
                .map_err(|e| Error::config_invalid(format!("Invalid Appwrite API key: {}", e)))?;
            value.set_sensitive(true);
            headers.insert("X-Appwrite-Key", value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            documents_url,
            image_base_url: image_base_url.into(),
        })
    }

    pub fn documents_url(&self) -> &Url {
        &self.documents_url
    }

    fn document_url(&self, id: &str) -> Result<Url> {
        let mut url = self.documents_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::config_invalid("Appwrite endpoint cannot carry a path"))?
            .push(id);
        Ok(url)
    }

    /// Build a list-documents request filtered by Appwrite queries
    pub fn build_list_request(&self, queries: &[String]) -> Result<reqwest::Request> {
        let pairs: Vec<(&str, &str)> = queries.iter().map(|q| ("queries[]", q.as_str())).collect();
        self.http
            .get(self.documents_url.clone())
            .query(&pairs)
            .build()
            .map_err(|e| Error::http(format!("Invalid Appwrite list request: {}", e)))
    }

    async fn send<T: DeserializeOwned>(&self, req: reqwest::Request) -> Result<T> {
        let method = req.method().clone();
        let url = req.url().to_string();
        trace!("Appwrite {} {}", method, url);

        let resp = self
            .http
            .execute(req)
            .await
            .map_err(|e| Error::tally(format!("Appwrite {} failed: {}", method, e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::http_status(status.as_u16(), url));
        }

        resp.json::<T>()
            .await
            .map_err(|e| Error::tally(format!("Unexpected Appwrite response: {}", e)))
    }

    async fn find(&self, key: &str) -> Result<Option<TallyDocument>> {
        let req = self.build_list_request(&[query_equal(SEARCH_TERM_ATTR, key), query_limit(1)])?;
        let list: DocumentList = self.send(req).await?;
        Ok(list.documents.into_iter().next())
    }

    async fn create(&self, doc: &TallyDocument) -> Result<TallyDocument> {
        let req = self
            .http
            .post(self.documents_url.clone())
            .json(&json!({ "documentId": "unique()", "data": doc }))
            .build()
            .map_err(|e| Error::http(format!("Invalid Appwrite create request: {}", e)))?;
        self.send(req).await
    }

    async fn update(&self, id: &str, doc: &TallyDocument) -> Result<TallyDocument> {
        let req = self
            .http
            .patch(self.document_url(id)?)
            .json(&json!({ "data": doc }))
            .build()
            .map_err(|e| Error::http(format!("Invalid Appwrite update request: {}", e)))?;
        self.send(req).await
    }
}

impl TallyStore for AppwriteTallyStore {
    async fn record_search(&self, query: &str, movie: &MovieSummary) -> Result<TallyEntry> {
        let key = normalize_query(query);
        if key.is_empty() {
            return Err(Error::tally("Cannot record an empty query"));
        }
        let snapshot = MovieSnapshot::from_movie(movie, &self.image_base_url);

        let saved = match self.find(&key).await? {
            Some(existing) => {
                let doc = TallyDocument::new(key, existing.count + 1, snapshot);
                self.update(&existing.id, &doc).await?
            }
            None => {
                let doc = TallyDocument::new(key, 1, snapshot);
                self.create(&doc).await?
            }
        };

        debug!("Appwrite tally '{}' -> {}", saved.search_term, saved.count);
        Ok(saved.into())
    }

    async fn top_searches(&self, limit: usize) -> Result<Vec<TallyEntry>> {
        let req = self.build_list_request(&[query_limit(limit), query_order_desc(COUNT_ATTR)])?;
        let list: DocumentList = self.send(req).await?;

        let mut entries: Vec<TallyEntry> = list.documents.into_iter().map(Into::into).collect();
        sort_trending(&mut entries);
        entries.truncate(limit);
        Ok(entries)
    }
}
