//! TMDB movie catalog client.
//!
//! Two read operations against a fixed base URL with a bearer credential:
//!
//! - search: `{base}/search/movie?query=<escaped>&include_adult=false`
//! - discover: `{base}/discover/movie?include_adult=false&sort_by=popularity.desc`
//!
//! A response body is either a page of results or an explicit
//! "no results" signal (`"Response": "False"`). Transport and status
//! failures are returned as errors.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::ACCEPT;
use serde::Deserialize;

use cinefind_core::prelude::*;
use cinefind_core::MovieSummary;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Message shown when the service signals failure without saying why
pub const NO_MOVIES_MESSAGE: &str = "No movies found. Please try again.";

/// Characters left alone by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a query value the way `encodeURIComponent` does
/// (spaces become `%20`, not `+`).
pub fn encode_uri_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Immutable catalog settings, built once at startup
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    /// Prefix for poster paths (size segment included)
    pub image_base_url: String,
    /// Bearer token. May be empty; the API then answers 401.
    pub api_token: String,
    pub timeout: Option<Duration>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            api_token: String::new(),
            timeout: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Requests and responses
// ---------------------------------------------------------------------------

/// Which endpoint a fetch targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogRequest {
    /// Text search with the query exactly as typed
    Search(String),
    /// Default list, most popular first
    Discover,
}

impl CatalogRequest {
    /// Pick the endpoint for a debounced query: only the empty query browses.
    pub fn for_query(query: &str) -> Self {
        if query.is_empty() {
            CatalogRequest::Discover
        } else {
            CatalogRequest::Search(query.to_string())
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self, CatalogRequest::Search(_))
    }

    /// Full request URL under `base_url`
    pub fn url(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        match self {
            CatalogRequest::Search(text) => format!(
                "{}/search/movie?query={}&include_adult=false",
                base,
                encode_uri_component(text)
            ),
            CatalogRequest::Discover => format!(
                "{}/discover/movie?include_adult=false&sort_by=popularity.desc",
                base
            ),
        }
    }
}

/// Outcome of a well-formed catalog response
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogPage {
    Results(Vec<MovieSummary>),
    /// The service reported failure; carries the message to show
    Unavailable(String),
}

#[derive(Debug, Deserialize)]
struct CatalogBody {
    #[serde(rename = "Response", default)]
    response: Option<serde_json::Value>,
    #[serde(rename = "Error", default)]
    error: Option<String>,
    #[serde(default)]
    results: Option<Vec<MovieSummary>>,
}

impl CatalogBody {
    fn signals_failure(&self) -> bool {
        matches!(&self.response, Some(serde_json::Value::String(s)) if s == "False")
    }
}

/// Parse a catalog response body
pub fn parse_catalog_body(body: &str) -> Result<CatalogPage> {
    let body: CatalogBody = serde_json::from_str(body)
        .map_err(|e| Error::catalog(format!("Malformed catalog response: {}", e)))?;

    if body.signals_failure() {
        let message = body
            .error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| NO_MOVIES_MESSAGE.to_string());
        return Ok(CatalogPage::Unavailable(message));
    }

    Ok(CatalogPage::Results(body.results.unwrap_or_default()))
}

// ---------------------------------------------------------------------------
// Service trait
// ---------------------------------------------------------------------------

/// Read access to a movie catalog
#[trait_variant::make(MovieCatalog: Send)]
pub trait LocalMovieCatalog {
    /// Text search
    async fn search_movies(&self, text: &str) -> Result<CatalogPage>;

    /// Default browse list sorted by popularity
    async fn discover_movies(&self) -> Result<CatalogPage>;
}

// ---------------------------------------------------------------------------
// TMDB client
// ---------------------------------------------------------------------------

/// HTTP client for the TMDB v3 API
#[derive(Debug, Clone)]
pub struct TmdbCatalog {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl TmdbCatalog {
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Build the GET request for an endpoint without sending it
    pub fn build_request(&self, request: &CatalogRequest) -> Result<reqwest::Request> {
        let url = request.url(&self.config.base_url);
        self.http
            .get(&url)
            .bearer_auth(&self.config.api_token)
            .header(ACCEPT, "application/json")
            .build()
            .map_err(|e| Error::http(format!("Invalid catalog request {}: {}", url, e)))
    }

    async fn fetch(&self, request: CatalogRequest) -> Result<CatalogPage> {
        let req = self.build_request(&request)?;
        let url = req.url().to_string();
        debug!("Catalog GET {}", url);

        let resp = self
            .http
            .execute(req)
            .await
            .map_err(|e| Error::http(format!("Catalog request failed: {}", e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::http_status(status.as_u16(), url));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| Error::http(format!("Failed to read catalog response: {}", e)))?;

        parse_catalog_body(&body)
    }
}

impl MovieCatalog for TmdbCatalog {
    async fn search_movies(&self, text: &str) -> Result<CatalogPage> {
        self.fetch(CatalogRequest::Search(text.to_string())).await
    }

    async fn discover_movies(&self) -> Result<CatalogPage> {
        self.fetch(CatalogRequest::Discover).await
    }
}

/// Run the request matching `request` against any catalog
pub async fn fetch_page<C: MovieCatalog + Sync>(
    catalog: &C,
    request: &CatalogRequest,
) -> Result<CatalogPage> {
    match request {
        CatalogRequest::Search(text) => MovieCatalog::search_movies(catalog, text).await,
        CatalogRequest::Discover => MovieCatalog::discover_movies(catalog).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> TmdbCatalog {
        TmdbCatalog::new(CatalogConfig {
            api_token: "secret-token".to_string(),
            ..CatalogConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("star wars: a"), "star%20wars%3A%20a");
        assert_eq!(encode_uri_component("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_uri_component("it's (fine)!*~._-"), "it's%20(fine)!*~._-");
        assert_eq!(encode_uri_component("amélie"), "am%C3%A9lie");
    }

    #[test]
    fn test_request_for_query() {
        assert_eq!(CatalogRequest::for_query(""), CatalogRequest::Discover);
        assert_eq!(
            CatalogRequest::for_query("   "),
            CatalogRequest::Search("   ".to_string())
        );
        assert_eq!(
            CatalogRequest::for_query(" dune "),
            CatalogRequest::Search(" dune ".to_string())
        );
    }

    #[test]
    fn test_untrimmed_query_is_escaped_as_typed() {
        let url = CatalogRequest::for_query(" dune ").url(DEFAULT_BASE_URL);
        assert_eq!(
            url,
            "https://api.themoviedb.org/3/search/movie?query=%20dune%20&include_adult=false"
        );
    }

    #[test]
    fn test_search_url() {
        let url = CatalogRequest::Search("star wars: a".to_string()).url(DEFAULT_BASE_URL);
        assert_eq!(
            url,
            "https://api.themoviedb.org/3/search/movie?query=star%20wars%3A%20a&include_adult=false"
        );
    }

    #[test]
    fn test_discover_url_trims_trailing_slash() {
        let url = CatalogRequest::Discover.url("https://api.themoviedb.org/3/");
        assert_eq!(
            url,
            "https://api.themoviedb.org/3/discover/movie?include_adult=false&sort_by=popularity.desc"
        );
    }

    #[test]
    fn test_build_request_keeps_escaping_and_sets_headers() {
        let req = catalog()
            .build_request(&CatalogRequest::Search("star wars: a".to_string()))
            .unwrap();

        assert_eq!(req.method(), reqwest::Method::GET);
        assert_eq!(
            req.url().query(),
            Some("query=star%20wars%3A%20a&include_adult=false")
        );
        assert_eq!(
            req.headers()
                .get(reqwest::header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok()),
            Some("Bearer secret-token")
        );
        assert_eq!(
            req.headers().get(ACCEPT).and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }

    #[test]
    fn test_parse_results() {
        let body = r#"{
            "page": 1,
            "results": [
                {"id": 11, "title": "Star Wars", "vote_average": 8.2,
                 "release_date": "1977-05-25", "original_language": "en",
                 "poster_path": "/a.jpg"},
                {"id": 12, "title": "Finding Nemo"}
            ],
            "total_results": 2
        }"#;

        let CatalogPage::Results(movies) = parse_catalog_body(body).unwrap() else {
            panic!("expected results");
        };
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "Star Wars");
        assert_eq!(movies[1].id, 12);
    }

    #[test]
    fn test_parse_empty_results_is_not_a_failure() {
        let page = parse_catalog_body(r#"{"page": 1, "results": []}"#).unwrap();
        assert_eq!(page, CatalogPage::Results(vec![]));
    }

    #[test]
    fn test_parse_missing_results_defaults_to_empty() {
        let page = parse_catalog_body(r#"{"page": 1}"#).unwrap();
        assert_eq!(page, CatalogPage::Results(vec![]));
    }

    #[test]
    fn test_parse_failure_signal_with_message() {
        let page = parse_catalog_body(r#"{"Response": "False", "Error": "Invalid page"}"#).unwrap();
        assert_eq!(page, CatalogPage::Unavailable("Invalid page".to_string()));
    }

    #[test]
    fn test_parse_failure_signal_without_message() {
        let page = parse_catalog_body(r#"{"Response": "False"}"#).unwrap();
        assert_eq!(page, CatalogPage::Unavailable(NO_MOVIES_MESSAGE.to_string()));

        let page = parse_catalog_body(r#"{"Response": "False", "Error": ""}"#).unwrap();
        assert_eq!(page, CatalogPage::Unavailable(NO_MOVIES_MESSAGE.to_string()));
    }

    #[test]
    fn test_only_exact_false_signals_failure() {
        for body in [
            r#"{"Response": "false", "results": []}"#,
            r#"{"Response": "FALSE", "results": []}"#,
            r#"{"Response": false, "results": []}"#,
        ] {
            assert_eq!(parse_catalog_body(body).unwrap(), CatalogPage::Results(vec![]));
        }
    }

    #[test]
    fn test_parse_response_true_is_results() {
        let page = parse_catalog_body(r#"{"Response": "True", "results": []}"#).unwrap();
        assert_eq!(page, CatalogPage::Results(vec![]));
    }

    #[test]
    fn test_parse_invalid_json_is_error() {
        let err = parse_catalog_body("<html>").unwrap_err();
        assert!(matches!(err, Error::Catalog { .. }));
    }
}
