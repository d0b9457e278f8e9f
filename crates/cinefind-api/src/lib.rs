//! # cinefind-api - Remote Service Clients
//!
//! Clients for the two third-party services cinefind talks to: the TMDB movie
//! catalog and the search tally store.
//!
//! Depends on [`cinefind_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Movie Catalog (`catalog`)
//! - [`MovieCatalog`] - Search and discover seam (Send variant of [`LocalMovieCatalog`])
//! - [`TmdbCatalog`] - HTTP client for the TMDB v3 API
//! - [`CatalogRequest`], [`CatalogPage`] - Endpoint selection and normalized outcome
//! - [`parse_catalog_body()`] - Pure response body parser
//!
//! ### Search Tally (`tally`)
//! - [`TallyStore`] - Increment-or-insert counters and trending lists
//! - [`MemoryTallyStore`] - In-process backend
//! - [`AppwriteTallyStore`] - Appwrite Databases backend
//! - [`TallyBackend`] - Backend chosen by configuration

pub mod catalog;
pub mod tally;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use catalog::{
    encode_uri_component, fetch_page, parse_catalog_body, CatalogConfig, CatalogPage,
    CatalogRequest, LocalMovieCatalog, MovieCatalog, TmdbCatalog, DEFAULT_BASE_URL,
    DEFAULT_IMAGE_BASE_URL, NO_MOVIES_MESSAGE,
};
pub use tally::{
    AppwriteConfig, AppwriteTallyStore, LocalTallyStore, MemoryTallyStore, TallyBackend,
    TallyRecord, TallyStore, DEFAULT_TRENDING_LIMIT,
};
