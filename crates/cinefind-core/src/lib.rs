//! # cinefind-core - Core Domain Types
//!
//! Foundation crate for cinefind. Provides domain types, error handling and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`MovieSummary`] - A movie as returned by the catalog
//! - [`TallyEntry`], [`MovieSnapshot`] - Search tally rows and their movie snapshot
//! - [`normalize_query()`] - Canonical tally key for free-text queries
//! - [`AppPhase`] - Application lifecycle phase
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum covering terminal, remote service and configuration failures
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use cinefind_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use types::{
    normalize_query, sort_trending, AppPhase, MovieSnapshot, MovieSummary, TallyEntry,
};
