//! Core domain types

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Application Phase
// ─────────────────────────────────────────────────────────────────────────────

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Engine created, startup triggers not yet dispatched
    #[default]
    Initializing,
    /// Event loop is running
    Running,
    /// Shutting down
    Quitting,
}

// ─────────────────────────────────────────────────────────────────────────────
// Movie Summary
// ─────────────────────────────────────────────────────────────────────────────

/// A single movie as returned by the catalog's search and discover endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Catalog-assigned identifier
    pub id: u64,

    #[serde(default)]
    pub title: String,

    /// Relative poster path (e.g. `/abc123.jpg`)
    #[serde(default)]
    pub poster_path: Option<String>,

    #[serde(default)]
    pub vote_average: Option<f64>,

    /// `YYYY-MM-DD`, sometimes empty
    #[serde(default)]
    pub release_date: Option<String>,

    #[serde(default)]
    pub original_language: Option<String>,
}

impl MovieSummary {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_path: None,
            vote_average: None,
            release_date: None,
            original_language: None,
        }
    }

    /// Rating with one decimal, or `N/A` when unrated
    pub fn rating_label(&self) -> String {
        match self.vote_average {
            Some(v) if v > 0.0 => format!("{:.1}", v),
            _ => "N/A".to_string(),
        }
    }

    /// Release year parsed from `release_date`
    pub fn release_year(&self) -> Option<i32> {
        let date = self.release_date.as_deref()?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .map(|d| d.year())
    }

    pub fn release_year_label(&self) -> String {
        self.release_year()
            .map(|y| y.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn language_label(&self) -> String {
        match self.original_language.as_deref() {
            Some(lang) if !lang.is_empty() => lang.to_string(),
            _ => "N/A".to_string(),
        }
    }

    /// Full poster URL under the given image base (e.g. `https://image.tmdb.org/t/p/w500`)
    pub fn poster_url(&self, image_base_url: &str) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| format!("{}{}", image_base_url.trim_end_matches('/'), p))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Search Tally
// ─────────────────────────────────────────────────────────────────────────────

/// Normalize free-text query for use as a tally key
///
/// Trims, collapses whitespace runs to a single space, and lowercases, so
/// `"  Star   Wars "` and `"star wars"` count toward the same entry.
pub fn normalize_query(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Denormalized movie data stored alongside a tally counter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSnapshot {
    pub movie_id: u64,
    pub title: String,
    pub poster_url: Option<String>,
}

impl MovieSnapshot {
    pub fn from_movie(movie: &MovieSummary, image_base_url: &str) -> Self {
        Self {
            movie_id: movie.id,
            title: movie.title.clone(),
            poster_url: movie.poster_url(image_base_url),
        }
    }
}

/// One row of the search tally: how often a query was searched and the top
/// result it last produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TallyEntry {
    /// Normalized query text
    pub query: String,
    pub count: u64,
    pub movie: MovieSnapshot,
}

/// Sort entries the way trending lists are presented: count descending,
/// query text ascending on ties
pub fn sort_trending(entries: &mut [TallyEntry]) {
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.query.cmp(&b.query)));
}
