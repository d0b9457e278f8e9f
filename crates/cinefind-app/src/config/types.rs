//! Configuration types for cinefind
//!
//! Defines:
//! - `Settings` - Values read from `config.toml`
//! - `AppConfig` - Settings merged with secrets from the environment
//! - Related sub-types and enums

use std::time::Duration;

use serde::{Deserialize, Serialize};

use cinefind_api::{
    AppwriteConfig, CatalogConfig, DEFAULT_BASE_URL, DEFAULT_IMAGE_BASE_URL,
    DEFAULT_TRENDING_LIMIT,
};

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub search: SearchSettings,

    #[serde(default)]
    pub trending: TrendingSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub tally: TallySettings,
}

/// Search box settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SearchSettings {
    /// Quiet period before a typed query is published, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl SearchSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn default_debounce_ms() -> u64 {
    1000
}

/// Trending panel settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TrendingSettings {
    /// Number of entries shown
    #[serde(default = "default_trending_limit")]
    pub limit: usize,
}

impl Default for TrendingSettings {
    fn default() -> Self {
        Self {
            limit: default_trending_limit(),
        }
    }
}

fn default_trending_limit() -> usize {
    DEFAULT_TRENDING_LIMIT
}

/// Movie catalog settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_base_url")]
    pub base_url: String,

    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    /// Request timeout; transport default when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: default_catalog_base_url(),
            image_base_url: default_image_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_catalog_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_image_base_url() -> String {
    DEFAULT_IMAGE_BASE_URL.to_string()
}

/// Which tally store backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TallyBackendKind {
    #[default]
    Memory,
    Appwrite,
}

/// Search tally settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TallySettings {
    #[serde(default)]
    pub backend: TallyBackendKind,

    /// Appwrite API root
    #[serde(default = "default_appwrite_endpoint")]
    pub endpoint: String,

    #[serde(default)]
    pub project_id: String,

    #[serde(default)]
    pub database_id: String,

    #[serde(default = "default_collection_id")]
    pub collection_id: String,
}

impl Default for TallySettings {
    fn default() -> Self {
        Self {
            backend: TallyBackendKind::default(),
            endpoint: default_appwrite_endpoint(),
            project_id: String::new(),
            database_id: String::new(),
            collection_id: default_collection_id(),
        }
    }
}

fn default_appwrite_endpoint() -> String {
    "https://cloud.appwrite.io/v1".to_string()
}

fn default_collection_id() -> String {
    "metrics".to_string()
}

/// Immutable runtime configuration, built once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub debounce: Duration,
    pub trending_limit: usize,
    pub catalog: CatalogConfig,
    pub tally_backend: TallyBackendKind,
    pub appwrite: AppwriteConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            debounce: settings.search.debounce(),
            trending_limit: settings.trending.limit,
            catalog: CatalogConfig::default(),
            tally_backend: settings.tally.backend,
            appwrite: AppwriteConfig {
                endpoint: settings.tally.endpoint,
                project_id: settings.tally.project_id,
                database_id: settings.tally.database_id,
                collection_id: settings.tally.collection_id,
                api_key: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.search.debounce_ms, 1000);
        assert_eq!(settings.search.debounce(), Duration::from_secs(1));
        assert_eq!(settings.trending.limit, 5);
        assert_eq!(settings.catalog.base_url, "https://api.themoviedb.org/3");
        assert_eq!(settings.catalog.timeout_secs, None);
        assert_eq!(settings.tally.backend, TallyBackendKind::Memory);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: Settings = toml::from_str("[search]\ndebounce_ms = 250\n").unwrap();
        assert_eq!(settings.search.debounce_ms, 250);
        assert_eq!(settings.trending.limit, 5);
        assert_eq!(settings.tally.collection_id, "metrics");
    }

    #[test]
    fn test_backend_kind_parses_lowercase() {
        let settings: Settings = toml::from_str("[tally]\nbackend = \"appwrite\"\n").unwrap();
        assert_eq!(settings.tally.backend, TallyBackendKind::Appwrite);
    }
}
