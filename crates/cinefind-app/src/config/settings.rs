//! Settings parser for `config.toml` and environment secrets

use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use cinefind_api::{AppwriteConfig, CatalogConfig};
use cinefind_core::prelude::*;

use super::types::{AppConfig, Settings, TallyBackendKind};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "cinefind";

/// Environment variable holding the TMDB bearer token
pub const TMDB_API_KEY_VAR: &str = "TMDB_API_KEY";

/// Environment variable holding the optional Appwrite server key
pub const APPWRITE_API_KEY_VAR: &str = "APPWRITE_API_KEY";

/// `<config_dir>/cinefind/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, or from the default location when `None`
///
/// Missing or unreadable files fall back to defaults.
pub fn load_settings(path: Option<&Path>) -> Settings {
    match path {
        Some(path) => load_settings_from(path),
        None => match default_config_path() {
            Some(path) => load_settings_from(&path),
            None => {
                debug!("No config directory on this platform, using defaults");
                Settings::default()
            }
        },
    }
}

/// Load settings from an explicit file
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Check that `value` is an absolute http(s) URL
pub fn validate_base_url(field: &str, value: &str) -> Result<Url> {
    let url = Url::parse(value)
        .map_err(|e| Error::config_invalid(format!("{} '{}' is not a URL: {}", field, value, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::config_invalid(format!(
            "{} '{}' has unsupported scheme '{}'",
            field, value, other
        ))),
    }
}

impl AppConfig {
    /// Merge settings with secrets read from the process environment
    pub fn from_settings_and_env(settings: &Settings) -> Result<Self> {
        let api_token = match std::env::var(TMDB_API_KEY_VAR) {
            Ok(token) => token,
            Err(_) => {
                warn!(
                    "{} is not set; catalog requests will be rejected",
                    TMDB_API_KEY_VAR
                );
                String::new()
            }
        };
        let appwrite_key = std::env::var(APPWRITE_API_KEY_VAR)
            .ok()
            .filter(|k| !k.is_empty());

        Self::from_settings(settings, api_token, appwrite_key)
    }

    /// Build and validate a config from settings plus explicit secrets
    pub fn from_settings(
        settings: &Settings,
        api_token: String,
        appwrite_key: Option<String>,
    ) -> Result<Self> {
        validate_base_url("catalog.base_url", &settings.catalog.base_url)?;
        validate_base_url("catalog.image_base_url", &settings.catalog.image_base_url)?;

        let tally = &settings.tally;
        if tally.backend == TallyBackendKind::Appwrite {
            validate_base_url("tally.endpoint", &tally.endpoint)?;
            if tally.project_id.is_empty() || tally.database_id.is_empty() {
                return Err(Error::config_invalid(
                    "tally.project_id and tally.database_id are required for the appwrite backend",
                ));
            }
        }

        Ok(Self {
            debounce: settings.search.debounce(),
            trending_limit: settings.trending.limit,
            catalog: CatalogConfig {
                base_url: settings.catalog.base_url.trim_end_matches('/').to_string(),
                image_base_url: settings.catalog.image_base_url.clone(),
                api_token,
                timeout: settings.catalog.timeout_secs.map(Duration::from_secs),
            },
            tally_backend: tally.backend,
            appwrite: AppwriteConfig {
                endpoint: tally.endpoint.clone(),
                project_id: tally.project_id.clone(),
                database_id: tally.database_id.clone(),
                collection_id: tally.collection_id.clone(),
                api_key: appwrite_key,
            },
        })
    }
}
