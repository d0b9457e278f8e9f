//! Configuration for cinefind
//!
//! Supports:
//! - `<config_dir>/cinefind/config.toml` (or `--config <PATH>`) - Settings
//! - `TMDB_API_KEY` / `APPWRITE_API_KEY` - Secrets from the environment

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, load_settings, load_settings_from, validate_base_url,
    APPWRITE_API_KEY_VAR, TMDB_API_KEY_VAR,
};
pub use types::*;
