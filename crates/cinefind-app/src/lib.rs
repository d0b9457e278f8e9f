//! cinefind-app - Application state and orchestration for cinefind
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the debounced search controller, the trending panel
//! controller, the Engine that runs fetch cycles on background tasks, and
//! configuration loading.

pub mod actions;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod search;
pub mod signals;
pub mod state;

// Re-export primary types
pub use config::{AppConfig, Settings};
pub use engine::{Engine, LiveEngine};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use search::{ResultGrid, SearchState, FETCH_ERROR_MESSAGE};
pub use state::{AppState, TrendingState};
