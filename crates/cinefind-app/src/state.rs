//! Application state (Model in TEA pattern)

use std::time::Duration;

use cinefind_core::{AppPhase, TallyEntry};

use crate::config::AppConfig;
use crate::search::SearchState;

/// Trending panel state
#[derive(Debug, Clone, Default)]
pub struct TrendingState {
    pub entries: Vec<TallyEntry>,
    pub limit: usize,
    /// A load has been dispatched and not yet answered
    pub in_flight: bool,
    /// A load succeeded; later requests are ignored
    pub loaded: bool,
}

impl TrendingState {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            ..Default::default()
        }
    }

    /// Mark a load as started; false when one already ran or is running
    pub fn begin_load(&mut self) -> bool {
        if self.loaded || self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn apply_loaded(&mut self, entries: Vec<TallyEntry>) {
        self.in_flight = false;
        self.loaded = true;
        self.entries = entries;
        self.entries.truncate(self.limit);
    }

    pub fn apply_failed(&mut self) {
        self.in_flight = false;
    }

    pub fn is_visible(&self) -> bool {
        !self.entries.is_empty()
    }
}

/// Complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: AppPhase,
    pub search: SearchState,
    pub trending: TrendingState,
    /// Frame counter for the loading spinner
    pub spinner_frame: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(&AppConfig::default())
    }
}

impl AppState {
    pub fn new(debounce: Duration, trending_limit: usize) -> Self {
        Self {
            phase: AppPhase::Initializing,
            search: SearchState::new(debounce),
            trending: TrendingState::new(trending_limit),
            spinner_frame: 0,
        }
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self::new(config.debounce, config.trending_limit)
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn tick_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }
}
