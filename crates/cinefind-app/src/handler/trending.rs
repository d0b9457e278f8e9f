//! Trending panel handlers

use cinefind_core::prelude::*;
use cinefind_core::TallyEntry;

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Dispatch the trending load unless one already ran
pub(crate) fn handle_load_trending(state: &mut AppState) -> UpdateResult {
    if !state.trending.begin_load() {
        debug!("Trending already loaded or loading, ignoring request");
        return UpdateResult::none();
    }
    UpdateResult::action(UpdateAction::LoadTrending {
        limit: state.trending.limit,
    })
}

pub(crate) fn handle_trending_loaded(state: &mut AppState, entries: Vec<TallyEntry>) -> UpdateResult {
    debug!("Trending loaded with {} entries", entries.len());
    state.trending.apply_loaded(entries);
    UpdateResult::none()
}

/// Failures stay out of the UI; the panel keeps its previous list
pub(crate) fn handle_trending_failed(state: &mut AppState, error: &str) -> UpdateResult {
    warn!("Error fetching trending movies: {}", error);
    state.trending.apply_failed();
    UpdateResult::none()
}
