//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use cinefind_core::AppPhase;

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, search, trending, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    update_at(state, message, Instant::now())
}

/// [`update`] with an explicit clock reading
pub fn update_at(state: &mut AppState, message: Message, now: Instant) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => search::handle_tick(state, now),

        // ─────────────────────────────────────────────────────────
        // Search Input
        // ─────────────────────────────────────────────────────────
        Message::SearchInput(c) => search::handle_input(state, c, now),
        Message::SearchBackspace => search::handle_backspace(state, now),
        Message::SearchClear => search::handle_clear(state, now),

        Message::DebouncedQueryChanged { query } => {
            search::handle_debounced_query_changed(state, query)
        }

        // ─────────────────────────────────────────────────────────
        // Fetch Cycle Completions
        // ─────────────────────────────────────────────────────────
        Message::MoviesLoaded { seq, query, movies } => {
            search::handle_movies_loaded(state, seq, &query, movies)
        }
        Message::MoviesUnavailable { seq, message } => {
            search::handle_movies_unavailable(state, seq, message)
        }
        Message::MoviesFetchFailed { seq, error } => {
            search::handle_movies_fetch_failed(state, seq, &error)
        }

        // ─────────────────────────────────────────────────────────
        // Result Grid
        // ─────────────────────────────────────────────────────────
        msg @ (Message::SelectUp
        | Message::SelectDown
        | Message::SelectLeft
        | Message::SelectRight
        | Message::SelectPageUp
        | Message::SelectPageDown
        | Message::SelectFirst
        | Message::SelectLast) => search::handle_select(state, &msg),

        // ─────────────────────────────────────────────────────────
        // Trending
        // ─────────────────────────────────────────────────────────
        Message::LoadTrending => trending::handle_load_trending(state),
        Message::TrendingLoaded { entries } => trending::handle_trending_loaded(state, entries),
        Message::TrendingFailed { error } => trending::handle_trending_failed(state, &error),
    }
}
