//! Search handlers: raw input, debounce, fetch-cycle completions and grid
//! navigation

use std::time::Instant;

use cinefind_core::prelude::*;
use cinefind_core::MovieSummary;

use crate::message::Message;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub(crate) fn handle_input(state: &mut AppState, c: char, now: Instant) -> UpdateResult {
    state.search.push_char(c, now);
    UpdateResult::none()
}

pub(crate) fn handle_backspace(state: &mut AppState, now: Instant) -> UpdateResult {
    state.search.backspace(now);
    UpdateResult::none()
}

pub(crate) fn handle_clear(state: &mut AppState, now: Instant) -> UpdateResult {
    state.search.clear(now);
    UpdateResult::none()
}

/// Advance the spinner and publish the debounced query if it settled
pub(crate) fn handle_tick(state: &mut AppState, now: Instant) -> UpdateResult {
    if state.search.loading {
        state.tick_spinner();
    }

    match state.search.poll_debounce(now) {
        Some(query) => {
            debug!("Debounced query settled: {:?}", query);
            UpdateResult::message(Message::DebouncedQueryChanged { query })
        }
        None => UpdateResult::none(),
    }
}

/// Start a fetch cycle for the newly published query
pub(crate) fn handle_debounced_query_changed(state: &mut AppState, query: String) -> UpdateResult {
    let seq = state.search.begin_fetch();
    debug!("Fetch cycle {} for {:?}", seq, query);
    UpdateResult::action(UpdateAction::FetchMovies { seq, query })
}

fn is_stale(state: &AppState, seq: u64) -> bool {
    if state.search.is_current(seq) {
        return false;
    }
    debug!(
        "Discarding stale fetch completion {} (latest is {})",
        seq, state.search.request_seq
    );
    true
}

pub(crate) fn handle_movies_loaded(
    state: &mut AppState,
    seq: u64,
    query: &str,
    movies: Vec<MovieSummary>,
) -> UpdateResult {
    if is_stale(state, seq) {
        return UpdateResult::none();
    }
    debug!("Cycle {} for {:?} loaded {} movies", seq, query, movies.len());
    state.search.apply_results(movies);
    UpdateResult::none()
}

pub(crate) fn handle_movies_unavailable(
    state: &mut AppState,
    seq: u64,
    message: String,
) -> UpdateResult {
    if is_stale(state, seq) {
        return UpdateResult::none();
    }
    state.search.apply_unavailable(message);
    UpdateResult::none()
}

pub(crate) fn handle_movies_fetch_failed(state: &mut AppState, seq: u64, error: &str) -> UpdateResult {
    if is_stale(state, seq) {
        return UpdateResult::none();
    }
    debug!("Cycle {} failed: {}", seq, error);
    state.search.apply_failure();
    UpdateResult::none()
}

/// Apply a grid movement over the current results
pub(crate) fn handle_select(state: &mut AppState, msg: &Message) -> UpdateResult {
    let len = state.search.results.len();
    let grid = &mut state.search.grid;
    match msg {
        Message::SelectUp => grid.up(len),
        Message::SelectDown => grid.down(len),
        Message::SelectLeft => grid.left(len),
        Message::SelectRight => grid.right(len),
        Message::SelectPageUp => grid.page_up(len),
        Message::SelectPageDown => grid.page_down(len),
        Message::SelectFirst => grid.first(),
        Message::SelectLast => grid.last(len),
        _ => {}
    }
    UpdateResult::none()
}
