//! Search box state: raw and debounced query, fetch-cycle bookkeeping, and
//! the result grid selection.
//!
//! Time is always passed in as an `Instant` so the debounce can be driven
//! deterministically from tests.

use std::time::{Duration, Instant};

use cinefind_core::MovieSummary;

/// Message shown when a fetch cycle fails with a thrown error
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching movies. Please try again later.";

// ─────────────────────────────────────────────────────────────────────────────
// Result Grid
// ─────────────────────────────────────────────────────────────────────────────

/// Selection and viewport of the result grid
///
/// `columns` and `visible_rows` are written back by the view after layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultGrid {
    pub selected: usize,
    pub columns: usize,
    pub visible_rows: usize,
    /// First visible row
    pub scroll_row: usize,
}

impl Default for ResultGrid {
    fn default() -> Self {
        Self {
            selected: 0,
            columns: 1,
            visible_rows: 1,
            scroll_row: 0,
        }
    }
}

impl ResultGrid {
    pub fn reset(&mut self) {
        self.selected = 0;
        self.scroll_row = 0;
    }

    pub fn set_viewport(&mut self, columns: usize, visible_rows: usize) {
        self.columns = columns.max(1);
        self.visible_rows = visible_rows.max(1);
        self.ensure_visible();
    }

    pub fn selected_row(&self) -> usize {
        self.selected / self.columns.max(1)
    }

    fn page_size(&self) -> usize {
        self.columns.max(1) * self.visible_rows.max(1)
    }

    /// Scroll so the selected card's row is inside the viewport
    pub fn ensure_visible(&mut self) {
        let row = self.selected_row();
        let rows = self.visible_rows.max(1);
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + rows {
            self.scroll_row = row + 1 - rows;
        }
    }

    fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.reset();
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn up(&mut self, len: usize) {
        if self.selected >= self.columns {
            self.selected -= self.columns;
        }
        self.clamp(len);
        self.ensure_visible();
    }

    pub fn down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let target = self.selected + self.columns;
        let last = len - 1;
        if target <= last {
            self.selected = target;
        } else if self.selected_row() < last / self.columns {
            // Short last row: land on its final card
            self.selected = last;
        }
        self.ensure_visible();
    }

    pub fn left(&mut self, len: usize) {
        self.selected = self.selected.saturating_sub(1);
        self.clamp(len);
        self.ensure_visible();
    }

    pub fn right(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
        self.ensure_visible();
    }

    pub fn page_up(&mut self, len: usize) {
        self.selected = self.selected.saturating_sub(self.page_size());
        self.clamp(len);
        self.ensure_visible();
    }

    pub fn page_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = (self.selected + self.page_size()).min(len - 1);
        self.ensure_visible();
    }

    pub fn first(&mut self) {
        self.reset();
    }

    pub fn last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
        self.ensure_visible();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Search State
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SearchState {
    /// Text as typed, updated on every keystroke
    pub raw_query: String,

    /// Last published value; drives fetch cycles
    pub debounced_query: String,

    /// When the quiet period started; `None` when nothing is pending
    dirty_since: Option<Instant>,

    debounce: Duration,

    pub results: Vec<MovieSummary>,

    /// True while the latest fetch cycle is in flight
    pub loading: bool,

    /// User-visible error for the latest completed cycle
    pub error_message: Option<String>,

    /// Seq of the most recently started fetch cycle
    pub request_seq: u64,

    pub grid: ResultGrid,
}

impl SearchState {
    pub fn new(debounce: Duration) -> Self {
        Self {
            raw_query: String::new(),
            debounced_query: String::new(),
            dirty_since: None,
            debounce,
            results: Vec::new(),
            loading: false,
            error_message: None,
            request_seq: 0,
            grid: ResultGrid::default(),
        }
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    // ─────────────────────────────────────────────────────────
    // Raw input
    // ─────────────────────────────────────────────────────────

    /// (Re)start the quiet period at `now`
    pub fn touch(&mut self, now: Instant) {
        self.dirty_since = Some(now);
    }

    pub fn push_char(&mut self, c: char, now: Instant) {
        self.raw_query.push(c);
        self.touch(now);
    }

    /// Returns false when there was nothing to delete
    pub fn backspace(&mut self, now: Instant) -> bool {
        if self.raw_query.pop().is_some() {
            self.touch(now);
            true
        } else {
            false
        }
    }

    /// Returns false when the query was already empty
    pub fn clear(&mut self, now: Instant) -> bool {
        if self.raw_query.is_empty() {
            return false;
        }
        self.raw_query.clear();
        self.touch(now);
        true
    }

    pub fn is_debounce_pending(&self) -> bool {
        self.dirty_since.is_some()
    }

    /// Publish the raw query once the quiet period has fully elapsed
    ///
    /// Returns the newly debounced value, or `None` when the timer has not
    /// fired or the settled value equals the current debounced value.
    pub fn poll_debounce(&mut self, now: Instant) -> Option<String> {
        let armed_at = self.dirty_since?;
        if now.saturating_duration_since(armed_at) < self.debounce {
            return None;
        }

        self.dirty_since = None;
        if self.raw_query == self.debounced_query {
            return None;
        }

        self.debounced_query = self.raw_query.clone();
        Some(self.debounced_query.clone())
    }

    // ─────────────────────────────────────────────────────────
    // Fetch cycle
    // ─────────────────────────────────────────────────────────

    /// Start a fetch cycle and return its seq
    pub fn begin_fetch(&mut self) -> u64 {
        self.loading = true;
        self.error_message = None;
        self.request_seq += 1;
        self.request_seq
    }

    /// Whether `seq` belongs to the latest started cycle
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.request_seq
    }

    pub fn apply_results(&mut self, movies: Vec<MovieSummary>) {
        self.loading = false;
        self.error_message = None;
        self.results = movies;
        self.grid.reset();
    }

    pub fn apply_unavailable(&mut self, message: String) {
        self.loading = false;
        self.error_message = Some(message);
        self.results.clear();
        self.grid.reset();
    }

    pub fn apply_failure(&mut self) {
        self.loading = false;
        self.error_message = Some(FETCH_ERROR_MESSAGE.to_string());
        self.results.clear();
        self.grid.reset();
    }

    pub fn selected_movie(&self) -> Option<&MovieSummary> {
        self.results.get(self.grid.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEBOUNCE: Duration = Duration::from_millis(1000);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_debounce_fires_after_full_quiet_period() {
        let t0 = Instant::now();
        let mut search = SearchState::new(DEBOUNCE);

        search.push_char('d', t0);
        assert_eq!(search.poll_debounce(t0 + ms(999)), None);
        assert!(search.is_debounce_pending());

        assert_eq!(search.poll_debounce(t0 + ms(1000)), Some("d".to_string()));
        assert!(!search.is_debounce_pending());
        assert_eq!(search.debounced_query, "d");
    }

    #[test]
    fn test_keystroke_rearms_timer() {
        let t0 = Instant::now();
        let mut search = SearchState::new(DEBOUNCE);

        search.push_char('d', t0);
        search.push_char('u', t0 + ms(600));
        assert_eq!(search.poll_debounce(t0 + ms(1200)), None);
        assert_eq!(
            search.poll_debounce(t0 + ms(1600)),
            Some("du".to_string())
        );
    }

    #[test]
    fn test_unchanged_value_publishes_nothing() {
        let t0 = Instant::now();
        let mut search = SearchState::new(DEBOUNCE);

        search.push_char('a', t0);
        assert!(search.backspace(t0 + ms(100)));
        assert_eq!(search.poll_debounce(t0 + ms(2000)), None);
        assert!(!search.is_debounce_pending());
    }

    #[test]
    fn test_noop_edits_do_not_arm() {
        let t0 = Instant::now();
        let mut search = SearchState::new(DEBOUNCE);

        assert!(!search.backspace(t0));
        assert!(!search.clear(t0));
        assert!(!search.is_debounce_pending());
    }

    #[test]
    fn test_begin_fetch_sets_loading_and_clears_error() {
        let mut search = SearchState::new(DEBOUNCE);
        search.error_message = Some("old".to_string());

        let seq = search.begin_fetch();

        assert_eq!(seq, 1);
        assert!(search.loading);
        assert!(search.error_message.is_none());
        assert!(search.is_current(1));

        search.begin_fetch();
        assert!(!search.is_current(1));
    }

    #[test]
    fn test_apply_outcomes() {
        let mut search = SearchState::new(DEBOUNCE);
        search.begin_fetch();
        search.apply_results(vec![MovieSummary::new(1, "A")]);
        assert!(!search.loading);
        assert_eq!(search.results.len(), 1);

        search.begin_fetch();
        search.apply_unavailable("Invalid page".to_string());
        assert!(!search.loading);
        assert!(search.results.is_empty());
        assert_eq!(search.error_message.as_deref(), Some("Invalid page"));

        search.begin_fetch();
        search.apply_failure();
        assert!(!search.loading);
        assert_eq!(search.error_message.as_deref(), Some(FETCH_ERROR_MESSAGE));
    }

    #[test]
    fn test_grid_navigation() {
        let mut grid = ResultGrid::default();
        grid.set_viewport(3, 2);
        let len = 8;

        grid.right(len);
        grid.right(len);
        assert_eq!(grid.selected, 2);
        grid.down(len);
        assert_eq!(grid.selected, 5);
        grid.down(len);
        // Row 2 only has cards 6 and 7
        assert_eq!(grid.selected, 7);
        assert_eq!(grid.scroll_row, 1);

        grid.up(len);
        assert_eq!(grid.selected, 4);
        grid.left(len);
        assert_eq!(grid.selected, 3);

        grid.page_up(len);
        assert_eq!(grid.selected, 0);
        assert_eq!(grid.scroll_row, 0);

        grid.page_down(len);
        assert_eq!(grid.selected, 6);
        grid.last(len);
        assert_eq!(grid.selected, 7);
        grid.first();
        assert_eq!(grid.selected, 0);
    }

    #[test]
    fn test_grid_navigation_on_empty_results() {
        let mut grid = ResultGrid::default();
        grid.down(0);
        grid.right(0);
        grid.page_down(0);
        grid.last(0);
        assert_eq!(grid.selected, 0);
    }

    #[test]
    fn test_new_results_reset_selection() {
        let mut search = SearchState::new(DEBOUNCE);
        search.apply_results(vec![MovieSummary::new(1, "A"), MovieSummary::new(2, "B")]);
        search.grid.right(2);
        assert_eq!(search.selected_movie().map(|m| m.id), Some(2));

        search.apply_results(vec![MovieSummary::new(3, "C"), MovieSummary::new(4, "D")]);
        assert_eq!(search.grid.selected, 0);
    }
}
