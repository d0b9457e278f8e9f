//! Message types for the application (TEA pattern)

use cinefind_core::{MovieSummary, TallyEntry};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Periodic tick: debounce polling and spinner animation
    Tick,

    /// Quit (Esc, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Search Input Messages
    // ─────────────────────────────────────────────────────────
    /// Append a character to the raw query
    SearchInput(char),
    /// Delete the last character of the raw query
    SearchBackspace,
    /// Clear the raw query
    SearchClear,

    /// The debounced query settled on a new value; starts a fetch cycle
    DebouncedQueryChanged { query: String },

    // ─────────────────────────────────────────────────────────
    // Fetch Cycle Completions (tagged with the cycle's seq)
    // ─────────────────────────────────────────────────────────
    /// Catalog answered with a (possibly empty) result list
    MoviesLoaded {
        seq: u64,
        query: String,
        movies: Vec<MovieSummary>,
    },
    /// Catalog answered but signalled failure in the body
    MoviesUnavailable { seq: u64, message: String },
    /// Transport, status or decode failure
    MoviesFetchFailed { seq: u64, error: String },

    // ─────────────────────────────────────────────────────────
    // Result Grid Navigation
    // ─────────────────────────────────────────────────────────
    SelectUp,
    SelectDown,
    SelectLeft,
    SelectRight,
    SelectPageUp,
    SelectPageDown,
    SelectFirst,
    SelectLast,

    // ─────────────────────────────────────────────────────────
    // Trending Panel Messages
    // ─────────────────────────────────────────────────────────
    /// Load the trending list (honoured once)
    LoadTrending,
    TrendingLoaded { entries: Vec<TallyEntry> },
    TrendingFailed { error: String },
}

impl Message {
    /// Sequence number of a fetch-cycle completion
    pub fn fetch_seq(&self) -> Option<u64> {
        match self {
            Message::MoviesLoaded { seq, .. }
            | Message::MoviesUnavailable { seq, .. }
            | Message::MoviesFetchFailed { seq, .. } => Some(*seq),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_seq() {
        let loaded = Message::MoviesLoaded {
            seq: 3,
            query: String::new(),
            movies: Vec::new(),
        };
        assert_eq!(loaded.fetch_seq(), Some(3));
        assert_eq!(
            Message::MoviesFetchFailed {
                seq: 9,
                error: "x".to_string()
            }
            .fetch_seq(),
            Some(9)
        );
        assert_eq!(Message::Tick.fetch_seq(), None);
    }
}
