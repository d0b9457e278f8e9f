//! Status bar widget
//!
//! Shows what the grid is listing, the result count and the key bindings.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use cinefind_app::AppState;

use crate::theme::{palette, styles};

const KEY_HINTS: &str = "↑↓←→ select  Ctrl+U clear  Esc quit";

/// Status bar widget showing search state
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Source of the listed movies
    fn mode_span(&self) -> Span<'static> {
        let query = self.state.search.debounced_query.trim();
        if query.is_empty() {
            Span::styled("Popular movies", styles::accent())
        } else {
            Span::styled(format!("Results for \"{}\"", query), styles::accent())
        }
    }

    fn count_span(&self) -> Option<Span<'static>> {
        let search = &self.state.search;
        if search.loading {
            return Some(Span::styled("loading…", styles::text_muted()));
        }
        if search.error_message.is_some() {
            return Some(Span::styled("error", styles::status_red()));
        }
        let count = search.results.len();
        let label = match count {
            0 => "no results".to_string(),
            1 => "1 result".to_string(),
            n => format!("{}/{} results", search.grid.selected + 1, n),
        };
        Some(Span::styled(label, styles::text_secondary()))
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::CARD_BG));

        let mut left = vec![Span::raw(" "), self.mode_span()];
        if let Some(count) = self.count_span() {
            left.push(Span::styled(" │ ", styles::text_muted()));
            left.push(count);
        }

        let hints_width = KEY_HINTS.chars().count() as u16 + 1;
        let [left_area, right_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(hints_width)]).areas(area);

        Paragraph::new(Line::from(left)).render(left_area, buf);
        Paragraph::new(Line::from(Span::styled(KEY_HINTS, styles::text_muted())))
            .render(right_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_state, TestTerminal};
    use cinefind_api::test_utils::test_movies;

    #[test]
    fn test_discover_mode_label() {
        let state = create_test_state();
        let mut term = TestTerminal::with_size(100, 1);

        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("Popular movies"));
        assert!(term.buffer_contains("no results"));
        assert!(term.buffer_contains("Esc quit"));
    }

    #[test]
    fn test_search_mode_with_results() {
        let mut state = create_test_state();
        state.search.debounced_query = "star wars".to_string();
        state.search.apply_results(test_movies(20));
        let mut term = TestTerminal::with_size(100, 1);

        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("Results for \"star wars\""));
        assert!(term.buffer_contains("1/20 results"));
    }

    #[test]
    fn test_loading_and_error() {
        let mut state = create_test_state();
        state.search.begin_fetch();
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(StatusBar::new(&state), term.area());
        assert!(term.buffer_contains("loading…"));

        state.search.apply_failure();
        term.render_widget(StatusBar::new(&state), term.area());
        assert!(term.buffer_contains("error"));
    }
}
