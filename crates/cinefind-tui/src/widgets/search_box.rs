//! Search box widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use cinefind_app::SearchState;

use super::tail_to_width;
use crate::theme::styles;

pub const PLACEHOLDER: &str = "Search through thousands of movies";

/// Single-line search input showing the raw (undebounced) query
pub struct SearchBox<'a> {
    search: &'a SearchState,
}

impl<'a> SearchBox<'a> {
    pub fn new(search: &'a SearchState) -> Self {
        Self { search }
    }
}

impl Widget for SearchBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(Span::styled(" Search ", styles::accent_bold()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![Span::styled("› ", styles::text_muted())];
        if self.search.raw_query.is_empty() {
            spans.push(Span::styled(PLACEHOLDER, styles::text_muted()));
        } else {
            // Keep the tail visible while typing
            let available = (inner.width as usize).saturating_sub(4);
            let query = tail_to_width(&self.search.raw_query, available);
            spans.push(Span::styled(query, styles::text_primary()));
            spans.push(Span::styled("_", styles::accent()));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
