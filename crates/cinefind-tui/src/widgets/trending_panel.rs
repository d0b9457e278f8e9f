//! Trending searches panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use cinefind_core::TallyEntry;

use super::truncate_to_width;
use crate::theme::styles;

pub const TRENDING_TITLE: &str = "Trending Movies";

/// Numbered list of the most searched queries and their top movie
pub struct TrendingPanel<'a> {
    entries: &'a [TallyEntry],
}

impl<'a> TrendingPanel<'a> {
    pub fn new(entries: &'a [TallyEntry]) -> Self {
        Self { entries }
    }

    fn entry_line(rank: usize, entry: &TallyEntry, width: usize) -> Line<'static> {
        let number = format!("{:>2} ", rank);
        let suffix = format!(
            "  \"{}\" · {} {}",
            entry.query,
            entry.count,
            if entry.count == 1 { "search" } else { "searches" }
        );
        let title_width = width.saturating_sub(number.len() + suffix.chars().count());
        let title = truncate_to_width(&entry.movie.title, title_width.max(8));

        Line::from(vec![
            Span::styled(number, styles::accent_bold()),
            Span::styled(title, styles::text_primary()),
            Span::styled(suffix, styles::text_muted()),
        ])
    }
}

impl Widget for TrendingPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::section_block(TRENDING_TITLE);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| Self::entry_line(i + 1, entry, inner.width as usize))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
