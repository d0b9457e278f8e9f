//! Result card grid

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use cinefind_app::ResultGrid;
use cinefind_core::MovieSummary;

use super::{tail_to_width, truncate_to_width};
use crate::theme::{palette, styles};

/// Card outer width including borders
pub const CARD_WIDTH: u16 = 28;

/// Card outer height: borders + title + meta + poster rows
pub const CARD_HEIGHT: u16 = 5;

/// Columns and rows of cards that fit in `area`, never less than one each
pub fn grid_dimensions(area: Rect) -> (usize, usize) {
    let columns = (area.width / CARD_WIDTH).max(1) as usize;
    let rows = (area.height / CARD_HEIGHT).max(1) as usize;
    (columns, rows)
}

/// Grid of movie cards, scrolled by row so the selection stays visible
pub struct MovieGrid<'a> {
    movies: &'a [MovieSummary],
    grid: &'a ResultGrid,
    image_base_url: &'a str,
}

impl<'a> MovieGrid<'a> {
    pub fn new(movies: &'a [MovieSummary], grid: &'a ResultGrid, image_base_url: &'a str) -> Self {
        Self {
            movies,
            grid,
            image_base_url,
        }
    }

    fn render_card(&self, movie: &MovieSummary, selected: bool, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(selected).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let title_style = if selected {
            styles::accent_bold()
        } else {
            styles::title()
        };
        let poster = movie
            .poster_url(self.image_base_url)
            .unwrap_or_else(|| "No poster".to_string());

        let lines = vec![
            Line::from(Span::styled(truncate_to_width(&movie.title, width), title_style)),
            Line::from(vec![
                Span::styled("★ ", styles::rating()),
                Span::styled(movie.rating_label(), styles::text_primary()),
                Span::styled(" • ", styles::text_muted()),
                Span::styled(movie.language_label(), styles::text_secondary()),
                Span::styled(" • ", styles::text_muted()),
                Span::styled(movie.release_year_label(), styles::text_secondary()),
            ]),
            Line::from(Span::styled(tail_to_width(&poster, width), styles::text_muted())),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for MovieGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (columns, rows) = grid_dimensions(area);
        let first = self.grid.scroll_row * columns;

        for (offset, movie) in self.movies.iter().skip(first).take(columns * rows).enumerate() {
            let row = (offset / columns) as u16;
            let col = (offset % columns) as u16;
            let card = Rect::new(
                area.x + col * CARD_WIDTH,
                area.y + row * CARD_HEIGHT,
                CARD_WIDTH.min(area.width),
                CARD_HEIGHT.min(area.height),
            );
            self.render_card(movie, first + offset == self.grid.selected, card, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use cinefind_api::test_utils::{test_movie, test_movies};

    const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

    #[test]
    fn test_grid_dimensions() {
        assert_eq!(grid_dimensions(Rect::new(0, 0, 80, 20)), (2, 4));
        assert_eq!(grid_dimensions(Rect::new(0, 0, 84, 10)), (3, 2));
        assert_eq!(grid_dimensions(Rect::new(0, 0, 10, 2)), (1, 1));
    }

    #[test]
    fn test_card_shows_title_and_meta() {
        let movies = vec![test_movie(7, "Dune")];
        let grid = ResultGrid::default();
        let mut term = TestTerminal::new();

        term.render_widget(MovieGrid::new(&movies, &grid, IMAGE_BASE), term.area());

        assert!(term.buffer_contains("Dune"));
        assert!(term.buffer_contains("★ 7.5 • en • 2021"));
        assert!(term.buffer_contains("/poster-7.jpg"));
    }

    #[test]
    fn test_each_card_shows_its_own_poster_file() {
        let movies = vec![test_movie(101, "Alien"), test_movie(202, "Aliens")];
        let grid = ResultGrid::default();
        let mut term = TestTerminal::new();

        term.render_widget(MovieGrid::new(&movies, &grid, IMAGE_BASE), term.area());

        assert!(term.buffer_contains("…"));
        assert!(term.buffer_contains("/poster-101.jpg"));
        assert!(term.buffer_contains("/poster-202.jpg"));
    }

    #[test]
    fn test_missing_fields_show_fallbacks() {
        let movies = vec![MovieSummary::new(1, "Untitled Project")];
        let grid = ResultGrid::default();
        let mut term = TestTerminal::new();

        term.render_widget(MovieGrid::new(&movies, &grid, IMAGE_BASE), term.area());

        assert!(term.buffer_contains("★ N/A • N/A • N/A"));
        assert!(term.buffer_contains("No poster"));
    }

    #[test]
    fn test_scrolled_grid_skips_rows() {
        let movies = test_movies(12);
        let grid = ResultGrid {
            selected: 10,
            columns: 2,
            visible_rows: 4,
            scroll_row: 2,
        };
        let mut term = TestTerminal::new();

        // 80x24 holds 2 columns x 4 rows
        term.render_widget(MovieGrid::new(&movies, &grid, IMAGE_BASE), term.area());

        assert!(!term.buffer_contains("Movie 1 "));
        assert!(term.buffer_contains("Movie 5"));
        assert!(term.buffer_contains("Movie 12"));
    }
}
