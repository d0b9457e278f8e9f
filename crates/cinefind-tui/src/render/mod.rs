//! Main render/view function (View in TEA pattern)


use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use cinefind_app::AppState;

use crate::theme::{palette, styles};
use crate::{layout, widgets};

pub const ALL_MOVIES_TITLE: &str = "All Movies";

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function except for the result grid viewport,
/// which is written back so keyboard navigation knows the column and row
/// counts of the last frame.
pub fn view(frame: &mut Frame, state: &mut AppState, image_base_url: &str) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let trending_rows = if state.trending.is_visible() {
        state.trending.entries.len()
    } else {
        0
    };
    let areas = layout::create(area, trending_rows);

    frame.render_widget(widgets::MainHeader, areas.title);
    frame.render_widget(widgets::SearchBox::new(&state.search), areas.search);

    if let Some(trending_area) = areas.trending {
        frame.render_widget(
            widgets::TrendingPanel::new(&state.trending.entries),
            trending_area,
        );
    }

    // All Movies: spinner, else error, else cards
    let block = styles::section_block(ALL_MOVIES_TITLE);
    let inner = block.inner(areas.grid);
    frame.render_widget(block, areas.grid);

    let (columns, rows) = widgets::grid_dimensions(inner);
    state.search.grid.set_viewport(columns, rows);

    let search = &state.search;
    if search.loading {
        frame.render_widget(widgets::LoadingSpinner::new(state.spinner_frame), inner);
    } else if let Some(message) = &search.error_message {
        let error = Paragraph::new(Line::from(Span::styled(
            message.as_str(),
            styles::status_red(),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(error, inner);
    } else {
        frame.render_widget(
            widgets::MovieGrid::new(&search.results, &search.grid, image_base_url),
            inner,
        );
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}
