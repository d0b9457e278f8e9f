//! Hero title line

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// "Find Movies You'll Enjoy Without the Hassle", with the highlighted phrase
pub struct MainHeader;

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled("Find ", styles::title()),
            Span::styled("Movies", styles::title_gradient()),
            Span::styled(" You'll Enjoy Without the Hassle", styles::title()),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
