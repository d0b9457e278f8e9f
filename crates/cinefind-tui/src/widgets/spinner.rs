//! Loading spinner

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub const LOADING_TEXT: &str = "Loading movies...";

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Animated spinner, advanced by the tick-driven `spinner_frame`
pub struct LoadingSpinner {
    frame: usize,
}

impl LoadingSpinner {
    pub fn new(frame: usize) -> Self {
        Self { frame }
    }

    pub fn glyph(&self) -> &'static str {
        FRAMES[self.frame % FRAMES.len()]
    }
}

impl Widget for LoadingSpinner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(self.glyph(), styles::accent_bold()),
            Span::raw(" "),
            Span::styled(LOADING_TEXT, styles::text_secondary()),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_cycle() {
        assert_eq!(LoadingSpinner::new(0).glyph(), "⠋");
        assert_eq!(LoadingSpinner::new(10).glyph(), "⠋");
        assert_eq!(LoadingSpinner::new(3).glyph(), "⠸");
    }
}
