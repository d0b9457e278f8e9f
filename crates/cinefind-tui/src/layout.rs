//! Screen layout definitions for the TUI
//!
//! The trending panel only takes space when there is something to show.

use ratatui::layout::{Constraint, Layout, Rect};

/// Hero title row
const TITLE_HEIGHT: u16 = 1;

/// Search box: top border + input row + bottom border
const SEARCH_HEIGHT: u16 = 3;

const STATUS_HEIGHT: u16 = 1;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub title: Rect,
    pub search: Rect,
    /// `None` when the trending list is empty
    pub trending: Option<Rect>,
    /// "All Movies" section (cards, spinner or error)
    pub grid: Rect,
    pub status: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `trending_rows` - Number of trending entries to show (0 hides the panel)
pub fn create(area: Rect, trending_rows: usize) -> ScreenAreas {
    let trending_height = if trending_rows > 0 {
        // Borders around the list
        Some(trending_rows as u16 + 2)
    } else {
        None
    };

    let mut constraints = vec![
        Constraint::Length(TITLE_HEIGHT),
        Constraint::Length(SEARCH_HEIGHT),
    ];
    if let Some(height) = trending_height {
        constraints.push(Constraint::Length(height));
    }
    constraints.push(Constraint::Min(3));
    constraints.push(Constraint::Length(STATUS_HEIGHT));

    let chunks = Layout::vertical(constraints).split(area);

    match trending_height {
        Some(_) => ScreenAreas {
            title: chunks[0],
            search: chunks[1],
            trending: Some(chunks[2]),
            grid: chunks[3],
            status: chunks[4],
        },
        None => ScreenAreas {
            title: chunks[0],
            search: chunks[1],
            trending: None,
            grid: chunks[2],
            status: chunks[3],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_trending() {
        let layout = create(Rect::new(0, 0, 80, 24), 0);

        assert!(layout.trending.is_none());
        assert_eq!(layout.title.height, 1);
        assert_eq!(layout.search.y, 1);
        assert_eq!(layout.search.height, 3);
        assert_eq!(layout.grid.y, 4);
        assert_eq!(layout.grid.height, 19); // 24 - 1 - 3 - 1
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_layout_with_trending() {
        let layout = create(Rect::new(0, 0, 80, 24), 3);

        let trending = layout.trending.expect("trending area");
        assert_eq!(trending.y, 4);
        assert_eq!(trending.height, 5);
        assert_eq!(layout.grid.y, 9);
        assert_eq!(layout.grid.height, 14);
    }

    #[test]
    fn test_layout_small_terminal_keeps_grid() {
        let layout = create(Rect::new(0, 0, 40, 10), 5);
        assert!(layout.grid.height >= 3);
    }
}
