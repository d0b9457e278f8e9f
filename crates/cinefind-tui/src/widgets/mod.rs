//! Custom widget components

mod header;
mod movie_grid;
mod search_box;
mod spinner;
mod status_bar;
mod trending_panel;
mod truncate;

pub use header::MainHeader;
pub use movie_grid::{grid_dimensions, MovieGrid, CARD_HEIGHT, CARD_WIDTH};
pub use search_box::{SearchBox, PLACEHOLDER};
pub use spinner::{LoadingSpinner, LOADING_TEXT};
pub use status_bar::StatusBar;
pub use trending_panel::TrendingPanel;
pub use truncate::{tail_to_width, truncate_to_width};
