//! Color palette

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(3, 0, 20);
pub const CARD_BG: Color = Color::Rgb(15, 13, 35);

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(55, 48, 90);
pub const BORDER_ACTIVE: Color = Color::Rgb(171, 139, 255);

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(171, 139, 255);
pub const GRADIENT_START: Color = Color::Rgb(211, 150, 255);

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Rgb(168, 181, 219);
pub const TEXT_MUTED: Color = Color::Rgb(100, 98, 130);

// --- Status ---
pub const STATUS_RED: Color = Color::Rgb(239, 68, 68);
pub const STATUS_YELLOW: Color = Color::Rgb(250, 204, 21);
