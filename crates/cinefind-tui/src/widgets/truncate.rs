//! Display-width aware truncation

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to at most `max_width` terminal columns, ending in `…`
/// when anything was cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Keep the last `max_width` columns of `text`, starting with `…` when
/// anything was cut
pub fn tail_to_width(text: &str, max_width: usize) -> String {
    let reversed: String = text.chars().rev().collect();
    truncate_to_width(&reversed, max_width).chars().rev().collect()
}
