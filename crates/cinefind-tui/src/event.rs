//! Terminal event polling

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use cinefind_app::{InputKey, Message};
use cinefind_core::prelude::*;

/// Poll timeout and `Tick` period driving the debounce and spinner
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        _ => Ok(None),
    }
}

/// Paces `Tick` messages independently of input
///
/// Polled after every loop iteration. Emits at most one `Tick` per
/// [`POLL_INTERVAL`] whether or not input arrived in between.
#[derive(Debug, Clone, Copy)]
pub struct TickTimer {
    last: Instant,
}

impl TickTimer {
    pub fn new(now: Instant) -> Self {
        Self { last: now }
    }

    /// Returns `Message::Tick` once [`POLL_INTERVAL`] has passed since the last one
    pub fn poll(&mut self, now: Instant) -> Option<Message> {
        if now.saturating_duration_since(self.last) < POLL_INTERVAL {
            return None;
        }
        self.last = now;
        Some(Message::Tick)
    }
}
