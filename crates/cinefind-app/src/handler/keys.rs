//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert a key event to a message
///
/// Printable characters always edit the query; grid navigation keys are
/// ignored while there are no results to move over.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::CharCtrl('u') => Some(Message::SearchClear),
        InputKey::Backspace => Some(Message::SearchBackspace),
        InputKey::Char(c) if !c.is_control() => Some(Message::SearchInput(c)),
        _ if state.search.results.is_empty() => None,
        key => handle_key_grid(key),
    }
}

fn handle_key_grid(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up => Some(Message::SelectUp),
        InputKey::Down => Some(Message::SelectDown),
        InputKey::Left => Some(Message::SelectLeft),
        InputKey::Right => Some(Message::SelectRight),
        InputKey::PageUp => Some(Message::SelectPageUp),
        InputKey::PageDown => Some(Message::SelectPageDown),
        InputKey::Home => Some(Message::SelectFirst),
        InputKey::End => Some(Message::SelectLast),
        _ => None,
    }
}
