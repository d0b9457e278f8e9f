//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event to message mapping
//! - `search`: Debounce, fetch cycle and result grid handlers
//! - `trending`: Trending panel handlers

pub(crate) mod keys;
pub(crate) mod search;
pub(crate) mod trending;
pub(crate) mod update;


use crate::message::Message;

// Re-export main entry point
pub use update::{update, update_at};

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Run one fetch cycle for `query`, tagged with `seq`
    FetchMovies { seq: u64, query: String },

    /// Read the top `limit` tally entries
    LoadTrending { limit: usize },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
