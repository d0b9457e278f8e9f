//! Engine - orchestration state for the TUI runner
//!
//! Owns the TEA state, the message channel, the shutdown signal and the
//! remote services. Frontends feed it messages and render `engine.state`.

use tokio::sync::{mpsc, watch};

use cinefind_api::{
    AppwriteTallyStore, MemoryTallyStore, MovieCatalog, TallyBackend, TallyStore, TmdbCatalog,
};
use cinefind_core::prelude::*;
use cinefind_core::AppPhase;

use crate::actions::{self, Services};
use crate::config::{AppConfig, TallyBackendKind};
use crate::handler;
use crate::message::Message;
use crate::signals;
use crate::state::AppState;

/// Capacity of the unified message channel
pub const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Engine wired to the real TMDB and tally backends
pub type LiveEngine = Engine<TmdbCatalog, TallyBackend>;

/// Orchestration engine for cinefind.
///
/// Encapsulates:
/// - TEA state management
/// - Message channel
/// - Shutdown signaling
/// - Catalog and tally services
pub struct Engine<C, T> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, background tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Sender for the shutdown signal. Send `true` to initiate shutdown.
    pub shutdown_tx: watch::Sender<bool>,

    /// Receiver for the shutdown signal. Clone for background tasks.
    pub shutdown_rx: watch::Receiver<bool>,

    pub config: AppConfig,

    services: Services<C, T>,
}

impl LiveEngine {
    /// Build the real catalog and tally clients from `config`
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let catalog = TmdbCatalog::new(config.catalog.clone())?;
        let tally = build_tally_backend(&config)?;
        info!("Using {} tally backend", tally.name());
        Ok(Engine::new(config, catalog, tally))
    }
}

/// Select the tally backend named by the configuration
pub fn build_tally_backend(config: &AppConfig) -> Result<TallyBackend> {
    let image_base_url = config.catalog.image_base_url.clone();
    Ok(match config.tally_backend {
        TallyBackendKind::Memory => TallyBackend::Memory(MemoryTallyStore::new(image_base_url)),
        TallyBackendKind::Appwrite => TallyBackend::Appwrite(AppwriteTallyStore::new(
            config.appwrite.clone(),
            image_base_url,
        )?),
    })
}

impl<C, T> Engine<C, T>
where
    C: MovieCatalog + Sync + 'static,
    T: TallyStore + Sync + 'static,
{
    /// Create a new Engine.
    ///
    /// - Creates AppState from config
    /// - Creates message channel (capacity 256)
    /// - Creates shutdown signal channel
    /// - Spawns signal handler
    pub fn new(config: AppConfig, catalog: C, tally: T) -> Self {
        let state = AppState::with_config(&config);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        signals::spawn_signal_handler(msg_tx.clone(), shutdown_rx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            shutdown_tx,
            shutdown_rx,
            config,
            services: Services::new(catalog, tally),
        }
    }

    /// Fire the startup triggers: the initial discover fetch for the empty
    /// query and the one-time trending load.
    pub fn start(&mut self) {
        if self.state.phase != AppPhase::Initializing {
            warn!("Engine already started");
            return;
        }
        self.state.phase = AppPhase::Running;

        self.process_message(Message::DebouncedQueryChanged {
            query: self.state.search.debounced_query.clone(),
        });
        self.process_message(Message::LoadTrending);
    }

    /// Process a single message through the TEA update cycle, following
    /// up on chained messages and dispatching resulting actions.
    pub fn process_message(&mut self, message: Message) {
        let mut msg = Some(message);
        while let Some(m) = msg {
            let result = handler::update(&mut self.state, m);

            if let Some(action) = result.action {
                actions::handle_action(action, self.msg_tx.clone(), &self.services);
            }

            msg = result.message;
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns the message's clone, or `None` once every sender is gone.
    pub async fn process_next(&mut self) -> Option<Message> {
        let msg = self.msg_rx.recv().await?;
        self.process_message(msg.clone());
        Some(msg)
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Get a clone of the shutdown receiver for background tasks.
    pub fn shutdown_receiver(&self) -> watch::Receiver<bool> {
        self.shutdown_rx.clone()
    }

    pub fn catalog(&self) -> &C {
        &self.services.catalog
    }

    pub fn tally(&self) -> &T {
        &self.services.tally
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Signal background tasks to stop
    pub async fn shutdown(&mut self) {
        self.state.phase = AppPhase::Quitting;
        if self.shutdown_tx.send(true).is_err() {
            debug!("No shutdown listeners");
        }
        info!("Engine shut down");
    }
}
