//! Main TUI runner - entry point and event loop

use std::path::Path;
use std::time::Instant;

use cinefind_app::config::{self, AppConfig};
use cinefind_app::LiveEngine;
use cinefind_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI application
///
/// Loads settings (from `config_path` or the default location), builds the
/// engine, fires the startup fetches and drives the event loop until quit.
pub async fn run(config_path: Option<&Path>) -> Result<()> {
    let settings = config::load_settings(config_path);
    let app_config = AppConfig::from_settings_and_env(&settings)?;
    info!(
        "Loaded settings: debounce={}ms trending_limit={} tally={:?}",
        app_config.debounce.as_millis(),
        app_config.trending_limit,
        app_config.tally_backend
    );

    let image_base_url = app_config.catalog.image_base_url.clone();
    let mut engine = LiveEngine::from_config(app_config)?;

    let mut term = terminal::init();

    engine.start();

    let result = run_loop(&mut term, &mut engine, &image_base_url);

    engine.shutdown().await;

    terminal::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    engine: &mut LiveEngine,
    image_base_url: &str,
) -> Result<()> {
    let mut ticks = event::TickTimer::new(Instant::now());

    while !engine.should_quit() {
        // Completions from background tasks and the signal handler
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &mut engine.state, image_base_url))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }

        if let Some(tick) = ticks.poll(Instant::now()) {
            engine.process_message(tick);
        }
    }

    Ok(())
}
