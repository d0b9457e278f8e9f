//! OS signal handling for graceful shutdown
//!
//! SIGINT and SIGTERM (Ctrl+C on Windows) become `Message::Quit`. The
//! listener stops on its own once the engine flips the shutdown flag.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use cinefind_core::prelude::*;

use crate::message::Message;

/// Which signal ended the wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuitSignal {
    Interrupt,
    Terminate,
}

/// Spawn the signal listener
pub fn spawn_signal_handler(
    tx: mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            received = wait_for_signal() => match received {
                Ok(signal) => {
                    info!("Received {:?}, quitting", signal);
                    if tx.send(Message::Quit).await.is_err() {
                        debug!("Message channel closed before quit could be delivered");
                    }
                }
                Err(e) => error!("Signal handler error: {}", e),
            },
            _ = async {
                // Drop the borrow guard before leaving the block
                let _ = shutdown_rx.wait_for(|stop| *stop).await;
            } => {
                debug!("Signal listener stopped");
            }
        }
    })
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<QuitSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())
        .map_err(|e| Error::terminal(format!("Failed to create SIGINT handler: {}", e)))?;
    let mut sigterm = signal(SignalKind::terminate())
        .map_err(|e| Error::terminal(format!("Failed to create SIGTERM handler: {}", e)))?;

    Ok(tokio::select! {
        _ = sigint.recv() => QuitSignal::Interrupt,
        _ = sigterm.recv() => QuitSignal::Terminate,
    })
}

#[cfg(not(unix))]
async fn wait_for_signal() -> Result<QuitSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))?;
    Ok(QuitSignal::Interrupt)
}
