//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every task owns `Arc` clones of the services and reports back only by
//! sending a [`Message`] on the engine channel.

use std::sync::Arc;

use tokio::sync::mpsc;

use cinefind_api::{fetch_page, CatalogPage, CatalogRequest, MovieCatalog, TallyStore};
use cinefind_core::prelude::*;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Remote services shared by background tasks
#[derive(Debug)]
pub struct Services<C, T> {
    pub catalog: Arc<C>,
    pub tally: Arc<T>,
}

impl<C, T> Services<C, T> {
    pub fn new(catalog: C, tally: T) -> Self {
        Self {
            catalog: Arc::new(catalog),
            tally: Arc::new(tally),
        }
    }
}

impl<C, T> Clone for Services<C, T> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            tally: Arc::clone(&self.tally),
        }
    }
}

/// Execute an action by spawning a background task
pub fn handle_action<C, T>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, services: &Services<C, T>)
where
    C: MovieCatalog + Sync + 'static,
    T: TallyStore + Sync + 'static,
{
    match action {
        UpdateAction::FetchMovies { seq, query } => {
            let services = services.clone();
            tokio::spawn(async move {
                let msg = run_fetch_cycle(&*services.catalog, &*services.tally, seq, query).await;
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::LoadTrending { limit } => {
            let tally = Arc::clone(&services.tally);
            tokio::spawn(async move {
                let msg = load_trending(&*tally, limit).await;
                send(&msg_tx, msg).await;
            });
        }
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        debug!("Message channel closed, dropping task result");
    }
}

/// One fetch cycle: query the catalog, bump the tally for a non-empty text
/// search with at least one result, and produce the completion message
pub async fn run_fetch_cycle<C, T>(catalog: &C, tally: &T, seq: u64, query: String) -> Message
where
    C: MovieCatalog + Sync,
    T: TallyStore + Sync,
{
    let request = CatalogRequest::for_query(&query);

    match fetch_page(catalog, &request).await {
        Ok(CatalogPage::Results(movies)) => {
            if request.is_search() {
                if let Some(top) = movies.first() {
                    if let Err(e) = TallyStore::record_search(tally, &query, top).await {
                        warn!("Failed to update search count for {:?}: {}", query, e);
                    }
                }
            }
            Message::MoviesLoaded { seq, query, movies }
        }
        Ok(CatalogPage::Unavailable(message)) => {
            debug!("Catalog reported no movies for {:?}: {}", query, message);
            Message::MoviesUnavailable { seq, message }
        }
        Err(e) => {
            error!("Error fetching movies: {}", e);
            Message::MoviesFetchFailed {
                seq,
                error: e.to_string(),
            }
        }
    }
}

/// Read the top tally entries
pub async fn load_trending<T>(tally: &T, limit: usize) -> Message
where
    T: TallyStore + Sync,
{
    match TallyStore::top_searches(tally, limit).await {
        Ok(entries) => Message::TrendingLoaded { entries },
        Err(e) => Message::TrendingFailed {
            error: e.to_string(),
        },
    }
}
