//! Web server for the travel journal.
//!
//! Serves each travel collection as:
//! - A page with a grid of cards, or an empty-state call-to-action
//! - A JSON endpoint with the raw entries
//! - An add-entry form and its POST target

mod assets;
mod error;
mod handlers;
mod routes;
mod template_structs;

pub use error::AppError;
pub use routes::create_router;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use askama::Template;
use tokio::net::TcpListener;

use crate::cards::CardsView;
use crate::config::Settings;
use crate::store::{StoreError, TravelStore};

use template_structs::CardGridTemplate;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TravelStore>,
    pub assets_dir: PathBuf,
}

impl AppState {
    pub fn new(settings: &Settings) -> Result<Self, StoreError> {
        let store = match settings.data_file {
            Some(ref path) => TravelStore::open(path)?,
            None => TravelStore::seeded(),
        };

        Ok(Self {
            store: Arc::new(store),
            assets_dir: settings.assets_dir.clone(),
        })
    }
}

/// Render a card grid (or its empty state) as a standalone HTML fragment.
pub fn render_cards_fragment(view: CardsView) -> Result<String, askama::Error> {
    CardGridTemplate::from_view(view).render()
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings)?;

    let listener = bind_listener(host, port).await?;
    tracing::info!("Starting server at http://{}", listener.local_addr()?);

    serve_on(listener, state).await
}

/// Bind a listener, resolving `host` if it is a name rather than an IP.
pub async fn bind_listener(host: &str, port: u16) -> anyhow::Result<TcpListener> {
    TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))
}

/// Serve on an already-bound listener until Ctrl+C.
pub async fn serve_on(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    let app = create_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
