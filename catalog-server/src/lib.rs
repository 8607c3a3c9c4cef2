//! Catalog Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and the in-memory store
//! - commands: HTTP route handlers

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

pub mod commands;
pub mod config;
pub mod domain;
pub mod repository;

pub use config::ServerConfig;

use repository::{init_db, ColoringPageRepository, ParentRepository, RelationRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pages: Arc<ColoringPageRepository>,
    pub parents: Arc<ParentRepository>,
    pub relations: Arc<RelationRepository>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Fresh store, seeded when the config asks for it
    pub fn new(config: ServerConfig) -> Self {
        let db = init_db(config.seed);
        Self {
            pages: Arc::new(ColoringPageRepository::new(db.clone())),
            parents: Arc::new(ParentRepository::new(db.clone())),
            relations: Arc::new(RelationRepository::new(db)),
            config: Arc::new(config),
        }
    }
}

/// Create the HTTP router
pub fn app(state: AppState) -> Router {
    Router::new().nest("/api", commands::routes(state))
}

/// Serve on an already bound listener until the task is dropped
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), String> {
    let addr = listener.local_addr().map_err(|e| e.to_string())?;
    log::info!("Catalog server listening on http://{}/api", addr);
    axum::serve(listener, app(state))
        .await
        .map_err(|e| format!("Server error: {}", e))
}
