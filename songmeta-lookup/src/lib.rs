//! songmeta-lookup library interface
//!
//! Song metadata lookup: local store first, then a recording search whose
//! candidates are disambiguated into one album, year and genre.

pub mod api;
pub mod db;
pub mod error;
pub mod models;
pub mod resolution;
pub mod services;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

use crate::services::{RecordingSearch, SongLookup};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Local-first lookup service
    pub lookup: SongLookup,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
    /// Last error for diagnostic purposes
    pub last_error: Arc<RwLock<Option<String>>>,
}

impl AppState {
    pub fn new(db: SqlitePool, search: Arc<dyn RecordingSearch>) -> Self {
        let last_error = Arc::new(RwLock::new(None));
        Self {
            lookup: SongLookup::new(db, search, last_error.clone()),
            startup_time: Utc::now(),
            last_error,
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::song_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
