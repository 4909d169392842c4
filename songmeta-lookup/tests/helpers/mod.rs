//! Test Helper Utilities
//!
//! Shared utilities for testing songmeta-lookup: in-memory store, request and
//! body helpers, and a local stand-in for the recording search service.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::routing::get;
use axum::Router;
use serde_json::Value;
use sqlx::SqlitePool;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use songmeta_lookup::services::{MusicBrainzClient, SearchConfig};
use songmeta_lookup::{build_router, AppState};

/// In-memory database with the songs table
pub async fn test_pool() -> SqlitePool {
    songmeta_lookup::db::init_database_pool("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database")
}

/// GET request for a URI
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Extract JSON body from response
pub async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

/// Request seen by the fake search service
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub params: HashMap<String, String>,
    pub user_agent: Option<String>,
}

/// Local stand-in for the recording search endpoint
pub struct FakeSearchService {
    pub base_url: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl FakeSearchService {
    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct FakeState {
    status: StatusCode,
    body: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

async fn fake_search(
    State(state): State<FakeState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> (StatusCode, String) {
    let user_agent = headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.seen.lock().unwrap().push(SeenRequest { params, user_agent });
    (state.status, state.body.clone())
}

/// Serve a canned search response on an ephemeral port
pub async fn spawn_search_service(status: StatusCode, body: &str) -> FakeSearchService {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let state = FakeState {
        status,
        body: body.to_string(),
        seen: seen.clone(),
    };

    let app = Router::new()
        .route("/ws/2/recording", get(fake_search))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeSearchService {
        base_url: format!("http://{}/ws/2/recording", addr),
        seen,
    }
}

/// Search client pointed at a fake service, without rate limiting
pub fn client_for(service: &FakeSearchService) -> MusicBrainzClient {
    MusicBrainzClient::new(SearchConfig {
        base_url: service.base_url.clone(),
        limit: 20,
        timeout: Duration::from_secs(5),
        min_interval: Duration::ZERO,
    })
    .expect("Failed to create search client")
}

/// Router wired to a fresh store and the given fake service
pub async fn app_for(service: &FakeSearchService) -> (Router, SqlitePool) {
    let pool = test_pool().await;
    let state = AppState::new(pool.clone(), Arc::new(client_for(service)));
    (build_router(state), pool)
}
