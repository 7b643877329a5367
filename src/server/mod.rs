//! HTTP service - vault page, unlock form and JSON API
//!
//! Provides:
//! - The server-rendered vault page with gate overlay and interstitial
//! - Form and JSON lead submission that set the unlock cookie
//! - Read-only JSON views of the filter result and gate state

pub mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::Config;
use crate::gate::store::CookiePolicy;
use crate::leads::LeadAdapter;

/// State shared across handlers; immutable after startup
pub struct AppState {
    pub config: Config,
    pub adapter: LeadAdapter,
    pub cookie: CookiePolicy,
}

impl AppState {
    pub fn new(config: Config, adapter: LeadAdapter) -> Self {
        let cookie = config.gate.cookie_policy();
        Self {
            config,
            adapter,
            cookie,
        }
    }
}

pub type SharedState = Arc<AppState>;

/// Create the vault router
pub fn create_router(state: SharedState) -> Router {
    let static_dir = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        // Pages
        .route("/", get(routes::index))
        .route("/unlock", post(routes::unlock))
        .route("/resources/:id", get(routes::open_resource))
        // API endpoints
        .route("/api/resources", get(routes::api_resources))
        .route("/api/gate", get(routes::api_gate))
        .route("/api/leads", post(routes::api_submit_lead))
        // Health check
        .route("/health", get(routes::health))
        // Static files
        .nest_service("/static", static_dir)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
