//! HTTP endpoints:
//! - `/` - home/search form
//! - `/auth` - token acquisition with server-held credentials
//! - `/toauth` - token acquisition with submitted credentials
//! - `/results` - validated search, rendered view or raw JSON
//! - `/health` - liveness probe

pub mod auth;
pub mod health;
pub mod results;
pub mod ui;

use crate::models::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    Router::new()
        .merge(ui::router(state.clone()))
        .merge(auth::router(state.clone()))
        .merge(results::router(state.clone()))
        .merge(health::router(state))
        .layer(TraceLayer::new_for_http())
}
