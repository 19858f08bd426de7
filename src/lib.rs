// Ops Explorer - web front-end for the EPO Open Patent Services API

pub mod config;
pub mod models;
pub mod ops;
pub mod routes;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
