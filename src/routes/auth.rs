use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Form, Router,
};
use tracing::info;

use crate::models::{AppState, CredentialsForm};
use crate::ops::token::request_token;
use crate::routes::ui::render_home;
use crate::types::AppResult;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/auth", get(authenticate))
        .route("/toauth", post(authenticate_with_form))
        .with_state(state)
}

/// Acquire a token with the server-held credentials.
async fn authenticate(State(state): State<AppState>) -> AppResult<Html<String>> {
    let creds = state.config.ops.clone();
    acquire(&state, &creds.client_id, &creds.client_secret).await
}

/// Acquire a token with user-submitted credentials.
async fn authenticate_with_form(
    State(state): State<AppState>,
    Form(creds): Form<CredentialsForm>,
) -> AppResult<Html<String>> {
    acquire(&state, &creds.client_id, &creds.client_secret).await
}

/// Single acquisition path for both routes: exchange, store, re-render home.
async fn acquire(state: &AppState, client_id: &str, client_secret: &str) -> AppResult<Html<String>> {
    let token = request_token(
        &state.http,
        &state.config.ops.base_url,
        client_id,
        client_secret,
    )
    .await?;

    state.store_token(token);
    info!("access token stored");

    Ok(Html(render_home(true)))
}
