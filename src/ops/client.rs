//! Authenticated search calls against the OPS published-data endpoint.

use crate::types::{AppError, AppResult};
use reqwest::StatusCode;
use tracing::{debug, info};

/// Run a bibliographic search and return the raw upstream payload.
///
/// The result window is sent as the `Range` query parameter; OPS also
/// accepts a `Range` header, but only the parameter form is used here.
pub async fn search_biblio(
    http: &reqwest::Client,
    base_url: &str,
    token: &str,
    query: &str,
    range: &str,
) -> AppResult<serde_json::Value> {
    let url = format!("{}/rest-services/published-data/search/biblio", base_url);
    debug!(query = %query, range = %range, "searching OPS biblio");

    let response = http
        .get(&url)
        .bearer_auth(token)
        .query(&[("q", query), ("Range", range)])
        .send()
        .await
        .map_err(|e| AppError::Upstream(format!("search request failed: {}", e)))?;

    if response.status() == StatusCode::UNAUTHORIZED {
        return Err(AppError::AuthRequired);
    }
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::Upstream(format!(
            "search endpoint returned {}: {}",
            status, body
        )));
    }

    let payload: serde_json::Value = response
        .json()
        .await
        .map_err(|e| AppError::Upstream(format!("malformed search response: {}", e)))?;

    info!(range = %range, "OPS search page received");
    Ok(payload)
}
