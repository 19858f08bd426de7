//! OAuth2 client-credentials token exchange against the OPS auth endpoint.

use crate::types::{AppError, AppResult};
use tracing::{debug, info};

/// Exchange client credentials for a bearer token.
///
/// Single attempt, no retry: a failed exchange surfaces immediately as
/// `AuthFailure`. The caller decides where the token is stored.
pub async fn request_token(
    http: &reqwest::Client,
    base_url: &str,
    client_id: &str,
    client_secret: &str,
) -> AppResult<String> {
    let url = format!("{}/auth/accesstoken", base_url);
    debug!(url = %url, "requesting OPS access token");

    let response = http
        .post(&url)
        .basic_auth(client_id, Some(client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| AppError::AuthFailure(format!("token request failed: {}", e)))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::AuthFailure(format!(
            "token endpoint returned {}: {}",
            status, body
        )));
    }

    let payload: serde_json::Value = response
        .json()
        .await
        .map_err(|e| AppError::AuthFailure(format!("malformed token response: {}", e)))?;

    let token = payload
        .get("access_token")
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            AppError::AuthFailure("token response missing access_token".to_string())
        })?;

    info!("OPS access token acquired");
    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_request_token_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/accesstoken")
            .match_header("authorization", mockito::Matcher::Regex("^Basic ".into()))
            .match_body(mockito::Matcher::UrlEncoded(
                "grant_type".into(),
                "client_credentials".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "access_token": "abc123",
                    "token_type": "BearerToken",
                    "expires_in": "1200"
                })
                .to_string(),
            )
            .create_async()
            .await;

        let http = reqwest::Client::new();
        let token = request_token(&http, &server.url(), "id", "secret")
            .await
            .unwrap();
        assert_eq!(token, "abc123");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_request_token_rejected_credentials() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/auth/accesstoken")
            .with_status(401)
            .with_body("invalid_client")
            .create_async()
            .await;

        let http = reqwest::Client::new();
        let err = request_token(&http, &server.url(), "bad", "creds")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AuthFailure(_)));
    }

    #[tokio::test]
    async fn test_request_token_missing_field() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/auth/accesstoken")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"token_type": "BearerToken"}).to_string())
            .create_async()
            .await;

        let http = reqwest::Client::new();
        let err = request_token(&http, &server.url(), "id", "secret")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AuthFailure(_)));
    }
}
