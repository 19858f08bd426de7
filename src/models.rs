use crate::config::Config;
use std::sync::{Arc, RwLock};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub http: reqwest::Client,
    /// Process-wide bearer token. Last writer wins: a later authentication
    /// replaces the token seen by other in-flight requests.
    pub token: Arc<RwLock<Option<String>>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Snapshot of the current token, if any authentication has succeeded.
    ///
    /// A poisoned lock still yields the last stored value: the slot holds a
    /// plain `Option<String>`, which cannot be left half-written.
    pub fn current_token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn store_token(&self, token: String) {
        let mut guard = self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(token);
    }
}

/// Query parameters for `GET /results`.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ResultsParams {
    #[serde(rename = "inputList")]
    pub input_list: Option<String>,
    #[serde(rename = "inputText")]
    pub input_text: Option<String>,
    pub page: Option<String>,
    /// `format=json` returns the raw upstream payload instead of the
    /// rendered view.
    pub format: Option<String>,
}

/// Form body for `POST /toauth` (user-submitted credentials).
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CredentialsForm {
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub authenticated: bool,
}
