use anyhow::Result;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub ops: OpsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpsConfig {
    pub client_id: String,
    pub client_secret: String,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            ops: OpsConfig {
                // Empty credentials are not rejected here; they surface as an
                // authentication failure on first use of /auth.
                client_id: env::var("OPS_CLIENT_ID").unwrap_or_default(),
                client_secret: env::var("OPS_CLIENT_SECRET").unwrap_or_default(),
                base_url: env::var("OPS_BASE_URL")
                    .unwrap_or_else(|_| "https://ops.epo.org/3.2".to_string()),
            },
        })
    }
}
