use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Both secrets are required. Refusing to start beats silently falling
/// back to a guessable default password or token.
#[derive(Debug, Clone)]
pub struct Config {
    /// Password checked by the admin login endpoint.
    pub admin_password: String,
    /// Value issued as the session cookie after a successful login.
    pub auth_token: String,
    /// Directory holding the per-collection JSON files.
    pub data_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            admin_password: require_env("ADMIN_PASSWORD")?,
            auth_token: require_env("AUTH_TOKEN")?,
            data_dir: std::env::var("DATA_DIR")
                .unwrap_or_else(|_| "data".to_string())
                .into(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
