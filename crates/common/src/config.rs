//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite://chatbot.db?mode=rwc";
const DEFAULT_RUST_LOG: &str = "chatrooms=debug,tower_http=info";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_RELAY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite connection URL
    pub database_url: String,

    /// Upper bound on a single chatbot webhook exchange
    pub relay_timeout_secs: u64,

    /// Relay implementation: "webhook" or "mock"
    pub relay_provider: String,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let relay_timeout_secs = match env::var("RELAY_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => DEFAULT_RELAY_TIMEOUT_SECS,
        };

        let config = Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            relay_timeout_secs,
            relay_provider: env::var("RELAY_PROVIDER").unwrap_or_else(|_| "webhook".to_string()),
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_RUST_LOG.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .unwrap_or(DEFAULT_PORT),
        };

        Ok(config)
    }
}

fn parse_timeout(raw: &str) -> Result<u64> {
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("RELAY_TIMEOUT_SECS must be a whole number of seconds"))?;
    if secs == 0 {
        return Err(anyhow::anyhow!("RELAY_TIMEOUT_SECS must be greater than zero"));
    }
    Ok(secs)
}
