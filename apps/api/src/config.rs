//! API server configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults; a `.env` file is honored for local development.

use std::env;

use crate::error::ApiError;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to bind the HTTP server to.
    pub server_host: String,

    /// Port to bind the HTTP server to.
    pub server_port: u16,

    /// Path to the SQLite database file.
    pub database_path: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ApiError> {
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .map_err(|e| ApiError::Config(format!("Invalid SERVER_PORT: {e}")))?;

        let database_path =
            env::var("DATABASE_PATH").unwrap_or_else(|_| "./data/lumberyard.db".to_string());

        tracing::info!(
            host = %server_host,
            port = server_port,
            db = %database_path,
            "Configuration loaded"
        );

        Ok(AppConfig {
            server_host,
            server_port,
            database_path,
        })
    }
}
