//! Lumberyard REST API server.
//!
//! Serves the catalog and order-snapshot endpoints over HTTP:
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌────────────────┐
//! │  actix-web   │────▶│   handlers    │────▶│  lumberyard-db │
//! │  (routing)   │     │ (validation)  │     │ (repositories) │
//! └──────────────┘     └───────────────┘     └────────────────┘
//! ```
//!
//! Configuration comes from the environment (see [`config::AppConfig`]);
//! a `.env` file is honored when present.

mod config;
mod error;
mod handlers;
mod routes;
mod state;

use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use lumberyard_db::{Database, DbConfig};

use crate::config::AppConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    let db = Database::new(DbConfig::new(&config.database_path))
        .await
        .map_err(std::io::Error::other)?;
    info!(path = %config.database_path, "Database ready");

    let state = AppState { db };

    let bind_addr = (config.server_host.clone(), config.server_port);
    info!(
        host = %config.server_host,
        port = config.server_port,
        "Starting API server"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(TracingLogger::default())
            .wrap(NormalizePath::new(TrailingSlash::Always))
            .configure(routes::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
