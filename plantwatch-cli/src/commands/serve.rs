//! HTTP server command
//!
//! Runs the plantwatch HTTP API with all resource routes.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use plantwatch_server::db::{self, create_pool_with_options};
use plantwatch_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Interface to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Database URL (PostgreSQL with PostGIS)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = db::pool::DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Request timeout in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout: u64,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long, env = "CORS_PERMISSIVE")]
    pub cors_permissive: bool,

    /// Apply schema migrations before serving
    #[arg(long)]
    pub migrate: bool,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            cors_permissive: self.cors_permissive,
            request_timeout: Duration::from_secs(self.request_timeout),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.server_config();
    let database_url = super::require_database_url(args.database_url)?;

    tracing::info!("Starting plantwatch server on {}", config.bind_addr);

    let pool = create_pool_with_options(&database_url, args.max_connections)
        .await
        .context("Failed to create database pool")?;

    if args.migrate {
        db::migrate(&pool)
            .await
            .context("Failed to apply migrations")?;
    }

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
