//! HTTP server wiring for the random number service.
//!
//! ## Structure
//!
//! - [`config`] - CLI/env configuration (`CliArgs`, `ServerConfig`).
//! - [`error`] - client-facing error type and its HTTP mapping.
//! - [`service`] - request handler.
//! - [`telemetry`] - `tracing` subscriber setup.

pub mod config;
pub mod error;
pub mod service;
pub mod telemetry;

use axum::Router;
use config::ServerConfig;
use service::handler::random_numbers;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Path used in startup logs to show a working request.
pub const EXAMPLE_PATH: &str = "/random-min-10-average-70&70-max-100";

/// The random number HTTP server.
///
/// Holds no state beyond its configuration; every request is handled
/// independently.
#[derive(Debug, Clone)]
pub struct Server {
    config: ServerConfig,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Builds the router. Every method and path goes to the single handler,
    /// which reports unsupported methods and unknown paths itself.
    pub fn router(&self) -> Router {
        Router::new()
            .fallback(random_numbers)
            .layer(TraceLayer::new_for_http())
    }

    /// Binds the configured address and serves until `shutdown` resolves.
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.server_addr).await?;
        self.log_startup_info(&listener);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Service shut down successfully");
        Ok(())
    }

    fn log_startup_info(&self, listener: &TcpListener) {
        let addr = listener
            .local_addr()
            .unwrap_or(self.config.server_addr);

        if cfg!(debug_assertions) {
            tracing::info!(
                "Starting random number service on {} with full config: {:#?}",
                addr,
                self.config
            );
        } else {
            tracing::info!("Starting random number service on {}", addr);
        }
        tracing::info!("Example: http://{}{}", addr, EXAMPLE_PATH);
    }
}
