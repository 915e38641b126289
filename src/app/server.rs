use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::adapters::http::{build_router, SharedRegistry};
use crate::core::{ConfigProvider, DeveloperRegistry, Taxable};
use crate::utils::error::{RegistryError, Result};

/// Owns the registry for the lifetime of the process and serves it over HTTP.
pub struct RegistryServer<C: ConfigProvider> {
    config: C,
    registry: SharedRegistry,
}

impl<C: ConfigProvider> RegistryServer<C> {
    pub fn new(config: C) -> Result<Self> {
        let policy = config.tax_policy()?;
        tracing::info!(
            "Tax rates - junior: {}%, mid: {}%, senior: {}%",
            policy.simple_tax_rate(),
            policy.middle_tax_rate(),
            policy.upper_tax_rate()
        );

        Ok(Self {
            config,
            registry: Arc::new(DeveloperRegistry::new(policy)),
        })
    }

    pub fn registry(&self) -> SharedRegistry {
        Arc::clone(&self.registry)
    }

    pub fn router(&self) -> Router {
        build_router(self.registry(), self.config.context_path())
    }

    /// Binds the configured address and serves until Ctrl-C.
    pub async fn run(&self) -> Result<()> {
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(addr).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serves on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener.local_addr()?;
        tracing::info!(
            "🚀 Serving developers at http://{}{}/developers",
            local_addr,
            self.config.context_path().trim_end_matches('/')
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| RegistryError::ServerError {
                message: e.to_string(),
            })?;

        tracing::info!(
            "Server stopped, discarding {} developer records",
            self.registry.len()
        );
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
