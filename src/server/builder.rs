//! ServerBuilder for fluent API to build the HTTP server

use super::entity_registry::EntityRegistry;
use super::rest::RestExposure;
use crate::core::BizStore;
use crate::entities::{
    CompanyDescriptor, CompanyManager, IndustryDescriptor, IndustryManager, InvoiceDescriptor,
    InvoiceManager,
};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the BizTime router
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_store(InMemoryStore::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    store: Option<Arc<dyn BizStore>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            store: None,
            custom_routes: Vec::new(),
        }
    }

    /// Set the store (required)
    pub fn with_store(self, store: impl BizStore + 'static) -> Self {
        self.with_store_arc(Arc::new(store))
    }

    /// Set an already shared store
    pub fn with_store_arc(mut self, store: Arc<dyn BizStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Add routes outside the resource tables
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Register the company, industry and invoice resources
    fn entity_registry(store: Arc<dyn BizStore>) -> EntityRegistry {
        let mut registry = EntityRegistry::new();
        registry.register(Box::new(CompanyDescriptor::new(CompanyManager::new(
            store.clone(),
        ))));
        registry.register(Box::new(IndustryDescriptor::new(IndustryManager::new(
            store.clone(),
        ))));
        registry.register(Box::new(InvoiceDescriptor::new(InvoiceManager::new(store))));
        registry
    }

    /// Build the final REST router
    pub fn build(self) -> Result<Router> {
        let store = self
            .store
            .ok_or_else(|| anyhow::anyhow!("A store is required. Call .with_store()"))?;

        let registry = Self::entity_registry(store);
        tracing::debug!(resources = ?registry.resource_paths(), "registered resources");

        Ok(RestExposure::build_router(&registry, self.custom_routes))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Handles SIGTERM and SIGINT (Ctrl+C).
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
