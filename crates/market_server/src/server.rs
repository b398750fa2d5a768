//! Server startup and binding
//!
//! Builds the router over a record store and serves it with graceful
//! shutdown on Ctrl-C.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use market_store::{MarketStore, MemoryStore};

use crate::config::ServerConfig;
use crate::routes;

/// Server instance that can be started
pub struct Server {
    /// Server configuration
    config: Arc<ServerConfig>,
    /// The built router
    router: Router,
}

impl Server {
    /// Create a new server instance with the given configuration.
    ///
    /// The in-memory store is seeded with demo records unless
    /// `seed_demo_data` is disabled.
    pub fn new(config: ServerConfig) -> Self {
        let store = if config.seed_demo_data {
            MemoryStore::with_demo_data()
        } else {
            MemoryStore::new()
        };

        Self::with_store(config, Arc::new(store))
    }

    /// Create a server over an existing store collaborator
    pub fn with_store(config: ServerConfig, store: Arc<dyn MarketStore>) -> Self {
        let config = Arc::new(config);
        let router = routes::build_router(config.clone(), store);

        Self { config, router }
    }

    /// Get the configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Run the server
    ///
    /// Binds to the configured host/port and serves requests until
    /// Ctrl-C is received.
    pub async fn run(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;

        self.run_with_listener(listener).await
    }

    /// Run the server with a specific listener
    ///
    /// Useful for testing with a listener bound to port 0 to get a
    /// random available port.
    pub async fn run_with_listener(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }

    /// Create a test server and return the bound address
    ///
    /// Binds to port 0, starts the server in a background task, and
    /// returns the actual bound address.
    #[cfg(test)]
    pub async fn spawn_test_server(
        config: ServerConfig,
    ) -> (std::net::SocketAddr, tokio::task::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = Self::new(config);
        let handle = tokio::spawn(async move {
            server.run_with_listener(listener).await.ok();
        });

        // Give the server a moment to start
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;

        (addr, handle)
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(err) => tracing::error!(%err, "Failed to install shutdown handler"),
    }
}
