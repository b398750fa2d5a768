//! REST API server for the market options service
//!
//! Exposes CRUD access to the market option record store plus the Black-76
//! present-value endpoint. The pricing engine and the record store are
//! consumed through the `market_pricing` and `market_store` crates.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
