//! # market_store: Record-Store Collaborator
//!
//! A plain record store behind the [`MarketStore`] capability trait:
//! `list_records` returns all stored quotes consistent at a single point in
//! time, `insert_record` appends one and assigns its primary key. The
//! pricing layer never depends on this crate; the service layer holds an
//! `Arc<dyn MarketStore>`.
//!
//! The shipped implementation is [`MemoryStore`]; any backend that can list
//! and insert quote records can stand in behind the trait.

mod error;
mod memory;
mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::{MarketStore, StoredQuote};
