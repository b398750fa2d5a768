//! The storage capability trait and stored record shape.

use market_core::types::OptionQuote;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// A quote with its store-assigned primary key.
///
/// The key is owned and mutated exclusively by the store; consumers treat it
/// as opaque. On the wire the quote fields are flattened next to the id,
/// matching the stored record shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredQuote {
    /// Primary key
    pub id: u64,
    /// The quote payload
    #[serde(flatten)]
    pub quote: OptionQuote,
}

/// Capability interface over the record store.
///
/// `list_records` has no filtering, paging, or ordering guarantees beyond
/// "all currently stored records, consistent at a single point in time".
pub trait MarketStore: Send + Sync {
    /// Returns all stored records.
    fn list_records(&self) -> Result<Vec<StoredQuote>, StoreError>;

    /// Inserts a record and returns its assigned primary key.
    fn insert_record(&self, quote: OptionQuote) -> Result<u64, StoreError>;
}
