//! In-memory record store.

use std::sync::RwLock;

use market_core::types::{OptionQuote, OptionType};

use crate::error::StoreError;
use crate::store::{MarketStore, StoredQuote};

#[derive(Debug, Default)]
struct Inner {
    records: Vec<StoredQuote>,
    next_id: u64,
}

/// Thread-safe in-memory implementation of [`MarketStore`].
///
/// Records live in a vector behind an `RwLock`; ids are assigned
/// sequentially starting at 1. `list_records` clones a snapshot under the
/// read lock, so every response is consistent at a single point in time.
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Creates a store seeded with the two demo records (a Brent call and a
    /// Henry Hub put).
    pub fn with_demo_data() -> Self {
        let store = Self::new();

        let seeds = [
            OptionQuote {
                option: "BRN".to_string(),
                option_type: OptionType::Call,
                underlying_price: 75.0,
                strike_price: 100.0,
                time_to_expiry: 0.25,
                risk_free_rate: 0.01,
                implied_volatility: 0.2,
            },
            OptionQuote {
                option: "HH".to_string(),
                option_type: OptionType::Put,
                underlying_price: 2.0,
                strike_price: 10.0,
                time_to_expiry: 0.5,
                risk_free_rate: 0.02,
                implied_volatility: 0.25,
            },
        ];

        for quote in seeds {
            // A fresh store cannot be poisoned
            if store.insert_record(quote).is_err() {
                unreachable!("fresh store lock cannot be poisoned");
            }
        }

        tracing::info!("Demo market data seeded");
        store
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketStore for MemoryStore {
    fn list_records(&self) -> Result<Vec<StoredQuote>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.records.clone())
    }

    fn insert_record(&self, quote: OptionQuote) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;

        let id = inner.next_id;
        inner.next_id += 1;
        inner.records.push(StoredQuote { id, quote });

        tracing::debug!(id, "Record inserted");
        Ok(id)
    }
}
