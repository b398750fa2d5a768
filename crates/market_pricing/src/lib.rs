//! # market_pricing: Black-76 Present-Value Engine
//!
//! Closed-form pricing of European options on futures contracts under the
//! Black-76 model. The engine is pure and stateless: no I/O, no process-wide
//! state, safe to call concurrently from any number of request handlers.
//!
//! Undefined-input cases (T <= 0, sigma <= 0, F <= 0, K <= 0, unknown option
//! type) are explicit [`PricingError`] variants, never silent NaN.
//!
//! ## Usage
//!
//! ```rust
//! use market_core::types::OptionType;
//! use market_pricing::present_value;
//!
//! let pv = present_value(75.0, 100.0, 0.25, 0.01, 0.2, OptionType::Call).unwrap();
//! assert!(pv > 0.0);
//!
//! // T = 0 is a domain error, not NaN
//! assert!(present_value(75.0, 100.0, 0.0, 0.01, 0.2, OptionType::Call).is_err());
//! ```

mod black76;
mod error;

pub use black76::{present_value, present_value_of, present_value_str, validate, Black76};
pub use error::PricingError;
