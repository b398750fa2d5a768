//! Shared types for the market options service.

mod option;

pub use option::{OptionQuote, OptionType, UnknownOptionTypeError};
