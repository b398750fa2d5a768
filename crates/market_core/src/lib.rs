//! # market_core: Foundation Types for the Market Options Service
//!
//! Bottom layer of the workspace, providing:
//! - Option types: `OptionType`, `OptionQuote` (`types`)
//! - Standard normal distribution functions: `norm_cdf`, `norm_pdf` (`math`)
//!
//! This crate has no dependency on storage or transport; the pricing and
//! service layers build on top of it.
//!
//! ## Usage
//!
//! ```rust
//! use market_core::math::distributions::norm_cdf;
//! use market_core::types::OptionType;
//!
//! let ty: OptionType = "call".parse().unwrap();
//! assert!(ty.is_call());
//!
//! let p = norm_cdf(0.0_f64);
//! assert!((p - 0.5).abs() < 1e-7);
//! ```

pub mod math;
pub mod types;

pub use types::{OptionQuote, OptionType, UnknownOptionTypeError};
