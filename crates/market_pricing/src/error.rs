//! Domain errors for the Black-76 engine.

use market_core::types::UnknownOptionTypeError;
use thiserror::Error;

/// Inputs for which the Black-76 formula is not defined.
///
/// Each variant carries the offending value. These are permanent failures:
/// retrying the same inputs always reproduces the same error.
///
/// # Examples
/// ```
/// use market_pricing::PricingError;
///
/// let err = PricingError::InvalidVolatility { volatility: -0.1 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// Time to expiry is not strictly positive.
    #[error("Invalid time to expiry: T = {expiry}")]
    InvalidTimeToExpiry {
        /// The invalid expiry value in years
        expiry: f64,
    },

    /// Implied volatility is not strictly positive.
    #[error("Invalid volatility: sigma = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Futures price or strike is not strictly positive.
    #[error("Invalid price: {price}")]
    InvalidPrice {
        /// The invalid price value
        price: f64,
    },

    /// Option type is neither call nor put.
    #[error("Unknown option type: {name}")]
    UnknownOptionType {
        /// The rejected discriminator
        name: String,
    },
}

impl From<UnknownOptionTypeError> for PricingError {
    fn from(err: UnknownOptionTypeError) -> Self {
        PricingError::UnknownOptionType { name: err.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_display_messages() {
        let err = PricingError::InvalidTimeToExpiry { expiry: 0.0 };
        assert_eq!(format!("{}", err), "Invalid time to expiry: T = 0");

        let err = PricingError::InvalidVolatility { volatility: -0.1 };
        assert_eq!(format!("{}", err), "Invalid volatility: sigma = -0.1");

        let err = PricingError::InvalidPrice { price: -75.0 };
        assert_eq!(format!("{}", err), "Invalid price: -75");

        let err = PricingError::UnknownOptionType {
            name: "straddle".to_string(),
        };
        assert_eq!(format!("{}", err), "Unknown option type: straddle");
    }

    #[test]
    fn test_from_parse_error() {
        let parse_err = market_core::types::OptionType::from_str("straddle").unwrap_err();
        let err: PricingError = parse_err.into();
        assert_eq!(
            err,
            PricingError::UnknownOptionType {
                name: "straddle".to_string()
            }
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::InvalidVolatility { volatility: 0.0 };
        let _: &dyn std::error::Error = &err;
    }
}
