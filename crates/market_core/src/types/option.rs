//! Option discriminator and market quote record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an option-type string that is neither
/// "call" nor "put".
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown option type: {0}")]
pub struct UnknownOptionTypeError(pub String);

/// Type of a European option on a futures contract.
///
/// The wire representation is the lowercase string used by the storage
/// records ("call" / "put"); parsing is case-insensitive.
///
/// # Examples
/// ```
/// use market_core::types::OptionType;
///
/// assert_eq!("CALL".parse::<OptionType>().unwrap(), OptionType::Call);
/// assert!("straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// Call option: payoff max(F - K, 0)
    Call,
    /// Put option: payoff max(K - F, 0)
    Put,
}

impl OptionType {
    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }
}

impl FromStr for OptionType {
    type Err = UnknownOptionTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(UnknownOptionTypeError(s.to_string())),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

/// A market option quote as held by the record store.
///
/// Field names match the stored record shape. All five numeric fields are
/// required; the pricing layer enforces the positivity constraints
/// (F > 0, K > 0, T > 0, sigma > 0), not this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionQuote {
    /// Option label (e.g. "BRN")
    pub option: String,
    /// Call or put
    pub option_type: OptionType,
    /// Futures price (F)
    pub underlying_price: f64,
    /// Strike price (K)
    pub strike_price: f64,
    /// Time to expiry in years (T)
    pub time_to_expiry: f64,
    /// Continuously-compounded annual risk-free rate (r), may be negative
    pub risk_free_rate: f64,
    /// Annualised implied volatility (sigma)
    pub implied_volatility: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_type_parse_lowercase() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("put".parse::<OptionType>().unwrap(), OptionType::Put);
    }

    #[test]
    fn test_option_type_parse_case_insensitive() {
        assert_eq!("Call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("PUT".parse::<OptionType>().unwrap(), OptionType::Put);
    }

    #[test]
    fn test_option_type_parse_unknown() {
        let err = "straddle".parse::<OptionType>().unwrap_err();
        assert_eq!(err, UnknownOptionTypeError("straddle".to_string()));
        assert_eq!(format!("{}", err), "Unknown option type: straddle");
    }

    #[test]
    fn test_option_type_display_roundtrip() {
        for ty in [OptionType::Call, OptionType::Put] {
            let parsed: OptionType = ty.to_string().parse().unwrap();
            assert_eq!(parsed, ty);
        }
    }

    #[test]
    fn test_option_type_predicates() {
        assert!(OptionType::Call.is_call());
        assert!(!OptionType::Call.is_put());
        assert!(OptionType::Put.is_put());
        assert!(!OptionType::Put.is_call());
    }

    #[test]
    fn test_option_type_serde_lowercase() {
        assert_eq!(serde_json::to_string(&OptionType::Call).unwrap(), "\"call\"");
        let ty: OptionType = serde_json::from_str("\"put\"").unwrap();
        assert_eq!(ty, OptionType::Put);
    }

    #[test]
    fn test_quote_deserialises_from_record_shape() {
        let json = r#"{
            "option": "BRN",
            "option_type": "call",
            "underlying_price": 75.0,
            "strike_price": 100.0,
            "time_to_expiry": 0.25,
            "risk_free_rate": 0.01,
            "implied_volatility": 0.2
        }"#;

        let quote: OptionQuote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.option, "BRN");
        assert_eq!(quote.option_type, OptionType::Call);
        assert_eq!(quote.underlying_price, 75.0);
        assert_eq!(quote.strike_price, 100.0);
        assert_eq!(quote.time_to_expiry, 0.25);
        assert_eq!(quote.risk_free_rate, 0.01);
        assert_eq!(quote.implied_volatility, 0.2);
    }

    #[test]
    fn test_quote_rejects_missing_numeric_field() {
        // implied_volatility absent: the field is required, not nullable
        let json = r#"{
            "option": "HH",
            "option_type": "put",
            "underlying_price": 2.0,
            "strike_price": 10.0,
            "time_to_expiry": 0.5,
            "risk_free_rate": 0.02
        }"#;

        assert!(serde_json::from_str::<OptionQuote>(json).is_err());
    }

    #[test]
    fn test_quote_rejects_unknown_option_type() {
        let json = r#"{
            "option": "X",
            "option_type": "straddle",
            "underlying_price": 1.0,
            "strike_price": 1.0,
            "time_to_expiry": 1.0,
            "risk_free_rate": 0.0,
            "implied_volatility": 0.1
        }"#;

        assert!(serde_json::from_str::<OptionQuote>(json).is_err());
    }
}
