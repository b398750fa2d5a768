//! Black-76 pricing for European options on futures.
//!
//! ## Mathematical Formulas
//!
//! **Call**: PV = e^(-rT) · (F·N(d₁) - K·N(d₂))
//! **Put**:  PV = e^(-rT) · (K·N(-d₂) - F·N(-d₁))
//!
//! Where:
//! - d₁ = (ln(F/K) + (σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! The model discounts the expected payoff on the futures price F directly;
//! unlike Black-Scholes there is no drift term in d₁.

use num_traits::Float;

use market_core::math::distributions::norm_cdf;
use market_core::types::{OptionQuote, OptionType};

use crate::error::PricingError;

/// Black-76 model for a single futures underlying.
///
/// Holds the market-side parameters (futures price, discount rate,
/// volatility); strike and expiry are per-call arguments. The constructor
/// rejects non-positive forward and volatility; each pricing call rejects
/// non-positive strike and expiry.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g. `f64`)
///
/// # Examples
/// ```
/// use market_pricing::Black76;
///
/// let model = Black76::new(75.0_f64, 0.01, 0.2).unwrap();
/// let call = model.price_call(100.0, 0.25).unwrap();
/// let put = model.price_put(100.0, 0.25).unwrap();
///
/// // Put-call parity: C - P = e^(-rT) * (F - K)
/// let forward = (-0.01_f64 * 0.25).exp() * (75.0 - 100.0);
/// assert!((call - put - forward).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Black76<T: Float> {
    /// Futures price (F)
    forward: T,
    /// Continuously-compounded risk-free rate (r)
    rate: T,
    /// Implied volatility (σ)
    volatility: T,
}

impl<T: Float> Black76<T> {
    /// Creates a new Black-76 model.
    ///
    /// # Errors
    /// - `PricingError::InvalidPrice` if forward <= 0
    /// - `PricingError::InvalidVolatility` if volatility <= 0
    pub fn new(forward: T, rate: T, volatility: T) -> Result<Self, PricingError> {
        let zero = T::zero();

        if forward <= zero {
            return Err(PricingError::InvalidPrice {
                price: forward.to_f64().unwrap_or(0.0),
            });
        }

        if volatility <= zero {
            return Err(PricingError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(0.0),
            });
        }

        Ok(Self {
            forward,
            rate,
            volatility,
        })
    }

    /// Returns the futures price.
    #[inline]
    pub fn forward(&self) -> T {
        self.forward
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Validates the per-call terms: strike > 0 and expiry > 0.
    fn check_terms(&self, strike: T, expiry: T) -> Result<(), PricingError> {
        let zero = T::zero();

        if expiry <= zero {
            return Err(PricingError::InvalidTimeToExpiry {
                expiry: expiry.to_f64().unwrap_or(0.0),
            });
        }

        if strike <= zero {
            return Err(PricingError::InvalidPrice {
                price: strike.to_f64().unwrap_or(0.0),
            });
        }

        Ok(())
    }

    /// Computes the d₁ term.
    ///
    /// d₁ = (ln(F/K) + (σ²/2)T) / (σ√T)
    ///
    /// # Errors
    /// Rejects non-positive strike or expiry, for which the log-vol term is
    /// undefined.
    pub fn d1(&self, strike: T, expiry: T) -> Result<T, PricingError> {
        self.check_terms(strike, expiry)?;

        let half = T::from(0.5).unwrap();
        let vol_sqrt_t = self.volatility * expiry.sqrt();

        let log_moneyness = (self.forward / strike).ln();
        let variance = half * self.volatility * self.volatility * expiry;

        Ok((log_moneyness + variance) / vol_sqrt_t)
    }

    /// Computes the d₂ term.
    ///
    /// d₂ = d₁ - σ√T
    pub fn d2(&self, strike: T, expiry: T) -> Result<T, PricingError> {
        let d1 = self.d1(strike, expiry)?;
        Ok(d1 - self.volatility * expiry.sqrt())
    }

    /// Computes the call present value.
    ///
    /// PV = e^(-rT) · (F·N(d₁) - K·N(d₂))
    ///
    /// Returns full precision; callers round for display.
    pub fn price_call(&self, strike: T, expiry: T) -> Result<T, PricingError> {
        let d1 = self.d1(strike, expiry)?;
        let d2 = d1 - self.volatility * expiry.sqrt();

        let discount = (-self.rate * expiry).exp();
        Ok(discount * (self.forward * norm_cdf(d1) - strike * norm_cdf(d2)))
    }

    /// Computes the put present value.
    ///
    /// PV = e^(-rT) · (K·N(-d₂) - F·N(-d₁))
    pub fn price_put(&self, strike: T, expiry: T) -> Result<T, PricingError> {
        let d1 = self.d1(strike, expiry)?;
        let d2 = d1 - self.volatility * expiry.sqrt();

        let discount = (-self.rate * expiry).exp();
        Ok(discount * (strike * norm_cdf(-d2) - self.forward * norm_cdf(-d1)))
    }

    /// Prices a call or put per the discriminator.
    pub fn price(&self, strike: T, expiry: T, option_type: OptionType) -> Result<T, PricingError> {
        match option_type {
            OptionType::Call => self.price_call(strike, expiry),
            OptionType::Put => self.price_put(strike, expiry),
        }
    }
}

/// Computes the Black-76 present value from scalar inputs.
///
/// Argument order follows the formula: futures price F, strike K, time to
/// expiry T in years, risk-free rate r, implied volatility σ, option type.
///
/// # Errors
/// - `InvalidTimeToExpiry` if T <= 0
/// - `InvalidVolatility` if σ <= 0
/// - `InvalidPrice` if F <= 0 or K <= 0
///
/// # Examples
/// ```
/// use market_core::types::OptionType;
/// use market_pricing::present_value;
///
/// let pv = present_value(2.0, 10.0, 0.5, 0.02, 0.25, OptionType::Put).unwrap();
/// assert!((pv - 7.9204).abs() < 1e-4);
/// ```
pub fn present_value(
    forward: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
) -> Result<f64, PricingError> {
    Black76::new(forward, rate, volatility)?.price(strike, expiry, option_type)
}

/// Like [`present_value`], with the option type given as a string
/// ("call" / "put", case-insensitive).
///
/// # Errors
/// `UnknownOptionType` for any other discriminator, plus the numeric domain
/// errors of [`present_value`].
pub fn present_value_str(
    forward: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: &str,
) -> Result<f64, PricingError> {
    let ty: OptionType = option_type.parse()?;
    present_value(forward, strike, expiry, rate, volatility, ty)
}

/// Computes the present value of a stored quote.
///
/// The quote is read-only: the engine never mutates or retains it.
pub fn present_value_of(quote: &OptionQuote) -> Result<f64, PricingError> {
    present_value(
        quote.underlying_price,
        quote.strike_price,
        quote.time_to_expiry,
        quote.risk_free_rate,
        quote.implied_volatility,
        quote.option_type,
    )
}

/// Checks that a quote's numeric fields are in the pricing domain without
/// computing a price. Used by the insert path to reject records that could
/// never be priced.
pub fn validate(quote: &OptionQuote) -> Result<(), PricingError> {
    let model = Black76::new(
        quote.underlying_price,
        quote.risk_free_rate,
        quote.implied_volatility,
    )?;
    model.check_terms(quote.strike_price, quote.time_to_expiry)
}
