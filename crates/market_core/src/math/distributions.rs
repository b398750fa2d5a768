//! Standard normal distribution functions.
//!
//! `norm_cdf` is the accuracy-critical piece: the pricing layer rounds
//! present values to 5 decimal places downstream, so the CDF must stay well
//! inside 1e-6 absolute error. The erfc-based Abramowitz & Stegun 7.1.26
//! approximation used here has a maximum absolute error of 1.5e-7.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function, Abramowitz & Stegun 7.1.26.
///
/// Maximum absolute error 1.5e-7 over the whole real line. Negative
/// arguments are handled via erfc(-x) = 2 - erfc(x).
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let two = T::from(2.0).unwrap();

    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    let abs_x = x.abs();
    let t = one / (one + p * abs_x);

    // Horner form of the degree-5 polynomial in t
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    if x < T::zero() {
        two - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) for X ~ N(0, 1) as Phi(x) = erfc(-x / sqrt(2)) / 2.
///
/// # Examples
/// ```
/// use market_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(std::f64::consts::SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();

    half * erfc_approx(-x / sqrt_2)
}

/// Standard normal probability density function.
///
/// phi(x) = exp(-x^2 / 2) / sqrt(2 pi).
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let scale = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();

    scale * (-half * x * x).exp()
}
