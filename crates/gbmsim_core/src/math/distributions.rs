//! Standard normal distribution functions.
//!
//! Provides the cumulative distribution function ([`norm_cdf`]) and the
//! probability density function ([`norm_pdf`]) of the standard normal
//! distribution, generic over `num_traits::Float` so the analytical models
//! work for both `f64` and `f32`.
//!
//! The CDF uses the Abramowitz & Stegun 7.1.26 approximation of the
//! complementary error function (maximum absolute error 1.5e-7).

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function via the Abramowitz & Stegun 7.1.26
/// polynomial, evaluated with Horner's method.
///
/// erfc(-x) = 2 - erfc(x) handles the negative half-line.
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let two = T::from(2.0).unwrap();

    let abs_x = x.abs();

    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    let t = one / (one + p * abs_x);
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
/// Computes `P(X <= x)` for `X ~ N(0, 1)` as `Φ(x) = erfc(-x/√2) / 2`.
///
/// # Examples
/// ```
/// use gbmsim_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-4.0_f64) < 1e-3);
/// assert!(norm_cdf(4.0_f64) > 0.999);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(std::f64::consts::SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();

    half * erfc_approx(-x / sqrt_2)
}

/// Standard normal probability density function.
///
/// Computes `φ(x) = exp(-x²/2) / √(2π)`.
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let scale = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();

    scale * (-half * x * x).exp()
}
