//! Geometric Brownian Motion market parameters.
//!
//! The GBM model assumes asset prices follow
//! ```text
//! dS = r S dt + σ S dW
//! ```
//! under the risk-neutral measure, with closed-form log-space solution
//! ```text
//! S(t+Δt) = S(t) · exp((r − σ²/2)Δt + σ√Δt · Z)
//! ```
//! which is the update the simulation engine applies step by step. The
//! log-space form guarantees strictly positive prices for any step size,
//! which the additive Euler–Maruyama update on the price level does not.

use gbmsim_core::PricingError;

/// Immutable market parameters for Geometric Brownian Motion.
///
/// Supplied once per pricing run and validated eagerly before any
/// simulation work begins.
///
/// # Examples
///
/// ```
/// use gbmsim_models::GbmParams;
///
/// let params = GbmParams::new(100.0, 0.05, 0.2, 1.0);
/// assert!(params.validate().is_ok());
///
/// // Zero volatility is a valid, fully deterministic model
/// assert!(GbmParams::new(100.0, 0.05, 0.0, 1.0).validate().is_ok());
///
/// // A non-positive spot is rejected
/// assert!(GbmParams::new(0.0, 0.05, 0.2, 1.0).validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GbmParams {
    /// Initial spot price (S₀), strictly positive.
    pub spot: f64,
    /// Risk-free rate (r), annualised.
    pub rate: f64,
    /// Volatility (σ), annualised, non-negative.
    pub volatility: f64,
    /// Time to maturity (T) in years, strictly positive.
    pub maturity: f64,
}

impl GbmParams {
    /// Creates new GBM parameters.
    ///
    /// Validation is deferred to [`validate`](Self::validate) so that
    /// invalid inputs surface as structured errors at the engine boundary
    /// rather than panics at construction.
    #[inline]
    pub fn new(spot: f64, rate: f64, volatility: f64, maturity: f64) -> Self {
        Self {
            spot,
            rate,
            volatility,
            maturity,
        }
    }

    /// Checks every parameter against its valid domain.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] naming the first offending
    /// field when `spot <= 0`, `volatility < 0`, `maturity <= 0`, or any
    /// field is non-finite.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.spot.is_finite() || self.spot <= 0.0 {
            return Err(PricingError::invalid_parameter(
                "spot",
                format!("must be positive and finite, got {}", self.spot),
            ));
        }
        if !self.rate.is_finite() {
            return Err(PricingError::invalid_parameter(
                "rate",
                format!("must be finite, got {}", self.rate),
            ));
        }
        if !self.volatility.is_finite() || self.volatility < 0.0 {
            return Err(PricingError::invalid_parameter(
                "volatility",
                format!("must be non-negative and finite, got {}", self.volatility),
            ));
        }
        if !self.maturity.is_finite() || self.maturity <= 0.0 {
            return Err(PricingError::invalid_parameter(
                "maturity",
                format!("must be positive and finite, got {}", self.maturity),
            ));
        }
        Ok(())
    }

    /// Time-step size `Δt = T / M` for a grid of `n_steps` steps.
    #[inline]
    pub fn dt(&self, n_steps: usize) -> f64 {
        self.maturity / n_steps as f64
    }

    /// Risk-neutral discount factor `exp(−r·T)` to maturity.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            rate: 0.05,
            volatility: 0.2,
            maturity: 1.0,
        }
    }
}
