//! Black-Scholes pricing for European options.
//!
//! Closed forms used to anchor the Monte Carlo estimates:
//!
//! **Call**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put**:  P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! with d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T) and d₂ = d₁ - σ√T.

use gbmsim_core::math::distributions::{norm_cdf, norm_pdf};
use gbmsim_core::PricingError;

/// Black-Scholes model for European option pricing.
///
/// # Examples
/// ```
/// use gbmsim_models::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let call = bs.price_call(100.0, 1.0);
/// let put = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let forward = 100.0 - 100.0 * (-0.05_f64).exp();
/// assert!((call - put - forward).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes {
    /// Spot price (S).
    spot: f64,
    /// Risk-free rate (r).
    rate: f64,
    /// Volatility (σ).
    volatility: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] when `spot <= 0` or
    /// `volatility <= 0`. Zero volatility has no d₁/d₂; degenerate cases
    /// are priced directly from the deterministic forward instead.
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, PricingError> {
        if !spot.is_finite() || spot <= 0.0 {
            return Err(PricingError::invalid_parameter(
                "spot",
                format!("must be positive and finite, got {spot}"),
            ));
        }
        if !volatility.is_finite() || volatility <= 0.0 {
            return Err(PricingError::invalid_parameter(
                "volatility",
                format!("must be positive and finite, got {volatility}"),
            ));
        }
        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// The d₁ term: (ln(S/K) + (r + σ²/2)T) / (σ√T).
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + 0.5 * self.volatility * self.volatility) * expiry;
        (log_moneyness + drift) / vol_sqrt_t
    }

    /// The d₂ term: d₁ - σ√T.
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// European call price C = S·N(d₁) - K·e^(-rT)·N(d₂).
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();
        self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// European put price P = K·e^(-rT)·N(-d₂) - S·N(-d₁).
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();
        strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }

    /// Delta: N(d₁) for a call, N(d₁) - 1 for a put.
    #[inline]
    pub fn delta(&self, strike: f64, expiry: f64, is_call: bool) -> f64 {
        let n_d1 = norm_cdf(self.d1(strike, expiry));
        if is_call {
            n_d1
        } else {
            n_d1 - 1.0
        }
    }

    /// Vega: S·√T·φ(d₁), identical for call and put.
    #[inline]
    pub fn vega(&self, strike: f64, expiry: f64) -> f64 {
        self.spot * expiry.sqrt() * norm_pdf(self.d1(strike, expiry))
    }
}
