//! Monte Carlo pricing engine.
//!
//! [`MonteCarloEngine`] coordinates the three pipeline stages:
//!
//! 1. Random-variate generation ([`SimRng`](crate::rng::SimRng))
//! 2. Path generation ([`generate_paths`](super::paths::generate_paths))
//! 3. Payoff evaluation and discounted aggregation
//!
//! The internal [`EnsembleWorkspace`](super::workspace::EnsembleWorkspace)
//! is reused across pricing calls; above a fixed row threshold the engine
//! switches to the rayon evolution/evaluation routines, which are
//! bit-identical to their sequential counterparts, so parallelism never
//! changes a result.

use gbmsim_core::PricingError;
use gbmsim_models::GbmParams;
use tracing::debug;

use super::aggregate::discounted_mean_with_error;
use super::config::SimulationConfig;
use super::paths::{generate_paths, generate_paths_par};
use super::workspace::EnsembleWorkspace;
use crate::payoffs::{evaluate_payoffs, evaluate_payoffs_par, OptionPayoff};
use crate::rng::SimRng;

/// Row count above which the engine uses the rayon routines.
const PARALLEL_PATH_THRESHOLD: usize = 8_192;

/// Sensitivity selector for [`MonteCarloEngine::price_with_greeks`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Greek {
    /// Delta: ∂V/∂S (sensitivity to spot price)
    Delta,
    /// Gamma: ∂²V/∂S² (convexity with respect to spot)
    Gamma,
    /// Vega: ∂V/∂σ (sensitivity to volatility)
    Vega,
    /// Rho: ∂V/∂r (sensitivity to interest rate)
    Rho,
    /// Theta: ∂V/∂τ (time decay)
    Theta,
}

/// Monte Carlo price estimate with optional sensitivities.
///
/// # Examples
///
/// ```
/// use gbmsim_pricing::mc::PriceEstimate;
///
/// let estimate = PriceEstimate {
///     price: 10.5,
///     std_error: 0.05,
///     ..Default::default()
/// };
/// assert!((estimate.confidence_95() - 1.96 * 0.05).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceEstimate {
    /// Present value of the instrument.
    pub price: f64,
    /// Standard error of the estimate.
    pub std_error: f64,
    /// Delta: ∂V/∂S.
    pub delta: Option<f64>,
    /// Gamma: ∂²V/∂S².
    pub gamma: Option<f64>,
    /// Vega: ∂V/∂σ.
    pub vega: Option<f64>,
    /// Rho: ∂V/∂r.
    pub rho: Option<f64>,
    /// Theta: ∂V/∂τ.
    pub theta: Option<f64>,
}

impl PriceEstimate {
    /// 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// The four prices computed from one shared trajectory ensemble.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceSuite {
    /// European call `max(S_T − K, 0)`.
    pub european_call: PriceEstimate,
    /// Arithmetic Asian call `max(mean(S_1..S_M) − K, 0)`.
    pub asian_arithmetic_call: PriceEstimate,
    /// Geometric Asian call `max(geomean(S_1..S_M) − K, 0)`.
    pub asian_geometric_call: PriceEstimate,
    /// Floating-strike lookback call `max(S_T − min(S_1..S_M), 0)`.
    pub lookback_floating_call: PriceEstimate,
}

/// Monte Carlo pricing engine.
///
/// Owns the configuration, the reusable workspace and the seeded variate
/// stream. Each pricing call simulates an ensemble and reduces it; the
/// generator advances across calls, so consecutive prices use fresh
/// randomness while two engines built with equal configs reproduce each
/// other exactly.
///
/// # Examples
///
/// ```rust
/// use gbmsim_pricing::mc::{MonteCarloEngine, SimulationConfig};
/// use gbmsim_pricing::payoffs::OptionPayoff;
/// use gbmsim_models::GbmParams;
///
/// let config = SimulationConfig::builder()
///     .n_paths(2_000)
///     .n_steps(32)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let mut engine = MonteCarloEngine::new(config).unwrap();
/// let model = GbmParams::new(100.0, 0.05, 0.2, 1.0);
///
/// let result = engine
///     .price(model, OptionPayoff::european_call(100.0))
///     .unwrap();
/// assert!(result.price > 0.0);
/// ```
pub struct MonteCarloEngine {
    config: SimulationConfig,
    workspace: EnsembleWorkspace,
    rng: SimRng,
    simulated: bool,
}

impl MonteCarloEngine {
    /// Creates an engine with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] when the configuration is
    /// invalid.
    pub fn new(config: SimulationConfig) -> Result<Self, PricingError> {
        config.validate()?;

        let seed = config.seed().unwrap_or(0);
        let workspace = EnsembleWorkspace::new(config.n_paths(), config.n_steps());

        Ok(Self {
            config,
            workspace,
            rng: SimRng::from_seed(seed),
            simulated: false,
        })
    }

    /// Creates an engine overriding the config seed.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] when the configuration is
    /// invalid.
    pub fn with_seed(config: SimulationConfig, seed: u64) -> Result<Self, PricingError> {
        config.validate()?;
        let workspace = EnsembleWorkspace::new(config.n_paths(), config.n_steps());

        Ok(Self {
            config,
            workspace,
            rng: SimRng::from_seed(seed),
            simulated: false,
        })
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Rewinds the variate stream to the configured seed.
    pub fn reset(&mut self) {
        let seed = self.config.seed().unwrap_or(0);
        self.rng = SimRng::from_seed(seed);
        self.simulated = false;
    }

    /// Rewinds the variate stream to an explicit seed.
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.rng = SimRng::from_seed(seed);
        self.simulated = false;
    }

    /// Simulates a fresh trajectory ensemble for the given model.
    ///
    /// Validates the model eagerly, draws the full `N × M` random buffer in
    /// time-then-path order from the engine's stream, then evolves every
    /// path with the exact log-space GBM update.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] before any simulation
    /// work when a model parameter is out of domain.
    pub fn simulate(&mut self, model: GbmParams) -> Result<(), PricingError> {
        model.validate()?;

        let n_paths = self.config.n_paths();
        let n_steps = self.config.n_steps();

        self.workspace.ensure_capacity(n_paths, n_steps);
        self.rng.fill_normal(self.workspace.randoms_mut());

        if n_paths >= PARALLEL_PATH_THRESHOLD {
            generate_paths_par(&mut self.workspace, &model, n_paths, n_steps);
        } else {
            generate_paths(&mut self.workspace, &model, n_paths, n_steps);
        }
        self.simulated = true;

        debug!(n_paths, n_steps, "generated trajectory ensemble");
        Ok(())
    }

    /// The current trajectory ensemble, flat row-major
    /// `n_paths × (n_steps + 1)`.
    ///
    /// Meaningful only after [`simulate`](Self::simulate); exposed so an
    /// external presentation layer can inspect the paths.
    #[inline]
    pub fn paths(&self) -> &[f64] {
        self.workspace.paths()
    }

    /// Evaluates one payoff over the current ensemble.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] when the payoff's strike
    /// is out of domain or no ensemble has been simulated yet.
    pub fn evaluate(&self, payoff: OptionPayoff) -> Result<Vec<f64>, PricingError> {
        payoff.validate()?;
        if !self.simulated {
            return Err(PricingError::invalid_parameter(
                "ensemble",
                "simulate() must run before payoffs can be evaluated",
            ));
        }

        let n_paths = self.config.n_paths();
        let n_steps = self.config.n_steps();
        let paths = self.workspace.paths();

        Ok(if n_paths >= PARALLEL_PATH_THRESHOLD {
            evaluate_payoffs_par(paths, n_paths, n_steps, payoff)
        } else {
            evaluate_payoffs(paths, n_paths, n_steps, payoff)
        })
    }

    /// Prices one payoff: simulate, evaluate, discount.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] for out-of-domain model
    /// or payoff parameters; validation happens before any simulation work.
    pub fn price(
        &mut self,
        model: GbmParams,
        payoff: OptionPayoff,
    ) -> Result<PriceEstimate, PricingError> {
        payoff.validate()?;
        self.simulate(model)?;

        let payoffs = self.evaluate(payoff)?;
        let (price, std_error) =
            discounted_mean_with_error(&payoffs, model.rate, model.maturity)?;

        Ok(PriceEstimate {
            price,
            std_error,
            ..Default::default()
        })
    }

    /// Prices the full option suite from a single simulated ensemble.
    ///
    /// The European, arithmetic Asian and geometric Asian calls share the
    /// strike `K`; the lookback call's floating strike is the per-path
    /// window minimum. All four payoff vectors derive from the same
    /// trajectory ensemble, so cross-type comparisons (for example the
    /// AM-GM ordering of the two Asian prices) hold pathwise, not merely in
    /// expectation.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] for an out-of-domain
    /// model or strike; the whole run aborts before simulation, no option
    /// type is silently skipped.
    pub fn price_suite(
        &mut self,
        model: GbmParams,
        strike: f64,
    ) -> Result<PriceSuite, PricingError> {
        let european = OptionPayoff::european_call(strike);
        let asian_arithmetic = OptionPayoff::asian_arithmetic_call(strike);
        let asian_geometric = OptionPayoff::asian_geometric_call(strike);
        let lookback = OptionPayoff::lookback_floating_call();

        european.validate()?;
        self.simulate(model)?;

        let estimate = |payoff: OptionPayoff| -> Result<PriceEstimate, PricingError> {
            let payoffs = self.evaluate(payoff)?;
            let (price, std_error) =
                discounted_mean_with_error(&payoffs, model.rate, model.maturity)?;
            Ok(PriceEstimate {
                price,
                std_error,
                ..Default::default()
            })
        };

        let suite = PriceSuite {
            european_call: estimate(european)?,
            asian_arithmetic_call: estimate(asian_arithmetic)?,
            asian_geometric_call: estimate(asian_geometric)?,
            lookback_floating_call: estimate(lookback)?,
        };

        debug!(strike, "priced option suite from shared ensemble");
        Ok(suite)
    }

    /// Prices a payoff together with selected bump-and-revalue Greeks.
    ///
    /// Every revaluation rewinds the variate stream to the engine seed
    /// (common random numbers), so finite differences are not polluted by
    /// independent sampling noise.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] for out-of-domain model
    /// or payoff parameters.
    pub fn price_with_greeks(
        &mut self,
        model: GbmParams,
        payoff: OptionPayoff,
        greeks: &[Greek],
    ) -> Result<PriceEstimate, PricingError> {
        let seed = self.rng.seed();

        self.reset_with_seed(seed);
        let mut result = self.price(model, payoff)?;

        for greek in greeks {
            match greek {
                Greek::Delta => {
                    result.delta = Some(self.compute_delta(model, payoff, seed)?);
                }
                Greek::Gamma => {
                    result.gamma = Some(self.compute_gamma(model, payoff, seed)?);
                }
                Greek::Vega => {
                    result.vega = Some(self.compute_vega(model, payoff, seed)?);
                }
                Greek::Rho => {
                    result.rho = Some(self.compute_rho(model, payoff, seed)?);
                }
                Greek::Theta => {
                    result.theta = Some(self.compute_theta(model, payoff, seed)?);
                }
            }
        }

        Ok(result)
    }

    /// Reprices at a shifted model with the stream rewound to `seed`.
    fn revalue(
        &mut self,
        model: GbmParams,
        payoff: OptionPayoff,
        seed: u64,
    ) -> Result<f64, PricingError> {
        self.reset_with_seed(seed);
        Ok(self.price(model, payoff)?.price)
    }

    /// Delta via central differences.
    fn compute_delta(
        &mut self,
        model: GbmParams,
        payoff: OptionPayoff,
        seed: u64,
    ) -> Result<f64, PricingError> {
        let bump = (0.01 * model.spot).max(0.01);

        let up = self.revalue(GbmParams { spot: model.spot + bump, ..model }, payoff, seed)?;
        let down = self.revalue(GbmParams { spot: model.spot - bump, ..model }, payoff, seed)?;

        Ok((up - down) / (2.0 * bump))
    }

    /// Gamma via the three-point second difference.
    fn compute_gamma(
        &mut self,
        model: GbmParams,
        payoff: OptionPayoff,
        seed: u64,
    ) -> Result<f64, PricingError> {
        let bump = (0.01 * model.spot).max(0.01);

        let mid = self.revalue(model, payoff, seed)?;
        let up = self.revalue(GbmParams { spot: model.spot + bump, ..model }, payoff, seed)?;
        let down = self.revalue(GbmParams { spot: model.spot - bump, ..model }, payoff, seed)?;

        Ok((up - 2.0 * mid + down) / (bump * bump))
    }

    /// Vega via central differences; the down bump clamps at a small
    /// positive volatility.
    fn compute_vega(
        &mut self,
        model: GbmParams,
        payoff: OptionPayoff,
        seed: u64,
    ) -> Result<f64, PricingError> {
        let bump = 0.01;

        let up = self.revalue(
            GbmParams { volatility: model.volatility + bump, ..model },
            payoff,
            seed,
        )?;
        let down = self.revalue(
            GbmParams {
                volatility: (model.volatility - bump).max(0.001),
                ..model
            },
            payoff,
            seed,
        )?;

        Ok((up - down) / (2.0 * bump))
    }

    /// Rho via central differences; the discount factor moves with the
    /// rate because pricing derives it from the model.
    fn compute_rho(
        &mut self,
        model: GbmParams,
        payoff: OptionPayoff,
        seed: u64,
    ) -> Result<f64, PricingError> {
        let bump = 0.01;

        let up = self.revalue(GbmParams { rate: model.rate + bump, ..model }, payoff, seed)?;
        let down = self.revalue(GbmParams { rate: model.rate - bump, ..model }, payoff, seed)?;

        Ok((up - down) / (2.0 * bump))
    }

    /// Theta via a one-day forward difference.
    fn compute_theta(
        &mut self,
        model: GbmParams,
        payoff: OptionPayoff,
        seed: u64,
    ) -> Result<f64, PricingError> {
        let bump = 1.0 / 252.0;

        let shorter = self.revalue(
            GbmParams {
                maturity: (model.maturity - bump).max(0.001),
                ..model
            },
            payoff,
            seed,
        )?;
        let original = self.revalue(model, payoff, seed)?;

        Ok(-(original - shorter) / bump)
    }
}
