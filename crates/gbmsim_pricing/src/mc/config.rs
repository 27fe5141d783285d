//! Simulation grid configuration.

use gbmsim_core::PricingError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Monte Carlo simulation configuration.
///
/// Immutable once built; construct via [`SimulationConfig::builder`].
///
/// # Examples
///
/// ```rust
/// use gbmsim_pricing::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_paths(10_000)
///     .n_steps(252)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// Number of simulated paths (N).
    n_paths: usize,
    /// Number of time steps per path (M).
    n_steps: usize,
    /// Seed for reproducibility; `None` falls back to seed 0.
    seed: Option<u64>,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of simulated paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the configured seed, if any.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] when `n_paths` is outside
    /// `[1, 10_000_000]` or `n_steps` outside `[1, 10_000]`.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(PricingError::invalid_parameter(
                "n_paths",
                format!("must be in [1, {MAX_PATHS}], got {}", self.n_paths),
            ));
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(PricingError::invalid_parameter(
                "n_steps",
                format!("must be in [1, {MAX_STEPS}], got {}", self.n_steps),
            ));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`] with validation at build time.
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the number of simulated paths.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of time steps per path.
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the reproducibility seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] when a required dimension
    /// is missing or out of range.
    pub fn build(self) -> Result<SimulationConfig, PricingError> {
        let n_paths = self
            .n_paths
            .ok_or_else(|| PricingError::invalid_parameter("n_paths", "must be specified"))?;
        let n_steps = self
            .n_steps
            .ok_or_else(|| PricingError::invalid_parameter("n_steps", "must be specified"))?;

        let config = SimulationConfig {
            n_paths,
            n_steps,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}
