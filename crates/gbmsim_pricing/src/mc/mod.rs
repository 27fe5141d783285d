//! Monte Carlo simulation and pricing.
//!
//! Three components, each depending only on the one before it:
//!
//! 1. **Path simulation** ([`paths`]): evolves an ensemble of GBM
//!    trajectories over a fixed time grid with the exact log-space update
//! 2. **Payoff evaluation** ([`crate::payoffs`]): reduces each trajectory
//!    to one non-negative payoff per option specification
//! 3. **Aggregation** ([`aggregate`]): reduces a payoff vector to the
//!    discounted Monte Carlo price estimate
//!
//! The trajectory ensemble flows strictly forward through the stages and is
//! read-only once generated, so four payoff vectors can be derived from one
//! simulation without re-drawing randomness.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloEngine
//! ├── SimulationConfig   (grid size, seed)
//! ├── EnsembleWorkspace  (pre-allocated buffers)
//! ├── SimRng             (seeded variate stream)
//! └── Orchestration
//!     ├── generate_paths() / generate_paths_par()
//!     ├── evaluate_payoffs() / evaluate_payoffs_par()
//!     └── discounted_mean_with_error()
//! ```
//!
//! # Examples
//!
//! ```rust
//! use gbmsim_pricing::mc::{MonteCarloEngine, SimulationConfig};
//! use gbmsim_pricing::payoffs::OptionPayoff;
//! use gbmsim_models::GbmParams;
//!
//! let config = SimulationConfig::builder()
//!     .n_paths(5_000)
//!     .n_steps(64)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut engine = MonteCarloEngine::new(config).unwrap();
//! let model = GbmParams::new(100.0, 0.05, 0.2, 1.0);
//!
//! // One simulated ensemble, four prices
//! let suite = engine.price_suite(model, 100.0).unwrap();
//! assert!(suite.european_call.price > 0.0);
//! assert!(suite.asian_geometric_call.price <= suite.asian_arithmetic_call.price);
//! ```

pub mod aggregate;
pub mod config;
pub mod engine;
pub mod paths;
pub mod workspace;

pub use aggregate::{discounted_mean, discounted_mean_with_error};
pub use config::{SimulationConfig, SimulationConfigBuilder, MAX_PATHS, MAX_STEPS};
pub use engine::{Greek, MonteCarloEngine, PriceEstimate, PriceSuite};
pub use paths::{generate_paths, generate_paths_par, terminal_prices};
pub use workspace::EnsembleWorkspace;
