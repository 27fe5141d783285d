//! # gbmsim_pricing (Engine Layer)
//!
//! Monte Carlo pricing of European-exercise options under Geometric
//! Brownian Motion. One simulated trajectory ensemble feeds four payoff
//! families — European, arithmetic Asian, geometric Asian and
//! floating-strike lookback — which are discounted into present-value
//! estimates with standard errors.
//!
//! ## Pipeline
//!
//! ```text
//! SimRng ──► generate_paths ──► (read-only ensemble)
//!                                    │
//!                 evaluate_payoffs ◄─┘  (once per option type)
//!                        │
//!              discounted_mean_with_error  (once per payoff vector)
//! ```
//!
//! ## Determinism
//!
//! Every run is a pure function of its inputs: the variate stream comes
//! from an explicitly seeded [`rng::SimRng`], the `N × M` random buffer is
//! drawn up-front in time-then-path order, and the parallel evolution and
//! evaluation routines are bit-identical to their sequential counterparts.
//! Same seed, same ensemble, any worker count.
//!
//! ## Example
//!
//! ```rust
//! use gbmsim_pricing::mc::{MonteCarloEngine, SimulationConfig};
//! use gbmsim_models::GbmParams;
//!
//! let config = SimulationConfig::builder()
//!     .n_paths(10_000)
//!     .n_steps(252)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut engine = MonteCarloEngine::new(config).unwrap();
//! let model = GbmParams::new(100.0, 0.05, 0.2, 1.0);
//!
//! let suite = engine.price_suite(model, 100.0).unwrap();
//! println!(
//!     "european {:.4} ± {:.4}",
//!     suite.european_call.price,
//!     suite.european_call.confidence_95()
//! );
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod mc;
pub mod payoffs;
pub mod rng;

// Re-exports for convenient access
pub use gbmsim_core::PricingError;
pub use gbmsim_models::GbmParams;
pub use mc::{
    discounted_mean, discounted_mean_with_error, Greek, MonteCarloEngine, PriceEstimate,
    PriceSuite, SimulationConfig, SimulationConfigBuilder,
};
pub use payoffs::{evaluate_payoffs, OptionPayoff, PathObserver};
pub use rng::SimRng;
