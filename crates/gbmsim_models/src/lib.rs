//! # gbmsim_models (Model Layer)
//!
//! Market-parameter definitions and analytical reference prices:
//!
//! - [`gbm::GbmParams`]: the immutable market parameters of the Geometric
//!   Brownian Motion model, with eager domain validation
//! - [`analytical::BlackScholes`]: closed-form European call/put prices,
//!   the verification anchor for the Monte Carlo engine
//! - [`analytical::GeometricAsian`]: the exact closed form for a discretely
//!   monitored geometric-average Asian option, matching the simulation
//!   engine's averaging window
//!
//! The Monte Carlo engine itself lives in `gbmsim_pricing`; this crate only
//! describes what is being priced and what the answers should be where a
//! closed form exists.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analytical;
pub mod gbm;

pub use analytical::{BlackScholes, GeometricAsian};
pub use gbm::GbmParams;
