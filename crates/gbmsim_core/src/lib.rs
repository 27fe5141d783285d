//! # gbmsim_core (Foundation Layer)
//!
//! Shared foundation for the gbmsim workspace:
//!
//! - [`types::PricingError`]: the structured error taxonomy used at every
//!   fallible boundary of the simulation and pricing crates
//! - [`math::distributions`]: standard-normal CDF/PDF, generic over
//!   `num_traits::Float`, used by the analytical reference models
//!
//! This crate has no knowledge of models or simulation; it only provides
//! the vocabulary the upper layers agree on.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod math;
pub mod types;

pub use types::PricingError;
