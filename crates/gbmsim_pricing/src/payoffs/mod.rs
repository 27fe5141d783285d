//! Payoff evaluation for the four supported option families.
//!
//! Payoffs are evaluated per path from streaming statistics accumulated by
//! a [`PathObserver`], never from stored intermediate vectors. Every payoff
//! observes only the post-initiation window — columns `1..=M` of the
//! trajectory ensemble. The initial price at column 0 is excluded from
//! Asian averages and lookback extrema; this is a deliberate convention,
//! pinned by tests, not an accident of implementation.
//!
//! Rows are fully independent, so evaluation is order-independent and safe
//! to parallelise; [`evaluate_payoffs_par`] produces the identical vector
//! to [`evaluate_payoffs`] regardless of worker count.

mod observer;
mod option;

pub use observer::PathObserver;
pub use option::{evaluate_payoffs, evaluate_payoffs_par, OptionPayoff};
