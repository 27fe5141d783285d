//! Option payoff definitions and per-path evaluation.
//!
//! All payoffs clamp at zero with a hard `max(x, 0)`: a payoff vector entry
//! is never negative. Asian averages and lookback extrema are taken over
//! the post-initiation window (columns `1..=M`); the terminal price is
//! column `M`.

use rayon::prelude::*;

use gbmsim_core::PricingError;

use super::observer::PathObserver;

/// Option payoff specification.
///
/// Enum dispatch keeps the per-row evaluation monomorphic and branch-cheap.
/// Strikes travel with the payoff, not with the market model: four payoff
/// vectors derived from the same trajectory ensemble may coexist, each with
/// its own strike.
///
/// # Examples
///
/// ```
/// use gbmsim_pricing::payoffs::OptionPayoff;
///
/// let call = OptionPayoff::european_call(100.0);
/// assert_eq!(call.strike(), Some(100.0));
/// assert!(call.validate().is_ok());
///
/// // The floating-strike lookback has no fixed strike
/// let lookback = OptionPayoff::lookback_floating_call();
/// assert_eq!(lookback.strike(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionPayoff {
    /// European call: `max(S_T − K, 0)`. Depends only on the terminal column.
    EuropeanCall {
        /// Strike price.
        strike: f64,
    },
    /// European put: `max(K − S_T, 0)`.
    EuropeanPut {
        /// Strike price.
        strike: f64,
    },
    /// Arithmetic Asian call: `max(mean(S_1..S_M) − K, 0)`.
    AsianArithmeticCall {
        /// Strike price.
        strike: f64,
    },
    /// Arithmetic Asian put: `max(K − mean(S_1..S_M), 0)`.
    AsianArithmeticPut {
        /// Strike price.
        strike: f64,
    },
    /// Geometric Asian call: `max(exp(mean(ln S_1..ln S_M)) − K, 0)`.
    ///
    /// The average is taken in the log domain and exponentiated once, never
    /// as a literal product of M terms.
    AsianGeometricCall {
        /// Strike price.
        strike: f64,
    },
    /// Geometric Asian put: `max(K − exp(mean(ln S_1..ln S_M)), 0)`.
    AsianGeometricPut {
        /// Strike price.
        strike: f64,
    },
    /// Floating-strike lookback call: `max(S_T − min(S_1..S_M), 0)`.
    LookbackFloatingCall,
    /// Floating-strike lookback put: `max(max(S_1..S_M) − S_T, 0)`.
    LookbackFloatingPut,
}

impl OptionPayoff {
    /// Creates a European call.
    #[inline]
    pub fn european_call(strike: f64) -> Self {
        Self::EuropeanCall { strike }
    }

    /// Creates a European put.
    #[inline]
    pub fn european_put(strike: f64) -> Self {
        Self::EuropeanPut { strike }
    }

    /// Creates an arithmetic Asian call.
    #[inline]
    pub fn asian_arithmetic_call(strike: f64) -> Self {
        Self::AsianArithmeticCall { strike }
    }

    /// Creates an arithmetic Asian put.
    #[inline]
    pub fn asian_arithmetic_put(strike: f64) -> Self {
        Self::AsianArithmeticPut { strike }
    }

    /// Creates a geometric Asian call.
    #[inline]
    pub fn asian_geometric_call(strike: f64) -> Self {
        Self::AsianGeometricCall { strike }
    }

    /// Creates a geometric Asian put.
    #[inline]
    pub fn asian_geometric_put(strike: f64) -> Self {
        Self::AsianGeometricPut { strike }
    }

    /// Creates a floating-strike lookback call.
    #[inline]
    pub fn lookback_floating_call() -> Self {
        Self::LookbackFloatingCall
    }

    /// Creates a floating-strike lookback put.
    #[inline]
    pub fn lookback_floating_put() -> Self {
        Self::LookbackFloatingPut
    }

    /// Returns the fixed strike, if this payoff has one.
    #[inline]
    pub fn strike(&self) -> Option<f64> {
        match *self {
            Self::EuropeanCall { strike }
            | Self::EuropeanPut { strike }
            | Self::AsianArithmeticCall { strike }
            | Self::AsianArithmeticPut { strike }
            | Self::AsianGeometricCall { strike }
            | Self::AsianGeometricPut { strike } => Some(strike),
            Self::LookbackFloatingCall | Self::LookbackFloatingPut => None,
        }
    }

    /// Validates the payoff parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] when a fixed strike is
    /// negative or non-finite.
    pub fn validate(&self) -> Result<(), PricingError> {
        if let Some(strike) = self.strike() {
            if !strike.is_finite() || strike < 0.0 {
                return Err(PricingError::invalid_parameter(
                    "strike",
                    format!("must be non-negative and finite, got {strike}"),
                ));
            }
        }
        Ok(())
    }

    /// Computes the payoff from accumulated path statistics.
    ///
    /// The observer must have seen the post-initiation window and carry the
    /// terminal price.
    #[inline]
    pub fn compute(&self, observer: &PathObserver<f64>) -> f64 {
        match *self {
            Self::EuropeanCall { strike } => (observer.terminal() - strike).max(0.0),
            Self::EuropeanPut { strike } => (strike - observer.terminal()).max(0.0),
            Self::AsianArithmeticCall { strike } => {
                (observer.arithmetic_average() - strike).max(0.0)
            }
            Self::AsianArithmeticPut { strike } => {
                (strike - observer.arithmetic_average()).max(0.0)
            }
            Self::AsianGeometricCall { strike } => {
                (observer.geometric_average() - strike).max(0.0)
            }
            Self::AsianGeometricPut { strike } => {
                (strike - observer.geometric_average()).max(0.0)
            }
            Self::LookbackFloatingCall => (observer.terminal() - observer.minimum()).max(0.0),
            Self::LookbackFloatingPut => (observer.maximum() - observer.terminal()).max(0.0),
        }
    }
}

/// Builds the observer for one ensemble row.
///
/// Observes columns `1..=M` and records column `M` as the terminal price;
/// column 0 (the initial spot) is excluded from every window statistic.
#[inline]
fn observe_row(row: &[f64]) -> PathObserver<f64> {
    let mut observer = PathObserver::new();
    for &price in &row[1..] {
        observer.observe(price);
    }
    observer.set_terminal(row[row.len() - 1]);
    observer
}

/// Evaluates a payoff over every row of a trajectory ensemble.
///
/// `paths` is the flat row-major ensemble of logical shape
/// `n_paths × (n_steps + 1)`. Returns one non-negative payoff per path; an
/// ensemble with zero rows yields an empty vector (callers aggregating the
/// result must handle that case explicitly).
///
/// # Panics
///
/// Panics in debug builds if `paths` is shorter than the logical shape
/// requires.
///
/// # Examples
///
/// ```
/// use gbmsim_pricing::payoffs::{evaluate_payoffs, OptionPayoff};
///
/// // One path, two steps: [S0, S1, S2] = [100, 110, 120]
/// let paths = vec![100.0, 110.0, 120.0];
/// let payoff = OptionPayoff::asian_arithmetic_call(100.0);
///
/// // The average covers S1 and S2 only: (110 + 120)/2 - 100 = 15
/// let payoffs = evaluate_payoffs(&paths, 1, 2, payoff);
/// assert_eq!(payoffs, vec![15.0]);
/// ```
pub fn evaluate_payoffs(
    paths: &[f64],
    n_paths: usize,
    n_steps: usize,
    payoff: OptionPayoff,
) -> Vec<f64> {
    let stride = n_steps + 1;
    debug_assert!(paths.len() >= n_paths * stride);

    (0..n_paths)
        .map(|path_idx| {
            let row = &paths[path_idx * stride..(path_idx + 1) * stride];
            payoff.compute(&observe_row(row))
        })
        .collect()
}

/// Parallel variant of [`evaluate_payoffs`].
///
/// Rows are independent, so the result is identical to the sequential
/// evaluation for any worker count.
pub fn evaluate_payoffs_par(
    paths: &[f64],
    n_paths: usize,
    n_steps: usize,
    payoff: OptionPayoff,
) -> Vec<f64> {
    let stride = n_steps + 1;
    debug_assert!(paths.len() >= n_paths * stride);

    (0..n_paths)
        .into_par_iter()
        .map(|path_idx| {
            let row = &paths[path_idx * stride..(path_idx + 1) * stride];
            payoff.compute(&observe_row(row))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // Handcrafted 1-path, 2-step ensemble: columns [S0, S1, S2]
    const ROW: [f64; 3] = [100.0, 110.0, 120.0];

    #[test]
    fn test_strike_accessor() {
        assert_eq!(OptionPayoff::european_call(95.0).strike(), Some(95.0));
        assert_eq!(OptionPayoff::asian_geometric_put(95.0).strike(), Some(95.0));
        assert_eq!(OptionPayoff::lookback_floating_call().strike(), None);
        assert_eq!(OptionPayoff::lookback_floating_put().strike(), None);
    }

    #[test]
    fn test_validate_rejects_bad_strikes() {
        assert!(OptionPayoff::european_call(-1.0).validate().is_err());
        assert!(OptionPayoff::asian_arithmetic_call(f64::NAN)
            .validate()
            .is_err());
        assert!(OptionPayoff::european_call(0.0).validate().is_ok());
        assert!(OptionPayoff::lookback_floating_call().validate().is_ok());
    }

    #[test]
    fn test_european_uses_terminal_column_only() {
        let payoffs = evaluate_payoffs(&ROW, 1, 2, OptionPayoff::european_call(100.0));
        assert_eq!(payoffs, vec![20.0]);

        let payoffs = evaluate_payoffs(&ROW, 1, 2, OptionPayoff::european_put(130.0));
        assert_eq!(payoffs, vec![10.0]);
    }

    #[test]
    fn test_arithmetic_average_excludes_initial_column() {
        // Average over columns 1..=2 is (110 + 120)/2 = 115, not 110
        let payoffs = evaluate_payoffs(&ROW, 1, 2, OptionPayoff::asian_arithmetic_call(100.0));
        assert_relative_eq!(payoffs[0], 15.0, epsilon = 1e-12);
    }

    #[test]
    fn test_geometric_average_excludes_initial_column() {
        // sqrt(110 * 120) = 114.891...
        let expected = (110.0_f64 * 120.0).sqrt() - 100.0;
        let payoffs = evaluate_payoffs(&ROW, 1, 2, OptionPayoff::asian_geometric_call(100.0));
        assert_relative_eq!(payoffs[0], expected, epsilon = 1e-12);
    }

    #[test]
    fn test_lookback_minimum_excludes_initial_column() {
        // min over columns 1..=2 is 110 (not the initial 100); S_T = 120
        let payoffs = evaluate_payoffs(&ROW, 1, 2, OptionPayoff::lookback_floating_call());
        assert_relative_eq!(payoffs[0], 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lookback_put_uses_window_maximum() {
        // Path dips after a high: [100, 130, 105] -> max 130, terminal 105
        let row = [100.0, 130.0, 105.0];
        let payoffs = evaluate_payoffs(&row, 1, 2, OptionPayoff::lookback_floating_put());
        assert_relative_eq!(payoffs[0], 25.0, epsilon = 1e-12);
    }

    #[test]
    fn test_out_of_the_money_clamps_to_zero() {
        for payoff in [
            OptionPayoff::european_call(500.0),
            OptionPayoff::european_put(1.0),
            OptionPayoff::asian_arithmetic_call(500.0),
            OptionPayoff::asian_geometric_call(500.0),
            OptionPayoff::asian_arithmetic_put(1.0),
            OptionPayoff::asian_geometric_put(1.0),
        ] {
            let payoffs = evaluate_payoffs(&ROW, 1, 2, payoff);
            assert_eq!(payoffs, vec![0.0], "payoff {payoff:?} must clamp at 0");
        }
    }

    #[test]
    fn test_geometric_never_exceeds_arithmetic() {
        let arith = evaluate_payoffs(&ROW, 1, 2, OptionPayoff::asian_arithmetic_call(100.0));
        let geom = evaluate_payoffs(&ROW, 1, 2, OptionPayoff::asian_geometric_call(100.0));
        assert!(geom[0] <= arith[0]);
    }

    #[test]
    fn test_multi_row_evaluation() {
        // Two paths, one step each
        let paths = [100.0, 120.0, 100.0, 80.0];
        let payoffs = evaluate_payoffs(&paths, 2, 1, OptionPayoff::european_call(100.0));
        assert_eq!(payoffs, vec![20.0, 0.0]);
    }

    #[test]
    fn test_empty_ensemble_yields_empty_vector() {
        let payoffs = evaluate_payoffs(&[], 0, 5, OptionPayoff::european_call(100.0));
        assert!(payoffs.is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        // A few hundred synthetic rows with varied values
        let n_paths = 300;
        let n_steps = 4;
        let stride = n_steps + 1;
        let mut paths = vec![0.0; n_paths * stride];
        for (i, value) in paths.iter_mut().enumerate() {
            *value = 50.0 + ((i * 37) % 101) as f64;
        }

        for payoff in [
            OptionPayoff::european_call(100.0),
            OptionPayoff::asian_arithmetic_call(100.0),
            OptionPayoff::asian_geometric_call(100.0),
            OptionPayoff::lookback_floating_call(),
        ] {
            let seq = evaluate_payoffs(&paths, n_paths, n_steps, payoff);
            let par = evaluate_payoffs_par(&paths, n_paths, n_steps, payoff);
            assert_eq!(seq, par, "sequential/parallel mismatch for {payoff:?}");
        }
    }
}
