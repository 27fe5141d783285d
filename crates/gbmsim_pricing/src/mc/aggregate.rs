//! Discounted aggregation of payoff vectors.
//!
//! The Monte Carlo estimator of the risk-neutral price is the discounted
//! sample mean `exp(−r·T) · mean(payoffs)`. Aggregating an empty vector is
//! an explicit [`PricingError::EmptyInput`] failure: a silent zero would be
//! indistinguishable from a correctly priced worthless option.

use gbmsim_core::PricingError;

/// Discounted sample mean of a payoff vector.
///
/// # Errors
///
/// Returns [`PricingError::EmptyInput`] when `payoffs` is empty.
///
/// # Examples
///
/// ```
/// use gbmsim_pricing::mc::discounted_mean;
///
/// let payoffs = vec![0.0, 10.0, 20.0];
/// let price = discounted_mean(&payoffs, 0.05, 1.0).unwrap();
/// assert!((price - 10.0 * (-0.05_f64).exp()).abs() < 1e-12);
///
/// assert!(discounted_mean(&[], 0.05, 1.0).is_err());
/// ```
pub fn discounted_mean(payoffs: &[f64], rate: f64, maturity: f64) -> Result<f64, PricingError> {
    if payoffs.is_empty() {
        return Err(PricingError::EmptyInput);
    }

    let mean = payoffs.iter().sum::<f64>() / payoffs.len() as f64;
    Ok((-rate * maturity).exp() * mean)
}

/// Discounted sample mean together with its discounted standard error.
///
/// The standard error uses the unbiased sample standard deviation
/// (`n − 1` denominator); a single-path sample reports zero error rather
/// than dividing by zero.
///
/// # Errors
///
/// Returns [`PricingError::EmptyInput`] when `payoffs` is empty.
pub fn discounted_mean_with_error(
    payoffs: &[f64],
    rate: f64,
    maturity: f64,
) -> Result<(f64, f64), PricingError> {
    if payoffs.is_empty() {
        return Err(PricingError::EmptyInput);
    }

    let n = payoffs.len() as f64;
    let mean = payoffs.iter().sum::<f64>() / n;

    let std_error = if payoffs.len() > 1 {
        let variance = payoffs.iter().map(|&p| (p - mean) * (p - mean)).sum::<f64>() / (n - 1.0);
        variance.sqrt() / n.sqrt()
    } else {
        0.0
    };

    let discount = (-rate * maturity).exp();
    Ok((discount * mean, discount * std_error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_discounted_mean() {
        let payoffs = [5.0, 15.0];
        let price = discounted_mean(&payoffs, 0.05, 2.0).unwrap();
        assert_relative_eq!(price, 10.0 * (-0.1_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_rate_is_plain_mean() {
        let payoffs = [1.0, 2.0, 3.0];
        let price = discounted_mean(&payoffs, 0.0, 1.0).unwrap();
        assert_relative_eq!(price, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_vector_is_an_error() {
        assert_eq!(
            discounted_mean(&[], 0.05, 1.0).unwrap_err(),
            PricingError::EmptyInput
        );
        assert_eq!(
            discounted_mean_with_error(&[], 0.05, 1.0).unwrap_err(),
            PricingError::EmptyInput
        );
    }

    #[test]
    fn test_all_zero_payoffs_price_to_zero() {
        // A worthless option prices to exactly zero; only an *empty* input
        // is an error.
        let payoffs = [0.0; 16];
        assert_eq!(discounted_mean(&payoffs, 0.05, 1.0).unwrap(), 0.0);
    }

    #[test]
    fn test_standard_error() {
        let payoffs = [10.0, 14.0, 10.0, 14.0];
        let (price, std_error) = discounted_mean_with_error(&payoffs, 0.0, 1.0).unwrap();

        assert_relative_eq!(price, 12.0, epsilon = 1e-12);
        // Sample std dev = sqrt(16/3), SE = sqrt(16/3)/2
        assert_relative_eq!(std_error, (16.0_f64 / 3.0).sqrt() / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_single_sample_has_zero_error() {
        let (price, std_error) = discounted_mean_with_error(&[7.0], 0.0, 1.0).unwrap();
        assert_eq!(price, 7.0);
        assert_eq!(std_error, 0.0);
    }

    #[test]
    fn test_discount_applies_to_error_too() {
        let payoffs = [10.0, 14.0, 10.0, 14.0];
        let (_, se_flat) = discounted_mean_with_error(&payoffs, 0.0, 1.0).unwrap();
        let (_, se_disc) = discounted_mean_with_error(&payoffs, 0.05, 1.0).unwrap();
        assert_relative_eq!(se_disc, se_flat * (-0.05_f64).exp(), epsilon = 1e-12);
    }
}
