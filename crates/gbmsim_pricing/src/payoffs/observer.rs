//! Streaming statistics accumulation over a single price path.

use num_traits::Float;

/// Streaming path observation statistics.
///
/// Accumulates everything the supported payoffs need in one pass over a
/// path: running sum (arithmetic average), running log-sum (geometric
/// average, computed in the log domain to avoid overflow for long paths),
/// running extrema and the terminal price.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (`f64`, `f32`)
///
/// # Example
///
/// ```
/// use gbmsim_pricing::payoffs::PathObserver;
///
/// let mut observer: PathObserver<f64> = PathObserver::new();
/// observer.observe(110.0);
/// observer.observe(90.0);
/// observer.set_terminal(90.0);
///
/// assert_eq!(observer.arithmetic_average(), 100.0);
/// assert_eq!(observer.minimum(), 90.0);
/// assert_eq!(observer.terminal(), 90.0);
/// ```
#[derive(Clone, Debug)]
pub struct PathObserver<T: Float> {
    /// Running sum: Σ S_i
    running_sum: T,
    /// Running log sum: Σ ln(S_i)
    running_log_sum: T,
    /// Running maximum
    running_max: T,
    /// Running minimum
    running_min: T,
    /// Number of observations
    count: usize,
    /// Terminal price
    terminal: T,
}

impl<T: Float> PathObserver<T> {
    /// Creates an empty observer.
    #[inline]
    pub fn new() -> Self {
        Self {
            running_sum: T::zero(),
            running_log_sum: T::zero(),
            running_max: T::neg_infinity(),
            running_min: T::infinity(),
            count: 0,
            terminal: T::zero(),
        }
    }

    /// Observes a price and updates all running statistics.
    ///
    /// The price must be positive for the geometric average to be
    /// meaningful; the GBM simulator guarantees this for every entry.
    #[inline]
    pub fn observe(&mut self, price: T) {
        self.running_sum = self.running_sum + price;
        self.running_log_sum = self.running_log_sum + price.ln();
        self.running_max = self.running_max.max(price);
        self.running_min = self.running_min.min(price);
        self.count += 1;
    }

    /// Records the terminal price.
    #[inline]
    pub fn set_terminal(&mut self, price: T) {
        self.terminal = price;
    }

    /// Clears all statistics for reuse on another path.
    #[inline]
    pub fn reset(&mut self) {
        self.running_sum = T::zero();
        self.running_log_sum = T::zero();
        self.running_max = T::neg_infinity();
        self.running_min = T::infinity();
        self.count = 0;
        self.terminal = T::zero();
    }

    /// Arithmetic average of observed prices, or zero for no observations.
    #[inline]
    pub fn arithmetic_average(&self) -> T {
        if self.count == 0 {
            T::zero()
        } else {
            self.running_sum / T::from(self.count).unwrap()
        }
    }

    /// Geometric average `exp(Σ ln S_i / n)`, or zero for no observations.
    #[inline]
    pub fn geometric_average(&self) -> T {
        if self.count == 0 {
            T::zero()
        } else {
            (self.running_log_sum / T::from(self.count).unwrap()).exp()
        }
    }

    /// Maximum observed price (`-inf` if nothing observed).
    #[inline]
    pub fn maximum(&self) -> T {
        self.running_max
    }

    /// Minimum observed price (`+inf` if nothing observed).
    #[inline]
    pub fn minimum(&self) -> T {
        self.running_min
    }

    /// Terminal price.
    #[inline]
    pub fn terminal(&self) -> T {
        self.terminal
    }

    /// Number of observations.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<T: Float> Default for PathObserver<T> {
    fn default() -> Self {
        Self::new()
    }
}
