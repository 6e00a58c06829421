mod cumulative_moving_average;

pub use cumulative_moving_average::CumulativeMovingAverage;

/// An average over a stream of terms.
pub trait MovingAverage {
    fn add_term(&mut self, new_term: u64);

    /// Returns the moving average value; in case there are no terms, the convention is to return 0
    fn value(&self) -> f64;
}
