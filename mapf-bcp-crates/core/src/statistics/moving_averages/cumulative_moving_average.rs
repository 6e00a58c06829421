use std::fmt::Display;

use super::MovingAverage;

/// The average of all terms added so far.
#[derive(Default, Debug, Copy, Clone)]
pub struct CumulativeMovingAverage {
    sum: u64,
    num_terms: u64,
}

impl Display for CumulativeMovingAverage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl MovingAverage for CumulativeMovingAverage {
    fn add_term(&mut self, new_term: u64) {
        self.sum += new_term;
        self.num_terms += 1
    }

    fn value(&self) -> f64 {
        if self.num_terms > 0 {
            (self.sum as f64) / (self.num_terms as f64)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CumulativeMovingAverage;
    use crate::statistics::moving_averages::MovingAverage;

    #[test]
    fn average_without_terms_is_zero() {
        assert_eq!(CumulativeMovingAverage::default().value(), 0.0);
    }

    #[test]
    fn average_of_cut_sizes_follows_every_term() {
        let mut cut_sizes = CumulativeMovingAverage::default();

        cut_sizes.add_term(2);
        assert_eq!(cut_sizes.value(), 2.0);
        cut_sizes.add_term(3);
        assert_eq!(cut_sizes.value(), 2.5);
        cut_sizes.add_term(4);
        assert_eq!(cut_sizes.value(), 3.0);
        assert_eq!(cut_sizes.to_string(), "3");
    }
}
