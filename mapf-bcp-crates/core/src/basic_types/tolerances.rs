/// Tolerance-aware comparisons of the floating point values handed out by the master problem.
///
/// Path weights arrive as LP values, so exact comparisons are never used to decide feasibility.
/// The conventions follow the ones of the usual MIP frameworks: a value is positive if it exceeds
/// `epsilon`, and `a > b` holds if `a - b` exceeds `epsilon`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    /// Absolute tolerance for comparing values.
    pub epsilon: f64,
    /// Tolerance for checking the feasibility of rows.
    pub feasibility: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Tolerances {
            epsilon: 1e-9,
            feasibility: 1e-6,
        }
    }
}

impl Tolerances {
    pub fn is_positive(&self, value: f64) -> bool {
        value > self.epsilon
    }

    /// Returns whether `lhs` is greater than `rhs` beyond the tolerance.
    pub fn is_gt(&self, lhs: f64, rhs: f64) -> bool {
        lhs - rhs > self.epsilon
    }

    /// Returns whether `lhs` exceeds `rhs` by more than the feasibility tolerance.
    pub fn is_feas_gt(&self, lhs: f64, rhs: f64) -> bool {
        lhs - rhs > self.feasibility
    }
}

#[cfg(test)]
mod tests {
    use super::Tolerances;

    #[test]
    fn tiny_values_are_not_positive() {
        let tolerances = Tolerances::default();

        assert!(!tolerances.is_positive(0.0));
        assert!(!tolerances.is_positive(1e-12));
        assert!(!tolerances.is_positive(-0.5));
        assert!(tolerances.is_positive(1e-3));
    }

    #[test]
    fn borderline_values_are_not_greater() {
        let tolerances = Tolerances::default();

        assert!(!tolerances.is_gt(1.0, 1.0));
        assert!(!tolerances.is_gt(1.0 + 1e-12, 1.0));
        assert!(tolerances.is_gt(1.2, 1.0));
        assert!(!tolerances.is_feas_gt(1.0 + 1e-7, 1.0));
    }
}
