use super::VariableId;
use crate::containers::HashMap;

/// An explicit assignment of values to path variables.
///
/// Variables without a value are considered to be 0.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Solution {
    values: HashMap<VariableId, f64>,
}

impl Solution {
    pub fn set_value(&mut self, variable: VariableId, value: f64) {
        let _ = self.values.insert(variable, value);
    }

    pub fn value(&self, variable: VariableId) -> f64 {
        self.values.get(&variable).copied().unwrap_or(0.0)
    }
}

impl FromIterator<(VariableId, f64)> for Solution {
    fn from_iter<T: IntoIterator<Item = (VariableId, f64)>>(iter: T) -> Self {
        Solution {
            values: iter.into_iter().collect(),
        }
    }
}
