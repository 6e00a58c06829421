use std::fmt::Display;

use super::VariableId;
use crate::containers::StorageKey;

/// The identifier of a row in the master problem.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct RowId(u32);

impl StorageKey for RowId {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn create_from_index(index: usize) -> Self {
        RowId(index as u32)
    }
}

impl Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// Ownership of a row of the master problem.
///
/// A handle is created by [`super::MasterProblem::create_empty_row`] and gives up its row exactly
/// once, when it is moved into [`super::MasterProblem::release_row`]. It can therefore not be
/// cloned or copied.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct RowHandle {
    id: RowId,
}

impl RowHandle {
    /// Wraps the row `id` of a master problem. Only master problem implementations should create
    /// handles.
    pub fn new(id: RowId) -> Self {
        RowHandle { id }
    }

    pub fn id(&self) -> RowId {
        self.id
    }
}

/// The properties of a row `lhs <= a^T x <= rhs` to create.
#[derive(Clone, Debug, PartialEq)]
pub struct RowOptions {
    pub name: String,
    pub lhs: f64,
    pub rhs: f64,
    /// Whether the row is only valid in the current subtree.
    pub local: bool,
    /// Whether variables created later on can be added to the row.
    pub modifiable: bool,
    /// Whether the row may be removed from the relaxation by the framework.
    pub removable: bool,
}

impl RowOptions {
    /// A global, modifiable, non-removable row `a^T x <= rhs`.
    pub fn at_most(name: impl Into<String>, rhs: f64) -> Self {
        RowOptions {
            name: name.into(),
            lhs: f64::NEG_INFINITY,
            rhs,
            local: false,
            modifiable: true,
            removable: false,
        }
    }
}

/// A row as stored by the [`super::RestrictedMaster`].
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    options: RowOptions,
    coefficients: Vec<(VariableId, f64)>,
    in_relaxation: bool,
}

impl Row {
    pub(crate) fn new(options: RowOptions) -> Self {
        Row {
            options,
            coefficients: Vec::new(),
            in_relaxation: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.options.name
    }

    pub fn lhs(&self) -> f64 {
        self.options.lhs
    }

    pub fn rhs(&self) -> f64 {
        self.options.rhs
    }

    pub fn options(&self) -> &RowOptions {
        &self.options
    }

    pub fn is_in_relaxation(&self) -> bool {
        self.in_relaxation
    }

    pub(crate) fn mark_in_relaxation(&mut self) {
        self.in_relaxation = true;
    }

    /// The variables with a coefficient in this row, in the order in which they were added.
    pub fn coefficients(&self) -> &[(VariableId, f64)] {
        &self.coefficients
    }

    /// The coefficient of `variable`, which is 0 for variables not in the row.
    pub fn coefficient(&self, variable: VariableId) -> f64 {
        self.coefficients
            .iter()
            .find(|(other, _)| *other == variable)
            .map(|(_, coefficient)| *coefficient)
            .unwrap_or(0.0)
    }

    pub(crate) fn add_coefficient(&mut self, variable: VariableId, coefficient: f64) {
        if let Some((_, existing)) = self
            .coefficients
            .iter_mut()
            .find(|(other, _)| *other == variable)
        {
            *existing += coefficient;
        } else {
            self.coefficients.push((variable, coefficient));
        }
    }

    /// Evaluates `a^T x` for the values provided by `value_of`.
    pub fn activity(&self, value_of: impl Fn(VariableId) -> f64) -> f64 {
        self.coefficients
            .iter()
            .map(|&(variable, coefficient)| coefficient * value_of(variable))
            .sum()
    }
}
