//! The interface to the master problem.
//!
//! The linear program, its variables and its rows are owned by an external solver framework. The
//! conflict handlers only talk to it through the [`MasterProblem`] trait: they read the path
//! variables and their values, create rows, add variables to rows and hand the rows back when
//! they are done with them.
//!
//! The [`RestrictedMaster`] is a small in-process implementation of the trait which stores the
//! relaxation state without optimising it; it is used for testing and by the command-line driver.
mod error;
mod restricted_master;
mod row;
mod solution;

use std::fmt::Debug;
use std::fmt::Display;

pub use error::*;
pub use restricted_master::*;
pub use row::*;
pub use solution::*;

use crate::basic_types::Agent;
use crate::basic_types::Path;
use crate::basic_types::Tolerances;
use crate::containers::StorageKey;

/// The identifier of a path variable in the master problem.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct VariableId(u32);

impl StorageKey for VariableId {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn create_from_index(index: usize) -> Self {
        VariableId(index as u32)
    }
}

impl Display for VariableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.0)
    }
}

/// The data attached to a path variable: the agent it belongs to and its path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathVariable {
    pub agent: Agent,
    pub path: Path,
}

/// Which values of the variables should be read.
#[derive(Clone, Copy, Debug)]
pub enum Assignment<'a> {
    /// The values of the current LP relaxation.
    Relaxation,
    /// The values of an explicit (primal) solution.
    Solution(&'a Solution),
}

/// Rounding restrictions registered for a variable.
///
/// `down` counts the rows which may become violated when the variable is rounded down, `up` the
/// rows which may become violated when it is rounded up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundingLocks {
    pub down: i32,
    pub up: i32,
}

impl RoundingLocks {
    pub fn new(down: i32, up: i32) -> Self {
        RoundingLocks { down, up }
    }
}

/// The outcome of adding a row to the relaxation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAddition {
    /// The row was added.
    Added,
    /// The row was added and proves that the relaxation at the current node is infeasible.
    Infeasible,
}

/// The operations of the external solver framework which the conflict handlers rely on.
pub trait MasterProblem: Debug {
    /// The tolerances with which values of this master problem are compared.
    fn tolerances(&self) -> Tolerances;

    /// All path variables of the master problem.
    fn variables(&self) -> &[VariableId];

    /// The agent and path of `variable`.
    ///
    /// Only identifiers handed out by this master problem may be queried.
    fn path_variable(&self, variable: VariableId) -> &PathVariable;

    /// The value of `variable` in `assignment`.
    fn value(&self, assignment: Assignment<'_>, variable: VariableId) -> f64;

    /// The objective value of `assignment`, used for diagnostics.
    fn objective_value(&self, assignment: Assignment<'_>) -> f64;

    /// The number of the branch-and-bound node which is currently processed.
    fn current_node(&self) -> u64;

    /// Creates a row without any variables. The returned handle owns the row until it is passed to
    /// [`MasterProblem::release_row`].
    fn create_empty_row(&mut self, options: RowOptions) -> Result<RowHandle, MasterError>;

    /// Adds `variable` with `coefficient` to `row`.
    fn add_var_to_row(
        &mut self,
        row: &RowHandle,
        variable: VariableId,
        coefficient: f64,
    ) -> Result<(), MasterError>;

    /// Adds `row` to the relaxation.
    fn add_row(&mut self, row: &RowHandle, force_cut: bool) -> Result<RowAddition, MasterError>;

    /// Gives up the ownership of `row`.
    fn release_row(&mut self, row: RowHandle) -> Result<(), MasterError>;

    /// Registers additional rounding restrictions for `variable`.
    fn add_var_locks(
        &mut self,
        variable: VariableId,
        locks: RoundingLocks,
    ) -> Result<(), MasterError>;
}
