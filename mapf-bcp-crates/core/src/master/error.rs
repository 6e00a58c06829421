use thiserror::Error;

use super::RowId;
use super::VariableId;

/// Errors reported by a [`super::MasterProblem`].
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MasterError {
    /// The variable is not known to the master problem.
    #[error("variable {0} does not exist in the master problem")]
    UnknownVariable(VariableId),
    /// The row is not known to the master problem, e.g. because it has already been released.
    #[error("row {0} does not exist in the master problem")]
    UnknownRow(RowId),
    /// The row has already been added to the relaxation.
    #[error("row {0} is already part of the relaxation")]
    RowAlreadyAdded(RowId),
}
