use log::trace;

use super::Assignment;
use super::MasterError;
use super::MasterProblem;
use super::PathVariable;
use super::Row;
use super::RowAddition;
use super::RowHandle;
use super::RowId;
use super::RowOptions;
use super::RoundingLocks;
use super::VariableId;
use crate::basic_types::Agent;
use crate::basic_types::Path;
use crate::basic_types::Tolerances;
use crate::containers::HashMap;
use crate::containers::KeyGenerator;
use crate::containers::KeyedVec;

/// A path variable together with the state the restricted master keeps for it.
#[derive(Clone, Debug)]
struct MasterVariable {
    path_variable: PathVariable,
    value: f64,
    lower_bound: f64,
    upper_bound: f64,
    locks: RoundingLocks,
}

/// An in-process master problem which stores the state of the relaxation without solving it.
///
/// The values of the variables are set by the caller (e.g. copied from an LP solver, or read
/// from a file). Rows are stored with their coefficients; adding a row reports
/// [`RowAddition::Infeasible`] when the bounds of the variables alone prove that it can not be
/// satisfied.
#[derive(Debug, Default)]
pub struct RestrictedMaster {
    tolerances: Tolerances,
    variables: KeyedVec<VariableId, MasterVariable>,
    variable_ids: Vec<VariableId>,
    rows: HashMap<RowId, Row>,
    row_ids: KeyGenerator<RowId>,
    current_node: u64,
}

impl RestrictedMaster {
    pub fn with_tolerances(tolerances: Tolerances) -> Self {
        RestrictedMaster {
            tolerances,
            ..Default::default()
        }
    }

    /// Adds a new path variable for `agent` with bounds `[0, 1]` and value `value` in the
    /// relaxation.
    ///
    /// Note that conflict handlers have to be informed of the new variable (see
    /// [`crate::conflicts::ConflictHandler::extend`]) before the relaxation is used again.
    pub fn add_path_variable(&mut self, agent: Agent, path: Path, value: f64) -> VariableId {
        let variable = self.variables.push(MasterVariable {
            path_variable: PathVariable { agent, path },
            value,
            lower_bound: 0.0,
            upper_bound: 1.0,
            locks: RoundingLocks::default(),
        });
        self.variable_ids.push(variable);
        variable
    }

    /// Sets the value of `variable` in the relaxation.
    pub fn set_value(&mut self, variable: VariableId, value: f64) -> Result<(), MasterError> {
        self.variable_mut(variable)?.value = value;
        Ok(())
    }

    /// Changes the bounds of `variable`, e.g. after branching.
    pub fn set_bounds(
        &mut self,
        variable: VariableId,
        lower_bound: f64,
        upper_bound: f64,
    ) -> Result<(), MasterError> {
        let master_variable = self.variable_mut(variable)?;
        master_variable.lower_bound = lower_bound;
        master_variable.upper_bound = upper_bound;
        Ok(())
    }

    pub fn set_current_node(&mut self, node: u64) {
        self.current_node = node;
    }

    /// The rounding restrictions which have been registered for `variable`.
    pub fn locks(&self, variable: VariableId) -> Option<RoundingLocks> {
        self.variables.get(variable).map(|variable| variable.locks)
    }

    /// Returns the row with identifier `id`, if it has not been released.
    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.get(&id)
    }

    /// The number of rows which have been created and not yet released.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// The number of rows which are part of the relaxation.
    pub fn num_rows_in_relaxation(&self) -> usize {
        self.rows.values().filter(|row| row.is_in_relaxation()).count()
    }

    /// The value of `a^T x` of the row `id` under `assignment`.
    pub fn row_activity(&self, id: RowId, assignment: Assignment<'_>) -> Option<f64> {
        self.rows
            .get(&id)
            .map(|row| row.activity(|variable| self.value(assignment, variable)))
    }

    fn variable_mut(&mut self, variable: VariableId) -> Result<&mut MasterVariable, MasterError> {
        self.variables
            .get_mut(variable)
            .ok_or(MasterError::UnknownVariable(variable))
    }

    fn row_mut(&mut self, id: RowId) -> Result<&mut Row, MasterError> {
        self.rows.get_mut(&id).ok_or(MasterError::UnknownRow(id))
    }

    /// The smallest and largest value `a^T x` can take within the bounds of the variables.
    fn activity_bounds(&self, row: &Row) -> (f64, f64) {
        row.coefficients()
            .iter()
            .fold((0.0, 0.0), |(min, max), &(variable, coefficient)| {
                let variable = &self.variables[variable];
                let at_lower = coefficient * variable.lower_bound;
                let at_upper = coefficient * variable.upper_bound;
                (min + at_lower.min(at_upper), max + at_lower.max(at_upper))
            })
    }
}

impl MasterProblem for RestrictedMaster {
    fn tolerances(&self) -> Tolerances {
        self.tolerances
    }

    fn variables(&self) -> &[VariableId] {
        &self.variable_ids
    }

    fn path_variable(&self, variable: VariableId) -> &PathVariable {
        &self.variables[variable].path_variable
    }

    fn value(&self, assignment: Assignment<'_>, variable: VariableId) -> f64 {
        match assignment {
            Assignment::Relaxation => self.variables[variable].value,
            Assignment::Solution(solution) => solution.value(variable),
        }
    }

    fn objective_value(&self, assignment: Assignment<'_>) -> f64 {
        self.variable_ids
            .iter()
            .map(|&variable| {
                let cost = self.variables[variable].path_variable.path.last_step();
                cost as f64 * self.value(assignment, variable)
            })
            .sum()
    }

    fn current_node(&self) -> u64 {
        self.current_node
    }

    fn create_empty_row(&mut self, options: RowOptions) -> Result<RowHandle, MasterError> {
        let id = self.row_ids.next_key();
        let _ = self.rows.insert(id, Row::new(options));
        Ok(RowHandle::new(id))
    }

    fn add_var_to_row(
        &mut self,
        row: &RowHandle,
        variable: VariableId,
        coefficient: f64,
    ) -> Result<(), MasterError> {
        if self.variables.get(variable).is_none() {
            return Err(MasterError::UnknownVariable(variable));
        }
        self.row_mut(row.id())?
            .add_coefficient(variable, coefficient);
        Ok(())
    }

    fn add_row(&mut self, row: &RowHandle, _force_cut: bool) -> Result<RowAddition, MasterError> {
        let id = row.id();
        let stored = self.rows.get(&id).ok_or(MasterError::UnknownRow(id))?;
        if stored.is_in_relaxation() {
            return Err(MasterError::RowAlreadyAdded(id));
        }

        let (min_activity, max_activity) = self.activity_bounds(stored);
        let infeasible = self.tolerances.is_feas_gt(min_activity, stored.rhs())
            || self.tolerances.is_feas_gt(stored.lhs(), max_activity);
        trace!(
            "Adding row {id} '{}' with activity range [{min_activity}, {max_activity}] (infeasible: {infeasible})",
            stored.name()
        );

        self.row_mut(id)?.mark_in_relaxation();

        if infeasible {
            Ok(RowAddition::Infeasible)
        } else {
            Ok(RowAddition::Added)
        }
    }

    fn release_row(&mut self, row: RowHandle) -> Result<(), MasterError> {
        let id = row.id();
        let _ = self.rows.remove(&id).ok_or(MasterError::UnknownRow(id))?;
        Ok(())
    }

    fn add_var_locks(
        &mut self,
        variable: VariableId,
        locks: RoundingLocks,
    ) -> Result<(), MasterError> {
        let master_variable = self.variable_mut(variable)?;
        master_variable.locks.down += locks.down;
        master_variable.locks.up += locks.up;
        Ok(())
    }
}
