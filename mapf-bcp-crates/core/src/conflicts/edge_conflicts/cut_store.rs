use log::trace;
use log::warn;

use super::EdgeConflict;
use crate::asserts::mapf_assert_simple;
use crate::master::MasterError;
use crate::master::MasterProblem;
use crate::master::RowHandle;
use crate::master::RowId;
use crate::master::VariableId;

/// A cut which has been added to the master problem for an [`EdgeConflict`].
#[derive(Debug)]
pub struct EdgeConflictCut {
    row: RowHandle,
    conflict: EdgeConflict,
}

impl EdgeConflictCut {
    pub fn new(row: RowHandle, conflict: EdgeConflict) -> Self {
        EdgeConflictCut { row, conflict }
    }

    pub fn row(&self) -> RowId {
        self.row.id()
    }

    pub fn conflict(&self) -> &EdgeConflict {
        &self.conflict
    }
}

/// The cuts created by a handler in the current subtree.
///
/// Cuts are only ever appended; they are released all at once through [`CutStore::release_all`],
/// which has to happen before the store is dropped.
#[derive(Debug, Default)]
pub struct CutStore {
    cuts: Vec<EdgeConflictCut>,
}

impl CutStore {
    pub fn with_capacity(capacity: usize) -> Self {
        CutStore {
            cuts: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EdgeConflictCut> {
        self.cuts.iter()
    }

    /// Stores a cut whose row has been added to the master problem.
    pub fn record(&mut self, cut: EdgeConflictCut) {
        self.cuts.push(cut);
    }

    /// Adds `variable` with coefficient 1 to every stored cut whose conflict its path uses.
    ///
    /// Returns the number of cuts the variable was added to.
    pub fn extend(
        &self,
        master: &mut dyn MasterProblem,
        variable: VariableId,
    ) -> Result<usize, MasterError> {
        let path = &master.path_variable(variable).path;
        let cuts = self
            .cuts
            .iter()
            .filter(|cut| cut.conflict.is_used_by(path))
            .collect::<Vec<_>>();

        for cut in cuts.iter() {
            trace!("Adding {variable} to row {}", cut.row());
            master.add_var_to_row(&cut.row, variable, 1.0)?;
        }

        Ok(cuts.len())
    }

    /// Gives the rows of all cuts back to the master problem and empties the store.
    ///
    /// Every row is offered to the master problem, also when releasing an earlier one fails; the
    /// first failure is returned.
    pub fn release_all(&mut self, master: &mut dyn MasterProblem) -> Result<(), MasterError> {
        let mut first_error = None;
        for cut in self.cuts.drain(..) {
            let id = cut.row();
            if let Err(error) = master.release_row(cut.row) {
                warn!("Could not release row {id}: {error}");
                let _ = first_error.get_or_insert(error);
            }
        }

        first_error.map_or(Ok(()), Err)
    }
}

impl Drop for CutStore {
    fn drop(&mut self) {
        mapf_assert_simple!(
            std::thread::panicking() || self.cuts.is_empty(),
            "{} cuts were not released before their store was dropped",
            self.cuts.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::Direction;
    use crate::basic_types::Edge;
    use crate::basic_types::Path;
    use crate::basic_types::Tolerances;
    use crate::map::GridMap;
    use crate::master::Assignment;
    use crate::master::PathVariable;
    use crate::master::RestrictedMaster;
    use crate::master::RoundingLocks;
    use crate::master::RowAddition;
    use crate::master::RowOptions;

    /// A master problem which refuses to release the first row it is asked to release.
    #[derive(Debug, Default)]
    struct StubbornMaster {
        inner: RestrictedMaster,
        refused: Option<RowId>,
    }

    impl MasterProblem for StubbornMaster {
        fn tolerances(&self) -> Tolerances {
            self.inner.tolerances()
        }

        fn variables(&self) -> &[VariableId] {
            self.inner.variables()
        }

        fn path_variable(&self, variable: VariableId) -> &PathVariable {
            self.inner.path_variable(variable)
        }

        fn value(&self, assignment: Assignment<'_>, variable: VariableId) -> f64 {
            self.inner.value(assignment, variable)
        }

        fn objective_value(&self, assignment: Assignment<'_>) -> f64 {
            self.inner.objective_value(assignment)
        }

        fn current_node(&self) -> u64 {
            self.inner.current_node()
        }

        fn create_empty_row(&mut self, options: RowOptions) -> Result<RowHandle, MasterError> {
            self.inner.create_empty_row(options)
        }

        fn add_var_to_row(
            &mut self,
            row: &RowHandle,
            variable: VariableId,
            coefficient: f64,
        ) -> Result<(), MasterError> {
            self.inner.add_var_to_row(row, variable, coefficient)
        }

        fn add_row(&mut self, row: &RowHandle, force_cut: bool) -> Result<RowAddition, MasterError> {
            self.inner.add_row(row, force_cut)
        }

        fn release_row(&mut self, row: RowHandle) -> Result<(), MasterError> {
            if self.refused.is_none() {
                self.refused = Some(row.id());
                return Err(MasterError::UnknownRow(row.id()));
            }
            self.inner.release_row(row)
        }

        fn add_var_locks(
            &mut self,
            variable: VariableId,
            locks: RoundingLocks,
        ) -> Result<(), MasterError> {
            self.inner.add_var_locks(variable, locks)
        }
    }

    #[test]
    fn new_variables_join_the_cuts_they_use() {
        let map = GridMap::open(3, 1);
        let a = map.node_at(0, 0).expect("in bounds");
        let b = map.node_at(1, 0).expect("in bounds");
        let c = map.node_at(2, 0).expect("in bounds");

        let mut master = RestrictedMaster::default();
        let mut store = CutStore::with_capacity(2);
        for (edge, time) in [(Edge::new(a, Direction::East), 0), (Edge::new(b, Direction::East), 0)]
        {
            let row = master
                .create_empty_row(RowOptions::at_most("", 1.0))
                .expect("row is created");
            store.record(EdgeConflictCut::new(
                row,
                EdgeConflict::between_moves(&map, edge, time),
            ));
        }

        let variable = master.add_path_variable(
            0,
            Path::new(vec![Edge::new(c, Direction::West), Edge::wait(b)]),
            0.0,
        );
        let extended = store.extend(&mut master, variable).expect("rows exist");

        assert_eq!(extended, 1);
        let rows = store.iter().map(|cut| cut.row()).collect::<Vec<_>>();
        let coefficients = rows
            .iter()
            .map(|&row| master.row(row).expect("row exists").coefficient(variable))
            .collect::<Vec<_>>();
        assert_eq!(coefficients, vec![0.0, 1.0]);

        store.release_all(&mut master).expect("rows exist");
        assert!(store.is_empty());
        assert_eq!(master.num_rows(), 0);
    }

    #[test]
    fn failed_releases_do_not_keep_other_rows_alive() {
        let map = GridMap::open(3, 1);
        let a = map.node_at(0, 0).expect("in bounds");
        let b = map.node_at(1, 0).expect("in bounds");

        let mut master = StubbornMaster::default();
        let mut store = CutStore::default();
        for edge in [Edge::new(a, Direction::East), Edge::new(b, Direction::East)] {
            let row = master
                .create_empty_row(RowOptions::at_most("", 1.0))
                .expect("row is created");
            store.record(EdgeConflictCut::new(
                row,
                EdgeConflict::between_moves(&map, edge, 0),
            ));
        }
        let rows = store.iter().map(|cut| cut.row()).collect::<Vec<_>>();

        let result = store.release_all(&mut master);

        assert_eq!(result, Err(MasterError::UnknownRow(rows[0])));
        assert!(store.is_empty());
        assert_eq!(master.refused, Some(rows[0]));
        assert!(master.inner.row(rows[0]).is_some());
        assert!(master.inner.row(rows[1]).is_none());
        assert_eq!(master.inner.num_rows(), 1);

        assert_eq!(store.release_all(&mut master), Ok(()));
    }

    #[test]
    #[should_panic]
    fn dropping_unreleased_cuts_is_rejected() {
        let map = GridMap::open(2, 1);
        let a = map.node_at(0, 0).expect("in bounds");

        let mut master = RestrictedMaster::default();
        let mut store = CutStore::default();
        let row = master
            .create_empty_row(RowOptions::at_most("", 1.0))
            .expect("row is created");
        store.record(EdgeConflictCut::new(
            row,
            EdgeConflict::between_moves(&map, Edge::new(a, Direction::East), 0),
        ));
    }
}
