use log::debug;
use log::log_enabled;
use log::trace;
use log::Level;

use super::checker::find_edge_conflict;
use super::separator::find_violated_conflicts;
use super::separator::ViolatedConflict;
use super::CutStore;
use super::EdgeConflictCut;
use super::EdgeConflictOptions;
use super::EdgeTimeUsage;
use crate::asserts::mapf_assert_advanced;
use crate::asserts::mapf_assert_eq_simple;
use crate::asserts::mapf_assert_simple;
use crate::conflicts::CheckResult;
use crate::conflicts::ConflictHandler;
use crate::conflicts::HandlerError;
use crate::conflicts::HandlerProperties;
use crate::conflicts::SeparationResult;
use crate::create_statistics_struct;
use crate::map::DisplayEdge;
use crate::map::DisplayPath;
use crate::map::Map;
use crate::master::Assignment;
use crate::master::MasterError;
use crate::master::MasterProblem;
use crate::master::RoundingLocks;
use crate::master::RowAddition;
use crate::master::RowHandle;
use crate::master::RowOptions;
use crate::master::VariableId;
use crate::statistics::moving_averages::CumulativeMovingAverage;
use crate::statistics::moving_averages::MovingAverage;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

const PROPERTIES: HandlerProperties = HandlerProperties {
    name: "edge_conflicts",
    description: "Constraint handler for edge conflicts",
    separation_priority: 400_000,
    enforcement_priority: -1_000_000,
    check_priority: -1_000_000,
    separation_frequency: 1,
    eager_frequency: 1,
    delay_separation: false,
    needs_constraints: true,
};

create_statistics_struct!(
    /// Statistics of the [`EdgeConflictHandler`].
    EdgeConflictStatistics {
        num_checks: usize,
        num_infeasible_checks: usize,
        num_separation_calls: usize,
        num_cuts_created: usize,
        num_cutoffs: usize,
        num_variables_extended: usize,
        average_variables_per_cut: CumulativeMovingAverage,
});

/// The handler which forbids two agents from using the same undirected edge at the same time.
///
/// Every cut it creates is stored until [`ConflictHandler::release`] is called; new path variables
/// are added to the stored cuts through [`ConflictHandler::extend`].
#[derive(Debug)]
pub struct EdgeConflictHandler {
    options: EdgeConflictOptions,
    cuts: CutStore,
    statistics: EdgeConflictStatistics,
}

impl EdgeConflictHandler {
    pub fn new(options: EdgeConflictOptions) -> Self {
        EdgeConflictHandler {
            options,
            cuts: CutStore::with_capacity(options.initial_cut_capacity),
            statistics: EdgeConflictStatistics::default(),
        }
    }

    pub fn options(&self) -> EdgeConflictOptions {
        self.options
    }

    /// The cuts created so far, in the order in which they were created.
    pub fn cuts(&self) -> &CutStore {
        &self.cuts
    }

    pub fn statistics(&self) -> &EdgeConflictStatistics {
        &self.statistics
    }

    /// Creates and adds the cut of `violated`, and stores it.
    fn add_cut(
        &mut self,
        master: &mut dyn MasterProblem,
        map: &dyn Map,
        assignment: Assignment<'_>,
        violated: ViolatedConflict,
    ) -> Result<RowAddition, HandlerError> {
        let conflict = violated.conflict;
        let name = if log_enabled!(Level::Debug) {
            conflict.row_name(map)
        } else {
            String::new()
        };

        let members = master
            .variables()
            .iter()
            .copied()
            .filter(|&variable| conflict.is_used_by(&master.path_variable(variable).path))
            .collect::<Vec<_>>();

        debug!(
            "Creating cut for edge {} at time {} with usage {} at node {}",
            conflict.display(map),
            conflict.time(),
            violated.usage,
            master.current_node()
        );
        for &variable in members.iter() {
            let path_variable = master.path_variable(variable);
            trace!(
                "   agent {}, value {}, path {}",
                path_variable.agent,
                master.value(assignment, variable),
                DisplayPath::new(map, &path_variable.path)
            );
        }

        mapf_assert_advanced!(
            !master.tolerances().is_gt(
                violated.usage,
                members
                    .iter()
                    .map(|&variable| master.value(assignment, variable))
                    .sum::<f64>()
            ),
            "the cut for {} does not contain all of its users",
            conflict.display(map)
        );

        let row = master.create_empty_row(RowOptions::at_most(name, 1.0))?;
        let addition = match install_row(master, &row, &members) {
            Ok(addition) => addition,
            Err(error) => {
                master.release_row(row)?;
                return Err(error.into());
            }
        };

        self.statistics.num_cuts_created += 1;
        self.statistics
            .average_variables_per_cut
            .add_term(members.len() as u64);
        self.cuts.record(EdgeConflictCut::new(row, conflict));

        Ok(addition)
    }
}

/// Adds all `members` to `row` and then adds the row to the relaxation.
fn install_row(
    master: &mut dyn MasterProblem,
    row: &RowHandle,
    members: &[VariableId],
) -> Result<RowAddition, MasterError> {
    for &variable in members {
        master.add_var_to_row(row, variable, 1.0)?;
    }
    master.add_row(row, true)
}

impl ConflictHandler for EdgeConflictHandler {
    fn properties(&self) -> HandlerProperties {
        PROPERTIES
    }

    fn check(
        &mut self,
        master: &dyn MasterProblem,
        map: &dyn Map,
        assignment: Assignment<'_>,
    ) -> CheckResult {
        self.statistics.num_checks += 1;
        debug!("Checking edge conflicts");

        match find_edge_conflict(master, map, assignment) {
            Some((edge_time, usage)) => {
                self.statistics.num_infeasible_checks += 1;
                debug!(
                    "Assignment is infeasible: edge {} is used {usage} times at time {}",
                    DisplayEdge::new(map, edge_time.edge),
                    edge_time.time
                );
                CheckResult::Infeasible
            }
            None => CheckResult::Feasible,
        }
    }

    fn separate(
        &mut self,
        master: &mut dyn MasterProblem,
        map: &dyn Map,
        assignment: Assignment<'_>,
    ) -> Result<SeparationResult, HandlerError> {
        self.statistics.num_separation_calls += 1;
        debug!(
            "Separating edge conflicts at node {} (objective value {})",
            master.current_node(),
            master.objective_value(assignment)
        );

        let usage =
            EdgeTimeUsage::for_separation(master, map, assignment, self.options.wait_conflicts);
        let violated = find_violated_conflicts(
            &usage,
            map,
            master.tolerances(),
            self.options.wait_conflicts,
        );

        let mut result = SeparationResult::DidNotFind;
        for violated_conflict in violated {
            match self.add_cut(master, map, assignment, violated_conflict)? {
                RowAddition::Added => result = SeparationResult::Separated,
                RowAddition::Infeasible => {
                    debug!("Cut proves node {} infeasible", master.current_node());
                    self.statistics.num_cutoffs += 1;
                    result = SeparationResult::Cutoff;
                    break;
                }
            }
        }

        Ok(result)
    }

    fn extend(
        &mut self,
        master: &mut dyn MasterProblem,
        variable: VariableId,
    ) -> Result<(), HandlerError> {
        master.add_var_locks(variable, RoundingLocks::new(0, 1))?;

        let num_extended = self.cuts.extend(master, variable)?;
        self.statistics.num_variables_extended += num_extended;
        if num_extended > 0 {
            debug!("Added {variable} to {num_extended} edge conflict cuts");
        }

        Ok(())
    }

    fn lock(
        &self,
        master: &mut dyn MasterProblem,
        locks: RoundingLocks,
    ) -> Result<(), HandlerError> {
        let variables = master.variables().to_vec();
        for variable in variables {
            master.add_var_locks(variable, locks)?;
        }
        Ok(())
    }

    fn duplicate(&self) -> Box<dyn ConflictHandler> {
        mapf_assert_simple!(
            self.cuts.is_empty(),
            "cannot duplicate an edge conflict handler which owns cuts"
        );
        Box::new(EdgeConflictHandler::new(self.options))
    }

    fn transform(&self) -> Box<dyn ConflictHandler> {
        mapf_assert_eq_simple!(
            self.cuts.len(),
            0,
            "cuts were created before the problem was transformed"
        );
        Box::new(EdgeConflictHandler::new(self.options))
    }

    fn release(&mut self, master: &mut dyn MasterProblem) -> Result<(), HandlerError> {
        debug!("Releasing {} edge conflict cuts", self.cuts.len());
        self.cuts.release_all(master)?;
        Ok(())
    }

    fn log_statistics(&self, statistic_logger: StatisticLogger) {
        self.statistics.log(statistic_logger);
    }
}
