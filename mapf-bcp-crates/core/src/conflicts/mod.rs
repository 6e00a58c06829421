//! Conflict handlers: the components which keep the path variables of the master problem free of
//! conflicts between agents.
//!
//! A conflict handler is registered with the master problem and called back at fixed points of the
//! branch-and-price loop. The callbacks are modelled by the [`ConflictHandler`] trait; the
//! edge-conflict implementation lives in [`edge_conflicts`].
pub mod edge_conflicts;

use std::fmt::Debug;

use thiserror::Error;

use crate::map::Map;
use crate::master::Assignment;
use crate::master::MasterError;
use crate::master::MasterProblem;
use crate::master::RoundingLocks;
use crate::master::Solution;
use crate::master::VariableId;
use crate::statistics::StatisticLogger;

/// The kind of conflicts a handler forbids.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ConflictClass {
    /// Two agents traversing the same undirected edge at the same time.
    #[default]
    Edge,
    /// Edge conflicts which additionally count an agent waiting at one of the endpoints.
    EdgeWait,
}

impl ConflictClass {
    pub fn models_waits(self) -> bool {
        self == ConflictClass::EdgeWait
    }
}

/// The outcome of checking an assignment for conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckResult {
    Feasible,
    Infeasible,
}

/// The outcome of a separation round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparationResult {
    /// No violated conflict was found.
    DidNotFind,
    /// At least one cut was added to the relaxation.
    Separated,
    /// A cut proved the relaxation of the current node infeasible.
    Cutoff,
}

/// The outcome of enforcing the conflicts on a solution of the relaxation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnforcementResult {
    Feasible,
    Infeasible,
    Separated,
    Cutoff,
}

impl From<SeparationResult> for EnforcementResult {
    fn from(result: SeparationResult) -> Self {
        match result {
            SeparationResult::DidNotFind => EnforcementResult::Feasible,
            SeparationResult::Separated => EnforcementResult::Separated,
            SeparationResult::Cutoff => EnforcementResult::Cutoff,
        }
    }
}

impl From<CheckResult> for EnforcementResult {
    fn from(result: CheckResult) -> Self {
        match result {
            CheckResult::Feasible => EnforcementResult::Feasible,
            CheckResult::Infeasible => EnforcementResult::Infeasible,
        }
    }
}

/// The static properties with which a handler is registered with the master problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerProperties {
    pub name: &'static str,
    pub description: &'static str,
    /// Handlers with a higher priority separate first.
    pub separation_priority: i32,
    /// Handlers with a higher priority enforce first.
    pub enforcement_priority: i32,
    /// Handlers with a higher priority check first.
    pub check_priority: i32,
    /// Separation is called at every `separation_frequency`-th depth of the search tree.
    pub separation_frequency: i32,
    /// The frequency with which all rows of the handler are treated as useful.
    pub eager_frequency: i32,
    /// Whether separation should be postponed until no other separator finds cuts.
    pub delay_separation: bool,
    /// Whether the handler is only called when it owns constraints.
    pub needs_constraints: bool,
}

/// Errors which occur while a handler interacts with the master problem.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum HandlerError {
    #[error("the master problem rejected an operation: {0}")]
    Master(#[from] MasterError),
}

/// The callbacks through which the master problem drives a conflict handler.
///
/// The methods which only read the master problem take a shared reference; all methods which may
/// create or modify rows take a mutable one. Handlers own the rows they create and have to give
/// them back through [`ConflictHandler::release`] before they are dropped.
pub trait ConflictHandler: Debug {
    /// The registration properties of the handler.
    fn properties(&self) -> HandlerProperties;

    /// Decides whether `assignment` (which is expected to be integral) is free of conflicts.
    fn check(
        &mut self,
        master: &dyn MasterProblem,
        map: &dyn Map,
        assignment: Assignment<'_>,
    ) -> CheckResult;

    /// Adds a cut for every violated conflict of `assignment`.
    fn separate(
        &mut self,
        master: &mut dyn MasterProblem,
        map: &dyn Map,
        assignment: Assignment<'_>,
    ) -> Result<SeparationResult, HandlerError>;

    /// Enforces the conflicts on the solution of the current relaxation.
    fn enforce_lp(
        &mut self,
        master: &mut dyn MasterProblem,
        map: &dyn Map,
    ) -> Result<EnforcementResult, HandlerError> {
        Ok(self.separate(master, map, Assignment::Relaxation)?.into())
    }

    /// Enforces the conflicts on a pseudo solution, for which no cuts may be added.
    fn enforce_pseudo(&mut self, master: &dyn MasterProblem, map: &dyn Map) -> EnforcementResult {
        self.check(master, map, Assignment::Relaxation).into()
    }

    /// Separates the solution of the current relaxation.
    fn separate_lp(
        &mut self,
        master: &mut dyn MasterProblem,
        map: &dyn Map,
    ) -> Result<SeparationResult, HandlerError> {
        self.separate(master, map, Assignment::Relaxation)
    }

    /// Separates an explicit primal solution.
    fn separate_solution(
        &mut self,
        master: &mut dyn MasterProblem,
        map: &dyn Map,
        solution: &Solution,
    ) -> Result<SeparationResult, HandlerError> {
        self.separate(master, map, Assignment::Solution(solution))
    }

    /// Informs the handler of a new path variable, so that it can be added to the existing cuts.
    ///
    /// Has to be called for every variable created by the pricing procedure before the relaxation
    /// is solved again.
    fn extend(
        &mut self,
        master: &mut dyn MasterProblem,
        variable: VariableId,
    ) -> Result<(), HandlerError>;

    /// Registers the rounding restrictions of the handler on all variables of the master problem.
    fn lock(
        &self,
        master: &mut dyn MasterProblem,
        locks: RoundingLocks,
    ) -> Result<(), HandlerError>;

    /// Creates a handler for a copy of the master problem.
    fn duplicate(&self) -> Box<dyn ConflictHandler>;

    /// Creates the handler for the transformed master problem.
    fn transform(&self) -> Box<dyn ConflictHandler>;

    /// Gives all rows owned by the handler back to the master problem.
    fn release(&mut self, master: &mut dyn MasterProblem) -> Result<(), HandlerError>;

    /// Logs the statistics of the handler.
    ///
    /// By default, no statistics are logged.
    fn log_statistics(&self, _statistic_logger: StatisticLogger) {}
}
