//! # MAPF-BCP core
//! The core of the edge-conflict machinery of a branch-and-price solver for multi-agent path
//! finding (MAPF).
//!
//! In the branch-and-price formulation every candidate route of an agent is a path variable of a
//! large linear program. An integral solution must never use an undirected edge of the
//! environment, in either direction, with more than one agent at the same time step. This crate
//! detects violations of that rule and turns them into cutting planes:
//! * the [`conflicts::edge_conflicts::EdgeTimeUsage`] index aggregates the weight of all paths per
//!   space-time edge;
//! * the checker decides whether an integral assignment is conflict-free;
//! * the separator finds all violated space-time edges of a (fractional) assignment and emits one
//!   cut per violation;
//! * the [`conflicts::edge_conflicts::CutStore`] keeps the emitted cuts and extends them whenever
//!   the column generation loop introduces a new path variable.
//!
//! The linear program itself is owned by an external solver, which is accessed exclusively through
//! the [`master::MasterProblem`] trait. For testing and for the command-line driver, the crate
//! provides the [`master::RestrictedMaster`], a small in-process implementation of that trait.
//!
//! # Example
//! ```rust
//! # use mapf_bcp_core::basic_types::Direction;
//! # use mapf_bcp_core::basic_types::Edge;
//! # use mapf_bcp_core::basic_types::Path;
//! # use mapf_bcp_core::conflicts::ConflictHandler;
//! # use mapf_bcp_core::conflicts::SeparationResult;
//! # use mapf_bcp_core::conflicts::edge_conflicts::EdgeConflictHandler;
//! # use mapf_bcp_core::conflicts::edge_conflicts::EdgeConflictOptions;
//! # use mapf_bcp_core::map::GridMap;
//! # use mapf_bcp_core::master::Assignment;
//! # use mapf_bcp_core::master::RestrictedMaster;
//! // A corridor of two cells, `a` on the left and `b` on the right.
//! let map = GridMap::open(2, 1);
//! let a = map.node_at(0, 0).unwrap();
//! let b = map.node_at(1, 0).unwrap();
//!
//! // Two agents swapping positions at time 0.
//! let mut master = RestrictedMaster::default();
//! let _ = master.add_path_variable(
//!     0,
//!     Path::new(vec![Edge::new(a, Direction::East), Edge::new(b, Direction::Wait)]),
//!     0.6,
//! );
//! let _ = master.add_path_variable(
//!     1,
//!     Path::new(vec![Edge::new(b, Direction::West), Edge::new(a, Direction::Wait)]),
//!     0.6,
//! );
//!
//! let mut handler = EdgeConflictHandler::new(EdgeConflictOptions::default());
//! let result = handler
//!     .separate(&mut master, &map, Assignment::Relaxation)
//!     .expect("the master accepts the rows");
//!
//! assert_eq!(result, SeparationResult::Separated);
//! assert_eq!(handler.cuts().len(), 1);
//!
//! // Rows owned by the handler have to be handed back before it is dropped.
//! handler.release(&mut master).expect("the rows are known to the master");
//! ```
pub(crate) mod asserts;
pub mod basic_types;
pub mod conflicts;
pub mod containers;
pub mod map;
pub mod master;
pub mod statistics;

pub use convert_case;

pub use crate::conflicts::ConflictHandler;
pub use crate::conflicts::edge_conflicts::EdgeConflictHandler;
pub use crate::master::MasterProblem;
pub use crate::master::RestrictedMaster;

/// Exposes the assertion level of the crate, so that binaries can report when expensive checks are
/// enabled.
pub mod assert_levels {
    pub use crate::asserts::MAPF_ASSERT_ADVANCED;
    pub use crate::asserts::MAPF_ASSERT_EXTREME;
    pub use crate::asserts::MAPF_ASSERT_LEVEL_DEFINITION;
    pub use crate::asserts::MAPF_ASSERT_MODERATE;
    pub use crate::asserts::MAPF_ASSERT_SIMPLE;
}
