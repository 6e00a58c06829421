//! Edge conflicts: no undirected edge may be traversed by more than one agent at a time.
//!
//! The handler builds an [`EdgeTimeUsage`] index from the weighted paths of the master problem.
//! The checker looks for an edge-time used more than once; the separator turns every such
//! edge-time into an [`EdgeConflict`] and adds a cut
//!
//! ```text
//! sum { x_p : p traverses e or opposite(e) at time t } <= 1
//! ```
//!
//! for it. When waits are modelled, the agents waiting at one endpoint of the edge are added to
//! the left-hand side as well. The cuts are kept in a [`CutStore`] which adds new path variables to
//! them as they are generated.
mod checker;
mod conflict;
mod cut_store;
mod handler;
mod options;
mod separator;
mod usage;

pub use conflict::DisplayConflict;
pub use conflict::EdgeConflict;
pub use cut_store::CutStore;
pub use cut_store::EdgeConflictCut;
pub use handler::EdgeConflictHandler;
pub use handler::EdgeConflictStatistics;
pub use options::EdgeConflictOptions;
pub use usage::EdgeTimeUsage;
