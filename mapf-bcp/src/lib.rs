//! # MAPF-BCP
//! Edge-conflict detection and cut separation for branch-and-price solvers for multi-agent path
//! finding.
//!
//! The library re-exports the `mapf-bcp-core` crate. The `mapf-bcp` binary in this package reads
//! a MovingAI map and a file of weighted paths, checks and separates the edge conflicts of the
//! paths and prints the resulting cuts:
//! ```text
//! mapf-bcp maps/corridor.map paths/swap.paths --wait-conflicts --log-statistics
//! ```
//!
//! ## Feature Flags
//! - `debug-checks`: Enable expensive assertions in the conflict handlers. Turning this on slows
//!   down separation considerably, so it is turned off by default.
pub use mapf_bcp_core::*;
