//! The vocabulary of the crate: nodes, directions, (space-time) edges, paths and the numerical
//! tolerances with which path weights are compared.
mod direction;
mod edge;
mod path;
mod space_time;
mod tolerances;

pub use direction::*;
pub use edge::*;
pub use path::*;
pub use space_time::*;
pub use tolerances::*;
