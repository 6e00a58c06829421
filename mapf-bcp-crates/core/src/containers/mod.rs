//! Contains containers which are used by the conflict handlers and the master problem.
mod key_generator;
mod keyed_vec;

use fnv::FnvBuildHasher;
pub use key_generator::*;
pub use keyed_vec::*;

/// [`std::collections::HashMap`] that defaults to a deterministic hasher.
///
/// The separator iterates over these maps when emitting cuts, so a deterministic hasher makes the
/// order in which cuts are created reproducible across runs.
#[allow(clippy::disallowed_types, reason = "this is how we define our HashMap")]
pub type HashMap<K, V, Hasher = FnvBuildHasher> = std::collections::HashMap<K, V, Hasher>;
