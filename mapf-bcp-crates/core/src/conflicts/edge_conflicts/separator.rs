use log::trace;

use super::EdgeConflict;
use super::EdgeTimeUsage;
use crate::asserts::mapf_assert_moderate;
use crate::basic_types::Edge;
use crate::basic_types::Node;
use crate::basic_types::Time;
use crate::basic_types::Tolerances;
use crate::map::DisplayEdge;
use crate::map::Map;

/// An edge conflict whose edges are used more than once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ViolatedConflict {
    pub(crate) conflict: EdgeConflict,
    /// The combined usage of the edges of the conflict.
    pub(crate) usage: f64,
}

/// Finds all edge conflicts violated by the paths summarised in `usage`, ordered by time.
///
/// For every used edge-time the two directions of the edge form a conflict. With
/// `wait_conflicts`, the wait at the endpoint with the highest wait usage is added as well.
pub(crate) fn find_violated_conflicts(
    usage: &EdgeTimeUsage,
    map: &dyn Map,
    tolerances: Tolerances,
    wait_conflicts: bool,
) -> Vec<ViolatedConflict> {
    let mut violated = Vec::new();

    for (edge_time, move_usage) in usage.moves() {
        let conflict = EdgeConflict::between_moves(map, edge_time.edge, edge_time.time);
        let [edge, opposite] = conflict.moves();
        mapf_assert_moderate!(
            map.opposite_edge(opposite) == edge,
            "the edges of a conflict are not each other's opposite"
        );

        let (conflict, wait_usage) = if wait_conflicts {
            let (node, wait_usage) = busiest_endpoint(usage, edge, opposite, edge_time.time);
            (conflict.with_wait_at(node), wait_usage)
        } else {
            (conflict, 0.0)
        };

        let total = move_usage + wait_usage;
        trace!(
            "Edge {} at time {} has move usage {move_usage} and wait usage {wait_usage}",
            DisplayEdge::new(map, edge),
            edge_time.time
        );

        if tolerances.is_gt(total, 1.0) {
            violated.push(ViolatedConflict {
                conflict,
                usage: total,
            });
        }
    }

    violated
}

/// Selects the endpoint of the edge whose wait is used most at `time`, preferring the origin of
/// `edge` on ties.
fn busiest_endpoint(usage: &EdgeTimeUsage, edge: Edge, opposite: Edge, time: Time) -> (Node, f64) {
    let origin_usage = usage.wait_usage(edge.node, time);
    let destination_usage = usage.wait_usage(opposite.node, time);

    if origin_usage >= destination_usage {
        (edge.node, origin_usage)
    } else {
        (opposite.node, destination_usage)
    }
}
