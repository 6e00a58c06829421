use log::debug;

use super::EdgeTimeUsage;
use crate::asserts::mapf_assert_extreme;
use crate::basic_types::EdgeTime;
use crate::map::DisplayEdge;
use crate::map::Map;
use crate::master::Assignment;
use crate::master::MasterProblem;

/// Returns the first edge-time which is used more than once in `assignment`, together with its
/// usage, or [`None`] if the assignment is free of edge conflicts.
///
/// Waits are never considered; only moves can violate an assignment during checking.
pub(crate) fn find_edge_conflict(
    master: &dyn MasterProblem,
    map: &dyn Map,
    assignment: Assignment<'_>,
) -> Option<(EdgeTime, f64)> {
    let tolerances = master.tolerances();
    let mut usage = EdgeTimeUsage::default();

    let mut conflict = None;
    'variables: for &variable in master.variables() {
        let value = master.value(assignment, variable);
        if !tolerances.is_positive(value) {
            continue;
        }

        for (time, edge) in master.path_variable(variable).path.timed_edges() {
            if edge.is_wait() {
                continue;
            }

            let total = usage.add_move(map, edge, time, value);
            if tolerances.is_gt(total, 1.0) {
                debug!(
                    "Edge {} is used {total} times at time {time}",
                    DisplayEdge::new(map, edge)
                );
                conflict = Some((EdgeTime::new(map.undirected_edge(edge), time), total));
                break 'variables;
            }
        }
    }

    mapf_assert_extreme!(
        conflict.is_some()
            == tolerances.is_gt(
                EdgeTimeUsage::for_separation(master, map, assignment, false).max_move_usage(),
                1.0
            ),
        "the early exit of the checker disagrees with the full usage index"
    );

    conflict
}
