use crate::basic_types::Edge;
use crate::basic_types::EdgeTime;
use crate::basic_types::Node;
use crate::basic_types::Path;
use crate::basic_types::Time;
use crate::containers::HashMap;
use crate::map::Map;
use crate::master::Assignment;
use crate::master::MasterProblem;

/// The aggregated weight of the paths using each space-time edge.
///
/// Move usage is keyed by the canonical undirected edge (see [`Map::undirected_edge`]), so that
/// both directions of an edge are summed together. Wait usage is keyed by the wait edge of a node.
/// Only variables with a positive value contribute.
#[derive(Debug, Default, Clone)]
pub struct EdgeTimeUsage {
    moves: HashMap<EdgeTime, f64>,
    waits: HashMap<EdgeTime, f64>,
    makespan: Time,
}

impl EdgeTimeUsage {
    /// Builds the usage index of `assignment` as needed for separation.
    ///
    /// When `wait_conflicts` is set, the waits are recorded as well. Agents which have reached
    /// their destination are counted as waiting there until one step before the makespan.
    pub fn for_separation(
        master: &dyn MasterProblem,
        map: &dyn Map,
        assignment: Assignment<'_>,
        wait_conflicts: bool,
    ) -> Self {
        let tolerances = master.tolerances();
        let weighted_paths = master
            .variables()
            .iter()
            .filter_map(|&variable| {
                let value = master.value(assignment, variable);
                tolerances
                    .is_positive(value)
                    .then(|| (value, &master.path_variable(variable).path))
            })
            .collect::<Vec<_>>();

        let makespan = weighted_paths
            .iter()
            .map(|(_, path)| path.len())
            .max()
            .unwrap_or(0);

        let mut usage = EdgeTimeUsage {
            makespan,
            ..Default::default()
        };
        for (value, path) in weighted_paths {
            usage.add_path(map, path, value, wait_conflicts);
        }
        usage
    }

    fn add_path(&mut self, map: &dyn Map, path: &Path, value: f64, wait_conflicts: bool) {
        for (time, edge) in path.timed_edges() {
            if !edge.is_wait() {
                let _ = self.add_move(map, edge, time, value);
            } else if wait_conflicts {
                self.add_wait(edge.node, time, value);
            }
        }

        if wait_conflicts {
            for time in path.last_step()..self.makespan.saturating_sub(1) {
                self.add_wait(path.final_node(), time, value);
            }
        }
    }

    /// Adds `value` to the usage of the undirected edge of `edge` at `time`, and returns the new
    /// usage.
    pub fn add_move(&mut self, map: &dyn Map, edge: Edge, time: Time, value: f64) -> f64 {
        let key = EdgeTime::new(map.undirected_edge(edge), time);
        let usage = self.moves.entry(key).or_insert(0.0);
        *usage += value;
        *usage
    }

    /// Adds `value` to the usage of the wait at `node` at `time`.
    pub fn add_wait(&mut self, node: Node, time: Time, value: f64) {
        *self
            .waits
            .entry(EdgeTime::new(Edge::wait(node), time))
            .or_insert(0.0) += value;
    }

    /// The usage of the undirected edge of `edge` at `time`.
    pub fn move_usage(&self, map: &dyn Map, edge: Edge, time: Time) -> f64 {
        self.moves
            .get(&EdgeTime::new(map.undirected_edge(edge), time))
            .copied()
            .unwrap_or(0.0)
    }

    /// The usage of the wait at `node` at `time`.
    pub fn wait_usage(&self, node: Node, time: Time) -> f64 {
        self.waits
            .get(&EdgeTime::new(Edge::wait(node), time))
            .copied()
            .unwrap_or(0.0)
    }

    /// The move usage of all used edge-times, ordered by time and then by edge.
    pub fn moves(&self) -> Vec<(EdgeTime, f64)> {
        let mut moves = self
            .moves
            .iter()
            .map(|(&edge_time, &usage)| (edge_time, usage))
            .collect::<Vec<_>>();
        moves.sort_by_key(|(edge_time, _)| (edge_time.time, edge_time.edge));
        moves
    }

    /// The highest usage of any edge-time by moving agents.
    pub fn max_move_usage(&self) -> f64 {
        self.moves.values().copied().fold(0.0, f64::max)
    }

    /// The length of the longest path with a positive value.
    pub fn makespan(&self) -> Time {
        self.makespan
    }
}
