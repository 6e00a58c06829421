#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use mapf_bcp::basic_types::Direction;
use mapf_bcp::basic_types::Edge;
use mapf_bcp::basic_types::Node;
use mapf_bcp::basic_types::Path;
use mapf_bcp::conflicts::edge_conflicts::EdgeConflictHandler;
use mapf_bcp::conflicts::edge_conflicts::EdgeConflictOptions;
use mapf_bcp::conflicts::CheckResult;
use mapf_bcp::conflicts::ConflictHandler;
use mapf_bcp::conflicts::SeparationResult;
use mapf_bcp::map::GridMap;
use mapf_bcp::map::Map;
use mapf_bcp::master::Assignment;
use mapf_bcp::master::RestrictedMaster;
use mapf_bcp::master::Solution;
use mapf_bcp::master::VariableId;

/// Builds a path through the given cells of `map`, which waits at the last cell.
fn path_through(map: &GridMap, cells: &[(u32, u32)]) -> Path {
    let nodes = cells
        .iter()
        .map(|&(x, y)| map.node_at(x, y).expect("passable cell"))
        .collect::<Vec<Node>>();
    let mut edges = nodes
        .windows(2)
        .map(|pair| {
            Edge::new(
                pair[0],
                map.direction_between(pair[0], pair[1])
                    .expect("adjacent cells"),
            )
        })
        .collect::<Vec<_>>();
    edges.push(Edge::wait(nodes[nodes.len() - 1]));
    Path::new(edges)
}

fn cut_rows(handler: &EdgeConflictHandler, map: &dyn Map) -> Vec<String> {
    handler
        .cuts()
        .iter()
        .map(|cut| cut.conflict().row_name(map))
        .collect()
}

#[test]
fn column_generation_rounds_extend_and_tighten_cuts() {
    let map = GridMap::open(3, 1);
    let mut master = RestrictedMaster::default();
    let mut handler = EdgeConflictHandler::new(EdgeConflictOptions::default());

    let east = master.add_path_variable(0, path_through(&map, &[(0, 0), (1, 0)]), 0.6);
    let west = master.add_path_variable(1, path_through(&map, &[(1, 0), (0, 0)]), 0.6);

    assert_eq!(
        handler
            .separate_lp(&mut master, &map)
            .expect("rows are accepted"),
        SeparationResult::Separated
    );
    assert_eq!(handler.cuts().len(), 1);
    let row = handler.cuts().iter().next().expect("one cut").row();

    // The pricing procedure finds another way for the second agent to swap, and a detour.
    let late_west = master.add_path_variable(
        1,
        path_through(&map, &[(1, 0), (1, 0), (0, 0)]),
        0.0,
    );
    let same_edge = master.add_path_variable(
        1,
        path_through(&map, &[(1, 0), (0, 0), (0, 0)]),
        0.0,
    );
    for variable in [late_west, same_edge] {
        handler
            .extend(&mut master, variable)
            .expect("variable exists");
    }

    let stored = master.row(row).expect("row exists");
    assert_eq!(stored.coefficient(east), 1.0);
    assert_eq!(stored.coefficient(west), 1.0);
    assert_eq!(stored.coefficient(late_west), 0.0);
    assert_eq!(stored.coefficient(same_edge), 1.0);

    // The next relaxation moves weight onto the new columns, which swap at time 1.
    master.set_value(east, 0.0).expect("variable exists");
    master.set_value(west, 0.0).expect("variable exists");
    master.set_value(late_west, 0.7).expect("variable exists");
    let late_east = master.add_path_variable(
        0,
        path_through(&map, &[(0, 0), (0, 0), (1, 0)]),
        0.7,
    );
    handler
        .extend(&mut master, late_east)
        .expect("variable exists");

    assert_eq!(
        handler
            .separate_lp(&mut master, &map)
            .expect("rows are accepted"),
        SeparationResult::Separated
    );
    assert_eq!(
        cut_rows(&handler, &map),
        vec![
            "edge_conflict((0,0),(1,0),0)".to_owned(),
            "edge_conflict((0,0),(1,0),1)".to_owned()
        ]
    );

    handler.release(&mut master).expect("rows exist");
    assert_eq!(master.num_rows(), 0);
}

#[test]
fn integral_assignments_without_conflicts_are_feasible() {
    let map = GridMap::open(3, 3);
    let mut master = RestrictedMaster::default();
    let mut handler = EdgeConflictHandler::new(EdgeConflictOptions::default());

    let variables = [
        master.add_path_variable(0, path_through(&map, &[(0, 0), (1, 0), (2, 0)]), 0.0),
        master.add_path_variable(1, path_through(&map, &[(0, 2), (1, 2), (2, 2)]), 0.0),
        master.add_path_variable(2, path_through(&map, &[(1, 1), (1, 1), (1, 1)]), 0.0),
        master.add_path_variable(2, path_through(&map, &[(1, 0), (0, 0)]), 0.0),
    ];
    let feasible = variables[..3]
        .iter()
        .map(|&variable| (variable, 1.0))
        .collect::<Solution>();
    let infeasible = [variables[0], variables[3]]
        .into_iter()
        .map(|variable| (variable, 1.0))
        .collect::<Solution>();

    assert_eq!(
        handler.check(&master, &map, Assignment::Solution(&feasible)),
        CheckResult::Feasible
    );
    assert_eq!(
        handler.check(&master, &map, Assignment::Solution(&infeasible)),
        CheckResult::Infeasible
    );

    // Cuts separated from the infeasible assignment are respected by the feasible one.
    assert_eq!(
        handler
            .separate_solution(&mut master, &map, &infeasible)
            .expect("rows are accepted"),
        SeparationResult::Separated
    );
    for cut in handler.cuts().iter() {
        let activity = master
            .row_activity(cut.row(), Assignment::Solution(&feasible))
            .expect("row exists");
        assert!(activity <= 1.0);
    }

    handler.release(&mut master).expect("rows exist");
}

#[test]
fn separation_is_deterministic() {
    let map = GridMap::open(4, 4);
    let separate = || {
        let mut master = RestrictedMaster::default();
        let mut handler = EdgeConflictHandler::new(EdgeConflictOptions {
            wait_conflicts: true,
            ..Default::default()
        });
        let paths: [&[(u32, u32)]; 4] = [
            &[(0, 0), (1, 0), (2, 0), (3, 0)],
            &[(3, 0), (2, 0), (1, 0), (0, 0)],
            &[(1, 1), (1, 0), (1, 0), (1, 1)],
            &[(2, 1), (2, 0), (2, 1)],
        ];
        for (agent, cells) in paths.iter().enumerate() {
            let _ = master.add_path_variable(agent as u32, path_through(&map, cells), 0.55);
        }

        let _ = handler
            .separate_lp(&mut master, &map)
            .expect("rows are accepted");
        let rows = cut_rows(&handler, &map);
        let waits = handler
            .cuts()
            .iter()
            .map(|cut| cut.conflict().wait().map(|wait| map.coordinates(wait.node)))
            .collect::<Vec<_>>();
        handler.release(&mut master).expect("rows exist");
        (rows, waits)
    };

    let (rows, waits) = separate();
    assert!(!rows.is_empty());
    for _ in 0..5 {
        assert_eq!(separate(), (rows.clone(), waits.clone()));
    }
}

#[test]
fn wait_edges_follow_the_busiest_endpoint() {
    let map = GridMap::open(2, 1);
    let mut master = RestrictedMaster::default();
    let mut handler = EdgeConflictHandler::new(EdgeConflictOptions {
        wait_conflicts: true,
        ..Default::default()
    });

    let mover = master.add_path_variable(0, path_through(&map, &[(0, 0), (1, 0)]), 0.5);
    // More weight waits at the destination of the move than at its origin.
    let waiting = master.add_path_variable(1, path_through(&map, &[(1, 0), (1, 0)]), 0.75);
    let _ = master.add_path_variable(2, path_through(&map, &[(0, 0), (0, 0)]), 0.25);

    let _ = handler
        .separate_lp(&mut master, &map)
        .expect("rows are accepted");

    let cut = handler.cuts().iter().next().expect("one cut");
    let wait = cut.conflict().wait().expect("waits are modelled");
    assert_eq!(
        wait,
        Edge::new(map.node_at(1, 0).expect("in bounds"), Direction::Wait)
    );
    let members = master
        .row(cut.row())
        .expect("row exists")
        .coefficients()
        .iter()
        .map(|&(variable, _)| variable)
        .collect::<Vec<VariableId>>();
    assert_eq!(members, vec![mover, waiting]);

    handler.release(&mut master).expect("rows exist");
}
