#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use helpers::cut_lines;
use helpers::run_mapf_bcp;
use regex::Regex;

mod helpers;

#[test]
fn swapping_agents_are_cut() {
    let output = run_mapf_bcp("corridor.map", "swap.paths", []);

    assert!(output.status.success(), "{}", output.stderr);
    assert!(output.stdout.contains("check: infeasible"));
    assert!(output.stdout.contains("separation: separated"));
    assert_eq!(
        cut_lines(&output),
        vec!["cut edge_conflict((0,0),(1,0),0): x0 + x1 <= 1 (activity 1.200)"]
    );
}

#[test]
fn shifted_agents_are_not_cut() {
    let output = run_mapf_bcp("corridor.map", "shifted.paths", []);

    assert!(output.status.success(), "{}", output.stderr);
    assert!(output.stdout.contains("check: feasible"));
    assert!(output.stdout.contains("separation: did-not-find"));
    assert!(cut_lines(&output).is_empty());
}

#[test]
fn agents_passing_an_obstacle_are_not_cut() {
    for conflicts in ["edge", "edge-wait"] {
        let output = run_mapf_bcp("ring.map", "ring.paths", ["--conflicts", conflicts]);

        assert!(output.status.success(), "{}", output.stderr);
        assert!(output.stdout.contains("check: feasible"));
        assert!(cut_lines(&output).is_empty());
    }
}

#[test]
fn priced_paths_extend_the_cuts_they_use() {
    let priced = helpers::instance("priced.paths");
    let priced = priced.to_str().expect("valid path");

    let output = run_mapf_bcp("corridor.map", "swap.paths", ["--priced-paths", priced]);

    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(
        cut_lines(&output),
        vec!["cut edge_conflict((0,0),(1,0),0): x0 + x1 + x2 <= 1 (activity 1.200)"]
    );
}

#[test]
fn waiting_agents_only_count_with_wait_conflicts() {
    let without_waits = run_mapf_bcp("corridor.map", "parked.paths", []);
    assert!(without_waits.status.success(), "{}", without_waits.stderr);
    assert!(without_waits.stdout.contains("separation: did-not-find"));

    let with_waits = run_mapf_bcp("corridor.map", "parked.paths", ["--wait-conflicts"]);
    assert!(with_waits.status.success(), "{}", with_waits.stderr);
    assert!(with_waits.stdout.contains("check: feasible"));
    assert!(with_waits.stdout.contains("separation: separated"));
    assert_eq!(
        cut_lines(&with_waits),
        vec![
            "cut edge_conflict((1,0),(2,0),2): x0 + x1 <= 1 (activity 1.250)",
            "cut edge_conflict((0,0),(1,0),3): x0 + x1 <= 1 (activity 1.250)",
        ]
    );
}

#[test]
fn verbose_output_reports_the_conflict_class() {
    let output = run_mapf_bcp("corridor.map", "swap.paths", ["-v", "--wait-conflicts"]);

    assert!(output.status.success(), "{}", output.stderr);
    assert!(output.stdout.contains("% Forbidding EdgeWait conflicts"));
    assert!(output.stdout.contains("% 1 rows are part of the relaxation"));
}

#[test]
fn statistics_are_logged_on_request() {
    let output = run_mapf_bcp("corridor.map", "swap.paths", ["--log-statistics"]);

    assert!(output.status.success(), "{}", output.stderr);
    let cuts_created = Regex::new(r"(?m)^%%%mapf-stat: edgeConflictsNumCutsCreated=1$")
        .expect("valid regex");
    let average = Regex::new(r"(?m)^%%%mapf-stat: edgeConflictsAverageVariablesPerCut=2$")
        .expect("valid regex");
    assert!(cuts_created.is_match(&output.stdout), "{}", output.stdout);
    assert!(average.is_match(&output.stdout), "{}", output.stdout);
    assert!(output.stdout.contains("%%%mapf-stat-end"));
}

#[test]
fn invalid_paths_are_reported() {
    let output = run_mapf_bcp("corridor.map", "jump.paths", []);

    assert!(!output.status.success());
    assert!(output.stdout.contains("are not adjacent"), "{}", output.stdout);
}
