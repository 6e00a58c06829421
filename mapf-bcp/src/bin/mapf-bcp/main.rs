mod parsers;
mod result;

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use log::debug;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use mapf_bcp::assert_levels::MAPF_ASSERT_LEVEL_DEFINITION;
use mapf_bcp::assert_levels::MAPF_ASSERT_MODERATE;
use mapf_bcp::basic_types::Tolerances;
use mapf_bcp::conflicts::edge_conflicts::EdgeConflictHandler;
use mapf_bcp::conflicts::edge_conflicts::EdgeConflictOptions;
use mapf_bcp::conflicts::CheckResult;
use mapf_bcp::conflicts::ConflictClass;
use mapf_bcp::conflicts::ConflictHandler;
use mapf_bcp::conflicts::SeparationResult;
use mapf_bcp::convert_case::Case;
use mapf_bcp::map::GridMap;
use mapf_bcp::master::Assignment;
use mapf_bcp::master::MasterProblem;
use mapf_bcp::master::RestrictedMaster;
use mapf_bcp::master::RoundingLocks;
use mapf_bcp::statistics::configure_statistic_logging;
use mapf_bcp::statistics::log_statistic_postfix;
use mapf_bcp::statistics::should_log_statistics;
use mapf_bcp::statistics::StatisticLogger;
use parsers::movingai::parse_movingai;
use parsers::paths::parse_paths;
use parsers::paths::WeightedPath;
use result::MapfBcpError;
use result::MapfBcpResult;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The map on which the agents move, in the MovingAI format.
    map_path: PathBuf,

    /// The weighted paths of the relaxation. Every line has the form
    /// `agent weight x0,y0 x1,y1 ...`; the weight is the value of the path in the relaxation.
    #[clap(verbatim_doc_comment)]
    paths_path: PathBuf,

    /// Paths which are generated after separation, in the same format as the relaxation paths.
    ///
    /// Every priced path becomes a new variable (with the given weight as its value) and is added
    /// to the cuts it uses.
    #[arg(long)]
    priced_paths: Option<PathBuf>,

    /// The kind of conflicts which are forbidden.
    #[arg(long, value_enum, default_value_t)]
    conflicts: ConflictClass,

    /// Also count agents waiting at an endpoint of an edge; shorthand for `--conflicts edge-wait`.
    #[arg(long, conflicts_with = "conflicts")]
    wait_conflicts: bool,

    /// The number of cuts for which room is reserved up front.
    ///
    /// Possible values: usize
    #[arg(long = "cut-capacity", default_value_t = 5000)]
    cut_capacity: usize,

    /// Values are positive, and one value is greater than another, when they differ by more than
    /// this tolerance.
    #[arg(long, default_value_t = 1e-9)]
    epsilon: f64,

    /// The tolerance with which rows are checked for feasibility.
    #[arg(long = "feasibility-tolerance", default_value_t = 1e-6)]
    feasibility_tolerance: f64,

    /// Enables log message output from the conflict handler.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Enables logging of the statistics of the conflict handler.
    #[arg(short = 's', long = "log-statistics")]
    log_statistics: bool,
}

impl Args {
    fn edge_conflict_options(&self) -> EdgeConflictOptions {
        let class = if self.wait_conflicts {
            ConflictClass::EdgeWait
        } else {
            self.conflicts
        };

        EdgeConflictOptions {
            initial_cut_capacity: self.cut_capacity,
            ..EdgeConflictOptions::for_class(class)
        }
    }

    fn tolerances(&self) -> Tolerances {
        Tolerances {
            epsilon: self.epsilon,
            feasibility: self.feasibility_tolerance,
        }
    }
}

fn configure_logging(verbose: bool, log_statistics: bool) -> std::io::Result<()> {
    if log_statistics {
        configure_statistic_logging(
            "%%%mapf-stat:",
            Some("%%%mapf-stat-end"),
            Some(Case::Camel),
            None,
        );
    }
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "% ")?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> MapfBcpResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics)?;

    if MAPF_ASSERT_LEVEL_DEFINITION >= MAPF_ASSERT_MODERATE {
        warn!(
            "Potential performance degradation: the assert level is set to {MAPF_ASSERT_LEVEL_DEFINITION}, meaning many debug asserts are active which may result in performance degradation."
        );
    };

    let map = read_map(&args.map_path)?;
    let paths = read_paths(&args.paths_path, &map)?;
    let priced_paths = args
        .priced_paths
        .as_ref()
        .map(|path| read_paths(path, &map))
        .transpose()?;

    let mut master = RestrictedMaster::with_tolerances(args.tolerances());
    for WeightedPath {
        agent,
        weight,
        path,
    } in paths
    {
        let _ = master.add_path_variable(agent, path, weight);
    }
    info!(
        "Read {} paths on a {}x{} map",
        master.variables().len(),
        map.width(),
        map.height()
    );

    let mut handler = EdgeConflictHandler::new(args.edge_conflict_options());
    info!(
        "Forbidding {:?} conflicts",
        handler.options().conflict_class()
    );
    handler.lock(&mut master, RoundingLocks::new(0, 1))?;

    let outcome = separate_and_report(
        &mut handler,
        &mut master,
        &map,
        priced_paths.unwrap_or_default(),
    );
    let released = handler.release(&mut master);

    outcome?;
    released?;
    Ok(())
}

fn read_map(path: &Path) -> MapfBcpResult<GridMap> {
    let file = File::open(path)?;
    parse_movingai(file).map_err(|error| MapfBcpError::invalid_instance(path.display(), error))
}

fn read_paths(path: &Path, map: &GridMap) -> MapfBcpResult<Vec<WeightedPath>> {
    let file = File::open(path)?;
    parse_paths(file, map).map_err(|error| MapfBcpError::invalid_instance(path.display(), error))
}

/// Checks and separates the relaxation, adds the priced paths to the cuts and prints the cuts.
fn separate_and_report(
    handler: &mut EdgeConflictHandler,
    master: &mut RestrictedMaster,
    map: &GridMap,
    priced_paths: Vec<WeightedPath>,
) -> MapfBcpResult<()> {
    let check = handler.check(&*master, map, Assignment::Relaxation);
    println!(
        "check: {}",
        match check {
            CheckResult::Feasible => "feasible",
            CheckResult::Infeasible => "infeasible",
        }
    );

    let separation = handler.separate_lp(master, map)?;
    println!(
        "separation: {}",
        match separation {
            SeparationResult::DidNotFind => "did-not-find",
            SeparationResult::Separated => "separated",
            SeparationResult::Cutoff => "cutoff",
        }
    );

    debug!(
        "{} rows are part of the relaxation",
        master.num_rows_in_relaxation()
    );

    for WeightedPath {
        agent,
        weight,
        path,
    } in priced_paths
    {
        let variable = master.add_path_variable(agent, path, weight);
        debug!("Priced {variable} for agent {agent}");
        handler.extend(master, variable)?;
    }

    for cut in handler.cuts().iter() {
        let Some(row) = master.row(cut.row()) else {
            continue;
        };
        let members = row
            .coefficients()
            .iter()
            .map(|(variable, _)| variable.to_string())
            .collect::<Vec<_>>();
        let activity = row.activity(|variable| master.value(Assignment::Relaxation, variable));

        println!(
            "cut {}: {} <= 1 (activity {activity:.3})",
            cut.conflict().row_name(map),
            members.join(" + ")
        );
    }

    if should_log_statistics() {
        handler.log_statistics(StatisticLogger::new([handler.properties().name]));
        log_statistic_postfix();
    }

    Ok(())
}
