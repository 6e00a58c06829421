//! Helpers to run the `mapf-bcp` binary in integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::io::Read;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::time::Duration;

use wait_timeout::ChildExt;

#[derive(Debug)]
pub(crate) struct RunOutput {
    pub(crate) status: ExitStatus,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

pub(crate) fn instance(name: &str) -> PathBuf {
    PathBuf::from(format!("{}/tests/instances/{name}", env!("CARGO_MANIFEST_DIR")))
}

/// Runs the binary on the given map and paths file, with additional `args`.
pub(crate) fn run_mapf_bcp<'a>(
    map: &str,
    paths: &str,
    args: impl IntoIterator<Item = &'a str>,
) -> RunOutput {
    const TEST_TIMEOUT: Duration = Duration::from_secs(60);

    let binary = PathBuf::from(env!("CARGO_BIN_EXE_mapf-bcp"));

    let mut command = Command::new(binary);
    let _ = command.arg(instance(map)).arg(instance(paths));
    for arg in args {
        let _ = command.arg(arg);
    }

    let mut child = command
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run mapf-bcp.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => {
            let _ = child.kill();
            panic!("mapf-bcp took more than {} seconds", TEST_TIMEOUT.as_secs())
        }
        Ok(Some(status)) => status,
        Err(e) => panic!("error running mapf-bcp: {e}"),
    };

    let mut stdout = String::new();
    let _ = child
        .stdout
        .take()
        .expect("stdout is piped")
        .read_to_string(&mut stdout)
        .expect("stdout is valid UTF-8");
    let mut stderr = String::new();
    let _ = child
        .stderr
        .take()
        .expect("stderr is piped")
        .read_to_string(&mut stderr)
        .expect("stderr is valid UTF-8");

    RunOutput {
        status,
        stdout,
        stderr,
    }
}

/// Returns the cut lines of the output, i.e. the lines starting with `cut `.
pub(crate) fn cut_lines(output: &RunOutput) -> Vec<&str> {
    output
        .stdout
        .lines()
        .filter(|line| line.starts_with("cut "))
        .collect()
}
