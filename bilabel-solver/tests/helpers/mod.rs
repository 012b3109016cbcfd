//! Helpers to run the binaries of this crate in integration tests.
#![allow(
    dead_code,
    reason = "each integration test binary uses a different subset of the helpers"
)]

use std::io::Read;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;
use std::time::Duration;

use wait_timeout::ChildExt;

const TEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug)]
pub(crate) struct Run {
    pub(crate) exit_code: Option<i32>,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

impl Run {
    /// The trimmed stdout.
    pub(crate) fn output(&self) -> &str {
        self.stdout.trim()
    }
}

pub(crate) fn run_solver(args: &[&str], stdin: Option<&str>) -> Run {
    run_executable(PathBuf::from(env!("CARGO_BIN_EXE_bilabel-solver")), args, stdin)
}

pub(crate) fn run_grid_walk(args: &[&str], stdin: Option<&str>) -> Run {
    run_executable(PathBuf::from(env!("CARGO_BIN_EXE_grid-walk")), args, stdin)
}

fn run_executable(executable: PathBuf, args: &[&str], stdin: Option<&str>) -> Run {
    let mut child = Command::new(executable)
        .args(args)
        .stdin(if stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run executable.");

    if let Some(input) = stdin {
        let mut child_stdin = child.stdin.take().expect("stdin is piped");
        child_stdin
            .write_all(input.as_bytes())
            .expect("Failed to write to stdin.");
    }

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => panic!("executable took more than {} seconds", TEST_TIMEOUT.as_secs()),
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting executable: {e}"),
    };

    let mut stdout = String::new();
    let _ = child
        .stdout
        .take()
        .expect("stdout is piped")
        .read_to_string(&mut stdout)
        .expect("Failed to read stdout.");

    let mut stderr = String::new();
    let _ = child
        .stderr
        .take()
        .expect("stderr is piped")
        .read_to_string(&mut stderr)
        .expect("Failed to read stderr.");

    Run {
        exit_code: status.code(),
        stdout,
        stderr,
    }
}
