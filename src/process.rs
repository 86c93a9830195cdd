//! External tool invocation.
//!
//! Everything this crate needs from the zipper executable is "spawn it with
//! these arguments, wait, report the exit status". That seam is a trait so
//! tests can observe or fake invocations without a real tool on disk.

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Spawn-and-wait interface for the external archiver.
pub trait ToolRunner {
    /// Run `program` with `args`, blocking until it exits.
    ///
    /// Stdio handling is up to the implementation; [`SystemRunner`] inherits
    /// the parent's streams so the tool's own diagnostics pass through
    /// untouched.
    fn run(&self, program: &Path, args: &[OsString]) -> io::Result<ExitStatus>;
}

/// Production runner backed by `std::process::Command`.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[OsString]) -> io::Result<ExitStatus> {
        Command::new(program).args(args).status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_success_and_failure_exit_status() {
        let ok = SystemRunner.run(Path::new("true"), &[]).unwrap();
        assert!(ok.success());

        let bad = SystemRunner.run(Path::new("false"), &[]).unwrap();
        assert!(!bad.success());
        assert_eq!(bad.code(), Some(1));
    }

    #[test]
    fn test_missing_program_is_a_spawn_error() {
        let result = SystemRunner.run(Path::new("/definitely/not/a/real/tool"), &[]);
        assert!(result.is_err(), "spawning a missing program should fail");
    }
}
