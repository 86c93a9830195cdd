//! Zip creation with a directory prefix stripped from entry names.
//!
//! Given a root directory and files nested under it, derives one archive
//! entry per file, named by the file's path relative to the root, then
//! delegates the actual archiving to an external zipper tool invoked as
//! `zipper c <output> <name=source>...`.
//!
//! The prefix stripping is pure ([`entry_specs`]) and separated from the
//! process invocation ([`create_zip_with`]) so each half can be tested on
//! its own.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use thiserror::Error;

use crate::process::{SystemRunner, ToolRunner};

/// Failure modes of [`create_zip`].
#[derive(Debug, Error)]
pub enum ZipError {
    /// A file is not a descendant of the root directory. Detected before
    /// the zipper is spawned; no archive is produced.
    #[error("non-descendant: {} not under {}", .file.display(), .root.display())]
    NonDescendant { file: PathBuf, root: PathBuf },

    /// The zipper executable could not be launched at all. Distinct from a
    /// failed run: this is a configuration problem, not an archiving one.
    #[error("failed to launch {}", .tool.display())]
    Spawn {
        tool: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The zipper ran but exited unsuccessfully.
    #[error("{} failed: {}", .tool.display(), .status)]
    ToolFailure { tool: PathBuf, status: ExitStatus },
}

/// One archive entry: the name it gets inside the archive and the file
/// supplying its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySpec {
    pub name: PathBuf,
    pub source: PathBuf,
}

impl EntrySpec {
    /// Render as the zipper's `name=source` argument.
    ///
    /// Built as an `OsString` so non-UTF-8 paths survive unmangled.
    fn to_arg(&self) -> OsString {
        let mut arg = OsString::from(self.name.as_os_str());
        arg.push("=");
        arg.push(self.source.as_os_str());
        arg
    }
}

/// Derive entry specs by stripping `root_dir` from each file path.
///
/// Order follows `files`. Fails on the first path that is not strictly
/// under `root_dir`; `root_dir` itself does not count, since its entry
/// name would be empty. Duplicate names are passed through untouched; the
/// zipper's own semantics govern what they produce.
pub fn entry_specs(root_dir: &Path, files: &[PathBuf]) -> Result<Vec<EntrySpec>, ZipError> {
    let mut specs = Vec::with_capacity(files.len());
    for file in files {
        let name = match file.strip_prefix(root_dir) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
            _ => {
                return Err(ZipError::NonDescendant {
                    file: file.clone(),
                    root: root_dir.to_path_buf(),
                })
            }
        };
        specs.push(EntrySpec {
            name,
            source: file.clone(),
        });
    }
    Ok(specs)
}

/// Create a zip at `output` containing `files`, each named by its path
/// relative to `root_dir`, using the zipper executable at `zipper`.
///
/// `root_dir` must be given without a trailing separator. The zipper is
/// invoked once, synchronously; an empty `files` list still invokes it,
/// yielding an empty archive. No retries: any failure is final, and a
/// non-descendant file fails the call before the zipper is spawned.
pub fn create_zip(
    zipper: &Path,
    output: &Path,
    root_dir: &Path,
    files: &[PathBuf],
) -> Result<(), ZipError> {
    create_zip_with(&SystemRunner, zipper, output, root_dir, files)
}

/// [`create_zip`] with an explicit runner, so tests can substitute a mock
/// for the external tool.
pub fn create_zip_with(
    runner: &dyn ToolRunner,
    zipper: &Path,
    output: &Path,
    root_dir: &Path,
    files: &[PathBuf],
) -> Result<(), ZipError> {
    let specs = entry_specs(root_dir, files)?;

    let mut args: Vec<OsString> = Vec::with_capacity(specs.len() + 2);
    args.push(OsString::from("c"));
    args.push(output.as_os_str().to_os_string());
    args.extend(specs.iter().map(EntrySpec::to_arg));

    let status = runner
        .run(zipper, &args)
        .map_err(|source| ZipError::Spawn {
            tool: zipper.to_path_buf(),
            source,
        })?;

    if !status.success() {
        return Err(ZipError::ToolFailure {
            tool: zipper.to_path_buf(),
            status,
        });
    }

    Ok(())
}
