use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use dir_zipper::create_zip;

/// Create a zip archive from some files, stripping a common directory
/// prefix from the name of each archive entry.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the zipper executable
    #[arg(long, value_name = "PATH")]
    zipper: PathBuf,

    /// Write a zip file to this path
    #[arg(long, value_name = "PATH")]
    output: PathBuf,

    /// Strip this directory from each entry, given with no trailing slash
    #[arg(long, value_name = "DIR")]
    root_dir: PathBuf,

    /// Add these files to the archive
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    create_zip(&args.zipper, &args.output, &args.root_dir, &args.files)
        .with_context(|| format!("creating '{}'", args.output.display()))?;

    Ok(())
}
