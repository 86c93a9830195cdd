//! Create a zip archive from a set of files, stripping a common directory
//! prefix from the name of each archive entry.
//!
//! The actual archiving is delegated to an external zipper executable
//! (anything speaking the `zipper c <output> <name=source>...` interface):
//! this crate only rewrites paths into entry specs and invokes the tool
//! once, synchronously.
//!
//! - [`zip`] - Entry-spec derivation and archive creation
//! - [`process`] - Spawn-and-wait abstraction over the external tool
//!
//! # Example
//!
//! ```rust,ignore
//! use dir_zipper::create_zip;
//! use std::path::{Path, PathBuf};
//!
//! create_zip(
//!     Path::new("tools/zipper"),
//!     Path::new("/tmp/docs.zip"),
//!     Path::new("/tmp/rustdoc"),
//!     &[
//!         PathBuf::from("/tmp/rustdoc/index.html"),
//!         PathBuf::from("/tmp/rustdoc/mylib/index.html"),
//!     ],
//! )?;
//! ```

pub mod process;
pub mod zip;

pub use process::{SystemRunner, ToolRunner};
pub use zip::{create_zip, create_zip_with, entry_specs, EntrySpec, ZipError};
