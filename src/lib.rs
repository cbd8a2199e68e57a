//! # clone-cache Library
//!
//! Core functionality for the `clone-cache` command-line tool: scan a
//! directory tree for git checkouts, copy each repository's metadata
//! directory into a central cache, and generate git-config URL rewrites
//! that point future clones at the cached copies instead of the network.
//!
//! ## Quick Example
//!
//! ```no_run
//! use std::path::Path;
//! use clone_cache::{classify, pipeline};
//!
//! let report = pipeline::run(
//!     Path::new("/home/dev/src"),
//!     Path::new("/var/cache/clones"),
//!     classify::DEFAULT_MARKER,
//! ).unwrap();
//!
//! // git-config fragments, one block per repository with remotes
//! print!("{}", report.config_output());
//! ```
//!
//! ## Execution Flow
//!
//! The [`pipeline`] module drives the stages in order:
//!
//! 1. **Scan** (`scan`, `classify`): walk the base directory and collect
//!    every directory holding a metadata marker subdirectory.
//! 2. **Backup** (`backup`): copy each repository's metadata directory to
//!    `<cache>/<basename>/<marker>`, overwriting previous contents.
//! 3. **Rewrite** (`rewrite`, `git`): list each repository's remotes,
//!    deduplicate the URLs, and render an `insteadOf` config block
//!    referencing the cache entry.
//!
//! Backup and rewrite failures are per-repository: they are logged and
//! recorded in the [`report::RunReport`], and the run continues. Only a
//! failure to scan the base directory aborts the whole run.
//!
//! Note that cache entries are keyed by repository basename alone, so two
//! checkouts named `proj` under different parents share one cache entry;
//! see [`backup::backup`].

pub mod backup;
pub mod classify;
pub mod error;
pub mod git;
pub mod pipeline;
pub mod report;
pub mod rewrite;
pub mod scan;
