//! # Error Handling
//!
//! Centralized error type for `clone-cache`, built with `thiserror`. Each
//! variant carries the context needed to report the failure without the
//! caller reconstructing it: the repository path for git invocations, the
//! offending line for parse failures, source and destination for copy
//! failures.
//!
//! The pipeline distinguishes fatal errors (an unreadable base directory
//! aborts the run) from per-repository errors (backup or rewrite failures
//! are logged and recorded, and processing continues), but the distinction
//! lives in the caller, not here.

use thiserror::Error;

/// Main error type for clone-cache operations
#[derive(Error, Debug)]
pub enum Error {
    /// The base directory could not be scanned at all.
    #[error("Scan error for {path}: {message}")]
    Scan { path: String, message: String },

    /// An error occurred while executing a Git command.
    #[error("Git command failed in {path}: {command} - {stderr}")]
    GitCommand {
        command: String,
        path: String,
        stderr: String,
    },

    /// The remote listing produced a line that does not match the
    /// expected `name<TAB>url (direction)` shape.
    #[error("Malformed output when scanning git remote output:\n{line}")]
    MalformedRemoteOutput { line: String },

    /// A metadata backup copy failed.
    #[error("Backup error: {src} -> {dst}: {message}")]
    Backup {
        src: String,
        dst: String,
        message: String,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
