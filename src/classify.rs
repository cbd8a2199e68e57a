//! Repository root classification
//!
//! A directory is a repository root when one of its immediate
//! subdirectories carries the metadata marker (`.git` for git) in its
//! name. Classification of a name listing is a pure function so it can be
//! tested without touching a filesystem; the I/O wrapper only gathers the
//! subdirectory names.

use std::fs;
use std::path::Path;

/// Default metadata marker for git repositories.
pub const DEFAULT_MARKER: &str = ".git";

/// Decide whether a listing of subdirectory names marks a repository root.
///
/// Matches on substring, not equality, so bare-style directories such as
/// `repo.git` also count.
pub fn names_mark_repository<S: AsRef<str>>(subdir_names: &[S], marker: &str) -> bool {
    subdir_names
        .iter()
        .any(|name| name.as_ref().contains(marker))
}

/// Check whether `path` is a repository root.
///
/// Looks one level deep only: it does not walk upwards, and a repository
/// nested below `path` does not make `path` itself a root. Unreadable or
/// nonexistent directories are not roots rather than errors, so a scan can
/// skip them silently.
pub fn is_repository_root(path: &Path, marker: &str) -> bool {
    let Ok(entries) = fs::read_dir(path) else {
        return false;
    };

    let mut subdirs = Vec::new();
    for entry in entries.flatten() {
        // Use the dirent file type; fall back to a metadata call when the
        // filesystem does not provide it.
        let is_dir = entry
            .file_type()
            .map(|ft| ft.is_dir())
            .or_else(|_| entry.metadata().map(|m| m.is_dir()))
            .unwrap_or(false);
        if is_dir {
            subdirs.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    names_mark_repository(&subdirs, marker)
}
