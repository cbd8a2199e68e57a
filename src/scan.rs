//! Recursive discovery of repository roots under a base directory

use std::fs::Metadata;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::classify;
use crate::error::{Error, Result};

/// One discovered repository root, with the filesystem metadata captured
/// at scan time.
#[derive(Debug)]
pub struct RepoLocation {
    /// Path of the repository root (the directory containing the marker).
    pub path: PathBuf,
    /// Metadata of the root directory itself.
    pub metadata: Metadata,
}

impl RepoLocation {
    /// Directory basename of the repository root.
    ///
    /// This is the key under which the repository is cached, so two
    /// repositories sharing a basename map to the same cache entry.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

/// Walk `base` recursively and collect every repository root, in
/// discovery order.
///
/// The base directory being missing or unreadable is an error; any error
/// on an individual node during the walk (permission denied on a subtree,
/// a directory removed mid-walk) is swallowed and the walk continues. The
/// walk also descends into matched repositories' own metadata trees; those
/// inner directories never classify as roots themselves, so this costs
/// time but not correctness.
pub fn scan(base: &Path, marker: &str) -> Result<Vec<RepoLocation>> {
    // Surface the top-level failure before walking, so a missing base
    // directory aborts the run instead of producing an empty result.
    base.metadata().map_err(|e| Error::Scan {
        path: base.display().to_string(),
        message: e.to_string(),
    })?;

    let mut locations = Vec::new();
    for entry in WalkDir::new(base).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_dir() {
            continue;
        }
        if classify::is_repository_root(entry.path(), marker) {
            match entry.metadata() {
                Ok(metadata) => locations.push(RepoLocation {
                    path: entry.path().to_path_buf(),
                    metadata,
                }),
                Err(e) => {
                    log::warn!(
                        "Skipping repository at {}: metadata unavailable: {}",
                        entry.path().display(),
                        e
                    );
                }
            }
        }
    }
    Ok(locations)
}
