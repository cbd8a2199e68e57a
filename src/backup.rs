//! Metadata backup into the cache directory

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::scan::RepoLocation;

/// Copy the repository's metadata directory into the cache.
///
/// The destination is `cache_dir/<basename>/<marker>`, mirroring the full
/// contents of `<repo>/<marker>`. Existing destination files are
/// overwritten, last write wins; nothing is merged and stale files from a
/// previous backup of a differently-shaped tree are left in place.
///
/// The cache is keyed by the repository's directory basename only. Two
/// repositories named `proj` under different parents share the entry
/// `cache_dir/proj` and the later backup overwrites the earlier one.
pub fn backup(location: &RepoLocation, cache_dir: &Path, marker: &str) -> Result<()> {
    let src = location.path.join(marker);
    let dst = cache_dir.join(location.name()).join(marker);

    copy_directory(&src, &dst).map_err(|e| Error::Backup {
        src: src.display().to_string(),
        dst: dst.display().to_string(),
        message: e.to_string(),
    })
}

/// Recursively copy `src` into `dst`, creating intermediate directories.
fn copy_directory(src: &Path, dst: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copy_directory(&entry.path(), &target)?;
        } else {
            // fs::copy truncates an existing target, carrying permissions
            // from the source.
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
