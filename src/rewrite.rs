//! URL rewrite generation from configured remotes
//!
//! For every repository with at least one remote, emit a git-config
//! fragment of the form
//!
//! ```text
//! [url "/cache/proj/"]
//!     insteadOf = git@host:org/proj.git
//! ```
//!
//! so that clones of the remote URL are redirected to the cached copy.
//! Parsing of the `git remote -v` output and formatting of the block are
//! pure functions; only [`generate_rewrite`] touches the git binary.

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{Error, Result};
use crate::git;
use crate::scan::RepoLocation;

/// Extract the distinct remote URLs from `git remote -v` output.
///
/// Each line is expected to look like `name<TAB>url (direction)`: exactly
/// one space separating the `name<TAB>url` pair from the direction. A line
/// that does not split into exactly two space-separated fields, or whose
/// first field carries no tab, fails the whole parse; URLs collected from
/// earlier lines are discarded with it.
///
/// A fetch/push pair for one remote yields the same URL twice; the set
/// collapses them.
pub fn parse_remote_urls(output: &str) -> Result<BTreeSet<String>> {
    let mut urls = BTreeSet::new();
    for line in output.lines() {
        let fields: Vec<&str> = line.split(' ').collect();
        if fields.len() != 2 {
            return Err(Error::MalformedRemoteOutput {
                line: line.to_string(),
            });
        }
        let url = fields[0].split('\t').nth(1).ok_or_else(|| {
            Error::MalformedRemoteOutput {
                line: line.to_string(),
            }
        })?;
        urls.insert(url.to_string());
    }
    Ok(urls)
}

/// Render one `[url "…"] insteadOf` block for a cached repository.
///
/// `cache_path` is the repository's cache entry; the trailing slash in the
/// section name makes git substitute it as a path prefix.
pub fn format_config_block(cache_path: &Path, urls: &BTreeSet<String>) -> String {
    let mut block = format!("[url \"{}/\"]\n", cache_path.display());
    for url in urls {
        block.push_str(&format!("\tinsteadOf = {}\n", url));
    }
    block
}

/// Produce the rewrite ConfigBlock for one repository.
///
/// Returns an empty string (and no error) for a repository with zero
/// configured remotes; callers treat that as "skip, do not emit". The
/// cache path in the block is absolute, so the emitted fragment is valid
/// from any working directory.
pub fn generate_rewrite(location: &RepoLocation, cache_dir: &Path) -> Result<String> {
    let output = git::list_remotes(&location.path)?;
    let urls = parse_remote_urls(&output)?;
    if urls.is_empty() {
        return Ok(String::new());
    }

    let cache_path = std::path::absolute(cache_dir.join(location.name()))?;
    Ok(format_config_block(&cache_path, &urls))
}
