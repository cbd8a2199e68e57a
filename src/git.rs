//! Git command execution

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// List the configured remotes of the repository at `workdir`.
///
/// This runs the system `git remote -v`, which reads the repository's own
/// configuration and so reports whatever remotes the checkout actually
/// carries, including ones added through credential helpers or includes.
///
/// The repository path is passed as the child process working directory;
/// the calling process never changes its own working directory, so
/// callers can run this concurrently in the future without coordinating
/// over shared state.
pub fn list_remotes(workdir: &Path) -> Result<String> {
    let output = Command::new("git")
        .args(["remote", "-v"])
        .current_dir(workdir)
        .output()
        .map_err(|e| Error::GitCommand {
            command: "remote -v".to_string(),
            path: workdir.display().to_string(),
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::GitCommand {
            command: "remote -v".to_string(),
            path: workdir.display().to_string(),
            stderr: stderr.to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
