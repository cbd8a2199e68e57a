//! Per-repository outcome reporting
//!
//! The pipeline's log-and-continue policy is mirrored in data: every
//! processed repository records whether its backup and rewrite steps
//! completed or were skipped and why, so callers and tests can assert on
//! outcomes without scraping log output.

use std::path::PathBuf;

/// Outcome of one pipeline step for one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Skipped { reason: String },
}

impl StepStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, StepStatus::Completed)
    }
}

/// Outcomes for one scanned repository.
#[derive(Debug)]
pub struct RepoReport {
    /// Repository root path.
    pub path: PathBuf,
    /// Result of the metadata backup step.
    pub backup: StepStatus,
    /// Result of the rewrite generation step.
    pub rewrite: StepStatus,
    /// The generated ConfigBlock, when the repository had remotes and the
    /// rewrite step completed. A repository with zero remotes completes
    /// with no block.
    pub config_block: Option<String>,
}

/// Report for a whole pipeline run, in discovery order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub repos: Vec<RepoReport>,
}

impl RunReport {
    /// Concatenate the generated ConfigBlocks, separated by a blank line.
    ///
    /// Repositories without a block (no remotes, or a skipped rewrite)
    /// contribute nothing.
    pub fn config_output(&self) -> String {
        let blocks: Vec<&str> = self
            .repos
            .iter()
            .filter_map(|r| r.config_block.as_deref())
            .collect();
        blocks.join("\n")
    }
}
