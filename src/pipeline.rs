//! Pipeline driver: scan, back up, generate rewrites
//!
//! Runs the stages strictly in sequence for each repository in discovery
//! order. A scan failure aborts the run; a backup or rewrite failure is
//! logged, recorded in the report, and processing moves on to the next
//! repository. There are no retries.

use std::path::Path;

use crate::backup;
use crate::error::Result;
use crate::report::{RepoReport, RunReport, StepStatus};
use crate::rewrite;
use crate::scan;

/// Execute the full pipeline over `base`, caching into `cache_dir`.
pub fn run(base: &Path, cache_dir: &Path, marker: &str) -> Result<RunReport> {
    let locations = scan::scan(base, marker)?;
    log::info!(
        "Found {} repositories under {}",
        locations.len(),
        base.display()
    );

    let mut report = RunReport::default();
    for location in &locations {
        let backup_status = match backup::backup(location, cache_dir, marker) {
            Ok(()) => StepStatus::Completed,
            Err(e) => {
                log::warn!("{}", e);
                StepStatus::Skipped {
                    reason: e.to_string(),
                }
            }
        };

        let (rewrite_status, config_block) = match rewrite::generate_rewrite(location, cache_dir) {
            Ok(block) if block.is_empty() => (StepStatus::Completed, None),
            Ok(block) => (StepStatus::Completed, Some(block)),
            Err(e) => {
                log::warn!("{}", e);
                (
                    StepStatus::Skipped {
                        reason: e.to_string(),
                    },
                    None,
                )
            }
        };

        report.repos.push(RepoReport {
            path: location.path.clone(),
            backup: backup_status,
            rewrite: rewrite_status,
            config_block,
        });
    }

    Ok(report)
}
