//! Build artifact cleanup.
//!
//! Removes the `bin/` and `lib/` output directories under the project root.
//! `include/` and `src/` are never touched.

use serde::Serialize;
use std::fs;

use crate::config::ProjectLayout;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactStatus {
    Deleted,
    WouldDelete,
    Missing,
    /// Path exists but is not a directory; left alone.
    Skipped,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtifactResult {
    pub name: String,
    pub path: String,
    pub status: ArtifactStatus,
}

/// Summary counts for the cleanup report.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CleanupSummary {
    pub removed: usize,
    pub missing: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CleanupResult {
    pub dry_run: bool,
    pub summary: CleanupSummary,
    pub artifacts: Vec<ArtifactResult>,
}

/// Delete the build output directories.
///
/// Refuses to run when the root is only the working-directory fallback.
pub fn clean_build_artifacts(layout: &ProjectLayout, dry_run: bool) -> Result<CleanupResult> {
    layout.require_confirmed_root("clean build artifacts")?;

    let mut summary = CleanupSummary::default();
    let mut artifacts = Vec::new();

    for (name, path) in [("bin", layout.bin_dir()), ("lib", layout.lib_dir())] {
        let status = if path.is_dir() {
            if !dry_run {
                fs::remove_dir_all(&path).map_err(|e| {
                    Error::internal_io(e.to_string(), Some(format!("remove {}", path.display())))
                })?;
                crate::log_status!("clean", "Deleted: {}", path.display());
            }
            summary.removed += 1;
            if dry_run {
                ArtifactStatus::WouldDelete
            } else {
                ArtifactStatus::Deleted
            }
        } else if path.exists() {
            ArtifactStatus::Skipped
        } else {
            crate::log_status!("clean", "{} does not exist", path.display());
            summary.missing += 1;
            ArtifactStatus::Missing
        };

        artifacts.push(ArtifactResult {
            name: name.to_string(),
            path: path.display().to_string(),
            status,
        });
    }

    Ok(CleanupResult {
        dry_run,
        summary,
        artifacts,
    })
}
