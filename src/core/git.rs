//! Read-only git queries for the project report.

use serde::Serialize;
use std::path::Path;

use crate::utils::command;

pub const UNKNOWN: &str = "Unknown";

const UNINITIALIZED: &str =
    "Local copy uninitialized. Make sure to create one via 'git clone'!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitInfo {
    pub branch: String,
    pub last_hash: Option<String>,
    pub last_commit: Option<String>,
    /// Uncommitted changes present.
    pub changes: bool,
    pub tag: Option<String>,
    pub remote_url: Option<String>,
}

impl GitInfo {
    fn uninitialized() -> Self {
        Self {
            branch: UNINITIALIZED.to_string(),
            last_hash: None,
            last_commit: None,
            changes: false,
            tag: None,
            remote_url: None,
        }
    }
}

pub fn is_repo(root: &Path) -> bool {
    root.join(".git").exists()
}

fn query(root: &Path, args: &[&str], context: &str) -> String {
    command::run_in(root, "git", args, context).unwrap_or_else(|_| UNKNOWN.to_string())
}

/// Collect branch, head, status, tag and remote for the repository at `root`.
///
/// Individual queries that fail report `Unknown` rather than failing the whole report.
pub fn info(root: &Path) -> GitInfo {
    if !is_repo(root) {
        return GitInfo::uninitialized();
    }

    let changes = command::run_in(root, "git", &["status", "--porcelain"], "git status")
        .map(|out| !out.is_empty())
        .unwrap_or(false);

    GitInfo {
        branch: query(root, &["rev-parse", "--abbrev-ref", "HEAD"], "git branch"),
        last_hash: Some(query(root, &["rev-parse", "--short", "HEAD"], "git hash")),
        last_commit: Some(query(root, &["log", "-1", "--pretty=%s"], "git log")),
        changes,
        tag: Some(query(root, &["describe", "--tags", "--abbrev=0"], "git describe")),
        remote_url: Some(query(
            root,
            &["config", "--get", "remote.origin.url"],
            "git remote",
        )),
    }
}
