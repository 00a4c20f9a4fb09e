//! Project information report: local build state, git, runtime and platform.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::env;
use std::path::Path;

use crate::config::{ProjectConfig, ProjectLayout};
use crate::git::{self, GitInfo};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %I:%M";

#[derive(Debug, Clone, Serialize)]
pub struct ProjectInfo {
    pub local: LocalInfo,
    pub git: GitInfo,
    pub runtime: RuntimeInfo,
    pub platform: PlatformInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocalInfo {
    pub project_name: String,
    pub root: String,
    pub last_release: String,
    pub last_debug: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RuntimeInfo {
    pub version: String,
    /// Target OS family the binary was built for (`unix`, `windows`).
    pub family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executable_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlatformInfo {
    pub os: String,
    pub arch: String,
    pub family: String,
    pub shell: String,
}

pub fn report(layout: &ProjectLayout, config: &ProjectConfig) -> ProjectInfo {
    ProjectInfo {
        local: local_info(layout, config),
        git: git::info(layout.root()),
        runtime: runtime_info(),
        platform: platform_info(),
    }
}

fn local_info(layout: &ProjectLayout, config: &ProjectConfig) -> LocalInfo {
    LocalInfo {
        project_name: config.project_name.clone(),
        root: layout.root().display().to_string(),
        last_release: last_build_timestamp(layout, "Release"),
        last_debug: last_build_timestamp(layout, "Debug"),
    }
}

/// Modification time of `lib/<build_type>`, or a note when it is absent.
pub fn last_build_timestamp(layout: &ProjectLayout, build_type: &str) -> String {
    let marker = layout.lib_dir().join(build_type);

    match modified(&marker) {
        Some(time) => time.format(TIMESTAMP_FORMAT).to_string(),
        None => format!("Lib directory 'lib/{}' not present", build_type),
    }
}

fn modified(path: &Path) -> Option<DateTime<Local>> {
    let time = path.metadata().ok()?.modified().ok()?;
    Some(DateTime::<Local>::from(time))
}

fn runtime_info() -> RuntimeInfo {
    let executable_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.display().to_string()));

    RuntimeInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        family: env::consts::FAMILY.to_string(),
        executable_dir,
    }
}

fn platform_info() -> PlatformInfo {
    let shell_var = if cfg!(windows) { "COMSPEC" } else { "SHELL" };

    PlatformInfo {
        os: env::consts::OS.to_string(),
        arch: env::consts::ARCH.to_string(),
        family: env::consts::FAMILY.to_string(),
        shell: env::var(shell_var).unwrap_or_else(|_| git::UNKNOWN.to_string()),
    }
}
