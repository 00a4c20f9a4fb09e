use crate::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Environment override for the project root.
pub const ROOT_ENV: &str = "UTK_PROJECT_ROOT";

/// Optional per-project settings file, also used as a root marker.
pub const CONFIG_FILE: &str = "utk.json";

pub const INCLUDE_DIR: &str = "include";
pub const SOURCE_DIR: &str = "src";
pub const LIB_DIR: &str = "lib";
pub const BIN_DIR: &str = "bin";

/// Expand `~` and environment variables in a user supplied path.
pub fn expand(raw: &str) -> PathBuf {
    match shellexpand::full(raw) {
        Ok(expanded) => PathBuf::from(expanded.into_owned()),
        Err(_) => PathBuf::from(raw),
    }
}

fn is_project_root(dir: &Path) -> bool {
    dir.join(CONFIG_FILE).is_file()
        || (dir.join(INCLUDE_DIR).is_dir() && dir.join(SOURCE_DIR).is_dir())
}

/// Nearest ancestor of `start` (inclusive) that looks like a project root.
pub fn discover_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| is_project_root(dir))
        .map(Path::to_path_buf)
}

/// Where the project root came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSource {
    /// `--root` on the command line, or a layout built directly.
    Explicit,
    /// `UTK_PROJECT_ROOT`.
    Env,
    /// Nearest ancestor carrying `utk.json` or `include/` + `src/`.
    Discovered,
    /// Nothing matched; the working directory is used as is.
    WorkingDir,
}

impl RootSource {
    /// False only for the bare working-directory fallback.
    pub fn is_confirmed(self) -> bool {
        !matches!(self, RootSource::WorkingDir)
    }
}

fn current_dir() -> Result<PathBuf> {
    env::current_dir()
        .map_err(|e| Error::internal_io(e.to_string(), Some("read current directory".to_string())))
}

/// Anchor relative roots at the working directory. A root that does not
/// exist yet is accepted; one that is a file is not.
fn checked_root(root: PathBuf, field: &str) -> Result<PathBuf> {
    let root = if root.is_relative() {
        current_dir()?.join(root)
    } else {
        root
    };

    if root.exists() && !root.is_dir() {
        return Err(Error::validation_invalid_argument(
            field,
            "Project root must be a directory",
            Some(root.display().to_string()),
        ));
    }
    Ok(root)
}

/// Resolve the project root and record how it was found.
///
/// Precedence: explicit `--root`, then `UTK_PROJECT_ROOT`, then the nearest
/// marked ancestor of the working directory, then the working directory.
/// The returned path is always absolute.
pub fn project_root(explicit: Option<&str>) -> Result<(PathBuf, RootSource)> {
    if let Some(raw) = explicit.filter(|r| !r.trim().is_empty()) {
        return Ok((checked_root(expand(raw), "root")?, RootSource::Explicit));
    }

    if let Ok(raw) = env::var(ROOT_ENV) {
        if !raw.trim().is_empty() {
            return Ok((checked_root(expand(&raw), ROOT_ENV)?, RootSource::Env));
        }
    }

    let cwd = current_dir()?;
    Ok(match discover_root(&cwd) {
        Some(root) => (root, RootSource::Discovered),
        None => (cwd, RootSource::WorkingDir),
    })
}
