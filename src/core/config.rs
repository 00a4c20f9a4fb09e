//! Project layout and the optional `utk.json` settings file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::paths::{self, RootSource};
use crate::utils::io;

/// Directory layout of a project, rooted at an explicit path.
///
/// Everything that touches `include/`, `src/`, `lib/` or `bin/` receives
/// one of these instead of computing locations from ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    source: RootSource,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_source(root, RootSource::Explicit)
    }

    pub fn with_source(root: impl Into<PathBuf>, source: RootSource) -> Self {
        Self {
            root: root.into(),
            source,
        }
    }

    /// Layout for `--root` / environment / discovered root.
    pub fn resolve(explicit_root: Option<&str>) -> Result<Self> {
        let (root, source) = paths::project_root(explicit_root)?;
        Ok(Self::with_source(root, source))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn source(&self) -> RootSource {
        self.source
    }

    /// Fail unless the root was named or discovered, for operations that
    /// delete things under it.
    pub fn require_confirmed_root(&self, operation: &str) -> Result<()> {
        if self.source.is_confirmed() {
            return Ok(());
        }

        let err = Error::validation_invalid_argument(
            "root",
            format!(
                "Refusing to {}: no project found above {}",
                operation,
                self.root.display()
            ),
            Some(self.root.display().to_string()),
        );
        Err(err.with_hint(format!(
            "Pass --root, set {}, or add {} to the project root",
            paths::ROOT_ENV,
            paths::CONFIG_FILE
        )))
    }

    pub fn include_dir(&self) -> PathBuf {
        self.root.join(paths::INCLUDE_DIR)
    }

    pub fn source_dir(&self) -> PathBuf {
        self.root.join(paths::SOURCE_DIR)
    }

    pub fn lib_dir(&self) -> PathBuf {
        self.root.join(paths::LIB_DIR)
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.root.join(paths::BIN_DIR)
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(paths::CONFIG_FILE)
    }
}

/// Contents of `utk.json`. Every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    #[serde(default = "default_project_name")]
    pub project_name: String,

    #[serde(default)]
    pub author: AuthorConfig,

    #[serde(default = "default_description")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            project_name: default_project_name(),
            author: AuthorConfig::default(),
            description: default_description(),
        }
    }
}

fn default_project_name() -> String {
    "Utility Toolkit".to_string()
}

fn default_description() -> String {
    "Temp description".to_string()
}

/// Load `utk.json` from the project root.
///
/// A missing file yields built-in defaults; an unreadable or malformed file is an error.
pub fn load(layout: &ProjectLayout) -> Result<ProjectConfig> {
    let path = layout.config_file();

    if !path.exists() {
        return Ok(ProjectConfig::default());
    }

    let content = io::read_file(&path, &format!("read {}", path.display()))?;

    serde_json::from_str(&content)
        .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))
}
