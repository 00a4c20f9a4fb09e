use serde::Serialize;
use std::path::PathBuf;

use crate::config::ProjectLayout;

/// Prefix carried by source directories only. Header directories never have it.
pub const SOURCE_DIR_PREFIX: &str = "utk";

pub const HEADER_EXT: &str = "hpp";
pub const SOURCE_EXT: &str = "cpp";

/// Where a tool's header and source stubs live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldPaths {
    pub header_dir: PathBuf,
    pub source_dir: PathBuf,
    pub header_file: PathBuf,
    pub source_file: PathBuf,
}

/// Compute scaffold locations. Never touches the filesystem.
///
/// - top-level: `include/<tool>/`, `src/utk<tool>/`
/// - subtool: `include/<parent>/<tool>/`, `src/<parent>/utk<tool>/`
pub fn resolve(layout: &ProjectLayout, tool: &str, parent: Option<&str>) -> ScaffoldPaths {
    let source_leaf = format!("{}{}", SOURCE_DIR_PREFIX, tool);

    let (header_dir, source_dir) = match parent {
        Some(parent) => (
            layout.include_dir().join(parent).join(tool),
            layout.source_dir().join(parent).join(source_leaf),
        ),
        None => (
            layout.include_dir().join(tool),
            layout.source_dir().join(source_leaf),
        ),
    };

    ScaffoldPaths {
        header_file: header_dir.join(format!("{}.{}", tool, HEADER_EXT)),
        source_file: source_dir.join(format!("{}.{}", tool, SOURCE_EXT)),
        header_dir,
        source_dir,
    }
}

/// `#include` path of the header relative to `include/`.
pub fn header_include(tool: &str, parent: Option<&str>) -> String {
    match parent {
        Some(parent) => format!("{}/{}/{}.{}", parent, tool, tool, HEADER_EXT),
        None => format!("{}/{}.{}", tool, tool, HEADER_EXT),
    }
}
