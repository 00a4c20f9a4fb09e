//! Inventory of tools: compiled modules under `lib/` and scaffolded
//! tools under `include/` and `src/`.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ProjectLayout;
use crate::error::{Error, Result};
use crate::scaffold::{namespace, resolve};

/// Build output directories, in lookup order.
pub const BUILD_TYPES: [&str; 2] = ["Debug", "Release"];

/// Extension of a compiled tool library.
pub const MODULE_EXT: &str = "lib";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuiltModules {
    pub build_type: Option<String>,
    pub modules: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolEntry {
    pub name: String,
    pub namespace: String,
    pub header_dir: PathBuf,
    pub source_dir: PathBuf,
    pub has_source: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subtools: Vec<ToolEntry>,
}

fn read_dir_err(path: &Path, e: std::io::Error) -> Error {
    Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
}

/// Names of entries under `dir` matching `keep`, sorted.
fn entry_names(dir: &Path, keep: impl Fn(&Path) -> bool) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(dir).map_err(|e| read_dir_err(dir, e))? {
        let path = entry.map_err(|e| read_dir_err(dir, e))?.path();
        if !keep(&path) {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            names.push(name.to_string());
        }
    }

    names.sort();
    Ok(names)
}

/// Compiled modules from the first existing build type directory.
///
/// `Debug` is checked before `Release`; only the first existing one is read.
pub fn built_modules(layout: &ProjectLayout) -> Result<BuiltModules> {
    for build_type in BUILD_TYPES {
        let dir = layout.lib_dir().join(build_type);
        if !dir.is_dir() {
            continue;
        }

        let modules = entry_names(&dir, |path| {
            path.is_file() && path.extension().is_some_and(|ext| ext == MODULE_EXT)
        })?
        .into_iter()
        .map(|name| {
            name.strip_suffix(&format!(".{}", MODULE_EXT))
                .unwrap_or(&name)
                .to_string()
        })
        .collect();

        return Ok(BuiltModules {
            build_type: Some(build_type.to_string()),
            modules,
        });
    }

    Ok(BuiltModules::default())
}

/// Tools scaffolded in the project: each directory under `include/` is a
/// tool and each of its subdirectories a subtool.
pub fn scaffolded_tools(layout: &ProjectLayout) -> Result<Vec<ToolEntry>> {
    let include_dir = layout.include_dir();
    if !include_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut tools = Vec::new();
    for name in entry_names(&include_dir, Path::is_dir)? {
        let paths = resolve::resolve(layout, &name, None);

        let mut subtools = Vec::new();
        for sub in entry_names(&paths.header_dir, Path::is_dir)? {
            let sub_paths = resolve::resolve(layout, &sub, Some(&name));
            subtools.push(ToolEntry {
                namespace: namespace::build(&sub, Some(&name)),
                has_source: sub_paths.source_dir.is_dir(),
                header_dir: sub_paths.header_dir,
                source_dir: sub_paths.source_dir,
                name: sub,
                subtools: Vec::new(),
            });
        }

        tools.push(ToolEntry {
            namespace: namespace::build(&name, None),
            has_source: paths.source_dir.is_dir(),
            header_dir: paths.header_dir,
            source_dir: paths.source_dir,
            name,
            subtools,
        });
    }

    Ok(tools)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: PathBuf) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn no_lib_dir_means_no_modules() {
        let dir = TempDir::new().unwrap();
        let built = built_modules(&ProjectLayout::new(dir.path())).unwrap();
        assert_eq!(built, BuiltModules::default());
    }

    #[test]
    fn debug_is_preferred_over_release() {
        let dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(dir.path());
        touch(layout.lib_dir().join("Debug").join("utklogger.lib"));
        touch(layout.lib_dir().join("Release").join("utkparser.lib"));

        let built = built_modules(&layout).unwrap();

        assert_eq!(built.build_type.as_deref(), Some("Debug"));
        assert_eq!(built.modules, vec!["utklogger".to_string()]);
    }

    #[test]
    fn only_lib_files_are_listed() {
        let dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(dir.path());
        let release = layout.lib_dir().join("Release");
        touch(release.join("utktypes.lib"));
        touch(release.join("utkcore.lib"));
        touch(release.join("utkcore.pdb"));
        fs::create_dir_all(release.join("nested.lib")).unwrap();

        let built = built_modules(&layout).unwrap();

        assert_eq!(built.build_type.as_deref(), Some("Release"));
        assert_eq!(built.modules, vec!["utkcore", "utktypes"]);
    }

    #[test]
    fn scaffolded_tools_pairs_headers_with_sources() {
        let dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(dir.path());
        fs::create_dir_all(layout.include_dir().join("parser").join("lexer")).unwrap();
        fs::create_dir_all(layout.include_dir().join("logger")).unwrap();
        fs::create_dir_all(layout.source_dir().join("utkparser")).unwrap();
        fs::create_dir_all(layout.source_dir().join("parser").join("utklexer")).unwrap();

        let tools = scaffolded_tools(&layout).unwrap();

        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].name, "logger");
        assert!(!tools[0].has_source);
        assert_eq!(tools[1].namespace, "UTK::Parser");
        assert!(tools[1].has_source);
        assert_eq!(tools[1].subtools[0].namespace, "UTK::Parser::Lexer");
        assert!(tools[1].subtools[0].has_source);
    }

    #[test]
    fn header_files_are_not_subtools() {
        let dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(dir.path());
        touch(layout.include_dir().join("parser").join("parser.hpp"));

        let tools = scaffolded_tools(&layout).unwrap();
        assert!(tools[0].subtools.is_empty());
    }
}
