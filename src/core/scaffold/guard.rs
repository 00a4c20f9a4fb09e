use crate::error::{Error, Result};

use super::resolve::ScaffoldPaths;

/// Reject the request when either target directory already exists.
///
/// Header and source trees are checked independently, so a tool that exists
/// in only one of them is still rejected. Read-only.
pub fn check(paths: &ScaffoldPaths, tool: &str, parent: Option<&str>) -> Result<()> {
    let existing: Vec<String> = [&paths.header_dir, &paths.source_dir]
        .into_iter()
        .filter(|dir| dir.exists())
        .map(|dir| dir.display().to_string())
        .collect();

    if existing.is_empty() {
        return Ok(());
    }

    Err(Error::scaffold_tool_exists(
        tool,
        parent.map(str::to_string),
        existing,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectLayout;
    use crate::scaffold::resolve::resolve;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn passes_when_nothing_exists() {
        let dir = TempDir::new().unwrap();
        let paths = resolve(&ProjectLayout::new(dir.path()), "parser", None);
        assert!(check(&paths, "parser", None).is_ok());
    }

    #[test]
    fn rejects_existing_source_dir_alone() {
        let dir = TempDir::new().unwrap();
        let paths = resolve(&ProjectLayout::new(dir.path()), "parser", None);
        fs::create_dir_all(&paths.source_dir).unwrap();

        let err = check(&paths, "parser", None).unwrap_err();
        assert_eq!(err.code.as_str(), "scaffold.tool_exists");
        assert_eq!(err.details["existingPaths"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn rejects_existing_subtool_header_dir() {
        let dir = TempDir::new().unwrap();
        let paths = resolve(&ProjectLayout::new(dir.path()), "lexer", Some("parser"));
        fs::create_dir_all(&paths.header_dir).unwrap();

        let err = check(&paths, "lexer", Some("parser")).unwrap_err();
        assert_eq!(err.details["tool"], "lexer");
        assert_eq!(err.details["parent"], "parser");
    }

    #[test]
    fn existing_parent_does_not_block_new_subtool() {
        let dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(dir.path());
        fs::create_dir_all(layout.include_dir().join("parser")).unwrap();
        fs::create_dir_all(layout.source_dir().join("utkparser")).unwrap();

        let paths = resolve(&layout, "lexer", Some("parser"));
        assert!(check(&paths, "lexer", Some("parser")).is_ok());
    }
}
