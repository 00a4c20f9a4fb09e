use std::path::{Path, PathBuf};

use crate::error::{Error, Result, ScaffoldWriteFailedDetails};
use crate::utils::io;

use super::resolve::ScaffoldPaths;

/// Create the scaffold directories and write both stubs.
///
/// Steps run in order: directories, header, source. File writes are atomic,
/// so a failed write never leaves a truncated stub behind. Directories
/// created before a failure are kept and reported in the error details.
///
/// Returns the directories this call created, outermost first.
pub fn write(paths: &ScaffoldPaths, header: &str, source: &str) -> Result<Vec<PathBuf>> {
    let mut created: Vec<PathBuf> = Vec::new();

    for dir in [&paths.header_dir, &paths.source_dir] {
        io::create_dir_tracked(dir, &mut created)
            .map_err(|e| failure("create directory", dir, e, &created))?;
    }

    crate::log_status!("create", "Writing {}", paths.header_file.display());
    io::write_atomic(&paths.header_file, header)
        .map_err(|e| failure("write header file", &paths.header_file, e, &created))?;

    crate::log_status!("create", "Writing {}", paths.source_file.display());
    io::write_atomic(&paths.source_file, source)
        .map_err(|e| failure("write source file", &paths.source_file, e, &created))?;

    Ok(created)
}

fn failure(step: &str, path: &Path, err: std::io::Error, created: &[PathBuf]) -> Error {
    Error::scaffold_write_failed(ScaffoldWriteFailedDetails {
        step: step.to_string(),
        path: path.display().to_string(),
        error: err.to_string(),
        created_dirs: created.iter().map(|d| d.display().to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectLayout;
    use crate::scaffold::resolve::resolve;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn writes_both_files_and_reports_created_dirs() {
        let dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(dir.path());
        let paths = resolve(&layout, "parser", None);

        let created = write(&paths, "header", "source").unwrap();

        assert_eq!(fs::read_to_string(&paths.header_file).unwrap(), "header");
        assert_eq!(fs::read_to_string(&paths.source_file).unwrap(), "source");
        assert!(created.contains(&layout.include_dir()));
        assert!(created.contains(&paths.source_dir));
    }

    #[test]
    fn failed_source_write_names_step_and_keeps_dirs() {
        let dir = TempDir::new().unwrap();
        let paths = resolve(&ProjectLayout::new(dir.path()), "parser", None);
        // A directory squatting on the source file path makes the rename fail.
        fs::create_dir_all(paths.source_file.join("occupied")).unwrap();

        let err = write(&paths, "header", "source").unwrap_err();

        assert_eq!(err.code.as_str(), "scaffold.write_failed");
        assert_eq!(err.details["step"], "write source file");
        assert!(paths.header_file.is_file());
        assert!(paths.header_dir.is_dir());
    }

    #[test]
    fn failed_directory_creation_is_reported() {
        let dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(dir.path());
        // `include` as a regular file blocks directory creation.
        fs::write(layout.include_dir(), "").unwrap();
        let paths = resolve(&layout, "parser", None);

        let err = write(&paths, "header", "source").unwrap_err();

        assert_eq!(err.details["step"], "create directory");
        assert!(err.details["createdDirs"].as_array().unwrap().is_empty());
        assert!(!paths.source_dir.exists());
    }

    #[test]
    fn overlong_name_reports_directories_created_before_failure() {
        let dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(dir.path());
        let paths = resolve(&layout, &"a".repeat(300), None);

        let err = write(&paths, "header", "source").unwrap_err();

        assert_eq!(err.details["step"], "create directory");
        let created = err.details["createdDirs"].as_array().unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0], layout.include_dir().display().to_string());
        assert!(layout.include_dir().is_dir());
    }
}
