use std::fs;
use std::path::Path;

use tempfile::TempDir;
use utk::scaffold::{self, ScaffoldOptions, ToolRequest};
use utk::{ProjectConfig, ProjectLayout};

fn project() -> (TempDir, ProjectLayout) {
    let dir = TempDir::new().unwrap();
    let layout = ProjectLayout::new(dir.path());
    fs::create_dir_all(layout.include_dir()).unwrap();
    fs::create_dir_all(layout.source_dir()).unwrap();
    (dir, layout)
}

fn request(tool: &str, parent: Option<&str>) -> ToolRequest {
    ToolRequest {
        tool_name: tool.to_string(),
        parent_tool: parent.map(str::to_string),
        author_first: Some("Jac".to_string()),
        author_last: Some("Jenkins".to_string()),
        description: None,
    }
}

fn create(layout: &ProjectLayout, req: &ToolRequest) -> utk::Result<scaffold::ScaffoldOutcome> {
    scaffold::create(
        layout,
        &ProjectConfig::default(),
        req,
        ScaffoldOptions::default(),
    )
}

/// Every path under `root`, sorted.
fn snapshot(root: &Path) -> Vec<String> {
    fn walk(dir: &Path, out: &mut Vec<String>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            out.push(path.display().to_string());
            if path.is_dir() {
                walk(&path, out);
            }
        }
    }

    let mut out = Vec::new();
    walk(root, &mut out);
    out.sort();
    out
}

#[test]
fn creates_top_level_tool() {
    let (dir, layout) = project();

    let outcome = create(&layout, &request("parser", None)).unwrap();

    let header = dir.path().join("include/parser/parser.hpp");
    let source = dir.path().join("src/utkparser/parser.cpp");
    assert!(outcome.written);
    assert!(header.is_file());
    assert!(source.is_file());

    let header_text = fs::read_to_string(&header).unwrap();
    assert!(header_text.contains("UTK::Parser"));
    assert!(header_text.contains("// @author  Jac Jenkins"));
    assert!(!fs::read_to_string(&source).unwrap().is_empty());
}

#[test]
fn creates_subtool_under_existing_tool() {
    let (dir, layout) = project();
    create(&layout, &request("parser", None)).unwrap();

    create(&layout, &request("lexer", Some("parser"))).unwrap();

    let header = dir.path().join("include/parser/lexer/lexer.hpp");
    let source = dir.path().join("src/parser/utklexer/lexer.cpp");
    assert!(header.is_file());
    assert!(source.is_file());
    assert!(fs::read_to_string(&header)
        .unwrap()
        .contains("namespace UTK::Parser::Lexer {"));
    assert!(fs::read_to_string(&source)
        .unwrap()
        .contains("#include \"parser/lexer/lexer.hpp\""));
}

#[test]
fn existing_header_dir_rejects_without_writes() {
    let (dir, layout) = project();
    fs::create_dir_all(layout.include_dir().join("parser")).unwrap();
    let before = snapshot(dir.path());

    let err = create(&layout, &request("parser", None)).unwrap_err();

    assert_eq!(err.code.as_str(), "scaffold.tool_exists");
    assert_eq!(snapshot(dir.path()), before);
}

#[test]
fn second_identical_request_is_rejected_and_files_survive() {
    let (dir, layout) = project();
    create(&layout, &request("parser", None)).unwrap();

    let header = dir.path().join("include/parser/parser.hpp");
    let source = dir.path().join("src/utkparser/parser.cpp");
    let header_before = fs::read_to_string(&header).unwrap();
    let source_before = fs::read_to_string(&source).unwrap();

    let mut again = request("parser", None);
    again.author_first = Some("Someone".to_string());
    let err = create(&layout, &again).unwrap_err();

    assert_eq!(err.code.as_str(), "scaffold.tool_exists");
    assert_eq!(fs::read_to_string(&header).unwrap(), header_before);
    assert_eq!(fs::read_to_string(&source).unwrap(), source_before);
}

#[test]
fn mixed_case_input_maps_to_the_same_tool() {
    let (_dir, layout) = project();
    create(&layout, &request("Parser", None)).unwrap();

    let err = create(&layout, &request("PARSER-1", None)).unwrap_err();
    assert_eq!(err.code.as_str(), "scaffold.tool_exists");
}

#[test]
fn invalid_names_fail_before_touching_disk() {
    let (dir, layout) = project();
    let before = snapshot(dir.path());

    for raw in ["123", "", "!!"] {
        let err = create(&layout, &request(raw, None)).unwrap_err();
        assert_eq!(err.code.as_str(), "scaffold.invalid_name");
    }

    assert_eq!(snapshot(dir.path()), before);
}

#[test]
fn dry_run_renders_but_writes_nothing() {
    let (dir, layout) = project();
    let before = snapshot(dir.path());

    let outcome = scaffold::create(
        &layout,
        &ProjectConfig::default(),
        &request("parser", None),
        ScaffoldOptions { dry_run: true },
    )
    .unwrap();

    assert!(!outcome.written);
    assert!(outcome.plan.header.contains("UTK::Parser"));
    assert_eq!(snapshot(dir.path()), before);
}

#[test]
fn dry_run_still_reports_collisions() {
    let (_dir, layout) = project();
    fs::create_dir_all(layout.source_dir().join("utkparser")).unwrap();

    let err = scaffold::create(
        &layout,
        &ProjectConfig::default(),
        &request("parser", None),
        ScaffoldOptions { dry_run: true },
    )
    .unwrap_err();

    assert_eq!(err.code.as_str(), "scaffold.tool_exists");
}

#[test]
fn missing_project_trees_are_created() {
    let dir = TempDir::new().unwrap();
    let layout = ProjectLayout::new(dir.path());

    let outcome = create(&layout, &request("logger", None)).unwrap();

    assert!(outcome.created_dirs.contains(&layout.include_dir()));
    assert!(outcome.created_dirs.contains(&layout.source_dir()));
    assert!(dir.path().join("src/utklogger/logger.cpp").is_file());
}
