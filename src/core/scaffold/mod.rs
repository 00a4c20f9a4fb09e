//! Tool scaffolding engine.
//!
//! Pipeline per invocation:
//! sanitize → resolve → collision check → namespace + render → write.
//! Everything except the collision check and the write is pure.

pub mod guard;
pub mod name;
pub mod namespace;
pub mod resolve;
pub mod template;
pub mod writer;

use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;

use crate::config::{ProjectConfig, ProjectLayout};
use crate::Result;

pub use resolve::ScaffoldPaths;
pub use template::TemplateContext;

/// Raw user input for a new tool or subtool.
#[derive(Debug, Clone, Default)]
pub struct ToolRequest {
    pub tool_name: String,
    pub parent_tool: Option<String>,
    pub author_first: Option<String>,
    pub author_last: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScaffoldOptions {
    /// Plan and render only; no filesystem mutation.
    pub dry_run: bool,
}

/// A sanitized, resolved and rendered scaffold, ready to be written.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldPlan {
    pub tool: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub namespace: String,
    pub paths: ScaffoldPaths,
    pub header: String,
    pub source: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldOutcome {
    pub plan: ScaffoldPlan,
    pub written: bool,
    pub created_dirs: Vec<PathBuf>,
}

/// Sanitize, resolve and render without touching the filesystem.
pub fn plan(
    layout: &ProjectLayout,
    config: &ProjectConfig,
    request: &ToolRequest,
    date: NaiveDate,
) -> Result<ScaffoldPlan> {
    let tool = name::sanitize(&request.tool_name, "tool_name")?;
    let parent = name::sanitize_parent(request.parent_tool.as_deref(), "existing_tool")?;

    let paths = resolve::resolve(layout, &tool, parent.as_deref());
    let namespace = namespace::build(&tool, parent.as_deref());

    Ok(render(tool, parent, paths, namespace, config, request, date))
}

fn render(
    tool: String,
    parent: Option<String>,
    paths: ScaffoldPaths,
    namespace: String,
    config: &ProjectConfig,
    request: &ToolRequest,
    date: NaiveDate,
) -> ScaffoldPlan {
    let author = template::author_line(
        request
            .author_first
            .as_deref()
            .or(config.author.first_name.as_deref()),
        request
            .author_last
            .as_deref()
            .or(config.author.last_name.as_deref()),
    );
    let description = request
        .description
        .as_deref()
        .unwrap_or(config.description.as_str());

    let context = TemplateContext::new(
        tool.as_str(),
        author,
        date,
        description,
        namespace.as_str(),
        resolve::header_include(&tool, parent.as_deref()),
    );

    ScaffoldPlan {
        header: template::render_header(&context),
        source: template::render_source(&context),
        tool,
        parent,
        namespace,
        paths,
    }
}

/// Run the full pipeline for one request.
///
/// The collision check runs before anything is created, so a rejected
/// request performs no writes at all. With `dry_run` the plan is
/// validated against the filesystem but nothing is written.
pub fn create(
    layout: &ProjectLayout,
    config: &ProjectConfig,
    request: &ToolRequest,
    options: ScaffoldOptions,
) -> Result<ScaffoldOutcome> {
    let plan = plan(layout, config, request, template::today())?;

    guard::check(&plan.paths, &plan.tool, plan.parent.as_deref())?;

    if options.dry_run {
        crate::log_status!("create", "Dry run: nothing written for '{}'", plan.namespace);
        return Ok(ScaffoldOutcome {
            plan,
            written: false,
            created_dirs: Vec::new(),
        });
    }

    let created_dirs = writer::write(&plan.paths, &plan.header, &plan.source)?;
    crate::log_status!("create", "Created {}", plan.namespace);

    Ok(ScaffoldOutcome {
        plan,
        written: true,
        created_dirs,
    })
}
