use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use utk::scaffold::{self, ScaffoldOptions, ToolRequest};

use super::CmdResult;

#[derive(Args)]
pub struct CreateArgs {
    /// Name of the tool to create (or the subtool to add)
    pub tool_name: String,

    /// Name of the existing tool to add this as a subtool
    #[arg(long, value_name = "TOOL")]
    pub existing_tool: Option<String>,

    /// Author first name for the file banner
    #[arg(long)]
    pub first_name: Option<String>,

    /// Author last name for the file banner
    #[arg(long)]
    pub last_name: Option<String>,

    /// Brief description for the file banner
    #[arg(long)]
    pub description: Option<String>,

    /// Resolve and render without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Include the rendered header and source in the output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Serialize)]
pub struct CreateOutput {
    pub command: &'static str,
    pub tool: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub namespace: String,
    pub header_file: PathBuf,
    pub source_file: PathBuf,
    pub dry_run: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub created_dirs: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_content: Option<String>,
}

pub fn run(args: CreateArgs, global: &super::GlobalArgs) -> CmdResult<CreateOutput> {
    let (layout, config) = global.project()?;

    let request = ToolRequest {
        tool_name: args.tool_name,
        parent_tool: args.existing_tool,
        author_first: args.first_name,
        author_last: args.last_name,
        description: args.description,
    };

    let outcome = scaffold::create(
        &layout,
        &config,
        &request,
        ScaffoldOptions {
            dry_run: args.dry_run,
        },
    )?;

    let plan = outcome.plan;
    let (header_content, source_content) = if args.verbose {
        (Some(plan.header), Some(plan.source))
    } else {
        (None, None)
    };

    Ok((
        CreateOutput {
            command: "create",
            tool: plan.tool,
            parent: plan.parent,
            namespace: plan.namespace,
            header_file: plan.paths.header_file,
            source_file: plan.paths.source_file,
            dry_run: !outcome.written,
            created_dirs: outcome.created_dirs,
            header_content,
            source_content,
        },
        0,
    ))
}
