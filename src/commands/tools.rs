use clap::Args;
use serde::Serialize;

use utk::tools::{self, ToolEntry};

use super::CmdResult;

#[derive(Args)]
pub struct ToolsArgs {
    /// Only list tools missing a source directory
    #[arg(long)]
    pub incomplete: bool,
}

#[derive(Serialize)]
pub struct ToolsOutput {
    pub command: &'static str,
    pub total: usize,
    pub tools: Vec<ToolEntry>,
}

pub fn run(args: ToolsArgs, global: &super::GlobalArgs) -> CmdResult<ToolsOutput> {
    let layout = global.layout()?;
    let mut tools = tools::scaffolded_tools(&layout)?;

    if args.incomplete {
        for tool in &mut tools {
            tool.subtools.retain(|sub| !sub.has_source);
        }
        tools.retain(|tool| !tool.has_source || !tool.subtools.is_empty());
    }

    let total = tools.iter().map(|t| 1 + t.subtools.len()).sum();

    Ok((
        ToolsOutput {
            command: "tools",
            total,
            tools,
        },
        0,
    ))
}
