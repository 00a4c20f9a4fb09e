use clap::Args;
use serde::Serialize;

use utk::tools::{self, BuiltModules};

use super::CmdResult;

#[derive(Args)]
pub struct BuiltArgs {}

#[derive(Serialize)]
pub struct BuiltOutput {
    pub command: &'static str,
    #[serde(flatten)]
    pub built: BuiltModules,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
}

pub fn run(_args: BuiltArgs, global: &super::GlobalArgs) -> CmdResult<BuiltOutput> {
    let layout = global.layout()?;
    let built = tools::built_modules(&layout)?;

    let mut hints = Vec::new();
    if built.modules.is_empty() {
        hints.push("No tools found! Rebuild or check build location.".to_string());
    }

    Ok((
        BuiltOutput {
            command: "built",
            built,
            hints,
        },
        0,
    ))
}
