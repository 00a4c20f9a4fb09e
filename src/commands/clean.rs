use clap::Args;
use serde::Serialize;

use utk::cleanup::{self, CleanupResult};

use super::CmdResult;

#[derive(Args)]
pub struct CleanArgs {
    /// Report what would be deleted without deleting it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Serialize)]
pub struct CleanOutput {
    pub command: &'static str,
    pub root: String,
    pub result: CleanupResult,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
}

pub fn run(args: CleanArgs, global: &super::GlobalArgs) -> CmdResult<CleanOutput> {
    let layout = global.layout()?;
    let result = cleanup::clean_build_artifacts(&layout, args.dry_run)?;

    let mut hints = Vec::new();
    if result.summary.removed == 0 {
        hints.push("No build artifacts found.".to_string());
    } else if args.dry_run {
        hints.push("Rerun without --dry-run to delete.".to_string());
    }

    Ok((
        CleanOutput {
            command: "clean",
            root: layout.root().display().to_string(),
            result,
            hints,
        },
        0,
    ))
}
