use clap::Args;
use serde::Serialize;

use utk::info::{self, ProjectInfo};

use super::CmdResult;

#[derive(Args)]
pub struct InfoArgs {}

#[derive(Serialize)]
pub struct InfoOutput {
    pub command: &'static str,
    #[serde(flatten)]
    pub info: ProjectInfo,
}

pub fn run(_args: InfoArgs, global: &super::GlobalArgs) -> CmdResult<InfoOutput> {
    let (layout, config) = global.project()?;

    Ok((
        InfoOutput {
            command: "info",
            info: info::report(&layout, &config),
        },
        0,
    ))
}
