use utk::{ProjectConfig, ProjectLayout};

pub type CmdResult<T> = utk::Result<(T, i32)>;

/// Options shared by every subcommand.
pub(crate) struct GlobalArgs {
    pub root: Option<String>,
}

impl GlobalArgs {
    pub fn layout(&self) -> utk::Result<ProjectLayout> {
        ProjectLayout::resolve(self.root.as_deref())
    }

    /// Layout plus the project's `utk.json` settings.
    pub fn project(&self) -> utk::Result<(ProjectLayout, ProjectConfig)> {
        let layout = self.layout()?;
        let config = utk::config::load(&layout)?;
        Ok((layout, config))
    }
}

pub mod built;
pub mod clean;
pub mod create;
pub mod info;
pub mod tools;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (utk::Result<serde_json::Value>, i32) {
    crate::tty::status("utk is working...");

    match command {
        crate::Commands::Create(args) => dispatch!(args, global, create),
        crate::Commands::Clean(args) => dispatch!(args, global, clean),
        crate::Commands::Info(args) => dispatch!(args, global, info),
        crate::Commands::Built(args) => dispatch!(args, global, built),
        crate::Commands::Tools(args) => dispatch!(args, global, tools),
    }
}
