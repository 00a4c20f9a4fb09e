use clap::{Parser, Subcommand};

use commands::GlobalArgs;

mod commands;
mod output;
mod tty;

use commands::{built, clean, create, info, tools};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "utk")]
#[command(version = VERSION)]
#[command(about = "Developer CLI for the Utility Toolkit")]
struct Cli {
    /// Project root (defaults to UTK_PROJECT_ROOT, then the nearest directory with include/ and src/)
    #[arg(long, global = true, value_name = "PATH")]
    root: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new tool, or add a subtool to an existing tool
    Create(create::CreateArgs),
    /// Remove build artifacts (bin/ and lib/)
    Clean(clean::CleanArgs),
    /// Show project, git and platform information
    Info(info::InfoArgs),
    /// List compiled tool libraries
    Built(built::BuiltArgs),
    /// List scaffolded tools and subtools
    Tools(tools::ToolsArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let global = GlobalArgs { root: cli.root };

    let (json_result, exit_code) = commands::run_json(cli.command, &global);

    if output::print_json_result(json_result).is_err() {
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
