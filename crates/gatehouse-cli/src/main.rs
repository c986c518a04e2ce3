// Rust guideline compliant 2026-10-15

//! Gatehouse CLI Application
//!
//! Command-line front end for the staged-file and push gates.

use clap::Parser;
use gatehouse_cli::color_mode::set_color_enabled;
use gatehouse_cli::{commands, should_use_color, HookAction};
use gatehouse_hooks::logging::{default_level, init_logging, stdout_color_enabled};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gatehouse",
    version,
    about = "Gatehouse: commit and push gates for a container monorepo",
    long_about = "Gatehouse formats and checks staged Python files belonging to approved containers before a commit, and runs the test suite and standards checker before a push.",
    after_help = "Examples:\n  gatehouse hooks install\n  gatehouse hooks pre-commit\n  SKIP_TESTS=1 gatehouse hooks pre-push\n  gatehouse validate api\n  gatehouse containers\n  gatehouse config --json\n"
)]
struct Cli {
    /// Repository to operate on (defaults to the current directory)
    #[arg(long, global = true)]
    repo: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Run or install Git hooks
    Hooks {
        #[command(subcommand)]
        action: HookAction,
    },

    /// Run the validation suite against one container
    Validate {
        /// Container name under the containers root
        container: String,
    },

    /// List containers and whether each is approved
    Containers,

    /// Print the effective configuration
    Config {
        /// Print as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = cli.log_level.unwrap_or_else(default_level);
    init_logging(&level, !cli.no_color && stdout_color_enabled())?;
    set_color_enabled(!cli.no_color && should_use_color());

    let repo = match cli.repo {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Some(Commands::Hooks { action }) => {
            commands::hooks::execute(action, &repo)?;
        }
        Some(Commands::Validate { container }) => {
            commands::validate::execute(&repo, &container)?;
        }
        Some(Commands::Containers) => {
            commands::containers::execute(&repo)?;
        }
        Some(Commands::Config { json }) => {
            commands::config::execute(&repo, json)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
