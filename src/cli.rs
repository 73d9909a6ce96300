//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  intellifix                        Fix the config under the current directory
  intellifix /path/to/project       Fix the config under the given project root
  intellifix --check                Report stale paths without rewriting
  intellifix --config ide/props.json   Use a non-default config location
  intellifix completions bash       Generate bash completions

Register as a post-build action and pass your build tool's project-dir
variable, e.g. for PlatformIO: intellifix \"$PROJECT_DIR\"
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Removes non-existent include paths from the VS Code C/C++ IntelliSense config",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Project root directory containing the IDE config
    #[arg(value_name = "PROJECT_DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Config file location, relative to the project root
    #[arg(
        long,
        value_name = "REL_PATH",
        default_value = ".vscode/c_cpp_properties.json"
    )]
    pub config: PathBuf,

    /// Report stale paths without rewriting the file
    #[arg(long)]
    pub check: bool,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
