use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "shlink-installer")]
#[command(author = "Shlink Contributors")]
#[command(version)]
#[command(about = "Interactive installer for Shlink", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (also shows full output of failed provisioning steps)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Configure Shlink and provision its database
    Install(InstallArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

// ============================================================================
// Install
// ============================================================================

#[derive(Parser)]
pub struct InstallArgs {
    /// Shlink installation root (provisioning commands run from here)
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Where to write the generated config, relative to the root
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Format of the generated config (defaults to the output's extension)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Installer settings file (defaults to <root>/installer.toml)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Only generate the config, do not touch the database
    #[arg(long)]
    pub skip_provisioning: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Php,
    Json,
    Toml,
}

impl From<FormatArg> for appconfig::Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Php => Self::Php,
            FormatArg::Json => Self::Json,
            FormatArg::Toml => Self::Toml,
        }
    }
}
