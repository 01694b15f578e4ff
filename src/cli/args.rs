//! Command-line interface definitions.

use crate::config::{CONFIG_FILE, ConfigOverrides};
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Lumen site configuration CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override the site URL.
    ///
    /// Useful for preview deployments whose origin differs from production,
    /// without editing lumen.toml.
    #[arg(short = 'U', long = "site-url", global = true, value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Override the path prefix (e.g., "/blog")
    #[arg(long = "path-prefix", global = true)]
    pub path_prefix: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a starter lumen.toml
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Validate the site config and print a summary
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// Print the validated site config as JSON
    #[command(visible_alias = "s")]
    Show {
        #[command(flatten)]
        args: ShowArgs,
    },
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Static-asset directory the author photo is resolved against
    /// (relative to the site root)
    #[arg(short, long, default_value = "static", value_hint = clap::ValueHint::DirPath)]
    pub static_dir: PathBuf,
}

/// Show command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ShowArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Print only the value at a dotted path (e.g., `author.contacts.github`, `menu.0.label`)
    #[arg(short, long)]
    pub field: Option<String>,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Config values given on the command line.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            site_url: self.site_url.clone(),
            path_prefix: self.path_prefix.clone(),
        }
    }
}
