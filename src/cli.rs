//! CLI argument parsing for inspecting osg-build defaults.
//!
//! The CLI is intentionally thin: every command reads the same library
//! tables a build would, so what it prints is what a build gets.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "osg-build",
    version,
    about = "Inspect osg-build defaults and site configuration",
    after_help = "Commands:\n  defaults [--allbuild] [--release N] [--set NAME=VALUE]  Effective build options\n  releases [--config FILE]                               Release tag table\n  paths [--program-dir DIR]                              User files and data search path\n  check [--config FILE]                                  Consistency checks\n  init-config [--out FILE] [--force]                     Starter site config\n\nExamples:\n  osg-build defaults --release 6\n  osg-build defaults --allbuild --set scratch=true --json\n  osg-build releases --config /etc/osg-build/site.json\n  osg-build check",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    /// Emit debug logging to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    Defaults(DefaultsArgs),
    Releases(ReleasesArgs),
    Paths(PathsArgs),
    Check(CheckArgs),
    InitConfig(InitConfigArgs),
}

/// Defaults command inputs.
#[derive(Parser, Debug)]
#[command(about = "Print effective build options")]
pub struct DefaultsArgs {
    /// Start from the allbuild defaults; --set is limited to the allow-list
    #[arg(long)]
    pub allbuild: bool,

    /// Red Hat release to build for
    #[arg(long, value_name = "N")]
    pub release: Option<String>,

    /// Override a build option (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub overrides: Vec<String>,

    /// Site config JSON supplying the release tag table
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

/// Releases command inputs.
#[derive(Parser, Debug)]
#[command(about = "Print the release tag table")]
pub struct ReleasesArgs {
    /// Site config JSON supplying the release tag table
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

/// Paths command inputs.
#[derive(Parser, Debug)]
#[command(about = "Print user config locations and the data-file search path")]
pub struct PathsArgs {
    /// Directory treated as the program directory (defaults to the executable's)
    #[arg(long, value_name = "DIR")]
    pub program_dir: Option<PathBuf>,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

/// Check command inputs.
#[derive(Parser, Debug)]
#[command(about = "Check defaults tables and site config for consistency")]
pub struct CheckArgs {
    /// Site config JSON to check alongside the built-in tables
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

/// Init-config command inputs for bootstrapping a site config.
#[derive(Parser, Debug)]
#[command(about = "Print or write a site config holding the built-in defaults")]
pub struct InitConfigArgs {
    /// Write the config here instead of printing it
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long, requires = "out")]
    pub force: bool,
}
