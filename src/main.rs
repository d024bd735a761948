use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod report;

use cli::{Command, RootArgs};

fn main() -> Result<()> {
    let args = RootArgs::parse();
    init_tracing(args.verbose);

    match &args.command {
        Command::Defaults(args) => report::run_defaults(args),
        Command::Releases(args) => report::run_releases(args),
        Command::Paths(args) => report::run_paths(args),
        Command::Check(args) => report::run_check(args),
        Command::InitConfig(args) => report::run_init_config(args),
    }
}

// RUST_LOG wins over --verbose when set.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
