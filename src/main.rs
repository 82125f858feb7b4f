//! CLI entry point for headless territory-claiming sessions

use clap::Parser;
use qixfield::io::cli::{Cli, SessionRunner};

fn main() -> qixfield::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut runner = SessionRunner::new(cli);
    runner.run().map(|_| ())
}
