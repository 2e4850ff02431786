//! depwatch CLI - rebuild and rerun a program whenever its dependencies change
//!
//! Usage: depwatch <COMMAND>
//!
//! Commands:
//!   watch   Run a program and run it again whenever a file it depends on changes
//!   deps    Print the dependency closure of an entrypoint

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use depwatch::presentation::{Cli, Commands};

use commands::watch::RunFlags;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Watch {
            file,
            device,
            assets,
            optimization_level,
        } => commands::watch::cmd_watch(
            &file,
            RunFlags {
                device,
                assets,
                optimization_level,
            },
            config,
            cli.json,
            cli.verbose,
            cli.color,
        ),
        Commands::Deps { file } => commands::deps::cmd_deps(&file, config, cli.json, cli.color),
    }
}
