//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config) are inherited by all subcommands
//! - Flags given on the command line win over config files and `DEPWATCH_*` variables

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ColorMode;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// depwatch - rebuild and rerun a program whenever its dependencies change
#[derive(Parser, Debug)]
#[command(name = "depwatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of rendered lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./depwatch.toml, then the user config)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a program and run it again whenever a file it depends on changes
    Watch {
        /// Entrypoint source file
        file: PathBuf,

        /// Device to run on
        #[arg(short, long)]
        device: Option<String>,

        /// Assets to pass to the runner
        #[arg(long, value_name = "PATH")]
        assets: Option<PathBuf>,

        /// Optimization level passed to the runner
        #[arg(short = 'O', long, value_name = "LEVEL",
              value_parser = clap::value_parser!(u8).range(0..=2))]
        optimization_level: Option<u8>,
    },

    /// Print the dependency closure of an entrypoint and exit
    Deps {
        /// Entrypoint source file
        file: PathBuf,
    },
}
