//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

/// Builds the cross-browser WebAssembly test suite from .wast sources
#[derive(Parser)]
#[command(name = "suitepack")]
#[command(version, about, long_about = None)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .multiple(true)
        .args(["js", "html", "front"])
))]
pub struct Cli {
    /// Output directory for the pure JS tests
    #[arg(long = "js", value_name = "DIR")]
    pub js: Option<PathBuf>,

    /// Output directory for the HTML tests
    #[arg(long = "html", value_name = "DIR")]
    pub html: Option<PathBuf>,

    /// Output directory for the front page
    #[arg(long = "front", value_name = "DIR")]
    pub front: Option<PathBuf>,

    /// Suite root containing core/, js-api/, html/ and harness/
    #[arg(long, value_name = "DIR", env = "SUITEPACK_SUITE")]
    pub suite: Option<PathBuf>,

    /// Path to the reference interpreter
    #[arg(long, value_name = "PATH", env = "SUITEPACK_WASM")]
    pub wasm: Option<PathBuf>,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "SUITEPACK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Summary format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
