use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "py-header-auditor")]
#[command(about = "Verify copyright headers in Python project source files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the copyright header check
    Check {
        /// Project root (default: walk upward until a 'test' directory is found)
        path: Option<PathBuf>,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show errors only
        #[arg(short, long)]
        quiet: bool,

        /// Print every file as it is scanned
        #[arg(short, long)]
        verbose: bool,

        /// Exit with code 0 even when headers are missing
        #[arg(long)]
        exit_zero: bool,
    },
    /// Add the default configuration section to pyproject.toml
    Init,
    /// Show or validate configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}

#[derive(Clone, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}
