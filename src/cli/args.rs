// src/cli/args.rs
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pathways", version, about = "Complexity metrics over semantic syntax trees")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print progress and full parser diagnostics
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Cyclomatic complexity of each input tree
    Cyclomatic {
        /// Saved parse responses or bare tree files; directories expand to
        /// their .json files
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// NPath complexity of every function in each input tree
    Npath {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Literal tokens carried by each input tree, in source order
    Tokens {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Check each input tree against the limits in pathways.toml
    Check {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}
