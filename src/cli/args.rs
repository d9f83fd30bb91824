//! CLI argument structures

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Run the higher-order function demos
#[derive(Parser)]
#[command(name = "fnkit")]
#[command(about = "fnkit - Higher-order functions and function values, demonstrated", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a TOML file with demo inputs
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate a sequence of integers with sum and max
    #[command(name = "aggregate")]
    Aggregate {
        /// Numbers to aggregate (overrides the configured sequence)
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i32>,
    },

    /// Show function types, curried closures and the string consumer
    #[command(name = "functions")]
    Functions,
}
