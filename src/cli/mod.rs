//! CLI entry points

pub mod serve;

use clap::{Parser, Subcommand};

/// HR back office API
#[derive(Parser)]
#[command(name = "hr-backoffice")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
