//! chain-reaction command-line entry point

use anyhow::Result;
use chain_reaction_cli::commands::Commands;
use clap::Parser;

/// Chain reaction reduction over CSV workloads
#[derive(Debug, Parser)]
#[command(name = "chain-reaction", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    Cli::parse().command.execute()
}
