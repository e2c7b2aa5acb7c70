//! tictree CLI - Build and inspect the tic-tac-toe scenario DAG
//!
//! - Build the DAG to a given depth and render it as DOT or JSON
//! - Print per-depth statistics and the root evaluation
//! - Show the symmetric images of a board

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tictree")]
#[command(version, about = "Tic-tac-toe scenario DAG builder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the DAG and write a rendering
    Build(tictree::cli::commands::build::BuildArgs),

    /// Print per-depth statistics
    Stats(tictree::cli::commands::stats::StatsArgs),

    /// Show the D4 images of a board
    Symmetry(tictree::cli::commands::symmetry::SymmetryArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build(args) => tictree::cli::commands::build::execute(args),
        Commands::Stats(args) => tictree::cli::commands::stats::execute(args),
        Commands::Symmetry(args) => tictree::cli::commands::symmetry::execute(args),
    }
}
