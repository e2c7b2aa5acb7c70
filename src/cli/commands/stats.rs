//! Stats command - Per-depth counts and the root evaluation

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        config::CommonConfig,
        output::{LevelProgress, format_number, print_kv, print_section},
    },
    tree::{BuildConfig, GameTree, TreeStats},
};

#[derive(Parser, Debug)]
#[command(about = "Print per-depth statistics of the scenario DAG")]
pub struct StatsArgs {
    /// Number of levels to expand (0-9)
    #[arg(long, short = 'd')]
    pub depth: usize,

    /// Print the statistics as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Print per-level expansion details
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl StatsArgs {
    /// Progress and verbosity; JSON output never shows a progress bar.
    pub fn common(&self) -> CommonConfig {
        CommonConfig {
            progress: !self.no_progress && !self.json,
            verbose: self.verbose,
        }
    }
}

pub fn execute(args: StatsArgs) -> Result<()> {
    let config = BuildConfig::new(args.depth)?;
    let common = args.common();

    let mut observer = LevelProgress::new(common.progress, common.verbose);
    let tree = GameTree::build_with_observer(&config, &mut observer)?;

    let stats = TreeStats::collect(&tree);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    print_section(&format!("Scenario DAG statistics (depth {})", config.depth));
    println!(
        "  {:>5} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "depth", "nodes", "edges", "shared", "leaves", "terminal", "bad"
    );
    println!("  {}", "-".repeat(59));
    for level in &stats.levels {
        println!(
            "  {:>5} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}",
            level.depth,
            format_number(level.nodes),
            format_number(level.edges),
            format_number(level.multi_parent),
            format_number(level.leaves),
            format_number(level.terminal),
            format_number(level.bad),
        );
    }

    println!();
    print_kv("Total nodes", &format_number(stats.total_nodes()));
    print_kv("Total edges", &format_number(stats.total_edges()));
    print_kv("Bad for O", &format_number(stats.total_bad()));
    print_kv(
        "Root",
        if stats.root_bad {
            "bad for O"
        } else {
            "not bad for O"
        },
    );

    Ok(())
}
