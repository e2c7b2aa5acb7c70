//! Build command - Expand the scenario DAG and render it

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};

use crate::{
    cli::{
        config::RunConfig,
        output::{LevelProgress, format_number, print_kv, print_section},
    },
    render::{DotGraph, TreeSnapshot},
    tree::{BuildConfig, GameTree, TreeStats},
};

#[derive(Parser, Debug)]
#[command(about = "Build the scenario DAG and render it")]
pub struct BuildArgs {
    /// Number of levels to expand (0-9); overrides the config file
    #[arg(long, short = 'd')]
    pub depth: Option<usize>,

    /// Write the rendering here instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Rendering format
    #[arg(long, short = 'f', value_enum, default_value = "dot")]
    pub format: OutputFormat,

    /// Leave out routes into bad positions above the deepest level
    #[arg(long)]
    pub hide_bad: bool,

    /// JSON configuration file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Print per-level expansion details
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Graphviz digraph
    Dot,
    /// JSON snapshot of every node
    Json,
}

impl BuildArgs {
    /// Merge the optional config file with command-line flags; flags win.
    pub fn resolve(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => {
                let depth = self
                    .depth
                    .ok_or_else(|| anyhow!("--depth is required when no --config is given"))?;
                RunConfig::new(BuildConfig::new(depth)?)
            }
        };

        if let Some(depth) = self.depth {
            config.build = BuildConfig::new(depth)?;
        }
        if self.hide_bad {
            config.render.hide_bad = true;
        }
        if self.no_progress {
            config.common.progress = false;
        }
        if self.verbose {
            config.common.verbose = true;
        }
        Ok(config)
    }
}

pub fn execute(args: BuildArgs) -> Result<()> {
    let config = args.resolve()?;
    let to_stdout = args.output.is_none();

    let mut observer = LevelProgress::new(config.common.progress, config.common.verbose);
    let tree = GameTree::build_with_observer(&config.build, &mut observer)?;

    // Summary goes to stderr when the rendering itself is on stdout.
    if to_stdout {
        eprintln!(
            "Built {} nodes, {} edges to depth {}",
            format_number(tree.node_count()),
            format_number(tree.edge_count()),
            tree.deepest_level()
        );
    } else {
        print_summary(&tree);
    }

    match (args.format, &args.output) {
        (OutputFormat::Dot, Some(path)) => {
            DotGraph::new(&tree, config.render).write_to(path)?;
            println!("\n✓ DOT graph written to: {}", path.display());
        }
        (OutputFormat::Dot, None) => {
            print!("{}", DotGraph::new(&tree, config.render));
        }
        (OutputFormat::Json, Some(path)) => {
            TreeSnapshot::capture(&tree).write_json(path)?;
            println!("\n✓ Snapshot written to: {}", path.display());
        }
        (OutputFormat::Json, None) => {
            println!("{}", TreeSnapshot::capture(&tree).to_json()?);
        }
    }

    Ok(())
}

fn print_summary(tree: &GameTree) {
    let stats = TreeStats::collect(tree);

    print_section("Scenario DAG");
    print_kv("Deepest level", &tree.deepest_level().to_string());
    print_kv("Nodes", &format_number(stats.total_nodes()));
    print_kv("Edges", &format_number(stats.total_edges()));
    print_kv("Root bad for O", &stats.root_bad.to_string());

    println!();
    for level in &stats.levels {
        print_kv(
            &format!("Depth {}", level.depth),
            &format!("{} nodes", format_number(level.nodes)),
        );
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: BuildArgs,
    }

    fn parse(argv: &[&str]) -> BuildArgs {
        let mut full = vec!["tictree"];
        full.extend_from_slice(argv);
        Harness::parse_from(full).args
    }

    #[test]
    fn depth_flag_alone_is_enough() {
        let config = parse(&["--depth", "4"]).resolve().unwrap();
        assert_eq!(config.build.depth, 4);
        assert!(config.common.progress);
        assert!(!config.render.hide_bad);
    }

    #[test]
    fn missing_depth_is_an_error() {
        assert!(parse(&[]).resolve().is_err());
    }

    #[test]
    fn out_of_range_depth_is_an_error() {
        assert!(parse(&["--depth", "10"]).resolve().is_err());
    }

    #[test]
    fn flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"build": {{"depth": 5}}, "common": {{"progress": true}}}}"#
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let from_file = parse(&["--config", &path]).resolve().unwrap();
        assert_eq!(from_file.build.depth, 5);

        let overridden = parse(&["--config", &path, "--depth", "2", "--no-progress", "--hide-bad"])
            .resolve()
            .unwrap();
        assert_eq!(overridden.build.depth, 2);
        assert!(!overridden.common.progress);
        assert!(overridden.render.hide_bad);
    }
}
