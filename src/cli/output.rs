//! Output formatting and progress reporting for the CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Result,
    ports::BuildObserver,
    tree::{GameTree, LevelSummary},
};

/// Create a progress bar that advances once per expanded level
pub fn create_level_progress(levels: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(levels);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} levels ({msg})")
            .map_err(|e| crate::Error::ProgressBarTemplate {
                message: e.to_string(),
            })?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// One-line description of an expanded level
pub fn describe_level(summary: &LevelSummary) -> String {
    format!(
        "depth {}: expanded {}, terminal {}, created {}, merged {}",
        summary.depth, summary.expanded, summary.terminal, summary.created, summary.merged
    )
}

/// Build observer that drives a progress bar and, when verbose, prints a
/// line per level.
///
/// Everything goes to stderr so a rendering written to stdout stays clean.
pub struct LevelProgress {
    show_bar: bool,
    verbose: bool,
    bar: Option<ProgressBar>,
}

impl LevelProgress {
    pub fn new(show_bar: bool, verbose: bool) -> Self {
        Self {
            show_bar,
            verbose,
            bar: None,
        }
    }
}

impl BuildObserver for LevelProgress {
    fn on_build_start(&mut self, depth: usize) -> Result<()> {
        if self.show_bar {
            self.bar = Some(create_level_progress(depth as u64)?);
        }
        Ok(())
    }

    fn on_level_start(&mut self, depth: usize, node_count: usize) -> Result<()> {
        if let Some(pb) = &self.bar {
            pb.set_message(format!(
                "depth {depth}: {} nodes",
                format_number(node_count)
            ));
        }
        Ok(())
    }

    fn on_level_complete(&mut self, summary: &LevelSummary) -> Result<()> {
        if self.verbose {
            let line = describe_level(summary);
            match &self.bar {
                Some(pb) => pb.println(line),
                None => eprintln!("{line}"),
            }
        }
        if let Some(pb) = &self.bar {
            pb.inc(1);
        }
        Ok(())
    }

    fn on_build_end(&mut self, tree: &GameTree) -> Result<()> {
        if let Some(pb) = self.bar.take() {
            pb.finish_with_message(format!("{} nodes", format_number(tree.node_count())));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::BuildConfig;

    #[test]
    fn format_number_groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn describe_level_lists_counts() {
        let summary = LevelSummary {
            depth: 1,
            expanded: 3,
            terminal: 0,
            created: 12,
            merged: 0,
        };
        assert_eq!(
            describe_level(&summary),
            "depth 1: expanded 3, terminal 0, created 12, merged 0"
        );
    }

    #[test]
    fn quiet_observer_builds_same_tree() {
        let config = BuildConfig::new(3).unwrap();
        let mut observer = LevelProgress::new(false, false);
        let observed = GameTree::build_with_observer(&config, &mut observer).unwrap();
        let plain = GameTree::build(&config);
        assert_eq!(observed.node_count(), plain.node_count());
        assert_eq!(observed.edge_count(), plain.edge_count());
    }
}
