//! Per-depth statistics over a built tree.

use serde::{Deserialize, Serialize};

use super::GameTree;

/// Counts for one depth of the DAG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LevelStats {
    pub depth: usize,
    pub nodes: usize,
    /// Edges leaving nodes at this depth
    pub edges: usize,
    /// Nodes reached from more than one parent
    pub multi_parent: usize,
    /// Nodes with no children (terminal or not yet expanded)
    pub leaves: usize,
    pub terminal: usize,
    pub bad: usize,
}

/// Summary of a whole tree, one entry per depth from the root down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    pub levels: Vec<LevelStats>,
    pub root_bad: bool,
}

impl TreeStats {
    pub fn collect(tree: &GameTree) -> Self {
        let bad = tree.bad_flags();
        let levels = (0..=tree.deepest_level())
            .map(|depth| {
                let mut stats = LevelStats {
                    depth,
                    ..LevelStats::default()
                };
                for &id in tree.nodes_at_depth(depth) {
                    let node = tree.node(id);
                    stats.nodes += 1;
                    stats.edges += node.children().len();
                    if node.parents().len() > 1 {
                        stats.multi_parent += 1;
                    }
                    if node.is_leaf() {
                        stats.leaves += 1;
                    }
                    if node.is_terminal() {
                        stats.terminal += 1;
                    }
                    if bad[id.index()] {
                        stats.bad += 1;
                    }
                }
                stats
            })
            .collect();

        TreeStats {
            levels,
            root_bad: bad[tree.root().index()],
        }
    }

    pub fn total_nodes(&self) -> usize {
        self.levels.iter().map(|l| l.nodes).sum()
    }

    pub fn total_edges(&self) -> usize {
        self.levels.iter().map(|l| l.edges).sum()
    }

    pub fn total_bad(&self) -> usize {
        self.levels.iter().map(|l| l.bad).sum()
    }
}
