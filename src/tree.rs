//! Scenario DAG: nodes, level-by-level builder and badness evaluation

pub mod builder;
pub mod config;
pub mod evaluate;
pub mod node;
pub mod stats;

pub use builder::{Expansion, GameTree, LevelSummary, candidate_boards, distinct_classes};
pub use config::{BuildConfig, MAX_DEPTH};
pub use evaluate::{Evaluator, is_bad_uncached};
pub use node::{Node, NodeStatus, Terminal};
pub use stats::{LevelStats, TreeStats};
