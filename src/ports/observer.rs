//! Observer port - hooks into a level-by-level DAG build
//!
//! Builds report through this trait so that progress display and diagnostics
//! stay out of the expansion logic.

use crate::{
    Result,
    tree::{GameTree, LevelSummary},
};

/// Observer trait for monitoring a build
///
/// # Event Sequence
///
/// 1. `on_build_start(depth)` - Once at the beginning
/// 2. For each level `d` in `0..depth`:
///    - `on_level_start(d, node_count)`
///    - `on_level_complete(summary)`
/// 3. `on_build_end(tree)` - Once at the end
///
/// # Examples
///
/// ```
/// use tictree::{
///     ports::BuildObserver,
///     tree::{BuildConfig, GameTree, LevelSummary},
/// };
///
/// #[derive(Default)]
/// struct CountCreated {
///     created: usize,
/// }
///
/// impl BuildObserver for CountCreated {
///     fn on_level_complete(&mut self, summary: &LevelSummary) -> tictree::Result<()> {
///         self.created += summary.created;
///         Ok(())
///     }
/// }
///
/// let mut observer = CountCreated::default();
/// let tree = GameTree::build_with_observer(&BuildConfig::new(2).unwrap(), &mut observer).unwrap();
/// assert_eq!(observer.created + 1, tree.node_count());
/// ```
pub trait BuildObserver {
    /// Called before the root is expanded.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_build_start(&mut self, _depth: usize) -> Result<()> {
        Ok(())
    }

    /// Called before the nodes at `depth` are expanded.
    ///
    /// # Parameters
    ///
    /// * `depth` - Level about to be expanded
    /// * `node_count` - Number of nodes at that level
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_level_start(&mut self, _depth: usize, _node_count: usize) -> Result<()> {
        Ok(())
    }

    /// Called once every node of a level has been expanded.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_level_complete(&mut self, _summary: &LevelSummary) -> Result<()> {
        Ok(())
    }

    /// Called with the finished tree.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_build_end(&mut self, _tree: &GameTree) -> Result<()> {
        Ok(())
    }
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl BuildObserver for NullObserver {}
