//! Identifier types for nodes in the scenario DAG.
//!
//! Two identifiers exist for every node: the [`NodeId`] arena index, which is
//! the node's identity, and the [`DisplayId`], the positional label shown in
//! renderings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a node inside a [`GameTree`](crate::tree::GameTree).
///
/// NodeIds are arena indices. Two handles refer to the same node exactly when
/// their ids are equal, regardless of the boards they hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    /// The root is always the first node allocated.
    pub const ROOT: NodeId = NodeId(0);

    /// Get the arena index.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(value: usize) -> Self {
        NodeId(value)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Positional label of a node: `parent * 10 + child_index`.
///
/// Assigned once, by the first parent that attaches the node. The root is 0
/// and the first child of any node gets index 1.
///
/// # Examples
///
/// ```
/// use tictree::identifiers::DisplayId;
///
/// let first = DisplayId::ROOT.child(1);
/// assert_eq!(first.value(), 1);
/// assert_eq!(first.child(3).value(), 13);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DisplayId(u64);

impl DisplayId {
    pub const ROOT: DisplayId = DisplayId(0);

    /// Label for the `child_index`-th child (1-based) of this node.
    pub fn child(self, child_index: usize) -> DisplayId {
        DisplayId(self.0 * 10 + child_index as u64)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for DisplayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_ids_append_child_index() {
        let id = DisplayId::ROOT.child(2).child(5).child(1);
        assert_eq!(id.value(), 251);
        assert_eq!(id.to_string(), "251");
    }

    #[test]
    fn node_id_round_trips_index() {
        let id = NodeId::from(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::ROOT.index(), 0);
    }
}
