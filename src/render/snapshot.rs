//! Serializable snapshot of a built tree

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    identifiers::{DisplayId, NodeId},
    tictactoe::Player,
    tree::{GameTree, NodeStatus},
};

/// One node with its edges and evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub display_id: DisplayId,
    pub depth: usize,
    /// Row-major encoding, `.` for empty cells
    pub board: String,
    pub to_move: Player,
    pub status: NodeStatus,
    pub children: Vec<NodeId>,
    pub parents: Vec<NodeId>,
    pub bad: bool,
}

/// Whole-tree record written by `tictree build --format json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSnapshot {
    pub deepest_level: usize,
    pub node_count: usize,
    pub edge_count: usize,
    pub root_bad: bool,
    /// Node count per depth
    pub levels: Vec<usize>,
    pub nodes: Vec<NodeRecord>,
}

impl TreeSnapshot {
    pub fn capture(tree: &GameTree) -> Self {
        let bad = tree.bad_flags();
        let deepest_level = tree.deepest_level();
        let nodes = tree
            .iter()
            .map(|(id, node)| NodeRecord {
                id,
                display_id: node.display_id(),
                depth: node.depth(),
                board: node.board().encode(),
                to_move: node.board().active_player(),
                status: node.status(),
                children: node.children().to_vec(),
                parents: node.parents().to_vec(),
                bad: bad[id.index()],
            })
            .collect();

        TreeSnapshot {
            deepest_level,
            node_count: tree.node_count(),
            edge_count: tree.edge_count(),
            root_bad: bad[tree.root().index()],
            levels: (0..=deepest_level)
                .map(|d| tree.nodes_at_depth(d).len())
                .collect(),
            nodes,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write pretty JSON to `path`, replacing any existing file.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| crate::Error::Io {
            operation: format!("create snapshot file {}", path.display()),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::BuildConfig;

    #[test]
    fn snapshot_mirrors_tree() {
        let tree = GameTree::build(&BuildConfig::new(2).unwrap());
        let snapshot = TreeSnapshot::capture(&tree);

        assert_eq!(snapshot.levels, vec![1, 3, 12]);
        assert_eq!(snapshot.node_count, 16);
        assert_eq!(snapshot.edge_count, 15);
        assert!(!snapshot.root_bad);

        let root = &snapshot.nodes[0];
        assert_eq!(root.board, ".........");
        assert_eq!(root.to_move, Player::O);
        assert_eq!(root.status, NodeStatus::Expanded);
        assert_eq!(root.children.len(), 3);
        assert!(root.parents.is_empty());
    }

    #[test]
    fn snapshot_survives_json() {
        let tree = GameTree::build(&BuildConfig::new(3).unwrap());
        let snapshot = TreeSnapshot::capture(&tree);
        let json = snapshot.to_json().unwrap();
        let parsed: TreeSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
