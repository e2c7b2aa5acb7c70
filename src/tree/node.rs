//! Nodes of the scenario DAG

use serde::{Deserialize, Serialize};

use crate::{
    identifiers::{DisplayId, NodeId},
    tictactoe::{Board, Player},
};

/// Why a node was closed off during expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terminal {
    /// O completed a line
    OWon,
    /// X completed a line
    XWon,
    /// No line can be completed any more
    Draw,
}

impl Terminal {
    /// Terminal check for a board reached after `depth` placements.
    ///
    /// O cannot own a line before its third mark (depth 5), and neither an X
    /// win nor a structural draw can occur before depth 6, so shallower
    /// checks are skipped.
    pub fn detect(board: &Board, depth: usize) -> Option<Terminal> {
        if depth >= 5 && board.did_win(Player::O) {
            return Some(Terminal::OWon);
        }
        if depth >= 6 {
            if board.did_win(Player::X) {
                return Some(Terminal::XWon);
            }
            if board.is_draw() {
                return Some(Terminal::Draw);
            }
        }
        None
    }
}

/// Expansion state of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeStatus {
    Unexpanded,
    Expanded,
    /// Permanently a leaf
    Terminal(Terminal),
}

/// One reachable board at a fixed depth.
///
/// A node may have several parents when different move sequences reach
/// equivalent positions. Its board never changes after construction; only the
/// edge lists grow.
#[derive(Debug, Clone)]
pub struct Node {
    pub(super) board: Board,
    pub(super) depth: usize,
    pub(super) children: Vec<NodeId>,
    pub(super) parents: Vec<NodeId>,
    pub(super) display_id: DisplayId,
    pub(super) status: NodeStatus,
}

impl Node {
    pub(super) fn root() -> Self {
        Self::new(Board::new(), 0, DisplayId::ROOT)
    }

    pub(super) fn new(board: Board, depth: usize, display_id: DisplayId) -> Self {
        Node {
            board,
            depth,
            children: Vec::new(),
            parents: Vec::new(),
            display_id,
            status: NodeStatus::Unexpanded,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of placements since the empty board
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Parents in the order their edges were added; empty only for the root
    pub fn parents(&self) -> &[NodeId] {
        &self.parents
    }

    pub fn display_id(&self) -> DisplayId {
        self.display_id
    }

    pub fn status(&self) -> NodeStatus {
        self.status
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.status, NodeStatus::Terminal(_))
    }
}
