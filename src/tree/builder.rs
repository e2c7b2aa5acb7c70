//! Level-by-level construction of the scenario DAG

use std::collections::{HashMap, HashSet};

use super::{
    config::{BuildConfig, MAX_DEPTH},
    node::{Node, NodeStatus, Terminal},
};
use crate::{
    Result,
    identifiers::NodeId,
    ports::BuildObserver,
    tictactoe::Board,
};

/// Nodes created at one depth, in creation order.
///
/// `classes` maps the canonical form of each member's board to the member,
/// so a candidate's equivalence class is found with one lookup. Each depth
/// holds at most one node per class, so the lookup agrees with a linear
/// `equivalent_to` scan over `members`.
#[derive(Debug, Clone, Default)]
struct DepthLevel {
    members: Vec<NodeId>,
    classes: HashMap<Board, NodeId>,
}

/// Outcome of expanding a single node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Expansion {
    /// New nodes allocated for this node's children
    pub created: usize,
    /// Children that already existed and gained a parent edge
    pub merged: usize,
    /// The node turned out to be terminal
    pub terminal: bool,
}

/// Totals for one expanded level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelSummary {
    pub depth: usize,
    pub expanded: usize,
    pub terminal: usize,
    pub created: usize,
    pub merged: usize,
}

/// Symmetry-reduced tic-tac-toe scenario DAG.
///
/// Nodes live in an arena indexed by [`NodeId`]; the root is always
/// [`NodeId::ROOT`]. Every edge goes from depth `d` to depth `d + 1`, so the
/// graph is acyclic however many parents a node collects.
///
/// # Examples
///
/// ```
/// use tictree::tree::{BuildConfig, GameTree};
///
/// let tree = GameTree::build(&BuildConfig::new(1).unwrap());
/// // corner, edge and centre openings
/// assert_eq!(tree.nodes_at_depth(1).len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct GameTree {
    nodes: Vec<Node>,
    levels: Vec<DepthLevel>,
}

impl GameTree {
    /// A tree holding only the empty-board root
    pub fn new() -> Self {
        let root = Node::root();
        let mut root_level = DepthLevel::default();
        root_level.members.push(NodeId::ROOT);
        root_level.classes.insert(root.board.canonical(), NodeId::ROOT);

        GameTree {
            nodes: vec![root],
            levels: vec![root_level],
        }
    }

    /// Expand levels `0..config.depth`, breadth-first.
    ///
    /// A depth beyond [`MAX_DEPTH`] is clamped: no board outlives nine
    /// placements. Use [`build_with_observer`](Self::build_with_observer) to
    /// reject it instead.
    pub fn build(config: &BuildConfig) -> Self {
        let mut tree = GameTree::new();
        for depth in 0..config.depth.min(MAX_DEPTH) {
            tree.expand_level(depth);
        }
        tree
    }

    /// Every level down to the last placement
    pub fn full() -> Self {
        Self::build(&BuildConfig::full())
    }

    /// [`build`](Self::build) with progress reported to `observer`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the observer.
    pub fn build_with_observer(
        config: &BuildConfig,
        observer: &mut dyn BuildObserver,
    ) -> Result<Self> {
        config.validate()?;
        let mut tree = GameTree::new();
        observer.on_build_start(config.depth)?;
        for depth in 0..config.depth {
            observer.on_level_start(depth, tree.nodes_at_depth(depth).len())?;
            let summary = tree.expand_level(depth);
            observer.on_level_complete(&summary)?;
        }
        observer.on_build_end(&tree)?;
        Ok(tree)
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Look up a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.children.len()).sum()
    }

    /// Deepest level holding at least one node
    pub fn deepest_level(&self) -> usize {
        self.levels
            .iter()
            .rposition(|level| !level.members.is_empty())
            .unwrap_or(0)
    }

    /// All nodes in allocation order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::from(i), node))
    }

    /// Nodes at `depth`, each once, in creation order
    pub fn nodes_at_depth(&self, depth: usize) -> &[NodeId] {
        self.levels
            .get(depth)
            .map_or(&[], |level| level.members.as_slice())
    }

    /// Nodes at `depth` found by walking children from the root.
    ///
    /// Each step takes the union of the frontier's children, deduplicated by
    /// identity. This is the query the per-depth index answers without a
    /// traversal.
    pub fn reachable_at_depth(&self, depth: usize) -> Vec<NodeId> {
        let mut frontier = vec![NodeId::ROOT];
        for _ in 0..depth {
            let mut seen = HashSet::new();
            frontier = frontier
                .iter()
                .flat_map(|&id| self.node(id).children.iter().copied())
                .filter(|&child| seen.insert(child))
                .collect();
        }
        frontier
    }

    /// Expand every node currently at `depth`.
    ///
    /// All of a level must be expanded before the next one starts: merges
    /// at `depth + 1` only see nodes that sibling expansions already created.
    pub fn expand_level(&mut self, depth: usize) -> LevelSummary {
        let members = self.nodes_at_depth(depth).to_vec();
        let mut summary = LevelSummary {
            depth,
            ..LevelSummary::default()
        };

        for id in members {
            if self.node(id).status != NodeStatus::Unexpanded {
                continue;
            }
            let expansion = self.expand(id);
            if expansion.terminal {
                summary.terminal += 1;
            } else {
                summary.expanded += 1;
            }
            summary.created += expansion.created;
            summary.merged += expansion.merged;
        }

        summary
    }

    /// Attach the children of one node.
    ///
    /// Terminal nodes are marked and left without children. Otherwise the
    /// candidate boards from [`candidate_boards`] are reduced to one per
    /// equivalence class and each is either merged into the existing node of
    /// that class at the next depth or allocated as a new node.
    ///
    /// Expanding a node a second time does nothing.
    pub fn expand(&mut self, id: NodeId) -> Expansion {
        let node = self.node(id);
        if node.status != NodeStatus::Unexpanded {
            return Expansion::default();
        }
        let (board, depth) = (node.board, node.depth);

        if let Some(outcome) = Terminal::detect(&board, depth) {
            self.nodes[id.index()].status = NodeStatus::Terminal(outcome);
            return Expansion {
                terminal: true,
                ..Expansion::default()
            };
        }

        let mut expansion = Expansion::default();
        let child_depth = depth + 1;
        if self.levels.len() <= child_depth {
            self.levels.resize_with(child_depth + 1, DepthLevel::default);
        }

        for candidate in distinct_classes(candidate_boards(&board)) {
            let key = candidate.canonical();
            let existing = self.levels[child_depth].classes.get(&key).copied();
            let child = match existing {
                Some(existing) => {
                    debug_assert!(self.node(existing).board.equivalent_to(&candidate));
                    expansion.merged += 1;
                    existing
                }
                None => {
                    expansion.created += 1;
                    self.allocate(id, candidate, key)
                }
            };
            self.attach(id, child);
        }

        self.nodes[id.index()].status = NodeStatus::Expanded;
        expansion
    }

    /// New node one level below `parent`, labelled as its next child
    fn allocate(&mut self, parent: NodeId, board: Board, class: Board) -> NodeId {
        let parent_node = self.node(parent);
        let depth = parent_node.depth + 1;
        let display_id = parent_node
            .display_id
            .child(parent_node.children.len() + 1);

        let id = NodeId::from(self.nodes.len());
        self.nodes.push(Node::new(board, depth, display_id));

        let level = &mut self.levels[depth];
        level.members.push(id);
        level.classes.insert(class, id);
        id
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        debug_assert_eq!(
            self.node(child).depth,
            self.node(parent).depth + 1,
            "edges must descend exactly one level"
        );
        self.nodes[parent.index()].children.push(child);
        self.nodes[child.index()].parents.push(parent);
    }
}

impl Default for GameTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Boards reachable from `board` in one move under the forced-move rules.
///
/// - A player who can complete a line does so (first such line in scan order).
/// - Otherwise a player facing a completable line blocks it.
/// - Otherwise every empty cell is tried, row-major.
pub fn candidate_boards(board: &Board) -> Vec<Board> {
    let active = board.active_player();
    let opponent = active.opponent();

    if board.close_to_win(active) {
        let mut next = *board;
        next.win(active);
        vec![next]
    } else if board.close_to_win(opponent) {
        let mut next = *board;
        next.block(opponent);
        vec![next]
    } else {
        board
            .vacant_positions()
            .into_iter()
            .map(|pos| board.with_mark(pos, active))
            .collect()
    }
}

/// Keep the first board of each equivalence class, preserving order.
pub fn distinct_classes(candidates: Vec<Board>) -> Vec<Board> {
    let mut kept: Vec<Board> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !kept.iter().any(|k| candidate.equivalent_to(k)) {
            kept.push(candidate);
        }
    }
    kept
}
