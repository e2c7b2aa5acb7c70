//! Graphviz DOT rendering of a built tree
//!
//! Every node is drawn as an HTML-like table of its nine cells. Border colour
//! shows whose turn it is; fill colour summarises wins, draws and open
//! threats.

use std::{collections::HashSet, fmt, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    identifiers::NodeId,
    tictactoe::{Board, Cell, Player},
    tree::GameTree,
};

/// What to leave out of a rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Drop edges into bad nodes above the deepest level, along with
    /// whatever becomes unreachable from the root
    #[serde(default)]
    pub hide_bad: bool,
}

impl RenderOptions {
    pub fn with_hide_bad(mut self, hide_bad: bool) -> Self {
        self.hide_bad = hide_bad;
        self
    }
}

/// Colours and fill style for one board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStyle {
    pub border: &'static str,
    pub fill: &'static str,
    pub radial: bool,
}

impl NodeStyle {
    pub fn for_board(board: &Board) -> Self {
        let border = match board.active_player() {
            Player::O => "red",
            Player::X => "green",
        };
        let o_close = board.close_to_win(Player::O);
        let x_close = board.close_to_win(Player::X);

        let (fill, radial) = if board.did_win(Player::O) {
            ("green", false)
        } else if board.did_win(Player::X) {
            ("red", false)
        } else if board.is_draw() {
            ("blue:white", true)
        } else if o_close && x_close {
            ("yellow:white", true)
        } else if o_close {
            ("green:white", true)
        } else if x_close {
            ("red:white", true)
        } else {
            ("white", false)
        };

        NodeStyle {
            border,
            fill,
            radial,
        }
    }
}

/// Nodes and edges that survive `options`, in breadth-first order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleGraph {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<(NodeId, NodeId)>,
}

impl VisibleGraph {
    pub fn collect(tree: &GameTree, options: &RenderOptions) -> Self {
        let bad = if options.hide_bad {
            tree.bad_flags()
        } else {
            Vec::new()
        };
        let deepest = tree.deepest_level();
        let keep_edge = |child: NodeId| {
            !options.hide_bad || !bad[child.index()] || tree.node(child).depth() >= deepest
        };

        let mut graph = VisibleGraph::default();
        let mut seen = HashSet::from([tree.root()]);
        let mut frontier = vec![tree.root()];
        while !frontier.is_empty() {
            let mut next = Vec::new();
            for id in frontier {
                graph.nodes.push(id);
                for &child in tree.node(id).children() {
                    if !keep_edge(child) {
                        continue;
                    }
                    graph.edges.push((id, child));
                    if seen.insert(child) {
                        next.push(child);
                    }
                }
            }
            frontier = next;
        }
        graph
    }
}

/// DOT document for a tree; write it with `Display`.
///
/// # Examples
///
/// ```
/// use tictree::{
///     render::{DotGraph, RenderOptions},
///     tree::{BuildConfig, GameTree},
/// };
///
/// let tree = GameTree::build(&BuildConfig::new(1).unwrap());
/// let dot = DotGraph::new(&tree, RenderOptions::default()).to_string();
/// assert!(dot.starts_with("digraph tictree {"));
/// assert!(dot.contains("n0 -> n1;"));
/// ```
pub struct DotGraph<'a> {
    tree: &'a GameTree,
    graph: VisibleGraph,
}

impl<'a> DotGraph<'a> {
    pub fn new(tree: &'a GameTree, options: RenderOptions) -> Self {
        Self {
            tree,
            graph: VisibleGraph::collect(tree, &options),
        }
    }

    pub fn visible(&self) -> &VisibleGraph {
        &self.graph
    }

    /// Write the document to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_string()).map_err(|source| crate::Error::Io {
            operation: format!("write DOT file {}", path.display()),
            source,
        })
    }
}

impl fmt::Display for DotGraph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph tictree {{")?;
        writeln!(f, "    node [shape=plaintext];")?;
        for &id in &self.graph.nodes {
            let node = self.tree.node(id);
            writeln!(
                f,
                "    n{id} [tooltip=\"{}\", label={}];",
                node.display_id(),
                html_label(node.board())
            )?;
        }
        for (parent, child) in &self.graph.edges {
            writeln!(f, "    n{parent} -> n{child};")?;
        }
        writeln!(f, "}}")
    }
}

fn html_label(board: &Board) -> String {
    let style = NodeStyle::for_board(board);
    let mut label = format!(
        "<<TABLE BORDER=\"0\" CELLBORDER=\"1\" CELLSPACING=\"0\" COLOR=\"{}\" BGCOLOR=\"{}\"",
        style.border, style.fill
    );
    if style.radial {
        label.push_str(" STYLE=\"radial\"");
    }
    label.push('>');
    for row in 0..3 {
        label.push_str("<TR>");
        for col in 0..3 {
            let mark = match board.get(row, col) {
                Cell::Empty => '-',
                cell => cell.to_char(),
            };
            label.push_str(&format!("<TD>{mark}</TD>"));
        }
        label.push_str("</TR>");
    }
    label.push_str("</TABLE>>");
    label
}
