//! Backward induction of the "bad for O" flag

use super::builder::GameTree;
use crate::{identifiers::NodeId, tictactoe::Player};

/// Memoizing evaluator for [`GameTree`] nodes.
///
/// A node is bad when X has already won on its board, or when the player to
/// move cannot avoid badness: O (to move) is stuck only if every child is
/// bad, X (to move) needs a single bad child. Leaves without an X win are not
/// bad, so draws and O wins are not told apart.
///
/// Results are cached per [`NodeId`]. The tree stays borrowed for the
/// evaluator's lifetime, so cached flags cannot go stale.
#[derive(Debug)]
pub struct Evaluator<'a> {
    tree: &'a GameTree,
    memo: Vec<Option<bool>>,
}

impl<'a> Evaluator<'a> {
    pub fn new(tree: &'a GameTree) -> Self {
        Self {
            tree,
            memo: vec![None; tree.node_count()],
        }
    }

    pub fn is_bad(&mut self, id: NodeId) -> bool {
        if let Some(bad) = self.memo[id.index()] {
            return bad;
        }

        let tree = self.tree;
        let node = tree.node(id);
        let board = node.board();
        let bad = if board.did_win(Player::X) {
            true
        } else if node.is_leaf() {
            false
        } else if board.active_player() == Player::O {
            node.children().iter().all(|&child| self.is_bad(child))
        } else {
            node.children().iter().any(|&child| self.is_bad(child))
        };

        self.memo[id.index()] = Some(bad);
        bad
    }

    /// Flag for every node, indexed by [`NodeId::index`]
    pub fn evaluate_all(mut self) -> Vec<bool> {
        (0..self.tree.node_count())
            .map(|i| self.is_bad(NodeId::from(i)))
            .collect()
    }
}

/// Uncached evaluation; recomputes shared subgraphs once per path.
pub fn is_bad_uncached(tree: &GameTree, id: NodeId) -> bool {
    let node = tree.node(id);
    let board = node.board();
    if board.did_win(Player::X) {
        true
    } else if node.is_leaf() {
        false
    } else if board.active_player() == Player::O {
        node.children().iter().all(|&c| is_bad_uncached(tree, c))
    } else {
        node.children().iter().any(|&c| is_bad_uncached(tree, c))
    }
}

impl GameTree {
    /// One-shot badness of a single node
    pub fn is_bad(&self, id: NodeId) -> bool {
        Evaluator::new(self).is_bad(id)
    }

    /// Badness of every node, indexed by [`NodeId::index`]
    pub fn bad_flags(&self) -> Vec<bool> {
        Evaluator::new(self).evaluate_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::BuildConfig;

    #[test]
    fn unexpanded_leaves_are_not_bad() {
        let tree = GameTree::new();
        assert!(!tree.is_bad(tree.root()));
    }

    #[test]
    fn memoized_and_uncached_agree() {
        let tree = GameTree::build(&BuildConfig::new(6).unwrap());
        let flags = tree.bad_flags();
        for (id, _) in tree.iter() {
            assert_eq!(flags[id.index()], is_bad_uncached(&tree, id), "node {id}");
        }
    }

    #[test]
    fn bad_nodes_follow_and_or_rule() {
        let tree = GameTree::full();
        let flags = tree.bad_flags();
        for (id, node) in tree.iter() {
            let board = node.board();
            if board.did_win(Player::X) {
                assert!(flags[id.index()]);
                continue;
            }
            let child_flags: Vec<bool> = node
                .children()
                .iter()
                .map(|c| flags[c.index()])
                .collect();
            let expected = match (child_flags.is_empty(), board.active_player()) {
                (true, _) => false,
                (false, Player::O) => child_flags.iter().all(|&b| b),
                (false, Player::X) => child_flags.iter().any(|&b| b),
            };
            assert_eq!(flags[id.index()], expected, "node {id}");
        }
    }
}
