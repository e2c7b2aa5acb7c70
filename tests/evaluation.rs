//! Badness evaluation over the built DAG.

use tictree::{
    Player,
    tree::{BuildConfig, Evaluator, GameTree, is_bad_uncached},
};

#[test]
fn flags_follow_the_min_max_rule() {
    let tree = GameTree::full();
    let bad = tree.bad_flags();

    for (id, node) in tree.iter() {
        let board = node.board();
        let expected = if board.did_win(Player::X) {
            true
        } else if node.is_leaf() {
            false
        } else if board.active_player() == Player::O {
            node.children().iter().all(|c| bad[c.index()])
        } else {
            node.children().iter().any(|c| bad[c.index()])
        };
        assert_eq!(bad[id.index()], expected, "node {id}");
    }
}

#[test]
fn memoized_and_uncached_agree() {
    let tree = GameTree::build(&BuildConfig::new(7).unwrap());
    let mut evaluator = Evaluator::new(&tree);
    for (id, _) in tree.iter() {
        assert_eq!(evaluator.is_bad(id), is_bad_uncached(&tree, id));
    }
}

#[test]
fn o_wins_and_draws_are_not_bad() {
    let tree = GameTree::full();
    let bad = tree.bad_flags();
    for (id, node) in tree.iter() {
        let board = node.board();
        if node.is_leaf() && !board.did_win(Player::X) {
            assert!(!bad[id.index()]);
        }
    }
}

#[test]
fn shallow_trees_have_no_bad_nodes() {
    // no X win is reachable before the eighth placement
    let tree = GameTree::build(&BuildConfig::new(5).unwrap());
    assert!(tree.bad_flags().iter().all(|&b| !b));
}
