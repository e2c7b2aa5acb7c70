//! Tic-tac-toe scenario DAG
//!
//! This crate provides:
//! - A 3×3 board with line analysis, forced win/block moves and D4 symmetry
//! - A level-by-level builder that merges symmetric positions into a DAG
//! - An evaluator marking positions where X can force a win against O
//! - Graphviz and JSON renderings, and the `tictree` command-line driver

pub mod cli;
pub mod error;
pub mod identifiers;
pub mod ports;
pub mod render;
pub mod tictactoe;
pub mod tree;

pub use error::{Error, Result};
pub use identifiers::{DisplayId, NodeId};
pub use tictactoe::{Board, Cell, Player};
pub use tree::{BuildConfig, GameTree};
