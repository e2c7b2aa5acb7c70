//! Tic-Tac-Toe board, lines and symmetries

pub mod board;
pub mod lines;
pub mod symmetry;

pub use board::{Board, Cell, Player};
pub use lines::{LineAnalyzer, LineKind, WINNING_LINES};
pub use symmetry::D4Transform;
