//! Line enumeration and per-line predicates

use serde::{Deserialize, Serialize};

use super::{Cell, Player};

/// Cell indices of the 8 lines, in scan order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// One of the 8 lines of the board.
///
/// The declaration order is the scan order used by forced moves: when several
/// lines qualify, the earliest in [`LineKind::ALL`] wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    TopRow,
    MiddleRow,
    BottomRow,
    LeftColumn,
    MiddleColumn,
    RightColumn,
    /// Top-left to bottom-right
    MainDiagonal,
    /// Top-right to bottom-left
    AntiDiagonal,
}

impl LineKind {
    pub const ALL: [LineKind; 8] = [
        LineKind::TopRow,
        LineKind::MiddleRow,
        LineKind::BottomRow,
        LineKind::LeftColumn,
        LineKind::MiddleColumn,
        LineKind::RightColumn,
        LineKind::MainDiagonal,
        LineKind::AntiDiagonal,
    ];

    /// Board positions (0-8, row-major) covered by this line
    pub fn positions(self) -> [usize; 3] {
        WINNING_LINES[self as usize]
    }
}

/// Predicates over the three cells of a single line
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// All three cells belong to `player`
    pub fn is_complete(line: &[Cell; 3], player: Player) -> bool {
        let target = player.to_cell();
        line.iter().all(|&c| c == target)
    }

    /// Exactly two cells belong to `player` and the third is empty
    pub fn is_close_to_win(line: &[Cell; 3], player: Player) -> bool {
        let target = player.to_cell();
        let owned = line.iter().filter(|&&c| c == target).count();
        let empty = line.iter().filter(|&&c| c == Cell::Empty).count();
        owned == 2 && empty == 1
    }

    /// Both players have a mark in the line, so nobody can complete it
    pub fn is_contested(line: &[Cell; 3]) -> bool {
        line.contains(&Cell::O) && line.contains(&Cell::X)
    }
}
