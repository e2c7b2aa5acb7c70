//! Board representation, turn parity and forced-move heuristics

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::{LineAnalyzer, LineKind};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    O,
    X,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::O => 'O',
            Cell::X => 'X',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            'O' | 'o' => Some(Cell::O),
            'X' | 'x' => Some(Cell::X),
            _ => None,
        }
    }
}

/// A player in the game. `O` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    O,
    X,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::O => Cell::O,
            Player::X => Cell::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A 3x3 board stored row-major.
///
/// Boards are plain values: every operation that derives a new position works
/// on a copy, and the player to move is recomputed from the vacant-cell count
/// instead of being stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Board { cells }
    }

    /// Parse a board from 9 cell characters, row-major.
    ///
    /// Whitespace and `/` separators are ignored; `.` and `-` mark empty
    /// cells.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string does not contain exactly 9 cells
    /// - Any character is not a valid cell representation
    /// - The piece counts cannot arise with O moving first
    ///
    /// # Examples
    ///
    /// ```
    /// use tictree::tictactoe::{Board, Player};
    ///
    /// let board = Board::from_string("O.. / .X. / ...").unwrap();
    /// assert_eq!(board.active_player(), Player::O);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let board = Board { cells };
        let o_count = board.count(Cell::O);
        let x_count = board.count(Cell::X);
        if o_count != x_count && o_count != x_count + 1 {
            return Err(crate::Error::InvalidPieceCounts { o_count, x_count });
        }

        Ok(board)
    }

    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Cell at `row`, `col` (both 0-2)
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * 3 + col]
    }

    /// Cell at a row-major position (0-8)
    pub fn cell(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn vacant_count(&self) -> usize {
        self.count(Cell::Empty)
    }

    /// Empty positions in row-major order
    pub fn vacant_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// The player whose mark goes next: O on an odd vacant count, X on even.
    pub fn active_player(&self) -> Player {
        if self.vacant_count() % 2 == 1 {
            Player::O
        } else {
            Player::X
        }
    }

    /// Put `player`'s mark on an empty position.
    ///
    /// # Panics
    ///
    /// Panics if the position is occupied.
    pub fn place(&mut self, pos: usize, player: Player) {
        assert_eq!(
            self.cells[pos],
            Cell::Empty,
            "position {pos} is already occupied"
        );
        self.cells[pos] = player.to_cell();
    }

    /// Copy of this board with `player`'s mark added at `pos`
    #[must_use = "with_mark returns a new board; the receiver is unchanged"]
    pub fn with_mark(&self, pos: usize, player: Player) -> Board {
        let mut next = *self;
        next.place(pos, player);
        next
    }

    pub fn line(&self, kind: LineKind) -> [Cell; 3] {
        kind.positions().map(|pos| self.cells[pos])
    }

    pub fn set_line(&mut self, kind: LineKind, line: [Cell; 3]) {
        for (pos, cell) in kind.positions().into_iter().zip(line) {
            self.cells[pos] = cell;
        }
    }

    /// The 8 lines in [`LineKind::ALL`] order
    pub fn lines(&self) -> [[Cell; 3]; 8] {
        LineKind::ALL.map(|kind| self.line(kind))
    }

    /// First line, in scan order, where `player` has two marks and one gap
    pub fn first_close_line(&self, player: Player) -> Option<LineKind> {
        LineKind::ALL
            .into_iter()
            .find(|&kind| LineAnalyzer::is_close_to_win(&self.line(kind), player))
    }

    /// `player` can complete a line with their next mark
    pub fn close_to_win(&self, player: Player) -> bool {
        self.first_close_line(player).is_some()
    }

    /// Complete the first line that is close to win for `player`.
    ///
    /// # Panics
    ///
    /// Panics unless [`close_to_win(player)`](Self::close_to_win) holds.
    pub fn win(&mut self, player: Player) {
        let Some(kind) = self.first_close_line(player) else {
            panic!("win({player}) requires a line close to win on\n{self}");
        };
        self.set_line(kind, [player.to_cell(); 3]);
    }

    /// Fill the gap of the first line that `threatening` is close to winning
    /// with the defender's mark.
    ///
    /// # Panics
    ///
    /// Panics unless [`close_to_win(threatening)`](Self::close_to_win) holds.
    pub fn block(&mut self, threatening: Player) {
        let Some(kind) = self.first_close_line(threatening) else {
            panic!("block({threatening}) requires a line close to win on\n{self}");
        };
        let defender = threatening.opponent().to_cell();
        let line = self
            .line(kind)
            .map(|c| if c == Cell::Empty { defender } else { c });
        self.set_line(kind, line);
    }

    /// No line can be completed by anyone any more.
    ///
    /// This is a structural test, not a full-board test: a board with empty
    /// cells is a draw once every line holds both marks.
    pub fn is_draw(&self) -> bool {
        self.lines().iter().all(LineAnalyzer::is_contested)
    }

    /// `player` owns an entire line
    pub fn did_win(&self, player: Player) -> bool {
        self.lines()
            .iter()
            .any(|line| LineAnalyzer::is_complete(line, player))
    }

    /// 9-character row-major encoding using `.`, `O` and `X`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.vacant_count(), 9);
        assert_eq!(board.active_player(), Player::O);
        assert!(board.cells().iter().all(|&c| c == Cell::Empty));
    }

    #[test]
    fn test_player_alternation() {
        let mut board = Board::new();
        let mut expected = Player::O;
        for pos in [4, 0, 8, 2, 6, 3, 5, 1, 7] {
            assert_eq!(board.active_player(), expected);
            board.place(pos, expected);
            expected = expected.opponent();
        }
        assert_eq!(board.vacant_count(), 0);
    }

    #[test]
    fn test_parity_ignores_which_cells_are_filled() {
        for pos in 0..9 {
            let board = Board::new().with_mark(pos, Player::O);
            assert_eq!(board.active_player(), Player::X);
        }
    }

    #[test]
    fn test_lines_in_scan_order() {
        let board = Board::from_string("OX. .O. X..").unwrap();
        let lines = board.lines();
        assert_eq!(lines[0], [Cell::O, Cell::X, Cell::Empty]);
        assert_eq!(lines[3], [Cell::O, Cell::Empty, Cell::X]);
        assert_eq!(lines[6], [Cell::O, Cell::O, Cell::Empty]);
        assert_eq!(lines[7], [Cell::Empty, Cell::O, Cell::X]);
    }

    #[test]
    fn test_set_line_writes_through() {
        let mut board = Board::new();
        board.set_line(LineKind::MiddleColumn, [Cell::O, Cell::X, Cell::O]);
        assert_eq!(board.encode(), ".O..X..O.");
    }

    #[test]
    fn test_win_completes_line() {
        let mut board = Board::from_string("OO. X.. ...").unwrap();
        assert!(board.close_to_win(Player::O));
        assert!(!board.close_to_win(Player::X));

        board.win(Player::O);
        assert_eq!(board.line(LineKind::TopRow), [Cell::O; 3]);
        assert!(board.did_win(Player::O));
        assert!(!board.did_win(Player::X));
    }

    #[test]
    fn test_win_picks_first_line_in_scan_order() {
        // O O .
        // O X X
        // . X .
        // Top row and left column are both open for O; the top row comes first.
        let mut board = Board::from_string("OO. OXX .X.").unwrap();
        board.win(Player::O);
        assert_eq!(board.encode(), "OOOOXX.X.");
    }

    #[test]
    fn test_block_fills_gap_with_defender() {
        // X X .
        // O . .
        // . . O
        let before = Board::from_string("XX. O.. ..O").unwrap();
        let mut board = before;
        assert_eq!(board.active_player(), Player::O);
        assert!(board.close_to_win(Player::X));

        board.block(Player::X);
        assert_eq!(board.cell(2), Cell::O);
        assert!(!board.close_to_win(Player::X));
        for pos in (0..9).filter(|&p| p != 2) {
            assert_eq!(board.cell(pos), before.cell(pos));
        }
    }

    #[test]
    #[should_panic(expected = "requires a line close to win")]
    fn test_win_without_threat_panics() {
        let mut board = Board::new().with_mark(4, Player::O);
        board.win(Player::O);
    }

    #[test]
    #[should_panic(expected = "requires a line close to win")]
    fn test_block_without_threat_panics() {
        let mut board = Board::new();
        board.block(Player::X);
    }

    #[test]
    fn test_draw_is_structural() {
        // . O X
        // X O O
        // O X X
        // Every line holds both marks although a cell is still empty.
        let board = Board::from_string(".OX XOO OXX").unwrap();
        assert!(board.is_draw());
        assert!(!board.did_win(Player::O));
        assert!(!board.did_win(Player::X));

        let open = Board::from_string("OX. ... ...").unwrap();
        assert!(!open.is_draw());
    }

    #[test]
    fn test_did_win_diagonal() {
        let board = Board::from_string("X.O .XO O.X").unwrap();
        assert!(board.did_win(Player::X));
        assert!(!board.did_win(Player::O));
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("O-X-O----").unwrap();
        assert_eq!(board.get(0, 0), Cell::O);
        assert_eq!(board.get(0, 2), Cell::X);
        assert_eq!(board.get(1, 1), Cell::O);
        assert_eq!(board.active_player(), Player::X);

        let result = Board::from_string("OX");
        assert!(matches!(
            result,
            Err(crate::Error::InvalidBoardLength { got: 2, .. })
        ));

        let result = Board::from_string("OXZ......");
        assert!(matches!(
            result,
            Err(crate::Error::InvalidCellCharacter { character: 'Z', .. })
        ));
    }

    #[test]
    fn test_cell_characters() {
        assert_eq!(Cell::from_char('.'), Some(Cell::Empty));
        assert_eq!(Cell::from_char('-'), Some(Cell::Empty));
        assert_eq!(Cell::from_char('o'), Some(Cell::O));
        assert_eq!(Cell::from_char('x'), Some(Cell::X));
        assert_eq!(Cell::from_char('0'), None);
        assert_eq!(Cell::from_char(' '), None);

        let result = Board::from_string("0X.......");
        assert!(matches!(
            result,
            Err(crate::Error::InvalidCellCharacter {
                character: '0',
                position: 0,
                ..
            })
        ));
    }

    #[test]
    fn test_from_string_rejects_x_first() {
        let err = Board::from_string("X........").unwrap_err();
        assert!(err.to_string().contains("O=0, X=1"), "got {err}");
    }

    #[test]
    #[should_panic(expected = "already occupied")]
    fn test_place_on_occupied_cell_panics() {
        let mut board = Board::new().with_mark(4, Player::O);
        board.place(4, Player::X);
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("OXO.X.O..").unwrap();
        assert_eq!(format!("{board}"), "OXO\n.X.\nO..");
    }
}
