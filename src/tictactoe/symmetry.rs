//! D4 symmetry group operations for board equivalence

use serde::{Deserialize, Serialize};

use super::board::{Board, Cell};

/// D4 symmetry transformation (dihedral group of the square)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct D4Transform {
    /// Clockwise rotation in degrees (0, 90, 180, 270)
    pub rotation: u16,
    /// Whether to mirror across the vertical axis before rotating
    pub reflection: bool,
}

impl D4Transform {
    /// Create identity transform
    pub fn identity() -> Self {
        D4Transform {
            rotation: 0,
            reflection: false,
        }
    }

    /// Clockwise quarter turn
    pub fn rotate_cw() -> Self {
        D4Transform {
            rotation: 90,
            reflection: false,
        }
    }

    /// Left-right mirror (swaps columns 0 and 2)
    pub fn reflect() -> Self {
        D4Transform {
            rotation: 0,
            reflection: true,
        }
    }

    /// All 8 elements: the 4 rotations, then the reflection followed by each rotation
    pub fn all() -> [D4Transform; 8] {
        let mut transforms = [D4Transform::identity(); 8];
        for (i, rotation) in [0, 90, 180, 270].into_iter().enumerate() {
            transforms[i] = D4Transform {
                rotation,
                reflection: false,
            };
            transforms[i + 4] = D4Transform {
                rotation,
                reflection: true,
            };
        }
        transforms
    }

    /// Apply transform to a position (0-8)
    pub fn transform_position(&self, pos: usize) -> usize {
        let (mut row, mut col) = (pos / 3, pos % 3);

        if self.reflection {
            col = 2 - col;
        }

        // (r, c) -> (c, 2 - r) per quarter turn, i.e. new[r][c] = old[2 - c][r]
        for _ in 0..(self.rotation / 90) {
            let new_row = col;
            let new_col = 2 - row;
            row = new_row;
            col = new_col;
        }

        row * 3 + col
    }

    /// Apply transform to an array of cells
    pub fn apply_to_cells(&self, cells: &[Cell; 9]) -> [Cell; 9] {
        let mut transformed = [Cell::Empty; 9];
        for (idx, &cell) in cells.iter().enumerate() {
            transformed[self.transform_position(idx)] = cell;
        }
        transformed
    }

    /// Get the inverse transform
    pub fn inverse(&self) -> D4Transform {
        if self.reflection {
            // reflect-then-rotate elements are all involutions
            *self
        } else {
            D4Transform {
                rotation: (360 - self.rotation) % 360,
                reflection: false,
            }
        }
    }
}

impl Board {
    /// Apply a D4 transform to the board
    #[must_use = "transform returns a new board; the receiver is unchanged"]
    pub fn transform(&self, t: &D4Transform) -> Self {
        Board::from_cells(t.apply_to_cells(self.cells()))
    }

    /// The 8 images of this board, in [`D4Transform::all`] order.
    ///
    /// Images may repeat when the board has a non-trivial stabilizer.
    pub fn symmetries(&self) -> [Board; 8] {
        D4Transform::all().map(|t| self.transform(&t))
    }

    /// True iff `other` is one of the 8 images of this board
    pub fn equivalent_to(&self, other: &Board) -> bool {
        self == other || D4Transform::all().iter().any(|t| self.transform(t) == *other)
    }

    /// The lexicographically smallest image under D4 (by encoding).
    ///
    /// Equivalent boards share the same canonical form, so this serves as a
    /// hash key for equivalence classes.
    pub fn canonical(&self) -> Self {
        self.canonical_with_transform().0
    }

    /// Canonical form together with the transform that produces it
    pub fn canonical_with_transform(&self) -> (Board, D4Transform) {
        let mut best = (*self, D4Transform::identity());
        let mut best_encoding = self.encode();

        for transform in D4Transform::all() {
            let transformed = self.transform(&transform);
            let encoding = transformed.encode();
            if encoding < best_encoding {
                best_encoding = encoding;
                best = (transformed, transform);
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Player;

    fn sample_board() -> Board {
        // O X .
        // . O .
        // X . .
        Board::from_string("OX..O.X..").unwrap()
    }

    #[test]
    fn test_rotation_matches_index_formula() {
        let board = sample_board();
        let rotated = board.transform(&D4Transform::rotate_cw());
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(rotated.get(r, c), board.get(2 - c, r));
            }
        }
    }

    #[test]
    fn test_reflection_swaps_outer_columns() {
        let board = sample_board();
        let mirrored = board.transform(&D4Transform::reflect());
        for r in 0..3 {
            assert_eq!(mirrored.get(r, 0), board.get(r, 2));
            assert_eq!(mirrored.get(r, 1), board.get(r, 1));
            assert_eq!(mirrored.get(r, 2), board.get(r, 0));
        }
    }

    #[test]
    fn test_four_rotations_are_identity() {
        let board = sample_board();
        let mut current = board;
        for _ in 0..4 {
            current = current.transform(&D4Transform::rotate_cw());
        }
        assert_eq!(current, board);
    }

    #[test]
    fn test_reflected_rotations_compose_reflect_then_rotate() {
        let board = sample_board();
        let mut expected = board.transform(&D4Transform::reflect());
        for t in &D4Transform::all()[4..] {
            assert_eq!(board.transform(t), expected);
            expected = expected.transform(&D4Transform::rotate_cw());
        }
    }

    #[test]
    fn test_inverse_undoes_transform() {
        let board = sample_board();
        for t in D4Transform::all() {
            assert_eq!(board.transform(&t).transform(&t.inverse()), board);
        }
    }

    #[test]
    fn test_asymmetric_board_has_eight_distinct_images() {
        let board = sample_board();
        let images = board.symmetries();
        for i in 0..8 {
            for j in (i + 1)..8 {
                assert_ne!(images[i], images[j], "images {i} and {j} coincide");
            }
        }
    }

    #[test]
    fn test_equivalence_is_reflexive_and_symmetric() {
        let board = sample_board();
        assert!(board.equivalent_to(&board));
        for image in board.symmetries() {
            assert!(image.equivalent_to(&board));
            assert!(board.equivalent_to(&image));
        }
    }

    #[test]
    fn test_corner_and_edge_are_not_equivalent() {
        let corner = Board::new().with_mark(0, Player::O);
        let edge = Board::new().with_mark(1, Player::O);
        let center = Board::new().with_mark(4, Player::O);

        assert!(corner.equivalent_to(&Board::new().with_mark(8, Player::O)));
        assert!(edge.equivalent_to(&Board::new().with_mark(5, Player::O)));
        assert!(!corner.equivalent_to(&edge));
        assert!(!corner.equivalent_to(&center));
        assert!(!edge.equivalent_to(&center));
    }

    #[test]
    fn test_canonical_form_agrees_with_equivalence() {
        let board = sample_board();
        let canonical = board.canonical();
        for image in board.symmetries() {
            assert_eq!(image.canonical(), canonical);
        }
        let (canonical_again, transform) = board.canonical_with_transform();
        assert_eq!(canonical_again, canonical);
        assert_eq!(board.transform(&transform), canonical);
    }
}
