use super::Board;
use crate::types::*;

impl Board {
    /// Shared legality check for any attempted move: a destination occupied
    /// by a piece of the mover's own side is always illegal, regardless of
    /// the piece's shape rule. Otherwise the kind-specific predicate decides.
    ///
    /// Returns false when the source square is empty.
    pub fn is_legal_move(&self, mv: Move) -> bool {
        let piece = match self.get_piece(mv.from) {
            Some(piece) => piece,
            None => return false,
        };

        if let Some(destination) = self.get_piece(mv.to) {
            if destination.side == piece.side {
                return false;
            }
        }

        self.is_legal_piece_move(piece, mv)
    }

    /// True when every square strictly between `from` and `to` along a shared
    /// row or column is empty. The endpoints themselves are never inspected;
    /// adjacent squares are vacuously clear. Square pairs that share neither
    /// a row nor a column always fail.
    pub fn linear_path_clear(&self, from: Square, to: Square) -> bool {
        if from.col() == to.col() {
            let col = from.col();
            let (low, high) = if from.row() < to.row() {
                (from.row(), to.row())
            } else {
                (to.row(), from.row())
            };
            for row in (low + 1)..high {
                if self.get_piece(Square::new(row, col)).is_some() {
                    return false;
                }
            }
            true
        } else if from.row() == to.row() {
            let row = from.row();
            let (low, high) = if from.col() < to.col() {
                (from.col(), to.col())
            } else {
                (to.col(), from.col())
            };
            for col in (low + 1)..high {
                if self.get_piece(Square::new(row, col)).is_some() {
                    return false;
                }
            }
            true
        } else {
            false
        }
    }

    /// Diagonal counterpart of `linear_path_clear`: the row and column deltas
    /// must match in magnitude and be nonzero. The walk steps one square at a
    /// time in the compass direction given by the delta signs.
    pub fn diagonal_path_clear(&self, from: Square, to: Square) -> bool {
        let row_delta = to.row() as i8 - from.row() as i8;
        let col_delta = to.col() as i8 - from.col() as i8;

        if row_delta.abs() != col_delta.abs() || row_delta == 0 {
            return false;
        }

        let row_step = row_delta.signum();
        let col_step = col_delta.signum();
        let mut row = from.row() as i8 + row_step;
        let mut col = from.col() as i8 + col_step;

        while row != to.row() as i8 {
            if self.get_piece(Square::new(row as u8, col as u8)).is_some() {
                return false;
            }
            row += row_step;
            col += col_step;
        }

        true
    }
}
