use crate::board::Board;
use crate::types::*;

/// The turn state machine. Owns the board outright; legality evaluation
/// borrows it read-only and the move application below is the only writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub board: Board,
    pub side_to_move: Side,
}

impl Game {
    /// Fresh game: starting layout, White to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            side_to_move: Side::White,
        }
    }

    /// Attempt one move for the side to move. On success the destination
    /// occupant (if any) is captured by overwrite, the mover is relocated
    /// and the turn flips; returns true. On any rejection the board and the
    /// turn flag are untouched and the result is false. An empty source, a
    /// piece of the wrong side and a failed shape rule are deliberately
    /// indistinguishable to the caller.
    pub fn try_make_move(&mut self, mv: Move) -> bool {
        let piece = match self.board.get_piece(mv.from) {
            Some(piece) => piece,
            None => return false,
        };

        if piece.side != self.side_to_move {
            return false;
        }

        if !self.board.is_legal_move(mv) {
            return false;
        }

        self.board.set_piece(mv.to, Some(piece));
        self.board.set_piece(mv.from, None);
        self.side_to_move = self.side_to_move.opposite();
        true
    }

    /// The session ends as soon as the total king census, both sides
    /// combined, is anything other than 2.
    pub fn is_over(&self) -> bool {
        self.board.king_count() != 2
    }

    pub fn status(&self) -> GameStatus {
        if self.is_over() {
            GameStatus::Won(self.winner())
        } else {
            GameStatus::InProgress
        }
    }

    /// The reported winner is the turn flag flipped once more past the
    /// post-move flip, i.e. the side that did not just move. With the king
    /// census ending the game this is the side that delivered the capture.
    pub fn winner(&self) -> Side {
        self.side_to_move.opposite()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
