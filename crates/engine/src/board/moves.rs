use super::Board;
use crate::types::*;

impl Board {
    /// Kind-specific shape rule for a move whose destination has already
    /// passed the shared gate (empty, or held by an enemy piece).
    pub(crate) fn is_legal_piece_move(&self, piece: Piece, mv: Move) -> bool {
        match piece.kind {
            PieceKind::King => self.king_move_legal(mv),
            PieceKind::Queen => self.queen_move_legal(mv),
            PieceKind::Bishop => self.bishop_move_legal(mv),
            PieceKind::Knight => self.knight_move_legal(mv),
            PieceKind::Rook => self.rook_move_legal(mv),
            PieceKind::Pawn => self.pawn_move_legal(piece.side, mv),
        }
    }

    /// Any of the 8 adjacent squares. No safety check: whether the square is
    /// attacked is not this rule set's concern, and friendly occupancy was
    /// already handled by the gate.
    fn king_move_legal(&self, mv: Move) -> bool {
        let row_delta = mv.to.row() as i8 - mv.from.row() as i8;
        let col_delta = mv.to.col() as i8 - mv.from.col() as i8;
        (-1..=1).contains(&row_delta) && (-1..=1).contains(&col_delta)
    }

    fn queen_move_legal(&self, mv: Move) -> bool {
        self.linear_path_clear(mv.from, mv.to) || self.diagonal_path_clear(mv.from, mv.to)
    }

    fn rook_move_legal(&self, mv: Move) -> bool {
        self.linear_path_clear(mv.from, mv.to)
    }

    fn bishop_move_legal(&self, mv: Move) -> bool {
        self.diagonal_path_clear(mv.from, mv.to)
    }

    /// The L-jump. Intervening occupancy is irrelevant.
    fn knight_move_legal(&self, mv: Move) -> bool {
        let row_delta = (mv.to.row() as i8 - mv.from.row() as i8).abs();
        let col_delta = (mv.to.col() as i8 - mv.from.col() as i8).abs();
        (row_delta == 1 && col_delta == 2) || (row_delta == 2 && col_delta == 1)
    }

    /// Two disjoint cases split on destination occupancy: a single straight
    /// step forward onto an empty square, or a single diagonal step forward
    /// onto an occupied one (necessarily an enemy, the gate guarantees it).
    /// No double step from the home row and no capture straight ahead.
    fn pawn_move_legal(&self, side: Side, mv: Move) -> bool {
        let forward: i8 = match side {
            Side::White => -1,
            Side::Black => 1,
        };
        let row_delta = mv.to.row() as i8 - mv.from.row() as i8;
        let col_delta = mv.to.col() as i8 - mv.from.col() as i8;

        match self.get_piece(mv.to) {
            None => row_delta == forward && col_delta == 0,
            Some(_) => row_delta == forward && col_delta.abs() == 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, row: u8, col: u8, side: Side, kind: PieceKind) {
        board.set_piece(Square::new(row, col), Some(Piece::new(side, kind)));
    }

    fn mv(from: (u8, u8), to: (u8, u8)) -> Move {
        Move::new(Square::new(from.0, from.1), Square::new(to.0, to.1))
    }

    #[test]
    fn test_king_single_step_any_direction() {
        let mut board = Board::empty();
        place(&mut board, 4, 4, Side::White, PieceKind::King);

        for (row, col) in [
            (3, 3), (3, 4), (3, 5),
            (4, 3),         (4, 5),
            (5, 3), (5, 4), (5, 5),
        ] {
            assert!(
                board.is_legal_move(mv((4, 4), (row, col))),
                "King should step to ({}, {})",
                row,
                col
            );
        }
    }

    #[test]
    fn test_king_rejects_longer_steps() {
        let mut board = Board::empty();
        place(&mut board, 4, 4, Side::White, PieceKind::King);

        assert!(!board.is_legal_move(mv((4, 4), (2, 4))), "Two squares up is not a king move");
        assert!(!board.is_legal_move(mv((4, 4), (6, 6))), "Two squares diagonally is not a king move");
        assert!(!board.is_legal_move(mv((4, 4), (4, 0))));
    }

    #[test]
    fn test_king_relies_on_gate_for_friendly_squares() {
        let mut board = Board::empty();
        place(&mut board, 4, 4, Side::White, PieceKind::King);
        place(&mut board, 4, 5, Side::White, PieceKind::Pawn);
        place(&mut board, 3, 4, Side::Black, PieceKind::Pawn);

        assert!(!board.is_legal_move(mv((4, 4), (4, 5))), "Own pawn blocks the king");
        assert!(board.is_legal_move(mv((4, 4), (3, 4))), "Enemy pawn can be captured");
    }

    #[test]
    fn test_rook_moves_and_blocks() {
        let mut board = Board::empty();
        place(&mut board, 4, 4, Side::White, PieceKind::Rook);
        place(&mut board, 4, 6, Side::Black, PieceKind::Pawn);

        assert!(board.is_legal_move(mv((4, 4), (0, 4))), "Open column should be reachable");
        assert!(board.is_legal_move(mv((4, 4), (4, 6))), "First enemy on the row is capturable");
        assert!(!board.is_legal_move(mv((4, 4), (4, 7))), "Squares beyond a blocker are not");
        assert!(!board.is_legal_move(mv((4, 4), (2, 6))), "Rooks never move diagonally");
    }

    #[test]
    fn test_bishop_moves_and_blocks() {
        let mut board = Board::empty();
        place(&mut board, 4, 4, Side::White, PieceKind::Bishop);
        place(&mut board, 2, 2, Side::Black, PieceKind::Pawn);

        assert!(board.is_legal_move(mv((4, 4), (7, 7))), "Open diagonal should be reachable");
        assert!(board.is_legal_move(mv((4, 4), (2, 2))), "First enemy on the diagonal is capturable");
        assert!(!board.is_legal_move(mv((4, 4), (1, 1))), "Squares beyond a blocker are not");
        assert!(!board.is_legal_move(mv((4, 4), (4, 0))), "Bishops never move linearly");
    }

    #[test]
    fn test_queen_combines_both_rays() {
        let mut board = Board::empty();
        place(&mut board, 4, 4, Side::White, PieceKind::Queen);
        place(&mut board, 4, 6, Side::White, PieceKind::Pawn);

        assert!(board.is_legal_move(mv((4, 4), (0, 4))), "Linear ray");
        assert!(board.is_legal_move(mv((4, 4), (0, 0))), "Diagonal ray");
        assert!(!board.is_legal_move(mv((4, 4), (4, 7))), "Blocked linear ray");
        assert!(!board.is_legal_move(mv((4, 4), (6, 5))), "Neither ray shape");
    }

    #[test]
    fn test_knight_jumps_ignore_occupancy() {
        let board = Board::new();

        // From the starting layout, over the pawn row
        assert!(board.is_legal_move(mv((7, 1), (5, 0))), "Knight jumps over intervening pieces");
        assert!(board.is_legal_move(mv((7, 1), (5, 2))));
        assert!(!board.is_legal_move(mv((7, 1), (4, 1))), "Straight hops are not knight moves");
        assert!(!board.is_legal_move(mv((7, 1), (5, 1))));
    }

    #[test]
    fn test_knight_l_shapes() {
        let mut board = Board::empty();
        place(&mut board, 4, 4, Side::Black, PieceKind::Knight);

        for (row, col) in [(2, 3), (2, 5), (3, 2), (3, 6), (5, 2), (5, 6), (6, 3), (6, 5)] {
            assert!(
                board.is_legal_move(mv((4, 4), (row, col))),
                "Knight should reach ({}, {})",
                row,
                col
            );
        }
        assert!(!board.is_legal_move(mv((4, 4), (6, 6))), "Equal deltas are not an L");
    }

    #[test]
    fn test_white_pawn_forward_step() {
        let board = Board::new();

        assert!(board.is_legal_move(mv((6, 0), (5, 0))), "One step toward row 0");
        assert!(!board.is_legal_move(mv((6, 0), (4, 0))), "No double step from the home row");
        assert!(!board.is_legal_move(mv((6, 0), (7, 0))), "No backward step");
    }

    #[test]
    fn test_black_pawn_forward_step() {
        let board = Board::new();

        assert!(board.is_legal_move(mv((1, 3), (2, 3))), "One step toward row 7");
        assert!(!board.is_legal_move(mv((1, 3), (3, 3))), "No double step from the home row");
        assert!(!board.is_legal_move(mv((1, 3), (0, 3))), "No backward step");
    }

    #[test]
    fn test_pawn_diagonal_requires_occupied_destination() {
        let mut board = Board::empty();
        place(&mut board, 5, 0, Side::White, PieceKind::Pawn);

        assert!(!board.is_legal_move(mv((5, 0), (4, 1))), "Diagonal step onto an empty square is illegal");

        place(&mut board, 4, 1, Side::Black, PieceKind::Knight);
        assert!(board.is_legal_move(mv((5, 0), (4, 1))), "Diagonal capture of an enemy is legal");
    }

    #[test]
    fn test_pawn_cannot_capture_straight_ahead() {
        let mut board = Board::empty();
        place(&mut board, 5, 4, Side::White, PieceKind::Pawn);
        place(&mut board, 4, 4, Side::Black, PieceKind::Pawn);

        assert!(!board.is_legal_move(mv((5, 4), (4, 4))), "Occupied square ahead blocks the pawn");
    }

    #[test]
    fn test_pawn_diagonal_must_be_forward() {
        let mut board = Board::empty();
        place(&mut board, 5, 4, Side::White, PieceKind::Pawn);
        place(&mut board, 6, 5, Side::Black, PieceKind::Knight);

        assert!(!board.is_legal_move(mv((5, 4), (6, 5))), "Backward diagonal capture is illegal");
    }
}
