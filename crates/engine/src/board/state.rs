use crate::errors::MoveError;
use crate::types::*;
use super::validation::{castling_rook_square, castling_rook_target};
use super::Board;

impl Board {
    /// Execute a move. Every check runs before the first mutation, so a failed move leaves
    /// the board untouched. The returned record is the one now on top of the history.
    pub fn try_move(&mut self, start: Square, end: Square) -> Result<&GameMove, MoveError> {
        let game_move = match self.check_move(start, end)? {
            MoveKind::Castle { .. } => self.execute_castling(start, end)?,
            MoveKind::Standard => self.execute_standard(start, end)?,
        };

        self.bump_counter(game_move.color(), true);
        self.move_history.push(game_move);
        Ok(&self.move_history[self.move_history.len() - 1])
    }

    /// Boolean form of [`Board::try_move`].
    pub fn move_piece(&mut self, start: Square, end: Square) -> bool {
        self.try_move(start, end).is_ok()
    }

    fn execute_standard(&mut self, start: Square, end: Square) -> Result<GameMove, MoveError> {
        let mut piece = self.take(start).ok_or(MoveError::EmptySource(start))?;
        let was_moved = piece.has_moved;
        let (color, kind) = (piece.color, piece.kind);

        piece.has_moved = true;
        let captured = self.put(end, Some(piece));

        Ok(GameMove::Standard {
            start,
            end,
            color,
            kind,
            captured,
            was_moved,
        })
    }

    fn execute_castling(&mut self, king_start: Square, king_end: Square) -> Result<GameMove, MoveError> {
        let rook_start = castling_rook_square(king_start, king_end);
        let rook_end = castling_rook_target(king_start, king_end);

        let mut king = self.take(king_start).ok_or(MoveError::EmptySource(king_start))?;
        let mut rook = match self.take(rook_start) {
            Some(rook) => rook,
            None => {
                self.put(king_start, Some(king));
                return Err(MoveError::CastlingBlocked);
            }
        };

        let color = king.color;
        king.has_moved = true;
        rook.has_moved = true;
        self.put(king_end, Some(king));
        self.put(rook_end, Some(rook));

        Ok(GameMove::Castle {
            color,
            king_start,
            king_end,
            rook_start,
            rook_end,
        })
    }

    /// Undo the last move made. A captured piece goes back onto the board, so the returned
    /// record no longer holds it.
    pub fn try_undo(&mut self) -> Result<GameMove, MoveError> {
        let mut last_move = self.move_history.pop().ok_or(MoveError::EmptyHistory)?;

        self.restore_pieces(&mut last_move);
        self.bump_counter(last_move.color(), false);

        Ok(last_move)
    }

    /// Boolean form of [`Board::try_undo`].
    pub fn undo_move(&mut self) -> bool {
        self.try_undo().is_ok()
    }

    fn restore_pieces(&mut self, game_move: &mut GameMove) {
        match game_move {
            GameMove::Standard {
                start,
                end,
                captured,
                was_moved,
                ..
            } => {
                // Move the piece back and put the captured piece (or nothing) on its square
                let moved = self.put(*end, captured.take());
                debug_assert!(moved.is_some(), "history out of sync: no piece on {:?}", end);
                if let Some(mut piece) = moved {
                    piece.has_moved = *was_moved;
                    let displaced = self.put(*start, Some(piece));
                    debug_assert!(displaced.is_none(), "history out of sync: {:?} is occupied", start);
                }
            }
            GameMove::Castle {
                king_start,
                king_end,
                rook_start,
                rook_end,
                ..
            } => {
                // Castling is only legal for unmoved pieces, so both flags go back to false
                for (from, to) in [(*king_end, *king_start), (*rook_end, *rook_start)] {
                    let moved = self.take(from);
                    debug_assert!(moved.is_some(), "history out of sync: no piece on {:?}", from);
                    if let Some(mut piece) = moved {
                        piece.has_moved = false;
                        self.put(to, Some(piece));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn pawn_double_step_from_row_six() {
        let mut board = Board::new();

        assert!(board.move_piece(sq(6, 4), sq(4, 4)));
        let pawn = board.piece_at(sq(4, 4)).unwrap();
        assert_eq!((pawn.kind, pawn.color), (PieceKind::Pawn, Color::Black));
        assert!(pawn.has_moved);
        assert!(board.is_empty(sq(6, 4)));
        assert_eq!(board.history().len(), 1);
        assert_eq!(board.move_counts(), (0, 1));
    }

    #[test]
    fn failed_moves_leave_the_board_unchanged() {
        let mut board = Board::new();
        let before = board.clone();

        assert!(!board.move_piece(sq(6, 4), sq(3, 4))); // triple step
        assert!(!board.move_piece(sq(4, 4), sq(3, 4))); // empty source
        assert!(!board.move_piece(sq(7, 3), sq(6, 3))); // onto own pawn
        assert!(!board.move_piece(sq(7, 2), sq(5, 4))); // bishop through own pawn
        assert!(!board.move_piece(sq(7, 4), sq(7, 6))); // castling through pieces
        assert_eq!(board, before);
    }

    #[test]
    fn black_cannot_capture_black() {
        let mut board = Board::new();
        let before = board.clone();

        // Knight geometry is fine, the target is its own pawn
        assert_eq!(board.try_move(sq(7, 1), sq(6, 3)), Err(MoveError::SelfCapture(sq(6, 3))));
        assert!(!board.move_piece(sq(7, 6), sq(6, 4)));
        assert_eq!(board, before);
    }

    #[test]
    fn capture_moves_the_victim_into_the_record() {
        let mut board = Board::new();
        assert!(board.move_piece(sq(1, 3), sq(3, 3)));
        assert!(board.move_piece(sq(6, 4), sq(4, 4)));

        let capture = board.try_move(sq(3, 3), sq(4, 4)).unwrap();
        let victim = capture.captured().unwrap();
        assert_eq!((victim.kind, victim.color), (PieceKind::Pawn, Color::Black));
        assert_eq!(board.piece_at(sq(4, 4)).unwrap().color, Color::White);
        assert_eq!(board.move_counts(), (2, 1));

        // The victim goes back to the board, not into the returned record
        let undone = board.try_undo().unwrap();
        assert_eq!(undone.squares(), (sq(3, 3), sq(4, 4)));
        assert!(undone.captured().is_none());
        let restored = board.piece_at(sq(4, 4)).unwrap();
        assert_eq!((restored.kind, restored.color), (PieceKind::Pawn, Color::Black));
        assert!(restored.has_moved);
        assert_eq!(board.piece_at(sq(3, 3)).unwrap().color, Color::White);
        assert_eq!(board.move_counts(), (1, 1));
    }

    fn clear_black_kingside(board: &mut Board) {
        assert!(board.move_piece(sq(7, 6), sq(5, 5))); // knight out
        assert!(board.move_piece(sq(6, 6), sq(5, 6))); // pawn opens the diagonal
        assert!(board.move_piece(sq(7, 5), sq(6, 6))); // bishop out
    }

    #[test]
    fn kingside_castling() {
        let mut board = Board::new();
        clear_black_kingside(&mut board);
        assert!(!board.piece_at(sq(7, 4)).unwrap().has_moved);
        assert!(!board.piece_at(sq(7, 7)).unwrap().has_moved);

        assert!(board.move_piece(sq(7, 4), sq(7, 6)));
        let king = board.piece_at(sq(7, 6)).unwrap();
        let rook = board.piece_at(sq(7, 5)).unwrap();
        assert_eq!(king.kind, PieceKind::King);
        assert_eq!(rook.kind, PieceKind::Rook);
        assert!(king.has_moved && rook.has_moved);
        assert!(board.is_empty(sq(7, 4)));
        assert!(board.is_empty(sq(7, 7)));
        assert!(board.last_move().unwrap().is_castling());
    }

    #[test]
    fn castling_refused_after_rook_moved() {
        let mut board = Board::new();
        clear_black_kingside(&mut board);
        assert!(board.move_piece(sq(7, 7), sq(7, 6)));
        assert!(board.move_piece(sq(7, 6), sq(7, 7)));
        let before = board.clone();

        assert_eq!(board.try_move(sq(7, 4), sq(7, 6)), Err(MoveError::CastlingBlocked));
        assert_eq!(board, before);
    }

    #[test]
    fn queenside_castling_and_undo() {
        let mut board = Board::new();
        for square in [sq(0, 1), sq(0, 2), sq(0, 3)] {
            board.take(square);
        }
        let before = board.clone();

        assert!(board.move_piece(sq(0, 4), sq(0, 2)));
        assert_eq!(board.piece_at(sq(0, 2)).unwrap().kind, PieceKind::King);
        assert_eq!(board.piece_at(sq(0, 3)).unwrap().kind, PieceKind::Rook);
        assert!(board.is_empty(sq(0, 0)));
        assert_eq!(board.move_counts(), (1, 0));

        assert!(board.undo_move());
        assert_eq!(board, before);
    }

    #[test]
    fn one_move_then_undo_restores_snapshot() {
        let mut board = Board::new();
        let before = board.clone();

        assert!(board.move_piece(sq(0, 1), sq(2, 2)));
        assert!(board.undo_move());
        assert_eq!(board, before);
        assert!(!board.piece_at(sq(0, 1)).unwrap().has_moved);
    }

    #[test]
    fn undo_on_empty_history_is_a_no_op() {
        let mut board = Board::new();
        let before = board.clone();

        for _ in 0..3 {
            assert!(!board.undo_move());
            assert_eq!(board.try_undo(), Err(MoveError::EmptyHistory));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn full_sequence_round_trips() {
        let mut board = Board::new();
        let before = board.clone();
        let moves = [
            (sq(1, 4), sq(3, 4)),
            (sq(6, 3), sq(4, 3)),
            (sq(3, 4), sq(4, 3)), // capture
            (sq(7, 3), sq(4, 3)), // queen recaptures
            (sq(0, 6), sq(2, 5)),
            (sq(4, 3), sq(4, 0)),
            (sq(0, 5), sq(3, 2)),
            (sq(6, 6), sq(5, 6)),
            (sq(0, 4), sq(0, 6)), // castles
            (sq(4, 0), sq(1, 0)), // takes a pawn
        ];

        let mut snapshots = Vec::new();
        for &(start, end) in moves.iter() {
            snapshots.push(board.clone());
            assert!(board.move_piece(start, end), "move {:?} -> {:?}", start, end);
        }
        assert_eq!(board.history().len(), moves.len());

        while let Some(snapshot) = snapshots.pop() {
            assert!(board.undo_move());
            assert_eq!(board, snapshot);
        }
        assert_eq!(board, before);
        assert!(!board.undo_move());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "history out of sync")]
    fn undo_with_missing_piece_is_an_invariant_violation() {
        let mut board = Board::new();
        assert!(board.move_piece(sq(0, 1), sq(2, 2)));
        board.take(sq(2, 2));
        board.undo_move();
    }

    #[test]
    fn undo_restores_has_moved_for_pieces_moved_twice() {
        let mut board = Board::new();
        assert!(board.move_piece(sq(0, 1), sq(2, 2)));
        assert!(board.move_piece(sq(2, 2), sq(4, 3)));

        assert!(board.undo_move());
        // Still moved once
        assert!(board.piece_at(sq(2, 2)).unwrap().has_moved);
        assert!(board.undo_move());
        assert!(!board.piece_at(sq(0, 1)).unwrap().has_moved);
    }
}
