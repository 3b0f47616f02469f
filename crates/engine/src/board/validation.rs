use crate::errors::MoveError;
use crate::types::*;
use super::Board;

/// Sign of a delta: -1, 0 or 1.
fn step(delta: i8) -> i8 {
    delta.signum()
}

fn deltas(start: Square, end: Square) -> (i8, i8) {
    (end.row() as i8 - start.row() as i8, end.col() as i8 - start.col() as i8)
}

/// A king move along its row by exactly two columns.
pub fn is_castling_shape(start: Square, end: Square) -> bool {
    let (d_row, d_col) = deltas(start, end);
    d_row == 0 && d_col.abs() == 2
}

impl Board {
    /// Pure pre-flight check for `start -> end`. Decides how the move would be executed
    /// without touching the board.
    pub fn check_move(&self, start: Square, end: Square) -> Result<MoveKind, MoveError> {
        let piece = self.piece_at(start).ok_or(MoveError::EmptySource(start))?;

        if let Some(target) = self.piece_at(end) {
            if target.color == piece.color {
                return Err(MoveError::SelfCapture(end));
            }
        }

        if piece.kind == PieceKind::King && is_castling_shape(start, end) {
            self.check_castling(piece, start, end)?;
            return Ok(MoveKind::Castle {
                kingside: end.col() > start.col(),
            });
        }

        if self.legal_geometry(piece, start, end) {
            Ok(MoveKind::Standard)
        } else {
            Err(MoveError::IllegalGeometry)
        }
    }

    /// Shape, path and occupancy rule for the given piece. Does not look at the mover's
    /// own pieces on `end`; `check_move` handles that.
    pub fn legal_geometry(&self, piece: &Piece, start: Square, end: Square) -> bool {
        match piece.kind {
            PieceKind::King => {
                self.king_step(start, end)
                    || (is_castling_shape(start, end) && self.check_castling(piece, start, end).is_ok())
            }
            PieceKind::Queen => self.rook_geometry(start, end) || self.bishop_geometry(start, end),
            PieceKind::Rook => self.rook_geometry(start, end),
            PieceKind::Bishop => self.bishop_geometry(start, end),
            PieceKind::Knight => knight_geometry(start, end),
            PieceKind::Pawn => self.pawn_geometry(piece.color, start, end),
        }
    }

    fn king_step(&self, start: Square, end: Square) -> bool {
        let (d_row, d_col) = deltas(start, end);
        d_row.abs().max(d_col.abs()) == 1
    }

    fn rook_geometry(&self, start: Square, end: Square) -> bool {
        let (d_row, d_col) = deltas(start, end);
        if (d_row == 0) == (d_col == 0) {
            return false; // diagonal, off-line or no movement
        }
        self.path_is_clear(start, end)
    }

    fn bishop_geometry(&self, start: Square, end: Square) -> bool {
        let (d_row, d_col) = deltas(start, end);
        if d_row == 0 || d_row.abs() != d_col.abs() {
            return false;
        }
        self.path_is_clear(start, end)
    }

    fn pawn_geometry(&self, color: Color, start: Square, end: Square) -> bool {
        let (d_row, d_col) = deltas(start, end);
        let direction = color.pawn_direction();

        // Single step forward
        if d_row == direction && d_col == 0 {
            return self.is_empty(end);
        }

        // Double step from the home row, both squares empty
        if d_row == 2 * direction && d_col == 0 && start.row() == color.home_row() {
            let middle = Square::new((start.row() as i8 + direction) as u8, start.col());
            return self.is_empty(end) && self.is_empty(middle);
        }

        // Diagonal capture
        if d_row == direction && d_col.abs() == 1 {
            return matches!(self.piece_at(end), Some(target) if target.color != color);
        }

        false
    }

    /// True when every square strictly between `start` and `end` is empty. The two squares
    /// must share a row, a column or a diagonal.
    pub fn path_is_clear(&self, start: Square, end: Square) -> bool {
        let (d_row, d_col) = deltas(start, end);
        debug_assert!(d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs());

        let (dr, dc) = (step(d_row), step(d_col));
        let mut current = start;
        loop {
            current = match current.offset(dr, dc) {
                Some(next) => next,
                None => return false,
            };
            if current == end {
                return true;
            }
            if !self.is_empty(current) {
                return false;
            }
        }
    }

    /// Castling preconditions for a two-column king move. No attack detection:
    /// the king may start, pass through or land on an attacked square.
    fn check_castling(&self, king: &Piece, start: Square, end: Square) -> Result<(), MoveError> {
        if king.has_moved {
            return Err(MoveError::CastlingBlocked);
        }

        if !self.is_empty(end) || !self.path_is_clear(start, end) {
            return Err(MoveError::CastlingBlocked);
        }

        let rook_square = castling_rook_square(start, end);
        match self.piece_at(rook_square) {
            Some(rook) if rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved => Ok(()),
            _ => Err(MoveError::CastlingBlocked),
        }
    }
}

fn knight_geometry(start: Square, end: Square) -> bool {
    let (d_row, d_col) = deltas(start, end);
    matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2))
}

/// The rook taking part in a castling move: column 7 king-side, column 0 queen-side.
pub fn castling_rook_square(king_start: Square, king_end: Square) -> Square {
    let col = if king_end.col() > king_start.col() { 7 } else { 0 };
    Square::new(king_start.row(), col)
}

/// Where the castling rook lands: next to the king, on the side the rook came from.
pub fn castling_rook_target(king_start: Square, king_end: Square) -> Square {
    Square::new(king_start.row(), (king_start.col() + king_end.col()) / 2)
}
