use crate::types::*;
// Declare submodules
pub mod moves;
pub mod validation;
pub mod state;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    move_history: Vec<GameMove>,
    white_moves: u32,
    black_moves: u32,
}

impl Board {
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup_starting_position();
        board
    }

    /// A board with no pieces and no history. Crate-only: positions built by hand have no
    /// history to undo back to.
    pub(crate) fn empty() -> Self {
        Self {
            squares: Default::default(),
            move_history: Vec::new(),
            white_moves: 0,
            black_moves: 0,
        }
    }

    fn setup_starting_position(&mut self) {
        for col in 0..8 {
            self.place(Square::new(Color::White.home_row(), col), Piece::new(PieceKind::Pawn, Color::White));
            self.place(Square::new(Color::Black.home_row(), col), Piece::new(PieceKind::Pawn, Color::Black));
        }

        for (col, &kind) in BACK_ROW_ORDER.iter().enumerate() {
            let col = col as u8;
            self.place(Square::new(Color::White.back_row(), col), Piece::new(kind, Color::White));
            self.place(Square::new(Color::Black.back_row(), col), Piece::new(kind, Color::Black));
        }
    }

    // Basic board operations
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.squares[square.row() as usize][square.col() as usize].as_ref()
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Put a piece on a square during setup, returning whatever was there.
    pub(crate) fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.slot(square).replace(piece)
    }

    fn slot(&mut self, square: Square) -> &mut Option<Piece> {
        &mut self.squares[square.row() as usize][square.col() as usize]
    }

    fn take(&mut self, square: Square) -> Option<Piece> {
        self.slot(square).take()
    }

    fn put(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(self.slot(square), piece)
    }

    pub fn history(&self) -> &[GameMove] {
        &self.move_history
    }

    pub fn last_move(&self) -> Option<&GameMove> {
        self.move_history.last()
    }

    /// (white, black) successful moves currently on the history.
    pub fn move_counts(&self) -> (u32, u32) {
        (self.white_moves, self.black_moves)
    }

    fn bump_counter(&mut self, color: Color, forward: bool) {
        let counter = match color {
            Color::White => &mut self.white_moves,
            Color::Black => &mut self.black_moves,
        };
        if forward {
            *counter += 1;
        } else {
            *counter = counter.saturating_sub(1);
        }
    }

    /// Text rows for display: a file header, one row per board row labelled with its rank
    /// on both sides, and the header again.
    pub fn render(&self) -> Vec<String> {
        let header = "  A B C D E F G H".to_string();
        let mut rows = Vec::with_capacity(10);
        rows.push(header.clone());

        for row in 0..8u8 {
            let rank = 8 - row;
            let cells: Vec<String> = (0..8u8)
                .map(|col| match self.piece_at(Square::new(row, col)) {
                    Some(piece) => piece.symbol().to_string(),
                    None => ".".to_string(),
                })
                .collect();
            rows.push(format!("{} {} {}", rank, cells.join(" "), rank));
        }

        rows.push(header);
        rows
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
