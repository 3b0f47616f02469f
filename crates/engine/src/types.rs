/// A board coordinate. Row 0 is the top row as printed (rank 8), column 0 is file A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// The only way to build a square; fields stay private so the range check holds.
    pub fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square ({}, {}) is off the board", row, col);
        Self { row, col }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Step by a signed delta, returning None once the walk leaves the board.
    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;

        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square::new(row, col)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step.
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row the pawns start on; the only row a double step is allowed from.
    pub fn home_row(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    pub fn back_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    pub fn letter(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        }
    }
}

/// Back row layout from column 0 to column 7.
pub const BACK_ROW_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

// Not Copy: a piece lives in exactly one cell, or in the move record that captured it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            color,
            kind,
            has_moved: false,
        }
    }

    /// Upper-case for white, lower-case for black.
    pub fn symbol(&self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }
}

/// How a validated move will be carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Standard,
    Castle { kingside: bool },
}

/// One executed transition, kept in the board history so it can be reversed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameMove {
    Standard {
        start: Square,
        end: Square,
        color: Color,
        kind: PieceKind,
        captured: Option<Piece>,
        // has_moved of the mover before this move
        was_moved: bool,
    },
    Castle {
        color: Color,
        king_start: Square,
        king_end: Square,
        rook_start: Square,
        rook_end: Square,
    },
}

impl GameMove {
    pub fn color(&self) -> Color {
        match self {
            GameMove::Standard { color, .. } | GameMove::Castle { color, .. } => *color,
        }
    }

    /// The squares the user named: the mover's start and end (the king's, for castling).
    pub fn squares(&self) -> (Square, Square) {
        match self {
            GameMove::Standard { start, end, .. } => (*start, *end),
            GameMove::Castle {
                king_start,
                king_end,
                ..
            } => (*king_start, *king_end),
        }
    }

    pub fn is_castling(&self) -> bool {
        matches!(self, GameMove::Castle { .. })
    }

    pub fn captured(&self) -> Option<&Piece> {
        match self {
            GameMove::Standard { captured, .. } => captured.as_ref(),
            GameMove::Castle { .. } => None,
        }
    }
}
