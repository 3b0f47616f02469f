//! Error types for the board core, the coordinate parser and the game layer.
//!
//! Every variant here is an expected outcome of user input. None of them
//! indicate a bug; callers decide how to present them. Out-of-range squares are
//! not represented: `Square::new` asserts instead.

use std::fmt;

use crate::types::Square;

/// Why the board refused a move or an undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// No piece on the start square.
    EmptySource(Square),
    /// The destination holds a piece of the mover's color.
    SelfCapture(Square),
    /// The piece's movement or path rule rejects the transition.
    IllegalGeometry,
    /// A two-column king move whose castling conditions do not hold.
    CastlingBlocked,
    /// Undo requested with nothing to undo.
    EmptyHistory,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySource(sq) => write!(f, "no piece at ({}, {})", sq.row(), sq.col()),
            MoveError::SelfCapture(sq) => {
                write!(f, "square ({}, {}) holds a piece of the same color", sq.row(), sq.col())
            }
            MoveError::IllegalGeometry => write!(f, "the piece cannot move that way"),
            MoveError::CastlingBlocked => write!(f, "castling is not possible"),
            MoveError::EmptyHistory => write!(f, "no moves to undo"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Rejections from the text parser, before anything reaches the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A command that is neither `undo` nor two square labels.
    BadFormat(String),
    /// A square label that is not exactly two characters.
    BadLength(String),
    /// File letter outside A-H.
    BadFile(char),
    /// Rank character that is not a digit 1-8.
    BadRank(char),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BadFormat(line) => write!(f, "unrecognised command: {:?}", line),
            ParseError::BadLength(label) => write!(f, "square must be two characters: {:?}", label),
            ParseError::BadFile(c) => write!(f, "invalid file letter: {:?}", c),
            ParseError::BadRank(c) => write!(f, "invalid rank: {:?}", c),
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Parse(ParseError),
    Move(MoveError),
    /// The start square holds a piece of the side not on move.
    NotYourPiece(Square),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Parse(e) => write!(f, "{}", e),
            GameError::Move(e) => write!(f, "{}", e),
            GameError::NotYourPiece(sq) => {
                write!(f, "piece at ({}, {}) belongs to the other player", sq.row(), sq.col())
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Parse(e) => Some(e),
            GameError::Move(e) => Some(e),
            GameError::NotYourPiece(_) => None,
        }
    }
}

impl From<ParseError> for GameError {
    fn from(e: ParseError) -> Self {
        GameError::Parse(e)
    }
}

impl From<MoveError> for GameError {
    fn from(e: MoveError) -> Self {
        GameError::Move(e)
    }
}
