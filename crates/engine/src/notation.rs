//! Text coordinates: `E2`-style square labels and the two commands the text
//! front end understands (`<from> <to>` and `undo`).
//!
//! Labels use the printed layout of [`Board::render`](crate::Board::render): rank 8
//! is row 0 and rank 1 is row 7.

use crate::errors::ParseError;
use crate::types::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Square, Square),
    Undo,
}

pub fn parse_square(label: &str) -> Result<Square, ParseError> {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() != 2 {
        return Err(ParseError::BadLength(label.to_string()));
    }

    let file = chars[0].to_ascii_uppercase();
    if !('A'..='H').contains(&file) {
        return Err(ParseError::BadFile(chars[0]));
    }

    let rank = match chars[1].to_digit(10) {
        Some(digit @ 1..=8) => digit as u8,
        _ => return Err(ParseError::BadRank(chars[1])),
    };

    Ok(Square::new(8 - rank, file as u8 - b'A'))
}

/// Inverse of [`parse_square`], upper-case file letter.
pub fn square_label(square: Square) -> String {
    let file = (b'A' + square.col()) as char;
    format!("{}{}", file, 8 - square.row())
}

pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let words: Vec<&str> = line.split_whitespace().collect();

    match words.as_slice() {
        [word] if word.eq_ignore_ascii_case("undo") => Ok(Command::Undo),
        [from, to] => Ok(Command::Move(parse_square(from)?, parse_square(to)?)),
        _ => Err(ParseError::BadFormat(line.trim().to_string())),
    }
}
