use crate::board::Board;
use crate::errors::GameError;
use crate::logger::ChessLogger;
use crate::notation::{parse_command, Command};
use crate::types::{Color, GameMove, Square};

/// What a successful command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The full record stays in the board history.
    Moved {
        color: Color,
        start: Square,
        end: Square,
        castling: bool,
    },
    Undone(GameMove),
}

/// One game: the board, whose turn it is, and the game log. The board itself does not
/// know about turns; they are enforced here.
#[derive(Debug)]
pub struct Game {
    board: Board,
    to_move: Color,
    pub logger: ChessLogger,
}

impl Game {
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::White)
    }

    pub(crate) fn from_board(board: Board, to_move: Color) -> Self {
        Self {
            board,
            to_move,
            logger: ChessLogger::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn apply(&mut self, command: Command) -> Result<Outcome, GameError> {
        match command {
            Command::Move(start, end) => {
                if let Some(piece) = self.board.piece_at(start) {
                    if piece.color != self.to_move {
                        return Err(GameError::NotYourPiece(start));
                    }
                }

                let game_move = self.board.try_move(start, end)?;
                self.logger.log_move(game_move);
                let (start, end) = game_move.squares();
                let outcome = Outcome::Moved {
                    color: game_move.color(),
                    start,
                    end,
                    castling: game_move.is_castling(),
                };
                self.to_move = self.to_move.opposite();
                Ok(outcome)
            }
            Command::Undo => {
                let game_move = self.board.try_undo()?;
                self.logger.log_undo(&game_move);
                self.to_move = self.to_move.opposite();
                Ok(Outcome::Undone(game_move))
            }
        }
    }

    /// Parse and apply one line of user input. Rejections are logged before being returned.
    pub fn execute_line(&mut self, line: &str) -> Result<Outcome, GameError> {
        let result = parse_command(line)
            .map_err(GameError::from)
            .and_then(|command| self.apply(command));

        if let Err(error) = &result {
            self.logger.log_rejected(line, self.to_move, error);
        }
        result
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
