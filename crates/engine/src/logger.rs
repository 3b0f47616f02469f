use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::errors::GameError;
use crate::notation::square_label;
use crate::types::{Color, GameMove};

#[derive(Debug)]
pub struct ChessLogger {
    pub log_buffer: String,
    pub advanced_logging: bool,
    move_count: u32,
    indent_level: usize,
}

impl ChessLogger {
    pub fn new() -> Self {
        let mut logger = Self {
            log_buffer: String::with_capacity(64 * 1024),
            advanced_logging: false,
            move_count: 0,
            indent_level: 0,
        };

        logger.log("🎯 === Chess Game Log Started ===");
        logger.log(&format!("📅 Date: {}", chrono::Local::now().format("%m/%d/%Y %H:%M:%S")));
        logger
    }

    pub fn should_log_advanced(&self) -> bool {
        self.advanced_logging
    }

    pub fn enable_advanced_logging(&mut self) {
        self.advanced_logging = true;
        self.log("🔬 Advanced logging enabled - rejected moves are explained");
    }

    pub fn log(&mut self, message: &str) {
        self.log_buffer.push_str(message);
        self.log_buffer.push('\n');
    }

    pub fn log_with_indent(&mut self, message: &str) {
        let indent = "  ".repeat(self.indent_level);
        self.log_buffer.push_str(&format!("{}{}\n", indent, message));
    }

    pub fn increase_indent(&mut self) { self.indent_level += 1; }
    pub fn decrease_indent(&mut self) {
        if self.indent_level > 0 { self.indent_level -= 1; }
    }

    /// Number of moves currently logged as played (undo takes one back).
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    // 🎯 MOVE LOGGING
    pub fn log_move(&mut self, mv: &GameMove) {
        self.move_count += 1;
        let capture = match mv.captured() {
            Some(piece) => format!(" takes {}", piece.symbol()),
            None => String::new(),
        };
        self.log(&format!(
            "{}. {} {}{}",
            self.move_count,
            mv.color().name(),
            move_to_string(mv),
            capture
        ));
    }

    pub fn log_undo(&mut self, mv: &GameMove) {
        self.move_count = self.move_count.saturating_sub(1);
        self.log(&format!("↩️ UNDO: {}", move_to_string(mv)));
    }

    pub fn log_rejected(&mut self, input: &str, to_move: Color, error: &GameError) {
        self.log(&format!("❌ Rejected {:?} from {}", input.trim(), to_move.name()));
        if self.should_log_advanced() {
            self.increase_indent();
            self.log_with_indent(&format!("└─ {}", error));
            self.decrease_indent();
        }
    }

    pub fn log_game_aborted(&mut self, reason: &str) {
        self.log(&format!("🛑 Game finished abruptly - {}", reason));
    }

    /// Write the buffer to `<dir>/<timestamp>.txt`, creating `dir` if needed.
    pub fn save_to_file(&mut self, dir: &Path, reason: &str) -> io::Result<PathBuf> {
        fs::create_dir_all(dir)?;

        let now = chrono::Local::now();
        let path = dir.join(format!("{}.txt", now.format("%m_%d_%Y_%H_%M_%S")));

        self.log(&format!("💾 Game ended: {} - Saving log", reason));

        let mut file = File::create(&path)?;
        file.write_all(self.log_buffer.as_bytes())?;
        Ok(path)
    }
}

fn move_to_string(mv: &GameMove) -> String {
    match mv {
        GameMove::Standard { start, end, .. } => {
            format!("{}-{}", square_label(*start), square_label(*end))
        }
        GameMove::Castle {
            king_start,
            king_end,
            rook_start,
            rook_end,
            ..
        } => format!(
            "{}-{} (castling, rook {}-{})",
            square_label(*king_start),
            square_label(*king_end),
            square_label(*rook_start),
            square_label(*rook_end)
        ),
    }
}

impl Default for ChessLogger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MoveError;
    use crate::types::{Piece, PieceKind, Square};

    #[test]
    fn header_and_moves_are_recorded() {
        let mut logger = ChessLogger::new();
        assert!(logger.log_buffer.starts_with("🎯 === Chess Game Log Started ===\n📅 Date: "));

        let mv = GameMove::Standard {
            start: Square::new(6, 4),
            end: Square::new(4, 4),
            color: Color::Black,
            kind: PieceKind::Pawn,
            captured: None,
            was_moved: false,
        };
        logger.log_move(&mv);
        assert!(logger.log_buffer.contains("1. black E2-E4\n"));
        assert_eq!(logger.move_count(), 1);

        logger.log_undo(&mv);
        assert!(logger.log_buffer.contains("↩️ UNDO: E2-E4\n"));
        assert_eq!(logger.move_count(), 0);
    }

    #[test]
    fn captures_and_castling_are_described() {
        let mut logger = ChessLogger::new();
        logger.log_move(&GameMove::Standard {
            start: Square::new(3, 3),
            end: Square::new(4, 4),
            color: Color::White,
            kind: PieceKind::Pawn,
            captured: Some(Piece::new(PieceKind::Pawn, Color::Black)),
            was_moved: true,
        });
        logger.log_move(&GameMove::Castle {
            color: Color::Black,
            king_start: Square::new(7, 4),
            king_end: Square::new(7, 6),
            rook_start: Square::new(7, 7),
            rook_end: Square::new(7, 5),
        });

        assert!(logger.log_buffer.contains("1. white D5-E4 takes p\n"));
        assert!(logger.log_buffer.contains("2. black E1-G1 (castling, rook H1-F1)\n"));
    }

    #[test]
    fn rejection_reason_only_in_advanced_mode() {
        let error = GameError::Move(MoveError::IllegalGeometry);

        let mut basic = ChessLogger::new();
        basic.log_rejected("a1 a5", Color::White, &error);
        assert!(basic.log_buffer.contains("❌ Rejected \"a1 a5\" from white\n"));
        assert!(!basic.log_buffer.contains("cannot move"));

        let mut advanced = ChessLogger::new();
        advanced.enable_advanced_logging();
        advanced.log_rejected("a1 a5", Color::White, &error);
        assert!(advanced.log_buffer.contains("  └─ the piece cannot move that way\n"));
    }

    #[test]
    fn saves_buffer_to_timestamped_file() {
        let dir = std::env::temp_dir().join(format!("chess_logger_test_{}", std::process::id()));
        let mut logger = ChessLogger::new();
        logger.log("hello");

        let path = logger.save_to_file(&dir, "test").unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("hello\n"));
        assert!(contents.ends_with("💾 Game ended: test - Saving log\n"));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("txt"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
