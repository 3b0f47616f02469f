use crate::types::*;
use super::Board;

impl Board {
    /// Every square the piece on `start` may move to right now. Empty for an empty square.
    pub fn legal_destinations(&self, start: Square) -> Vec<Square> {
        if self.is_empty(start) {
            return Vec::new();
        }

        Square::all()
            .filter(|&end| self.check_move(start, end).is_ok())
            .collect()
    }
}
