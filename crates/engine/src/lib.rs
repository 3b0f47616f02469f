pub mod board;
pub mod types;
pub mod errors;
pub mod notation;
pub mod game;
pub mod logger;

pub use board::*;
pub use types::*;
pub use errors::*;
pub use notation::*;
pub use game::*;
pub use logger::ChessLogger;
