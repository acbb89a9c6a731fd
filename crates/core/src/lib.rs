//! Chess Bot Core Library
//!
//! Parses positions, tells finished games apart from playable ones, and picks
//! a random legal reply. Move generation and notation come from `shakmaty`.

use shakmaty::Chess;

pub mod bot;
pub mod error;
pub mod notation;
pub mod position;

pub use bot::{choose_move, ChosenMove, RandomMover};
pub use error::{Error, Result};
pub use position::{game_status, parse_fen, GameInfo, GameStatus, STARTING_FEN};

/// Creates the standard starting position
pub fn starting_position() -> Chess {
    Chess::default()
}

/// Summary of a fresh game
pub fn new_game() -> GameInfo {
    GameInfo::from_position(&starting_position())
}

/// Parses `fen` and picks a reply, seeded when the client supplied a game seed
pub fn select_move(fen: &str, seed: Option<&str>) -> Result<ChosenMove> {
    let position = parse_fen(fen)?;
    let mut mover = match seed {
        Some(seed) => RandomMover::seeded(seed, fen),
        None => RandomMover::new(),
    };
    mover.choose(&position)
}
