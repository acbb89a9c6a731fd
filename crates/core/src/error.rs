//! Error types for chess-bot-core

use thiserror::Error;

use crate::position::GameStatus;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid FEN string: {0}")]
    InvalidFen(String),

    #[error("Game is already over")]
    GameOver(GameStatus),

    #[error("No legal moves available")]
    NoLegalMoves,
}

pub type Result<T> = std::result::Result<T, Error>;
