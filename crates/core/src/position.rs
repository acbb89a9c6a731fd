//! FEN parsing and position classification

use serde::Serialize;
use shakmaty::{
    fen::Fen, CastlingMode, CastlingSide, Chess, Color, EnPassantMode, Position, PositionError,
};

use crate::error::{Error, Result};

/// FEN of the standard starting position
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Halfmove clock at which the seventy-five-move rule ends the game
const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

/// Where a parsed position stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoveRule,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::InsufficientMaterial => "insufficient_material",
            GameStatus::SeventyFiveMoveRule => "seventy_five_move_rule",
        }
    }
}

/// Summary of a position as handed to a client starting a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameInfo {
    pub fen: String,
    pub turn: String,
    /// FEN castling field, e.g. "KQkq", or "-" when no rights remain
    pub castling_rights: String,
    /// Square behind a pawn that just double-stepped, only if it can be taken
    pub en_passant: Option<String>,
}

impl GameInfo {
    pub fn from_position(position: &Chess) -> Self {
        Self {
            fen: position_to_fen(position),
            turn: color_name(position.turn()).to_string(),
            castling_rights: castling_field(position),
            en_passant: position
                .ep_square(EnPassantMode::Legal)
                .map(|sq| sq.to_string()),
        }
    }
}

/// Parses a FEN string into a legal standard chess position.
///
/// Castling rights without their rook and impossible en-passant squares are
/// dropped rather than rejected; any other setup fault is an error.
pub fn parse_fen(fen: &str) -> Result<Chess> {
    let parsed: Fen = fen
        .trim()
        .parse()
        .map_err(|e| Error::InvalidFen(format!("{}", e)))?;

    parsed
        .into_position(CastlingMode::Standard)
        .or_else(PositionError::ignore_invalid_castling_rights)
        .or_else(PositionError::ignore_invalid_ep_square)
        .map_err(|e| Error::InvalidFen(format!("{}", e)))
}

/// Renders a position back to FEN
pub fn position_to_fen(position: &Chess) -> String {
    Fen::from_position(position, EnPassantMode::Legal).to_string()
}

/// Classifies a position; repetition draws need game history and are not detected
pub fn game_status(position: &Chess) -> GameStatus {
    if position.is_checkmate() {
        GameStatus::Checkmate
    } else if position.is_stalemate() {
        GameStatus::Stalemate
    } else if position.is_insufficient_material() {
        GameStatus::InsufficientMaterial
    } else if position.halfmoves() >= SEVENTY_FIVE_MOVE_PLIES {
        GameStatus::SeventyFiveMoveRule
    } else {
        GameStatus::Ongoing
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

fn castling_field(position: &Chess) -> String {
    let castles = position.castles();
    let field: String = [
        (Color::White, CastlingSide::KingSide, 'K'),
        (Color::White, CastlingSide::QueenSide, 'Q'),
        (Color::Black, CastlingSide::KingSide, 'k'),
        (Color::Black, CastlingSide::QueenSide, 'q'),
    ]
    .iter()
    .filter(|(color, side, _)| castles.has(*color, *side))
    .map(|(_, _, c)| *c)
    .collect();

    if field.is_empty() {
        "-".to_string()
    } else {
        field
    }
}
