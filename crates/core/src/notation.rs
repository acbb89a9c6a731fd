//! Rendering moves for the wire

use shakmaty::{san::SanPlus, CastlingMode, Chess, Move, Position};

/// Coordinate notation, castling written as the king's move (e1g1)
pub fn move_to_uci(mv: &Move) -> String {
    mv.to_uci(CastlingMode::Standard).to_string()
}

/// Standard algebraic notation including the check or mate suffix
pub fn move_to_san(position: &Chess, mv: Move) -> String {
    SanPlus::from_move(position.clone(), mv).to_string()
}

/// Upper-case letter of the piece standing on the move's origin square.
///
/// Falls back to 'P' when the origin is empty, which a legal move never hits.
pub fn piece_letter(position: &Chess, mv: &Move) -> char {
    mv.from()
        .and_then(|sq| position.board().piece_at(sq))
        .map(|piece| piece.role.upper_char())
        .unwrap_or('P')
}
