//! Random move selection
//!
//! No evaluation or search: every legal move is equally likely.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use shakmaty::{Chess, Move, Position};

use crate::error::{Error, Result};
use crate::notation::{move_to_san, move_to_uci, piece_letter};
use crate::position::game_status;

/// A move picked for a position, in the shapes clients ask for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChosenMove {
    #[serde(rename = "move")]
    pub uci: String,
    pub san: String,
    pub piece: String,
}

impl ChosenMove {
    pub fn describe(position: &Chess, mv: Move) -> Self {
        Self {
            uci: move_to_uci(&mv),
            piece: piece_letter(position, &mv).to_string(),
            san: move_to_san(position, mv),
        }
    }
}

/// Picks uniformly among the legal moves of `position`
pub fn choose_move<R: Rng + ?Sized>(position: &Chess, rng: &mut R) -> Result<ChosenMove> {
    let status = game_status(position);
    if status.is_over() {
        return Err(Error::GameOver(status));
    }

    let legal_moves = position.legal_moves();
    let mv = legal_moves.choose(rng).ok_or(Error::NoLegalMoves)?;

    Ok(ChosenMove::describe(position, mv.clone()))
}

pub struct RandomMover {
    rng: StdRng,
}

impl RandomMover {
    /// Seeded from the operating system, so repeated calls differ
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Same game seed and same position always give the same reply
    pub fn seeded(seed: &str, fen: &str) -> Self {
        Self {
            rng: StdRng::seed_from_u64(derive_seed(seed, fen)),
        }
    }

    pub fn choose(&mut self, position: &Chess) -> Result<ChosenMove> {
        choose_move(position, &mut self.rng)
    }
}

impl Default for RandomMover {
    fn default() -> Self {
        Self::new()
    }
}

fn derive_seed(seed: &str, fen: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    fen.trim().hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::{parse_fen, GameStatus, STARTING_FEN};
    use std::collections::HashSet;

    const FOOLS_MATE: &str = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";

    fn legal_uci(position: &Chess) -> HashSet<String> {
        position.legal_moves().iter().map(move_to_uci).collect()
    }

    #[test]
    fn test_chosen_move_is_legal() {
        let fens = [
            STARTING_FEN,
            "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
            "4k3/8/8/8/8/8/4r3/4K3 w - - 0 1",
            "8/P6k/8/8/8/8/8/K7 w - - 0 1",
        ];
        let mut rng = StdRng::seed_from_u64(7);

        for fen in fens {
            let position = parse_fen(fen).unwrap();
            let legal = legal_uci(&position);
            for _ in 0..50 {
                let chosen = choose_move(&position, &mut rng).unwrap();
                assert!(legal.contains(&chosen.uci), "{} not legal in {}", chosen.uci, fen);
                assert!(!chosen.san.is_empty());
                assert_eq!(chosen.piece.len(), 1);
            }
        }
    }

    #[test]
    fn test_only_move_in_check() {
        // Only king moves answer the rook check
        let position = parse_fen("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1").unwrap();
        let legal = legal_uci(&position);
        let mut rng = StdRng::seed_from_u64(1);
        let chosen = choose_move(&position, &mut rng).unwrap();
        assert!(legal.contains(&chosen.uci));
        assert_eq!(chosen.piece, "K");
    }

    #[test]
    fn test_checkmate_is_game_over() {
        let position = parse_fen(FOOLS_MATE).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            choose_move(&position, &mut rng),
            Err(Error::GameOver(GameStatus::Checkmate))
        );
    }

    #[test]
    fn test_stalemate_is_game_over() {
        let position = parse_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            choose_move(&position, &mut rng),
            Err(Error::GameOver(GameStatus::Stalemate))
        );
    }

    #[test]
    fn test_seeded_mover_is_reproducible() {
        let position = parse_fen(STARTING_FEN).unwrap();
        let first = RandomMover::seeded("abc123", STARTING_FEN)
            .choose(&position)
            .unwrap();
        let second = RandomMover::seeded("abc123", STARTING_FEN)
            .choose(&position)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unseeded_mover_covers_many_moves() {
        let position = parse_fen(STARTING_FEN).unwrap();
        let mut mover = RandomMover::new();
        let seen: HashSet<String> = (0..200)
            .map(|_| mover.choose(&position).unwrap().uci)
            .collect();
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_serializes_with_move_key() {
        let chosen = ChosenMove::describe(
            &Chess::default(),
            Chess::default()
                .legal_moves()
                .into_iter()
                .find(|mv| move_to_uci(mv) == "e2e4")
                .unwrap(),
        );
        let json = serde_json::to_value(&chosen).unwrap();
        assert_eq!(json["move"], "e2e4");
        assert_eq!(json["san"], "e4");
        assert_eq!(json["piece"], "P");
    }
}
