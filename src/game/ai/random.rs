//! Random-move selection

use rand::Rng;

use crate::game::rules::{ChessRules, LegalMove};

/// Pick one legal move for the side to move, uniformly at random
///
/// Returns `None` when the side to move has no legal move (mate or
/// stalemate). Promotions appear once per piece kind in the move list, so
/// each promotion choice is as likely as any other move.
pub fn pick_random_move<R: Rng + ?Sized>(rules: &ChessRules, rng: &mut R) -> Option<LegalMove> {
    let mut moves = rules.legal_moves(None);
    if moves.is_empty() {
        return None;
    }
    let index = rng.random_range(0..moves.len());
    Some(moves.swap_remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_move_is_legal() {
        //! Every pick is in the legal move list
        let rules = ChessRules::new();
        let legal = rules.legal_moves(None);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let pick = pick_random_move(&rules, &mut rng).expect("start position has moves");
            assert!(legal.contains(&pick));
        }
    }

    #[test]
    fn test_random_move_none_when_mated() {
        //! No legal move means no pick
        let rules = ChessRules::from_fen(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        )
        .expect("valid fen");
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick_random_move(&rules, &mut rng).is_none());
    }

    #[test]
    fn test_random_move_covers_choices() {
        //! Over many draws more than one distinct move comes up
        let rules = ChessRules::new();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = Vec::new();
        for _ in 0..200 {
            let pick = pick_random_move(&rules, &mut rng).expect("moves available");
            if !seen.contains(&pick) {
                seen.push(pick);
            }
        }
        assert!(seen.len() > 10, "only {} distinct moves drawn", seen.len());
    }
}
