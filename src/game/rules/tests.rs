//! Test suite for the rules adapter
//!
//! Exercises the adapter surface the session relies on: legal move queries,
//! the single mutation path and its failure channel, history annotations and
//! the terminal-state queries. Move generation itself belongs to the rules
//! engine and is only spot-checked.

use super::*;

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn play(rules: &mut ChessRules, moves: &[(Square, Square)]) {
    for &(from, to) in moves {
        rules
            .apply_move(from, to, Role::Queen)
            .unwrap_or_else(|e| panic!("{from}{to} should be legal: {e}"));
    }
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_starting_position() {
    //! A fresh game is the standard start with White to move
    let rules = ChessRules::new();

    assert_eq!(rules.fen(), START_FEN);
    assert_eq!(rules.current_turn(), Color::White);
    assert_eq!(rules.legal_moves(None).len(), 20);
    assert!(rules.history().is_empty());
    assert!(!rules.is_game_over());
    assert_eq!(rules.pieces().len(), 32);
}

#[test]
fn test_legal_moves_filtered_by_square() {
    //! The square filter only returns moves starting on that square
    let rules = ChessRules::new();

    let knight_moves = rules.legal_moves(Some(Square::B1));
    assert_eq!(knight_moves.len(), 2);
    assert!(knight_moves.iter().all(|m| m.from == Square::B1 && m.piece == Role::Knight));

    let mut destinations = rules.legal_destinations(Square::B1);
    destinations.sort();
    assert_eq!(destinations, vec![Square::A3, Square::C3]);
}

#[test]
fn test_no_moves_for_empty_or_opponent_square() {
    let rules = ChessRules::new();
    assert!(rules.legal_moves(Some(Square::E4)).is_empty());
    assert!(rules.legal_moves(Some(Square::E7)).is_empty(), "Black is not to move");
}

#[test]
fn test_promotion_destinations_collapse() {
    //! Four promotion moves to one square show up as one destination
    let rules = ChessRules::from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").expect("valid fen");
    assert_eq!(rules.legal_moves(Some(Square::A7)).len(), 4);
    assert_eq!(rules.legal_destinations(Square::A7), vec![Square::A8]);
}

// ============================================================================
// Applying moves
// ============================================================================

#[test]
fn test_apply_move_updates_turn_and_history() {
    let mut rules = ChessRules::new();
    let record = rules
        .apply_move(Square::E2, Square::E4, Role::Queen)
        .expect("e4 is legal");

    assert_eq!(record.san, "e4");
    assert_eq!(record.color, Color::White);
    assert_eq!(record.piece, Role::Pawn);
    assert_eq!(record.captured, None);
    assert_eq!(rules.current_turn(), Color::Black);
    assert_eq!(rules.history().len(), 1);
    assert_eq!(rules.history_san(), vec!["e4".to_string()]);
    assert_eq!(
        rules.fen(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
    );
}

#[test]
fn test_illegal_move_leaves_position_untouched() {
    //! An illegal attempt is an Err and nothing else changes
    let mut rules = ChessRules::new();
    let before = rules.fen();

    let result = rules.apply_move(Square::E2, Square::E5, Role::Queen);

    assert!(matches!(result, Err(GameError::IllegalMove { .. })));
    assert_eq!(rules.fen(), before);
    assert!(rules.history().is_empty());
    assert_eq!(rules.current_turn(), Color::White);
}

#[test]
fn test_moving_opponent_piece_is_illegal() {
    let mut rules = ChessRules::new();
    assert!(rules.apply_move(Square::E7, Square::E5, Role::Queen).is_err());
}

#[test]
fn test_capture_is_annotated() {
    //! 1.e4 d5 2.exd5 records the captured pawn
    let mut rules = ChessRules::new();
    play(&mut rules, &[(Square::E2, Square::E4), (Square::D7, Square::D5)]);

    let record = rules
        .apply_move(Square::E4, Square::D5, Role::Queen)
        .expect("exd5 is legal");

    assert_eq!(record.captured, Some(Role::Pawn));
    assert_eq!(record.san, "exd5");
}

#[test]
fn test_en_passant_is_annotated() {
    let mut rules = ChessRules::new();
    play(
        &mut rules,
        &[
            (Square::E2, Square::E4),
            (Square::A7, Square::A6),
            (Square::E4, Square::E5),
            (Square::D7, Square::D5),
        ],
    );

    let record = rules
        .apply_move(Square::E5, Square::D6, Role::Queen)
        .expect("exd6 e.p. is legal");

    assert_eq!(record.captured, Some(Role::Pawn));
    assert!(rules.piece_at(Square::D5).is_none(), "Captured pawn removed");
}

#[test]
fn test_castling_by_king_destination() {
    //! Dragging the king two squares castles
    let mut rules =
        ChessRules::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("valid fen");

    let record = rules
        .apply_move(Square::E1, Square::G1, Role::Queen)
        .expect("O-O is legal");

    assert_eq!(record.san, "O-O");
    assert_eq!(record.to, Square::G1);
    assert_eq!(rules.piece_at(Square::G1).map(|p| p.role), Some(Role::King));
    assert_eq!(rules.piece_at(Square::F1).map(|p| p.role), Some(Role::Rook));
}

#[test]
fn test_promotion_defaults_to_preference() {
    let mut rules = ChessRules::from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").expect("valid fen");

    let record = rules
        .apply_move(Square::A7, Square::A8, Role::Queen)
        .expect("a8=Q is legal");

    assert_eq!(record.promotion, Some(Role::Queen));
    assert_eq!(rules.piece_at(Square::A8).map(|p| p.role), Some(Role::Queen));
}

#[test]
fn test_underpromotion_preference() {
    let mut rules = ChessRules::from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").expect("valid fen");
    let record = rules
        .apply_move(Square::A7, Square::A8, Role::Knight)
        .expect("a8=N is legal");
    assert_eq!(record.promotion, Some(Role::Knight));
}

// ============================================================================
// Terminal states
// ============================================================================

#[test]
fn test_fools_mate_is_checkmate() {
    let mut rules = ChessRules::new();
    play(
        &mut rules,
        &[
            (Square::F2, Square::F3),
            (Square::E7, Square::E5),
            (Square::G2, Square::G4),
            (Square::D8, Square::H4),
        ],
    );

    assert!(rules.is_check());
    assert!(rules.is_checkmate());
    assert!(!rules.is_draw());
    assert!(rules.is_game_over());
    assert_eq!(rules.current_turn(), Color::White, "Mated side is to move");
    assert!(rules.legal_moves(None).is_empty());
}

#[test]
fn test_stalemate_is_draw() {
    let rules = ChessRules::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("valid fen");
    assert!(rules.is_stalemate());
    assert!(!rules.is_checkmate());
    assert!(rules.is_draw());
    assert!(rules.is_game_over());
}

#[test]
fn test_insufficient_material_is_draw() {
    let rules = ChessRules::from_fen("8/8/8/4k3/8/8/8/4K3 w - - 0 1").expect("valid fen");
    assert!(rules.is_insufficient_material());
    assert!(rules.is_game_over());
}

#[test]
fn test_fifty_move_rule() {
    let rules = ChessRules::from_fen("8/8/8/4k3/8/8/3R4/4K3 w - - 100 80").expect("valid fen");
    assert!(rules.is_fifty_move_draw());
    assert!(rules.is_draw());
}

#[test]
fn test_threefold_repetition() {
    //! Knights shuffling out and back twice repeats the start position
    let mut rules = ChessRules::new();
    let shuffle = [
        (Square::G1, Square::F3),
        (Square::G8, Square::F6),
        (Square::F3, Square::G1),
        (Square::F6, Square::G8),
    ];

    play(&mut rules, &shuffle);
    assert!(!rules.is_threefold_repetition(), "Start position seen twice");

    play(&mut rules, &shuffle);
    assert!(rules.is_threefold_repetition());
    assert!(rules.is_game_over());
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_square() {
    assert_eq!(parse_square("e4").expect("valid"), Square::E4);
    assert_eq!(parse_square("h8").expect("valid"), Square::H8);
    assert!(matches!(parse_square("z9"), Err(GameError::InvalidSquare { .. })));
    assert!(parse_square("").is_err());
}

#[test]
fn test_from_fen_rejects_garbage() {
    assert!(matches!(
        ChessRules::from_fen("not a fen"),
        Err(GameError::InvalidPosition { .. })
    ));
}
