use super::*;
use crate::types::{Color, PieceKind};

#[test]
fn test_parse_coords() {
    let (from, to) = parse_coords("e2e4").unwrap();
    assert_eq!(from, Square::new(6, 4));
    assert_eq!(to, Square::new(4, 4));

    // Promotion suffix is tolerated
    assert!(parse_coords("a7a8q").is_ok());
}

#[test]
fn test_parse_coords_errors() {
    assert!(matches!(
        parse_coords("e2"),
        Err(ChessError::InvalidMoveText(_))
    ));
    assert!(matches!(
        parse_coords("e2e4e6"),
        Err(ChessError::InvalidMoveText(_))
    ));
    assert!(matches!(
        parse_coords("i2e4"),
        Err(ChessError::InvalidSquare(_))
    ));
    assert!(matches!(
        parse_coords("e2e9"),
        Err(ChessError::InvalidSquare(_))
    ));
}

#[test]
fn test_parse_coords_only_takes_queen_suffix() {
    for txt in ["e2e4x", "a7a8n", "a7a8r"] {
        assert!(
            matches!(parse_coords(txt), Err(ChessError::InvalidMoveText(_))),
            "{txt} should be rejected"
        );
    }
    assert_eq!(parse_coords("a7a8q").unwrap(), parse_coords("a7a8").unwrap());
}

#[test]
fn test_find_legal_move_sets_flags() {
    let mut state =
        BoardState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mv = find_legal_move(&mut state, "e1g1").unwrap();
    assert!(mv.is_castle);
    assert_eq!(mv.piece_moved.kind, PieceKind::King);
}

#[test]
fn test_find_legal_move_rejects_illegal() {
    let mut state = BoardState::new_game();
    assert!(matches!(
        find_legal_move(&mut state, "e2e5"),
        Err(ChessError::IllegalMove(_))
    ));
    assert!(matches!(
        find_legal_move(&mut state, "e7e5"),
        Err(ChessError::IllegalMove(_))
    ));
}

#[test]
fn test_play_coords() {
    let mut state = BoardState::new_game();
    play_coords(&mut state, "e2e4 e7e5 g1f3 b8c6").unwrap();
    assert_eq!(state.move_history().len(), 4);
    assert_eq!(state.side_to_move(), Color::White);

    let err = play_coords(&mut state, "f1c4 e8e6").unwrap_err();
    assert!(matches!(err, ChessError::IllegalMove(_)));
    // The legal prefix stays applied
    assert_eq!(state.move_history().len(), 5);
}
