use super::*;
use crate::board::{GameOutcome, STARTING_FEN};

fn sq(s: &str) -> Square {
    Square::from_coord(s).unwrap()
}

fn board(fen: &str) -> BoardState {
    BoardState::from_fen(fen).unwrap()
}

fn has(moves: &[Move], from: &str, to: &str) -> bool {
    let (from, to) = (sq(from), sq(to));
    moves.iter().any(|m| m.from == from && m.to == to)
}

/// Every generated move must leave the mover's king safe, and every
/// non-castling move that leaves it safe must be generated.
fn assert_sound_and_complete(state: &mut BoardState) {
    let legal = state.get_legal_moves();
    let mover = state.side_to_move();

    for &mv in &legal {
        state.make_move(mv);
        assert!(
            !state.is_king_attacked(mover),
            "{mv} leaves the king attacked in {}",
            state.to_fen()
        );
        state.undo_move();
    }

    let unpinned = PinTable::default();
    for mv in state.pseudo_legal_moves(&unpinned) {
        state.make_move(mv);
        let safe = !state.is_king_attacked(mover);
        state.undo_move();
        if safe {
            assert!(
                legal.iter().any(|m| m.id() == mv.id()),
                "{mv} missing from legal moves in {}",
                state.to_fen()
            );
        }
    }
}

#[test]
fn test_startpos_moves() {
    let mut state = BoardState::new_game();
    let moves = state.get_legal_moves();
    // Starting position has 20 legal moves
    assert_eq!(moves.len(), 20);
    assert!(!state.in_check());
    assert!(!state.is_checkmate());
    assert!(!state.is_stalemate());
}

#[test]
fn test_kiwipete_moves() {
    let mut state =
        board("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let moves = state.get_legal_moves();
    assert_eq!(moves.len(), 48);
    assert!(has(&moves, "e1", "g1"));
    assert!(has(&moves, "e1", "c1"));
}

#[test]
fn test_endgame_position_moves() {
    let mut state = board("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1");
    assert_eq!(state.get_legal_moves().len(), 14);
}

#[test]
fn test_generation_does_not_change_position() {
    let mut state =
        board("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let before = state.snapshot();
    state.get_legal_moves();
    assert_eq!(state.snapshot(), before);
    assert!(state.move_history().is_empty());
}

#[test]
fn test_sound_and_complete_over_positions() {
    for fen in [
        STARTING_FEN,
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        "8/8/8/KPp4r/8/8/8/7k w - c6 0 1",
        "4r2k/8/8/8/8/5n2/8/R3K3 w - - 0 1",
    ] {
        let mut state = board(fen);
        assert_sound_and_complete(&mut state);

        // One ply deeper as well
        for mv in state.get_legal_moves() {
            state.make_move(mv);
            assert_sound_and_complete(&mut state);
            state.undo_move();
        }
    }
}

#[test]
fn test_single_check_from_slider_allows_block() {
    let mut state = board("4r2k/8/8/8/2B5/8/8/4K3 w - - 0 1");
    let moves = state.get_legal_moves();
    assert!(state.in_check());
    assert_eq!(moves.len(), 6);
    assert!(has(&moves, "c4", "e2"));
    assert!(has(&moves, "c4", "e6"));
    assert!(!has(&moves, "c4", "d5"));
    assert!(!has(&moves, "e1", "e2"));
}

#[test]
fn test_single_check_from_knight_requires_capture() {
    let mut state = board("7k/8/8/8/8/3n4/8/3RK3 w - - 0 1");
    let moves = state.get_legal_moves();
    assert!(state.in_check());
    assert_eq!(moves.len(), 4);
    assert!(has(&moves, "d1", "d3"));
    assert!(!has(&moves, "d1", "d2"));
    assert!(!has(&moves, "e1", "f2"));
}

#[test]
fn test_double_check_only_king_moves() {
    let mut state = board("4r2k/8/8/8/8/5n2/8/R3K3 w - - 0 1");
    let moves = state.get_legal_moves();
    assert!(state.in_check());
    assert_eq!(moves.len(), 3);
    assert!(moves.iter().all(|m| m.piece_moved.kind == PieceKind::King));
}

#[test]
fn test_pinned_rook_slides_along_pin() {
    let mut state = board("4r2k/8/8/8/8/8/4R3/4K3 w - - 0 1");
    let moves = state.get_legal_moves();
    assert_eq!(moves.len(), 10);
    assert!(has(&moves, "e2", "e8"));
    assert!(!has(&moves, "e2", "d2"));
}

#[test]
fn test_pinned_knight_cannot_move() {
    let mut state = board("7k/8/8/b7/8/8/3N4/4K3 w - - 0 1");
    let moves = state.get_legal_moves();
    assert!(moves.iter().all(|m| m.from != sq("d2")));
    assert_eq!(moves.len(), 4);
}

#[test]
fn test_file_pinned_pawn_cannot_take_en_passant() {
    for (fen, victim) in [
        ("4r2k/8/8/3pP3/8/8/8/4K3 w - d6 0 1", "d6"),
        ("4r2k/8/8/4Pp2/8/8/8/4K3 w - f6 0 1", "f6"),
    ] {
        let mut state = board(fen);
        let moves = state.get_legal_moves();
        assert!(!has(&moves, "e5", victim), "{fen}");
        assert!(has(&moves, "e5", "e6"), "{fen}");
    }
}

#[test]
fn test_diagonal_pinned_pawn_takes_along_pin() {
    let mut state = board("7b/8/8/4Pp2/8/8/8/K6k w - f6 0 1");
    let moves = state.get_legal_moves();
    assert!(has(&moves, "e5", "f6"));
    assert!(!has(&moves, "e5", "e6"));
}

#[test]
fn test_diagonal_pin_is_symmetric_for_en_passant() {
    // Pin runs h1-a8; capturing toward c6 stays on it, toward e6 leaves it.
    let mut state = board("b6k/8/8/2pP4/8/8/8/7K w - c6 0 1");
    let moves = state.get_legal_moves();
    assert!(has(&moves, "d5", "c6"));
    assert!(!has(&moves, "d5", "d6"));

    let mut state = board("b6k/8/8/3Pp3/8/8/8/7K w - e6 0 1");
    let moves = state.get_legal_moves();
    assert!(!has(&moves, "d5", "e6"));
    assert!(!has(&moves, "d5", "d6"));
}

#[test]
fn test_en_passant_exposing_rank_is_illegal() {
    let mut state = board("8/8/8/KPp4r/8/8/8/7k w - c6 0 1");
    let moves = state.get_legal_moves();
    assert!(!has(&moves, "b5", "c6"));
    assert!(has(&moves, "b5", "b6"));
}

#[test]
fn test_en_passant_can_capture_checking_pawn() {
    let mut state = board("8/8/8/2k5/3Pp3/8/8/4K3 b - d3 0 1");
    let moves = state.get_legal_moves();
    assert!(state.in_check());
    let ep = moves
        .iter()
        .find(|m| m.from == sq("e4") && m.to == sq("d3"))
        .expect("en passant should answer the check");
    assert!(ep.is_en_passant);
    assert_eq!(ep.capture_square(), sq("d4"));
}

#[test]
fn test_promotion_flagged() {
    let mut state = board("1n5k/P7/8/8/8/8/8/K7 w - - 0 1");
    let moves = state.get_legal_moves();
    let promos: Vec<_> = moves.iter().filter(|m| m.is_promotion).collect();
    assert_eq!(promos.len(), 2);
    assert!(has(&moves, "a7", "a8"));
    assert!(has(&moves, "a7", "b8"));
}

#[test]
fn test_castling_both_sides() {
    let mut state = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let moves = state.get_legal_moves();
    assert!(moves.iter().filter(|m| m.is_castle).count() == 2);
    assert!(has(&moves, "e1", "g1"));
    assert!(has(&moves, "e1", "c1"));
}

#[test]
fn test_castling_blocked_by_attacked_transit() {
    let mut state = board("r3kr2/8/8/8/8/8/8/R3K2R w KQq - 0 1");
    let moves = state.get_legal_moves();
    assert!(!has(&moves, "e1", "g1"));
    assert!(has(&moves, "e1", "c1"));
}

#[test]
fn test_castling_blocked_by_pawn_attack() {
    let mut state = board("r3k2r/8/8/8/8/8/6p1/R3K2R w KQkq - 0 1");
    let moves = state.get_legal_moves();
    assert!(!has(&moves, "e1", "g1"));
    assert!(has(&moves, "e1", "c1"));
}

#[test]
fn test_queen_side_needs_empty_b_file_but_not_safe_one() {
    let mut state = board("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1");
    assert!(!has(&state.get_legal_moves(), "e1", "c1"));

    let mut state = board("1r2k2r/8/8/8/8/8/8/R3K2R w KQk - 0 1");
    assert!(has(&state.get_legal_moves(), "e1", "c1"));
}

#[test]
fn test_castling_requires_rook_on_corner() {
    let mut state = board("r3k2r/8/8/8/8/8/8/R3K3 w KQkq - 0 1");
    let moves = state.get_legal_moves();
    assert!(!has(&moves, "e1", "g1"));
    assert!(has(&moves, "e1", "c1"));
}

#[test]
fn test_no_castling_out_of_check() {
    let mut state = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    state.set_piece(sq("e4"), Some(Piece::new(Color::Black, PieceKind::Rook)));
    let moves = state.get_legal_moves();
    assert!(state.in_check());
    assert!(moves.iter().all(|m| !m.is_castle));
}

#[test]
fn test_castling_right_returns_after_undo() {
    let mut state = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    for (from, to) in [("h1", "h2"), ("a8", "a7")] {
        let mv = state
            .get_legal_moves()
            .into_iter()
            .find(|m| m.from == sq(from) && m.to == sq(to))
            .unwrap();
        state.make_move(mv);
    }
    assert!(!has(&state.get_legal_moves(), "e1", "g1"));

    state.undo_move();
    state.undo_move();
    assert!(has(&state.get_legal_moves(), "e1", "g1"));
}

#[test]
fn test_square_under_attack_uses_pawn_diagonals() {
    let mut state = board("4k3/8/8/8/3p4/8/8/4K3 w - - 0 1");
    assert!(state.square_under_attack(sq("c3")));
    assert!(state.square_under_attack(sq("e3")));
    assert!(!state.square_under_attack(sq("d3")));
    assert_eq!(state.side_to_move(), Color::White);
}

#[test]
fn test_stalemate_flags() {
    let mut state = board("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(state.get_legal_moves().is_empty());
    assert!(state.is_stalemate());
    assert!(!state.is_checkmate());
    assert_eq!(state.outcome(), GameOutcome::Stalemate);
}

#[test]
fn test_checkmate_flags() {
    let mut state = board("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
    assert!(state.get_legal_moves().is_empty());
    assert!(state.is_checkmate());
    assert!(!state.is_stalemate());
}
