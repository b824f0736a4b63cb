//! Material evaluation.

use chess_core::{BoardState, Color, PieceKind};

/// Score of a won game. Larger than any possible material difference.
pub const CHECKMATE: i32 = 1000;
pub const STALEMATE: i32 = 0;

/// Material values indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [i32; 6] = [1, 3, 3, 5, 10, 0];

pub fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.idx()]
}

/// White material minus black material.
pub fn score_material(state: &BoardState) -> i32 {
    state
        .pieces()
        .map(|(_, pc)| match pc.color {
            Color::White => piece_value(pc.kind),
            Color::Black => -piece_value(pc.kind),
        })
        .sum()
}

/// Evaluates the position from white's perspective.
///
/// Terminal flags are read as left by the most recent
/// [`BoardState::get_legal_moves`] call, so callers generate moves first when
/// they want mates and stalemates recognized.
///
/// - `+CHECKMATE` = black is mated
/// - `-CHECKMATE` = white is mated
/// - otherwise the material balance
pub fn evaluate(state: &BoardState) -> i32 {
    if state.is_checkmate() {
        if state.is_white_to_move() {
            -CHECKMATE
        } else {
            CHECKMATE
        }
    } else if state.is_stalemate() {
        STALEMATE
    } else {
        score_material(state)
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
