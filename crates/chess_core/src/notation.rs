use crate::board::BoardState;
use crate::error::{ChessError, ChessResult};
use crate::moves::Move;
use crate::types::Square;

/// Splits coordinate text such as `e2e4` into origin and destination.
/// A trailing `q` is accepted and ignored, since promotion is always to a
/// queen.
pub fn parse_coords(txt: &str) -> ChessResult<(Square, Square)> {
    let txt = txt.trim();
    let well_formed = txt.is_ascii()
        && match txt.len() {
            4 => true,
            5 => txt.ends_with('q'),
            _ => false,
        };
    if !well_formed {
        return Err(ChessError::InvalidMoveText(txt.to_string()));
    }
    let from = Square::from_coord(&txt[0..2])
        .ok_or_else(|| ChessError::InvalidSquare(txt[0..2].to_string()))?;
    let to = Square::from_coord(&txt[2..4])
        .ok_or_else(|| ChessError::InvalidSquare(txt[2..4].to_string()))?;
    Ok((from, to))
}

/// Matches coordinate text against the current legal set, so the returned
/// move carries the right castle, en passant and promotion flags.
pub fn find_legal_move(state: &mut BoardState, txt: &str) -> ChessResult<Move> {
    let (from, to) = parse_coords(txt)?;
    state
        .get_legal_moves()
        .into_iter()
        .find(|m| m.from == from && m.to == to)
        .ok_or_else(|| ChessError::IllegalMove(txt.trim().to_string()))
}

/// Plays a whitespace separated list of coordinate moves from the current
/// position. Stops at the first bad move, leaving earlier ones applied.
pub fn play_coords(state: &mut BoardState, moves: &str) -> ChessResult<()> {
    for txt in moves.split_whitespace() {
        let mv = find_legal_move(state, txt)?;
        state.make_move(mv);
    }
    Ok(())
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
