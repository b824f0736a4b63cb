use crate::board::BoardState;
use crate::moves::Move;

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
pub fn perft(state: &mut BoardState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0u64;
    for mv in state.get_legal_moves() {
        state.make_move(mv);
        nodes += perft(state, depth - 1);
        state.undo_move();
    }
    nodes
}

/// Per-root-move node counts, handy for locating a generator bug against a
/// reference engine's `divide` output.
pub fn perft_divide(state: &mut BoardState, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    state
        .get_legal_moves()
        .into_iter()
        .map(|mv| {
            state.make_move(mv);
            let nodes = perft(state, depth - 1);
            state.undo_move();
            (mv, nodes)
        })
        .collect()
}
