//! Depth-limited adversarial search.
//!
//! Every strategy works on a borrowed board through make/undo and returns the
//! chosen move alongside its score instead of recording it anywhere else. A
//! node generates its legal moves before testing depth, so mates and
//! stalemates are scored even on the horizon.

use std::fmt;
use std::str::FromStr;

use chess_core::{BoardState, Move};
use rand::Rng;
use rand::seq::SliceRandom;
use random_engine::find_random_move;
use thiserror::Error;

use crate::eval::{CHECKMATE, evaluate};

/// Bound strictly outside every reachable score.
pub const INFINITY: i32 = CHECKMATE + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchAlgorithm {
    /// Negamax with alpha-beta pruning
    AlphaBeta,
    /// Negamax without pruning
    Negamax,
    /// Two-sided minimax, white maximizing
    Minimax,
    /// One ply of lookahead: minimize the opponent's best reply
    Greedy,
}

impl SearchAlgorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchAlgorithm::AlphaBeta => "alphabeta",
            SearchAlgorithm::Negamax => "negamax",
            SearchAlgorithm::Minimax => "minimax",
            SearchAlgorithm::Greedy => "greedy",
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown search algorithm `{0}` (expected alphabeta, negamax, minimax or greedy)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for SearchAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alphabeta" | "alpha-beta" | "ab" => Ok(SearchAlgorithm::AlphaBeta),
            "negamax" => Ok(SearchAlgorithm::Negamax),
            "minimax" => Ok(SearchAlgorithm::Minimax),
            "greedy" => Ok(SearchAlgorithm::Greedy),
            other => Err(UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Score from the side to move's perspective
    pub score: i32,
    /// `None` at depth 0 or when there are no root moves
    pub best_move: Option<Move>,
    /// Moves made during the search
    pub nodes: u64,
}

/// Picks a move with negamax alpha-beta, falling back to a random legal move
/// when the search selects none. `None` only when `legal_moves` is empty.
pub fn select_move(state: &mut BoardState, legal_moves: &[Move], depth: u8) -> Option<Move> {
    select_move_with_rng(
        state,
        legal_moves,
        depth,
        SearchAlgorithm::AlphaBeta,
        &mut rand::thread_rng(),
    )
}

pub fn select_move_with_rng<R: Rng + ?Sized>(
    state: &mut BoardState,
    legal_moves: &[Move],
    depth: u8,
    algorithm: SearchAlgorithm,
    rng: &mut R,
) -> Option<Move> {
    if legal_moves.is_empty() {
        return None;
    }
    let outcome = search_root(state, legal_moves, depth, algorithm, rng);
    outcome
        .best_move
        .or_else(|| find_random_move(legal_moves, rng))
}

/// Runs `algorithm` over a shuffled copy of `legal_moves`.
///
/// `legal_moves` must be the set most recently generated for `state`. The
/// board is left as it was found.
pub fn search_root<R: Rng + ?Sized>(
    state: &mut BoardState,
    legal_moves: &[Move],
    depth: u8,
    algorithm: SearchAlgorithm,
    rng: &mut R,
) -> SearchOutcome {
    let mut moves = legal_moves.to_vec();
    moves.shuffle(rng);

    let multiplier = state.side_to_move().multiplier();
    let mut nodes = 0u64;
    let (score, best_move) = match algorithm {
        SearchAlgorithm::AlphaBeta => alpha_beta_over(
            state, &moves, depth, -INFINITY, INFINITY, multiplier, &mut nodes,
        ),
        SearchAlgorithm::Negamax => negamax_over(state, &moves, depth, multiplier, &mut nodes),
        SearchAlgorithm::Minimax => {
            let white = state.is_white_to_move();
            let (score, mv) = minimax_over(state, &moves, depth, white, &mut nodes);
            (multiplier * score, mv)
        }
        SearchAlgorithm::Greedy => greedy_over(state, &moves, multiplier, &mut nodes),
    };

    SearchOutcome {
        score,
        best_move,
        nodes,
    }
}

/// Negamax with alpha-beta pruning. Scores are from the perspective of the
/// side whose `multiplier` is passed (+1 white, -1 black).
pub fn alpha_beta(
    state: &mut BoardState,
    depth: u8,
    alpha: i32,
    beta: i32,
    multiplier: i32,
    nodes: &mut u64,
) -> (i32, Option<Move>) {
    let moves = state.get_legal_moves();
    alpha_beta_over(state, &moves, depth, alpha, beta, multiplier, nodes)
}

fn alpha_beta_over(
    state: &mut BoardState,
    moves: &[Move],
    depth: u8,
    mut alpha: i32,
    beta: i32,
    multiplier: i32,
    nodes: &mut u64,
) -> (i32, Option<Move>) {
    if depth == 0 || moves.is_empty() {
        return (multiplier * evaluate(state), None);
    }

    let mut best = -INFINITY;
    let mut best_move = None;
    for &mv in moves {
        state.make_move(mv);
        *nodes += 1;
        let (score, _) = alpha_beta(state, depth - 1, -beta, -alpha, -multiplier, nodes);
        let score = -score;
        state.undo_move();

        if score > best {
            best = score;
            best_move = Some(mv);
        }
        if best > alpha {
            alpha = best;
        }
        if best >= beta {
            break; // Beta cutoff
        }
    }
    (best, best_move)
}

/// Negamax without pruning. Visits the full tree.
pub fn negamax(
    state: &mut BoardState,
    depth: u8,
    multiplier: i32,
    nodes: &mut u64,
) -> (i32, Option<Move>) {
    let moves = state.get_legal_moves();
    negamax_over(state, &moves, depth, multiplier, nodes)
}

fn negamax_over(
    state: &mut BoardState,
    moves: &[Move],
    depth: u8,
    multiplier: i32,
    nodes: &mut u64,
) -> (i32, Option<Move>) {
    if depth == 0 || moves.is_empty() {
        return (multiplier * evaluate(state), None);
    }

    let mut best = -INFINITY;
    let mut best_move = None;
    for &mv in moves {
        state.make_move(mv);
        *nodes += 1;
        let score = -negamax(state, depth - 1, -multiplier, nodes).0;
        state.undo_move();

        if score > best {
            best = score;
            best_move = Some(mv);
        }
    }
    (best, best_move)
}

/// Two-sided minimax. Scores are always from white's perspective; white
/// maximizes and black minimizes.
pub fn minimax(
    state: &mut BoardState,
    depth: u8,
    white_to_move: bool,
    nodes: &mut u64,
) -> (i32, Option<Move>) {
    let moves = state.get_legal_moves();
    minimax_over(state, &moves, depth, white_to_move, nodes)
}

fn minimax_over(
    state: &mut BoardState,
    moves: &[Move],
    depth: u8,
    white_to_move: bool,
    nodes: &mut u64,
) -> (i32, Option<Move>) {
    if depth == 0 || moves.is_empty() {
        return (evaluate(state), None);
    }

    let mut best_move = None;
    if white_to_move {
        let mut max_score = -INFINITY;
        for &mv in moves {
            state.make_move(mv);
            *nodes += 1;
            let (score, _) = minimax(state, depth - 1, false, nodes);
            state.undo_move();
            if score > max_score {
                max_score = score;
                best_move = Some(mv);
            }
        }
        (max_score, best_move)
    } else {
        let mut min_score = INFINITY;
        for &mv in moves {
            state.make_move(mv);
            *nodes += 1;
            let (score, _) = minimax(state, depth - 1, true, nodes);
            state.undo_move();
            if score < min_score {
                min_score = score;
                best_move = Some(mv);
            }
        }
        (min_score, best_move)
    }
}

/// One-ply lookahead: plays the move whose strongest reply is weakest.
/// Scores the same as a depth-2 negamax.
pub fn greedy(state: &mut BoardState, nodes: &mut u64) -> (i32, Option<Move>) {
    let multiplier = state.side_to_move().multiplier();
    let moves = state.get_legal_moves();
    greedy_over(state, &moves, multiplier, nodes)
}

fn greedy_over(
    state: &mut BoardState,
    moves: &[Move],
    multiplier: i32,
    nodes: &mut u64,
) -> (i32, Option<Move>) {
    if moves.is_empty() {
        return (multiplier * evaluate(state), None);
    }

    let mut opponent_min_max = INFINITY;
    let mut best_move = None;
    for &mv in moves {
        state.make_move(mv);
        *nodes += 1;

        let replies = state.get_legal_moves();
        let opponent_max = if replies.is_empty() {
            -multiplier * evaluate(state)
        } else {
            let mut opponent_max = -INFINITY;
            for reply in replies {
                state.make_move(reply);
                *nodes += 1;
                state.get_legal_moves();
                let score = -multiplier * evaluate(state);
                state.undo_move();
                opponent_max = opponent_max.max(score);
            }
            opponent_max
        };
        state.undo_move();

        if opponent_max < opponent_min_max {
            opponent_min_max = opponent_max;
            best_move = Some(mv);
        }
    }
    (-opponent_min_max, best_move)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
