//! Classical Chess Engine
//!
//! Depth-limited search over material evaluation.
//! The default strategy is negamax with alpha-beta pruning; plain negamax,
//! minimax and a greedy one-ply search are kept for comparison.

mod eval;
mod search;

use chess_core::{BoardState, Engine, SearchLimits, SearchResult};
use rand::SeedableRng;
use rand::rngs::StdRng;
use random_engine::find_random_move;
use tracing::debug;

/// Classical chess engine over a selectable search strategy.
///
/// Root moves are shuffled before every search, so equally scored moves vary
/// from game to game unless a seed is fixed.
#[derive(Debug, Clone)]
pub struct ClassicalEngine {
    algorithm: SearchAlgorithm,
    rng: StdRng,
    name: String,
    /// Node counter for statistics
    nodes: u64,
}

impl Default for ClassicalEngine {
    fn default() -> Self {
        Self::new(SearchAlgorithm::AlphaBeta)
    }
}

impl ClassicalEngine {
    pub fn new(algorithm: SearchAlgorithm) -> Self {
        Self::with_rng(algorithm, StdRng::from_entropy())
    }

    pub fn with_seed(algorithm: SearchAlgorithm, seed: u64) -> Self {
        Self::with_rng(algorithm, StdRng::seed_from_u64(seed))
    }

    fn with_rng(algorithm: SearchAlgorithm, rng: StdRng) -> Self {
        Self {
            algorithm,
            rng,
            name: algorithm.to_string(),
            nodes: 0,
        }
    }

    pub fn algorithm(&self) -> SearchAlgorithm {
        self.algorithm
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, state: &BoardState, limits: SearchLimits) -> SearchResult {
        let mut state = state.clone();
        let moves = state.get_legal_moves();

        let outcome = search_root(&mut state, &moves, limits.depth, self.algorithm, &mut self.rng);
        self.nodes = outcome.nodes;

        let best_move = outcome
            .best_move
            .or_else(|| find_random_move(&moves, &mut self.rng));

        debug!(
            algorithm = %self.algorithm,
            depth = limits.depth,
            nodes = outcome.nodes,
            score = outcome.score,
            chosen = ?best_move.map(|m| m.coords()),
            fallback = outcome.best_move.is_none() && best_move.is_some(),
            "search finished"
        );

        SearchResult {
            best_move,
            score: outcome.score,
            depth: limits.depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use
pub use eval::{CHECKMATE, STALEMATE, evaluate, piece_value, score_material};
pub use search::{
    INFINITY, SearchAlgorithm, SearchOutcome, UnknownAlgorithm, alpha_beta, greedy, minimax,
    negamax, search_root, select_move, select_move_with_rng,
};
