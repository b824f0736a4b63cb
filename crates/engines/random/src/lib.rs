//! Random Move Chess Engine
//!
//! Selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Baseline comparisons (any search should easily beat this)
//! - The fallback when a search selects no move
//! - Stress testing move generation in self-play

use chess_core::{BoardState, Engine, Move, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;


/// Uniform choice from `moves`; `None` when empty.
pub fn find_random_move<R: Rng + ?Sized>(moves: &[Move], rng: &mut R) -> Option<Move> {
    moves.choose(rng).copied()
}

/// A chess engine that plays random legal moves.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Reproducible move sequence for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, state: &BoardState, _limits: SearchLimits) -> SearchResult {
        let mut state = state.clone();
        let moves = state.get_legal_moves();
        self.nodes = 1;

        let best_move = find_random_move(&moves, &mut self.rng);
        debug!(
            legal = moves.len(),
            chosen = ?best_move.map(|m| m.coords()),
            "random move"
        );

        SearchResult {
            best_move,
            score: 0,
            depth: 0,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "random"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
