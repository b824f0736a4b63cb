pub mod attacks;
pub mod board;
pub mod error;
pub mod movegen;
pub mod moves;
pub mod notation;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use attacks::{Check, Pin, PinTable, ScanResult};
pub use board::*;
pub use error::{ChessError, ChessResult};
pub use moves::Move;
pub use notation::*;
pub use perft::{perft, perft_divide};
pub use types::*;

// =============================================================================
// Engine trait, implemented by every move chooser (search, random)
// =============================================================================

/// How far a search may go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum search depth in plies (half-moves)
    pub depth: u8,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self { depth }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(2)
    }
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The move chosen (None only if there are no legal moves)
    pub best_move: Option<Move>,
    /// Score from the side to move's perspective, in material units
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Trait that all move choosers implement.
///
/// Lets the tournament harness pit search strategies and the random mover
/// against each other without knowing which is which.
pub trait Engine: Send {
    /// Chooses a move for the side to move in `state`.
    ///
    /// The engine may explore on a private copy; `state` is left untouched.
    fn search(&mut self, state: &BoardState, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "chess-negamax"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
