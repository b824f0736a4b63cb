//! Error types for position setup and coordinate parsing.
//!
//! Move execution itself never fails: `make_move` trusts that its argument came
//! from the most recent legal-move set, and `undo_move` on an empty history is
//! a no-op. Only text coming from outside the engine is validated.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// FEN string could not be turned into a position
    #[error("Invalid FEN: {reason}")]
    InvalidFen { reason: String },

    /// Square text was not a file a-h followed by a rank 1-8
    #[error("Invalid square: `{0}`")]
    InvalidSquare(String),

    /// Move text was not four coordinate characters
    #[error("Invalid move text: `{0}` (expected origin and destination, e.g. e2e4)")]
    InvalidMoveText(String),

    /// Well-formed move text that is not in the current legal set
    #[error("Illegal move: {0}")]
    IllegalMove(String),
}

impl ChessError {
    pub(crate) fn fen(reason: impl Into<String>) -> Self {
        ChessError::InvalidFen {
            reason: reason.into(),
        }
    }
}

pub type ChessResult<T> = Result<T, ChessError>;
