use std::path::PathBuf;

use chess_core::ChessError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TournamentError {
    #[error("Unknown engine `{0}` (expected alphabeta:<depth>, negamax:<depth>, minimax:<depth>, greedy or random)")]
    UnknownEngine(String),

    #[error("Invalid depth in engine spec `{spec}`")]
    InvalidDepth { spec: String },

    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid match config")]
    Config(#[from] toml::de::Error),

    #[error("Invalid game record")]
    Record(#[from] serde_json::Error),

    #[error("Engine `{engine}` returned no move in an ongoing game")]
    NoMove { engine: String },

    /// An engine produced a move the rules engine does not accept
    #[error("Engine `{engine}` played an illegal move")]
    EngineMove {
        engine: String,
        #[source]
        source: ChessError,
    },
}

pub type TournamentResult<T> = Result<T, TournamentError>;
