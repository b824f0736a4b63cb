//! Match configuration, loaded from TOML.
//!
//! ```toml
//! games = 10
//! max_plies = 200
//! alternate_colors = true
//! white = "alphabeta:3"
//! black = "greedy"
//! output = "results/ab3-vs-greedy.json"
//! seed = 42
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engines::EngineSpec;
use crate::error::{TournamentError, TournamentResult};

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: u32,
    /// Plies per game before declaring a draw
    pub max_plies: u32,
    /// Whether to swap colors every other game
    pub alternate_colors: bool,
    /// Engine playing white in the first game
    pub white: EngineSpec,
    /// Engine playing black in the first game
    pub black: EngineSpec,
    /// Where to write the match record (None = don't save)
    pub output: Option<PathBuf>,
    /// Base seed; game `n` seeds its engines from `seed + n`
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 10,
            max_plies: 200,
            alternate_colors: true,
            white: EngineSpec::Search {
                algorithm: classical_engine::SearchAlgorithm::AlphaBeta,
                depth: 2,
            },
            black: EngineSpec::Random,
            output: None,
            seed: None,
        }
    }
}

impl MatchConfig {
    pub fn from_toml_str(text: &str) -> TournamentResult<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> TournamentResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| TournamentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Seed for game number `game`, if the match is seeded.
    pub fn game_seed(&self, game: u32) -> Option<u64> {
        self.seed.map(|s| s.wrapping_add(u64::from(game)))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
