//! Game and match records, stored as JSON.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::MatchConfig;
use crate::error::{TournamentError, TournamentResult};

/// Result of a single game from white's side
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameScore {
    #[serde(rename = "1-0")]
    WhiteWins,
    #[serde(rename = "0-1")]
    BlackWins,
    #[serde(rename = "1/2-1/2")]
    Draw,
}

impl GameScore {
    pub fn as_str(self) -> &'static str {
        match self {
            GameScore::WhiteWins => "1-0",
            GameScore::BlackWins => "0-1",
            GameScore::Draw => "1/2-1/2",
        }
    }
}

/// Why a game ended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Checkmate,
    Stalemate,
    MaxPlies,
}

/// One finished game: who played, how it ended, and every move in
/// coordinate text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    pub result: GameScore,
    pub termination: Termination,
    pub moves: Vec<String>,
}

impl GameRecord {
    pub fn plies(&self) -> usize {
        self.moves.len()
    }
}

/// Result of a match (multiple games), from engine1's perspective
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }

    /// Adds a game in which engine1 played white when `engine1_white`.
    pub fn record(&mut self, score: GameScore, engine1_white: bool) {
        match (score, engine1_white) {
            (GameScore::Draw, _) => self.draws += 1,
            (GameScore::WhiteWins, true) | (GameScore::BlackWins, false) => self.wins += 1,
            (GameScore::WhiteWins, false) | (GameScore::BlackWins, true) => self.losses += 1,
        }
    }
}

/// Complete match record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchRecord {
    pub engine1: String,
    pub engine2: String,
    /// Configuration used
    pub config: MatchConfig,
    pub result: MatchResult,
    pub games: Vec<GameRecord>,
}

impl MatchRecord {
    pub fn new(engine1: &str, engine2: &str, config: MatchConfig) -> Self {
        Self {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            config,
            result: MatchResult::new(),
            games: Vec::new(),
        }
    }

    pub fn add_game(&mut self, game: GameRecord, engine1_white: bool) {
        self.result.record(game.result, engine1_white);
        self.games.push(game);
    }

    /// Save record to JSON file, creating parent directories as needed
    pub fn save(&self, path: &Path) -> TournamentResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        let write_err = |source| TournamentError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(write_err)?;
        }
        std::fs::write(path, json).map_err(write_err)
    }

    /// Load record from JSON file
    pub fn load(path: &Path) -> TournamentResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| TournamentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Match: {} vs {} ===\n\n", self.engine1, self.engine2));
        report.push_str(&format!(
            "Config: {} games, max {} plies, alternate colors: {}\n\n",
            self.config.games, self.config.max_plies, self.config.alternate_colors
        ));

        report.push_str(&format!(
            "{:<4} {:<16} {:<16} {:<8} {:<11} {:>5}\n",
            "#", "White", "Black", "Result", "Ending", "Plies"
        ));
        report.push_str(&"-".repeat(65));
        report.push('\n');

        for (i, game) in self.games.iter().enumerate() {
            let ending = match game.termination {
                Termination::Checkmate => "checkmate",
                Termination::Stalemate => "stalemate",
                Termination::MaxPlies => "ply cap",
            };
            report.push_str(&format!(
                "{:<4} {:<16} {:<16} {:<8} {:<11} {:>5}\n",
                i + 1,
                game.white,
                game.black,
                game.result.as_str(),
                ending,
                game.plies()
            ));
        }

        report.push('\n');
        report.push_str(&format!(
            "{}: {} wins, {} losses, {} draws (score {:.1}%)\n",
            self.engine1,
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score() * 100.0
        ));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
