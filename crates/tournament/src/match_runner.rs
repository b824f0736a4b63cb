//! Match runner for playing games between engines

use chess_core::{BoardState, Engine, GameOutcome, find_legal_move};
use tracing::{debug, info};

use crate::config::MatchConfig;
use crate::engines::EngineSpec;
use crate::error::{TournamentError, TournamentResult};
use crate::results::{GameRecord, GameScore, MatchRecord, Termination};

/// Runs matches between two engine specs
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run the configured match.
    ///
    /// `config.white` is engine1; with alternating colors it takes black in
    /// every odd-numbered game. Engines are rebuilt for each game so a seeded
    /// match replays identically.
    pub fn run_match(&self) -> TournamentResult<MatchRecord> {
        let engine1 = self.config.white;
        let engine2 = self.config.black;
        let mut record = MatchRecord::new(
            &engine1.to_string(),
            &engine2.to_string(),
            self.config.clone(),
        );

        for game_num in 0..self.config.games {
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;
            let (white, black) = if engine1_white {
                (engine1, engine2)
            } else {
                (engine2, engine1)
            };

            info!(game = game_num + 1, total = self.config.games, %white, %black, "game started");
            let seed = self.config.game_seed(game_num);
            let game = self.play_game(white, black, seed)?;
            info!(
                game = game_num + 1,
                result = game.result.as_str(),
                termination = ?game.termination,
                plies = game.plies(),
                "game finished"
            );

            record.add_game(game, engine1_white);
        }

        info!(
            wins = record.result.wins,
            losses = record.result.losses,
            draws = record.result.draws,
            "match finished"
        );
        Ok(record)
    }

    /// Play a single game from the standard start
    pub fn play_game(
        &self,
        white: EngineSpec,
        black: EngineSpec,
        seed: Option<u64>,
    ) -> TournamentResult<GameRecord> {
        let mut white_engine = white.build(seed);
        let mut black_engine = black.build(seed.map(|s| s.wrapping_add(1 << 32)));
        play_from(
            BoardState::new_game(),
            (white, white_engine.as_mut()),
            (black, black_engine.as_mut()),
            self.config.max_plies,
        )
    }
}

/// Plays `state` out to checkmate, stalemate or `max_plies` more plies.
///
/// Talks to the rules engine only through its public surface: request the
/// legal set, submit a move by its coordinate text, read the outcome.
pub fn play_from(
    mut state: BoardState,
    white: (EngineSpec, &mut dyn Engine),
    black: (EngineSpec, &mut dyn Engine),
    max_plies: u32,
) -> TournamentResult<GameRecord> {
    let (white_spec, white_engine) = white;
    let (black_spec, black_engine) = black;
    white_engine.new_game();
    black_engine.new_game();

    let mut moves = Vec::new();
    let termination = loop {
        // Refreshes the terminal flags
        state.get_legal_moves();
        match state.outcome() {
            GameOutcome::Checkmate => break Termination::Checkmate,
            GameOutcome::Stalemate => break Termination::Stalemate,
            GameOutcome::Ongoing => {}
        }
        if moves.len() as u32 >= max_plies {
            break Termination::MaxPlies;
        }

        let (spec, engine): (EngineSpec, &mut dyn Engine) = if state.is_white_to_move() {
            (white_spec, &mut *white_engine)
        } else {
            (black_spec, &mut *black_engine)
        };
        let result = engine.search(&state, spec.limits());
        let Some(chosen) = result.best_move else {
            return Err(TournamentError::NoMove {
                engine: spec.to_string(),
            });
        };

        let text = chosen.coords();
        let mv = find_legal_move(&mut state, &text).map_err(|source| {
            TournamentError::EngineMove {
                engine: spec.to_string(),
                source,
            }
        })?;
        debug!(ply = moves.len() + 1, %spec, mv = %text, score = result.score, "move");
        state.make_move(mv);
        moves.push(text);
    };

    let result = match termination {
        Termination::Checkmate if state.is_white_to_move() => GameScore::BlackWins,
        Termination::Checkmate => GameScore::WhiteWins,
        Termination::Stalemate | Termination::MaxPlies => GameScore::Draw,
    };

    Ok(GameRecord {
        white: white_spec.to_string(),
        black: black_spec.to_string(),
        result,
        termination,
        moves,
    })
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
