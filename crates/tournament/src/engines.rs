//! Engine specs: the `name[:depth]` strings used in configs and on the
//! command line.

use std::fmt;
use std::str::FromStr;

use chess_core::{Engine, SearchLimits};
use classical_engine::{ClassicalEngine, SearchAlgorithm};
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};

use crate::error::TournamentError;

/// Depth used when a search spec omits one.
pub const DEFAULT_DEPTH: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EngineSpec {
    Search { algorithm: SearchAlgorithm, depth: u8 },
    Random,
}

impl EngineSpec {
    /// Builds a fresh engine. A seed makes its move choices reproducible.
    pub fn build(&self, seed: Option<u64>) -> Box<dyn Engine> {
        match (*self, seed) {
            (EngineSpec::Search { algorithm, .. }, Some(seed)) => {
                Box::new(ClassicalEngine::with_seed(algorithm, seed))
            }
            (EngineSpec::Search { algorithm, .. }, None) => Box::new(ClassicalEngine::new(algorithm)),
            (EngineSpec::Random, Some(seed)) => Box::new(RandomEngine::with_seed(seed)),
            (EngineSpec::Random, None) => Box::new(RandomEngine::new()),
        }
    }

    pub fn limits(&self) -> SearchLimits {
        match self {
            EngineSpec::Search { depth, .. } => SearchLimits::depth(*depth),
            EngineSpec::Random => SearchLimits::depth(0),
        }
    }
}

impl FromStr for EngineSpec {
    type Err = TournamentError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let spec = spec.trim();
        let (name, depth) = match spec.split_once(':') {
            Some((name, depth)) => (name, Some(depth)),
            None => (spec, None),
        };

        if name.eq_ignore_ascii_case("random") {
            return match depth {
                None => Ok(EngineSpec::Random),
                Some(_) => Err(TournamentError::InvalidDepth {
                    spec: spec.to_string(),
                }),
            };
        }

        let algorithm: SearchAlgorithm = name
            .parse()
            .map_err(|_| TournamentError::UnknownEngine(spec.to_string()))?;

        let depth = match (algorithm, depth) {
            // One ply of lookahead, by construction
            (SearchAlgorithm::Greedy, None) => 1,
            (SearchAlgorithm::Greedy, Some(_)) => {
                return Err(TournamentError::InvalidDepth {
                    spec: spec.to_string(),
                });
            }
            (_, None) => DEFAULT_DEPTH,
            (_, Some(d)) => d.parse().map_err(|_| TournamentError::InvalidDepth {
                spec: spec.to_string(),
            })?,
        };

        Ok(EngineSpec::Search { algorithm, depth })
    }
}

impl TryFrom<String> for EngineSpec {
    type Error = TournamentError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<EngineSpec> for String {
    fn from(spec: EngineSpec) -> Self {
        spec.to_string()
    }
}

impl fmt::Display for EngineSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineSpec::Search {
                algorithm: SearchAlgorithm::Greedy,
                ..
            } => f.write_str("greedy"),
            EngineSpec::Search { algorithm, depth } => write!(f, "{algorithm}:{depth}"),
            EngineSpec::Random => f.write_str("random"),
        }
    }
}

#[cfg(test)]
#[path = "engines_tests.rs"]
mod engines_tests;
