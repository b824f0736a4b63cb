//! Self-play runner
//!
//! This crate provides infrastructure for:
//! - Running matches between search strategies and the random mover
//! - Recording every game as coordinate-text moves
//! - Writing match records and reports
//!
//! # Usage
//!
//! ```bash
//! # Alpha-beta at depth 3 against the greedy searcher
//! cargo run -p tournament -- --white alphabeta:3 --black greedy --games 10
//!
//! # Everything from a config file, with the game count overridden
//! cargo run -p tournament -- --config match.toml --games 4
//! ```

mod config;
mod engines;
mod error;
mod match_runner;
mod results;

pub use config::*;
pub use engines::*;
pub use error::*;
pub use match_runner::*;
pub use results::*;
