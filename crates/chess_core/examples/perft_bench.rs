//! Throughput of the rules engine, split by phase.
//!
//! Walks the perft tree of each position once to collect every interior
//! position, then times three things separately over that set: legal-move
//! generation alone, make/undo of each legal move, and full perft.
//!
//! Usage:
//!   cargo run --release --example perft_bench -p chess_core -- [depth] [fen]
//!
//! Profile with:
//!   cargo flamegraph --profile profiling --example perft_bench -p chess_core -- 4

use std::env;
use std::time::{Duration, Instant};

use chess_core::{BoardState, Move, STARTING_FEN, perft};

const POSITIONS: &[(&str, &str)] = &[
    ("start", STARTING_FEN),
    (
        "kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ),
    ("rook endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"),
    (
        "middlegame",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
    ),
];

/// Every position strictly above the leaves of a `depth` tree.
fn interior_positions(state: &mut BoardState, depth: u8, out: &mut Vec<BoardState>) {
    if depth == 0 {
        return;
    }
    out.push(state.clone());
    for mv in state.get_legal_moves() {
        state.make_move(mv);
        interior_positions(state, depth - 1, out);
        state.undo_move();
    }
}

struct Timing {
    count: u64,
    elapsed: Duration,
}

impl Timing {
    fn per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 { self.count as f64 / secs } else { 0.0 }
    }
}

fn time_generation(positions: &mut [BoardState]) -> Timing {
    let start = Instant::now();
    let mut count = 0u64;
    for state in positions.iter_mut() {
        count += state.get_legal_moves().len() as u64;
    }
    Timing {
        count,
        elapsed: start.elapsed(),
    }
}

fn time_make_undo(positions: &mut [BoardState]) -> Timing {
    let sets: Vec<Vec<Move>> = positions.iter_mut().map(|s| s.get_legal_moves()).collect();
    let start = Instant::now();
    let mut count = 0u64;
    for (state, moves) in positions.iter_mut().zip(&sets) {
        for &mv in moves {
            state.make_move(mv);
            state.undo_move();
            count += 1;
        }
    }
    Timing {
        count,
        elapsed: start.elapsed(),
    }
}

fn time_perft(state: &mut BoardState, depth: u8) -> Timing {
    let start = Instant::now();
    let count = perft(state, depth);
    Timing {
        count,
        elapsed: start.elapsed(),
    }
}

fn bench(name: &str, fen: &str, depth: u8) -> Option<Timing> {
    let mut state = match BoardState::from_fen(fen) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{name}: {e}");
            return None;
        }
    };

    let mut positions = Vec::new();
    interior_positions(&mut state, depth, &mut positions);

    let generation = time_generation(&mut positions);
    let make_undo = time_make_undo(&mut positions);
    let tree = time_perft(&mut state, depth);

    println!("{name} ({} interior positions)", positions.len());
    println!(
        "  generate   {:>10} moves  {:>9.3?}  {:>12.0} moves/s",
        generation.count,
        generation.elapsed,
        generation.per_second()
    );
    println!(
        "  make/undo  {:>10} pairs  {:>9.3?}  {:>12.0} pairs/s",
        make_undo.count,
        make_undo.elapsed,
        make_undo.per_second()
    );
    println!(
        "  perft({depth})   {:>10} nodes  {:>9.3?}  {:>12.0} nodes/s",
        tree.count,
        tree.elapsed,
        tree.per_second()
    );
    Some(tree)
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let depth: u8 = args.first().and_then(|s| s.parse().ok()).unwrap_or(4);

    if let Some(fen) = args.get(1) {
        bench("custom", fen, depth);
        return;
    }

    let mut nodes = 0u64;
    let mut elapsed = Duration::ZERO;
    for (name, fen) in POSITIONS {
        if let Some(tree) = bench(name, fen, depth) {
            nodes += tree.count;
            elapsed += tree.elapsed;
        }
    }
    let total = Timing {
        count: nodes,
        elapsed,
    };
    println!(
        "perft total: {nodes} nodes in {elapsed:.3?} ({:.0} nodes/s)",
        total.per_second()
    );
}
