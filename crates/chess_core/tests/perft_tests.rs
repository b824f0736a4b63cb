//! Move generator validation against published perft counts.
//!
//! Each `standard.epd` line is a FEN followed by `;D<depth> <nodes>` fields.
//! Counts are checked through `perft_divide`, so a mismatch reports which root
//! moves disagree in size and can be compared with a reference engine's divide
//! output. Depths above `BUDGET` nodes are skipped unless `FULL_PERFT` is set.

use rayon::prelude::*;

use chess_core::{BoardState, perft, perft_divide};

const BUDGET: u64 = 250_000;

struct EpdCase {
    line: usize,
    fen: String,
    counts: Vec<(u8, u64)>,
}

fn parse_case(line: usize, text: &str) -> Option<EpdCase> {
    let mut fields = text.split(';').map(str::trim);
    let fen = fields.next().filter(|f| !f.is_empty())?.to_string();
    let counts = fields
        .filter_map(|field| {
            let (depth, nodes) = field.strip_prefix('D')?.split_once(' ')?;
            Some((depth.parse().ok()?, nodes.trim().parse().ok()?))
        })
        .collect::<Vec<(u8, u64)>>();
    (!counts.is_empty()).then_some(EpdCase { line, fen, counts })
}

fn load_cases() -> Vec<EpdCase> {
    include_str!("standard.epd")
        .lines()
        .enumerate()
        .filter_map(|(i, text)| parse_case(i + 1, text))
        .collect()
}

/// Formats a divide as `e2e4: 9771` lines, sorted by move text.
fn divide_report(split: &[(chess_core::Move, u64)]) -> String {
    let mut lines: Vec<String> = split
        .iter()
        .map(|(mv, nodes)| format!("  {mv}: {nodes}"))
        .collect();
    lines.sort();
    lines.join("\n")
}

#[test]
fn epd_cases_parse() {
    let cases = load_cases();
    assert_eq!(cases.len(), 4);
    assert_eq!(cases[0].counts[0], (1, 20));
    assert!(cases.iter().all(|c| BoardState::from_fen(&c.fen).is_ok()));
}

#[test]
fn perft_matches_standard_counts() {
    let full = std::env::var_os("FULL_PERFT").is_some();
    let cases = load_cases();
    let jobs: Vec<(&EpdCase, u8, u64)> = cases
        .iter()
        .flat_map(|case| case.counts.iter().map(move |&(d, n)| (case, d, n)))
        .filter(|&(_, _, nodes)| full || nodes <= BUDGET)
        .collect();
    assert!(!jobs.is_empty());

    jobs.par_iter().for_each(|&(case, depth, expected)| {
        let mut state = BoardState::from_fen(&case.fen).unwrap();
        let before = state.snapshot();

        let split = perft_divide(&mut state, depth);
        let got: u64 = split.iter().map(|(_, n)| n).sum();
        assert_eq!(
            got,
            expected,
            "line {} depth {depth}: {}\n{}",
            case.line,
            case.fen,
            divide_report(&split)
        );
        assert_eq!(state.snapshot(), before, "line {} left modified", case.line);
    });
}

#[test]
fn divide_children_agree_with_perft_one_ply_down() {
    let mut state = BoardState::from_fen(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    )
    .unwrap();
    for (mv, nodes) in perft_divide(&mut state, 2) {
        state.make_move(mv);
        assert_eq!(perft(&mut state, 1), nodes, "after {mv}");
        state.undo_move();
    }
}

#[test]
fn start_position_divide() {
    let mut state = BoardState::new_game();
    let split = perft_divide(&mut state, 3);
    assert_eq!(split.len(), 20);
    assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), 8902);
    assert_eq!(state.snapshot(), BoardState::new_game().snapshot());
}

#[test]
fn depth_zero() {
    let mut state = BoardState::new_game();
    assert_eq!(perft(&mut state, 0), 1);
    assert!(perft_divide(&mut state, 0).is_empty());
}
