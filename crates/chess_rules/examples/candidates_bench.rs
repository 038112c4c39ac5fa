//! Candidate generation benchmark for profiling with cargo-flamegraph.
//!
//! Runs `candidates_into` for every piece of every test position many times.
//!
//! Usage:
//!   cargo flamegraph --example candidates_bench -p chess_rules

use chess_rules::{Board, candidates_into};
use std::time::Instant;

/// Placements ranging from crowded to open boards
const TEST_POSITIONS: &[(&str, &str)] = &[
    ("Start", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
    ("Open files", "r3k2r/pp3ppp/2n5/8/8/2N5/PP3PPP/R3K2R"),
    ("Queens out", "rnb1kbnr/pppp1ppp/8/4p3/4P2q/5Q2/PPPP1PPP/RNB1KBNR"),
    ("Rook endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8"),
    ("Lone queen", "8/8/8/3Q4/8/8/8/k6K"),
];

const ITERATIONS: usize = 100_000;

fn main() {
    println!("=== Candidate Generation Benchmark ===");
    println!("Iterations per position: {ITERATIONS}");
    println!();

    let mut buf = Vec::with_capacity(32);
    let mut total_squares = 0usize;
    let mut total_time = std::time::Duration::ZERO;

    for (name, placement) in TEST_POSITIONS {
        let board = match Board::from_placement(placement) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("Skipping {name}: {e}");
                continue;
            }
        };
        let pieces: Vec<_> = board.pieces().collect();

        print!("{name:.<20}");

        let start = Instant::now();
        let mut generated = 0usize;

        for _ in 0..ITERATIONS {
            for &(sq, pc) in &pieces {
                candidates_into(pc, sq, &board, &mut buf);
                generated += buf.len();
            }
        }

        let elapsed = start.elapsed();
        total_squares += generated;
        total_time += elapsed;

        let per_board = generated as f64 / ITERATIONS as f64;
        let bps = if elapsed.as_secs_f64() > 0.0 {
            ITERATIONS as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {per_board:>5.1} squares/board, {bps:>10.0} boards/sec ({elapsed:>8.3?})");
    }

    println!();
    println!("{:=<70}", "");
    println!("TOTAL: {total_squares} squares in {total_time:.3?}");
}
