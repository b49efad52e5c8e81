//! Command-line front end for the tour engine.
//!
//! Owns everything the engine deliberately does not: argument
//! validation, the parity rejection for closed tours, and rendering of
//! the returned trace.

use clap::{Parser, ValueEnum};
use knights_core::{Board, Position, Solver, Step, TourKind};
use std::process;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Open,
    Closed,
}

impl From<KindArg> for TourKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Open => TourKind::Open,
            KindArg::Closed => TourKind::Closed,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "knights",
    about = "Compute a knight's tour and print its step-by-step trace"
)]
struct Args {
    /// Board size (n for an n x n board)
    size: usize,

    /// Start row, 0-indexed
    row: usize,

    /// Start column, 0-indexed
    col: usize,

    /// Tour kind
    #[arg(long, value_enum, default_value_t = KindArg::Open)]
    kind: KindArg,

    /// Print the trace as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Skip the per-step listing and only print the solved board
    #[arg(long)]
    quiet: bool,
}

/// A closed tour needs an even number of cells: the knight alternates
/// cell colors, so an odd-length cycle cannot exist.
fn closed_tour_possible(size: usize) -> bool {
    (size * size) % 2 == 0
}

fn validate(args: &Args) -> Result<(), String> {
    if args.size < 1 {
        return Err("board size must be at least 1".into());
    }
    if args.row >= args.size || args.col >= args.size {
        return Err(format!(
            "start ({}, {}) is outside a {}x{} board",
            args.row, args.col, args.size, args.size
        ));
    }
    if matches!(args.kind, KindArg::Closed) && !closed_tour_possible(args.size) {
        return Err(format!(
            "a closed tour is impossible on a {}x{} board: it has an odd number of cells",
            args.size, args.size
        ));
    }
    Ok(())
}

fn print_steps(trace: &knights_core::Trace) {
    for (i, step) in trace.iter().enumerate() {
        match step {
            Step::Advance(pos) => println!("{i:>5}  advance to {pos}"),
            Step::Retreat(pos) => println!("{i:>5}  retreat to {pos}"),
            Step::Snapshot(board) => {
                println!("{i:>5}  solved board:");
                println!("{board}");
            }
        }
    }
}

fn main() {
    let args = Args::parse();
    if let Err(message) = validate(&args) {
        eprintln!("error: {message}");
        process::exit(2);
    }

    let start = Position::new(args.row, args.col);
    let kind = TourKind::from(args.kind);

    if !args.json {
        // Preview: the empty board with the knight placed.
        if let Ok(preview) = Board::new(args.size, start) {
            println!("{preview}");
        }
        println!("searching for a {kind} tour from {start}...\n");
    }

    let result = match Solver::new().generate_tour(args.size, start, kind) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("error: {error}");
            process::exit(2);
        }
    };

    if !result.found() {
        eprintln!(
            "no {kind} tour exists from {start} on a {size}x{size} board \
             (searched for {elapsed:.3}s)",
            size = args.size,
            elapsed = result.elapsed_secs(),
        );
        process::exit(1);
    }

    if args.json {
        match serde_json::to_string_pretty(&result.trace) {
            Ok(json) => println!("{json}"),
            Err(error) => {
                eprintln!("error: failed to serialize trace: {error}");
                process::exit(2);
            }
        }
        return;
    }

    if args.quiet {
        if let Some(snapshot) = result.trace.snapshot() {
            println!("{snapshot}");
        }
    } else {
        print_steps(&result.trace);
    }
    println!(
        "found a {kind} tour in {elapsed:.3}s ({steps} trace steps)",
        elapsed = result.elapsed_secs(),
        steps = result.trace.len(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(size: usize, row: usize, col: usize, kind: KindArg) -> Args {
        Args {
            size,
            row,
            col,
            kind,
            json: false,
            quiet: false,
        }
    }

    #[test]
    fn test_parity_check() {
        assert!(closed_tour_possible(6));
        assert!(!closed_tour_possible(5));
        assert!(!closed_tour_possible(1));
    }

    #[test]
    fn test_validate_rejects_bad_requests() {
        assert!(validate(&args(0, 0, 0, KindArg::Open)).is_err());
        assert!(validate(&args(5, 5, 0, KindArg::Open)).is_err());
        assert!(validate(&args(5, 0, 0, KindArg::Closed)).is_err());
        assert!(validate(&args(5, 0, 0, KindArg::Open)).is_ok());
        assert!(validate(&args(6, 0, 0, KindArg::Closed)).is_ok());
    }
}
