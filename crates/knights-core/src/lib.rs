//! Knight's tour engine.
//!
//! Computes a sequence of knight moves visiting every cell of an n×n
//! board exactly once, by exhaustive fixed-order backtracking, and
//! records every forward and undone step as an ordered [`Trace`]
//! suitable for step-by-step playback. An open tour may end anywhere;
//! a closed tour must end one knight move from its start.
//!
//! The engine is synchronous, deterministic, and free of shared state:
//! every search owns its board and trace for the duration of one call.
//! Input validation, parity rejection for closed tours on odd-cell
//! boards, and rendering of the trace all belong to the caller.
//!
//! ```
//! use knights_core::{Position, Solver, TourKind};
//!
//! let result = Solver::new()
//!     .generate_tour(5, Position::new(0, 0), TourKind::Open)
//!     .unwrap();
//! assert!(result.found());
//! println!("solved in {:.3}s", result.elapsed_secs());
//! println!("{}", result.trace.snapshot().unwrap());
//! ```

pub mod board;
mod error;
pub mod moves;
pub mod solver;
pub mod trace;

pub use board::{Board, Cell, Position};
pub use error::TourError;
pub use moves::{adjacent_cells, KNIGHT_OFFSETS};
pub use solver::{Solver, TourKind, TourResult};
pub use trace::{Step, Trace};
