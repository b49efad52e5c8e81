//! Exhaustive depth-first tour search.
//!
//! Both tour kinds share one engine: a depth-first search over knight
//! moves in the fixed `KNIGHT_OFFSETS` order, with no heuristics and
//! no pruning beyond the visited check. The closed-tour variant only
//! differs in its acceptance test at full depth.
//!
//! The search runs on an explicit frame stack rather than native
//! recursion: depth equals the move count, so an n×n board would
//! otherwise nest n² calls deep.

use std::collections::HashSet;
use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Cell, Position};
use crate::moves::{adjacent_cells, KNIGHT_OFFSETS};
use crate::trace::{Step, Trace};
use crate::TourError;

/// Which termination condition the search uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TourKind {
    /// Visit every cell; the tour may end anywhere
    Open,
    /// Visit every cell and end one knight move from the start, so the
    /// path closes into a cycle
    Closed,
}

impl fmt::Display for TourKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TourKind::Open => write!(f, "open"),
            TourKind::Closed => write!(f, "closed"),
        }
    }
}

/// Outcome of one search invocation
#[derive(Debug, Clone)]
pub struct TourResult {
    /// The full advance/retreat log plus a trailing snapshot, or empty
    /// when no tour exists
    pub trace: Trace,
    /// Wall-clock duration of the whole search, reported on success
    /// and failure alike
    pub elapsed: Duration,
}

impl TourResult {
    pub fn found(&self) -> bool {
        !self.trace.is_empty()
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// One pending search frame: where the knight stands at this depth and
/// which offset to probe next.
struct Frame {
    pos: Position,
    next_offset: usize,
}

impl Frame {
    fn enter(pos: Position) -> Self {
        Self { pos, next_offset: 0 }
    }
}

/// Stateless tour solver; all search state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    pub fn new() -> Self {
        Self
    }

    /// Run one exhaustive tour search.
    ///
    /// Fails with `InvalidStart` when the start cell is off the board.
    /// Otherwise always returns a result: a trace ending in a board
    /// snapshot when a tour was found, or an empty trace when the
    /// search space was exhausted without one. The exploration history
    /// of a failed search is deliberately discarded.
    ///
    /// The search is synchronous and uninterruptible; large boards can
    /// take exponential time. Callers should reject a closed tour on
    /// an odd-cell board up front rather than pay for a search that is
    /// guaranteed to fail.
    pub fn generate_tour(
        &self,
        size: usize,
        start: Position,
        kind: TourKind,
    ) -> Result<TourResult, TourError> {
        let started = Instant::now();
        let mut board = Board::new(size, start)?;

        let mut trace = Trace::new();
        trace.push(Step::Advance(start));

        // The acceptance set for closed tours, computed once against
        // the board in its initial only-start-visited state.
        let accept = match kind {
            TourKind::Closed => Some(adjacent_cells(&board, start)),
            TourKind::Open => None,
        };

        debug!(size, %start, %kind, "starting tour search");
        let found = self.search(&mut board, start, accept.as_ref(), &mut trace);
        let elapsed = started.elapsed();

        if !found {
            trace = Trace::new();
        }
        debug!(
            found,
            steps = trace.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "tour search finished"
        );

        Ok(TourResult { trace, elapsed })
    }

    /// Depth-first search over an explicit frame stack.
    ///
    /// Invariant: `stack.len()` equals the number of visited cells,
    /// and the stacked positions form the knight's current path from
    /// the start. Event order matches what fixed-order recursion would
    /// emit: `Advance(child)` when a frame is pushed, `Retreat(parent)`
    /// when a failed frame is popped.
    fn search(
        &self,
        board: &mut Board,
        start: Position,
        accept: Option<&HashSet<Position>>,
        trace: &mut Trace,
    ) -> bool {
        let total = board.size() * board.size();
        let mut stack = vec![Frame::enter(start)];

        while !stack.is_empty() {
            let depth = stack.len();
            let idx = depth - 1;
            let current = stack[idx].pos;

            if depth == total {
                // Every cell is visited. An open tour accepts any
                // final cell; a closed tour requires one adjacent to
                // the start. A miss fails only this branch.
                let closes = accept.map_or(true, |set| set.contains(&current));
                if closes {
                    board.set(current, Cell::Final);
                    trace.push(Step::Snapshot(board.clone()));
                    if accept.is_none() {
                        // Restore the visit order after the snapshot,
                        // matching the undo discipline of the
                        // recursive case. Not observable in the
                        // returned trace.
                        board.set(current, Cell::Visited(depth as u32 - 1));
                    }
                    return true;
                }
            } else {
                let mut advanced = false;
                while stack[idx].next_offset < KNIGHT_OFFSETS.len() {
                    let delta = KNIGHT_OFFSETS[stack[idx].next_offset];
                    stack[idx].next_offset += 1;

                    let Some(target) = board.offset(current, delta) else {
                        continue;
                    };
                    if !board.is_unvisited(target) {
                        continue;
                    }

                    board.set(target, Cell::Visited(depth as u32));
                    trace.push(Step::Advance(target));
                    stack.push(Frame::enter(target));
                    advanced = true;
                    break;
                }
                if advanced {
                    continue;
                }
            }

            // This frame is exhausted (or failed the closing check):
            // undo its move and hand control back to the parent.
            let Some(failed) = stack.pop() else { break };
            match stack.last() {
                Some(parent) => {
                    board.set(failed.pos, Cell::Unvisited);
                    trace.push(Step::Retreat(parent.pos));
                }
                // Root exhausted: no tour from this start.
                None => break,
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(size: usize, row: usize, col: usize, kind: TourKind) -> TourResult {
        Solver::new()
            .generate_tour(size, Position::new(row, col), kind)
            .unwrap()
    }

    #[test]
    fn test_size_one_is_trivially_solved() {
        let result = run(1, 0, 0, TourKind::Open);
        assert_eq!(result.trace.len(), 2);
        assert_eq!(result.trace[0], Step::Advance(Position::new(0, 0)));

        let snapshot = result.trace.snapshot().unwrap();
        assert_eq!(snapshot.get(Position::new(0, 0)), Cell::Final);
    }

    #[test]
    fn test_three_by_three_has_no_open_tour() {
        for row in 0..3 {
            for col in 0..3 {
                let result = run(3, row, col, TourKind::Open);
                assert!(!result.found(), "unexpected tour from ({row}, {col})");
                assert!(result.trace.is_empty());
            }
        }
    }

    #[test]
    fn test_invalid_start_is_rejected() {
        let err = Solver::new()
            .generate_tour(4, Position::new(4, 0), TourKind::Open)
            .unwrap_err();
        assert_eq!(
            err,
            TourError::InvalidStart {
                start: Position::new(4, 0),
                size: 4
            }
        );
    }

    #[test]
    fn test_first_probe_follows_offset_order() {
        // From (0, 0) the first offset (+2, -1) is off the board, so
        // the first recorded move is (+2, +1).
        let result = run(5, 0, 0, TourKind::Open);
        assert_eq!(result.trace[1], Step::Advance(Position::new(2, 1)));

        // From (1, 1) the first offset lands on (3, 0).
        let result = run(5, 1, 1, TourKind::Open);
        assert_eq!(result.trace[1], Step::Advance(Position::new(3, 0)));
    }

    #[test]
    fn test_search_is_deterministic() {
        let a = run(5, 0, 0, TourKind::Open);
        let b = run(5, 0, 0, TourKind::Open);
        assert_eq!(a.trace, b.trace);
    }

    #[test]
    fn test_net_advances_equal_cell_count() {
        let result = run(5, 0, 0, TourKind::Open);
        let mut advances = 0i64;
        let mut retreats = 0i64;
        for step in &result.trace {
            match step {
                Step::Advance(_) => advances += 1,
                Step::Retreat(_) => retreats += 1,
                Step::Snapshot(_) => {}
            }
        }
        assert_eq!(advances - retreats, 25);
    }

    #[test]
    fn test_closed_search_on_odd_board_exhausts_empty() {
        // The caller is expected to reject this by parity; invoked
        // directly, the engine exhausts and reports no tour.
        let result = run(5, 0, 0, TourKind::Closed);
        assert!(!result.found());
    }
}
