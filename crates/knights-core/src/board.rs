use serde::{Deserialize, Serialize};
use std::fmt;

use crate::TourError;

/// A cell position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// State of a single board cell during and after the search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Not yet reached by the knight
    Unvisited,
    /// Reached as the k-th cell of the tour (the start cell is 0)
    Visited(u32),
    /// The tour-completing cell, written into the success snapshot
    Final,
}

impl Cell {
    pub fn is_unvisited(&self) -> bool {
        matches!(self, Cell::Unvisited)
    }
}

/// An n×n board of cell states, row-major and 0-indexed.
///
/// Pure data: the solver drives every state transition directly. A
/// board lives for exactly one search and is never shared between
/// searches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a size×size board with every cell unvisited except the
    /// start cell, which is marked `Visited(0)`.
    ///
    /// Fails with `InvalidStart` when the start lies outside
    /// `[0, size)` on either axis. A zero size rejects every start.
    pub fn new(size: usize, start: Position) -> Result<Self, TourError> {
        if start.row >= size || start.col >= size {
            return Err(TourError::InvalidStart { start, size });
        }
        let mut board = Self {
            size,
            cells: vec![Cell::Unvisited; size * size],
        };
        board.set(start, Cell::Visited(0));
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row * self.size + pos.col]
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row * self.size + pos.col] = cell;
    }

    pub fn is_unvisited(&self, pos: Position) -> bool {
        self.get(pos).is_unvisited()
    }

    /// Apply a signed (row, col) delta, returning the target position
    /// only when it lands on the board.
    pub fn offset(&self, pos: Position, delta: (i32, i32)) -> Option<Position> {
        let row = pos.row as i64 + delta.0 as i64;
        let col = pos.col as i64 + delta.1 as i64;
        if row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size {
            Some(Position::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Number of cells still unvisited
    pub fn unvisited_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_unvisited()).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Wide enough for the largest visit order
        let width = (self.size * self.size).saturating_sub(1).to_string().len();
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.get(Position::new(row, col)) {
                    Cell::Unvisited => write!(f, "{:>width$}", ".")?,
                    Cell::Visited(k) => write!(f, "{:>width$}", k)?,
                    Cell::Final => write!(f, "{:>width$}", "*")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
