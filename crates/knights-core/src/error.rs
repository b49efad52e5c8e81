use thiserror::Error;

use crate::board::Position;

/// Errors reported before a search begins.
///
/// A search that runs and finds nothing is not an error: it returns an
/// empty trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TourError {
    #[error("start position {start} is outside a {size}x{size} board")]
    InvalidStart { start: Position, size: usize },
}
