use serde::{Deserialize, Serialize};

use crate::board::{Board, Position};

/// One element of a search trace.
///
/// A trace interleaves forward and undone moves; on success the last
/// element is a full board snapshot. Consumers discriminate by
/// variant rather than by shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// The knight moved to this cell and marked it visited
    Advance(Position),
    /// The search undid a move; this cell is the new frontier
    Retreat(Position),
    /// Copy of the completed board, terminal cell marked `Final`
    Snapshot(Board),
}

/// Ordered, append-only log of one search's steps.
///
/// Created fresh per search invocation and mutated only by that
/// search. The first element is always the `Advance` for the initial
/// placement; a trailing `Snapshot` is present exactly when the search
/// succeeded. An empty trace means no tour exists for the requested
/// configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace(Vec<Step>);

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: Step) {
        self.0.push(step);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&Step> {
        self.0.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.0.iter()
    }

    pub fn steps(&self) -> &[Step] {
        &self.0
    }

    /// The trailing board snapshot, if the search succeeded
    pub fn snapshot(&self) -> Option<&Board> {
        match self.last() {
            Some(Step::Snapshot(board)) => Some(board),
            _ => None,
        }
    }
}

impl std::ops::Index<usize> for Trace {
    type Output = Step;

    fn index(&self, index: usize) -> &Step {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
