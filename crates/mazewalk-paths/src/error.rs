use mazewalk_core::Point;
use thiserror::Error;

/// Reasons a search can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The outer ring does not have exactly two openings.
    #[error("the maze border must contain exactly 2 openings, found {found}")]
    InvalidBoundary { found: usize },

    /// Every candidate route dead-ended before reaching the goal.
    #[error("no solution could be found after trying {explored} paths")]
    Unsolvable { explored: usize },

    /// The grid is well formed but cannot be searched.
    #[error("degenerate maze: {0}")]
    DegenerateInput(Degenerate),
}

/// Why a grid could not be searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Degenerate {
    /// The start opening sits on a corner (or on both edges of a one-cell
    /// wide maze), so no single inward direction exists.
    #[error("start {0} has no single inward direction")]
    AmbiguousStart(Point),

    /// The start opening is not on the border at all.
    #[error("start {0} is not on the maze border")]
    InteriorStart(Point),
}

impl From<Degenerate> for SolveError {
    fn from(d: Degenerate) -> Self {
        Self::DegenerateInput(d)
    }
}
