use thiserror::Error;

use crate::geom::Point;

/// Errors raised while building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The grid has no rows or no columns.
    #[error("maze grid is empty")]
    Empty,

    /// A row's length differs from the first row's.
    #[error("maze row {row} has {found} cells, expected {expected}")]
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A text maze contains a character that is neither a wall nor open.
    #[error("invalid maze character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Point },

    /// Stored cells do not fill the stated dimensions.
    #[error("maze has {found} cells, expected {expected} for its dimensions")]
    CellCount { expected: usize, found: usize },

    /// A dimension does not fit the coordinate type.
    #[error("maze dimension {0} is too large")]
    TooLarge(usize),
}
