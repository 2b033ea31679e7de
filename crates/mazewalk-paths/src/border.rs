//! Locating the entry and exit on the maze's outer ring.

use mazewalk_core::{Grid, Point};

use crate::direction::Direction;
use crate::error::{Degenerate, SolveError};

/// The two border openings of a maze.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Endpoints {
    pub start: Point,
    pub goal: Point,
}

/// All open cells on the outer ring, in scan order.
///
/// The order is: top row left to right, bottom row left to right, left
/// column top to bottom, right column top to bottom. Each border cell is
/// visited once; corners belong to the top and bottom rows.
pub fn border_breaks(grid: &Grid) -> Vec<Point> {
    let (w, h) = (grid.width(), grid.height());
    let mut breaks = Vec::new();
    if w <= 0 || h <= 0 {
        return breaks;
    }

    let rows = if h > 1 { vec![0, h - 1] } else { vec![0] };
    for y in rows {
        breaks.extend((0..w).map(|x| Point::new(x, y)).filter(|&p| grid.is_open(p)));
    }

    let cols = if w > 1 { vec![0, w - 1] } else { vec![0] };
    for x in cols {
        breaks.extend((1..h - 1).map(|y| Point::new(x, y)).filter(|&p| grid.is_open(p)));
    }
    breaks
}

/// Find the start and goal openings.
///
/// The first opening in scan order is the start, the second the goal. Any
/// count other than two is an [`SolveError::InvalidBoundary`].
pub fn locate(grid: &Grid) -> Result<Endpoints, SolveError> {
    let breaks = border_breaks(grid);
    match breaks[..] {
        [start, goal] => Ok(Endpoints { start, goal }),
        _ => Err(SolveError::InvalidBoundary {
            found: breaks.len(),
        }),
    }
}

/// The only direction a route may leave `start` in: straight into the maze,
/// away from the edge it sits on.
pub fn start_direction(grid: &Grid, start: Point) -> Result<Direction, Degenerate> {
    let mut inward = Vec::with_capacity(2);
    if start.x == 0 {
        inward.push(Direction::RIGHT);
    }
    if start.x == grid.width() - 1 {
        inward.push(Direction::LEFT);
    }
    if start.y == 0 {
        inward.push(Direction::DOWN);
    }
    if start.y == grid.height() - 1 {
        inward.push(Direction::UP);
    }
    match inward[..] {
        [dir] => Ok(dir),
        [] => Err(Degenerate::InteriorStart(start)),
        _ => Err(Degenerate::AmbiguousStart(start)),
    }
}
