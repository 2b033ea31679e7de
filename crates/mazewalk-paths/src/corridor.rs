//! Corridor scanning: from a junction, find the next junctions reachable in
//! a straight line.
//!
//! Like jump point search, the scanner only stops where something
//! interesting happens: at the goal, or at a cell with an open side
//! passage where a route could turn. Plain corridor cells in between are
//! never materialised as nodes.

use mazewalk_core::{Grid, Point};

use crate::border;
use crate::direction::Direction;

/// Finds the junctions reachable from the end of a route.
#[derive(Clone, Debug)]
pub struct CorridorScanner<'a> {
    grid: &'a Grid,
    goal: Point,
    limit: i32,
}

impl<'a> CorridorScanner<'a> {
    /// Create a scanner for `grid` heading for `goal`.
    pub fn new(grid: &'a Grid, goal: Point) -> Self {
        Self {
            grid,
            goal,
            limit: grid.width().max(grid.height()),
        }
    }

    /// The goal this scanner stops at.
    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Directions worth scanning from the last node of `route`.
    ///
    /// A route that has only its start node must leave straight into the
    /// maze. Afterwards both turns are tried first, then the continuation
    /// of the last hop; the reverse of the last hop never is.
    pub fn directions(&self, route: &[Point]) -> Vec<Direction> {
        match route {
            [] => Vec::new(),
            [start] => border::start_direction(self.grid, *start)
                .map(|d| vec![d])
                .unwrap_or_default(),
            [.., prev, here] => {
                let d = *here - *prev;
                let heading = if d.x > 0 {
                    Direction::RIGHT
                } else if d.x < 0 {
                    Direction::LEFT
                } else if d.y > 0 {
                    Direction::DOWN
                } else {
                    Direction::UP
                };
                let [a, b] = heading.perpendiculars();
                vec![a, b, heading]
            }
        }
    }

    /// Scan every viable direction from the last node of `route`.
    ///
    /// Returns the junctions found, one per productive direction, in
    /// direction order. Reaching the goal ends the whole scan at once, so
    /// when present the goal is always the last element.
    pub fn scan(&self, route: &[Point]) -> Vec<Point> {
        let Some(&here) = route.last() else {
            return Vec::new();
        };
        let mut found = Vec::with_capacity(3);
        for dir in self.directions(route) {
            match self.scan_direction(here, dir) {
                Some(Stop::Goal(p)) => {
                    found.push(p);
                    return found;
                }
                Some(Stop::Junction(p)) => found.push(p),
                None => {}
            }
        }
        found
    }

    /// Walk from `from` along `dir` until something stops the walk.
    fn scan_direction(&self, from: Point, dir: Direction) -> Option<Stop> {
        let mut step = dir.unit();
        for _ in 0..self.limit {
            let next = step.from_point(from);
            if !self.grid.is_open(next) {
                return None;
            }
            if next == self.goal {
                return Some(Stop::Goal(next));
            }
            if self.has_side_opening(next, dir) {
                return Some(Stop::Junction(next));
            }
            step.extend();
        }
        None
    }

    /// Whether a route moving along `dir` could turn at `p`.
    pub fn has_side_opening(&self, p: Point, dir: Direction) -> bool {
        dir.perpendiculars()
            .iter()
            .any(|side| self.grid.is_open(side.from_point(p)))
    }
}

/// Where a straight walk ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Stop {
    Goal(Point),
    Junction(Point),
}
