use log::{debug, info, warn};
use mazewalk_core::{Grid, Point};

use crate::border::{self, Endpoints};
use crate::cost::Heuristic;
use crate::direction::Direction;
use crate::error::SolveError;
use crate::expand::{Expansion, PathExpander};
use crate::frontier::Frontier;
use crate::traits::FrontierObserver;

/// Whether a route may pass through a junction it already visited.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Revisit {
    /// Only immediate reversals are prevented. A maze with a loop and no
    /// way out can keep a search running forever.
    #[default]
    Allow,
    /// Junctions already on a route are dropped when it is expanded. Every
    /// search terminates, but branch counts differ from `Allow`.
    Forbid,
}

/// Search settings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    pub heuristic: Heuristic,
    pub revisit: Revisit,
}

impl SolverConfig {
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_revisit(mut self, revisit: Revisit) -> Self {
        self.revisit = revisit;
        self
    }
}

/// A route from the start opening to the goal opening.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Junction nodes, start and goal included.
    pub path: Vec<Point>,
    /// Accumulated hop cost of the route.
    pub cost: u64,
    /// Number of candidate routes placed in the frontier before the goal
    /// was reached.
    pub explored: usize,
}

impl Solution {
    pub fn start(&self) -> Option<Point> {
        self.path.first().copied()
    }

    pub fn goal(&self) -> Option<Point> {
        self.path.last().copied()
    }

    /// Every cell the route walks through, in order.
    ///
    /// Consecutive junctions always share a row or column; the cells
    /// between them are filled in by retracting the hop's direction.
    pub fn cells(&self) -> Vec<Point> {
        let mut cells = Vec::new();
        for hop in self.path.windows(2) {
            let (from, to) = (hop[0], hop[1]);
            cells.push(from);
            let Some(mut dir) = Direction::between(from, to) else {
                continue;
            };
            let mark = cells.len();
            while dir.retract() {
                cells.push(dir.from_point(from));
            }
            cells[mark..].reverse();
        }
        cells.extend(self.path.last());
        cells
    }
}

/// Finds a route through a maze.
///
/// Routes are grown best-first over junction nodes: the cheapest live
/// candidate is advanced one corridor hop at a time until some candidate
/// lands on the goal or none can move any more. Ties between equal costs go
/// to the candidate placed first.
#[derive(Clone, Debug, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> SolverConfig {
        self.config
    }

    /// Solve `grid`.
    pub fn solve(&self, grid: &Grid) -> Result<Solution, SolveError> {
        self.solve_observed(grid, &mut |_: &Frontier| {})
    }

    /// Solve `grid`, showing the frontier to `observer` after every step.
    pub fn solve_observed(
        &self,
        grid: &Grid,
        observer: &mut impl FrontierObserver,
    ) -> Result<Solution, SolveError> {
        let Endpoints { start, goal } = border::locate(grid)?;
        border::start_direction(grid, start)?;
        info!(
            "solving {}x{} maze from {start} to {goal} ({} heuristic)",
            grid.width(),
            grid.height(),
            self.config.heuristic.name()
        );

        let expander = PathExpander::new(grid, goal, self.config.heuristic, self.config.revisit);
        let mut frontier = Frontier::new(start);
        let mut warned_revisit = false;
        let mut steps = 0usize;

        loop {
            let Some(id) = frontier.take_best() else {
                info!(
                    "no route after {steps} steps; all {} paths dead-ended",
                    frontier.len()
                );
                return Err(SolveError::Unsolvable {
                    explored: frontier.len(),
                });
            };
            steps += 1;

            let step = expander.expand(frontier.get_mut(id));
            frontier.settle(id);

            if step.revisits > 0 && self.config.revisit == Revisit::Allow && !warned_revisit {
                warn!(
                    "route {} re-entered a junction it already visited; \
                     this maze has loops and may not terminate if unsolvable",
                    id.index()
                );
                warned_revisit = true;
            }

            // A finished search reports the entries placed before its last
            // step; branches spawned alongside the winner are never placed.
            let branched = step.siblings.len();
            if step.outcome == Expansion::Continuing {
                for sibling in step.siblings {
                    frontier.push(sibling);
                }
            }
            debug!(
                "step {steps}: expanded path {} -> {}, {branched} new, {} live / {} total",
                id.index(),
                frontier.get(id),
                frontier.live_len(),
                frontier.len()
            );
            observer.frontier_changed(&frontier);

            if let Expansion::Terminal(path) = step.outcome {
                let cost = path.live_cost().unwrap_or_default();
                let explored = frontier.len();
                info!(
                    "reached {goal} via {} junctions after {steps} steps, {explored} paths tried",
                    path.len()
                );
                return Ok(Solution {
                    path: path.into_nodes(),
                    cost,
                    explored,
                });
            }
        }
    }
}

/// Solve `grid` with the default configuration.
pub fn solve(grid: &Grid) -> Result<Solution, SolveError> {
    Solver::default().solve(grid)
}
