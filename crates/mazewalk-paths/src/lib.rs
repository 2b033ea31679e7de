//! Corridor-aware best-first search through grid mazes.
//!
//! A maze is a rectangular [`Grid`](mazewalk_core::Grid) of wall and open
//! cells whose outer ring has exactly two openings. The first opening in
//! border scan order is the start, the second the goal.
//!
//! The search never steps cell by cell. From the end of a candidate route it
//! walks straight down each viable corridor and only stops at a *junction*
//! (a cell where the route could turn) or at the goal. Candidates are kept
//! in a [`Frontier`] ordered by accumulated hop cost, and the cheapest one
//! is always advanced next.
//!
//! # Components
//!
//! | Type | Role |
//! |---|---|
//! | [`Direction`] | axis-aligned delta that can grow and shrink |
//! | [`CorridorScanner`] | finds the junctions reachable from a route's end |
//! | [`CandidatePath`] | a route of junction nodes with its cost |
//! | [`PathExpander`] | advances one route by one hop, spawning branches |
//! | [`Frontier`] | all routes, cheapest live one first, dead ones last |
//! | [`Solver`] | runs the loop and reports a [`Solution`] |
//!
//! ```
//! use mazewalk_core::Grid;
//!
//! let grid = Grid::parse("##.##\n#...#\n#.#.#\n#...#\n##.##").unwrap();
//! let sol = mazewalk_paths::solve(&grid).unwrap();
//! assert_eq!(sol.path.len(), 6);
//! ```

mod border;
mod candidate;
mod corridor;
mod cost;
mod direction;
mod error;
mod expand;
mod frontier;
mod solver;
mod traits;

pub use border::{Endpoints, border_breaks, locate, start_direction};
pub use candidate::{CandidatePath, PathCost};
pub use corridor::CorridorScanner;
pub use cost::{Heuristic, manhattan};
pub use direction::Direction;
pub use error::{Degenerate, SolveError};
pub use expand::{Expanded, Expansion, PathExpander};
pub use frontier::{EntryId, Frontier};
pub use solver::{Revisit, Solution, Solver, SolverConfig, solve};
pub use traits::FrontierObserver;
