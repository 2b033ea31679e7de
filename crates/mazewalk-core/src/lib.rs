//! Core types shared by the mazewalk solver and its adapters.
//!
//! A maze is a [`Grid`] of wall and open [`Cell`]s addressed by [`Point`].
//! Grids are always rectangular and have a plain text format: `#` for a
//! wall, `.` for an open cell.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use error::GridError;
pub use geom::Point;
pub use grid::Grid;
