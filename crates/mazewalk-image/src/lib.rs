//! Image adapters for mazewalk.
//!
//! Mazes are read from raster images, one pixel per cell, and solutions are
//! written back the same way with the route painted over the maze.

mod decode;
mod error;
mod render;

pub use decode::{DecodeOptions, decode, load};
pub use error::ImageError;
pub use render::{RenderOptions, render, save};
