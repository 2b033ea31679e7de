use std::path::Path;

use image::{Rgba, RgbaImage};
use log::debug;
use mazewalk_core::{Grid, Point};
use mazewalk_paths::Direction;

use crate::error::ImageError;

/// Colors used when drawing a solved maze, each `[r, g, b, a]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub path_color: [u8; 4],
    pub wall_color: [u8; 4],
    pub open_color: [u8; 4],
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            path_color: [255, 0, 0, 255],
            wall_color: [0, 0, 0, 255],
            open_color: [255, 255, 255, 255],
        }
    }
}

/// Draw `grid` one pixel per cell with the junction route `path` painted
/// over it.
///
/// Consecutive junctions must share a row or column; every cell between
/// them is painted too. Points outside the grid are skipped.
pub fn render(grid: &Grid, path: &[Point], opts: &RenderOptions) -> RgbaImage {
    let (w, h) = (grid.width() as u32, grid.height() as u32);
    let mut img = RgbaImage::from_fn(w, h, |x, y| {
        let open = grid.is_open(Point::new(x as i32, y as i32));
        Rgba(if open { opts.open_color } else { opts.wall_color })
    });

    let mut paint = |p: Point| {
        if grid.contains(p) {
            img.put_pixel(p.x as u32, p.y as u32, Rgba(opts.path_color));
        }
    };
    for &node in path {
        paint(node);
    }
    for hop in path.windows(2) {
        let Some(mut dir) = Direction::between(hop[0], hop[1]) else {
            continue;
        };
        while dir.retract() {
            paint(dir.from_point(hop[0]));
        }
    }
    img
}

/// Render and write the solved maze to `path`; the format follows the
/// file extension.
pub fn save(
    grid: &Grid,
    route: &[Point],
    opts: &RenderOptions,
    path: impl AsRef<Path>,
) -> Result<(), ImageError> {
    let path = path.as_ref();
    render(grid, route, opts)
        .save(path)
        .map_err(|source| ImageError::Codec {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("wrote solution image to {}", path.display());
    Ok(())
}
