use std::path::Path;

use image::{DynamicImage, GenericImageView};
use log::debug;
use mazewalk_core::{Cell, Grid};

use crate::error::ImageError;

/// How pixels are classified when decoding a maze image.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// A pixel whose red channel is at or below this value is a wall. The
    /// default of zero makes only fully red-less pixels walls.
    pub threshold: u8,
}

impl DecodeOptions {
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    #[inline]
    fn classify(self, red: u8) -> Cell {
        Cell::from(red > self.threshold)
    }
}

/// Turn an image into a maze grid, one cell per pixel.
pub fn decode(img: &DynamicImage, opts: &DecodeOptions) -> Result<Grid, ImageError> {
    let (w, h) = img.dimensions();
    let rows: Vec<Vec<Cell>> = (0..h)
        .map(|y| (0..w).map(|x| opts.classify(img.get_pixel(x, y).0[0])).collect())
        .collect();
    let grid = Grid::from_rows(&rows)?;
    debug!(
        "decoded {w}x{h} image: {} open cells",
        grid.count(Cell::Open)
    );
    Ok(grid)
}

/// Read and decode the maze image at `path`.
pub fn load(path: impl AsRef<Path>, opts: &DecodeOptions) -> Result<Grid, ImageError> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|source| ImageError::Codec {
        path: path.to_path_buf(),
        source,
    })?;
    decode(&img, opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use mazewalk_core::{GridError, Point};

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn image_of(text: &str) -> DynamicImage {
        let lines: Vec<&str> = text.lines().collect();
        let mut img = RgbaImage::from_pixel(lines[0].len() as u32, lines.len() as u32, WHITE);
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                if ch == '#' {
                    img.put_pixel(x as u32, y as u32, BLACK);
                }
            }
        }
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn black_pixels_are_walls() {
        let text = "##.##\n#...#\n##.##";
        let grid = decode(&image_of(text), &DecodeOptions::default()).unwrap();
        assert_eq!(grid, Grid::parse(text).unwrap());
    }

    #[test]
    fn only_red_channel_counts() {
        let mut img = RgbaImage::from_pixel(3, 1, WHITE);
        // Red-less but bright: still a wall.
        img.put_pixel(0, 0, Rgba([0, 255, 255, 255]));
        // Dark but with some red: open by default.
        img.put_pixel(1, 0, Rgba([1, 0, 0, 255]));
        let grid = decode(&DynamicImage::ImageRgba8(img), &DecodeOptions::default()).unwrap();
        assert_eq!(grid.at(Point::new(0, 0)), Some(Cell::Wall));
        assert_eq!(grid.at(Point::new(1, 0)), Some(Cell::Open));
        assert_eq!(grid.at(Point::new(2, 0)), Some(Cell::Open));
    }

    #[test]
    fn threshold_widens_walls() {
        let mut img = RgbaImage::from_pixel(2, 1, WHITE);
        img.put_pixel(0, 0, Rgba([40, 40, 40, 255]));
        let img = DynamicImage::ImageRgba8(img);
        let opts = DecodeOptions::default().with_threshold(64);
        let grid = decode(&img, &opts).unwrap();
        assert_eq!(grid.at(Point::new(0, 0)), Some(Cell::Wall));
        assert_eq!(grid.at(Point::new(1, 0)), Some(Cell::Open));
    }

    #[test]
    fn empty_image_is_rejected() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(0, 0));
        assert!(matches!(
            decode(&img, &DecodeOptions::default()),
            Err(ImageError::Grid(GridError::Empty))
        ));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load("definitely/not/here.png", &DecodeOptions::default()).unwrap_err();
        assert!(err.to_string().starts_with("definitely/not/here.png"));
    }
}
