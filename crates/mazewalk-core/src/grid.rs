//! Maze grids: rectangular arrays of [`Cell`]s.
//!
//! Unlike a drawing surface, a maze grid is built once and then only read:
//! the solver borrows it immutably for the whole search. Rectangularity is
//! checked at construction, so every row has exactly [`Grid::width`] cells.

use std::fmt;

use crate::cell::Cell;
use crate::error::GridError;
use crate::geom::Point;

/// A rectangular grid of wall/open cells stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
}

/// Serialized form of a [`Grid`], checked before it becomes one.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        if raw.width <= 0 || raw.height <= 0 {
            return Err(GridError::Empty);
        }
        let expected = (raw.width as usize)
            .checked_mul(raw.height as usize)
            .ok_or(GridError::TooLarge(raw.cells.len()))?;
        if raw.cells.len() != expected {
            return Err(GridError::CellCount {
                expected,
                found: raw.cells.len(),
            });
        }
        Ok(Self {
            cells: raw.cells,
            width: raw.width,
            height: raw.height,
        })
    }
}

impl Grid {
    /// Create a new grid of the given dimensions, every cell a wall.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            cells: vec![Cell::Wall; (w as usize) * (h as usize)],
            width: w,
            height: h,
        }
    }

    /// Build a grid by evaluating `f` at every point, row by row.
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(Point) -> Cell) -> Self {
        let mut grid = Self::new(width, height);
        for y in 0..grid.height {
            for x in 0..grid.width {
                let p = Point::new(x, y);
                let idx = grid.index(p);
                grid.cells[idx] = f(p);
            }
        }
        grid
    }

    /// Build a grid from explicit rows.
    ///
    /// Every row must have the same length as the first one; an empty input
    /// or an empty first row is rejected.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, GridError> {
        let expected = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if expected == 0 {
            return Err(GridError::Empty);
        }
        let width = i32::try_from(expected).map_err(|_| GridError::TooLarge(expected))?;
        let height = i32::try_from(rows.len()).map_err(|_| GridError::TooLarge(rows.len()))?;

        let mut cells = Vec::with_capacity(expected * rows.len());
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != expected {
                return Err(GridError::Jagged {
                    row,
                    expected,
                    found: r.len(),
                });
            }
            cells.extend_from_slice(r);
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Parse a text maze: `#` is a wall, `.` or a space is open.
    ///
    /// Leading and trailing blank lines are ignored but spaces inside a
    /// line are significant, so open cells may be written as spaces.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .skip_while(|l| l.is_empty())
            .collect();
        let end = lines
            .iter()
            .rposition(|l| !l.is_empty())
            .map_or(0, |i| i + 1);

        let mut rows = Vec::with_capacity(end);
        for (y, line) in lines[..end].iter().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (x, ch) in line.chars().enumerate() {
                let cell = Cell::from_char(ch).ok_or(GridError::InvalidChar {
                    ch,
                    pos: Point::new(x as i32, y as i32),
                })?;
                row.push(cell);
            }
            rows.push(row);
        }
        Self::from_rows(&rows)
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }

    /// Read the cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Whether `p` is inside the grid and open. Out-of-bounds counts as blocked.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p).is_some_and(Cell::is_open)
    }

    /// Set the cell at `p`. No-op if `p` is outside the grid.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if !self.contains(p) {
            return;
        }
        let idx = self.index(p);
        self.cells[idx] = cell;
    }

    /// Count how many cells equal `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// The cells of row `y`, or `None` outside the grid.
    pub fn row(&self, y: i32) -> Option<&[Cell]> {
        if y < 0 || y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Row-major iterator over `(Point, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        let w = self.width.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (Point::new((i % w) as i32, (i / w) as i32), c))
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y as usize) * (self.width as usize) + (p.x as usize)
    }
}

impl fmt::Display for Grid {
    /// Text maze format, the inverse of [`Grid::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                writeln!(f)?;
            }
            for &cell in self.row(y).unwrap_or_default() {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}
