use std::fmt;

use mazewalk_core::Point;

/// An axis-aligned movement delta.
///
/// Exactly one of `dx`/`dy` is non-zero. The magnitude is how far along the
/// axis the delta reaches: scanning a corridor [`extend`](Self::extend)s a
/// unit direction one cell at a time, and walking back between two junction
/// nodes [`retract`](Self::retract)s it toward zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Direction {
    dx: i32,
    dy: i32,
}

impl Direction {
    pub const UP: Self = Self { dx: 0, dy: -1 };
    pub const DOWN: Self = Self { dx: 0, dy: 1 };
    pub const LEFT: Self = Self { dx: -1, dy: 0 };
    pub const RIGHT: Self = Self { dx: 1, dy: 0 };

    /// Create a direction. Returns `None` unless exactly one component is
    /// non-zero.
    pub const fn new(dx: i32, dy: i32) -> Option<Self> {
        if (dx == 0) == (dy == 0) {
            return None;
        }
        Some(Self { dx, dy })
    }

    /// The delta leading from `from` to `to`, if they share a row or column.
    pub fn between(from: Point, to: Point) -> Option<Self> {
        let d = to - from;
        Self::new(d.x, d.y)
    }

    #[inline]
    pub const fn dx(self) -> i32 {
        self.dx
    }

    #[inline]
    pub const fn dy(self) -> i32 {
        self.dy
    }

    /// The delta as a point offset.
    #[inline]
    pub const fn offset(self) -> Point {
        Point::new(self.dx, self.dy)
    }

    /// Number of cells covered along the axis.
    #[inline]
    pub const fn magnitude(self) -> i32 {
        self.dx.abs() + self.dy.abs()
    }

    /// Whether the delta has shrunk to `(0, 0)`.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    #[inline]
    pub const fn is_horizontal(self) -> bool {
        self.dx != 0
    }

    #[inline]
    pub const fn is_vertical(self) -> bool {
        self.dy != 0
    }

    /// Same heading, magnitude one.
    #[inline]
    pub const fn unit(self) -> Self {
        Self {
            dx: self.dx.signum(),
            dy: self.dy.signum(),
        }
    }

    /// Opposite heading, same magnitude.
    #[inline]
    pub const fn reversed(self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }

    /// The two unit directions at a right angle to this one.
    ///
    /// Horizontal headings give `[DOWN, UP]`, vertical ones `[RIGHT, LEFT]`.
    pub const fn perpendiculars(self) -> [Self; 2] {
        if self.is_horizontal() {
            [Self::DOWN, Self::UP]
        } else {
            [Self::RIGHT, Self::LEFT]
        }
    }

    /// The point reached by applying this delta to `p`.
    #[inline]
    pub fn from_point(self, p: Point) -> Point {
        p + self.offset()
    }

    /// Grow the magnitude by one, away from zero.
    pub fn extend(&mut self) {
        self.dx += self.dx.signum();
        self.dy += self.dy.signum();
    }

    /// Shrink the magnitude by one, toward zero.
    ///
    /// Returns `true` while the delta is still non-zero afterwards, so
    /// `while dir.retract() { .. }` visits every cell strictly between the
    /// two ends of the starting delta. A zero delta stays zero.
    pub fn retract(&mut self) -> bool {
        self.dx -= self.dx.signum();
        self.dy -= self.dy.signum();
        !self.is_zero()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.dx, self.dy)
    }
}
