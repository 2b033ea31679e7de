//! Maze cells.

/// A maze cell: either a wall or open floor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Wall,
    Open,
}

impl Cell {
    /// Whether the cell can be walked through.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Character used by the text maze format.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Open => '.',
        }
    }

    /// Parse a text maze character. `#` is a wall, `.` and space are open.
    #[inline]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Self::Wall),
            '.' | ' ' => Some(Self::Open),
            _ => None,
        }
    }
}

impl From<bool> for Cell {
    /// `true` means open.
    #[inline]
    fn from(open: bool) -> Self {
        if open { Self::Open } else { Self::Wall }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_mapping() {
        assert_eq!(Cell::from_char('#'), Some(Cell::Wall));
        assert_eq!(Cell::from_char('.'), Some(Cell::Open));
        assert_eq!(Cell::from_char(' '), Some(Cell::Open));
        assert_eq!(Cell::from_char('x'), None);
        assert_eq!(Cell::Wall.to_char(), '#');
        assert_eq!(Cell::Open.to_char(), '.');
    }

    #[test]
    fn default_is_wall() {
        assert_eq!(Cell::default(), Cell::Wall);
        assert!(!Cell::default().is_open());
        assert!(Cell::from(true).is_open());
    }
}
