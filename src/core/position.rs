//! Grid Coordinates
//!
//! Row/column positions and the four compass directions a suspect can step in.
//! Row 0 is the top edge of the board; moving North decreases the row.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::error::GameError;

/// A cell coordinate on the board.
///
/// Ordered row-major so that `BTreeMap<Position, _>` iterates the board
/// top-to-bottom, left-to-right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row index (0 = top)
    pub row: usize,
    /// Column index (0 = left)
    pub col: usize,
}

impl Position {
    /// Create a position.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighbouring position one step in `direction`.
    ///
    /// Returns `None` when the step leaves a `rows x cols` grid.
    pub fn step(self, direction: Direction, rows: usize, cols: usize) -> Option<Position> {
        let (d_row, d_col) = direction.offset();
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        if row >= rows || col >= cols {
            return None;
        }
        Some(Position::new(row, col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Compass direction of a single step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    /// Towards row 0
    North = 0,
    /// Towards the last column
    East = 1,
    /// Towards the last row
    South = 2,
    /// Towards column 0
    West = 3,
}

impl Direction {
    /// All four directions, clockwise from North.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit `(row, col)` offset of a step.
    #[inline]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// The direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Single-letter token used by board maps (`N`, `E`, `S`, `W`).
    pub const fn token(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    /// Parse a board-map door token.
    pub const fn from_token(token: char) -> Option<Direction> {
        match token {
            'N' => Some(Direction::North),
            'E' => Some(Direction::East),
            'S' => Some(Direction::South),
            'W' => Some(Direction::West),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = GameError;

    /// Accepts full names or initials, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "north" | "up" => Ok(Direction::North),
            "e" | "east" | "right" => Ok(Direction::East),
            "s" | "south" | "down" => Ok(Direction::South),
            "w" | "west" | "left" => Ok(Direction::West),
            _ => Err(GameError::InvalidDirection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_inside_grid() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.step(Direction::North, 10, 10), Some(Position::new(4, 5)));
        assert_eq!(pos.step(Direction::East, 10, 10), Some(Position::new(5, 6)));
        assert_eq!(pos.step(Direction::South, 10, 10), Some(Position::new(6, 5)));
        assert_eq!(pos.step(Direction::West, 10, 10), Some(Position::new(5, 4)));
    }

    #[test]
    fn test_step_off_every_edge() {
        assert_eq!(Position::new(0, 3).step(Direction::North, 4, 4), None);
        assert_eq!(Position::new(3, 0).step(Direction::West, 4, 4), None);
        assert_eq!(Position::new(3, 3).step(Direction::South, 4, 4), None);
        assert_eq!(Position::new(3, 3).step(Direction::East, 4, 4), None);
    }

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir, dir.opposite().opposite());
        }
    }

    #[test]
    fn test_token_roundtrip_and_rejects() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_token(dir.token()), Some(dir));
        }
        assert_eq!(Direction::from_token('C'), None);
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!("North".parse::<Direction>().unwrap(), Direction::North);
        assert_eq!(" w ".parse::<Direction>().unwrap(), Direction::West);
        assert!(matches!(
            "sideways".parse::<Direction>(),
            Err(GameError::InvalidDirection(s)) if s == "sideways"
        ));
    }

    #[test]
    fn test_row_major_ordering() {
        assert!(Position::new(0, 9) < Position::new(1, 0));
        assert!(Position::new(3, 1) < Position::new(3, 2));
    }
}
