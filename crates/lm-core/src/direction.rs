//! The four-direction move vocabulary.
//!
//! A move is always exactly one cell along one axis.  `UP` decreases the row
//! (`y`), `DOWN` increases it; `LEFT` decreases the column (`x`), `RIGHT`
//! increases it.

use std::fmt;

use crate::{GridPos, LmError, LmResult};

/// One of the four axis-aligned single-cell moves.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Neighbor enumeration order: left, right, up, down.
    ///
    /// Search tie-breaking and random exploration both iterate this array, so
    /// changing the order changes seeded runs.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// `(dx, dy)` offset of this move.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up    => (0, -1),
            Direction::Down  => (0, 1),
            Direction::Left  => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up    => Direction::Down,
            Direction::Down  => Direction::Up,
            Direction::Left  => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The direction that takes `from` to `to`.
    ///
    /// Only the axis that differs is considered, so `from` and `to` need not
    /// be adjacent along it.
    ///
    /// # Errors
    ///
    /// [`LmError::InvalidMove`] if `from == to` or both coordinates differ.
    pub fn between(from: GridPos, to: GridPos) -> LmResult<Direction> {
        let diff_x = from.x != to.x;
        let diff_y = from.y != to.y;
        match (diff_x, diff_y) {
            (true, false) if to.x > from.x => Ok(Direction::Right),
            (true, false)                  => Ok(Direction::Left),
            (false, true) if to.y > from.y => Ok(Direction::Down),
            (false, true)                  => Ok(Direction::Up),
            _ => Err(LmError::InvalidMove { from, to }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up    => "up",
            Direction::Down  => "down",
            Direction::Left  => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
