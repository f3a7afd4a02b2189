//! Integer grid coordinates.

use std::fmt;

use crate::Direction;

/// A cell coordinate: `x` is the column, `y` the row (row 0 at the top).
///
/// Ordering is row-major (`y` first, then `x`), so sorted sets of positions
/// iterate the way a map is read.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: u32,
    pub y: u32,
}

impl GridPos {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// `|dx| + |dy|`: the exact step count on an empty 4-connected grid.
    #[inline]
    pub fn manhattan(self, other: GridPos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The coordinate one step away in `direction`.
    ///
    /// Returns `None` only when the step would go below zero; the upper
    /// bound is the grid's business.
    #[inline]
    pub fn step(self, direction: Direction) -> Option<GridPos> {
        let (dx, dy) = direction.delta();
        Some(GridPos {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

impl Ord for GridPos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for GridPos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
