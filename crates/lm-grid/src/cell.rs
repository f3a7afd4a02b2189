//! Grid cells and their occupants.

use lm_core::{AgentId, BuildingId, GridPos};

/// What currently stands in a cell.  At most one thing at a time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupant {
    #[default]
    Empty,
    Building(BuildingId),
    Agent(AgentId),
}

impl Occupant {
    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, Occupant::Empty)
    }

    #[inline]
    pub fn agent(self) -> Option<AgentId> {
        match self {
            Occupant::Agent(a) => Some(a),
            _ => None,
        }
    }

    #[inline]
    pub fn building(self) -> Option<BuildingId> {
        match self {
            Occupant::Building(b) => Some(b),
            _ => None,
        }
    }
}

/// One unit of the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos:         GridPos,
    pub occupant:    Occupant,
    /// Permanently blocked, independent of the current occupant.  Every
    /// building cell is unreachable.
    pub unreachable: bool,
}

impl Cell {
    pub(crate) fn empty(pos: GridPos) -> Self {
        Self { pos, occupant: Occupant::Empty, unreachable: false }
    }

    /// A cell blocks entry iff it is unreachable or has an occupant.
    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.unreachable || !self.occupant.is_empty()
    }
}
