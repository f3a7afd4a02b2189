//! The occupancy grid and its builder.
//!
//! # Data layout
//!
//! Cells live in one row-major `Vec<Cell>`; the cell at `GridPos { x, y }` is
//! `cells[y * columns + x]`.  Buildings live in a side table indexed by
//! `BuildingId` and are referenced from their cell's [`Occupant`].
//!
//! Geometry is fixed after [`GridBuilder::build`]; only occupancy changes
//! afterwards, through [`Grid::set_occupant`] and [`Grid::clear`].

use std::collections::BTreeMap;

use lm_core::{BuildingId, Direction, GridPos, LmError, LmResult};

use crate::{Building, Cell, GridError, GridResult, Occupant};

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Rectangular matrix of cells plus the building table.
///
/// Do not construct directly; use [`GridBuilder`].
#[derive(Clone, Debug)]
pub struct Grid {
    columns:   u32,
    rows:      u32,
    cells:     Vec<Cell>,
    buildings: Vec<Building>,
    /// Home digit → home building cell.
    homes:     BTreeMap<char, GridPos>,
}

impl Grid {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x < self.columns && pos.y < self.rows
    }

    /// Flat arena index of `pos`, or `None` outside the grid.
    #[inline]
    pub fn index_of(&self, pos: GridPos) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.y as usize * self.columns as usize + pos.x as usize)
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn pos_of(&self, index: usize) -> GridPos {
        let columns = self.columns as usize;
        GridPos::new((index % columns) as u32, (index / columns) as u32)
    }

    // ── Cells & occupants ─────────────────────────────────────────────────

    pub fn cell(&self, pos: GridPos) -> Option<&Cell> {
        self.index_of(pos).map(|i| &self.cells[i])
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Occupant of `pos`; `Occupant::Empty` outside the grid.
    pub fn occupant(&self, pos: GridPos) -> Occupant {
        self.cell(pos).map_or(Occupant::Empty, |c| c.occupant)
    }

    /// `true` if `pos` blocks entry.  Positions outside the grid always do.
    #[inline]
    pub fn is_occupied(&self, pos: GridPos) -> bool {
        self.cell(pos).is_none_or(Cell::is_occupied)
    }

    /// Put `occupant` in `pos`, replacing whatever was there.
    ///
    /// No check is made that the previous occupant is the one leaving; the
    /// caller owns swap correctness.
    pub fn set_occupant(&mut self, pos: GridPos, occupant: Occupant) -> GridResult<()> {
        let i = self.index_of(pos).ok_or(GridError::OutsideGrid(pos))?;
        self.cells[i].occupant = occupant;
        Ok(())
    }

    /// Empty `pos` of its occupant.  The unreachable flag is untouched.
    pub fn clear(&mut self, pos: GridPos) -> GridResult<()> {
        self.set_occupant(pos, Occupant::Empty)
    }

    // ── Buildings ─────────────────────────────────────────────────────────

    pub fn building(&self, id: BuildingId) -> &Building {
        &self.buildings[id.index()]
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// The building standing in `pos`, if the cell's occupant is one.
    pub fn building_at(&self, pos: GridPos) -> Option<&Building> {
        self.occupant(pos).building().map(|id| self.building(id))
    }

    /// Cell of the home building for agents whose number ends in `digit`.
    pub fn home(&self, digit: char) -> Option<GridPos> {
        self.homes.get(&digit).copied()
    }

    /// `true` if at least one landmark of `category` is on the map.
    pub fn has_landmark(&self, category: char) -> bool {
        self.buildings
            .iter()
            .any(|b| b.important && b.identity == category)
    }

    // ── Neighborhood ──────────────────────────────────────────────────────

    /// In-bounds cells adjacent to `pos`, regardless of occupancy, in
    /// left, right, up, down order.
    pub fn neighbors_all(&self, pos: GridPos) -> impl Iterator<Item = GridPos> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| pos.step(d))
            .filter(|n| self.contains(*n))
    }

    /// The subset of [`neighbors_all`](Self::neighbors_all) that can be
    /// entered right now.
    pub fn neighbors_empty(&self, pos: GridPos) -> impl Iterator<Item = GridPos> + '_ {
        self.neighbors_all(pos).filter(|n| !self.is_occupied(*n))
    }

    // ── Move vocabulary ───────────────────────────────────────────────────

    /// Direction of the single-cell move from `from` to the adjacent `to`.
    ///
    /// # Errors
    ///
    /// [`LmError::InvalidMove`] for zero-length, diagonal, or multi-cell
    /// requests.
    pub fn move_direction_for(&self, from: GridPos, to: GridPos) -> LmResult<Direction> {
        if from.manhattan(to) != 1 {
            return Err(LmError::InvalidMove { from, to });
        }
        Direction::between(from, to)
    }

    /// The cell one step from `from` in `direction`.
    ///
    /// # Errors
    ///
    /// [`LmError::OutOfBounds`] if that cell lies outside the grid.
    pub fn cell_in_direction(&self, from: GridPos, direction: Direction) -> LmResult<GridPos> {
        from.step(direction)
            .filter(|p| self.contains(*p))
            .ok_or(LmError::OutOfBounds {
                from,
                direction,
                columns: self.columns,
                rows:    self.rows,
            })
    }
}

// ── GridBuilder ───────────────────────────────────────────────────────────────

/// Construct a [`Grid`] by placing buildings, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use lm_core::GridPos;
/// use lm_grid::{Building, GridBuilder};
///
/// let mut b = GridBuilder::new(3, 3).unwrap();
/// b.add_building(Building::home('0', GridPos::new(0, 0))).unwrap();
/// b.add_building(Building::landmark("Library", 'L', 2, GridPos::new(2, 2))).unwrap();
/// let grid = b.build();
/// assert_eq!(grid.len(), 9);
/// assert!(grid.is_occupied(GridPos::new(2, 2)));
/// assert_eq!(grid.home('0'), Some(GridPos::new(0, 0)));
/// ```
pub struct GridBuilder {
    columns:   u32,
    rows:      u32,
    cells:     Vec<Cell>,
    buildings: Vec<Building>,
    homes:     BTreeMap<char, GridPos>,
}

impl GridBuilder {
    /// An all-empty `columns × rows` grid.
    pub fn new(columns: u32, rows: u32) -> GridResult<Self> {
        if columns == 0 || rows == 0 {
            return Err(GridError::Empty);
        }
        let cells = (0..rows)
            .flat_map(|y| (0..columns).map(move |x| Cell::empty(GridPos::new(x, y))))
            .collect();
        Ok(Self {
            columns,
            rows,
            cells,
            buildings: Vec::new(),
            homes:     BTreeMap::new(),
        })
    }

    fn index_of(&self, pos: GridPos) -> GridResult<usize> {
        if pos.x < self.columns && pos.y < self.rows {
            Ok(pos.y as usize * self.columns as usize + pos.x as usize)
        } else {
            Err(GridError::OutsideGrid(pos))
        }
    }

    /// Place `building` at `building.pos`, marking the cell unreachable.
    ///
    /// # Errors
    ///
    /// - [`GridError::OutsideGrid`] if the position is off the map.
    /// - [`GridError::AlreadyBuilt`] if the cell already holds a building.
    /// - [`GridError::DuplicateHome`] for a second home with the same digit.
    pub fn add_building(&mut self, building: Building) -> GridResult<BuildingId> {
        let i = self.index_of(building.pos)?;
        if !self.cells[i].occupant.is_empty() {
            return Err(GridError::AlreadyBuilt { pos: building.pos });
        }
        if building.is_home() {
            if self.homes.contains_key(&building.identity) {
                return Err(GridError::DuplicateHome(building.identity));
            }
            self.homes.insert(building.identity, building.pos);
        }

        let id = BuildingId(self.buildings.len() as u32);
        let cell = &mut self.cells[i];
        cell.occupant = Occupant::Building(id);
        cell.unreachable = true;
        self.buildings.push(building);
        Ok(id)
    }

    /// Mark `pos` as permanently blocked without placing a building.
    pub fn block(&mut self, pos: GridPos) -> GridResult<()> {
        let i = self.index_of(pos)?;
        self.cells[i].unreachable = true;
        Ok(())
    }

    pub fn columns(&self) -> u32 { self.columns }
    pub fn rows(&self) -> u32 { self.rows }

    pub fn build(self) -> Grid {
        Grid {
            columns:   self.columns,
            rows:      self.rows,
            cells:     self.cells,
            buildings: self.buildings,
            homes:     self.homes,
        }
    }
}
