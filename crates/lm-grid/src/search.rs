//! Goal-directed navigation: which single step to take this tick.
//!
//! # Pluggability
//!
//! The decision layer calls navigation through the [`Navigator`] trait, so a
//! different search (BFS flood, cached distance fields, …) can replace the
//! default [`AstarNavigator`] without touching agent logic.
//!
//! # Multi-goal search
//!
//! A goal set holds every cell an agent believes hosts one category.  Each
//! goal is searched independently with a uniform-cost A* and a Manhattan
//! heuristic; the reachable goal with the strictly shortest path wins (the
//! first one in set order on ties) and only the first step of its path is
//! returned.  Occupancy is read from the grid as it is when the call is
//! made; the grid cannot change during a search.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use lm_core::{Direction, GridPos, LmResult};

use crate::Grid;

// ── SearchOutcome ─────────────────────────────────────────────────────────────

/// Result of one navigation query.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Take `direction` now; `distance` steps remain to `goal` including it.
    Step {
        direction: Direction,
        distance:  u32,
        goal:      GridPos,
    },
    /// The start cell is itself one of the goals.
    Arrived,
    /// No goal can be reached through currently empty cells.
    NoPath,
}

// ── Navigator trait ───────────────────────────────────────────────────────────

/// Pluggable goal-directed step planner.
pub trait Navigator {
    /// Plan the first move from `start` toward the nearest reachable cell of
    /// `goals`.
    ///
    /// Only empty cells are expanded; `start` itself may be occupied (it
    /// normally holds the searching agent).
    ///
    /// # Errors
    ///
    /// Only if the reconstructed first step is not adjacent to `start`,
    /// which would be a bug in the implementation.
    fn next_move(
        &mut self,
        grid:  &Grid,
        start: GridPos,
        goals: &BTreeSet<GridPos>,
    ) -> LmResult<SearchOutcome>;
}

// ── AstarNavigator ────────────────────────────────────────────────────────────

const NO_PARENT: u32 = u32::MAX;

/// Uniform-cost grid A* run once per goal.
///
/// The open/closed/score arrays are pooled across calls to avoid
/// reallocating per tick, and are wiped before every goal, so nothing leaks
/// between goals, calls, or agents.
#[derive(Default)]
pub struct AstarNavigator {
    /// Cost so far, indexed by cell.
    g:         Vec<u32>,
    /// `g + heuristic`, indexed by cell.
    f:         Vec<u32>,
    /// Predecessor cell index on the best known path.
    came_from: Vec<u32>,
    closed:    Vec<bool>,
    in_open:   Vec<bool>,
    /// First-admission order of each cell; breaks `f` ties.
    admitted:  Vec<u32>,
    /// Min-heap of `(f, admission order, cell)`.  Entries whose `f` no
    /// longer matches are stale and skipped on pop.
    open:      BinaryHeap<Reverse<(u32, u32, u32)>>,
}

impl AstarNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self, cells: usize) {
        self.g.clear();
        self.g.resize(cells, u32::MAX);
        self.f.clear();
        self.f.resize(cells, u32::MAX);
        self.came_from.clear();
        self.came_from.resize(cells, NO_PARENT);
        self.closed.clear();
        self.closed.resize(cells, false);
        self.in_open.clear();
        self.in_open.resize(cells, false);
        self.admitted.clear();
        self.admitted.resize(cells, u32::MAX);
        self.open.clear();
    }

    /// Pop the open cell with the lowest `f`, earliest admitted on ties.
    fn pop_best(&mut self) -> Option<usize> {
        while let Some(Reverse((f, _, cell))) = self.open.pop() {
            let cell = cell as usize;
            if !self.in_open[cell] || self.f[cell] != f {
                continue;
            }
            self.in_open[cell] = false;
            return Some(cell);
        }
        None
    }

    /// Length of the shortest path from `start` to `goal`, leaving the
    /// predecessor chain in `came_from`.  `None` if unreachable.
    fn search_goal(&mut self, grid: &Grid, start: usize, goal: GridPos) -> Option<u32> {
        let goal_idx = grid.index_of(goal)?;
        self.reset(grid.len());

        let mut admissions: u32 = 0;
        self.g[start] = 0;
        self.f[start] = grid.pos_of(start).manhattan(goal);
        self.in_open[start] = true;
        self.admitted[start] = admissions;
        self.open.push(Reverse((self.f[start], admissions, start as u32)));

        while let Some(current) = self.pop_best() {
            self.closed[current] = true;
            // Terminate on first pop, not first discovery: with unit costs the
            // goal's g is optimal once it has the lowest f in the frontier.
            if current == goal_idx {
                return Some(self.g[current]);
            }

            let tentative = self.g[current] + 1;
            for neighbor in grid.neighbors_empty(grid.pos_of(current)) {
                let Some(n) = grid.index_of(neighbor) else { continue };
                if self.closed[n] {
                    continue;
                }
                if self.in_open[n] && tentative >= self.g[n] {
                    continue;
                }
                if self.admitted[n] == u32::MAX {
                    admissions += 1;
                    self.admitted[n] = admissions;
                }
                self.came_from[n] = current as u32;
                self.g[n] = tentative;
                self.f[n] = tentative + neighbor.manhattan(goal);
                self.in_open[n] = true;
                self.open.push(Reverse((self.f[n], self.admitted[n], n as u32)));
            }
        }

        None
    }

    /// Walk predecessors back from `goal` to the cell right after `start`.
    fn first_step(&self, grid: &Grid, start: usize, goal: GridPos) -> Option<GridPos> {
        let mut current = grid.index_of(goal)?;
        loop {
            let parent = self.came_from[current];
            if parent == NO_PARENT {
                return None;
            }
            if parent as usize == start {
                return Some(grid.pos_of(current));
            }
            current = parent as usize;
        }
    }
}

impl Navigator for AstarNavigator {
    fn next_move(
        &mut self,
        grid:  &Grid,
        start: GridPos,
        goals: &BTreeSet<GridPos>,
    ) -> LmResult<SearchOutcome> {
        if goals.contains(&start) {
            return Ok(SearchOutcome::Arrived);
        }
        let Some(start_idx) = grid.index_of(start) else {
            return Ok(SearchOutcome::NoPath);
        };

        let mut best: Option<(u32, GridPos, GridPos)> = None;
        for &goal in goals {
            let Some(distance) = self.search_goal(grid, start_idx, goal) else {
                continue;
            };
            if best.is_some_and(|(d, _, _)| d <= distance) {
                continue;
            }
            if let Some(step) = self.first_step(grid, start_idx, goal) {
                best = Some((distance, goal, step));
            }
        }

        match best {
            None => Ok(SearchOutcome::NoPath),
            Some((distance, goal, step)) => Ok(SearchOutcome::Step {
                direction: grid.move_direction_for(start, step)?,
                distance,
                goal,
            }),
        }
    }
}
