//! The `Agent` struct.

use std::collections::VecDeque;

use lm_core::{AgentId, GridPos};
use rustc_hash::FxHashSet;

use crate::plan::home_category;
use crate::{AgentPlan, AgentStatistics, Knowledge, Transit};

/// One landmark-seeking agent.
///
/// The decision state is not stored as a single field; it follows from the
/// data:
///
/// | Condition                                   | State              |
/// |---------------------------------------------|--------------------|
/// | `!active`                                   | finished / hidden  |
/// | `position == home`                          | leaving home       |
/// | front target known, `finished == false`     | navigating         |
/// | front target known, `finished == true`      | homing             |
/// | otherwise                                   | exploring          |
#[derive(Clone, Debug)]
pub struct Agent {
    /// Processing-order index; also the occupant id written into cells.
    pub id:     AgentId,
    pub number: u32,
    pub name:   String,

    /// The agent's home building cell.  Fixed at creation.
    pub home:     GridPos,
    pub position: GridPos,

    /// Categories still to visit, front first.
    pub targets:   VecDeque<char>,
    pub knowledge: Knowledge,
    /// Cells stepped on since the last memory wipe.
    pub visited:   FxHashSet<GridPos>,

    /// Set once the plan is exhausted and the home category is queued.
    pub finished: bool,
    /// Cleared when the agent reaches home after homing, or on cancel.
    pub active:   bool,
    /// Consecutive exploration picks with no unvisited empty neighbor.
    pub trapped_moves: u32,

    /// Every cell the agent has stood in, starting with `home`.
    pub path:       Vec<GridPos>,
    pub transit:    Transit,
    pub statistics: AgentStatistics,
}

impl Agent {
    /// A fresh agent standing on `home` with `plan`'s targets queued.
    pub fn new(id: AgentId, plan: &AgentPlan, home: GridPos) -> Self {
        Self {
            id,
            number:        plan.number,
            name:          format!("Agent{}", plan.number),
            home,
            position:      home,
            targets:       plan.targets.iter().copied().collect(),
            knowledge:     Knowledge::new(),
            visited:       FxHashSet::default(),
            finished:      false,
            active:        true,
            trapped_moves: 0,
            path:          vec![home],
            transit:       Transit::stationary(home),
            statistics:    AgentStatistics::new(),
        }
    }

    /// Category of this agent's home landmark: the last digit of its number.
    #[inline]
    pub fn home_category(&self) -> char {
        home_category(self.number)
    }

    /// Still on the home building cell, i.e. has not moved since creation or
    /// the last reset.
    #[inline]
    pub fn is_at_home(&self) -> bool {
        self.position == self.home
    }

    /// Front of the target queue.
    #[inline]
    pub fn current_target(&self) -> Option<char> {
        self.targets.front().copied()
    }

    /// Eligible for a decision this pass.
    #[inline]
    pub fn can_decide(&self) -> bool {
        self.active && !self.transit.in_transit
    }

    /// Coordinates of every learned landmark-adjacent cell.
    pub fn knowledge_points(&self) -> Vec<GridPos> {
        self.knowledge.points().map(|(_, p)| p).collect()
    }

    /// Back to the state `new` produced, with `plan`'s targets re-queued.
    ///
    /// Grid occupancy is not touched here; the caller vacates the old cell.
    pub fn reset(&mut self, plan: &AgentPlan) {
        self.position = self.home;
        self.targets = plan.targets.iter().copied().collect();
        self.knowledge.clear();
        self.visited.clear();
        self.finished = false;
        self.active = true;
        self.trapped_moves = 0;
        self.path.clear();
        self.path.push(self.home);
        self.transit = Transit::stationary(self.home);
        self.statistics.reset();
    }
}
