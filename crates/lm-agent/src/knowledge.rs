//! Per-agent knowledge base.
//!
//! A category is the identity character of a landmark.  The cells recorded
//! under it are where an agent *stood* when it saw the landmark next to it,
//! not the landmark's own cell: building cells can never be entered, so the
//! adjacent cell is the one worth navigating to.
//!
//! Ordered maps and sets keep iteration (and therefore goal order during
//! search) deterministic.

use std::collections::{BTreeMap, BTreeSet};

use lm_core::GridPos;

/// Mapping from landmark category to every cell believed to be next to one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Knowledge {
    entries: BTreeMap<char, BTreeSet<GridPos>>,
}

impl Knowledge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `pos` under `category`.  Returns `true` if it was not already
    /// known.
    pub fn learn(&mut self, category: char, pos: GridPos) -> bool {
        self.entries.entry(category).or_default().insert(pos)
    }

    /// Copy every entry of `other` into `self`.  Returns the number of
    /// `(category, cell)` pairs that were new.
    pub fn merge_from(&mut self, other: &Knowledge) -> usize {
        let mut added = 0;
        for (&category, cells) in &other.entries {
            let mine = self.entries.entry(category).or_default();
            for &pos in cells {
                if mine.insert(pos) {
                    added += 1;
                }
            }
        }
        added
    }

    /// Known cells for `category`, or `None` if it has never been seen.
    pub fn cells(&self, category: char) -> Option<&BTreeSet<GridPos>> {
        self.entries.get(&category)
    }

    pub fn knows(&self, category: char) -> bool {
        self.entries.contains_key(&category)
    }

    /// Every learned cell with its category, in category then cell order.
    pub fn points(&self) -> impl Iterator<Item = (char, GridPos)> + '_ {
        self.entries
            .iter()
            .flat_map(|(&c, cells)| cells.iter().map(move |&p| (c, p)))
    }

    /// Known categories, in order.
    pub fn categories(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.keys().copied()
    }

    /// Total number of `(category, cell)` pairs.
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
