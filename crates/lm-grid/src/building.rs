//! Static occupants.

use lm_core::GridPos;

/// A building placed once at grid construction and never moved.
///
/// Important buildings are *landmarks*: their `identity` character is a
/// knowledge category agents learn and navigate to.  Plain obstacles (`*` on
/// the map) only block movement.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Building {
    pub name:      String,
    pub identity:  char,
    pub important: bool,
    /// Storey count.  Only the renderer uses it.
    pub height:    u32,
    pub pos:       GridPos,
}

impl Building {
    /// Identity character of plain obstacles.
    pub const OBSTACLE: char = '*';

    /// A landmark of category `identity`.
    pub fn landmark(name: impl Into<String>, identity: char, height: u32, pos: GridPos) -> Self {
        Self { name: name.into(), identity, important: true, height, pos }
    }

    /// The home of agents whose number ends in `digit`.  Homes are landmarks
    /// whose category is the digit itself.
    pub fn home(digit: char, pos: GridPos) -> Self {
        Self::landmark(format!("Agent Home {digit}"), digit, 1, pos)
    }

    /// A plain, unimportant obstacle.
    pub fn obstacle(pos: GridPos) -> Self {
        Self {
            name:      "unimportant building".to_owned(),
            identity:  Self::OBSTACLE,
            important: false,
            height:    1,
            pos,
        }
    }

    /// `true` for agent homes (important buildings keyed by a digit).
    #[inline]
    pub fn is_home(&self) -> bool {
        self.important && self.identity.is_ascii_digit()
    }
}
