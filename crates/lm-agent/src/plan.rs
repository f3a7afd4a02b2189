//! Agent definitions as supplied by the scenario loader.

/// One agent's identity and the ordered landmark categories it must visit.
///
/// Kept by the simulation after construction so `reset` can restore the
/// original target queue.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentPlan {
    /// The agent's number; its last decimal digit selects its home.
    pub number:  u32,
    pub targets: Vec<char>,
}

impl AgentPlan {
    pub fn new(number: u32, targets: impl IntoIterator<Item = char>) -> Self {
        Self { number, targets: targets.into_iter().collect() }
    }

    /// Home category shared by every agent whose number ends in the same
    /// digit.
    #[inline]
    pub fn home_category(&self) -> char {
        home_category(self.number)
    }
}

/// `'0'..='9'` for `number % 10`.
#[inline]
pub fn home_category(number: u32) -> char {
    char::from(b'0' + (number % 10) as u8)
}
