//! Pace controls: speed, pause, cancel.
//!
//! Controls never change what an agent decides, only whether a decision
//! pass may run.  Speed is the presentation layer's animation rate; the
//! simulation only cares whether it is zero.

/// Speed, pause and cancel state.
///
/// | Field       | Effect on the tick driver                          |
/// |-------------|----------------------------------------------------|
/// | `paused`    | no decision pass, transits frozen                  |
/// | `cancelled` | no decision pass, agents hidden                    |
/// | `speed == 0`| transits frozen (stopwatches stopped)              |
#[derive(Clone, Debug, PartialEq)]
pub struct Controls {
    speed:       f64,
    /// Speed to restore when unpausing.
    saved_speed: f64,
    paused:      bool,
    cancelled:   bool,
}

impl Controls {
    pub const MAX_SPEED:  f64 = 4.0;
    pub const MIN_SPEED:  f64 = 0.2;
    pub const SPEED_STEP: f64 = 0.1;

    pub fn new() -> Self {
        Self {
            speed:       Self::MAX_SPEED,
            saved_speed: Self::MAX_SPEED,
            paused:      false,
            cancelled:   false,
        }
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// A decision pass may run.
    #[inline]
    pub fn is_running(&self) -> bool {
        !self.paused && !self.cancelled
    }

    /// Agents in transit make progress.
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.speed > 0.0
    }

    /// One step faster, up to `MAX_SPEED`.  Ignored while stopped.
    pub fn faster(&mut self) {
        if self.is_moving() && self.speed < Self::MAX_SPEED {
            self.speed = round_step(self.speed + Self::SPEED_STEP).min(Self::MAX_SPEED);
        }
    }

    /// One step slower, down to `MIN_SPEED`.  Ignored while stopped.
    pub fn slower(&mut self) {
        if self.is_moving() && self.speed > Self::MIN_SPEED {
            self.speed = round_step(self.speed - Self::SPEED_STEP).max(Self::MIN_SPEED);
        }
    }

    /// Swap speed with zero and flip the pause flag.
    ///
    /// While cancelled the speed is still swapped but the pause flag stays
    /// clear.
    pub fn toggle_pause(&mut self) {
        if self.is_moving() {
            self.saved_speed = self.speed;
            self.speed = 0.0;
        } else {
            self.speed = self.saved_speed;
        }
        if !self.cancelled {
            self.paused = !self.paused;
        }
    }

    /// Freeze for good: cancelled, not paused, speed zero.
    pub fn cancel(&mut self) {
        self.paused = false;
        self.cancelled = true;
        self.speed = 0.0;
    }

    /// Back to the initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::new()
    }
}

/// Snap to the 0.1 grid so repeated steps do not drift.
fn round_step(speed: f64) -> f64 {
    (speed * 10.0).round() / 10.0
}
