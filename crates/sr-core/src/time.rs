//! Simulator clock readings.
//!
//! The simulator owns time; this side only ever *reads* it.  A tick is
//! recognised by the elapsed simulated time strictly increasing between two
//! readings, never by counting loop iterations.

use std::fmt;

/// One reading of the simulator clock, taken from a world snapshot.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Timestamp {
    /// Simulator frame counter.
    pub frame: u64,
    /// Simulated seconds since the simulator's episode start.
    pub elapsed_seconds: f64,
    /// Simulated seconds covered by the last step.
    pub delta_seconds: f64,
}

impl Timestamp {
    pub const fn new(frame: u64, elapsed_seconds: f64, delta_seconds: f64) -> Self {
        Self { frame, elapsed_seconds, delta_seconds }
    }

    /// `true` if this reading is strictly later than `last_elapsed` seconds.
    #[inline]
    pub fn is_after(&self, last_elapsed: f64) -> bool {
        self.elapsed_seconds > last_elapsed
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame {} @ {:.3}s", self.frame, self.elapsed_seconds)
    }
}
