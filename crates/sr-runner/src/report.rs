//! Outcome of one run.

use std::fmt;
use std::time::Duration;

/// How a run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The behavior tree reached `Success`.
    Success,
    /// The behavior tree reached `Failure`.
    Failure,
    /// The watchdog saw no new tick within its timeout.
    Timeout,
    /// [`StopHandle::stop`][crate::StopHandle::stop] was called.
    Cancelled,
}

impl RunOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            RunOutcome::Success   => "SUCCESS",
            RunOutcome::Failure   => "FAILURE",
            RunOutcome::Timeout   => "TIMEOUT",
            RunOutcome::Cancelled => "CANCELLED",
        }
    }

    pub fn is_success(self) -> bool {
        self == RunOutcome::Success
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary returned by [`ScenarioManager::run`][crate::ScenarioManager::run].
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    pub scenario:        String,
    pub outcome:         RunOutcome,
    /// Ticks processed (equals the history's step count).
    pub ticks:           u64,
    /// Wall-clock time spent in the loop.
    pub duration_system: Duration,
    /// Simulated seconds covered by the processed ticks.
    pub duration_game:   f64,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} after {} ticks (system {:.2}s, game {:.2}s)",
            self.scenario,
            self.outcome,
            self.ticks,
            self.duration_system.as_secs_f64(),
            self.duration_game,
        )
    }
}
