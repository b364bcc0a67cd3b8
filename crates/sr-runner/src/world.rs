//! Collaborator traits: the simulated world and the optional driving agent.

use sr_core::{ActorId, ActorObservation, Timestamp};

/// Vehicle control command applied to one actor.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Control {
    /// 0.0 ..= 1.0
    pub throttle:   f64,
    /// -1.0 ..= 1.0
    pub steer:      f64,
    /// 0.0 ..= 1.0
    pub brake:      f64,
    pub hand_brake: bool,
    pub reverse:    bool,
}

/// The simulator, seen from the tick loop.
pub trait World {
    /// Clock reading of the latest world snapshot, or `None` if no snapshot
    /// is available yet.
    fn timestamp(&mut self) -> Option<Timestamp>;

    /// Every live actor in the latest snapshot, in record frame.
    fn observe_actors(&mut self) -> Vec<ActorObservation>;

    /// Queue a control command for `actor`; takes effect on the next step.
    fn apply_control(&mut self, actor: ActorId, control: Control);

    /// Advance the simulation by one step (lock-step mode only).
    fn tick(&mut self);
}

/// A driving agent controlling the ego actor.
pub trait Agent {
    /// Decide the ego control for the tick at `timestamp`.
    fn run_step(&mut self, timestamp: &Timestamp) -> Control;

    /// Release agent resources.  Default: nothing.
    fn cleanup(&mut self) {}
}
