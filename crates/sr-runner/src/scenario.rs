use sr_behavior::BoxedBehavior;
use sr_core::ActorId;

/// A loaded scenario: its name, behavior tree, and ego actor.
pub struct Scenario<W: ?Sized> {
    /// Scenario configuration name, e.g. `"BikePassingby_1"`.
    pub name: String,
    pub tree: BoxedBehavior<W>,
    /// Actor driven by the agent, if any.
    pub ego:  Option<ActorId>,
}

impl<W: ?Sized> Scenario<W> {
    pub fn new(name: impl Into<String>, tree: BoxedBehavior<W>) -> Self {
        Self { name: name.into(), tree, ego: None }
    }

    pub fn with_ego(mut self, ego: ActorId) -> Self {
        self.ego = Some(ego);
        self
    }
}
