//! The `Behavior` capability and closure-backed leaves.

use crate::Status;

/// One node of a scenario behavior tree, evaluated against world `W`.
///
/// # Example
///
/// ```rust,ignore
/// let tree = Sequence::new("cross", vec![
///     Box::new(Condition::new("ego close", |w: &mut MyWorld| w.ego_distance() < 20.0)),
///     Box::new(Action::new("go", |w: &mut MyWorld| { w.accelerate(cyclist); Status::Success })),
/// ]);
/// ```
pub trait Behavior<W: ?Sized> {
    /// Human-readable node name, used in logs.
    fn name(&self) -> &str;

    /// Evaluate the node once.
    fn tick(&mut self, world: &mut W) -> Status;

    /// Called once when the scenario is torn down.  Default: nothing.
    fn terminate(&mut self) {}
}

/// Owned, type-erased behavior node.
pub type BoxedBehavior<W> = Box<dyn Behavior<W>>;

// ── Condition ─────────────────────────────────────────────────────────────────

/// Leaf that succeeds the first time its predicate holds and is `Running`
/// until then.
pub struct Condition<F> {
    name:      String,
    predicate: F,
}

impl<F> Condition<F> {
    pub fn new(name: impl Into<String>, predicate: F) -> Self {
        Self { name: name.into(), predicate }
    }
}

impl<W: ?Sized, F: FnMut(&mut W) -> bool> Behavior<W> for Condition<F> {
    fn name(&self) -> &str {
        &self.name
    }

    fn tick(&mut self, world: &mut W) -> Status {
        if (self.predicate)(world) { Status::Success } else { Status::Running }
    }
}

// ── Action ────────────────────────────────────────────────────────────────────

/// Leaf that runs a closure every tick and reports whatever it returns.
pub struct Action<F> {
    name:   String,
    action: F,
}

impl<F> Action<F> {
    pub fn new(name: impl Into<String>, action: F) -> Self {
        Self { name: name.into(), action }
    }
}

impl<W: ?Sized, F: FnMut(&mut W) -> Status> Behavior<W> for Action<F> {
    fn name(&self) -> &str {
        &self.name
    }

    fn tick(&mut self, world: &mut W) -> Status {
        (self.action)(world)
    }
}
