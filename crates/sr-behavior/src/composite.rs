//! Composite nodes that own an ordered list of children.
//!
//! Both composites remember which children already completed and do not
//! tick them again.  Once a composite itself reaches a terminal status it
//! keeps returning that status.

use crate::{Behavior, BoxedBehavior, Status};

// ── Sequence ──────────────────────────────────────────────────────────────────

/// Ticks children one at a time, in order.
///
/// Fails as soon as a child fails; succeeds once every child has succeeded.
/// A child that succeeds hands over to the next child within the same tick.
pub struct Sequence<W: ?Sized> {
    name:     String,
    children: Vec<BoxedBehavior<W>>,
    current:  usize,
    done:     Option<Status>,
}

impl<W: ?Sized> Sequence<W> {
    pub fn new(name: impl Into<String>, children: Vec<BoxedBehavior<W>>) -> Self {
        Self { name: name.into(), children, current: 0, done: None }
    }
}

impl<W: ?Sized> Behavior<W> for Sequence<W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn tick(&mut self, world: &mut W) -> Status {
        if let Some(status) = self.done {
            return status;
        }
        while let Some(child) = self.children.get_mut(self.current) {
            match child.tick(world) {
                Status::Running => return Status::Running,
                Status::Failure => {
                    tracing::debug!(sequence = %self.name, child = child.name(), "child failed");
                    self.done = Some(Status::Failure);
                    return Status::Failure;
                }
                Status::Success => self.current += 1,
            }
        }
        self.done = Some(Status::Success);
        Status::Success
    }

    fn terminate(&mut self) {
        for child in &mut self.children {
            child.terminate();
        }
    }
}

// ── Parallel ──────────────────────────────────────────────────────────────────

/// When a [`Parallel`] counts as successful.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParallelPolicy {
    /// Success as soon as any one child succeeds.
    SuccessOnOne,
    /// Success once every child has succeeded.
    SuccessOnAll,
}

/// Ticks every unfinished child each tick.
///
/// Any child failure fails the whole node.
pub struct Parallel<W: ?Sized> {
    name:     String,
    policy:   ParallelPolicy,
    children: Vec<BoxedBehavior<W>>,
    finished: Vec<bool>,
    done:     Option<Status>,
}

impl<W: ?Sized> Parallel<W> {
    pub fn new(name: impl Into<String>, policy: ParallelPolicy, children: Vec<BoxedBehavior<W>>) -> Self {
        let finished = vec![false; children.len()];
        Self { name: name.into(), policy, children, finished, done: None }
    }
}

impl<W: ?Sized> Behavior<W> for Parallel<W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn tick(&mut self, world: &mut W) -> Status {
        if let Some(status) = self.done {
            return status;
        }

        let mut any_success = false;
        for (child, finished) in self.children.iter_mut().zip(self.finished.iter_mut()) {
            if *finished {
                continue;
            }
            match child.tick(world) {
                Status::Running => {}
                Status::Success => {
                    *finished = true;
                    any_success = true;
                }
                Status::Failure => {
                    tracing::debug!(parallel = %self.name, child = child.name(), "child failed");
                    self.done = Some(Status::Failure);
                    return Status::Failure;
                }
            }
        }

        let succeeded = match self.policy {
            ParallelPolicy::SuccessOnOne => any_success,
            ParallelPolicy::SuccessOnAll => self.finished.iter().all(|&f| f),
        };
        if succeeded {
            self.done = Some(Status::Success);
            Status::Success
        } else {
            Status::Running
        }
    }

    fn terminate(&mut self) {
        for child in &mut self.children {
            child.terminate();
        }
    }
}
