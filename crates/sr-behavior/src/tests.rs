//! Unit tests for sr-behavior.

use crate::{Action, Behavior, BoxedBehavior, Condition, Status};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Minimal world: a tick counter and a log of actions taken.
#[derive(Default)]
struct Counter {
    tick: u32,
    log:  Vec<&'static str>,
}

fn after(name: &'static str, tick: u32) -> BoxedBehavior<Counter> {
    Box::new(Condition::new(name, move |w: &mut Counter| w.tick >= tick))
}

fn fail_at(tick: u32) -> BoxedBehavior<Counter> {
    Box::new(Action::new("fail", move |w: &mut Counter| {
        if w.tick >= tick { Status::Failure } else { Status::Running }
    }))
}

fn run<B: Behavior<Counter>>(node: &mut B, world: &mut Counter, ticks: u32) -> Vec<Status> {
    (0..ticks)
        .map(|_| {
            let s = node.tick(world);
            world.tick += 1;
            s
        })
        .collect()
}

#[cfg(test)]
mod status_tests {
    use crate::Status;

    #[test]
    fn terminal() {
        assert!(!Status::Running.is_terminal());
        assert!(Status::Success.is_terminal());
        assert!(Status::Failure.is_terminal());
        assert_eq!(Status::Failure.to_string(), "FAILURE");
    }
}

#[cfg(test)]
mod leaf_tests {
    use super::*;

    #[test]
    fn condition_runs_until_true() {
        let mut c = Condition::new("t>=2", |w: &mut Counter| w.tick >= 2);
        let mut w = Counter::default();
        assert_eq!(run(&mut c, &mut w, 3), [Status::Running, Status::Running, Status::Success]);
        assert_eq!(Behavior::<Counter>::name(&c), "t>=2");
    }

    #[test]
    fn action_can_mutate_world() {
        let mut a = Action::new("log", |w: &mut Counter| {
            w.log.push("acted");
            Status::Success
        });
        let mut w = Counter::default();
        assert_eq!(a.tick(&mut w), Status::Success);
        assert_eq!(w.log, ["acted"]);
    }
}

#[cfg(test)]
mod composite_tests {
    use super::*;
    use crate::{Parallel, ParallelPolicy, Sequence};

    #[test]
    fn sequence_runs_children_in_order() {
        let mut seq = Sequence::new("seq", vec![after("a", 1), after("b", 3)]);
        let mut w = Counter::default();
        assert_eq!(
            run(&mut seq, &mut w, 5),
            [Status::Running, Status::Running, Status::Running, Status::Success, Status::Success]
        );
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let mut seq = Sequence::new("seq", vec![fail_at(1), after("never reached", 0)]);
        let mut w = Counter::default();
        assert_eq!(run(&mut seq, &mut w, 3), [Status::Running, Status::Failure, Status::Failure]);
    }

    #[test]
    fn empty_sequence_succeeds() {
        let mut seq: Sequence<Counter> = Sequence::new("empty", vec![]);
        assert_eq!(seq.tick(&mut Counter::default()), Status::Success);
    }

    #[test]
    fn parallel_success_on_one() {
        let mut par = Parallel::new("par", ParallelPolicy::SuccessOnOne, vec![after("slow", 10), after("fast", 2)]);
        let mut w = Counter::default();
        assert_eq!(run(&mut par, &mut w, 3), [Status::Running, Status::Running, Status::Success]);
    }

    #[test]
    fn parallel_success_on_all() {
        let mut par = Parallel::new("par", ParallelPolicy::SuccessOnAll, vec![after("a", 1), after("b", 2)]);
        let mut w = Counter::default();
        assert_eq!(run(&mut par, &mut w, 3), [Status::Running, Status::Running, Status::Success]);
    }

    #[test]
    fn parallel_fails_on_any_failure() {
        let mut par = Parallel::new("par", ParallelPolicy::SuccessOnAll, vec![after("a", 5), fail_at(1)]);
        let mut w = Counter::default();
        assert_eq!(run(&mut par, &mut w, 2), [Status::Running, Status::Failure]);
    }

    #[test]
    fn finished_children_are_not_ticked_again() {
        let mut par = Parallel::new(
            "par",
            ParallelPolicy::SuccessOnAll,
            vec![
                Box::new(Action::new("once", |w: &mut Counter| {
                    w.log.push("once");
                    Status::Success
                })) as BoxedBehavior<Counter>,
                after("late", 3),
            ],
        );
        let mut w = Counter::default();
        run(&mut par, &mut w, 4);
        assert_eq!(w.log, ["once"]);
    }
}

#[cfg(test)]
mod retry_tests {
    use crate::retry_bounded;

    #[test]
    fn returns_first_success() {
        let mut calls = Vec::new();
        let r: Result<u32, String> = retry_bounded(20, |n| {
            calls.push(n);
            if n < 3 { Err(format!("blocked at {n}")) } else { Ok(n * 10) }
        });
        assert_eq!(r, Ok(30));
        assert_eq!(calls, [0, 1, 2, 3]);
    }

    #[test]
    fn exhaustion_returns_last_error() {
        let mut calls = 0;
        let r: Result<(), String> = retry_bounded(5, |n| {
            calls += 1;
            Err(format!("blocked at {n}"))
        });
        assert_eq!(r, Err("blocked at 4".to_owned()));
        assert_eq!(calls, 5);
    }

    #[test]
    fn zero_attempts_still_tries_once() {
        let mut calls = 0;
        let r: Result<(), &str> = retry_bounded(0, |_| {
            calls += 1;
            Err("no")
        });
        assert!(r.is_err());
        assert_eq!(calls, 1);
    }
}
