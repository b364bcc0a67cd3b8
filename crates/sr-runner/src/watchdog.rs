//! Liveness watchdog backed by its own thread.
//!
//! The deadline and the tripped flag live under one mutex, so a reader never
//! sees a fresh deadline paired with a stale flag.  The supervising thread
//! sleeps on a condvar until the deadline (or a heartbeat) and only ever
//! writes the tripped flag.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use crate::{RunnerError, RunnerResult};

/// Watchdog health as seen by [`Watchdog::status`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Health {
    Healthy,
    Unhealthy,
}

impl Health {
    #[inline]
    pub fn is_healthy(self) -> bool {
        self == Health::Healthy
    }
}

struct State {
    deadline:  Instant,
    tripped:   bool,
    cancelled: bool,
}

struct Shared {
    state: Mutex<State>,
    cond:  Condvar,
}

/// A cancellable deadline: arm with [`start`][Self::start], push back with
/// [`update`][Self::update], read with [`status`][Self::status].
pub struct Watchdog {
    timeout: Duration,
    shared:  Arc<Shared>,
    thread:  Option<JoinHandle<()>>,
}

impl Watchdog {
    /// Arm a new watchdog that trips `timeout` from now unless updated.
    pub fn start(timeout: Duration) -> RunnerResult<Self> {
        let shared = Arc::new(Shared {
            state: Mutex::new(State {
                deadline:  Instant::now() + timeout,
                tripped:   false,
                cancelled: false,
            }),
            cond: Condvar::new(),
        });

        let worker = Arc::clone(&shared);
        let thread = thread::Builder::new()
            .name("watchdog".to_owned())
            .spawn(move || supervise(&worker, timeout))
            .map_err(RunnerError::Watchdog)?;

        Ok(Self { timeout, shared, thread: Some(thread) })
    }

    /// Heartbeat: move the deadline to `timeout` from now and clear a trip.
    ///
    /// Has no effect once the watchdog is stopped.
    pub fn update(&self) {
        let mut state = self.shared.state.lock();
        if state.cancelled {
            return;
        }
        state.deadline = Instant::now() + self.timeout;
        state.tripped = false;
        self.shared.cond.notify_one();
    }

    /// `Unhealthy` once the deadline has passed without a heartbeat.
    pub fn status(&self) -> Health {
        let state = self.shared.state.lock();
        let expired = !state.cancelled && Instant::now() >= state.deadline;
        if state.tripped || expired { Health::Unhealthy } else { Health::Healthy }
    }

    /// Cancel permanently and join the supervising thread.  Idempotent.
    ///
    /// The health reported by [`status`][Self::status] is frozen from here on.
    pub fn stop(&mut self) {
        {
            let mut state = self.shared.state.lock();
            if !state.tripped && Instant::now() >= state.deadline {
                state.tripped = true;
            }
            state.cancelled = true;
            self.shared.cond.notify_one();
        }
        if let Some(handle) = self.thread.take() {
            if handle.join().is_err() {
                tracing::error!("watchdog thread panicked");
            }
        }
    }
}

impl Drop for Watchdog {
    fn drop(&mut self) {
        self.stop();
    }
}

fn supervise(shared: &Shared, timeout: Duration) {
    let mut state = shared.state.lock();
    loop {
        if state.cancelled {
            return;
        }
        if state.tripped {
            shared.cond.wait(&mut state);
            continue;
        }
        let deadline = state.deadline;
        if Instant::now() >= deadline {
            state.tripped = true;
            tracing::error!(timeout_secs = timeout.as_secs_f64(), "watchdog timeout: no tick within deadline");
            continue;
        }
        shared.cond.wait_until(&mut state, deadline);
    }
}
