//! `sr-runner` — drives one scenario to completion against a live world.
//!
//! # Tick loop
//!
//! ```text
//! start watchdog; running = true
//! while running:
//!   ts = world.timestamp()                  (poll; None → try again)
//!   if ts.elapsed > last_elapsed:           a new tick
//!     ① watchdog.update()                   heartbeat
//!     ② history.record_tick(world actors)   observation
//!     ③ agent.run_step → world.apply_control(ego)
//!     ④ tree.tick(world)                    terminal status → running = false
//!   if watchdog unhealthy:                  outcome = Timeout; running = false
//!   else if lock-step and running:
//!     ⑤ world.tick()                        control is always applied before the step
//! stop watchdog
//! ```
//!
//! The loop polls: the world offers no push notification of new frames.
//! Cancellation through [`StopHandle`] is cooperative and observed at the
//! top of the next iteration.
//!
//! # Watchdog
//!
//! [`Watchdog`] runs on its own thread and only reads the clock and flips
//! its own health flag, so a world that hangs inside `timestamp()` or never
//! produces a new frame is still detected.

pub mod error;
pub mod manager;
pub mod observer;
pub mod report;
pub mod scenario;
pub mod watchdog;
pub mod world;


pub use error::{RunnerError, RunnerResult};
pub use manager::{ScenarioManager, StopHandle};
pub use observer::{NoopObserver, ScenarioObserver};
pub use report::{RunOutcome, RunReport};
pub use scenario::Scenario;
pub use watchdog::{Health, Watchdog};
pub use world::{Agent, Control, World};
