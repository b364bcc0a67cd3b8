//! `sr-history` — per-actor kinematic history for one scenario run.
//!
//! # Two stages
//!
//! ```text
//! during the run:   ActorHistory::record_tick(snapshot)      (sparse, keyed by ActorId)
//! after the run:    ActorHistory::finalize(A, S) → ActorStates   (dense, (A,) and (A,S))
//! ```
//!
//! Rows of the dense arrays follow *first-sight order*: row `i` belongs to
//! the `i`-th distinct actor ever observed.  Columns are the actor's own
//! samples, left-aligned: column 0 is the first tick the actor was seen,
//! not tick 0 of the run.  An actor that spawns at tick 10 therefore has its
//! tick-10 sample in column 0.
//!
//! Unused rows and trailing columns keep the record sentinels: `-1.0` for
//! every field except `valid`, which uses `0.0`.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `fx-hash` | Uses `FxHashMap` for the actor-id index.                |

pub mod error;
pub mod history;
pub mod states;

#[cfg(test)]
mod tests;

pub use error::{HistoryError, HistoryResult};
pub use history::{ActorHistory, ActorTrack};
pub use states::ActorStates;
