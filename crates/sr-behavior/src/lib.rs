//! `sr-behavior` — the behavior-tree capability consumed by the tick loop.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                     |
//! |-----------------|--------------------------------------------------------------|
//! | [`status`]      | `Status` (`Running`, `Success`, `Failure`)                   |
//! | [`node`]        | `Behavior<W>` trait, `Condition` and `Action` leaves         |
//! | [`composite`]   | `Sequence`, `Parallel` + `ParallelPolicy`                    |
//! | [`retry`]       | `retry_bounded`, bounded retry for actor placement           |
//!
//! # Design notes
//!
//! The tick loop only ever calls [`Behavior::tick`] on the root and looks at
//! the returned [`Status`]; it never inspects node types.  Leaves are
//! supplied by the scenario layer, usually as closures over the world type
//! `W`, so a leaf can both read world state and issue actor commands.

pub mod composite;
pub mod node;
pub mod retry;
pub mod status;

#[cfg(test)]
mod tests;

pub use composite::{Parallel, ParallelPolicy, Sequence};
pub use node::{Action, Behavior, BoxedBehavior, Condition};
pub use retry::{DEFAULT_PLACEMENT_ATTEMPTS, retry_bounded};
pub use status::Status;
