//! `sr-core` — foundational types for the `scenario_record` workspace.
//!
//! This crate is a dependency of every other `sr-*` crate.  It has no `sr-*`
//! dependencies and only a handful of external ones (`thiserror`, `serde`,
//! `toml`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`ids`]      | `ActorId`, `LaneId`, `GroupId`                             |
//! | [`actor`]    | `ActorType`, `KinematicSample`, `ActorObservation`         |
//! | [`geo`]      | `Vec3`, planar distance, lateral-axis flip                 |
//! | [`time`]     | `Timestamp` (simulator clock reading)                      |
//! | [`array`]    | `FixedArray<T>`, fixed-shape sentinel-filled storage       |
//! | [`config`]   | `RunConfig` and the fixed record capacities                |
//! | [`error`]    | `CoreError`, `CoreResult`                                  |
//!
//! # Coordinate convention
//!
//! The simulator uses a left-handed frame.  Everything written to a
//! [`FixedArray`] destined for the output record is in the right-handed
//! record frame, obtained by negating the lateral (`y`) axis.

pub mod actor;
pub mod array;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use actor::{ActorObservation, ActorType, KinematicSample};
pub use array::FixedArray;
pub use config::{
    INVALID, INVALID_VALID, NUM_AGENTS, NUM_RG_POINTS, OUTPUT_ROOT_ENV, RG_RESOLUTION_M, RunConfig,
    SHARD_COUNT,
};
pub use error::{CoreError, CoreResult};
pub use geo::Vec3;
pub use ids::{ActorId, GroupId, LaneId};
pub use time::Timestamp;
