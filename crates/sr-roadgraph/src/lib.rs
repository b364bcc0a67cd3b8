//! `sr-roadgraph` — static map geometry as road-graph samples.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`map`]         | `MapSource` trait, `Lane`, `LaneKind`, in-memory `StaticMap`  |
//! | [`sampler`]     | `RoadGraphSampler`, `RoadGraph`, `RoadGraphType`              |
//! | [`crosswalk`]   | polygon grouping of the flat crosswalk vertex stream          |
//! | [`loader`]      | CSV map loader                                                |
//! | [`error`]       | `RoadGraphError`, `RoadGraphResult<T>`                        |
//!
//! # Row layout
//!
//! ```text
//! rows 0 .. n           lane centreline samples (type 2 or 3, id = lane id)
//! rows n .. n+m         crosswalk vertices      (type 18, synthetic id)
//! rows n+m .. capacity  sentinels               (-1, valid = 0)
//! ```
//!
//! Positions and lane directions are mirrored into the record frame
//! (lateral axis negated) as they are ingested.

pub mod crosswalk;
pub mod error;
pub mod loader;
pub mod map;
pub mod sampler;

#[cfg(test)]
mod tests;

pub use error::{RoadGraphError, RoadGraphResult};
pub use loader::{load_crosswalks_reader, load_lanes_reader, load_map_csv};
pub use map::{Lane, LaneKind, MapSource, StaticMap};
pub use sampler::{RoadGraph, RoadGraphSampler, RoadGraphType};
