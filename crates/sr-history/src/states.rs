//! Dense, finalised actor state arrays.

use sr_core::FixedArray;

/// The `state/*` arrays of one record.
///
/// `id` and `actor_type` have shape `(A,)`; the six per-step arrays have
/// shape `(A, S)`.
#[derive(Clone, Debug, PartialEq)]
pub struct ActorStates {
    pub id:         FixedArray<f64>,
    pub actor_type: FixedArray<f64>,
    pub x:          FixedArray<f64>,
    pub y:          FixedArray<f64>,
    pub bbox_yaw:   FixedArray<f64>,
    pub length:     FixedArray<f64>,
    pub width:      FixedArray<f64>,
    pub valid:      FixedArray<f64>,
    /// Number of leading rows that hold a real actor.
    pub observed:   usize,
}

impl ActorStates {
    /// Agent capacity `A`.
    pub fn num_agents(&self) -> usize {
        self.id.rows()
    }

    /// Step count `S`.
    pub fn num_steps(&self) -> usize {
        self.x.shape().get(1).copied().unwrap_or(0)
    }
}
