//! The sparse, incrementally built actor history.

use sr_core::{ActorId, ActorObservation, ActorType, FixedArray, INVALID, INVALID_VALID, KinematicSample};

use crate::{ActorStates, HistoryError, HistoryResult};

#[cfg(not(feature = "fx-hash"))]
type IdMap<V> = std::collections::HashMap<ActorId, V>;
#[cfg(feature = "fx-hash")]
type IdMap<V> = rustc_hash::FxHashMap<ActorId, V>;

#[cfg(not(feature = "fx-hash"))]
type IdSet = std::collections::HashSet<ActorId>;
#[cfg(feature = "fx-hash")]
type IdSet = rustc_hash::FxHashSet<ActorId>;

// ── ActorTrack ────────────────────────────────────────────────────────────────

/// Everything recorded for one actor.
#[derive(Clone, Debug)]
pub struct ActorTrack {
    pub id:         ActorId,
    /// Simulator type string from the first observation.
    pub type_id:    String,
    pub actor_type: ActorType,
    /// Run step at which the actor was first observed.
    pub first_step: usize,
    /// The actor's own series, oldest first.
    pub samples:    Vec<KinematicSample>,
}

// ── ActorHistory ──────────────────────────────────────────────────────────────

/// Per-actor kinematic history for exactly one run.
///
/// Owned by the run that fills it; create a fresh one per run.
#[derive(Debug, Default)]
pub struct ActorHistory {
    /// ActorId → position in `tracks`.
    index:  IdMap<usize>,
    /// Tracks in first-sight order.
    tracks: Vec<ActorTrack>,
    /// Number of completed `record_tick` calls.
    steps:  usize,
}

impl ActorHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one tick's snapshot of live actors and advance the step index.
    ///
    /// Actors absent from the snapshot simply get no sample this step.  An
    /// actor id repeated inside one snapshot is rejected before anything is
    /// recorded.
    pub fn record_tick(&mut self, snapshot: &[ActorObservation]) -> HistoryResult<()> {
        let mut seen = IdSet::default();
        for obs in snapshot {
            if !seen.insert(obs.id) {
                return Err(HistoryError::DuplicateObservation { actor: obs.id, step: self.steps });
            }
        }

        for obs in snapshot {
            let slot = match self.index.get(&obs.id) {
                Some(&i) => i,
                None => {
                    let i = self.tracks.len();
                    tracing::debug!(actor = %obs.id, type_id = %obs.type_id, step = self.steps, "first sight");
                    self.tracks.push(ActorTrack {
                        id:         obs.id,
                        type_id:    obs.type_id.clone(),
                        actor_type: obs.actor_type(),
                        first_step: self.steps,
                        samples:    Vec::new(),
                    });
                    self.index.insert(obs.id, i);
                    i
                }
            };
            self.tracks[slot].samples.push(obs.sample);
        }

        self.steps += 1;
        Ok(())
    }

    /// Ticks recorded so far.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Distinct actors observed so far.
    #[inline]
    pub fn actor_count(&self) -> usize {
        self.tracks.len()
    }

    /// Tracks in first-sight order.
    pub fn tracks(&self) -> &[ActorTrack] {
        &self.tracks
    }

    pub fn track(&self, id: ActorId) -> Option<&ActorTrack> {
        self.index.get(&id).map(|&i| &self.tracks[i])
    }

    /// Materialise dense `(num_agents,)` and `(num_agents, num_steps)` arrays.
    ///
    /// Fails if more than `num_agents` actors were observed or any actor's
    /// series is longer than `num_steps`; nothing is truncated.
    pub fn finalize(&self, num_agents: usize, num_steps: usize) -> HistoryResult<ActorStates> {
        if self.tracks.len() > num_agents {
            return Err(HistoryError::TooManyActors {
                capacity: num_agents,
                observed: self.tracks.len(),
            });
        }
        if let Some(t) = self.tracks.iter().find(|t| t.samples.len() > num_steps) {
            return Err(HistoryError::SeriesTooLong {
                actor:    t.id,
                len:      t.samples.len(),
                capacity: num_steps,
            });
        }

        let per_step = [num_agents, num_steps];
        let mut out = ActorStates {
            id:         FixedArray::filled(&[num_agents], INVALID),
            actor_type: FixedArray::filled(&[num_agents], INVALID),
            x:          FixedArray::filled(&per_step, INVALID),
            y:          FixedArray::filled(&per_step, INVALID),
            bbox_yaw:   FixedArray::filled(&per_step, INVALID),
            length:     FixedArray::filled(&per_step, INVALID),
            width:      FixedArray::filled(&per_step, INVALID),
            valid:      FixedArray::filled(&per_step, INVALID_VALID),
            observed:   self.tracks.len(),
        };

        for (row, track) in self.tracks.iter().enumerate() {
            out.id.row_mut(row)[0] = track.id.0 as f64;
            out.actor_type.row_mut(row)[0] = track.actor_type.code();

            for (col, s) in track.samples.iter().enumerate() {
                out.x.row_mut(row)[col]        = s.x;
                out.y.row_mut(row)[col]        = s.y;
                out.bbox_yaw.row_mut(row)[col] = s.bbox_yaw;
                out.length.row_mut(row)[col]   = s.length;
                out.width.row_mut(row)[col]    = s.width;
                out.valid.row_mut(row)[col]    = s.valid;
            }
        }

        Ok(out)
    }
}
