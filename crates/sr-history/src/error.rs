use sr_core::ActorId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("agent capacity exceeded: {observed} distinct actors observed, record holds {capacity}")]
    TooManyActors { capacity: usize, observed: usize },

    #[error("step capacity exceeded: {actor} has {len} samples, record holds {capacity} steps")]
    SeriesTooLong { actor: ActorId, len: usize, capacity: usize },

    #[error("{actor} appears more than once in the snapshot for step {step}")]
    DuplicateObservation { actor: ActorId, step: usize },
}

pub type HistoryResult<T> = Result<T, HistoryError>;
