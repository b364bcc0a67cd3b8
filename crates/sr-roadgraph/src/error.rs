use sr_core::Vec3;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoadGraphError {
    #[error("road-graph point capacity exceeded: {required} points sampled, record holds {capacity}")]
    CapacityExceeded { capacity: usize, required: usize },

    #[error(
        "crosswalk vertex {index} at {vertex} reopens an earlier polygon; \
         polygons must arrive as contiguous closed runs"
    )]
    InterleavedCrosswalk { index: usize, vertex: Vec3 },

    #[error("no free crosswalk group id at or above {base}")]
    GroupIdsExhausted { base: usize },

    #[error("invalid sampling resolution {0} m")]
    Resolution(f64),

    #[error("map parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RoadGraphResult<T> = Result<T, RoadGraphError>;
