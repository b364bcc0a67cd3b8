//! Strongly typed identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys without
//! ceremony.  The inner integer is `pub`; the record stores ids as numbers,
//! so conversion is always explicit at the encoding boundary.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[derive(serde::Serialize, serde::Deserialize)]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// Simulator actor identity.  Unique within one run.
    pub struct ActorId(u32);
}

typed_id! {
    /// Lane identity as reported by the map collaborator.  May be negative
    /// (lanes driving against the road's reference direction).
    pub struct LaneId(i32);
}

typed_id! {
    /// Road-graph group id: a lane id for lane samples, a synthetic id for
    /// crosswalk polygons.
    pub struct GroupId(i32);
}

impl From<LaneId> for GroupId {
    #[inline]
    fn from(lane: LaneId) -> GroupId {
        GroupId(lane.0)
    }
}
