//! Grouping of the flat crosswalk vertex stream into polygons.
//!
//! The map hands crosswalks over as one ordered vertex list with no
//! separators.  A polygon is a contiguous run that returns to its first
//! vertex:
//!
//! ```text
//! a b c a | d e f d | g …
//! └─ grp ─┘ └─ grp ─┘
//! ```
//!
//! A vertex at zero planar distance from the current group's first vertex
//! closes the group; the next vertex *not* coincident with that first vertex
//! opens a new group.  The rule is order-dependent: interleaved polygons
//! cannot be recovered, and a group that would open on an earlier group's
//! first vertex is rejected.

use std::collections::BTreeSet;

use sr_core::{GroupId, Vec3};

use crate::{RoadGraphError, RoadGraphResult};

/// Assign a group id to every crosswalk vertex.
///
/// `used` holds every id already taken (lane ids); new crosswalk ids are
/// added to it.  A new group's id is the smallest free value at or above the
/// index of its first vertex.
pub fn group_crosswalks(vertices: &[Vec3], used: &mut BTreeSet<i32>) -> RoadGraphResult<Vec<GroupId>> {
    let mut ids = Vec::with_capacity(vertices.len());
    let Some(&start) = vertices.first() else {
        return Ok(ids);
    };

    let mut starts = vec![start];
    let mut first  = start;
    let mut closed = false;
    let mut group  = fresh_id(0, used)?;

    for (i, &v) in vertices.iter().enumerate() {
        if i > 0 {
            if v.planar_distance(first) == 0.0 {
                closed = true;
            } else if closed {
                if starts.iter().any(|s| s.planar_distance(v) == 0.0) {
                    return Err(RoadGraphError::InterleavedCrosswalk { index: i, vertex: v });
                }
                group  = fresh_id(i, used)?;
                first  = v;
                closed = false;
                starts.push(v);
            }
        }
        ids.push(group);
    }

    tracing::debug!(vertices = vertices.len(), polygons = starts.len(), "grouped crosswalks");
    Ok(ids)
}

/// Smallest id at or above `base` not in `used`; claims it.
pub(crate) fn fresh_id(base: usize, used: &mut BTreeSet<i32>) -> RoadGraphResult<GroupId> {
    let mut id = i32::try_from(base).unwrap_or(i32::MAX);
    while used.contains(&id) {
        id = id.checked_add(1).ok_or(RoadGraphError::GroupIdsExhausted { base })?;
    }
    used.insert(id);
    Ok(GroupId(id))
}
