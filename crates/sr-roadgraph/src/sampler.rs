//! Lane resampling and assembly of the `roadgraph_samples/*` arrays.

use std::collections::BTreeSet;

use sr_core::{FixedArray, GroupId, INVALID, RunConfig, Vec3};

use crate::crosswalk::group_crosswalks;
use crate::{LaneKind, MapSource, RoadGraphError, RoadGraphResult};

/// Synthetic direction written for every crosswalk vertex.
const CROSSWALK_DIR: Vec3 = Vec3::new(1.0, 1.0, 1.0);

/// Tolerance when deciding whether the last sample still lies on the lane.
const ARC_EPS: f64 = 1e-9;

// ── RoadGraphType ─────────────────────────────────────────────────────────────

/// Road-graph type codes, aligned with the benchmark taxonomy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum RoadGraphType {
    SurfaceStreet = 2,
    BikeLane      = 3,
    Crosswalk     = 18,
}

impl RoadGraphType {
    /// Type of a lane kind; `None` for lanes that are not sampled.
    pub fn for_lane(kind: LaneKind) -> Option<RoadGraphType> {
        match kind {
            LaneKind::Driving => Some(RoadGraphType::SurfaceStreet),
            LaneKind::Biking  => Some(RoadGraphType::BikeLane),
            _                 => None,
        }
    }

    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }
}

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// The `roadgraph_samples/*` arrays of one record.
#[derive(Clone, Debug, PartialEq)]
pub struct RoadGraph {
    /// `(R, 3)` positions, record frame.
    pub xyz:     FixedArray<f64>,
    /// `(R, 3)` forward directions, record frame.
    pub dir:     FixedArray<f64>,
    /// `(R, 1)` [`RoadGraphType`] codes.
    pub rg_type: FixedArray<i32>,
    /// `(R, 1)` group ids.
    pub id:      FixedArray<i32>,
    /// `(R, 1)` 1 for real rows, 0 for sentinel rows.
    pub valid:   FixedArray<i32>,
    /// Rows `0..lane_points` are lane samples.
    pub lane_points:      usize,
    /// Rows `lane_points..lane_points + crosswalk_points` are crosswalk vertices.
    pub crosswalk_points: usize,
}

impl RoadGraph {
    /// Point capacity `R`.
    pub fn capacity(&self) -> usize {
        self.xyz.rows()
    }

    /// Rows holding real samples.
    pub fn len(&self) -> usize {
        self.lane_points + self.crosswalk_points
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One sampled point before it is written into the fixed arrays.
struct RoadPoint {
    xyz:   Vec3,
    dir:   Vec3,
    kind:  RoadGraphType,
    group: GroupId,
}

// ── RoadGraphSampler ──────────────────────────────────────────────────────────

/// Converts a [`MapSource`] into a fixed-capacity [`RoadGraph`].
#[derive(Clone, Debug)]
pub struct RoadGraphSampler {
    resolution_m: f64,
    capacity:     usize,
}

impl RoadGraphSampler {
    pub fn new(resolution_m: f64, capacity: usize) -> RoadGraphResult<Self> {
        if !(resolution_m > 0.0 && resolution_m.is_finite()) {
            return Err(RoadGraphError::Resolution(resolution_m));
        }
        Ok(Self { resolution_m, capacity })
    }

    pub fn from_config(config: &RunConfig) -> RoadGraphResult<Self> {
        Self::new(config.rg_resolution_m, config.num_rg_points)
    }

    /// Sample every drivable and bikeable lane, then every crosswalk vertex.
    ///
    /// Fails with [`RoadGraphError::CapacityExceeded`] rather than dropping
    /// points when the map is larger than the record.
    pub fn sample<M: MapSource + ?Sized>(&self, map: &M) -> RoadGraphResult<RoadGraph> {
        let mut points: Vec<RoadPoint> = Vec::new();
        let mut used: BTreeSet<i32> = BTreeSet::new();

        for lane in map.lanes() {
            let Some(kind) = RoadGraphType::for_lane(lane.kind) else {
                continue;
            };
            let samples = resample_centerline(&lane.centerline, self.resolution_m);
            if samples.is_empty() {
                tracing::warn!(lane = %lane.id, "lane centreline has no length; skipped");
                continue;
            }
            used.insert(lane.id.0);
            points.extend(samples.into_iter().map(|(xyz, dir)| RoadPoint {
                xyz:   xyz.flip_lateral(),
                dir:   dir.flip_lateral(),
                kind,
                group: lane.id.into(),
            }));
        }
        let lane_points = points.len();

        let vertices = map.crosswalks();
        let groups = group_crosswalks(&vertices, &mut used)?;
        points.extend(vertices.iter().zip(groups).map(|(&v, group)| RoadPoint {
            xyz:  v.flip_lateral(),
            dir:  CROSSWALK_DIR,
            kind: RoadGraphType::Crosswalk,
            group,
        }));
        let crosswalk_points = points.len() - lane_points;

        if points.len() > self.capacity {
            return Err(RoadGraphError::CapacityExceeded {
                capacity: self.capacity,
                required: points.len(),
            });
        }

        let mut rg = RoadGraph {
            xyz:     FixedArray::filled(&[self.capacity, 3], INVALID),
            dir:     FixedArray::filled(&[self.capacity, 3], INVALID),
            rg_type: FixedArray::filled(&[self.capacity, 1], -1),
            id:      FixedArray::filled(&[self.capacity, 1], -1),
            valid:   FixedArray::filled(&[self.capacity, 1], 0),
            lane_points,
            crosswalk_points,
        };
        for (row, p) in points.iter().enumerate() {
            rg.xyz.row_mut(row).copy_from_slice(&p.xyz.to_array());
            rg.dir.row_mut(row).copy_from_slice(&p.dir.to_array());
            rg.rg_type.row_mut(row)[0] = p.kind.code();
            rg.id.row_mut(row)[0]      = p.group.0;
            rg.valid.row_mut(row)[0]   = 1;
        }

        tracing::info!(lane_points, crosswalk_points, capacity = self.capacity, "sampled road graph");
        Ok(rg)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Points at arc lengths `0, r, 2r, …` (up to the polyline length), each
/// paired with the unit tangent of the segment it lies on.
///
/// Zero-length segments are ignored; a polyline with no length yields
/// nothing.
pub fn resample_centerline(polyline: &[Vec3], resolution_m: f64) -> Vec<(Vec3, Vec3)> {
    let segments: Vec<(Vec3, Vec3, f64)> = polyline
        .windows(2)
        .filter_map(|w| {
            let len = w[0].distance(w[1]);
            (len > ARC_EPS).then_some((w[0], w[1], len))
        })
        .collect();
    if segments.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut k: u64 = 0;
    let mut seg_start = 0.0;
    for (a, b, len) in segments {
        let Some(tangent) = (b - a).normalized() else { continue };
        loop {
            let s = k as f64 * resolution_m;
            if s > seg_start + len + ARC_EPS {
                break;
            }
            let t = ((s - seg_start) / len).clamp(0.0, 1.0);
            out.push((a.lerp(b, t), tangent));
            k += 1;
        }
        seg_start += len;
    }
    out
}
