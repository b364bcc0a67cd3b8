//! The static-map collaborator interface.

use sr_core::{LaneId, Vec3};

/// Lane classification as reported by the map.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LaneKind {
    Driving,
    Biking,
    Sidewalk,
    Shoulder,
    Other,
}

impl LaneKind {
    /// Parse the map's lane-type name; unknown names become `Other`.
    pub fn from_name(name: &str) -> LaneKind {
        match name.trim() {
            "Driving"  => LaneKind::Driving,
            "Biking"   => LaneKind::Biking,
            "Sidewalk" => LaneKind::Sidewalk,
            "Shoulder" => LaneKind::Shoulder,
            _          => LaneKind::Other,
        }
    }
}

/// One lane and its centreline, in simulator (world) coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Lane {
    pub id:         LaneId,
    pub kind:       LaneKind,
    /// Ordered centreline polyline in the lane's driving direction.
    pub centerline: Vec<Vec3>,
}

/// Read access to the static map of the current scenario.
///
/// Crosswalks are one flat vertex stream: each polygon is a contiguous run
/// that ends with a vertex coincident with its own first vertex.
pub trait MapSource {
    fn lanes(&self) -> Vec<Lane>;

    fn crosswalks(&self) -> Vec<Vec3>;
}

// ── StaticMap ─────────────────────────────────────────────────────────────────

/// An in-memory [`MapSource`], built programmatically or by the CSV loader.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticMap {
    pub lanes:      Vec<Lane>,
    pub crosswalks: Vec<Vec3>,
}

impl StaticMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_lane(&mut self, id: LaneId, kind: LaneKind, centerline: Vec<Vec3>) -> &mut Self {
        self.lanes.push(Lane { id, kind, centerline });
        self
    }

    /// Append one crosswalk polygon's vertices as given.
    ///
    /// The run must end on its first vertex for the next polygon to be
    /// grouped separately.
    pub fn add_crosswalk(&mut self, polygon: &[Vec3]) -> &mut Self {
        self.crosswalks.extend_from_slice(polygon);
        self
    }
}

impl MapSource for StaticMap {
    fn lanes(&self) -> Vec<Lane> {
        self.lanes.clone()
    }

    fn crosswalks(&self) -> Vec<Vec3> {
        self.crosswalks.clone()
    }
}
