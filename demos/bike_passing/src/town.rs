//! Synthetic straight-road town.
//!
//! A 200 m two-way street along +x with a bike lane and a sidewalk on the
//! right, crossed by two zebra crossings.  Coordinates are in the simulator
//! frame (left-handed; +y is to the right of a car driving along +x).

use sr_core::{LaneId, Vec3};
use sr_roadgraph::{LaneKind, StaticMap};

pub const ROAD_LENGTH: f64 = 200.0;

/// Lateral offsets of the lane centrelines.
pub const EGO_LANE_Y:      f64 = 0.0;
pub const ONCOMING_LANE_Y: f64 = -3.5;
pub const BIKE_LANE_Y:     f64 = 3.0;
pub const SIDEWALK_Y:      f64 = 5.0;

fn straight(y: f64, reverse: bool) -> Vec<Vec3> {
    // A kink every 50 m so the centreline has more than one segment.
    let mut pts: Vec<Vec3> = (0..=4).map(|i| Vec3::new(i as f64 * 50.0, y, 0.0)).collect();
    if reverse {
        pts.reverse();
    }
    pts
}

fn crossing(x: f64) -> [Vec3; 5] {
    let (y0, y1) = (ONCOMING_LANE_Y - 2.0, SIDEWALK_Y);
    [
        Vec3::new(x,       y0, 0.0),
        Vec3::new(x + 4.0, y0, 0.0),
        Vec3::new(x + 4.0, y1, 0.0),
        Vec3::new(x,       y1, 0.0),
        Vec3::new(x,       y0, 0.0),
    ]
}

pub fn build_town() -> StaticMap {
    let mut map = StaticMap::new();
    map.add_lane(LaneId(1),  LaneKind::Driving,  straight(EGO_LANE_Y, false))
       .add_lane(LaneId(-1), LaneKind::Driving,  straight(ONCOMING_LANE_Y, true))
       .add_lane(LaneId(2),  LaneKind::Biking,   straight(BIKE_LANE_Y, false))
       .add_lane(LaneId(3),  LaneKind::Sidewalk, straight(SIDEWALK_Y, false));
    map.add_crosswalk(&crossing(100.0))
       .add_crosswalk(&crossing(160.0));
    map
}
