//! CSV map loader.
//!
//! # CSV formats
//!
//! Lanes: one row per centreline point, in driving order:
//!
//! ```csv
//! lane_id,lane_type,x,y,z
//! -1,Driving,0.0,0.0,0.0
//! -1,Driving,2.0,0.0,0.0
//! 4,Biking,0.0,3.5,0.0
//! ```
//!
//! Rows for one lane need not be contiguous; they are appended in file
//! order and lanes keep the order of their first row.  `lane_type` is the
//! map's lane-type name (`Driving`, `Biking`, `Sidewalk`, `Shoulder`, …).
//!
//! Crosswalks: the flat vertex stream, each polygon closed on its first
//! vertex:
//!
//! ```csv
//! x,y,z
//! 10.0,0.0,0.0
//! 12.0,0.0,0.0
//! 12.0,4.0,0.0
//! 10.0,0.0,0.0
//! ```

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use sr_core::{LaneId, Vec3};

use crate::{Lane, LaneKind, RoadGraphError, RoadGraphResult, StaticMap};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LaneRecord {
    lane_id:   i32,
    lane_type: String,
    x:         f64,
    y:         f64,
    z:         f64,
}

#[derive(Deserialize)]
struct VertexRecord {
    x: f64,
    y: f64,
    z: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`StaticMap`] from a lanes CSV and a crosswalks CSV.
pub fn load_map_csv(lanes: &Path, crosswalks: &Path) -> RoadGraphResult<StaticMap> {
    let lanes = load_lanes_reader(std::fs::File::open(lanes)?)?;
    let crosswalks = load_crosswalks_reader(std::fs::File::open(crosswalks)?)?;
    Ok(StaticMap { lanes, crosswalks })
}

/// Parse lane centrelines from any `Read` source.
pub fn load_lanes_reader<R: Read>(reader: R) -> RoadGraphResult<Vec<Lane>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut lanes: Vec<Lane> = Vec::new();
    let mut by_id: HashMap<i32, usize> = HashMap::new();

    for result in csv_reader.deserialize::<LaneRecord>() {
        let row = result.map_err(|e| RoadGraphError::Parse(e.to_string()))?;
        let kind = LaneKind::from_name(&row.lane_type);
        let point = Vec3::new(row.x, row.y, row.z);

        match by_id.get(&row.lane_id) {
            Some(&i) => {
                if lanes[i].kind != kind {
                    return Err(RoadGraphError::Parse(format!(
                        "lane {} listed as both {:?} and {:?}",
                        row.lane_id, lanes[i].kind, kind
                    )));
                }
                lanes[i].centerline.push(point);
            }
            None => {
                by_id.insert(row.lane_id, lanes.len());
                lanes.push(Lane { id: LaneId(row.lane_id), kind, centerline: vec![point] });
            }
        }
    }

    Ok(lanes)
}

/// Parse the flat crosswalk vertex stream from any `Read` source.
pub fn load_crosswalks_reader<R: Read>(reader: R) -> RoadGraphResult<Vec<Vec3>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<VertexRecord>()
        .map(|r| {
            r.map(|v| Vec3::new(v.x, v.y, v.z))
                .map_err(|e| RoadGraphError::Parse(e.to_string()))
        })
        .collect()
}
