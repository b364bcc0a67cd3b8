//! Unit tests for sr-roadgraph.

use sr_core::{LaneId, Vec3};

use crate::{LaneKind, StaticMap};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn v(x: f64, y: f64) -> Vec3 {
    Vec3::new(x, y, 0.0)
}

/// Square crosswalk with lower-left corner at (x, y), closed on its first vertex.
fn square(x: f64, y: f64) -> Vec<Vec3> {
    vec![v(x, y), v(x + 2.0, y), v(x + 2.0, y + 4.0), v(x, y)]
}

#[cfg(test)]
mod resample_tests {
    use super::*;
    use crate::sampler::resample_centerline;

    #[test]
    fn uniform_spacing_includes_both_ends() {
        let pts = resample_centerline(&[v(0.0, 0.0), v(2.0, 0.0)], 1.0);
        let xs: Vec<f64> = pts.iter().map(|(p, _)| p.x).collect();
        assert_eq!(xs, [0.0, 1.0, 2.0]);
        assert!(pts.iter().all(|(_, d)| *d == v(1.0, 0.0)));
    }

    #[test]
    fn spacing_continues_across_corners() {
        // L-shape: 1.5 m east then 1.5 m north
        let pts = resample_centerline(&[v(0.0, 0.0), v(1.5, 0.0), v(1.5, 1.5)], 1.0);
        assert_eq!(pts.len(), 4); // s = 0, 1, 2, 3
        assert_eq!(pts[1].0, v(1.0, 0.0));
        assert!((pts[2].0.y - 0.5).abs() < 1e-12);
        assert_eq!(pts[2].1, v(0.0, 1.0));
        assert!((pts[3].0.y - 1.5).abs() < 1e-12);
    }

    #[test]
    fn degenerate_polylines_yield_nothing() {
        assert!(resample_centerline(&[], 1.0).is_empty());
        assert!(resample_centerline(&[v(1.0, 1.0)], 1.0).is_empty());
        assert!(resample_centerline(&[v(1.0, 1.0), v(1.0, 1.0)], 1.0).is_empty());
    }
}

#[cfg(test)]
mod crosswalk_tests {
    use std::collections::BTreeSet;

    use sr_core::GroupId;

    use super::*;
    use crate::RoadGraphError;
    use crate::crosswalk::{fresh_id, group_crosswalks};

    #[test]
    fn closed_runs_become_groups() {
        let mut verts = square(0.0, 0.0);
        verts.extend(square(10.0, 0.0));
        let mut used = BTreeSet::new();
        let ids = group_crosswalks(&verts, &mut used).unwrap();

        assert!(ids[..4].iter().all(|&g| g == ids[0]));
        assert!(ids[4..].iter().all(|&g| g == ids[4]));
        assert_ne!(ids[0], ids[4]);
    }

    #[test]
    fn coincident_runs_share_a_group() {
        // every vertex of a polygon coincides with its first vertex
        let a = v(1.0, 1.0);
        let b = v(5.0, 5.0);
        let verts = vec![a, a, a, a, b, b, b];
        let mut used = BTreeSet::new();
        let ids = group_crosswalks(&verts, &mut used).unwrap();

        assert!(ids[..4].iter().all(|&g| g == ids[0]));
        assert!(ids[4..].iter().all(|&g| g == ids[4]));
        assert_ne!(ids[0], ids[4]);
    }

    #[test]
    fn ids_skip_lane_ids_and_earlier_crosswalks() {
        let mut verts = square(0.0, 0.0);
        verts.extend(square(10.0, 0.0));
        // lane ids occupy 0, 4 and 5
        let mut used: BTreeSet<i32> = [0, 4, 5].into_iter().collect();
        let ids = group_crosswalks(&verts, &mut used).unwrap();

        assert_eq!(ids[0].0, 1); // base 0, 0 taken
        assert_eq!(ids[4].0, 6); // base 4, 4 and 5 taken
        assert!(used.contains(&1) && used.contains(&6));
    }

    #[test]
    fn unclosed_polygon_is_one_group() {
        let verts = vec![v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(0.0, 1.0)];
        let ids = group_crosswalks(&verts, &mut BTreeSet::new()).unwrap();
        assert!(ids.iter().all(|&g| g == ids[0]));
    }

    #[test]
    fn reopening_an_earlier_polygon_is_rejected() {
        let mut verts = square(0.0, 0.0);
        verts.extend(square(10.0, 0.0));
        verts.push(v(0.0, 0.0)); // back to the first polygon's start
        let err = group_crosswalks(&verts, &mut BTreeSet::new()).unwrap_err();
        assert!(matches!(err, RoadGraphError::InterleavedCrosswalk { index: 8, .. }));
    }

    #[test]
    fn empty_stream() {
        assert!(group_crosswalks(&[], &mut BTreeSet::new()).unwrap().is_empty());
    }

    #[test]
    fn id_search_stops_at_i32_max() {
        let mut used = BTreeSet::from([i32::MAX - 1, i32::MAX]);
        let err = fresh_id(i32::MAX as usize - 1, &mut used).unwrap_err();
        assert!(matches!(err, RoadGraphError::GroupIdsExhausted { .. }));

        // An index past the i32 range starts the scan at i32::MAX.
        let mut used = BTreeSet::new();
        assert_eq!(fresh_id(usize::MAX, &mut used).unwrap(), GroupId(i32::MAX));
    }
}

#[cfg(test)]
mod sampler_tests {
    use super::*;
    use crate::{RoadGraphError, RoadGraphSampler, RoadGraphType};

    fn small_map() -> StaticMap {
        let mut map = StaticMap::new();
        map.add_lane(LaneId(7), LaneKind::Driving, vec![v(0.0, 1.0), v(2.0, 1.0)])
            .add_lane(LaneId(9), LaneKind::Sidewalk, vec![v(0.0, 5.0), v(2.0, 5.0)])
            .add_crosswalk(&square(10.0, 3.0));
        map
    }

    #[test]
    fn rows_are_lanes_then_crosswalks_then_sentinels() {
        let rg = RoadGraphSampler::new(1.0, 20).unwrap().sample(&small_map()).unwrap();

        assert_eq!(rg.lane_points, 3);
        assert_eq!(rg.crosswalk_points, 4);
        assert_eq!(rg.capacity(), 20);
        for row in 0..3 {
            assert_eq!(rg.rg_type.row(row), &[RoadGraphType::SurfaceStreet.code()]);
            assert_eq!(rg.id.row(row), &[7]);
            assert_eq!(rg.valid.row(row), &[1]);
        }
        for row in 3..7 {
            assert_eq!(rg.rg_type.row(row), &[18]);
            assert_eq!(rg.valid.row(row), &[1]);
            assert_eq!(rg.dir.row(row), &[1.0, 1.0, 1.0]);
            assert_ne!(rg.id.row(row), &[7]);
        }
        for row in 7..20 {
            assert_eq!(rg.xyz.row(row), &[-1.0, -1.0, -1.0]);
            assert_eq!(rg.dir.row(row), &[-1.0, -1.0, -1.0]);
            assert_eq!(rg.rg_type.row(row), &[-1]);
            assert_eq!(rg.id.row(row), &[-1]);
            assert_eq!(rg.valid.row(row), &[0]);
        }
    }

    #[test]
    fn lateral_axis_is_negated() {
        let mut map = StaticMap::new();
        map.add_lane(LaneId(1), LaneKind::Biking, vec![v(0.0, 2.0), v(0.0, 4.0)]);
        map.add_crosswalk(&[v(3.0, 6.0)]);
        let rg = RoadGraphSampler::new(2.0, 10).unwrap().sample(&map).unwrap();

        assert_eq!(rg.xyz.row(0), &[0.0, -2.0, 0.0]);
        assert_eq!(rg.xyz.row(1), &[0.0, -4.0, 0.0]);
        // direction (0, +1) in the simulator becomes (0, -1)
        assert_eq!(rg.dir.row(0), &[0.0, -1.0, 0.0]);
        assert_eq!(rg.rg_type.row(0), &[3]);
        assert_eq!(rg.xyz.row(2), &[3.0, -6.0, 0.0]);
    }

    #[test]
    fn overflow_is_an_error() {
        let err = RoadGraphSampler::new(1.0, 5).unwrap().sample(&small_map()).unwrap_err();
        assert!(matches!(err, RoadGraphError::CapacityExceeded { capacity: 5, required: 7 }));
        assert!(err.to_string().contains("road-graph point capacity"));
    }

    #[test]
    fn exact_fit_is_accepted() {
        let rg = RoadGraphSampler::new(1.0, 7).unwrap().sample(&small_map()).unwrap();
        assert_eq!(rg.len(), 7);
    }

    #[test]
    fn zero_length_lane_is_skipped() {
        let mut map = StaticMap::new();
        map.add_lane(LaneId(1), LaneKind::Driving, vec![v(0.0, 0.0)]);
        let rg = RoadGraphSampler::new(1.0, 4).unwrap().sample(&map).unwrap();
        assert!(rg.is_empty());
    }

    #[test]
    fn bad_resolution_rejected() {
        assert!(RoadGraphSampler::new(0.0, 10).is_err());
        assert!(RoadGraphSampler::new(f64::NAN, 10).is_err());
    }
}

#[cfg(test)]
mod loader_tests {
    use std::io::Cursor;

    use super::*;
    use crate::{load_crosswalks_reader, load_lanes_reader};

    const LANES: &str = "\
lane_id,lane_type,x,y,z\n\
-1,Driving,0.0,0.0,0.0\n\
4,Biking,0.0,3.5,0.0\n\
-1,Driving,2.0,0.0,0.0\n\
4,Biking,5.0,3.5,0.0\n\
";

    #[test]
    fn lanes_grouped_by_id_in_first_row_order() {
        let lanes = load_lanes_reader(Cursor::new(LANES)).unwrap();
        assert_eq!(lanes.len(), 2);
        assert_eq!(lanes[0].id, LaneId(-1));
        assert_eq!(lanes[0].kind, LaneKind::Driving);
        assert_eq!(lanes[0].centerline, vec![v(0.0, 0.0), v(2.0, 0.0)]);
        assert_eq!(lanes[1].kind, LaneKind::Biking);
    }

    #[test]
    fn conflicting_lane_kind_rejected() {
        let csv = "lane_id,lane_type,x,y,z\n1,Driving,0,0,0\n1,Biking,1,0,0\n";
        assert!(load_lanes_reader(Cursor::new(csv)).is_err());
    }

    #[test]
    fn crosswalk_vertices_in_order() {
        let csv = "x,y,z\n10,0,0\n12,0,0\n10,0,0\n";
        let verts = load_crosswalks_reader(Cursor::new(csv)).unwrap();
        assert_eq!(verts, vec![v(10.0, 0.0), v(12.0, 0.0), v(10.0, 0.0)]);
    }

    #[test]
    fn malformed_row_is_parse_error() {
        let csv = "x,y,z\n10,abc,0\n";
        assert!(load_crosswalks_reader(Cursor::new(csv)).is_err());
    }
}
