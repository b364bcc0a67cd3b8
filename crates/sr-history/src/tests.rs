//! Unit tests for sr-history.

use sr_core::{ActorId, ActorObservation, KinematicSample};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn sample(x: f64) -> KinematicSample {
    KinematicSample { x, y: -x, bbox_yaw: 0.1, length: 4.5, width: 1.8, valid: 1.0 }
}

fn obs(id: u32, type_id: &str, x: f64) -> ActorObservation {
    ActorObservation::new(ActorId(id), type_id, sample(x))
}

#[cfg(test)]
mod record_tests {
    use super::*;
    use crate::{ActorHistory, HistoryError};

    #[test]
    fn lazily_creates_tracks_in_first_sight_order() {
        let mut h = ActorHistory::new();
        h.record_tick(&[obs(20, "vehicle.audi.tt", 0.0)]).unwrap();
        h.record_tick(&[obs(5, "walker.pedestrian.0001", 1.0), obs(20, "vehicle.audi.tt", 1.0)])
            .unwrap();

        assert_eq!(h.steps(), 2);
        assert_eq!(h.actor_count(), 2);
        let ids: Vec<_> = h.tracks().iter().map(|t| t.id).collect();
        assert_eq!(ids, [ActorId(20), ActorId(5)]);
        assert_eq!(h.track(ActorId(5)).unwrap().first_step, 1);
        assert_eq!(h.track(ActorId(20)).unwrap().samples.len(), 2);
    }

    #[test]
    fn empty_snapshot_still_advances_step() {
        let mut h = ActorHistory::new();
        h.record_tick(&[]).unwrap();
        h.record_tick(&[]).unwrap();
        assert_eq!(h.steps(), 2);
        assert_eq!(h.actor_count(), 0);
    }

    #[test]
    fn duplicate_in_snapshot_rejected_without_side_effects() {
        let mut h = ActorHistory::new();
        let result = h.record_tick(&[obs(1, "vehicle", 0.0), obs(1, "vehicle", 1.0)]);
        assert!(matches!(
            result,
            Err(HistoryError::DuplicateObservation { actor: ActorId(1), step: 0 })
        ));
        assert_eq!(h.steps(), 0);
        assert_eq!(h.actor_count(), 0);
    }
}

#[cfg(test)]
mod finalize_tests {
    use super::*;
    use crate::{ActorHistory, HistoryError};

    #[test]
    fn shapes_are_fixed() {
        let mut h = ActorHistory::new();
        for t in 0..7 {
            h.record_tick(&[obs(1, "vehicle.tesla.model3", t as f64)]).unwrap();
        }
        let s = h.finalize(128, h.steps()).unwrap();
        assert_eq!(s.id.shape(), &[128]);
        assert_eq!(s.actor_type.shape(), &[128]);
        for a in [&s.x, &s.y, &s.bbox_yaw, &s.length, &s.width, &s.valid] {
            assert_eq!(a.shape(), &[128, 7]);
        }
        assert_eq!(s.num_agents(), 128);
        assert_eq!(s.num_steps(), 7);
    }

    #[test]
    fn unobserved_rows_hold_sentinels() {
        let mut h = ActorHistory::new();
        h.record_tick(&[obs(1, "vehicle", 0.0)]).unwrap();
        h.record_tick(&[obs(1, "vehicle", 1.0)]).unwrap();
        let s = h.finalize(4, 2).unwrap();

        for row in 1..4 {
            assert_eq!(s.id.row(row), &[-1.0]);
            assert_eq!(s.actor_type.row(row), &[-1.0]);
            for a in [&s.x, &s.y, &s.bbox_yaw, &s.length, &s.width] {
                assert_eq!(a.row(row), &[-1.0, -1.0]);
            }
            // validity uses its own sentinel
            assert_eq!(s.valid.row(row), &[0.0, 0.0]);
        }
    }

    #[test]
    fn late_spawner_is_left_aligned() {
        let mut h = ActorHistory::new();
        h.record_tick(&[obs(1, "vehicle", 0.0)]).unwrap();
        h.record_tick(&[obs(1, "vehicle", 1.0)]).unwrap();
        h.record_tick(&[obs(1, "vehicle", 2.0), obs(2, "vehicle.diamondback.century", 50.0)])
            .unwrap();
        h.record_tick(&[obs(2, "vehicle.diamondback.century", 51.0)]).unwrap();

        let s = h.finalize(3, h.steps()).unwrap();
        assert_eq!(s.x.row(0), &[0.0, 1.0, 2.0, -1.0]);
        assert_eq!(s.valid.row(0), &[1.0, 1.0, 1.0, 0.0]);
        // actor 2 first appeared at step 2 but starts in column 0
        assert_eq!(s.x.row(1), &[50.0, 51.0, -1.0, -1.0]);
        assert_eq!(s.y.row(1), &[-50.0, -51.0, -1.0, -1.0]);
        assert_eq!(s.valid.row(1), &[1.0, 1.0, 0.0, 0.0]);
        assert_eq!(s.length.row(1), &[4.5, 4.5, -1.0, -1.0]);
    }

    #[test]
    fn ids_and_types_in_first_sight_order() {
        let mut h = ActorHistory::new();
        h.record_tick(&[obs(42, "vehicle.lincoln.mkz", 0.0)]).unwrap();
        h.record_tick(&[obs(7, "vehicle.diamondback.century", 0.0)]).unwrap();
        h.record_tick(&[obs(9, "walker.pedestrian.0002", 0.0)]).unwrap();
        h.record_tick(&[obs(3, "static.prop.cone", 0.0)]).unwrap();

        let s = h.finalize(5, 4).unwrap();
        assert_eq!(s.id.as_slice(), &[42.0, 7.0, 9.0, 3.0, -1.0]);
        assert_eq!(s.actor_type.as_slice(), &[1.0, 3.0, 2.0, 0.0, -1.0]);
        assert_eq!(s.observed, 4);
    }

    #[test]
    fn invalid_samples_are_kept_as_reported() {
        let mut h = ActorHistory::new();
        let mut hidden = sample(3.0);
        hidden.valid = 0.0;
        h.record_tick(&[ActorObservation::new(ActorId(1), "vehicle", hidden)]).unwrap();
        let s = h.finalize(1, 1).unwrap();
        assert_eq!(s.x.row(0), &[3.0]);
        assert_eq!(s.valid.row(0), &[0.0]);
        assert!(s.valid.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn too_many_actors_is_an_error() {
        let mut h = ActorHistory::new();
        h.record_tick(&[obs(1, "vehicle", 0.0), obs(2, "vehicle", 0.0), obs(3, "vehicle", 0.0)])
            .unwrap();
        let err = h.finalize(2, 1).unwrap_err();
        assert!(matches!(err, HistoryError::TooManyActors { capacity: 2, observed: 3 }));
        assert!(err.to_string().contains("agent capacity"));
    }

    #[test]
    fn series_longer_than_steps_is_an_error() {
        let mut h = ActorHistory::new();
        for t in 0..5 {
            h.record_tick(&[obs(8, "vehicle", t as f64)]).unwrap();
        }
        let err = h.finalize(128, 3).unwrap_err();
        assert!(matches!(
            err,
            HistoryError::SeriesTooLong { actor: ActorId(8), len: 5, capacity: 3 }
        ));
        assert!(err.to_string().contains("step capacity"));
    }

    #[test]
    fn zero_steps_gives_empty_columns() {
        let h = ActorHistory::new();
        let s = h.finalize(128, 0).unwrap();
        assert_eq!(s.x.shape(), &[128, 0]);
        assert!(s.x.is_empty());
        assert_eq!(s.id.as_slice().len(), 128);
    }
}
