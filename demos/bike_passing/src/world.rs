//! A tiny kinematic world standing in for the simulator.
//!
//! Bodies move in straight lines along their heading.  Spawning can fail,
//! either because the spot is taken or at random, which exercises the
//! bounded placement retry.

use anyhow::{Result, bail};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use sr_core::{ActorId, ActorObservation, KinematicSample, Timestamp, Vec3};
use sr_runner::{Control, World};

/// Chance that an otherwise free spawn point is rejected.
const SPAWN_FAILURE_RATE: f64 = 0.4;
/// Minimum clearance between spawned bodies, metres.
const CLEARANCE: f64 = 2.0;
const MAX_SPEED: f64 = 12.0;

pub struct Body {
    pub id:           ActorId,
    pub blueprint:    &'static str,
    pub location:     Vec3,
    pub yaw_deg:      f64,
    pub half_extent:  Vec3,
    pub speed:        f64,
    /// Metres travelled since spawn.
    pub odometer:     f64,
    /// Scripted cruise speed; `None` for bodies driven by controls.
    pub target_speed: Option<f64>,
    pub static_prop:  bool,
}

pub struct KinematicWorld {
    frame:   u64,
    elapsed: f64,
    dt:      f64,
    bodies:  Vec<Body>,
    pending: Vec<(ActorId, Control)>,
    next_id: u32,
    rng:     SmallRng,
}

impl KinematicWorld {
    pub fn new(dt: f64, seed: u64) -> Self {
        Self {
            frame:   0,
            elapsed: 0.0,
            dt,
            bodies:  Vec::new(),
            pending: Vec::new(),
            next_id: 100,
            rng:     SmallRng::seed_from_u64(seed),
        }
    }

    /// Try to place a body.  Fails if another body is within clearance or the
    /// spawn is randomly rejected.
    pub fn spawn(&mut self, blueprint: &'static str, location: Vec3, yaw_deg: f64) -> Result<ActorId> {
        if let Some(other) = self.bodies.iter().find(|b| b.location.planar_distance(location) < CLEARANCE) {
            bail!("spawn point {location} blocked by {}", other.id);
        }
        if self.rng.gen_bool(SPAWN_FAILURE_RATE) {
            bail!("spawn of {blueprint} at {location} rejected");
        }

        let id = ActorId(self.next_id);
        self.next_id += 1;
        let (half_extent, static_prop) = match blueprint {
            b if b.starts_with("static.")             => (Vec3::new(0.5, 0.5, 1.0), true),
            b if b.contains("diamondback.century")    => (Vec3::new(0.9, 0.4, 0.9), false),
            _                                         => (Vec3::new(2.4, 1.0, 0.8), false),
        };
        self.bodies.push(Body {
            id,
            blueprint,
            location,
            yaw_deg,
            half_extent,
            speed: 0.0,
            odometer: 0.0,
            target_speed: None,
            static_prop,
        });
        tracing::info!(%id, blueprint, %location, "spawned actor");
        Ok(id)
    }

    pub fn body(&self, id: ActorId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn set_target_speed(&mut self, id: ActorId, speed: f64) {
        if let Some(b) = self.bodies.iter_mut().find(|b| b.id == id) {
            b.target_speed = Some(speed);
        }
    }

    /// Planar distance between two bodies; infinite if either is gone.
    pub fn distance(&self, a: ActorId, b: ActorId) -> f64 {
        match (self.body(a), self.body(b)) {
            (Some(a), Some(b)) => a.location.planar_distance(b.location),
            _ => f64::INFINITY,
        }
    }

    pub fn odometer(&self, id: ActorId) -> f64 {
        self.body(id).map_or(0.0, |b| b.odometer)
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

impl World for KinematicWorld {
    fn timestamp(&mut self) -> Option<Timestamp> {
        Some(Timestamp::new(self.frame, self.elapsed, self.dt))
    }

    fn observe_actors(&mut self) -> Vec<ActorObservation> {
        self.bodies
            .iter()
            .map(|b| {
                let sample = KinematicSample::from_simulator(b.location, b.yaw_deg, b.half_extent);
                ActorObservation::new(b.id, b.blueprint, sample)
            })
            .collect()
    }

    fn apply_control(&mut self, actor: ActorId, control: Control) {
        self.pending.push((actor, control));
    }

    fn tick(&mut self) {
        let dt = self.dt;
        for (id, control) in self.pending.drain(..) {
            if let Some(b) = self.bodies.iter_mut().find(|b| b.id == id) {
                let accel = 4.0 * control.throttle - 8.0 * control.brake;
                b.speed = (b.speed + accel * dt).clamp(0.0, MAX_SPEED);
                b.yaw_deg += control.steer * 30.0 * dt;
            }
        }
        for b in self.bodies.iter_mut().filter(|b| !b.static_prop) {
            if let Some(target) = b.target_speed {
                let step = 3.0 * dt;
                b.speed += (target - b.speed).clamp(-step, step);
            }
            let heading = b.yaw_deg.to_radians();
            let d = b.speed * dt;
            b.location = b.location + Vec3::new(heading.cos() * d, heading.sin() * d, 0.0);
            b.odometer += d;
        }
        self.frame += 1;
        self.elapsed += dt;
    }
}
