//! Actor classification and per-step kinematic samples.

use std::fmt;

use crate::{ActorId, Vec3};

// ── ActorType ─────────────────────────────────────────────────────────────────

/// Closed actor taxonomy of the motion-dataset record.
///
/// The discriminant is the value written to `state/type`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ActorType {
    #[default]
    Unset      = 0,
    Vehicle    = 1,
    Pedestrian = 2,
    Cyclist    = 3,
    Other      = 4,
}

impl ActorType {
    /// Simulator blueprint of the only two-wheeler that counts as a cyclist.
    pub const BICYCLE_BLUEPRINT: &'static str = "vehicle.diamondback.century";

    /// Classify a free-text simulator type string.
    ///
    /// Order matters: the bicycle blueprint is itself a `vehicle.*` string.
    pub fn classify(type_id: &str) -> ActorType {
        if type_id.contains(Self::BICYCLE_BLUEPRINT) {
            ActorType::Cyclist
        } else if type_id.contains("vehicle") {
            ActorType::Vehicle
        } else if type_id.contains("pedestrian") || type_id.starts_with("walker") {
            ActorType::Pedestrian
        } else {
            ActorType::Unset
        }
    }

    /// Value stored in the float-typed `state/type` array.
    #[inline]
    pub fn code(self) -> f64 {
        self as u8 as f64
    }

    /// Short label used by the diagnostic plot legend.
    pub fn short_label(self) -> &'static str {
        match self {
            ActorType::Unset      => "unset",
            ActorType::Vehicle    => "car",
            ActorType::Pedestrian => "ped",
            ActorType::Cyclist    => "cyc",
            ActorType::Other      => "other",
        }
    }

    /// Inverse of [`code`][Self::code]; `None` for sentinels and unknown codes.
    pub fn from_code(code: f64) -> Option<ActorType> {
        match code as i64 {
            _ if code.fract() != 0.0 => None,
            0 => Some(ActorType::Unset),
            1 => Some(ActorType::Vehicle),
            2 => Some(ActorType::Pedestrian),
            3 => Some(ActorType::Cyclist),
            4 => Some(ActorType::Other),
            _ => None,
        }
    }
}

impl fmt::Display for ActorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// ── KinematicSample ───────────────────────────────────────────────────────────

/// One actor's state at one step, in the record frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KinematicSample {
    pub x:        f64,
    pub y:        f64,
    /// Heading in radians.
    pub bbox_yaw: f64,
    pub length:   f64,
    pub width:    f64,
    /// 1.0 when the sample is real, 0.0 otherwise.
    pub valid:    f64,
}

impl KinematicSample {
    /// Convert a simulator-frame actor state into a record-frame sample.
    ///
    /// `yaw_deg` is the simulator heading in degrees; `half_extent` is the
    /// bounding-box half size (x = along heading, y = across).
    pub fn from_simulator(location: Vec3, yaw_deg: f64, half_extent: Vec3) -> Self {
        let p = location.flip_lateral();
        Self {
            x:        p.x,
            y:        p.y,
            bbox_yaw: -yaw_deg.to_radians(),
            length:   2.0 * half_extent.x,
            width:    2.0 * half_extent.y,
            valid:    1.0,
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid > 0.0
    }
}

// ── ActorObservation ──────────────────────────────────────────────────────────

/// One live actor as seen in one tick snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct ActorObservation {
    pub id:      ActorId,
    /// Free-text simulator classification, e.g. `"vehicle.tesla.model3"`.
    pub type_id: String,
    pub sample:  KinematicSample,
}

impl ActorObservation {
    pub fn new(id: ActorId, type_id: impl Into<String>, sample: KinematicSample) -> Self {
        Self { id, type_id: type_id.into(), sample }
    }

    #[inline]
    pub fn actor_type(&self) -> ActorType {
        ActorType::classify(&self.type_id)
    }
}
