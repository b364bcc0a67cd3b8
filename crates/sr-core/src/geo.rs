//! Cartesian vector type used for map geometry and actor locations.
//!
//! Coordinates are metres in the simulator's world frame unless a value has
//! been passed through [`Vec3::flip_lateral`], after which it is in the
//! record frame.

/// A 3-D point or direction in metres.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance in the ground plane (ignores `z`).
    #[inline]
    pub fn planar_distance(self, other: Vec3) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Full 3-D Euclidean distance.
    #[inline]
    pub fn distance(self, other: Vec3) -> f64 {
        (other - self).length()
    }

    #[inline]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Unit vector in the same direction, or `None` for a zero vector.
    pub fn normalized(self) -> Option<Vec3> {
        let len = self.length();
        if len > f64::EPSILON {
            Some(Vec3::new(self.x / len, self.y / len, self.z / len))
        } else {
            None
        }
    }

    /// Mirror into the record frame by negating the lateral axis.
    #[inline]
    pub fn flip_lateral(self) -> Vec3 {
        Vec3::new(self.x, -self.y, self.z)
    }

    /// Linear interpolation: `self + (other - self) * t`.
    #[inline]
    pub fn lerp(self, other: Vec3, t: f64) -> Vec3 {
        self + (other - self) * t
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl std::ops::Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f64> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}
