/// Rotation quaternion `w + xi + yj + zk` normalised to unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitQuaternion {
    w: f64,
    x: f64,
    y: f64,
    z: f64,
}

impl UnitQuaternion {
    /// No rotation.
    pub const IDENTITY: UnitQuaternion = UnitQuaternion { w: 1.0, x: 0.0, y: 0.0, z: 0.0 };

    /// Normalises `(w, x, y, z)`. Returns `None` for a zero or non-finite
    /// input.
    pub fn new_normalize(w: f64, x: f64, y: f64, z: f64) -> Option<Self> {
        let norm = (w * w + x * x + y * y + z * z).sqrt();
        if !norm.is_finite() || norm == 0.0 {
            return None;
        }
        Some(UnitQuaternion { w: w / norm, x: x / norm, y: y / norm, z: z / norm })
    }

    pub fn w(&self) -> f64 {
        self.w
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    /// Euclidean norm; 1 up to rounding.
    pub fn norm(&self) -> f64 {
        (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Components in `[w, x, y, z]` order.
    pub fn to_array(self) -> [f64; 4] {
        [self.w, self.x, self.y, self.z]
    }
}

impl Default for UnitQuaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}
