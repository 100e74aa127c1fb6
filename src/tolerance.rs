use approx::abs_diff_eq;

pub const DEFAULT_ANGLE_EPSILON_DEGREES: f64 = 1e-4;

/// Unit in which [`Vector::angle_between`](crate::Vector::angle_between) reports its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    Radians,
    #[default]
    Degrees,
}

impl AngleUnit {
    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        }
    }
}

/// How close an angle must be to 0, 90 or 180 degrees to count as
/// orthogonal or parallel.
///
/// `acos` is badly conditioned near 0 and 180 degrees, so a single ulp of
/// rounding in the cosine moves the angle by roughly 1e-6 degrees. The
/// default epsilon sits comfortably above that. [`Tolerance::EXACT`] asks
/// for bit-exact angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    degrees: f64,
}

impl Tolerance {
    pub const EXACT: Tolerance = Tolerance { degrees: 0.0 };

    /// The sign of `degrees` is ignored; NaN yields [`Tolerance::EXACT`].
    pub fn new(degrees: f64) -> Self {
        if degrees.is_nan() {
            return Self::EXACT;
        }
        Self {
            degrees: degrees.abs(),
        }
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn matches(&self, angle_degrees: f64, target_degrees: f64) -> bool {
        abs_diff_eq!(angle_degrees, target_degrees, epsilon = self.degrees)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(DEFAULT_ANGLE_EPSILON_DEGREES)
    }
}
