use crate::{InvalidArgument, Result, VectorError};
use approx::{AbsDiffEq, RelativeEq};
use ndarray::{Array1, ArrayView1};
use std::fmt;
use tracing::trace;

/// An immutable N-dimensional vector of real coordinates.
///
/// Every operation returns a new `Vector` (or a scalar); the coordinates of an
/// existing value are never modified. The dimension is always at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    coordinates: Array1<f64>,
}

impl Vector {
    /// Builds a vector from a non-empty sequence of finite coordinates.
    pub fn new<I>(coordinates: I) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        Self::validated(coordinates.into_iter().collect())
    }

    fn validated(coordinates: Array1<f64>) -> Result<Self> {
        if coordinates.is_empty() {
            trace!("rejected empty coordinate sequence");
            return Err(InvalidArgument::Empty.into());
        }
        if let Some(index) = coordinates.iter().position(|c| !c.is_finite()) {
            trace!(index = index, "rejected non-finite coordinate");
            return Err(InvalidArgument::NonFinite { index }.into());
        }
        Ok(Self { coordinates })
    }

    // Results of arithmetic on valid vectors keep the operand dimension, so
    // only the non-empty invariant needs to hold here.
    pub(crate) fn from_raw(coordinates: Array1<f64>) -> Self {
        debug_assert!(!coordinates.is_empty());
        Self { coordinates }
    }

    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    pub fn coordinates(&self) -> ArrayView1<'_, f64> {
        self.coordinates.view()
    }

    pub fn coordinate(&self, index: usize) -> Option<f64> {
        self.coordinates.get(index).copied()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.coordinates.to_vec()
    }

    pub fn is_zero(&self) -> bool {
        self.coordinates.iter().all(|&c| c == 0.0)
    }

    /// Element-wise equality; vectors of different dimension are never equal.
    pub fn equals(&self, other: &Vector) -> bool {
        self == other
    }

    pub(crate) fn check_dimension(&self, expected: usize) -> Result<()> {
        if self.dimension() != expected {
            return Err(VectorError::DimensionMismatch {
                expected,
                found: self.dimension(),
            });
        }
        Ok(())
    }

    // Finite operands can still overflow, e.g. `f64::MAX + f64::MAX`.
    fn checked(coordinates: Array1<f64>, operation: &'static str) -> Result<Self> {
        if coordinates.iter().any(|c| !c.is_finite()) {
            return Err(VectorError::Overflow(operation));
        }
        Ok(Self::from_raw(coordinates))
    }

    fn largest_coordinate(&self) -> f64 {
        self.coordinates.iter().fold(0.0_f64, |max, c| max.max(c.abs()))
    }

    pub fn add(&self, other: &Vector) -> Result<Vector> {
        other.check_dimension(self.dimension())?;
        Self::checked(&self.coordinates + &other.coordinates, "addition")
    }

    pub fn subtract(&self, other: &Vector) -> Result<Vector> {
        other.check_dimension(self.dimension())?;
        Self::checked(&self.coordinates - &other.coordinates, "subtraction")
    }

    /// The 3-D cross product. Both operands must have dimension 3.
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        self.check_dimension(3)?;
        other.check_dimension(3)?;

        let (a, b) = (&self.coordinates, &other.coordinates);
        Self::checked(
            Array1::from_vec(vec![
                a[1] * b[2] - b[1] * a[2],
                -(a[0] * b[2] - b[0] * a[2]),
                a[0] * b[1] - b[0] * a[1],
            ]),
            "cross product",
        )
    }

    /// Multiplies every coordinate by `scalar`. The result is not checked for
    /// overflow; scaling near `f64::MAX` can produce infinite coordinates.
    pub fn scaled_by(&self, scalar: f64) -> Vector {
        Self::from_raw(&self.coordinates * scalar)
    }

    /// Euclidean norm. Zero for the zero vector.
    ///
    /// Coordinates are divided by the largest absolute coordinate before
    /// squaring, so the sum of squares neither overflows for coordinates
    /// around 1e155 nor underflows to zero for ones around 1e-160.
    pub fn magnitude(&self) -> f64 {
        let scale = self.largest_coordinate();
        if scale == 0.0 {
            return 0.0;
        }
        let reduced = &self.coordinates / scale;
        scale * reduced.dot(&reduced).sqrt()
    }

    /// The unit vector pointing the same way as `self`.
    pub fn normalized(&self) -> Result<Vector> {
        let scale = self.largest_coordinate();
        if scale == 0.0 {
            return Err(VectorError::DivisionByZero("normalization"));
        }
        // |reduced| lies in [1, sqrt(dimension)], so no step over- or underflows.
        let reduced = &self.coordinates / scale;
        let length = reduced.dot(&reduced).sqrt();
        Ok(Self::from_raw(reduced / length))
    }

    pub fn dot(&self, other: &Vector) -> Result<f64> {
        other.check_dimension(self.dimension())?;
        Ok(self.coordinates.dot(&other.coordinates))
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, c) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", c)?;
        }
        write!(f, ")")
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: Vec<f64>) -> Result<Self> {
        Self::validated(Array1::from_vec(coordinates))
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: &[f64]) -> Result<Self> {
        Self::validated(Array1::from_vec(coordinates.to_vec()))
    }
}

impl TryFrom<Array1<f64>> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: Array1<f64>) -> Result<Self> {
        Self::validated(coordinates)
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.dimension() == other.dimension()
            && self
                .coordinates
                .iter()
                .zip(other.coordinates.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.dimension() == other.dimension()
            && self
                .coordinates
                .iter()
                .zip(other.coordinates.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
