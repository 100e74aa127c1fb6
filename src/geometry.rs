//! Angles, orthogonality and parallelism, decomposition against a basis, and
//! areas spanned by two vectors.

use crate::{AngleUnit, Result, Tolerance, Vector, VectorError};
use tracing::debug;

impl Vector {
    /// The angle between `self` and `other`, in the requested unit.
    ///
    /// Fails with [`VectorError::DivisionByZero`] when either operand is the
    /// zero vector, since a zero vector has no direction.
    pub fn angle_between(&self, other: &Vector, unit: AngleUnit) -> Result<f64> {
        other.check_dimension(self.dimension())?;
        if self.is_zero() || other.is_zero() {
            return Err(VectorError::DivisionByZero("angle"));
        }
        // Unit operands keep the dot product in [-1, 1] whatever the
        // coordinates' magnitude; rounding can still push it just past +/-1.
        let cosine = self.normalized()?.dot(&other.normalized()?)?.clamp(-1.0, 1.0);
        Ok(unit.from_radians(cosine.acos()))
    }

    pub fn is_orthogonal_to(&self, other: &Vector) -> Result<bool> {
        self.is_orthogonal_to_within(other, Tolerance::default())
    }

    /// True when the angle is 90 degrees within `tolerance`. The zero vector
    /// is orthogonal to everything.
    pub fn is_orthogonal_to_within(&self, other: &Vector, tolerance: Tolerance) -> Result<bool> {
        match self.angle_between(other, AngleUnit::Degrees) {
            Ok(angle) => Ok(tolerance.matches(angle, 90.0)),
            Err(VectorError::DivisionByZero(_)) => {
                debug!("zero vector operand, treating as orthogonal");
                Ok(true)
            }
            Err(err) => Err(err),
        }
    }

    pub fn is_parallel_to(&self, other: &Vector) -> Result<bool> {
        self.is_parallel_to_within(other, Tolerance::default())
    }

    /// True when the angle is 0 or 180 degrees within `tolerance`. The zero
    /// vector is parallel to everything.
    pub fn is_parallel_to_within(&self, other: &Vector, tolerance: Tolerance) -> Result<bool> {
        match self.angle_between(other, AngleUnit::Degrees) {
            Ok(angle) => Ok(tolerance.matches(angle, 0.0) || tolerance.matches(angle, 180.0)),
            Err(VectorError::DivisionByZero(_)) => {
                debug!("zero vector operand, treating as parallel");
                Ok(true)
            }
            Err(err) => Err(err),
        }
    }

    /// The component of `self` along `basis`.
    pub fn projected_onto_basis(&self, basis: &Vector) -> Result<Vector> {
        let basis_unit = basis.normalized()?;
        let length = self.dot(&basis_unit)?;
        Ok(basis_unit.scaled_by(length))
    }

    /// The component of `self` perpendicular to `basis`.
    pub fn orthogonal_to_basis(&self, basis: &Vector) -> Result<Vector> {
        let projection = self.projected_onto_basis(basis)?;
        self.subtract(&projection)
    }

    pub fn area_of_parallelogram_with(&self, other: &Vector) -> Result<f64> {
        Ok(self.cross(other)?.magnitude())
    }

    pub fn area_of_triangle_with(&self, other: &Vector) -> Result<f64> {
        Ok(0.5 * self.area_of_parallelogram_with(other)?)
    }
}
