//! Metric and geometric operations on [`Vector`]: norms, dot products,
//! angles, and decomposition relative to another vector.

use crate::config::{AngleUnit, ParallelPolicy, DEFAULT_TOLERANCE};
use crate::utils::to_degrees;
use crate::{vector::Vector, Degeneracy, Operation, Result, VectorError};
use std::f64::consts::PI;

impl Vector {
    /// Euclidean (L2) norm.
    ///
    /// Falls back to rescaling by the largest coordinate when the plain sum
    /// of squares overflows or underflows.
    pub fn magnitude(&self) -> f64 {
        let sum_of_squares = self.data().dot(self.data());
        if sum_of_squares.is_finite() && sum_of_squares >= f64::MIN_POSITIVE {
            return sum_of_squares.sqrt();
        }

        let largest = self.largest_abs_coordinate();
        if largest == 0.0 || !largest.is_finite() {
            return largest;
        }
        let rescaled = self.data().mapv(|x| x / largest);
        largest * rescaled.dot(&rescaled).sqrt()
    }

    fn largest_abs_coordinate(&self) -> f64 {
        self.data().fold(0.0, |largest: f64, &x| largest.max(x.abs()))
    }

    pub fn is_zero(&self) -> bool {
        self.is_zero_within(DEFAULT_TOLERANCE)
    }

    /// True when the magnitude is strictly below `tolerance`.
    pub fn is_zero_within(&self, tolerance: f64) -> bool {
        self.magnitude() < tolerance
    }

    /// Scale to unit magnitude.
    ///
    /// Fails with [`Degeneracy::ZeroVectorNormalization`] when the magnitude
    /// is exactly zero.
    pub fn normalize(&self) -> Result<Vector> {
        if self.magnitude() == 0.0 {
            log::debug!("refusing to normalize zero vector of dimension {}", self.dimension());
            return Err(VectorError::DegenerateOperation(
                Degeneracy::ZeroVectorNormalization,
            ));
        }

        // Coordinates of the rescaled vector lie in [-1, 1], so its norm cannot overflow.
        let largest = self.largest_abs_coordinate();
        let rescaled = self.data().mapv(|x| x / largest);
        let norm = rescaled.dot(&rescaled).sqrt();
        Vector::from_array(rescaled.mapv(|x| x / norm))
    }

    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.ensure_same_dimension(other, Operation::Dot)?;
        Ok(self.data().dot(other.data()))
    }

    /// Angle to `other` in radians, in `[0, π]`.
    pub fn angle_with(&self, other: &Vector) -> Result<f64> {
        self.angle_in(other, AngleUnit::Radians)
    }

    /// `acos(a · b / (|a| |b|))`, with the cosine clamped into `[-1, 1]`.
    pub fn angle_in(&self, other: &Vector, unit: AngleUnit) -> Result<f64> {
        self.ensure_same_dimension(other, Operation::Angle)?;

        let (left, right) = (self.magnitude(), other.magnitude());
        if left == 0.0 || right == 0.0 {
            log::debug!("refusing to measure angle against a zero vector");
            return Err(VectorError::DegenerateOperation(Degeneracy::ZeroVectorAngle));
        }

        let dot = self.dot(other)?;
        let denominator = left * right;
        let cos_theta = if dot.is_finite() && denominator.is_normal() {
            dot / denominator
        } else {
            // The product of magnitudes left the f64 range; compare directions instead.
            self.normalize()?.dot(&other.normalize()?)?
        };

        // Rounding can push the cosine of (anti-)parallel vectors just outside [-1, 1].
        let theta = cos_theta.clamp(-1.0, 1.0).acos();

        Ok(match unit {
            AngleUnit::Radians => theta,
            AngleUnit::Degrees => to_degrees(theta),
        })
    }

    pub fn is_orthogonal(&self, other: &Vector) -> Result<bool> {
        self.is_orthogonal_within(other, DEFAULT_TOLERANCE)
    }

    pub fn is_orthogonal_within(&self, other: &Vector, tolerance: f64) -> Result<bool> {
        Ok(self.dot(other)?.abs() < tolerance)
    }

    /// Zero vectors are parallel to everything; otherwise the angle taken
    /// modulo π must be exactly zero.
    ///
    /// Operands must share a dimension: a zero vector of a different
    /// dimension yields [`VectorError::DimensionMismatch`], not `true`.
    pub fn is_parallel(&self, other: &Vector) -> Result<bool> {
        self.is_parallel_with(other, ParallelPolicy::Exact)
    }

    pub fn is_parallel_with(&self, other: &Vector, policy: ParallelPolicy) -> Result<bool> {
        self.ensure_same_dimension(other, Operation::Angle)?;
        if self.is_zero() || other.is_zero() {
            return Ok(true);
        }

        let angle = self.angle_with(other)?;
        Ok(match policy {
            ParallelPolicy::Exact => angle % PI == 0.0,
            ParallelPolicy::Tolerance(tolerance) => {
                angle < tolerance || (PI - angle).abs() < tolerance
            }
        })
    }

    /// Projection of `self` onto the direction of `other`.
    pub fn component_parallel_to(&self, other: &Vector) -> Result<Vector> {
        self.ensure_same_dimension(other, Operation::Projection)?;

        let unit = other.normalize().map_err(|e| {
            e.translate(
                Degeneracy::ZeroVectorNormalization,
                Degeneracy::NoUniqueParallelComponent,
            )
        })?;
        let weight = self.dot(&unit)?;
        Ok(weight * &unit)
    }

    /// The part of `self` perpendicular to `other`.
    pub fn component_orthogonal_to(&self, other: &Vector) -> Result<Vector> {
        let projection = self.component_parallel_to(other).map_err(|e| {
            e.translate(
                Degeneracy::NoUniqueParallelComponent,
                Degeneracy::NoUniqueOrthogonalComponent,
            )
        })?;
        self.checked_sub(&projection)
    }

    /// Both components at once, as `(parallel, orthogonal)`.
    pub fn decompose(&self, other: &Vector) -> Result<(Vector, Vector)> {
        let parallel = self.component_parallel_to(other)?;
        let orthogonal = self.checked_sub(&parallel)?;
        Ok((parallel, orthogonal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{approx_eq, generate_random_vectors};

    fn v(coords: &[f64]) -> Vector {
        Vector::try_from(coords).unwrap()
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(v(&[3.0, 4.0]).magnitude(), 5.0);
        assert_eq!(Vector::zero(4).unwrap().magnitude(), 0.0);
        assert!(approx_eq(v(&[-0.221, 7.437]).magnitude(), 7.4403, 1e-3));
        assert!(approx_eq(v(&[8.813, -1.331, -6.247]).magnitude(), 10.8842, 1e-3));
    }

    #[test]
    fn test_is_zero_is_strict() {
        assert!(Vector::zero(2).unwrap().is_zero());
        assert!(v(&[1e-11, 0.0]).is_zero());
        assert!(!v(&[1e-3, 0.0]).is_zero());
        assert!(!v(&[0.5]).is_zero_within(0.5));
        assert!(v(&[0.5]).is_zero_within(0.6));
    }

    #[test]
    fn test_normalize() {
        let unit = v(&[3.0, 4.0]).normalize().unwrap();
        assert!(unit.approx_eq(&v(&[0.6, 0.8]), 1e-12));
        assert!(approx_eq(unit.magnitude(), 1.0, 1e-12));

        let err = Vector::zero(3).unwrap().normalize().unwrap_err();
        assert_eq!(
            err,
            VectorError::DegenerateOperation(Degeneracy::ZeroVectorNormalization)
        );
        assert_eq!(
            err.to_string(),
            "Degenerate Operation: cannot normalize the zero vector"
        );
    }

    #[test]
    fn test_dot() {
        assert_eq!(v(&[1.0, 2.0, 3.0]).dot(&v(&[4.0, 5.0, 6.0])).unwrap(), 32.0);
        let d = v(&[7.887, 4.138]).dot(&v(&[-8.802, 6.776])).unwrap();
        assert!(approx_eq(d, -41.382, 1e-3));

        let err = v(&[1.0]).dot(&v(&[1.0, 2.0])).unwrap_err();
        assert!(matches!(
            err,
            VectorError::DimensionMismatch {
                operation: Operation::Dot,
                left: 1,
                right: 2
            }
        ));
    }

    #[test]
    fn test_angle() {
        let a = v(&[3.183, -7.627]);
        let b = v(&[-2.668, 5.319]);
        assert!(approx_eq(a.angle_with(&b).unwrap(), 3.072, 1e-3));

        let x = v(&[1.0, 0.0]);
        let y = v(&[0.0, 2.0]);
        assert!(approx_eq(x.angle_in(&y, AngleUnit::Degrees).unwrap(), 90.0, 1e-9));
        assert!(approx_eq(x.angle_with(&y).unwrap(), PI / 2.0, 1e-12));
    }

    #[test]
    fn test_angle_clamps_near_parallel() {
        let a = v(&[0.1, 0.7]);

        let b = 2.0 * &a;
        let raw = a.dot(&b).unwrap() / (a.magnitude() * b.magnitude());
        assert!(raw > 1.0);
        assert_eq!(a.angle_with(&b).unwrap(), 0.0);
        assert!(a.is_parallel(&b).unwrap());

        let c = -3.0 * &a;
        let raw = a.dot(&c).unwrap() / (a.magnitude() * c.magnitude());
        assert!(raw < -1.0);
        assert_eq!(a.angle_with(&c).unwrap(), PI);
        assert!(a.is_parallel(&c).unwrap());
    }

    #[test]
    fn test_parallel_follows_cosine_formula() {
        let scalars = [2.0, 3.0, -1.5, 7.0, 0.1, -4.0];
        for a in generate_random_vectors(3, 200).unwrap() {
            for &k in &scalars {
                let b = k * &a;
                let cos_theta = a.dot(&b).unwrap() / (a.magnitude() * b.magnitude());
                let expected = cos_theta.clamp(-1.0, 1.0).acos() % PI == 0.0;
                assert_eq!(a.is_parallel(&b).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_extreme_magnitudes() {
        for scale in [1e200, 1e-200] {
            let a = v(&[scale, scale]);
            let b = 2.0 * &a;

            let magnitude = a.magnitude();
            assert!(magnitude.is_finite() && magnitude > 0.0);
            assert!(approx_eq(magnitude / scale, 2.0_f64.sqrt(), 1e-12));

            let unit = a.normalize().unwrap();
            assert!(approx_eq(unit.magnitude(), 1.0, 1e-12));
            assert!(unit.approx_eq(&v(&[0.5_f64.sqrt(), 0.5_f64.sqrt()]), 1e-12));

            assert!(a.angle_with(&b).unwrap() < 1e-7);
            assert!(approx_eq(a.angle_with(&-&b).unwrap(), PI, 1e-7));
            assert!(a.is_parallel_with(&b, ParallelPolicy::Tolerance(1e-6)).unwrap());

            let orthogonal = a.component_orthogonal_to(&b).unwrap();
            assert!(orthogonal.magnitude() / magnitude < 1e-12);
        }
    }

    #[test]
    fn test_angle_with_zero_vector() {
        let zero = Vector::zero(2).unwrap();
        let a = v(&[1.0, 1.0]);
        let expected = VectorError::DegenerateOperation(Degeneracy::ZeroVectorAngle);
        assert_eq!(a.angle_with(&zero).unwrap_err(), expected);
        assert_eq!(zero.angle_with(&a).unwrap_err(), expected);

        // Dimension problems win over degenerate operands.
        let err = zero.angle_with(&v(&[1.0, 2.0, 3.0])).unwrap_err();
        assert!(matches!(err, VectorError::DimensionMismatch { operation: Operation::Angle, .. }));
    }

    #[test]
    fn test_orthogonal() {
        let a = v(&[1.0, 1.0]);
        assert!(a.is_orthogonal(&v(&[-1.0, 1.0])).unwrap());
        assert!(!a.is_orthogonal(&v(&[1.0, 0.0])).unwrap());
        assert!(a.is_orthogonal(&Vector::zero(2).unwrap()).unwrap());
        assert!(a.is_orthogonal_within(&v(&[-1.0, 1.001]), 1e-2).unwrap());
        assert!(a.is_orthogonal(&v(&[1.0])).is_err());
    }

    #[test]
    fn test_parallel_exact_policy() {
        let x = v(&[1.0, 0.0]);
        assert!(x.is_parallel(&v(&[3.0, 0.0])).unwrap());
        assert!(x.is_parallel(&v(&[-2.0, 0.0])).unwrap());
        assert!(x.is_parallel(&Vector::zero(2).unwrap()).unwrap());
        assert!(Vector::zero(2).unwrap().is_parallel(&x).unwrap());
        assert!(!x.is_parallel(&v(&[1.0, 1.0])).unwrap());
        assert!(x.is_parallel(&v(&[1.0, 0.0, 0.0])).is_err());
    }

    #[test]
    fn test_parallel_tolerance_policy() {
        let x = v(&[1.0, 0.0]);
        let almost = v(&[1.0, 1e-9]);
        let almost_anti = v(&[-1.0, 1e-9]);
        let policy = ParallelPolicy::Tolerance(1e-6);

        assert!(x.is_parallel_with(&almost, policy).unwrap());
        assert!(x.is_parallel_with(&almost_anti, policy).unwrap());
        assert!(!x.is_parallel_with(&v(&[1.0, 1.0]), policy).unwrap());
    }

    #[test]
    fn test_components() {
        let a = v(&[3.039, 1.879]);
        let b = v(&[0.825, 2.036]);

        let parallel = a.component_parallel_to(&b).unwrap();
        let orthogonal = a.component_orthogonal_to(&b).unwrap();

        assert!(parallel.is_parallel_with(&b, ParallelPolicy::Tolerance(1e-6)).unwrap());
        assert!(orthogonal.is_orthogonal(&b).unwrap());
        assert!((&parallel + &orthogonal).unwrap().approx_eq(&a, 1e-12));

        let (p, o) = a.decompose(&b).unwrap();
        assert_eq!(p, parallel);
        assert_eq!(o, orthogonal);
    }

    #[test]
    fn test_components_with_zero_vector() {
        let a = v(&[1.0, 2.0]);
        let zero = Vector::zero(2).unwrap();

        assert_eq!(
            a.component_parallel_to(&zero).unwrap_err(),
            VectorError::DegenerateOperation(Degeneracy::NoUniqueParallelComponent)
        );
        assert_eq!(
            a.component_orthogonal_to(&zero).unwrap_err(),
            VectorError::DegenerateOperation(Degeneracy::NoUniqueOrthogonalComponent)
        );
        assert_eq!(
            a.component_orthogonal_to(&zero).unwrap_err().to_string(),
            "Degenerate Operation: no unique orthogonal component"
        );
    }

    #[test]
    fn test_components_dimension_mismatch_propagates() {
        let a = v(&[1.0, 2.0]);
        let b = v(&[1.0, 2.0, 3.0]);
        let err = a.component_orthogonal_to(&b).unwrap_err();
        assert!(matches!(
            err,
            VectorError::DimensionMismatch {
                operation: Operation::Projection,
                ..
            }
        ));
    }
}
