//! Operator overloads for [`Vector`].
//!
//! Addition and subtraction can fail on mismatched dimensions, so their
//! `Output` is a [`Result`]: `(&a + &b)?`. Scalar multiplication takes the
//! scalar on the left and always succeeds.

use crate::{vector::Vector, Result};
use std::ops::{Add, Mul, Neg, Sub};

impl Add<&Vector> for &Vector {
    type Output = Result<Vector>;

    fn add(self, other: &Vector) -> Result<Vector> {
        self.checked_add(other)
    }
}

impl Add for Vector {
    type Output = Result<Vector>;

    fn add(self, other: Vector) -> Result<Vector> {
        self.checked_add(&other)
    }
}

impl Sub<&Vector> for &Vector {
    type Output = Result<Vector>;

    fn sub(self, other: &Vector) -> Result<Vector> {
        self.checked_sub(other)
    }
}

impl Sub for Vector {
    type Output = Result<Vector>;

    fn sub(self, other: Vector) -> Result<Vector> {
        self.checked_sub(&other)
    }
}

impl Mul<&Vector> for f64 {
    type Output = Vector;

    fn mul(self, vector: &Vector) -> Vector {
        vector.scale(self)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, vector: Vector) -> Vector {
        vector.scale(self)
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.scale(-1.0)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.scale(-1.0)
    }
}
