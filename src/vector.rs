use crate::{Operation, Result, VectorError, EMPTY_COORDINATES, NOT_ITERABLE};
use ndarray::{Array1, ArrayView1};
use serde_json::Value;
use std::fmt;

/// An immutable, non-empty vector of `f64` coordinates.
///
/// Every operation returns a new `Vector`; the coordinates of an existing
/// value are never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    coordinates: Array1<f64>,
    dimension: usize,
}

impl Vector {
    pub fn new<I>(coordinates: I) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        Self::from_array(coordinates.into_iter().collect())
    }

    pub fn from_array(coordinates: Array1<f64>) -> Result<Self> {
        let dimension = coordinates.len();
        if dimension == 0 {
            return Err(VectorError::InvalidArgument(EMPTY_COORDINATES.to_string()));
        }
        log::trace!("constructed vector of dimension {}", dimension);
        Ok(Self {
            coordinates,
            dimension,
        })
    }

    /// Build a vector from dynamically typed input such as a parsed JSON document.
    ///
    /// The value must be an array of numbers.
    pub fn from_json(value: &Value) -> Result<Self> {
        let items = value
            .as_array()
            .ok_or_else(|| VectorError::TypeMismatch(NOT_ITERABLE.to_string()))?;

        let coordinates = items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.as_f64().ok_or_else(|| {
                    VectorError::TypeMismatch(format!(
                        "coordinate {} must be a number, found {}",
                        i, item
                    ))
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        Self::new(coordinates)
    }

    pub fn zero(dimension: usize) -> Result<Self> {
        Self::from_array(Array1::zeros(dimension))
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.dimension
    }

    pub fn coordinates(&self) -> ArrayView1<'_, f64> {
        self.coordinates.view()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.coordinates.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.coordinates.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.coordinates.to_vec()
    }

    pub(crate) fn data(&self) -> &Array1<f64> {
        &self.coordinates
    }

    /// Component-wise comparison within `tolerance`. Vectors of different
    /// dimensions are never approximately equal.
    pub fn approx_eq(&self, other: &Vector, tolerance: f64) -> bool {
        self.dimension == other.dimension
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| crate::utils::approx_eq(a, b, tolerance))
    }

    pub(crate) fn ensure_same_dimension(&self, other: &Vector, operation: Operation) -> Result<()> {
        if self.dimension != other.dimension {
            return Err(VectorError::DimensionMismatch {
                operation,
                left: self.dimension,
                right: other.dimension,
            });
        }
        Ok(())
    }

    pub fn checked_add(&self, other: &Vector) -> Result<Vector> {
        self.ensure_same_dimension(other, Operation::Add)?;
        Self::from_array(&self.coordinates + &other.coordinates)
    }

    pub fn checked_sub(&self, other: &Vector) -> Result<Vector> {
        self.ensure_same_dimension(other, Operation::Subtract)?;
        Self::from_array(&self.coordinates - &other.coordinates)
    }

    /// Multiply every coordinate by `scalar`. Scaling by zero gives the zero vector.
    pub fn scale(&self, scalar: f64) -> Vector {
        Self {
            coordinates: self.coordinates.mapv(|x| scalar * x),
            dimension: self.dimension,
        }
    }
}

impl TryFrom<Array1<f64>> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: Array1<f64>) -> Result<Self> {
        Self::from_array(coordinates)
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: Vec<f64>) -> Result<Self> {
        Self::from_array(Array1::from_vec(coordinates))
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: &[f64]) -> Result<Self> {
        Self::new(coordinates.iter().copied())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.iter().map(|x| format!("{:?}", x)).collect();
        write!(f, "Vector: ({})", rendered.join(", "))
    }
}
