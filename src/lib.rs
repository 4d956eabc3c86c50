pub mod config;
pub mod geometry;
pub mod ops;
pub mod utils;
pub mod vector;

use std::fmt;
use thiserror::Error;

/// Message carried by `InvalidArgument` when a vector would have no coordinates.
pub const EMPTY_COORDINATES: &str = "coordinates must be nonempty";
/// Message carried by `TypeMismatch` when the input is not a sequence.
pub const NOT_ITERABLE: &str = "coordinates must be an iterable";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),
    #[error("Type Mismatch: {0}")]
    TypeMismatch(String),
    #[error("Dimension Mismatch: vectors are with different lengths ({operation}: {left} vs {right})")]
    DimensionMismatch {
        operation: Operation,
        left: usize,
        right: usize,
    },
    #[error("Degenerate Operation: {0}")]
    DegenerateOperation(Degeneracy),
}

/// The binary operation that rejected its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Dot,
    Angle,
    Projection,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Dot => "dot",
            Operation::Angle => "angle",
            Operation::Projection => "projection",
        };
        f.write_str(name)
    }
}

/// Which computation hit a zero-magnitude vector.
///
/// Nested failures are re-labelled by matching on these variants, e.g. a
/// `ZeroVectorNormalization` raised while projecting becomes
/// `NoUniqueParallelComponent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    ZeroVectorNormalization,
    ZeroVectorAngle,
    NoUniqueParallelComponent,
    NoUniqueOrthogonalComponent,
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Degeneracy::ZeroVectorNormalization => "cannot normalize the zero vector",
            Degeneracy::ZeroVectorAngle => "cannot compute angle with the zero vector",
            Degeneracy::NoUniqueParallelComponent => "no unique parallel component",
            Degeneracy::NoUniqueOrthogonalComponent => "no unique orthogonal component",
        };
        f.write_str(message)
    }
}

impl VectorError {
    /// Replace one degenerate case with another, leaving every other error untouched.
    pub(crate) fn translate(self, from: Degeneracy, to: Degeneracy) -> Self {
        match self {
            VectorError::DegenerateOperation(kind) if kind == from => {
                log::debug!("translating degenerate failure '{}' into '{}'", from, to);
                VectorError::DegenerateOperation(to)
            }
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use config::{AngleUnit, ParallelPolicy, Tolerances, DEFAULT_TOLERANCE};
pub use utils::{approx_eq, generate_random_vectors};
pub use vector::Vector;
