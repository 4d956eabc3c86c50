use crate::{vector::Vector, Result};

/// Threshold under which a magnitude or dot product counts as zero.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// How [`Vector::is_parallel_with`] decides that two angles coincide.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ParallelPolicy {
    /// `angle % π == 0` compared exactly.
    #[default]
    Exact,
    /// The angle lies within the given distance of `0` or `π`.
    Tolerance(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

/// Tunable thresholds for the approximate vector predicates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub zero: f64,
    pub orthogonal: f64,
    pub parallel: ParallelPolicy,
}

impl Tolerances {
    pub fn new() -> Self {
        Self {
            zero: DEFAULT_TOLERANCE,
            orthogonal: DEFAULT_TOLERANCE,
            parallel: ParallelPolicy::Exact,
        }
    }

    pub fn with_zero(mut self, tolerance: f64) -> Self {
        self.zero = tolerance;
        self
    }

    pub fn with_orthogonal(mut self, tolerance: f64) -> Self {
        self.orthogonal = tolerance;
        self
    }

    pub fn with_parallel(mut self, policy: ParallelPolicy) -> Self {
        self.parallel = policy;
        self
    }

    pub fn zero_test(&self, vector: &Vector) -> bool {
        vector.is_zero_within(self.zero)
    }

    pub fn orthogonality_test(&self, a: &Vector, b: &Vector) -> Result<bool> {
        a.is_orthogonal_within(b, self.orthogonal)
    }

    pub fn parallelism_test(&self, a: &Vector, b: &Vector) -> Result<bool> {
        a.is_parallel_with(b, self.parallel)
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::new()
    }
}
