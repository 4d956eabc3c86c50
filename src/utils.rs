use crate::{vector::Vector, Result};
use ndarray::Array1;
use std::f64::consts::PI;

/// True when `a` and `b` differ by less than `tolerance`.
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// `num` vectors of dimension `dim` with coordinates drawn uniformly from `[-1, 1)`.
pub fn generate_random_vectors(dim: usize, num: usize) -> Result<Vec<Vector>> {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    (0..num)
        .map(|_| {
            Vector::from_array(Array1::from_vec(
                (0..dim).map(|_| rng.gen_range(-1.0..1.0)).collect(),
            ))
        })
        .collect()
}
