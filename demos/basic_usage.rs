use anyhow::{Context, Result};
use vector_algebra::{
    config::{AngleUnit, ParallelPolicy, Tolerances},
    vector::Vector,
};

fn main() -> Result<()> {
    env_logger::init();

    println!("Vector Algebra Demo");
    println!("===================\n");

    let a = Vector::new(vec![3.039, 1.879]).context("building a")?;
    let b = Vector::new(vec![0.825, 2.036]).context("building b")?;
    println!("a = {}", a);
    println!("b = {}", b);

    println!("\nArithmetic:");
    println!("  a + b = {}", (&a + &b)?);
    println!("  a - b = {}", (&a - &b)?);
    println!("  2.5 * a = {}", 2.5 * &a);

    println!("\nMeasurements:");
    println!("  |a| = {:.4}", a.magnitude());
    println!("  a / |a| = {}", a.normalize()?);
    println!("  a . b = {:.4}", a.dot(&b)?);
    println!("  angle = {:.4} rad", a.angle_with(&b)?);
    println!("  angle = {:.4} deg", a.angle_in(&b, AngleUnit::Degrees)?);

    println!("\nDecomposition of a relative to b:");
    let (parallel, orthogonal) = a.decompose(&b)?;
    println!("  parallel   = {}", parallel);
    println!("  orthogonal = {}", orthogonal);
    println!("  sum        = {}", (&parallel + &orthogonal)?);

    println!("\nPredicates:");
    let tolerances = Tolerances::new().with_parallel(ParallelPolicy::Tolerance(1e-6));
    println!(
        "  parallel(b, parallel component) = {}",
        tolerances.parallelism_test(&b, &parallel)?
    );
    println!(
        "  orthogonal(b, orthogonal component) = {}",
        tolerances.orthogonality_test(&b, &orthogonal)?
    );

    println!("\nFailure modes:");
    let zero = Vector::zero(2)?;
    if let Err(err) = a.component_orthogonal_to(&zero) {
        println!("  projecting onto zero: {}", err);
    }
    let c = Vector::new(vec![1.0, 2.0, 3.0])?;
    if let Err(err) = a.dot(&c) {
        println!("  mismatched dimensions: {}", err);
    }

    Ok(())
}
