//! Works through the classic vector, line, plane and elimination exercises.
//!
//! Set `LINSYS_DECIMALS` / `LINSYS_EPSILON` to change the numeric policy, and `RUST_LOG=trace`
//! to watch the row reduction.

use linsys::{AngleUnit, Equation, LinearSystem, Line, Plane, Precision, Vector};

fn main() -> anyhow::Result<()> {
    linsys::init_logger!();

    let precision = Precision::from_env()?;
    log::debug!("using {:?}", precision);
    let v = |coords: &[f64]| -> anyhow::Result<Vector> {
        Ok(Vector::new(coords.iter().copied())?.with_precision(precision))
    };

    println!("# Vectors");
    let (a, b) = (v(&[8.218, -9.341])?, v(&[-1.129, 2.111])?);
    println!("{} + {} = {}", a, b, a.plus(&b)?);
    let (a, b) = (v(&[7.119, 8.215])?, v(&[-8.223, 0.878])?);
    println!("{} - {} = {}", a, b, a.minus(&b)?);
    let a = v(&[1.671, -1.012, -0.318])?;
    println!("7.41 * {} = {}", a, a.multiply(7.41));
    let a = v(&[-0.221, 7.437])?;
    println!("|{}| = {:.3}", a, precision.round(a.magnitude()));
    let a = v(&[5.581, -2.136])?;
    println!("direction of {} = {}", a, a.direction()?);

    let (a, b) = (v(&[3.183, -7.627])?, v(&[-2.668, 5.319])?);
    println!(
        "angle between {} and {} = {:.3} rad",
        a,
        b,
        a.angle(&b, AngleUnit::Radians)?
    );
    let (a, b) = (v(&[7.35, 0.221, 5.188])?, v(&[2.751, 8.259, 3.985])?);
    println!(
        "angle between {} and {} = {:.3} degrees",
        a,
        b,
        a.angle(&b, AngleUnit::Degrees)?
    );

    let (a, b) = (v(&[-7.579, -7.88])?, v(&[22.737, 23.64])?);
    println!(
        "{} and {}: parallel = {}, orthogonal = {}",
        a,
        b,
        a.is_parallel(&b)?,
        a.is_orthogonal(&b)?
    );

    let (a, b) = (v(&[3.039, 1.879])?, v(&[0.825, 2.036])?);
    println!("projection of {} onto {} = {}", a, b, a.projection(&b)?);
    let (a, b) = (v(&[-9.88, -3.264, -8.159])?, v(&[-2.155, -9.353, -9.473])?);
    println!("component of {} orthogonal to {} = {}", a, b, a.orthogonal(&b)?);

    let (a, b) = (v(&[8.462, 7.893, -8.187])?, v(&[6.984, -5.975, 4.778])?);
    println!("{} x {} = {}", a, b, a.cross_product(&b)?);
    let (a, b) = (v(&[-8.987, -9.838, 5.031])?, v(&[-4.268, -1.861, -8.866])?);
    println!("parallelogram area = {:.3}", a.parallelogram_area(&b)?);
    let (a, b) = (v(&[1.5, 9.547, 3.691])?, v(&[-6.007, 0.124, 5.772])?);
    println!("triangle area = {:.3}", a.triangle_area(&b)?);

    println!();
    println!("# Lines");
    for (a, b) in [
        (Line::new([4.046, 2.836], 1.21), Line::new([10.115, 7.09], 3.025)),
        (Line::new([7.204, 3.182], 8.68), Line::new([8.172, 4.114], 9.883)),
        (Line::new([1.182, 5.562], 6.744), Line::new([1.773, 8.343], 9.525)),
    ] {
        let (a, b) = (a.with_precision(precision), b.with_precision(precision));
        println!("{}  and  {}: {}", a, b, a.find_intersection(&b)?);
    }

    println!();
    println!("# Planes");
    for (a, b) in [
        (
            Plane::new([-0.412, 3.806, 0.728], -3.46),
            Plane::new([1.03, -9.515, -1.82], 8.65),
        ),
        (
            Plane::new([2.611, 5.528, 0.283], 4.6),
            Plane::new([7.715, 8.306, 5.342], 3.76),
        ),
        (
            Plane::new([-7.926, 8.625, -7.212], -7.952),
            Plane::new([-2.642, 2.875, -2.404], -2.443),
        ),
    ] {
        let (a, b) = (a.with_precision(precision), b.with_precision(precision));
        println!(
            "{}  and  {}: parallel = {}, equal = {}",
            a,
            b,
            a.is_parallel(&b)?,
            a.are_equal(&b)?
        );
    }

    println!();
    println!("# Gaussian elimination");
    let system = LinearSystem::new([
        Plane::new([1.0, 1.0, 1.0], 1.0),
        Plane::new([0.0, 1.0, 0.0], 2.0),
        Plane::new([1.0, 1.0, -1.0], 3.0),
        Plane::new([1.0, 0.0, -2.0], 2.0),
    ])?
    .with_precision(precision);
    println!("{}", system);
    let triangular = system.compute_triangular_form()?;
    println!("{}", triangular);

    let system = LinearSystem::new([
        Equation::from_coefficients([0.0, 1.0, 1.0], 1.0)?,
        Equation::from_coefficients([1.0, -1.0, 1.0], 2.0)?,
        Equation::from_coefficients([1.0, 2.0, -5.0], 3.0)?,
    ])?
    .with_precision(precision);
    println!("{}", system.compute_triangular_form()?);
    println!(
        "leading terms: {:?}",
        system
            .compute_triangular_form()?
            .indices_of_first_nonzero_terms_in_each_row()
    );

    Ok(())
}
