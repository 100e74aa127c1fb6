use nvector::{AngleUnit, Tolerance, Vector};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Vector Demo");
    println!("===========\n");

    let a: Vector = "(1, 1, 0)".parse()?;
    let basis = Vector::new([1.0, 0.0, 0.0])?;
    let y = Vector::new([0.0, 1.0, 0.0])?;
    println!("a     = {}", a);
    println!("basis = {}", basis);

    println!("\nArithmetic");
    println!("  a + basis   = {}", a.add(&basis)?);
    println!("  a - basis   = {}", a.subtract(&basis)?);
    println!("  basis x y   = {}", basis.cross(&y)?);
    println!("  |a|         = {:.4}", a.magnitude());
    println!("  a / |a|     = {}", a.normalized()?);

    println!("\nGeometry");
    println!("  angle(a, basis)   = {:.2} deg", a.angle_between(&basis, AngleUnit::Degrees)?);
    println!("  projection        = {}", a.projected_onto_basis(&basis)?);
    println!("  rejection         = {}", a.orthogonal_to_basis(&basis)?);
    println!("  basis _|_ y       = {}", basis.is_orthogonal_to(&y)?);
    println!("  triangle area     = {}", basis.area_of_triangle_with(&y)?);

    let zero = Vector::new([0.0, 0.0, 0.0])?;
    println!("\nZero vector");
    println!("  parallel to a     = {}", zero.is_parallel_to_within(&a, Tolerance::EXACT)?);
    match zero.normalized() {
        Ok(unit) => println!("  normalized        = {}", unit),
        Err(e) => println!("  normalized        -> {}", e),
    }

    Ok(())
}
