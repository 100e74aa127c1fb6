use crate::{Result, Vector};
use rand::Rng;

/// `num` vectors of dimension `dim` with coordinates drawn from `[-1, 1)`.
pub fn generate_random_vectors(dim: usize, num: usize) -> Result<Vec<Vector>> {
    let mut rng = rand::thread_rng();
    generate_random_vectors_with(&mut rng, dim, num)
}

pub fn generate_random_vectors_with<R: Rng + ?Sized>(
    rng: &mut R,
    dim: usize,
    num: usize,
) -> Result<Vec<Vector>> {
    (0..num)
        .map(|_| Vector::new((0..dim).map(|_| rng.gen_range(-1.0..1.0))))
        .collect()
}
