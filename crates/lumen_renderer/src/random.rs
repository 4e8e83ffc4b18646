//! Random sampling helpers.
//!
//! Every function takes the caller's generator explicitly. Each render
//! column owns its own `ChaCha8Rng`, so no generator is ever shared
//! between worker threads.

use lumen_math::Vec3;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate a uniform f64 in [0.0, 1.0).
#[inline]
pub fn gen_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen::<f64>()
}

/// Generate a uniform f64 in [min, max).
#[inline]
pub fn gen_f64_range(rng: &mut dyn RngCore, min: f64, max: f64) -> f64 {
    min + (max - min) * gen_f64(rng)
}

/// Random point strictly inside the unit sphere (rejection sampling).
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(
            gen_f64_range(rng, -1.0, 1.0),
            gen_f64_range(rng, -1.0, 1.0),
            gen_f64_range(rng, -1.0, 1.0),
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Random unit vector, uniformly distributed on the unit sphere.
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = random_in_unit_sphere(rng);
        let len_sq = p.length_squared();
        // Tiny vectors lose precision when normalized
        if len_sq > 1e-12 {
            return p / len_sq.sqrt();
        }
    }
}

/// Generator for one image column.
///
/// The same `(seed, column)` pair always yields the same stream, which
/// keeps the output independent of how columns are spread over workers.
pub fn column_rng(seed: u64, column: u32) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(column as u64);
    rng
}
