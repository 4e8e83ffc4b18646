//! Material trait for surface scattering.

use crate::{
    error::{RenderError, RenderResult},
    hittable::HitRecord,
    random::{random_in_unit_sphere, random_unit_vector},
    Ray,
};
use lumen_math::{Interval, Vec3};
use rand::RngCore;

/// Color type alias (linear RGB, nominally 0-1)
pub type Color = Vec3;

/// Outgoing ray and color filter produced by a successful scatter.
#[derive(Debug, Clone, Copy)]
pub struct ScatterResult {
    pub attenuation: Color,
    pub scattered: Ray,
}

/// Trait for materials that describe how light interacts with surfaces.
pub trait Material: Send + Sync {
    /// Scatter an incoming ray.
    ///
    /// Returns `None` if the ray is absorbed. All randomness comes from `rng`.
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult>;
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Material for Lambertian {
    fn scatter(&self, _ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult> {
        let mut scatter_direction = rec.normal + random_unit_vector(rng);

        // Catch degenerate scatter direction
        if scatter_direction.length_squared() < 1e-16 {
            scatter_direction = rec.normal;
        }

        Some(ScatterResult {
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, scatter_direction),
        })
    }
}

/// Metal (specular) material.
#[derive(Debug, Clone)]
pub struct Metal {
    albedo: Color,
    fuzz: f64,
}

impl Metal {
    /// Create a new Metal material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough
    ///
    /// Fails with [`RenderError::InvalidFuzz`] when `fuzz` is outside [0, 1].
    pub fn new(albedo: Color, fuzz: f64) -> RenderResult<Self> {
        if !Interval::UNIT.contains(fuzz) {
            return Err(RenderError::InvalidFuzz(fuzz));
        }
        Ok(Self { albedo, fuzz })
    }
}

impl Material for Metal {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult> {
        let reflected = reflect(ray_in.direction(), rec.normal);
        let mut scattered_dir = reflected;
        if self.fuzz > 0.0 {
            scattered_dir += self.fuzz * random_in_unit_sphere(rng);
        }

        // Fuzz can push the ray below the surface; absorb it there
        if scattered_dir.dot(rec.normal) > 0.0 {
            Some(ScatterResult {
                attenuation: self.albedo,
                scattered: Ray::new(rec.p, scattered_dir),
            })
        } else {
            None
        }
    }
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::column_rng;
    use approx::assert_abs_diff_eq;

    fn record_at_origin<'a>(normal: Vec3, material: &'a dyn Material) -> HitRecord<'a> {
        HitRecord {
            p: Vec3::ZERO,
            normal,
            material,
            t: 1.0,
        }
    }

    #[test]
    fn test_reflect() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        assert_eq!(reflect(v, Vec3::Y), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_lambertian_attenuation_is_albedo() {
        let albedo = Color::new(0.8, 0.3, 0.1);
        let mat = Lambertian::new(albedo);
        let rec = record_at_origin(Vec3::Y, &mat);
        let ray_in = Ray::new(Vec3::new(0.0, 1.0, 1.0), Vec3::new(0.0, -1.0, -1.0));
        let mut rng = column_rng(11, 0);

        for _ in 0..256 {
            let result = mat.scatter(&ray_in, &rec, &mut rng).expect("lambertian never absorbs");
            assert_eq!(result.attenuation, albedo);
            assert_eq!(result.scattered.origin(), rec.p);
            // normal + unit vector never points into the surface
            assert!(result.scattered.direction().dot(rec.normal) >= -1e-12);
        }
    }

    #[test]
    fn test_metal_mirror_reflection() {
        let mat = Metal::new(Color::new(0.5, 0.5, 0.5), 0.0).unwrap();
        let normal = Vec3::new(0.0, 1.0, 0.0);
        let rec = record_at_origin(normal, &mat);
        // Camera rays are not unit length; the reflection keeps the incoming length
        let incoming = Vec3::new(1.0, -2.0, 0.5);
        let ray_in = Ray::new(Vec3::new(-1.0, 2.0, -0.5), incoming);
        let mut rng = column_rng(3, 0);

        let result = mat.scatter(&ray_in, &rec, &mut rng).expect("mirror reflects");
        let out = result.scattered.direction();

        assert_eq!(out.dot(normal), (-incoming).dot(normal));
        assert_eq!(out, Vec3::new(1.0, 2.0, 0.5));
        assert_abs_diff_eq!(out.length(), incoming.length(), epsilon = 1e-12);
        assert_eq!(result.attenuation, Color::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_metal_fuzz_is_not_rescaled() {
        let mat = Metal::new(Color::ONE, 0.5).unwrap();
        let normal = Vec3::Y;
        let rec = record_at_origin(normal, &mat);
        let incoming = Vec3::new(3.0, -4.0, 0.0);
        let ray_in = Ray::new(Vec3::new(-3.0, 4.0, 0.0), incoming);
        let mirror = reflect(incoming, normal);
        let mut rng = column_rng(9, 0);

        for _ in 0..256 {
            let result = mat.scatter(&ray_in, &rec, &mut rng).expect("steep ray stays above");
            // fuzz offsets the unnormalized reflection by at most `fuzz`
            assert!((result.scattered.direction() - mirror).length() < 0.5);
        }
    }

    #[test]
    fn test_metal_absorbs_below_surface() {
        let mat = Metal::new(Color::ONE, 1.0).unwrap();
        let normal = Vec3::Y;
        let rec = record_at_origin(normal, &mat);
        // Grazing ray: the mirror direction barely leaves the surface, so heavy
        // fuzz sends a large share of samples below it
        let ray_in = Ray::new(Vec3::ZERO, Vec3::new(1.0, -0.01, 0.0));
        let mut rng = column_rng(5, 0);

        let mut absorbed = 0;
        for _ in 0..512 {
            match mat.scatter(&ray_in, &rec, &mut rng) {
                Some(result) => assert!(result.scattered.direction().dot(normal) > 0.0),
                None => absorbed += 1,
            }
        }
        assert!(absorbed > 0);
    }

    #[test]
    fn test_metal_rejects_invalid_fuzz() {
        assert!(matches!(Metal::new(Color::ONE, 1.5), Err(RenderError::InvalidFuzz(_))));
        assert!(Metal::new(Color::ONE, -0.1).is_err());
        assert!(Metal::new(Color::ONE, f64::NAN).is_err());
        assert!(Metal::new(Color::ONE, 1.0).is_ok());
        assert!(Metal::new(Color::ONE, 0.0).is_ok());
    }
}
