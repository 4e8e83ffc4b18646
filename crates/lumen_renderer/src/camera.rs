//! Camera for ray generation.

use crate::error::{RenderError, RenderResult};
use crate::Ray;
use lumen_math::Vec3;

/// Positioning and lens parameters a [`Camera`] is derived from.
#[derive(Debug, Clone)]
pub struct CameraSettings {
    pub look_from: Vec3,
    pub look_at: Vec3,
    pub vup: Vec3,
    /// Vertical field of view in degrees
    pub vfov: f64,
    /// Image width divided by image height
    pub aspect_ratio: f64,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            look_from: Vec3::ZERO,
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            vfov: 90.0,
            aspect_ratio: 16.0 / 9.0,
        }
    }
}

impl CameraSettings {
    /// Create settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set vertical field of view in degrees.
    pub fn with_vfov(mut self, vfov: f64) -> Self {
        self.vfov = vfov;
        self
    }

    /// Set aspect ratio (width / height).
    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Set aspect ratio from an image resolution.
    pub fn with_resolution(self, width: u32, height: u32) -> Self {
        self.with_aspect_ratio(width as f64 / height as f64)
    }

    /// Derive the camera basis.
    ///
    /// Rejects configurations that cannot produce an orthonormal basis.
    pub fn build(&self) -> RenderResult<Camera> {
        if !(self.vfov > 0.0 && self.vfov < 180.0) {
            return Err(RenderError::DegenerateCamera(format!(
                "vertical fov {} is outside (0, 180)",
                self.vfov
            )));
        }
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(RenderError::DegenerateCamera(format!(
                "aspect ratio {} must be positive",
                self.aspect_ratio
            )));
        }

        let w = (self.look_from - self.look_at)
            .try_normalize()
            .ok_or_else(|| RenderError::DegenerateCamera("look_from equals look_at".into()))?;
        let u = self
            .vup
            .cross(w)
            .try_normalize()
            .ok_or_else(|| RenderError::DegenerateCamera("up vector is parallel to the view direction".into()))?;
        let v = w.cross(u);

        let theta = self.vfov.to_radians();
        let half_height = (theta / 2.0).tan();
        let half_width = self.aspect_ratio * half_height;

        let origin = self.look_from;
        Ok(Camera {
            origin,
            horizontal: 2.0 * half_width * u,
            vertical: 2.0 * half_height * v,
            lower_left_corner: origin - half_width * u - half_height * v - w,
        })
    }
}

/// Camera for generating rays into the scene.
///
/// Immutable once built; shared by reference between all render workers.
#[derive(Debug, Clone)]
pub struct Camera {
    origin: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    lower_left_corner: Vec3,
}

impl Camera {
    /// Generate the ray through image-plane coordinates `(s, t)`.
    ///
    /// `(0, 0)` is the lower-left corner of the view, `(1, 1)` the upper-right.
    pub fn get_ray(&self, s: f64, t: f64) -> Ray {
        let target = self.lower_left_corner + s * self.horizontal + t * self.vertical;
        Ray::new(self.origin, target - self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_camera_basis() {
        let camera = CameraSettings::new()
            .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
            .with_vfov(90.0)
            .with_aspect_ratio(2.0)
            .build()
            .unwrap();

        // tan(45°) = 1, so the view plane at z = -1 spans [-2, 2] x [-1, 1]
        assert!(camera.horizontal.abs_diff_eq(Vec3::new(4.0, 0.0, 0.0), 1e-12));
        assert!(camera.vertical.abs_diff_eq(Vec3::new(0.0, 2.0, 0.0), 1e-12));
        assert!(camera.lower_left_corner.abs_diff_eq(Vec3::new(-2.0, -1.0, -1.0), 1e-12));
    }

    #[test]
    fn test_camera_center_ray() {
        let camera = CameraSettings::new()
            .with_position(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, -7.0), Vec3::Y)
            .with_vfov(40.0)
            .with_resolution(400, 200)
            .build()
            .unwrap();

        let ray = camera.get_ray(0.5, 0.5);
        assert_eq!(ray.origin(), Vec3::new(1.0, 2.0, 3.0));
        let dir = ray.direction().normalize();
        assert_abs_diff_eq!(dir.z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_camera_corners() {
        let camera = CameraSettings::new()
            .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
            .with_aspect_ratio(1.0)
            .build()
            .unwrap();

        let lower_left = camera.get_ray(0.0, 0.0).direction();
        let upper_right = camera.get_ray(1.0, 1.0).direction();
        assert!(lower_left.x < 0.0 && lower_left.y < 0.0);
        assert!(upper_right.x > 0.0 && upper_right.y > 0.0);
    }

    #[test]
    fn test_degenerate_camera_rejected() {
        let same_point = CameraSettings::new().with_position(Vec3::ONE, Vec3::ONE, Vec3::Y);
        assert!(matches!(same_point.build(), Err(RenderError::DegenerateCamera(_))));

        let parallel_up = CameraSettings::new().with_position(Vec3::ZERO, Vec3::new(0.0, -5.0, 0.0), Vec3::Y);
        assert!(parallel_up.build().is_err());

        assert!(CameraSettings::new().with_vfov(0.0).build().is_err());
        assert!(CameraSettings::new().with_vfov(180.0).build().is_err());
        assert!(CameraSettings::new().with_aspect_ratio(0.0).build().is_err());
    }
}
