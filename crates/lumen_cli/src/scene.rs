//! Built-in demo scene: two rows of spheres resting on a huge ground sphere.

use lumen_renderer::{Camera, CameraSettings, Color, Lambertian, Material, Metal, RenderResult, Scene, Sphere, Vec3};
use std::sync::Arc;

/// Vertical field of view matching a 2-unit-wide view plane at unit distance for a 2:1 image.
const DEMO_VFOV: f64 = 53.130_102_354_155_98;

/// Build the demo scene.
///
/// Materials are shared between the two rows.
pub fn demo_scene() -> RenderResult<Scene> {
    let yellow: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0)));
    let cyan: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.0, 0.8, 0.8)));
    let ground: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.8)));
    let steel: Arc<dyn Material> = Arc::new(Metal::new(Color::new(0.5, 0.5, 0.5), 0.0)?);

    let mut scene = Scene::new();
    for y in [0.0, 2.0] {
        scene.add(Sphere::new(Vec3::new(0.0, y, -4.0), 1.0, steel.clone())?);
        scene.add(Sphere::new(Vec3::new(-2.0, y, -4.0), 1.0, cyan.clone())?);
        scene.add(Sphere::new(Vec3::new(2.0, y, -4.0), 1.0, yellow.clone())?);
    }
    scene.add(Sphere::new(Vec3::new(0.0, -1001.0, -4.0), 1000.0, ground)?);

    log::debug!("Demo scene has {} spheres", scene.len());
    Ok(scene)
}

/// Camera looking down -Z at both rows.
pub fn demo_camera(aspect_ratio: f64) -> RenderResult<Camera> {
    CameraSettings::new()
        .with_position(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 1.0, -4.0), Vec3::Y)
        .with_vfov(DEMO_VFOV)
        .with_aspect_ratio(aspect_ratio)
        .build()
}
