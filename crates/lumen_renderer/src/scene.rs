//! Scene container and nearest-hit query.

use crate::hittable::{HitRecord, Hittable};
use crate::Ray;
use lumen_math::Interval;

/// An ordered list of hittable objects.
///
/// Insertion order only matters for ties: when two objects are hit at the
/// same distance, the one added first wins.
pub struct Scene {
    objects: Vec<Box<dyn Hittable>>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self { objects: Vec::new() }
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: impl Hittable + 'static) {
        self.objects.push(Box::new(object));
    }

    /// Builder-style variant of [`Scene::add`].
    pub fn with(mut self, object: impl Hittable + 'static) -> Self {
        self.add(object);
        self
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for Scene {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        debug_assert!(ray_t.is_valid(), "empty ray interval {ray_t:?}");
        let mut hit_anything = false;
        let mut closest_so_far = ray_t.max;

        // The open upper bound rejects later hits at an equal distance
        for object in &self.objects {
            let interval = Interval::new(ray_t.min, closest_so_far);
            if object.hit(ray, interval, rec) {
                hit_anything = true;
                closest_so_far = rec.t;
            }
        }

        hit_anything
    }
}
