//! Lumen math types.
//!
//! Thin layer over `glam`'s double-precision vectors plus the ray and
//! interval types shared by the renderer.

// Re-export glam for convenience
pub use glam;

/// Three-component `f64` vector used for points, directions and colors.
pub type Vec3 = glam::DVec3;

mod interval;
mod ray;

pub use interval::Interval;
pub use ray::Ray;
