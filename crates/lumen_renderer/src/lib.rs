//! Lumen Renderer - CPU Path Tracing
//!
//! A recursive Monte Carlo path tracer for sphere scenes with diffuse and
//! metallic materials. Columns of the image are rendered in parallel on a
//! bounded thread pool, each with its own deterministic random stream.

mod camera;
mod error;
mod framebuffer;
mod hittable;
mod material;
mod output;
mod progress;
pub mod random;
mod renderer;
mod scene;
mod sphere;

pub use camera::{Camera, CameraSettings};
pub use error::{RenderError, RenderResult};
pub use framebuffer::{encode_color, linear_to_gamma, quantize, BitDepth, Framebuffer};
pub use hittable::{HitRecord, Hittable};
pub use material::{reflect, Color, Lambertian, Material, Metal, ScatterResult};
pub use output::{save_framebuffer, to_rgb16, to_rgb8, write_ppm};
pub use progress::{LogProgress, NoProgress, RenderProgress};
pub use renderer::{ray_color, render, render_pixel, sky_gradient, RenderConfig, T_MIN};
pub use scene::Scene;
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Interval, Ray, Vec3};
