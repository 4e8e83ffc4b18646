//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing bounded by a bounce budget
//! - Anti-aliasing via jittered multi-sampling
//! - Gamma correction and quantization to the output bit depth
//! - Column-parallel rendering on a bounded rayon pool

use crate::framebuffer::{encode_color, BitDepth, Framebuffer};
use crate::progress::RenderProgress;
use crate::random::{column_rng, gen_f64};
use crate::{Camera, Color, HitRecord, Hittable, RenderError, RenderResult, Ray};
use lumen_math::Interval;
use rand::RngCore;
use rayon::prelude::*;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

/// Minimum hit distance, to keep scattered rays from re-hitting their own surface.
pub const T_MIN: f64 = 1e-4;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Number of worker threads
    pub workers: usize,
    /// Base seed; each column derives its own stream from it
    pub seed: u64,
    /// Output bit depth
    pub bit_depth: BitDepth,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 256,
            samples_per_pixel: 256,
            max_depth: 10,
            workers: std::thread::available_parallelism().map_or(1, |n| n.get()),
            seed: 0,
            bit_depth: BitDepth::Sixteen,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples_per_pixel: u32, max_depth: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel;
        self.max_depth = max_depth;
        self
    }

    /// Set the worker thread count.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_bit_depth(mut self, bit_depth: BitDepth) -> Self {
        self.bit_depth = bit_depth;
        self
    }

    /// Aspect ratio of the configured image.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Check preconditions. Called by [`render`] before any worker starts.
    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::ZeroSamples);
        }
        if self.workers == 0 {
            return Err(RenderError::ZeroWorkers);
        }
        Ok(())
    }
}

/// Compute the color seen by a ray.
///
/// This is the core path tracing function. It traces the ray through
/// the scene, bouncing off surfaces and multiplying in each attenuation.
/// A path that runs out of bounces contributes black.
pub fn ray_color(ray: &Ray, world: &dyn Hittable, depth: u32, rng: &mut dyn RngCore) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    let mut rec = HitRecord::default();
    if !world.hit(ray, Interval::new(T_MIN, f64::INFINITY), &mut rec) {
        return sky_gradient(ray);
    }

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => result.attenuation * ray_color(&result.scattered, world, depth - 1, rng),
        // Absorbed
        None => Color::ZERO,
    }
}

/// Compute sky gradient background.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Map a pixel index plus jitter to [0, 1] image-plane space.
///
/// Single-pixel dimensions use a denominator of 1 instead of dividing by zero.
#[inline]
fn plane_coord(index: u32, jitter: f64, extent: u32) -> f64 {
    (index as f64 + jitter) / extent.saturating_sub(1).max(1) as f64
}

/// Render a single pixel with multi-sampling, returning the averaged linear color.
///
/// `j` counts rows from the bottom of the image, matching the camera's
/// lower-left origin.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    i: u32,
    j: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let u = plane_coord(i, gen_f64(rng), config.width);
        let v = plane_coord(j, gen_f64(rng), config.height);
        let ray = camera.get_ray(u, v);
        pixel_color += ray_color(&ray, world, config.max_depth, rng);
    }

    // Average the samples
    pixel_color / config.samples_per_pixel as f64
}

/// Render one column into its framebuffer slice (top row first).
fn render_column(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    x: u32,
    column: &mut [[u16; 3]],
) {
    let mut rng = column_rng(config.seed, x);

    // Sample bottom-up so the column's random stream is consumed in scanline order
    for j in 0..config.height {
        let color = render_pixel(camera, world, x, j, config, &mut rng);
        let y = (config.height - 1 - j) as usize;
        column[y] = encode_color(color, config.bit_depth);
    }
}

/// Render the scene into a quantized framebuffer.
///
/// Columns are the unit of work: a pool of `config.workers` threads renders
/// at most that many columns at once, each with exclusive access to its own
/// framebuffer slice and its own random stream. Returns only after every
/// column has finished. The result is identical for any worker count.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    progress: &dyn RenderProgress,
) -> RenderResult<Framebuffer> {
    config.validate()?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .thread_name(|i| format!("lumen-worker-{}", i))
        .build()?;

    let mut image = Framebuffer::new(config.width, config.height, config.bit_depth);
    let height = config.height as usize;
    let total = config.width;
    let completed = AtomicU32::new(0);

    log::info!(
        "Start rendering {}x{} @ {} spp, depth {}, {} workers",
        config.width,
        config.height,
        config.samples_per_pixel,
        config.max_depth,
        config.workers
    );
    let start = Instant::now();

    pool.install(|| {
        image
            .pixels_mut()
            .par_chunks_mut(height)
            .enumerate()
            .for_each(|(x, column)| {
                let x = x as u32;
                render_column(camera, world, config, x, column);
                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                progress.column_finished(x, done, total);
            });
    });

    log::info!("End rendering, took {:.2?}", start.elapsed());
    Ok(image)
}
