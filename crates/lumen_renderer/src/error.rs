//! Error types for scene construction, render configuration and output.

use thiserror::Error;

/// Errors raised before a render starts or while writing its output.
///
/// Nothing inside the sampling loop can fail: misses and absorbed paths
/// are ordinary results, not errors.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("Metal fuzz must lie in [0, 1], got {0}")]
    InvalidFuzz(f64),

    #[error("Degenerate camera: {0}")]
    DegenerateCamera(String),

    #[error("Invalid resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Samples per pixel must be at least 1")]
    ZeroSamples,

    #[error("Worker count must be at least 1")]
    ZeroWorkers,

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),
}

pub type RenderResult<T> = Result<T, RenderError>;
