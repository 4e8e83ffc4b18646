//! Quantized render output.
//!
//! Pixels are stored column-major so every image column is one contiguous
//! slice. The render driver hands each worker exclusive `&mut` access to
//! its column, which is the only synchronization the image needs.

use crate::Color;
use lumen_math::Interval;

/// Output bit depth per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitDepth {
    Eight,
    #[default]
    Sixteen,
}

impl BitDepth {
    /// Largest representable channel value.
    pub fn max_value(self) -> u16 {
        match self {
            BitDepth::Eight => u8::MAX as u16,
            BitDepth::Sixteen => u16::MAX,
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
        }
    }
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Quantize an already gamma-encoded channel value.
///
/// `0.0` maps to 0 and `1.0` to the bit depth maximum; values outside
/// [0, 1] are clamped first.
#[inline]
pub fn quantize(value: f64, depth: BitDepth) -> u16 {
    (Interval::UNIT.clamp(value) * depth.max_value() as f64) as u16
}

/// Gamma-encode and quantize a linear color.
pub fn encode_color(color: Color, depth: BitDepth) -> [u16; 3] {
    [
        quantize(linear_to_gamma(color.x), depth),
        quantize(linear_to_gamma(color.y), depth),
        quantize(linear_to_gamma(color.z), depth),
    ]
}

/// A width x height grid of quantized RGB triples.
///
/// Addressed by `(x, y)` with `x` the column and `y = 0` the top row.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    depth: BitDepth,
    pixels: Vec<[u16; 3]>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32, depth: BitDepth) -> Self {
        Self {
            width,
            height,
            depth,
            pixels: vec![[0; 3]; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bit_depth(&self) -> BitDepth {
        self.depth
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        x as usize * self.height as usize + y as usize
    }

    /// Get the pixel at column `x`, row `y`.
    pub fn get(&self, x: u32, y: u32) -> [u16; 3] {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at column `x`, row `y`.
    pub fn set(&mut self, x: u32, y: u32, rgb: [u16; 3]) {
        let i = self.index(x, y);
        self.pixels[i] = rgb;
    }

    /// One column's pixels, top row first.
    pub fn column(&self, x: u32) -> &[[u16; 3]] {
        let start = self.index(x, 0);
        &self.pixels[start..start + self.height as usize]
    }

    /// Mutable access to the column-major pixel storage, for the render driver.
    pub(crate) fn pixels_mut(&mut self) -> &mut [[u16; 3]] {
        &mut self.pixels
    }
}
