//! Image file output.
//!
//! Converts a finished [`Framebuffer`] into an `image` buffer at its bit
//! depth and writes it out. The format is picked from the file extension.

use crate::error::{RenderError, RenderResult};
use crate::framebuffer::{BitDepth, Framebuffer};
use image::codecs::pnm::{PixmapHeader, PnmHeader, SampleEncoding};
use image::{ImageBuffer, ImageFormat, Rgb};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Convert to a 16-bit RGB image buffer.
///
/// 8-bit framebuffers are widened so that 255 maps to 65535.
pub fn to_rgb16(framebuffer: &Framebuffer) -> ImageBuffer<Rgb<u16>, Vec<u16>> {
    let scale = match framebuffer.bit_depth() {
        BitDepth::Eight => 257,
        BitDepth::Sixteen => 1,
    };
    ImageBuffer::from_fn(framebuffer.width(), framebuffer.height(), |x, y| {
        Rgb(framebuffer.get(x, y).map(|c| c * scale))
    })
}

/// Convert to an 8-bit RGB image buffer.
///
/// 16-bit framebuffers keep their high byte.
pub fn to_rgb8(framebuffer: &Framebuffer) -> ImageBuffer<Rgb<u8>, Vec<u8>> {
    let shift = match framebuffer.bit_depth() {
        BitDepth::Eight => 0,
        BitDepth::Sixteen => 8,
    };
    ImageBuffer::from_fn(framebuffer.width(), framebuffer.height(), |x, y| {
        Rgb(framebuffer.get(x, y).map(|c| (c >> shift) as u8))
    })
}

/// Write a binary PPM (P6) with `maxval` set from the bit depth.
///
/// The `image` PPM encoder only takes 8-bit RGB, so samples are written
/// directly: one byte each at 8 bits, big-endian pairs at 16 bits.
pub fn write_ppm(framebuffer: &Framebuffer, writer: &mut impl Write) -> RenderResult<()> {
    let depth = framebuffer.bit_depth();
    let header = PnmHeader::from(PixmapHeader {
        encoding: SampleEncoding::Binary,
        width: framebuffer.width(),
        height: framebuffer.height(),
        maxval: u32::from(depth.max_value()),
    });
    header.write(writer)?;

    for y in 0..framebuffer.height() {
        for x in 0..framebuffer.width() {
            for sample in framebuffer.get(x, y) {
                match depth {
                    BitDepth::Eight => writer.write_all(&[sample as u8])?,
                    BitDepth::Sixteen => writer.write_all(&sample.to_be_bytes())?,
                }
            }
        }
    }
    writer.flush()?;
    Ok(())
}

/// Save a framebuffer to `path`.
///
/// Supports `.png` and `.ppm`, written at the framebuffer's bit depth.
pub fn save_framebuffer(framebuffer: &Framebuffer, path: impl AsRef<Path>) -> RenderResult<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match (ImageFormat::from_path(path), extension.as_str()) {
        (Ok(ImageFormat::Png), _) => match framebuffer.bit_depth() {
            BitDepth::Eight => to_rgb8(framebuffer).save_with_format(path, ImageFormat::Png)?,
            BitDepth::Sixteen => to_rgb16(framebuffer).save_with_format(path, ImageFormat::Png)?,
        },
        (Ok(ImageFormat::Pnm), "ppm") => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_ppm(framebuffer, &mut writer)?;
        }
        _ => return Err(RenderError::UnsupportedFormat(extension)),
    }

    log::info!(
        "Saved {}x{} {}-bit image to {}",
        framebuffer.width(),
        framebuffer.height(),
        framebuffer.bit_depth().bits(),
        path.display()
    );
    Ok(())
}
