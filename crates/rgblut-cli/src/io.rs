//! PNG reading and writing.
//!
//! Images are always loaded as RGBA: gray is expanded to RGB and a missing
//! alpha channel is filled with opaque. 8-bit files load as `u8`, 16-bit as
//! `u16`; palette and low bit depths are expanded to 8-bit by the decoder.

use anyhow::{Context, Result, bail};
use rgblut_core::{BitDepth, Components, ImageBuffer, PixelBuffer, RenderWindow, Sample};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::debug;

/// Reads a PNG as an RGBA buffer at the file's depth.
pub fn read(path: &Path) -> Result<ImageBuffer> {
    let file = File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .with_context(|| format!("Failed to decode: {}", path.display()))?;

    let buf_size = reader
        .output_buffer_size()
        .context("cannot determine output buffer size")?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .with_context(|| format!("Failed to decode: {}", path.display()))?;
    let bytes = &buf[..info.buffer_size()];

    let channels = match info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        other => bail!("unsupported PNG color type {other:?}"),
    };
    let bounds = RenderWindow::from_size(info.width, info.height);
    debug!(path = %path.display(), width = info.width, height = info.height, channels, "Read PNG");

    let image = match info.bit_depth {
        png::BitDepth::Eight => {
            let data = to_rgba(bytes, channels, u8::MAX);
            ImageBuffer::from(PixelBuffer::from_data(bounds, Components::Rgba, data)?)
        }
        png::BitDepth::Sixteen => {
            let samples: Vec<u16> = bytes
                .chunks_exact(2)
                .map(|c| u16::from_be_bytes([c[0], c[1]]))
                .collect();
            let data = to_rgba(&samples, channels, u16::MAX);
            ImageBuffer::from(PixelBuffer::from_data(bounds, Components::Rgba, data)?)
        }
        other => bail!("unsupported PNG bit depth {other:?}"),
    };
    Ok(image)
}

/// Writes an integer RGBA buffer as an 8- or 16-bit PNG.
pub fn write(path: &Path, image: &ImageBuffer) -> Result<()> {
    let bounds = image.bounds();
    let (width, height) = (bounds.width() as u32, bounds.height() as u32);
    if image.layout().components != Components::Rgba {
        bail!("only RGBA images can be written, got {}", image.layout());
    }

    let (depth, bytes) = match image {
        ImageBuffer::U8(buf) => (png::BitDepth::Eight, buf.data().to_vec()),
        ImageBuffer::U16(buf) => (
            png::BitDepth::Sixteen,
            buf.data().iter().flat_map(|v| v.to_be_bytes()).collect(),
        ),
        ImageBuffer::F32(_) => bail!("float images must be quantized before writing"),
    };

    let file = File::create(path).with_context(|| format!("Failed to create: {}", path.display()))?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(depth);
    encoder.set_compression(png::Compression::default());

    let mut writer = encoder
        .write_header()
        .with_context(|| format!("Failed to save: {}", path.display()))?;
    writer
        .write_image_data(&bytes)
        .with_context(|| format!("Failed to save: {}", path.display()))?;
    writer.finish().context("Failed to finish PNG stream")?;

    debug!(path = %path.display(), width, height, ?depth, "Wrote PNG");
    Ok(())
}

/// Converts an integer buffer to normalized float.
pub fn to_float(image: &ImageBuffer) -> ImageBuffer {
    match image {
        ImageBuffer::U8(buf) => normalize(buf),
        ImageBuffer::U16(buf) => normalize(buf),
        ImageBuffer::F32(_) => image.clone(),
    }
}

/// Quantizes a float buffer back to the given integer depth.
///
/// Values are clamped to [0, 1] and rounded to nearest.
pub fn from_float(image: &ImageBuffer, sixteen_bit: bool) -> Result<ImageBuffer> {
    let ImageBuffer::F32(buf) = image else {
        return Ok(image.clone());
    };
    let (bounds, components) = (buf.bounds(), buf.components());
    let quantize = |v: f32, depth: BitDepth| (v.clamp(0.0, 1.0) * depth.max_value() as f32).round();

    let out = if sixteen_bit {
        let data = buf.data().iter().map(|&v| quantize(v, BitDepth::U16) as u16).collect();
        ImageBuffer::from(PixelBuffer::from_data(bounds, components, data)?)
    } else {
        let data = buf.data().iter().map(|&v| quantize(v, BitDepth::U8) as u8).collect();
        ImageBuffer::from(PixelBuffer::from_data(bounds, components, data)?)
    };
    Ok(out)
}

fn normalize<T: Sample>(buf: &PixelBuffer<T>) -> ImageBuffer {
    let max = T::DEPTH.max_value();
    let mut out = PixelBuffer::<f32>::new(buf.bounds(), buf.components());
    for (o, v) in out.data_mut().iter_mut().zip(buf.data()) {
        *o = (v.to_f64() / max) as f32;
    }
    ImageBuffer::from(out)
}

fn to_rgba<T: Copy>(samples: &[T], channels: usize, opaque: T) -> Vec<T> {
    match channels {
        4 => samples.to_vec(),
        3 => samples
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], opaque])
            .collect(),
        2 => samples
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        _ => samples.iter().flat_map(|&g| [g, g, g, opaque]).collect(),
    }
}
