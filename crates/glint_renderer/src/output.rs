//! Image sinks: where rendered pixels go.
//!
//! The renderer streams linear colors in raster order into an [`ImageSink`].
//! Sinks own encoding (gamma, clamp, quantize) and serialization.

use crate::renderer::color_to_rgb;
use glint_math::Color;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Expected {expected} pixels, got {actual}")]
    PixelCount { expected: usize, actual: usize },

    #[error("Pixel written before the image header")]
    NotStarted,
}

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Consumer of a rendered image, one pixel at a time.
///
/// Pixels arrive row-major, top-to-bottom, left-to-right.
pub trait ImageSink {
    /// Called once before any pixel with the resolved dimensions.
    fn begin(&mut self, width: u32, height: u32) -> OutputResult<()>;

    /// Accept the next pixel's linear color.
    fn write_pixel(&mut self, color: Color) -> OutputResult<()>;

    /// Called once after the last pixel.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Tracks the announced pixel count against what actually arrived.
#[derive(Debug, Clone, Default)]
struct PixelCounter {
    expected: Option<usize>,
    written: usize,
}

impl PixelCounter {
    fn begin(&mut self, width: u32, height: u32) {
        self.expected = Some(width as usize * height as usize);
        self.written = 0;
    }

    fn record(&mut self) -> OutputResult<()> {
        let expected = self.expected.ok_or(OutputError::NotStarted)?;
        if self.written >= expected {
            return Err(OutputError::PixelCount {
                expected,
                actual: self.written + 1,
            });
        }
        self.written += 1;
        Ok(())
    }

    fn finish(&self) -> OutputResult<()> {
        let expected = self.expected.ok_or(OutputError::NotStarted)?;
        if self.written != expected {
            return Err(OutputError::PixelCount {
                expected,
                actual: self.written,
            });
        }
        Ok(())
    }
}

/// Plain-text PPM (`P3`) writer.
///
/// Header is the magic token, dimensions and max value, followed by one
/// `r g b` triplet per line.
pub struct PpmWriter<W: Write> {
    writer: W,
    counter: PixelCounter,
}

impl<W: Write> PpmWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            counter: PixelCounter::default(),
        }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ImageSink for PpmWriter<W> {
    fn begin(&mut self, width: u32, height: u32) -> OutputResult<()> {
        self.counter.begin(width, height);
        writeln!(self.writer, "P3")?;
        writeln!(self.writer, "{} {}", width, height)?;
        writeln!(self.writer, "255")?;
        Ok(())
    }

    fn write_pixel(&mut self, color: Color) -> OutputResult<()> {
        self.counter.record()?;
        let [r, g, b] = color_to_rgb(color);
        writeln!(self.writer, "{} {} {}", r, g, b)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.counter.finish()?;
        self.writer.flush()?;
        Ok(())
    }
}

/// In-memory image of linear colors.
#[derive(Debug, Clone, Default)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
    counter: PixelCounter,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
            counter: PixelCounter::default(),
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Gamma-encoded 8-bit RGB bytes, row-major.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| color_to_rgb(*c)).collect()
    }

    /// Write the image through another sink, e.g. a [`PpmWriter`].
    pub fn write_to(&self, sink: &mut dyn ImageSink) -> OutputResult<()> {
        sink.begin(self.width, self.height)?;
        for color in &self.pixels {
            sink.write_pixel(*color)?;
        }
        sink.finish()
    }

    /// Save as PNG (format chosen by the path's extension).
    pub fn save(&self, path: impl AsRef<Path>) -> OutputResult<()> {
        let image = image::RgbImage::from_raw(self.width, self.height, self.to_rgb8()).ok_or(
            OutputError::PixelCount {
                expected: self.width as usize * self.height as usize,
                actual: self.pixels.len(),
            },
        )?;
        image.save(path)?;
        Ok(())
    }
}

impl ImageSink for ImageBuffer {
    fn begin(&mut self, width: u32, height: u32) -> OutputResult<()> {
        self.counter.begin(width, height);
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.reserve(width as usize * height as usize);
        Ok(())
    }

    fn write_pixel(&mut self, color: Color) -> OutputResult<()> {
        self.counter.record()?;
        self.pixels.push(color);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.counter.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ppm_format() {
        let mut ppm = PpmWriter::new(Vec::new());
        ppm.begin(2, 1).unwrap();
        ppm.write_pixel(Color::ONE).unwrap();
        ppm.write_pixel(Color::new(0.25, 0.0, -1.0)).unwrap();
        ppm.finish().unwrap();

        let text = String::from_utf8(ppm.into_inner()).unwrap();
        assert_eq!(text, "P3\n2 1\n255\n255 255 255\n128 0 0\n");
    }

    #[test]
    fn test_ppm_rejects_extra_pixels() {
        let mut ppm = PpmWriter::new(Vec::new());
        ppm.begin(1, 1).unwrap();
        ppm.write_pixel(Color::ZERO).unwrap();

        let err = ppm.write_pixel(Color::ZERO).unwrap_err();
        assert!(matches!(
            err,
            OutputError::PixelCount {
                expected: 1,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_ppm_rejects_short_image() {
        let mut ppm = PpmWriter::new(Vec::new());
        ppm.begin(2, 2).unwrap();
        ppm.write_pixel(Color::ZERO).unwrap();
        assert!(matches!(
            ppm.finish(),
            Err(OutputError::PixelCount {
                expected: 4,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_ppm_requires_begin() {
        let mut ppm = PpmWriter::new(Vec::new());
        assert!(matches!(
            ppm.write_pixel(Color::ZERO),
            Err(OutputError::NotStarted)
        ));
    }

    #[test]
    fn test_image_buffer_collects_raster_order() {
        let mut buffer = ImageBuffer::default();
        buffer.begin(2, 2).unwrap();
        for i in 0..4 {
            buffer.write_pixel(Color::splat(i as f32)).unwrap();
        }
        buffer.finish().unwrap();

        assert_eq!(buffer.get(1, 0), Color::splat(1.0));
        assert_eq!(buffer.get(0, 1), Color::splat(2.0));
    }

    #[test]
    fn test_image_buffer_requires_begin() {
        let mut buffer = ImageBuffer::default();
        assert!(matches!(
            buffer.write_pixel(Color::ZERO),
            Err(OutputError::NotStarted)
        ));
        assert!(buffer.pixels.is_empty());
    }

    #[test]
    fn test_image_buffer_rejects_extra_pixels() {
        let mut buffer = ImageBuffer::default();
        buffer.begin(1, 1).unwrap();
        buffer.write_pixel(Color::ONE).unwrap();

        let err = buffer.write_pixel(Color::ZERO).unwrap_err();
        assert!(matches!(
            err,
            OutputError::PixelCount {
                expected: 1,
                actual: 2
            }
        ));
        assert_eq!(buffer.pixels, vec![Color::ONE]);
    }

    #[test]
    fn test_image_buffer_rejects_short_image() {
        let mut buffer = ImageBuffer::default();
        buffer.begin(2, 1).unwrap();
        buffer.write_pixel(Color::ZERO).unwrap();
        assert!(matches!(
            buffer.finish(),
            Err(OutputError::PixelCount {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_image_buffer_replays_into_ppm() {
        let mut buffer = ImageBuffer::new(1, 2);
        buffer.set(0, 1, Color::ONE);

        let mut ppm = PpmWriter::new(Vec::new());
        buffer.write_to(&mut ppm).unwrap();

        let text = String::from_utf8(ppm.into_inner()).unwrap();
        assert_eq!(text, "P3\n1 2\n255\n0 0 0\n255 255 255\n");
    }

    #[test]
    fn test_to_rgb8() {
        let mut buffer = ImageBuffer::new(2, 1);
        buffer.set(0, 0, Color::new(1.0, 0.0, 0.25));
        assert_eq!(buffer.to_rgb8(), vec![255, 0, 128, 0, 0, 0]);
    }
}
