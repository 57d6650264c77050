pub mod shape;

use std::io::Cursor;
use std::path::Path;

use image::{ImageOutputFormat, Rgba, RgbaImage};

use crate::error::{IconError, Result};

pub use shape::{BoundingBox, Ellipse, Ring, RoundedRect, Shape};

/// Sub-samples per pixel along each axis.
const SUPERSAMPLE: u32 = 4;

/// Straight-alpha RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let invalid = || IconError::InvalidColor(s.to_string());
        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.is_ascii() || !matches!(digits.len(), 6 | 8) {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        let alpha = if digits.len() == 8 { byte(6)? } else { 0xFF };
        Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, alpha))
    }
}

impl From<Rgba<u8>> for Color {
    fn from(p: Rgba<u8>) -> Self {
        let [r, g, b, a] = p.0;
        Self { r, g, b, a }
    }
}

impl From<Color> for Rgba<u8> {
    fn from(c: Color) -> Self {
        Rgba([c.r, c.g, c.b, c.a])
    }
}

/// An in-memory RGBA pixel buffer, transparent on creation.
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(IconError::EmptyCanvas { width, height });
        }
        Ok(Self {
            image: RgbaImage::from_pixel(width, height, Color::TRANSPARENT.into()),
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Colour at `(x, y)`. Panics if out of bounds, like `RgbaImage::get_pixel`.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        (*self.image.get_pixel(x, y)).into()
    }

    /// Rasterise `shape` in `color`, compositing source-over.
    ///
    /// Each pixel is sampled on a regular 4x4 grid and the colour's alpha is
    /// scaled by the fraction of samples inside the shape.
    pub fn fill(&mut self, shape: &impl Shape, color: Color) {
        let b = shape.bounds();
        let x_start = b.left.max(0) as u32;
        let y_start = b.top.max(0) as u32;
        let x_end = (b.right.max(-1) + 1).min(self.width() as i32) as u32;
        let y_end = (b.bottom.max(-1) + 1).min(self.height() as i32) as u32;

        let total = SUPERSAMPLE * SUPERSAMPLE;
        let step = 1.0 / SUPERSAMPLE as f32;

        for y in y_start..y_end {
            for x in x_start..x_end {
                let mut hits = 0;
                for sy in 0..SUPERSAMPLE {
                    for sx in 0..SUPERSAMPLE {
                        let px = x as f32 + (sx as f32 + 0.5) * step;
                        let py = y as f32 + (sy as f32 + 0.5) * step;
                        if shape.contains(px, py) {
                            hits += 1;
                        }
                    }
                }
                if hits == 0 {
                    continue;
                }
                let coverage = hits as f32 / total as f32;
                let dst = self.pixel(x, y);
                self.image.put_pixel(x, y, blend(dst, color, coverage).into());
            }
        }
    }

    /// Encode as PNG into memory.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.image.write_to(&mut buf, ImageOutputFormat::Png)?;
        Ok(buf.into_inner())
    }

    /// Write as PNG to `path`, replacing any existing file.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes).map_err(|source| IconError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Source-over compositing in straight alpha.
fn blend(dst: Color, src: Color, coverage: f32) -> Color {
    let sa = src.a as f32 / 255.0 * coverage;
    let da = dst.a as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Color::TRANSPARENT;
    }
    let channel = |s: u8, d: u8| {
        let v = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
        v.round().clamp(0.0, 255.0) as u8
    };
    Color::rgba(
        channel(src.r, dst.r),
        channel(src.g, dst.g),
        channel(src.b, dst.b),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    )
}
