use std::path::Path;

use anyhow::{Context, Result};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::paint::Rgba8;
use crate::pixels::PixelBuffer;

use super::Surface;

/// In-memory framebuffer.
///
/// `present` overwrites destination pixels with every source pixel whose
/// alpha is non-zero; fully transparent source pixels leave the destination
/// untouched.
#[derive(Debug, Clone)]
pub struct CpuSurface {
    frame: PixelBuffer,
}

impl CpuSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { frame: PixelBuffer::new(width, height) }
    }

    /// The composed frame.
    #[inline]
    pub fn frame(&self) -> &PixelBuffer {
        &self.frame
    }

    pub fn clear(&mut self, px: Rgba8) {
        self.frame.fill(px);
    }

    /// Encodes the frame as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        PngEncoder::new(&mut out)
            .write_image(
                self.frame.as_bytes(),
                self.frame.width(),
                self.frame.height(),
                ExtendedColorType::Rgba8,
            )
            .context("failed to encode frame as PNG")?;
        Ok(out)
    }

    /// Writes the frame to `path` as PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        anyhow::ensure!(!self.frame.is_empty(), "surface has zero size");
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::debug!("wrote {}x{} frame to {}", self.frame.width(), self.frame.height(), path.display());
        Ok(())
    }
}

impl Surface for CpuSurface {
    fn size(&self) -> (u32, u32) {
        (self.frame.width(), self.frame.height())
    }

    fn present(&mut self, buffer: &PixelBuffer, x: i32, y: i32) {
        let (fw, fh) = (self.frame.width() as i64, self.frame.height() as i64);
        let (x, y) = (x as i64, y as i64);

        // Visible source window after clipping against the frame edges.
        let sx0 = (-x).max(0);
        let sy0 = (-y).max(0);
        let sx1 = (buffer.width() as i64).min(fw - x);
        let sy1 = (buffer.height() as i64).min(fh - y);
        if sx0 >= sx1 || sy0 >= sy1 {
            return;
        }

        let fw = fw as usize;
        let dst = self.frame.pixels_mut();
        for sy in sy0..sy1 {
            let src_row = buffer.row(sy as u32);
            let dy = (sy + y) as usize;
            for sx in sx0..sx1 {
                let px = src_row[sx as usize];
                if px.a == 0 {
                    continue;
                }
                dst[dy * fw + (sx + x) as usize] = px;
            }
        }
    }
}
