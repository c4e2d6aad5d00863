//! Drawing surfaces.
//!
//! Widgets never write to the surface directly: they fill an offscreen
//! [`PixelBuffer`] obtained from [`Surface::create_buffer`] and hand it back
//! through [`Surface::present`].

mod cpu;

pub use cpu::CpuSurface;

use crate::pixels::PixelBuffer;

/// A 2D target that accepts pixel buffers at integer positions.
pub trait Surface {
    /// Surface size in pixels.
    fn size(&self) -> (u32, u32);

    /// Allocates a transparent buffer compatible with this surface.
    fn create_buffer(&self, width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::new(width, height)
    }

    /// Copies `buffer` with its top-left corner at `(x, y)`.
    ///
    /// Parts falling outside the surface are clipped.
    fn present(&mut self, buffer: &PixelBuffer, x: i32, y: i32);
}
