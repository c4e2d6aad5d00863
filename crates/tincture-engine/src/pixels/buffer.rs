use crate::paint::Rgba8;

/// Bytes per stored pixel (R, G, B, A).
pub const BYTES_PER_PIXEL: usize = 4;

/// Row-major RGBA8 pixel grid.
///
/// Invariant: `data.len() == width * height * 4`. A new buffer is fully
/// transparent black. Zero-sized buffers are valid and hold no bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * BYTES_PER_PIXEL;
        Self { width, height, data: vec![0; len] }
    }

    /// A `0 × 0` buffer.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw RGBA bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Typed view over the same memory.
    #[inline]
    pub fn pixels(&self) -> &[Rgba8] {
        bytemuck::cast_slice(&self.data)
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba8] {
        bytemuck::cast_slice_mut(&mut self.data)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Byte offset of pixel `(x, y)`: `((width * y) + x) * 4`.
    ///
    /// Returns `None` when the coordinate lies outside `[0, width) × [0, height)`.
    #[inline]
    pub fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(((self.width as usize * y as usize) + x as usize) * BYTES_PER_PIXEL)
    }

    #[inline]
    pub fn get(&self, x: i64, y: i64) -> Option<Rgba8> {
        self.index_of(x, y).map(|i| {
            Rgba8::new(self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3])
        })
    }

    /// Writes one pixel. Out-of-bounds writes are dropped.
    #[inline]
    pub fn put(&mut self, x: u32, y: u32, px: Rgba8) {
        if let Some(i) = self.index_of(x as i64, y as i64) {
            self.data[i..i + BYTES_PER_PIXEL].copy_from_slice(bytemuck::bytes_of(&px));
        }
    }

    pub fn fill(&mut self, px: Rgba8) {
        self.pixels_mut().fill(px);
    }

    /// One row of pixels.
    #[inline]
    pub fn row(&self, y: u32) -> &[Rgba8] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.pixels()[start..start + w]
    }
}
