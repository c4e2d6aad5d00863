//! Offscreen pixel storage.

mod buffer;

pub use buffer::{PixelBuffer, BYTES_PER_PIXEL};
