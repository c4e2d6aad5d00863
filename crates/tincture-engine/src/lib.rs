//! Tincture engine crate.
//!
//! This crate owns the CPU raster pieces used by higher layers: geometry,
//! pixel formats, pixel buffers and the drawing surface they are presented on.

pub mod logging;
pub mod coords;
pub mod paint;
pub mod pixels;
pub mod surface;
