//! Pixel color model shared between the raster surface and widgets.
//!
//! Scope:
//! - 8-bit color representations (`Rgb` for reported colors, `Rgba8` for stored pixels)
//! - lighten / darken blends used by gradient painters
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::{darken_rgb, lit_rgb, Rgb, Rgba8};
