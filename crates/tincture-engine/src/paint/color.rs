use std::fmt;

use bytemuck::{Pod, Zeroable};

/// Opaque 8-bit RGB color, as reported by color pickers.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Rounds and clamps floating channel values into `0..=255`.
    #[inline]
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        Self::new(to_channel(r), to_channel(g), to_channel(b))
    }

    /// Fully opaque pixel of this color.
    #[inline]
    pub const fn opaque(self) -> Rgba8 {
        Rgba8::new(self.r, self.g, self.b, 255)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// One stored pixel: straight-alpha RGBA, one byte per channel.
///
/// Layout matches the byte order of [`PixelBuffer`](crate::pixels::PixelBuffer)
/// so buffers can be viewed as `&[Rgba8]` without copying.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    #[inline]
    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

impl From<Rgb> for Rgba8 {
    #[inline]
    fn from(c: Rgb) -> Self {
        c.opaque()
    }
}

#[inline]
fn to_channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Lightens a base color toward white.
///
/// `intensity` runs from `1.0` (the base color) to `2.0` (white); each channel
/// becomes `c + (255 - c) * (intensity - 1)`.
pub fn lit_rgb(r: f64, g: f64, b: f64, intensity: f64) -> Rgb {
    let t = intensity - 1.0;
    Rgb::from_f64(r + (255.0 - r) * t, g + (255.0 - g) * t, b + (255.0 - b) * t)
}

/// Darkens a base color toward black.
///
/// `intensity` runs from `0.0` (black) to `1.0` (the base color).
pub fn darken_rgb(r: f64, g: f64, b: f64, intensity: f64) -> Rgb {
    Rgb::from_f64(r * intensity, g * intensity, b * intensity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lit_full_intensity_is_white() {
        assert_eq!(lit_rgb(250.0, 0.0, 0.0, 2.0), Rgb::white());
    }

    #[test]
    fn lit_unit_intensity_is_base() {
        assert_eq!(lit_rgb(200.0, 100.0, 0.0, 1.0), Rgb::new(200, 100, 0));
    }

    #[test]
    fn lit_halfway() {
        // 0 + 255 * 0.5 = 127.5 rounds up.
        assert_eq!(lit_rgb(255.0, 0.0, 0.0, 1.5), Rgb::new(255, 128, 128));
    }

    #[test]
    fn darken_zero_is_black() {
        assert_eq!(darken_rgb(250.0, 0.0, 0.0, 0.0), Rgb::black());
    }

    #[test]
    fn darken_scales_channels() {
        assert_eq!(darken_rgb(200.0, 100.0, 50.0, 0.5), Rgb::new(100, 50, 25));
    }

    #[test]
    fn blends_clamp_out_of_range_input() {
        assert_eq!(lit_rgb(300.0, -20.0, 0.0, 1.0), Rgb::new(255, 0, 0));
        assert_eq!(darken_rgb(255.0, 255.0, 255.0, 1.5), Rgb::white());
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Rgb::new(255, 16, 0).to_string(), "#ff1000");
    }

    #[test]
    fn rgba8_is_four_bytes() {
        assert_eq!(std::mem::size_of::<Rgba8>(), 4);
        let px = Rgba8::new(1, 2, 3, 4);
        assert_eq!(bytemuck::bytes_of(&px), &[1, 2, 3, 4]);
    }
}
