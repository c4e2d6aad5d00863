use tincture_engine::paint::{darken_rgb, lit_rgb, Rgb};
use tincture_engine::pixels::PixelBuffer;

use super::ramp::HueRamp;

/// Geometry of the grayscale column on the left of the swatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwatchLayout {
    /// Fraction of the swatch width given to the grayscale column.
    pub gray_ratio: f64,
    /// Upper bound on the grayscale column width, in pixels.
    pub gray_max_width: f64,
}

impl Default for SwatchLayout {
    fn default() -> Self {
        Self { gray_ratio: 0.1, gray_max_width: 20.0 }
    }
}

impl SwatchLayout {
    /// `round(min(width * gray_ratio, gray_max_width))`, never wider than the swatch.
    pub fn gray_width(&self, width: u32) -> u32 {
        let w = (width as f64 * self.gray_ratio).min(self.gray_max_width).round();
        w.clamp(0.0, width as f64) as u32
    }
}

/// Paints the color picker swatch.
///
/// The swatch has two parts:
/// - a grayscale column, white at the top to black at the bottom;
/// - the hue sweep, one column per [`HueRamp`] step. Each column goes from
///   white at the top through the ramp color at mid height to black.
///
/// Columns left over once the ramp is done stay transparent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Swatch {
    pub layout: SwatchLayout,
}

impl Swatch {
    pub fn new(layout: SwatchLayout) -> Self {
        Self { layout }
    }

    /// Allocates a `width × height` buffer and paints into it.
    ///
    /// Zero-sized input yields an empty buffer.
    pub fn paint(&self, width: u32, height: u32) -> PixelBuffer {
        let mut buf = PixelBuffer::new(width, height);
        self.paint_into(&mut buf);
        buf
    }

    /// Paints over the whole of `buf`, using its dimensions.
    pub fn paint_into(&self, buf: &mut PixelBuffer) {
        if buf.is_empty() {
            return;
        }
        let (width, height) = (buf.width(), buf.height());
        let gray_width = self.layout.gray_width(width);
        let h = height as f64;

        for y in 0..height {
            let i = 1.0 - y as f64 / h;
            let px = Rgb::from_f64(255.0 * i, 255.0 * i, 255.0 * i).opaque();
            for x in 0..gray_width {
                buf.put(x, y, px);
            }
        }

        let half_h = h / 2.0;
        let mut ramp = HueRamp::new((width - gray_width) as f64);
        for x in gray_width..width {
            if ramp.is_done() {
                break;
            }
            let [r, g, b] = ramp.color();
            for y in 0..height {
                let y = y as f64;
                let c = if y < half_h {
                    lit_rgb(r, g, b, 2.0 - y / half_h)
                } else {
                    darken_rgb(r, g, b, 1.0 - (y - half_h) / half_h)
                };
                buf.put(x, y as u32, c.opaque());
            }
            ramp.advance();
        }
    }
}

/// Paints a swatch with the default layout.
pub fn paint_swatch(width: u32, height: u32) -> PixelBuffer {
    Swatch::default().paint(width, height)
}
