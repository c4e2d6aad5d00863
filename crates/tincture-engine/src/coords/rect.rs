use super::Vec2;

/// Axis-aligned rectangle in surface pixels (top-left origin).
///
/// Widgets receive their rect in absolute coordinates, so `origin` is the
/// absolute position of the widget on the surface.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Same size, origin moved by `offset`.
    #[inline]
    pub fn translate(self, offset: Vec2) -> Self {
        Rect::from_origin_size(self.origin + offset, self.size)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < max.x && p.y < max.y
    }

    /// Size rounded to whole pixels.
    ///
    /// Returns `None` when either axis is negative or not finite.
    #[inline]
    pub fn pixel_size(self) -> Option<(u32, u32)> {
        let w = self.size.x.round();
        let h = self.size.y.round();
        if !(w.is_finite() && h.is_finite()) || w < 0.0 || h < 0.0 {
            return None;
        }
        Some((w as u32, h as u32))
    }
}
