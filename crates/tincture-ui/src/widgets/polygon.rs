use std::f32::consts::{FRAC_PI_2, TAU};

use tincture_engine::coords::{Rect, Vec2};
use tincture_engine::paint::Rgba8;
use tincture_engine::pixels::PixelBuffer;
use tincture_engine::surface::Surface;

use crate::widget::Widget;

/// A filled regular polygon inscribed in a circle of `radius`.
///
/// The first vertex points straight up. The widget's box is `2r × 2r`,
/// with the circle's center in the middle of it.
///
/// # Example
/// ```rust,ignore
/// RegularPolygon::new(6, 24.0).fill(Rgba8::new(40, 120, 220, 255))
/// ```
pub struct RegularPolygon {
    sides: u32,
    radius: f32,
    fill: Rgba8,
}

impl RegularPolygon {
    /// Fewer than three sides is raised to a triangle.
    pub fn new(sides: u32, radius: f32) -> Self {
        Self { sides: sides.max(3), radius: radius.max(0.0), fill: Rgba8::new(128, 128, 128, 255) }
    }

    pub fn fill(mut self, color: Rgba8) -> Self {
        self.fill = color;
        self
    }

    #[inline]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Vertices relative to the top-left of the widget box, clockwise on screen.
    pub fn vertices(&self) -> Vec<Vec2> {
        let c = Vec2::new(self.radius, self.radius);
        (0..self.sides)
            .map(|i| {
                let a = -FRAC_PI_2 + TAU * i as f32 / self.sides as f32;
                c + Vec2::new(self.radius * a.cos(), self.radius * a.sin())
            })
            .collect()
    }

    /// Rasterizes into a fresh `2r × 2r` buffer, sampling each pixel center.
    pub fn rasterize(&self, buf: &mut PixelBuffer) {
        let verts = self.vertices();
        for y in 0..buf.height() {
            for x in 0..buf.width() {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if inside_convex(&verts, p) {
                    buf.put(x, y, self.fill);
                }
            }
        }
    }
}

/// Point-in-convex-polygon: `p` is inside when it lies on the same side of every edge.
fn inside_convex(verts: &[Vec2], p: Vec2) -> bool {
    let mut sign = 0.0f32;
    for (i, &a) in verts.iter().enumerate() {
        let b = verts[(i + 1) % verts.len()];
        let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
        if cross == 0.0 {
            continue;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return false;
        }
    }
    true
}

impl Widget for RegularPolygon {
    fn measure(&self) -> Vec2 {
        Vec2::new(self.radius * 2.0, self.radius * 2.0)
    }

    fn render(&mut self, surface: &mut dyn Surface, rect: Rect) {
        let d = (self.radius * 2.0).ceil() as u32;
        if d == 0 {
            return;
        }
        let mut buf = surface.create_buffer(d, d);
        self.rasterize(&mut buf);
        let (x, y) = rect.origin.to_pixel();
        surface.present(&buf, x as i32, y as i32);
    }
}
