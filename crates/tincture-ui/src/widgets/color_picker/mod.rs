//! Color picker widget.
//!
//! The picker paints a gradient swatch (see [`Swatch`]) into its own pixel
//! buffer on every render and answers pointer queries by reading that buffer
//! back: hovering reports the color under the pointer through
//! `on_over_color`, clicking or releasing over it reports through
//! `on_click_color`.

mod error;
mod ramp;
mod sample;
mod swatch;

pub use error::SwatchError;
pub use ramp::{Channel, Direction, HueRamp, RampStep, STEPS};
pub use sample::color_at;
pub use swatch::{paint_swatch, Swatch, SwatchLayout};

use tincture_engine::coords::{Rect, Vec2};
use tincture_engine::paint::Rgb;
use tincture_engine::pixels::PixelBuffer;
use tincture_engine::surface::Surface;

use crate::event::{EventResult, UiEvent};
use crate::widget::Widget;

/// A hue / lightness color picker.
///
/// # Example
/// ```rust,ignore
/// ColorPicker::new(200.0, 120.0)
///     .on_over_color(|c| println!("hover {c}"))
///     .on_click_color(|c| println!("picked {c}"))
/// ```
pub struct ColorPicker {
    size: Vec2,
    swatch: Swatch,
    /// Buffer from the last paint; sized to the rect it was painted for.
    painted: PixelBuffer,
    on_over_color: Option<Box<dyn FnMut(Rgb)>>,
    on_click_color: Option<Box<dyn FnMut(Rgb)>>,
}

impl ColorPicker {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            swatch: Swatch::default(),
            painted: PixelBuffer::empty(),
            on_over_color: None,
            on_click_color: None,
        }
    }

    pub fn layout(mut self, layout: SwatchLayout) -> Self {
        self.swatch = Swatch::new(layout);
        self
    }

    /// Callback invoked with the color under the pointer while hovering.
    pub fn on_over_color(mut self, f: impl FnMut(Rgb) + 'static) -> Self {
        self.on_over_color = Some(Box::new(f));
        self
    }

    /// Callback invoked with the color under the pointer on click or release.
    pub fn on_click_color(mut self, f: impl FnMut(Rgb) + 'static) -> Self {
        self.on_click_color = Some(Box::new(f));
        self
    }

    /// Changes the natural size. The swatch is repainted on the next render
    /// or pointer event.
    pub fn resize_to(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// The last painted swatch; empty before the first paint.
    #[inline]
    pub fn swatch(&self) -> &PixelBuffer {
        &self.painted
    }

    /// Color under `absolute`, for a swatch whose top-left is at `origin`.
    pub fn color_at(&self, absolute: Vec2, origin: Vec2) -> Result<Rgb, SwatchError> {
        color_at(&self.painted, absolute, origin)
    }

    fn dimensions(rect: Rect) -> Result<(u32, u32), SwatchError> {
        rect.pixel_size().ok_or(SwatchError::InvalidDimension {
            width: rect.size.x,
            height: rect.size.y,
        })
    }

    fn is_stale(&self, dims: (u32, u32)) -> bool {
        (self.painted.width(), self.painted.height()) != dims
    }

    /// Repaints into `buf` when the rect is usable; otherwise leaves an empty swatch.
    fn repaint(&mut self, rect: Rect, alloc: impl FnOnce(u32, u32) -> PixelBuffer) {
        match Self::dimensions(rect) {
            Ok((w, h)) => {
                let mut buf = alloc(w, h);
                self.swatch.paint_into(&mut buf);
                log::debug!("color picker: painted {w}x{h} swatch");
                self.painted = buf;
            }
            Err(e) => {
                log::debug!("color picker: {e}; painting nothing");
                self.painted = PixelBuffer::empty();
            }
        }
    }

    /// Guarantees the buffer matches `rect` before it is sampled.
    fn ensure_fresh(&mut self, rect: Rect) {
        let fresh = Self::dimensions(rect).is_ok_and(|dims| !self.is_stale(dims));
        if !fresh {
            self.repaint(rect, PixelBuffer::new);
        }
    }
}

impl Widget for ColorPicker {
    fn measure(&self) -> Vec2 {
        self.size
    }

    fn render(&mut self, surface: &mut dyn Surface, rect: Rect) {
        self.repaint(rect, |w, h| surface.create_buffer(w, h));
        if self.painted.is_empty() {
            return;
        }
        let (x, y) = rect.origin.to_pixel();
        surface.present(&self.painted, x as i32, y as i32);
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        if !rect.contains(event.pos()) {
            return EventResult::Ignored;
        }
        self.ensure_fresh(rect);

        let slot = match event {
            UiEvent::Hover { .. } => &mut self.on_over_color,
            UiEvent::Click { .. } | UiEvent::Release { .. } => &mut self.on_click_color,
        };
        let Some(callback) = slot else {
            return EventResult::Consumed;
        };

        match color_at(&self.painted, event.pos(), rect.origin) {
            Ok(rgb) => {
                log::trace!("color picker: {event:?} -> {rgb}");
                callback(rgb);
            }
            Err(e) => log::debug!("color picker: {e}"),
        }
        EventResult::Consumed
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use tincture_engine::surface::CpuSurface;

    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<Rgb>>>, impl FnMut(Rgb) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        (log, move |c| sink.borrow_mut().push(c))
    }

    #[test]
    fn render_presents_swatch_at_origin() {
        let mut surface = CpuSurface::new(60, 30);
        let mut picker = ColorPicker::new(40.0, 20.0);
        picker.render(&mut surface, Rect::new(10.0, 5.0, 40.0, 20.0));

        assert_eq!(picker.swatch(), &paint_swatch(40, 20));
        assert_eq!(surface.frame().get(10, 5), picker.swatch().get(0, 0));
        assert_eq!(surface.frame().get(49, 24), picker.swatch().get(39, 19));
        assert_eq!(surface.frame().get(9, 5).map(|p| p.a), Some(0));
    }

    #[test]
    fn hover_reports_color_under_pointer() {
        let (seen, sink) = recorder();
        let mut picker = ColorPicker::new(100.0, 10.0).on_over_color(sink);
        let rect = Rect::new(20.0, 20.0, 100.0, 10.0);
        picker.render(&mut CpuSurface::new(200, 50), rect);

        let res = picker.on_event(&UiEvent::Hover { pos: Vec2::new(30.0, 25.0) }, rect);
        assert!(res.is_consumed());
        assert_eq!(seen.borrow().as_slice(), &[Rgb::new(255, 0, 0)]);
    }

    #[test]
    fn click_and_release_report_through_click_callback() {
        let (clicked, sink) = recorder();
        let (hovered, over) = recorder();
        let mut picker = ColorPicker::new(100.0, 10.0).on_click_color(sink).on_over_color(over);
        let rect = Rect::new(0.0, 0.0, 100.0, 10.0);
        picker.render(&mut CpuSurface::new(100, 10), rect);

        picker.on_event(&UiEvent::Click { pos: Vec2::new(0.0, 0.0) }, rect);
        picker.on_event(&UiEvent::Release { pos: Vec2::new(0.0, 0.0) }, rect);
        assert_eq!(clicked.borrow().as_slice(), &[Rgb::white(), Rgb::white()]);
        assert!(hovered.borrow().is_empty());
    }

    #[test]
    fn events_outside_are_ignored() {
        let (seen, sink) = recorder();
        let mut picker = ColorPicker::new(10.0, 10.0).on_click_color(sink);
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let res = picker.on_event(&UiEvent::Click { pos: Vec2::new(20.0, 5.0) }, rect);
        assert_eq!(res, EventResult::Ignored);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn no_callback_is_noop() {
        let mut picker = ColorPicker::new(10.0, 10.0);
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let res = picker.on_event(&UiEvent::Hover { pos: Vec2::new(1.0, 1.0) }, rect);
        assert!(res.is_consumed());
    }

    #[test]
    fn sampling_before_paint_fails() {
        let picker = ColorPicker::new(10.0, 10.0);
        let err = picker.color_at(Vec2::new(1.0, 1.0), Vec2::zero()).unwrap_err();
        assert!(matches!(err, SwatchError::OutOfRangeSample { .. }));
    }

    #[test]
    fn event_before_render_paints_first() {
        let (seen, sink) = recorder();
        let mut picker = ColorPicker::new(100.0, 10.0).on_over_color(sink);
        let rect = Rect::new(0.0, 0.0, 100.0, 10.0);
        picker.on_event(&UiEvent::Hover { pos: Vec2::new(10.0, 5.0) }, rect);
        assert_eq!(seen.borrow().as_slice(), &[Rgb::new(255, 0, 0)]);
    }

    #[test]
    fn stale_swatch_is_repainted_before_sampling() {
        let mut picker = ColorPicker::new(100.0, 10.0);
        picker.render(&mut CpuSurface::new(100, 10), Rect::new(0.0, 0.0, 100.0, 10.0));
        picker.resize_to(50.0, 20.0);

        let rect = Rect::new(0.0, 0.0, 50.0, 20.0);
        picker.on_event(&UiEvent::Hover { pos: Vec2::new(1.0, 1.0) }, rect);
        assert_eq!(picker.swatch(), &paint_swatch(50, 20));
    }

    #[test]
    fn invalid_rect_paints_nothing() {
        let mut surface = CpuSurface::new(10, 10);
        let mut picker = ColorPicker::new(10.0, 10.0);
        picker.render(&mut surface, Rect::new(0.0, 0.0, -5.0, 10.0));
        assert!(picker.swatch().is_empty());
        assert!(surface.frame().pixels().iter().all(|p| p.a == 0));
    }

    #[test]
    fn custom_layout_widens_gray_column() {
        let layout = SwatchLayout { gray_ratio: 0.5, gray_max_width: 100.0 };
        let mut picker = ColorPicker::new(40.0, 10.0).layout(layout);
        picker.render(&mut CpuSurface::new(40, 10), Rect::new(0.0, 0.0, 40.0, 10.0));
        let px = picker.swatch().get(19, 5).unwrap();
        assert_eq!((px.r, px.g, px.b), (px.r, px.r, px.r));
    }
}
