use tincture_engine::coords::{Rect, Vec2};
use tincture_engine::surface::Surface;

use crate::event::{EventResult, UiEvent};

// ── Widget trait ──────────────────────────────────────────────────────────

/// The core trait every drawable node implements.
///
/// The tree hands each widget its rect in absolute surface coordinates, so
/// `rect.origin` is the widget's absolute position.
///
/// # Implementing a custom widget
///
/// ```rust,ignore
/// use tincture_ui::prelude::*;
///
/// pub struct Dot { color: Rgba8 }
///
/// impl Widget for Dot {
///     fn measure(&self) -> Vec2 {
///         Vec2::new(1.0, 1.0)
///     }
///     fn render(&mut self, surface: &mut dyn Surface, rect: Rect) {
///         let mut buf = surface.create_buffer(1, 1);
///         buf.put(0, 0, self.color);
///         let (x, y) = rect.origin.to_pixel();
///         surface.present(&buf, x as i32, y as i32);
///     }
/// }
/// ```
pub trait Widget: 'static {
    /// Natural size of this widget in pixels.
    fn measure(&self) -> Vec2;

    /// Draw this widget onto `surface` within `rect`.
    ///
    /// Takes `&mut self` so widgets can retain what they rasterized
    /// (the color picker samples its last painted swatch).
    fn render(&mut self, surface: &mut dyn Surface, rect: Rect);

    /// Route an input event. Return [`EventResult::Consumed`] to stop propagation.
    ///
    /// The default implementation does nothing and returns `Ignored`, so leaf
    /// widgets only need to override this if they handle events.
    fn on_event(&mut self, _event: &UiEvent, _rect: Rect) -> EventResult {
        EventResult::Ignored
    }
}

// ── Element ───────────────────────────────────────────────────────────────

/// A type-erased widget, the universal child type for containers.
///
/// Any `Widget` converts to `Element` via `From` / `Into`.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }

    #[inline]
    pub fn measure(&self) -> Vec2 {
        self.0.measure()
    }

    #[inline]
    pub fn render(&mut self, surface: &mut dyn Surface, rect: Rect) {
        self.0.render(surface, rect)
    }

    #[inline]
    pub fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        self.0.on_event(event, rect)
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Self::new(w)
    }
}
