use tincture_engine::coords::{Rect, Vec2};
use tincture_engine::paint::Rgba8;
use tincture_engine::surface::{CpuSurface, Surface};

use crate::event::UiEvent;
use crate::widget::Element;

// ── UiInput ───────────────────────────────────────────────────────────────

/// Snapshot of pointer state for one UI frame.
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    /// Current pointer position in surface pixels.
    pub mouse_pos: Vec2,
    /// `true` for exactly one frame when a click completes.
    pub mouse_clicked: bool,
    /// `true` for exactly one frame when the primary button is released.
    pub mouse_released: bool,
}

impl UiInput {
    pub fn hover(pos: Vec2) -> Self {
        Self { mouse_pos: pos, ..Self::default() }
    }

    pub fn click(pos: Vec2) -> Self {
        Self { mouse_pos: pos, mouse_clicked: true, ..Self::default() }
    }
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Frame driver that owns the CPU surface across frames.
///
/// Each [`frame`](Self::frame) clears the surface, renders the root widget into
/// the full surface rect, then routes the frame's pointer events through it.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new(320, 200);
/// let mut root: Element = Group::new()
///     .child_at(10.0, 10.0, ColorPicker::new(200.0, 100.0))
///     .into();
/// ui.frame(&mut root, &UiInput::hover(Vec2::new(50.0, 40.0)));
/// ui.surface().save_png("frame.png")?;
/// ```
pub struct UiScene {
    surface: CpuSurface,
    background: Rgba8,
}

impl UiScene {
    pub fn new(width: u32, height: u32) -> Self {
        Self { surface: CpuSurface::new(width, height), background: Rgba8::transparent() }
    }

    /// Color the surface is cleared to at the start of each frame.
    pub fn background(mut self, color: Rgba8) -> Self {
        self.background = color;
        self
    }

    #[inline]
    pub fn surface(&self) -> &CpuSurface {
        &self.surface
    }

    /// Render and dispatch one frame.
    ///
    /// The root is borrowed so widgets that retain state (such as a painted
    /// swatch) keep it across frames.
    pub fn frame(&mut self, root: &mut Element, input: &UiInput) -> &CpuSurface {
        let (w, h) = self.surface.size();
        let rect = Rect::new(0.0, 0.0, w as f32, h as f32);

        // ── render ────────────────────────────────────────────────────────
        self.surface.clear(self.background);
        root.render(&mut self.surface, rect);

        // ── events ────────────────────────────────────────────────────────
        let pos = input.mouse_pos;
        root.on_event(&UiEvent::Hover { pos }, rect);
        if input.mouse_clicked {
            root.on_event(&UiEvent::Click { pos }, rect);
        }
        if input.mouse_released {
            root.on_event(&UiEvent::Release { pos }, rect);
        }

        &self.surface
    }
}
