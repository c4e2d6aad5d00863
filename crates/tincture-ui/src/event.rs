use tincture_engine::coords::Vec2;

/// Pointer events routed through the widget tree.
///
/// Every `pos` is already resolved into absolute surface coordinates, the
/// same space as the rects widgets are rendered into.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Pointer is at `pos` (fired every frame).
    Hover { pos: Vec2 },
    /// Primary button pressed and released at `pos`.
    Click { pos: Vec2 },
    /// Primary button released at `pos`.
    Release { pos: Vec2 },
}

impl UiEvent {
    /// Pointer position carried by the event.
    #[inline]
    pub fn pos(&self) -> Vec2 {
        match self {
            UiEvent::Hover { pos } | UiEvent::Click { pos } | UiEvent::Release { pos } => *pos,
        }
    }
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; stop routing to siblings / parents.
    Consumed,
    /// Event was not handled; keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
