use tincture_engine::coords::{Rect, Vec2};
use tincture_engine::surface::Surface;

use crate::event::{EventResult, UiEvent};
use crate::widget::{Element, Widget};

/// A child inside a [`Group`] with its offset from the group's origin.
pub struct GroupItem {
    pub element: Element,
    pub offset: Vec2,
}

impl GroupItem {
    /// Absolute rect of this child inside a group whose absolute origin is `parent`.
    #[inline]
    pub fn compute_rect(&self, parent: Vec2) -> Rect {
        Rect::from_origin_size(parent + self.offset, self.element.measure())
    }
}

/// A container that places children at fixed offsets.
///
/// A child's absolute position is the group's absolute origin plus its offset,
/// so nested groups accumulate offsets. Children keep their natural size and
/// may extend past the group's own bounds.
///
/// Children are rendered in insertion order (first = bottom, last = top).
/// Events are routed in reverse order (topmost child gets first hit-test).
///
/// # Example
/// ```rust,ignore
/// Group::new()
///     .child_at(10.0, 10.0, RegularPolygon::new(3, 20.0))
///     .child_at(100.0, 10.0, RegularPolygon::new(4, 40.0))
/// ```
pub struct Group {
    children: Vec<GroupItem>,
    size: Option<Vec2>,
}

impl Group {
    pub fn new() -> Self {
        Self { children: Vec::new(), size: None }
    }

    pub fn child_at(mut self, x: f32, y: f32, element: impl Into<Element>) -> Self {
        self.children.push(GroupItem { element: element.into(), offset: Vec2::new(x, y) });
        self
    }

    /// Fixed size instead of the children's bounding box.
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = Some(Vec2::new(width, height));
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Group {
    fn measure(&self) -> Vec2 {
        if let Some(size) = self.size {
            return size;
        }
        self.children
            .iter()
            .map(|item| item.compute_rect(Vec2::zero()).max())
            .fold(Vec2::zero(), |acc, m| Vec2::new(acc.x.max(m.x), acc.y.max(m.y)))
    }

    fn render(&mut self, surface: &mut dyn Surface, rect: Rect) {
        for item in &mut self.children {
            let child_rect = item.compute_rect(rect.origin);
            item.element.render(surface, child_rect);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        for item in self.children.iter_mut().rev() {
            let child_rect = item.compute_rect(rect.origin);
            if item.element.on_event(event, child_rect).is_consumed() {
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }
}
