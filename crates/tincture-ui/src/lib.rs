//! Tincture UI: retained widget tree rasterized onto a CPU surface.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use tincture_ui::prelude::*;
//!
//! let mut ui = UiScene::new(320, 200);
//! let mut root: Element = Group::new()
//!     .child_at(10.0, 10.0, RegularPolygon::new(3, 20.0))
//!     .child_at(60.0, 10.0, ColorPicker::new(220.0, 120.0)
//!         .on_click_color(|c| println!("picked {c}")))
//!     .into();
//!
//! // Once per frame:
//! ui.frame(&mut root, &UiInput { mouse_pos, mouse_clicked, mouse_released });
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`](widget::Widget) for any type, then use it anywhere an
//! [`Element`](widget::Element) is accepted.

pub mod event;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything you need to build and extend UI. Import this in your component files.
pub mod prelude {
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        color_picker::{ColorPicker, Swatch, SwatchError, SwatchLayout},
        group::Group,
        polygon::RegularPolygon,
    };

    // Re-export the engine primitives everyone needs.
    pub use tincture_engine::coords::{Rect, Vec2};
    pub use tincture_engine::paint::{Rgb, Rgba8};
    pub use tincture_engine::pixels::PixelBuffer;
    pub use tincture_engine::surface::{CpuSurface, Surface};
}
