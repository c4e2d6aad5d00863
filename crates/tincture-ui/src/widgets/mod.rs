pub mod color_picker;
pub mod group;
pub mod polygon;
