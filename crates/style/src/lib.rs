pub mod animation;
pub mod font;
pub mod parsers;
pub mod shape;
pub mod text;
pub mod text_style;

pub use animation::{Animation, AnimationDirection, AnimationEffect, AnimationTrigger};
pub use font::{FontStyle, FontWeight};
pub use parsers::{SizeRange, StyleParseError, leading_size_or};
pub use shape::{ShapeStyle, StrokeStyle};
pub use text::TextAlign;
pub use text_style::TextStyle;
