//! Geometry and color primitives shared by the planning and slide crates.

pub mod color;
pub mod geometry;

pub use color::Color;
pub use geometry::{Canvas, Position, REFERENCE_HEIGHT, REFERENCE_WIDTH};
