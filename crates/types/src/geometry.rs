use serde::{Deserialize, Serialize};

/// Width of the reference 16:9 slide, in inches.
pub const REFERENCE_WIDTH: f32 = 13.333;
/// Height shared by all supported aspect ratios, in inches.
pub const REFERENCE_HEIGHT: f32 = 7.5;

/// A box on the slide, in inches from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            left: 0.5,
            top: 0.5,
            width: 12.0,
            height: 6.0,
        }
    }
}

impl Position {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Returns a copy moved down by `dy` inches.
    pub fn offset_y(self, dy: f32) -> Self {
        Self {
            top: self.top + dy,
            ..self
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// The drawable area of a slide for a given aspect ratio.
///
/// Layout templates are authored against the 13.333×7.5 reference canvas;
/// `place` rescales them horizontally for narrower ratios.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: REFERENCE_WIDTH,
            height: REFERENCE_HEIGHT,
        }
    }
}

impl Canvas {
    /// Builds a canvas from an `"W:H"` ratio string. Unparseable ratios get the reference canvas.
    pub fn for_aspect_ratio(ratio: &str) -> Self {
        let parsed = ratio.split_once(':').and_then(|(w, h)| {
            let w = w.trim().parse::<f32>().ok()?;
            let h = h.trim().parse::<f32>().ok()?;
            (w > 0.0 && h > 0.0).then_some(w / h)
        });

        match parsed {
            Some(r) if (r - 16.0 / 9.0).abs() < 0.01 => Self::default(),
            Some(r) => Self {
                width: REFERENCE_HEIGHT * r,
                height: REFERENCE_HEIGHT,
            },
            None => Self::default(),
        }
    }

    pub fn place(&self, pos: Position) -> Position {
        if (self.width - REFERENCE_WIDTH).abs() < f32::EPSILON {
            return pos;
        }
        let sx = self.width / REFERENCE_WIDTH;
        Position {
            left: pos.left * sx,
            top: pos.top,
            width: pos.width * sx,
            height: pos.height,
        }
    }

    pub fn contains(&self, pos: &Position) -> bool {
        const EPSILON: f32 = 0.01;
        pos.left >= -EPSILON
            && pos.top >= -EPSILON
            && pos.right() <= self.width + EPSILON
            && pos.bottom() <= self.height + EPSILON
    }
}
