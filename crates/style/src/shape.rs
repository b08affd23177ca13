use deckplan_types::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    None,
}

/// Fill and outline of a shape or slide background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeStyle {
    pub fill_color: Color,
    pub fill_opacity: f32,
    pub stroke_color: Color,
    pub stroke_width: f32,
    pub stroke_style: StrokeStyle,
    pub corner_radius: f32,
    pub shadow: bool,
    pub shadow_color: Color,
    pub shadow_offset: f32,
    pub shadow_blur: f32,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill_color: Color::WHITE,
            fill_opacity: 1.0,
            stroke_color: Color::rgb(0xE2, 0xE8, 0xF0),
            stroke_width: 0.0,
            stroke_style: StrokeStyle::Solid,
            corner_radius: 0.0,
            shadow: false,
            shadow_color: Color::rgba(0, 0, 0, 0.1),
            shadow_offset: 4.0,
            shadow_blur: 8.0,
        }
    }
}

impl ShapeStyle {
    pub fn filled(fill_color: Color) -> Self {
        Self {
            fill_color,
            ..Self::default()
        }
    }

    pub fn with_corner_radius(self, corner_radius: f32) -> Self {
        Self {
            corner_radius,
            ..self
        }
    }

    pub fn with_shadow(self, shadow_color: Color) -> Self {
        Self {
            shadow: true,
            shadow_color,
            ..self
        }
    }
}
