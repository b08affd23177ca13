//! Immutable text styling for slide content.
//!
//! Styles are value objects: every `with_*` call returns a modified copy and leaves
//! the receiver untouched, so a base style can be shared across a whole deck.

use crate::font::{FontStyle, FontWeight};
use crate::text::TextAlign;
use deckplan_types::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: String,
    /// Font size in points.
    pub font_size: u16,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    pub text_align: TextAlign,
    pub line_height: f32,
    #[serde(default)]
    pub letter_spacing: f32,
    #[serde(default)]
    pub underline: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 24,
            font_weight: FontWeight::Regular,
            font_style: FontStyle::Normal,
            color: Color::rgb(0x1A, 0x1A, 0x1A),
            background_color: None,
            text_align: TextAlign::Left,
            line_height: 1.5,
            letter_spacing: 0.0,
            underline: false,
        }
    }
}

impl TextStyle {
    pub fn new(font_family: impl Into<String>, font_size: u16) -> Self {
        Self {
            font_family: font_family.into(),
            font_size,
            ..Self::default()
        }
    }

    pub fn with_font_size(self, font_size: u16) -> Self {
        Self { font_size, ..self }
    }

    pub fn with_weight(self, font_weight: FontWeight) -> Self {
        Self { font_weight, ..self }
    }

    pub fn with_font_style(self, font_style: FontStyle) -> Self {
        Self { font_style, ..self }
    }

    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    pub fn with_background(self, background_color: Color) -> Self {
        Self {
            background_color: Some(background_color),
            ..self
        }
    }

    pub fn with_align(self, text_align: TextAlign) -> Self {
        Self { text_align, ..self }
    }

    pub fn bold(self) -> Self {
        self.with_weight(FontWeight::Bold)
    }

    pub fn italic(self) -> Self {
        self.with_font_style(FontStyle::Italic)
    }

    pub fn centered(self) -> Self {
        self.with_align(TextAlign::Center)
    }
}
