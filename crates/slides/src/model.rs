//! Slide data model. This is the JSON contract consumed by exporters.

use chrono::{DateTime, Utc};
use deckplan_style::{Animation, ShapeStyle, TextStyle};
use deckplan_types::Position;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideType {
    Title,
    SectionDivider,
    Agenda,
    #[default]
    Content,
    Comparison,
    Chart,
    Testimonial,
    Pricing,
    Timeline,
    Quote,
    Cta,
    ThankYou,
    Blank,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Title,
    Subtitle,
    Body,
    Bullet,
    Image,
    Chart,
    Quote,
    CtaButton,
    Icon,
}

fn is_zero(level: &u8) -> bool {
    *level == 0
}

/// One positioned, styled element on a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideContent {
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub text: String,
    pub position: Position,
    pub style: TextStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<ShapeStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
    /// Indent level for list items.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub level: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
}

impl SlideContent {
    pub fn new(
        id: impl Into<String>,
        content_type: ContentType,
        text: impl Into<String>,
        position: Position,
        style: TextStyle,
    ) -> Self {
        Self {
            id: id.into(),
            content_type,
            text: text.into(),
            position,
            style,
            shape: None,
            animation: None,
            level: 0,
            placeholder: None,
            data_source: None,
        }
    }

    pub fn with_animation(self, animation: Option<Animation>) -> Self {
        Self { animation, ..self }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: String,
    #[serde(rename = "type")]
    pub slide_type: SlideType,
    pub title: String,
    pub layout: String,
    pub slide_number: u32,
    pub aspect_ratio: String,
    pub background: ShapeStyle,
    pub transition: Animation,
    pub contents: Vec<SlideContent>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    #[serde(default)]
    pub custom_properties: Map<String, Value>,
}

impl Slide {
    pub fn content(&self, id_suffix: &str) -> Option<&SlideContent> {
        let id = format!("{}_{}", self.id, id_suffix);
        self.contents.iter().find(|c| c.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationMetadata {
    pub title: String,
    pub subtitle: Option<String>,
    pub author: Option<String>,
    pub company: Option<String>,
    /// Human-readable date, e.g. `"March 04, 2025"`.
    pub date: String,
    pub version: String,
    pub theme: String,
    pub aspect_ratio: String,
    pub slide_count: u32,
    pub estimated_duration_minutes: u32,
}
