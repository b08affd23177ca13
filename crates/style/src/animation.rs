//! Entrance animations and slide transitions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnimationEffect {
    None,
    #[default]
    Fade,
    Slide,
    Push,
    Zoom,
    Appear,
    Pulse,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnimationDirection {
    Left,
    Right,
    Top,
    Bottom,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnimationTrigger {
    #[default]
    OnClick,
    WithPrevious,
    AfterPrevious,
}

/// One animation step, used both for content entrances and slide transitions.
///
/// Durations and delays are in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    pub effect: AnimationEffect,
    pub direction: AnimationDirection,
    pub trigger: AnimationTrigger,
    pub duration: f32,
    pub delay: f32,
    pub order: u32,
    #[serde(default)]
    pub auto_reverse: bool,
    #[serde(default)]
    pub repeat_count: u32,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            effect: AnimationEffect::Fade,
            direction: AnimationDirection::None,
            trigger: AnimationTrigger::OnClick,
            duration: 0.5,
            delay: 0.0,
            order: 1,
            auto_reverse: false,
            repeat_count: 0,
        }
    }
}

impl Animation {
    pub fn new(effect: AnimationEffect, trigger: AnimationTrigger, delay: f32) -> Self {
        Self {
            effect,
            trigger,
            delay,
            ..Self::default()
        }
    }

    /// A slide transition; transitions are slightly quicker than entrances.
    pub fn transition(effect: AnimationEffect) -> Self {
        Self {
            effect,
            duration: 0.4,
            ..Self::default()
        }
    }

    pub fn with_direction(self, direction: AnimationDirection) -> Self {
        Self { direction, ..self }
    }

    pub fn with_order(self, order: u32) -> Self {
        Self { order, ..self }
    }

    pub fn with_duration(self, duration: f32) -> Self {
        Self { duration, ..self }
    }
}
