use crate::animation::{AnimationIntensity, TransitionStyle};
use crate::request::PresentationType;
use crate::structure::Structure;
use crate::style::ColorScheme;
use deckplan_rules::{AnimationRecord, AudienceGuideline, PatternRecord, StyleRecord, TypographyRecord};
use serde::{Deserialize, Serialize};

/// Everything resolved for one request before any slide is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reasoning {
    pub presentation_type: PresentationType,
    pub pattern: PatternRecord,
    pub style: StyleRecord,
    pub colors: ColorScheme,
    pub typography: TypographyRecord,
    pub structure: Structure,
    pub slide_count_estimate: u32,
    /// Seconds of speaking time per slide.
    pub time_per_slide: f64,
    pub animation_intensity: AnimationIntensity,
    pub transition_style: TransitionStyle,
    pub recommended_animations: Vec<AnimationRecord>,
    pub audience_adaptation: AudienceGuideline,
    pub tone_adjustment: String,
    pub recommendations: Vec<String>,
    pub anti_patterns: Vec<String>,
}
