use crate::advice::{anti_patterns, recommendations};
use crate::animation::{recommend_animations, select_intensity, select_transition};
use crate::audience::{adapt_for_audience, adjust_tone};
use crate::estimate::{estimate_slide_count, seconds_per_slide};
use crate::pattern::match_pattern;
use crate::plan::{SlidePlan, generate_slide_plan};
use crate::reasoning::Reasoning;
use crate::request::{AudienceType, PresentationRequest, PresentationType, Tone};
use crate::structure::plan_structure;
use crate::style::{resolve_colors, resolve_style, resolve_typography};
use deckplan_rules::RuleTable;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A selectable value and its human-readable label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub value: String,
    pub name: String,
}

/// Resolves requests against a shared, read-only [`RuleTable`].
///
/// The engine holds no mutable state; clones share the same table.
#[derive(Debug, Clone)]
pub struct ReasoningEngine {
    rules: Arc<RuleTable>,
}

impl ReasoningEngine {
    pub fn new(rules: Arc<RuleTable>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn analyze(&self, request: &PresentationRequest) -> Reasoning {
        let rules = &self.rules;
        let pattern = match_pattern(request, &rules.patterns);
        info!(
            "Planning '{}' ({}, {} min) with pattern '{}'.",
            request.title, request.presentation_type, request.duration_minutes, pattern.name
        );

        let style = resolve_style(&pattern, &rules.styles);
        let colors = resolve_colors(request, &pattern, &rules.colors);
        let typography = resolve_typography(request, &pattern, &rules.typography);

        let slide_count = estimate_slide_count(request, &pattern);
        let mut structure = plan_structure(&pattern);
        structure.fit_to(slide_count);

        let intensity = select_intensity(&pattern, request.include_animations);
        let transition = select_transition(&pattern);
        let animations = recommend_animations(intensity, &rules.animations);

        let audience = adapt_for_audience(request.audience, &rules.audiences);
        let tone_adjustment = adjust_tone(request.tone, request.presentation_type, &pattern);

        let time_per_slide = seconds_per_slide(request.duration_minutes, slide_count);
        debug!(
            "Estimated {} slides at {:.1}s each across {} sections.",
            slide_count,
            time_per_slide,
            structure.sections.len()
        );

        let recommendations = recommendations(request, &audience);
        let anti_patterns = anti_patterns(&pattern);

        Reasoning {
            presentation_type: request.presentation_type,
            pattern,
            style,
            colors,
            typography,
            structure,
            slide_count_estimate: slide_count,
            time_per_slide,
            animation_intensity: intensity,
            transition_style: transition,
            recommended_animations: animations,
            audience_adaptation: audience,
            tone_adjustment,
            recommendations,
            anti_patterns,
        }
    }

    pub fn generate_slide_plan(&self, reasoning: &Reasoning, request: &PresentationRequest) -> Vec<SlidePlan> {
        generate_slide_plan(reasoning, request, &self.rules.speech_notes)
    }

    pub fn available_presentation_types() -> Vec<Choice> {
        PresentationType::ALL
            .iter()
            .map(|t| Choice {
                value: t.as_str().to_string(),
                name: t.display_name(),
            })
            .collect()
    }

    pub fn available_audiences() -> Vec<Choice> {
        AudienceType::ALL
            .iter()
            .map(|a| Choice {
                value: a.as_str().to_string(),
                name: a.display_name(),
            })
            .collect()
    }

    pub fn available_tones() -> Vec<Choice> {
        Tone::ALL
            .iter()
            .map(|t| Choice {
                value: t.as_str().to_string(),
                name: t.display_name(),
            })
            .collect()
    }
}
