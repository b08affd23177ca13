//! Animation intensity, transition style and per-slide hints.

use deckplan_rules::{AnimationRecord, PatternRecord};
use serde::{Deserialize, Serialize};

const MAX_RECOMMENDED: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationIntensity {
    None,
    #[default]
    Low,
    Medium,
    High,
}

impl AnimationIntensity {
    /// Exact catalog spelling (`None`, `Low`, `Medium`, `High`); anything else is `Low`.
    pub fn from_catalog(value: &str) -> Self {
        match value.trim() {
            "None" => Self::None,
            "Low" => Self::Low,
            "Medium" => Self::Medium,
            "High" => Self::High,
            _ => Self::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionStyle {
    #[default]
    Fade,
    Slide,
    Push,
    Zoom,
}

impl TransitionStyle {
    /// First of fade, slide, push, zoom mentioned in the catalog text.
    pub fn from_catalog(value: &str) -> Self {
        let lower = value.to_lowercase();
        [
            ("fade", Self::Fade),
            ("slide", Self::Slide),
            ("push", Self::Push),
            ("zoom", Self::Zoom),
        ]
        .into_iter()
        .find(|(needle, _)| lower.contains(needle))
        .map_or(Self::Fade, |(_, style)| style)
    }
}

/// Entrance and emphasis effect names for one planned slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationHint {
    pub entrance: String,
    pub emphasis: String,
}

impl AnimationHint {
    fn new(entrance: &str, emphasis: &str) -> Self {
        Self {
            entrance: entrance.to_string(),
            emphasis: emphasis.to_string(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.entrance == "none"
    }
}

pub fn select_intensity(pattern: &PatternRecord, include_animations: bool) -> AnimationIntensity {
    if !include_animations {
        return AnimationIntensity::None;
    }
    AnimationIntensity::from_catalog(&pattern.animation_intensity)
}

pub fn select_transition(pattern: &PatternRecord) -> TransitionStyle {
    TransitionStyle::from_catalog(&pattern.transition_style)
}

/// Catalog animations whose applicability suits the intensity, first ten in row order.
pub fn recommend_animations(
    intensity: AnimationIntensity,
    animations: &[AnimationRecord],
) -> Vec<AnimationRecord> {
    let accepts = |applicability: &str| match intensity {
        AnimationIntensity::None => false,
        AnimationIntensity::Low | AnimationIntensity::Medium => applicability.contains("High"),
        AnimationIntensity::High => {
            applicability.contains("High") || applicability.contains("Medium")
        }
    };

    animations
        .iter()
        .filter(|a| accepts(&a.applicability))
        .take(MAX_RECOMMENDED)
        .cloned()
        .collect()
}

pub fn animation_hint(intensity: AnimationIntensity, section_name: &str) -> AnimationHint {
    if intensity == AnimationIntensity::None {
        return AnimationHint::new("none", "none");
    }
    let lower = section_name.to_lowercase();
    if lower.contains("opening") || lower.contains("closing") {
        AnimationHint::new("fade_in", "none")
    } else if lower.contains("feature") || lower.contains("demo") {
        AnimationHint::new("slide_in", "pulse")
    } else {
        AnimationHint::new("fade_in", "appear")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anim(name: &str, applicability: &str) -> AnimationRecord {
        AnimationRecord {
            name: name.to_string(),
            applicability: applicability.to_string(),
            ..AnimationRecord::default()
        }
    }

    #[test]
    fn test_intensity_and_transition_parsing() {
        assert_eq!(AnimationIntensity::from_catalog("High"), AnimationIntensity::High);
        assert_eq!(AnimationIntensity::from_catalog("high"), AnimationIntensity::Low);
        assert_eq!(TransitionStyle::from_catalog("Push or Fade"), TransitionStyle::Fade);
        assert_eq!(TransitionStyle::from_catalog("Zoom, Push"), TransitionStyle::Push);
        assert_eq!(TransitionStyle::from_catalog("Morph"), TransitionStyle::Fade);
    }

    #[test]
    fn test_disabled_animations_force_none() {
        let p = PatternRecord::standard_business();
        assert_eq!(select_intensity(&p, false), AnimationIntensity::None);
        assert_eq!(select_intensity(&p, true), AnimationIntensity::Low);
    }

    #[test]
    fn test_recommendations_filter_by_intensity() {
        let rows = vec![anim("a", "Very High"), anim("b", "Medium"), anim("c", "Low")];
        let names = |i| {
            recommend_animations(i, &rows)
                .into_iter()
                .map(|a| a.name)
                .collect::<Vec<_>>()
        };
        assert_eq!(names(AnimationIntensity::Low), ["a"]);
        assert_eq!(names(AnimationIntensity::High), ["a", "b"]);
        assert!(names(AnimationIntensity::None).is_empty());
    }

    #[test]
    fn test_recommendations_are_capped() {
        let rows: Vec<_> = (0..15).map(|i| anim(&i.to_string(), "High")).collect();
        assert_eq!(recommend_animations(AnimationIntensity::Medium, &rows).len(), 10);
    }

    #[test]
    fn test_hints_by_section() {
        assert_eq!(animation_hint(AnimationIntensity::Low, "Opening").entrance, "fade_in");
        assert_eq!(animation_hint(AnimationIntensity::Low, "Live Demo").emphasis, "pulse");
        assert_eq!(animation_hint(AnimationIntensity::Low, "Agenda").emphasis, "appear");
        assert!(animation_hint(AnimationIntensity::None, "Demo").is_none());
    }
}
