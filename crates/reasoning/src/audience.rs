//! Audience adaptation and tone adjustment.

use crate::request::{AudienceType, PresentationType, Tone};
use deckplan_rules::{AudienceGuideline, PatternRecord};
use log::debug;

/// Base tone, presentation type fragment, adjusted tone.
const TONE_ADJUSTMENTS: &[(&str, &[(&str, &str)])] = &[
    (
        "professional",
        &[
            ("board_presentation", "Authoritative + Clear"),
            ("quarterly_review", "Analytical + Supportive"),
            ("all_hands", "Professional + Inclusive"),
            ("investor_pitch", "Confident + Persuasive"),
        ],
    ),
    (
        "educational",
        &[
            ("training_workshop", "Engaging + Supportive"),
            ("technical_workshop", "Technical + Clear"),
            ("webinar", "Educational + Professional"),
        ],
    ),
    (
        "inspiring",
        &[
            ("conference_talk", "Inspirational + Engaging"),
            ("all_hands", "Motivational + United"),
            ("kickoff", "Energetic + Visionary"),
        ],
    ),
];

/// First guideline whose name and the audience keyword contain one another.
pub fn adapt_for_audience(audience: AudienceType, guidelines: &[AudienceGuideline]) -> AudienceGuideline {
    let key = audience.keyword();
    let found = guidelines.iter().find(|g| {
        let name = g.audience_name.trim().to_lowercase();
        !name.is_empty() && (key.contains(&name) || name.contains(&key))
    });
    match found {
        Some(guideline) => guideline.clone(),
        None => {
            debug!("No guideline for audience '{}'; using General.", key);
            AudienceGuideline::general()
        }
    }
}

pub fn adjust_tone(tone: Tone, presentation_type: PresentationType, pattern: &PatternRecord) -> String {
    let base = tone.as_str();
    let kind = presentation_type.as_str();

    let adjusted = TONE_ADJUSTMENTS
        .iter()
        .filter(|(tone_key, _)| base.contains(tone_key))
        .flat_map(|(_, by_type)| by_type.iter())
        .find(|(type_key, _)| kind.contains(type_key));
    if let Some((_, adjustment)) = adjusted {
        return adjustment.to_string();
    }

    let pattern_tone = pattern.tone.to_lowercase();
    if pattern_tone.contains("professional") {
        "Professional + Clear".to_string()
    } else if pattern_tone.contains("engaging") {
        "Engaging + Educational".to_string()
    } else if pattern_tone.contains("persuasive") {
        "Persuasive + Confident".to_string()
    } else {
        format!("{} + Professional", tone.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guideline_matching_either_direction() {
        let guidelines = vec![
            AudienceGuideline {
                audience_name: "Executives".to_string(),
                ..AudienceGuideline::default()
            },
            AudienceGuideline {
                audience_name: "Technical Teams and Architects".to_string(),
                ..AudienceGuideline::default()
            },
        ];
        assert_eq!(
            adapt_for_audience(AudienceType::SeniorExecutives, &guidelines).audience_name,
            "Executives"
        );
        assert_eq!(
            adapt_for_audience(AudienceType::TechnicalTeams, &guidelines).audience_name,
            "Technical Teams and Architects"
        );
        assert_eq!(
            adapt_for_audience(AudienceType::Investors, &guidelines),
            AudienceGuideline::general()
        );
    }

    #[test]
    fn test_tone_table_then_pattern_tone() {
        let blank = PatternRecord::default();
        assert_eq!(
            adjust_tone(Tone::Professional, PresentationType::InvestorPitch, &blank),
            "Confident + Persuasive"
        );
        assert_eq!(
            adjust_tone(Tone::Inspiring, PresentationType::AllHands, &blank),
            "Motivational + United"
        );
        assert_eq!(
            adjust_tone(Tone::Urgent, PresentationType::Webinar, &PatternRecord::standard_business()),
            "Professional + Clear"
        );
        assert_eq!(
            adjust_tone(Tone::Casual, PresentationType::TeamMeeting, &blank),
            "Casual + Professional"
        );
    }
}
