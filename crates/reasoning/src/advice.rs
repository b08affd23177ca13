//! Delivery recommendations and anti-pattern warnings.

use crate::request::{PresentationRequest, PresentationType, Tone};
use deckplan_rules::{AudienceGuideline, PatternRecord};
use itertools::Itertools;

const INVESTOR_PITCH_ADVICE: [&str; 4] = [
    "Keep slides under 15 for 10-minute pitch",
    "Focus on problem, solution, market size, and ask",
    "Include at least one compelling data visualization",
    "Practice the timing for each section",
];

const PRODUCT_LAUNCH_ADVICE: [&str; 4] = [
    "Create excitement with strong opening",
    "Show, do not tell - use demos or visuals",
    "End with clear call to action",
    "Prepare for questions about competitors",
];

const EXECUTIVE_ADVICE: [&str; 4] = [
    "Lead with key takeaways, not details",
    "Focus on ROI and business impact",
    "Keep slides clean and scannable",
    "Prepare executive summary backup",
];

const TECHNICAL_ADVICE: [&str; 4] = [
    "Include technical depth where appropriate",
    "Use architecture diagrams if relevant",
    "Be prepared for challenging questions",
    "Balance overview with details",
];

const GENERAL_ANTI_PATTERNS: [&str; 5] = [
    "More than 7 bullets per slide",
    "Full sentences on slides",
    "Unreadable color combinations",
    "No backup slides for Q&A",
    "Small fonts (less than 24pt)",
];

pub fn recommendations(request: &PresentationRequest, audience: &AudienceGuideline) -> Vec<String> {
    let mut out: Vec<&str> = Vec::new();

    match request.presentation_type {
        PresentationType::InvestorPitch => out.extend(INVESTOR_PITCH_ADVICE),
        PresentationType::ProductLaunch => out.extend(PRODUCT_LAUNCH_ADVICE),
        _ => {}
    }

    if audience.audience_name.contains("Executive") {
        out.extend(EXECUTIVE_ADVICE);
    } else if audience.audience_name.contains("Technical") {
        out.extend(TECHNICAL_ADVICE);
    }

    match request.tone {
        Tone::Inspiring => out.push("Include personal stories or anecdotes"),
        Tone::Urgent => out.push("Keep pacing fast and focused"),
        _ => {}
    }

    out.into_iter().map(str::to_string).collect()
}

/// Pattern pitfalls followed by the general warnings, first occurrence kept.
pub fn anti_patterns(pattern: &PatternRecord) -> Vec<String> {
    pattern
        .common_pitfalls
        .split('+')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .chain(GENERAL_ANTI_PATTERNS.iter().map(|p| p.to_string()))
        .unique()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::AudienceType;

    #[test]
    fn test_recommendations_order() {
        let request = PresentationRequest::builder("Seed round")
            .presentation_type(PresentationType::InvestorPitch)
            .audience(AudienceType::Investors)
            .tone(Tone::Inspiring)
            .build();
        let audience = AudienceGuideline {
            audience_name: "Executive Investors".to_string(),
            ..AudienceGuideline::default()
        };
        let recs = recommendations(&request, &audience);
        assert_eq!(recs.len(), 9);
        assert_eq!(recs[0], "Keep slides under 15 for 10-minute pitch");
        assert_eq!(recs[4], "Lead with key takeaways, not details");
        assert_eq!(recs[8], "Include personal stories or anecdotes");
    }

    #[test]
    fn test_general_audience_gets_no_audience_advice() {
        let request = PresentationRequest::builder("x").build();
        assert!(recommendations(&request, &AudienceGuideline::general()).is_empty());
    }

    #[test]
    fn test_anti_patterns_deduplicate_in_order() {
        let pattern = PatternRecord {
            common_pitfalls: "Text-heavy slides + Full sentences on slides + Text-heavy slides".to_string(),
            ..PatternRecord::default()
        };
        let warnings = anti_patterns(&pattern);
        assert_eq!(warnings.len(), 6);
        assert_eq!(warnings[0], "Text-heavy slides");
        assert_eq!(warnings[1], "Full sentences on slides");
        assert_eq!(warnings[2], "More than 7 bullets per slide");
    }
}
