//! Pattern scoring.

use crate::request::PresentationRequest;
use deckplan_rules::PatternRecord;
use log::debug;

const CATEGORY_SCORE: u32 = 10;
const DURATION_SCORE: u32 = 5;
const TONE_SCORE: u32 = 3;

/// Additive match score of one pattern against a request.
pub fn score_pattern(request: &PresentationRequest, pattern: &PatternRecord) -> u32 {
    let mut score = 0;

    let keyword = request.presentation_type.keyword();
    let category = pattern.category.to_lowercase();
    if !category.is_empty() && (category.contains(&keyword) || keyword.contains(&category)) {
        score += CATEGORY_SCORE;
    }

    if let (Some(min), Some(max)) = (pattern.duration_min, pattern.duration_max) {
        if (min..=max).contains(&request.duration_minutes) {
            score += DURATION_SCORE;
        }
    }

    if pattern.tone.to_lowercase().contains(request.tone.as_str()) {
        score += TONE_SCORE;
    }

    score
}

/// Picks the highest-scoring pattern. The first of several equal scores wins,
/// and a zero score everywhere yields [`PatternRecord::standard_business`].
pub fn match_pattern(request: &PresentationRequest, patterns: &[PatternRecord]) -> PatternRecord {
    let mut best: Option<(&PatternRecord, u32)> = None;
    for pattern in patterns {
        let score = score_pattern(request, pattern);
        if score > best.map_or(0, |(_, s)| s) {
            best = Some((pattern, score));
        }
    }

    match best {
        Some((pattern, score)) => {
            debug!("Pattern '{}' matched with score {}.", pattern.name, score);
            pattern.clone()
        }
        None => {
            debug!("No pattern scored; using the standard business pattern.");
            PatternRecord::standard_business()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{PresentationType, Tone};

    fn pattern(name: &str, category: &str, min: u32, max: u32, tone: &str) -> PatternRecord {
        PatternRecord {
            name: name.to_string(),
            category: category.to_string(),
            duration_min: Some(min),
            duration_max: Some(max),
            tone: tone.to_string(),
            ..PatternRecord::default()
        }
    }

    #[test]
    fn test_score_components() {
        let request = PresentationRequest::builder("Raise")
            .presentation_type(PresentationType::InvestorPitch)
            .duration_minutes(10)
            .tone(Tone::Persuasive)
            .build();

        assert_eq!(score_pattern(&request, &pattern("a", "Investor Pitch", 5, 15, "Persuasive")), 18);
        assert_eq!(score_pattern(&request, &pattern("b", "pitch", 30, 60, "Calm")), 10);
        assert_eq!(score_pattern(&request, &pattern("c", "webinar", 5, 15, "")), 5);
    }

    #[test]
    fn test_empty_category_never_matches() {
        let request = PresentationRequest::builder("x").duration_minutes(500).build();
        assert_eq!(score_pattern(&request, &pattern("blank", "", 0, 10, "")), 0);
    }

    #[test]
    fn test_unparseable_duration_contributes_nothing() {
        let request = PresentationRequest::builder("x").build();
        let mut p = pattern("p", "", 0, 100, "");
        p.duration_min = None;
        assert_eq!(score_pattern(&request, &p), 0);
    }

    #[test]
    fn test_first_of_tied_patterns_wins() {
        let request = PresentationRequest::builder("Launch")
            .presentation_type(PresentationType::ProductLaunch)
            .duration_minutes(20)
            .build();
        let patterns = vec![
            pattern("First", "product launch", 10, 30, ""),
            pattern("Second", "product launch", 10, 30, ""),
        ];
        assert_eq!(match_pattern(&request, &patterns).name, "First");
    }

    #[test]
    fn test_default_when_nothing_scores() {
        let request = PresentationRequest::builder("x").build();
        let chosen = match_pattern(&request, &[]);
        assert_eq!(chosen, PatternRecord::standard_business());
    }
}
