//! Slide-count and pacing estimates.

use crate::request::{PresentationRequest, PresentationType};
use deckplan_rules::PatternRecord;

const SLIDES_PER_MINUTE: f64 = 0.65;
const FALLBACK_BOUNDS: (u32, u32) = (10, 20);
const INVESTOR_PITCH_CAP: u32 = 15;
const TRAINING_WORKSHOP_FLOOR: u32 = 25;
const SECONDS_WHEN_EMPTY: f64 = 120.0;

/// Slide-count bounds from the pattern, or `[10, 20]` when either bound is absent.
pub fn slide_count_bounds(pattern: &PatternRecord) -> (u32, u32) {
    match (pattern.slide_count_min, pattern.slide_count_max) {
        (Some(min), Some(max)) => (min, max),
        _ => FALLBACK_BOUNDS,
    }
}

/// Roughly 0.65 slides per minute, kept inside the pattern bounds.
///
/// Investor pitches are capped at 15 slides and training workshops floored at 25,
/// even when that leaves the pattern's range. The result is at least 1.
pub fn estimate_slide_count(request: &PresentationRequest, pattern: &PatternRecord) -> u32 {
    let (min, max) = slide_count_bounds(pattern);
    let ideal = (f64::from(request.duration_minutes) * SLIDES_PER_MINUTE).floor() as u32;
    // Not `clamp`, which panics on inverted catalog bounds.
    let mut count = min.max(ideal.min(max));

    match request.presentation_type {
        PresentationType::InvestorPitch => count = count.min(INVESTOR_PITCH_CAP),
        PresentationType::TrainingWorkshop => count = count.max(TRAINING_WORKSHOP_FLOOR),
        _ => {}
    }

    count.max(1)
}

pub fn seconds_per_slide(duration_minutes: u32, slide_count: u32) -> f64 {
    if slide_count == 0 {
        return SECONDS_WHEN_EMPTY;
    }
    f64::from(duration_minutes) * 60.0 / f64::from(slide_count)
}
