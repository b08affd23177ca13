//! Layout-name lookup and fixed template geometry, in inches on the reference canvas.

use crate::model::SlideType;
use deckplan_types::Position;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static LAYOUT_TO_TYPE: Lazy<HashMap<&'static str, SlideType>> = Lazy::new(|| {
    HashMap::from([
        ("title_slide", SlideType::Title),
        ("section_divider", SlideType::SectionDivider),
        ("agenda_slide", SlideType::Agenda),
        ("title_and_content", SlideType::Content),
        ("two_content", SlideType::Comparison),
        ("title_only", SlideType::Content),
        ("blank", SlideType::Blank),
        ("picture_with_caption", SlideType::Content),
        ("comparison_table", SlideType::Comparison),
        ("chart_slide", SlideType::Chart),
        ("quote_slide", SlideType::Quote),
        ("testimonial_slide", SlideType::Testimonial),
        ("pricing_slide", SlideType::Pricing),
        ("team_grid", SlideType::Content),
        ("timeline_slide", SlideType::Timeline),
        ("testimonial_grid", SlideType::Testimonial),
        ("faq_accordion", SlideType::Content),
        ("cta_slide", SlideType::Cta),
        ("thank_you_slide", SlideType::ThankYou),
        ("bio_slide", SlideType::Content),
        ("stats_slide", SlideType::Chart),
        ("feature_list", SlideType::Content),
        ("problem_solution", SlideType::Comparison),
        ("agenda_with_icons", SlideType::Agenda),
        ("full_image_background", SlideType::Title),
        ("video_frame", SlideType::Content),
    ])
});

/// Slide type for a layout name. Names are matched lowercased with spaces as
/// underscores; unknown layouts are plain content slides.
pub fn slide_type_for_layout(layout: &str) -> SlideType {
    let key = layout.trim().replace(' ', "_").to_lowercase();
    LAYOUT_TO_TYPE.get(key.as_str()).copied().unwrap_or(SlideType::Content)
}

/// Slide types whose template carries a centered title element.
pub fn has_title_element(slide_type: SlideType) -> bool {
    matches!(
        slide_type,
        SlideType::Title | SlideType::SectionDivider | SlideType::Cta | SlideType::ThankYou
    )
}

pub fn title_position(slide_type: SlideType) -> Position {
    match slide_type {
        SlideType::Title | SlideType::ThankYou => Position::new(0.5, 2.5, 12.0, 1.5),
        SlideType::SectionDivider => Position::new(0.5, 3.0, 12.0, 1.5),
        SlideType::Cta => Position::new(0.5, 2.0, 12.0, 1.0),
        _ => Position::new(0.5, 0.3, 12.0, 0.8),
    }
}

pub fn title_font_size(slide_type: SlideType) -> u16 {
    match slide_type {
        SlideType::Title => 54,
        SlideType::SectionDivider => 48,
        SlideType::Cta | SlideType::ThankYou => 44,
        SlideType::Quote => 32,
        _ => 36,
    }
}

// Element slots used by the per-type builders.
pub const SUBTITLE: Position = Position::new(0.5, 4.0, 12.0, 0.6);
pub const AUTHOR: Position = Position::new(0.5, 5.2, 12.0, 0.5);
pub const DATE: Position = Position::new(0.5, 5.7, 12.0, 0.4);
pub const SECTION_ICON: Position = Position::new(0.5, 2.5, 12.0, 0.8);
pub const AGENDA_ITEM: Position = Position::new(0.8, 1.5, 11.0, 0.7);
pub const AGENDA_STEP: f32 = 0.9;
pub const CONTENT_ITEM: Position = Position::new(0.8, 1.8, 11.5, 0.8);
pub const CONTENT_STEP: f32 = 1.0;
pub const LEFT_COLUMN_ITEM: Position = Position::new(0.5, 1.5, 5.8, 0.7);
pub const RIGHT_COLUMN_ITEM: Position = Position::new(6.8, 1.5, 5.8, 0.7);
pub const COLUMN_STEP: f32 = 0.9;
pub const QUOTE: Position = Position::new(1.0, 2.5, 11.0, 2.0);
pub const QUOTE_AUTHOR: Position = Position::new(1.0, 5.0, 11.0, 0.5);
pub const CTA_BUTTON: Position = Position::new(4.5, 4.2, 4.0, 0.8);
pub const CONTACT: Position = Position::new(0.5, 5.2, 12.0, 0.5);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_lookup_normalizes_names() {
        assert_eq!(slide_type_for_layout("Title Slide"), SlideType::Title);
        assert_eq!(slide_type_for_layout("two_content"), SlideType::Comparison);
        assert_eq!(slide_type_for_layout("agenda_with_icons"), SlideType::Agenda);
        assert_eq!(slide_type_for_layout("mystery_layout"), SlideType::Content);
        assert_eq!(LAYOUT_TO_TYPE.len(), 26);
    }

    #[test]
    fn test_title_tables() {
        assert_eq!(title_font_size(SlideType::Title), 54);
        assert_eq!(title_font_size(SlideType::Chart), 36);
        assert_eq!(title_position(SlideType::Cta).height, 1.0);
        assert!(has_title_element(SlideType::ThankYou));
        assert!(!has_title_element(SlideType::Content));
    }
}
