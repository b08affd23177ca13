//! Deck outline: ordered sections with slide counts and layout suggestions.

use deckplan_rules::PatternRecord;
use serde::{Deserialize, Serialize};

const DEFAULT_SECTION_SLIDES: u32 = 2;

/// Section keyword to suggested layouts. The first keyword found in a section
/// name wins, so order matters.
const LAYOUT_SUGGESTIONS: &[(&str, &[&str])] = &[
    ("opening", &["title_slide"]),
    ("welcome", &["title_slide"]),
    ("agenda", &["agenda_slide", "title_and_content"]),
    ("content", &["title_and_content", "two_content", "comparison"]),
    ("problem", &["title_and_content", "two_content"]),
    ("solution", &["title_and_content", "comparison"]),
    ("feature", &["title_and_content", "two_content", "chart"]),
    ("demo", &["title_and_content", "chart"]),
    ("pricing", &["pricing_slide", "comparison"]),
    ("testimonial", &["quote_slide", "testimonial_slide"]),
    ("team", &["team_slide", "title_and_content"]),
    ("timeline", &["timeline_slide"]),
    ("question", &["blank"]),
    ("q&a", &["blank"]),
    ("cta", &["cta_slide"]),
    ("closing", &["thank_you_slide", "cta_slide"]),
    ("thank", &["thank_you_slide"]),
];

const FALLBACK_LAYOUT: &str = "title_and_content";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub name: String,
    pub slide_count: u32,
    pub layouts: Vec<String>,
}

impl Section {
    fn new(name: &str, slide_count: u32, layouts: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            slide_count,
            layouts: layouts.iter().map(|l| l.to_string()).collect(),
        }
    }

    pub fn primary_layout(&self) -> &str {
        self.layouts.first().map_or(FALLBACK_LAYOUT, String::as_str)
    }

    fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Structure {
    pub pattern_name: String,
    pub sections: Vec<Section>,
    /// Number of parts named by the pattern itself, before any insertion.
    pub total_parts: usize,
    pub tone: String,
}

impl Structure {
    pub fn total_section_slides(&self) -> u32 {
        self.sections.iter().map(|s| s.slide_count).sum()
    }

    /// Redistributes section slide counts so that a deck with one title slide
    /// and one closing slide around the sections has `total` slides.
    ///
    /// When there are more sections than room, the first and last sections get
    /// one slide each, the remaining room goes to the others in order and any
    /// section left over gets none.
    pub fn fit_to(&mut self, total: u32) {
        let n = self.sections.len() as u32;
        if n == 0 {
            return;
        }
        let budget = total.saturating_sub(2);
        if budget >= n {
            let base = budget / n;
            let extra = (budget % n) as usize;
            for (i, section) in self.sections.iter_mut().enumerate() {
                section.slide_count = base + u32::from(i < extra);
            }
            return;
        }

        let last = self.sections.len() - 1;
        let order = std::iter::once(0)
            .chain(std::iter::once(last).filter(|&i| i != 0))
            .chain(1..last);
        for section in &mut self.sections {
            section.slide_count = 0;
        }
        for index in order.take(budget as usize) {
            self.sections[index].slide_count = 1;
        }
    }
}

/// Layout suggestions for a section name.
pub fn suggest_layouts(section_name: &str) -> Vec<String> {
    let lower = section_name.to_lowercase();
    LAYOUT_SUGGESTIONS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map_or_else(
            || vec![FALLBACK_LAYOUT.to_string()],
            |(_, layouts)| layouts.iter().map(|l| l.to_string()).collect(),
        )
}

/// Splits the pattern's `A→B→C` structure into sections and guarantees an
/// opening and a closing section.
pub fn plan_structure(pattern: &PatternRecord) -> Structure {
    let parts: Vec<&str> = pattern
        .structure_format
        .split('→')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    let mut sections: Vec<Section> = parts
        .iter()
        .map(|part| Section {
            name: part.to_string(),
            slide_count: DEFAULT_SECTION_SLIDES,
            layouts: suggest_layouts(part),
        })
        .collect();

    if !sections
        .iter()
        .any(|s| s.name_contains("opening") || s.name_contains("title"))
    {
        sections.insert(0, Section::new("Opening", 1, &["title_slide"]));
    }
    if !sections
        .iter()
        .any(|s| s.name_contains("closing") || s.name_contains("thank"))
    {
        sections.push(Section::new("Closing", 1, &["thank_you_slide"]));
    }

    Structure {
        pattern_name: if pattern.name.is_empty() {
            "Standard".to_string()
        } else {
            pattern.name.clone()
        },
        sections,
        total_parts: parts.len(),
        tone: if pattern.tone.is_empty() {
            "Professional".to_string()
        } else {
            pattern.tone.clone()
        },
    }
}
