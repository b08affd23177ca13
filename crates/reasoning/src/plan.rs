//! Slide plans: the unstyled per-slide outline derived from a [`Reasoning`].

use crate::animation::{AnimationHint, animation_hint};
use crate::reasoning::Reasoning;
use crate::request::PresentationRequest;
use crate::structure::Section;
use deckplan_rules::SpeechNote;
use serde::{Deserialize, Serialize};

const BOOKEND_SECONDS: f64 = 60.0;

const BULLET_TEMPLATES: &[(&str, [&str; 3])] = &[
    ("problem", ["Identify the core challenge", "Quantify the impact", "Explain why it matters now"]),
    ("solution", ["Present the approach", "Highlight key benefits", "Show differentiation"]),
    ("feature", ["Core capability", "User benefit", "Example use case"]),
    ("demo", ["Walk through the flow", "Highlight key moments", "Show the result"]),
    ("pricing", ["Tier overview", "Key inclusions", "Call to action"]),
    ("team", ["Key team members", "Relevant experience", "Contact information"]),
    ("timeline", ["Major milestones", "Key dates", "Dependencies"]),
    ("agenda", ["Main topic 1", "Main topic 2", "Main topic 3"]),
];

const GENERIC_BULLETS: [&str; 3] = ["Key point 1", "Key point 2", "Key point 3"];

/// Layouts that never carry request-supplied bullets.
const BOOKEND_LAYOUTS: [&str; 3] = ["title_slide", "thank_you_slide", "blank"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    Title,
    Content,
    Closing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlidePlan {
    pub kind: PlanKind,
    pub title: String,
    pub layout: String,
    pub bullets: Vec<String>,
    pub notes: String,
    pub estimated_seconds: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationHint>,
}

/// Template bullets for a section, matched on the first keyword found in its name.
pub fn section_bullets(section_name: &str) -> Vec<String> {
    let lower = section_name.to_lowercase();
    let bullets = BULLET_TEMPLATES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map_or(GENERIC_BULLETS, |(_, bullets)| *bullets);
    bullets.iter().map(|b| b.to_string()).collect()
}

/// Note template of the first speech note whose slide type contains `slide_type`.
/// Both sides are compared lowercased with spaces as underscores.
pub fn notes_template(slide_type: &str, notes: &[SpeechNote]) -> String {
    let wanted = normalize_note_type(slide_type);
    notes
        .iter()
        .find(|note| normalize_note_type(&note.slide_type).contains(&wanted))
        .map(|note| note.note_template.clone())
        .unwrap_or_default()
}

fn normalize_note_type(value: &str) -> String {
    value.to_lowercase().replace(' ', "_")
}

/// Splits request-supplied items across `slides` slides; `None` where a slide gets none.
fn spread(items: &[String], slides: u32) -> Vec<Option<Vec<String>>> {
    let slides = slides as usize;
    if slides == 0 {
        return Vec::new();
    }
    if items.is_empty() {
        return vec![None; slides];
    }
    let per_slide = items.len().div_ceil(slides);
    let mut chunks: Vec<Option<Vec<String>>> =
        items.chunks(per_slide).map(|c| Some(c.to_vec())).collect();
    chunks.resize(slides, None);
    chunks
}

fn is_agenda(section: &Section) -> bool {
    section.name.to_lowercase().contains("agenda")
}

/// First section that would otherwise show generic placeholder bullets.
fn key_point_section(sections: &[Section]) -> Option<usize> {
    sections.iter().position(|s| {
        !BOOKEND_LAYOUTS.contains(&s.primary_layout()) && section_bullets(&s.name) == GENERIC_BULLETS
    })
}

pub fn generate_slide_plan(
    reasoning: &Reasoning,
    request: &PresentationRequest,
    notes: &[SpeechNote],
) -> Vec<SlidePlan> {
    let sections = &reasoning.structure.sections;
    let mut plans = Vec::with_capacity(reasoning.structure.total_section_slides() as usize + 2);

    plans.push(SlidePlan {
        kind: PlanKind::Title,
        title: request.title.clone(),
        layout: "title_slide".to_string(),
        bullets: Vec::new(),
        notes: notes_template("Title Slide", notes),
        estimated_seconds: BOOKEND_SECONDS,
        animation: None,
    });

    let key_points_at = key_point_section(sections);
    let content_notes = notes_template("Content Slide", notes);

    for (index, section) in sections.iter().enumerate() {
        let supplied = if is_agenda(section) && !request.objectives.is_empty() {
            spread(&request.objectives, section.slide_count)
        } else if key_points_at == Some(index) {
            spread(&request.key_points, section.slide_count)
        } else {
            vec![None; section.slide_count as usize]
        };
        let hint = animation_hint(reasoning.animation_intensity, &section.name);

        for (part, bullets) in supplied.into_iter().enumerate() {
            plans.push(SlidePlan {
                kind: PlanKind::Content,
                title: format!("{} - Part {}", section.name, part + 1),
                layout: section.primary_layout().to_string(),
                bullets: bullets.unwrap_or_else(|| section_bullets(&section.name)),
                notes: content_notes.clone(),
                estimated_seconds: reasoning.time_per_slide,
                animation: Some(hint.clone()),
            });
        }
    }

    plans.push(SlidePlan {
        kind: PlanKind::Closing,
        title: "Thank You".to_string(),
        layout: "thank_you_slide".to_string(),
        bullets: vec![
            "Questions?".to_string(),
            format!("Contact: {}", request.contact_email()),
        ],
        notes: notes_template("Thank You Slide", notes),
        estimated_seconds: BOOKEND_SECONDS,
        animation: None,
    });

    plans
}
