//! Style, palette and typography resolution against the catalogs.

use crate::request::PresentationRequest;
use deckplan_rules::{ColorRecord, PatternRecord, StyleRecord, TypographyRecord};
use deckplan_types::Color;
use log::debug;
use serde::{Deserialize, Serialize};

const SUITABLE: [&str; 2] = ["Very High", "High"];

/// A resolved palette with parsed colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    pub name: String,
    pub primary: Color,
    pub secondary: Color,
    pub cta: Color,
    pub background: Color,
    pub text: Color,
    pub projector_safe: String,
    pub contrast_ratio: String,
    pub notes: String,
}

impl ColorScheme {
    pub fn business_professional() -> Self {
        Self {
            name: "Business Professional".to_string(),
            primary: Color::rgb(0x00, 0x33, 0x66),
            secondary: Color::rgb(0x00, 0x66, 0xCC),
            cta: Color::rgb(0xFF, 0x66, 0x00),
            background: Color::WHITE,
            text: Color::rgb(0x1A, 0x1A, 0x1A),
            projector_safe: "Yes".to_string(),
            contrast_ratio: "15:1".to_string(),
            notes: "Professional and reliable for all business presentations".to_string(),
        }
    }

    /// Builds a scheme from a catalog row. Cells that are not valid colors keep
    /// the business-professional value for that slot.
    fn from_record(record: &ColorRecord, primary_hex: &str) -> Self {
        let fallback = Self::business_professional();
        Self {
            name: record.product_type.clone(),
            primary: Color::parse_or(primary_hex, fallback.primary),
            secondary: Color::parse_or(&record.secondary_hex, fallback.secondary),
            cta: Color::parse_or(&record.cta_hex, fallback.cta),
            background: Color::parse_or(&record.projector_background, fallback.background),
            text: Color::parse_or(&record.projector_text, fallback.text),
            projector_safe: record.projector_safety.clone(),
            contrast_ratio: record.contrast_ratio.clone(),
            notes: record.projector_notes.clone(),
        }
    }
}

fn split_tokens(value: &str) -> Vec<String> {
    value
        .split('+')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// First highly suitable style whose name contains one of the pattern's style tokens.
pub fn resolve_style(pattern: &PatternRecord, styles: &[StyleRecord]) -> StyleRecord {
    let tokens = split_tokens(&pattern.primary_style);
    let found = styles.iter().find(|style| {
        let name = style.name.to_lowercase();
        SUITABLE.contains(&style.presentation_suitability.trim())
            && tokens.iter().any(|token| name.contains(token.as_str()))
    });

    match found {
        Some(style) => {
            debug!("Style resolved to '{}'.", style.name);
            style.clone()
        }
        None => {
            debug!("No suitable style for '{}'; using default.", pattern.primary_style);
            StyleRecord::minimalism_swiss()
        }
    }
}

/// Mood match first, then industry match, then the business-professional palette.
pub fn resolve_colors(
    request: &PresentationRequest,
    pattern: &PatternRecord,
    colors: &[ColorRecord],
) -> ColorScheme {
    let tokens = split_tokens(&pattern.color_mood);
    let by_mood = colors.iter().find(|row| {
        let keywords = row.keywords.to_lowercase();
        tokens.iter().any(|token| keywords.contains(token.as_str()))
            && !row.projector_primary.trim().is_empty()
    });
    if let Some(row) = by_mood {
        debug!("Palette '{}' matched the color mood.", row.product_type);
        return ColorScheme::from_record(row, &row.primary_hex);
    }

    let industry = request.industry.trim().to_lowercase();
    if !industry.is_empty() {
        let by_industry = colors
            .iter()
            .find(|row| row.keywords.to_lowercase().contains(&industry));
        if let Some(row) = by_industry {
            debug!("Palette '{}' matched industry '{}'.", row.product_type, industry);
            return ColorScheme::from_record(row, &row.projector_primary);
        }
    }

    debug!("No palette matched; using Business Professional.");
    ColorScheme::business_professional()
}

/// First font pairing whose mood matches the pattern's typography mood or whose
/// intended use mentions the presentation type.
pub fn resolve_typography(
    request: &PresentationRequest,
    pattern: &PatternRecord,
    typography: &[TypographyRecord],
) -> TypographyRecord {
    let tokens: Vec<String> = pattern
        .typography_mood
        .split(|c: char| c == '+' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect();
    let keyword = request.presentation_type.keyword();

    let found = typography.iter().find(|row| {
        let mood = row.mood.to_lowercase();
        tokens.iter().any(|token| mood.contains(token.as_str()))
            || row.best_for.to_lowercase().contains(&keyword)
    });

    match found {
        Some(row) => {
            debug!("Typography resolved to '{}'.", row.name);
            row.clone()
        }
        None => TypographyRecord::modern_professional(),
    }
}
