//! Typed catalog rows.
//!
//! Field names follow the catalog column headers. A column missing from a file
//! takes the value from the record's `Default` impl. Numeric cells that do not
//! parse are kept as `None` so that consumers can apply their own fallback.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumericCell {
    Int(u64),
    Float(f64),
    Text(String),
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let cell = Option::<NumericCell>::deserialize(deserializer)?;
    Ok(match cell {
        Some(NumericCell::Int(n)) => u32::try_from(n).ok(),
        Some(NumericCell::Float(f)) if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 => {
            Some(f as u32)
        }
        Some(NumericCell::Text(s)) => s.trim().parse::<u32>().ok(),
        _ => None,
    })
}

/// A presentation archetype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternRecord {
    #[serde(rename = "Pattern_Name")]
    pub name: String,
    #[serde(rename = "Pattern_Category")]
    pub category: String,
    #[serde(rename = "Duration_Range_Min", deserialize_with = "lenient_u32")]
    pub duration_min: Option<u32>,
    #[serde(rename = "Duration_Range_Max", deserialize_with = "lenient_u32")]
    pub duration_max: Option<u32>,
    #[serde(rename = "Slide_Count_Min", deserialize_with = "lenient_u32")]
    pub slide_count_min: Option<u32>,
    #[serde(rename = "Slide_Count_Max", deserialize_with = "lenient_u32")]
    pub slide_count_max: Option<u32>,
    #[serde(rename = "Structure_Format")]
    pub structure_format: String,
    #[serde(rename = "Tone")]
    pub tone: String,
    #[serde(rename = "Animation_Intensity")]
    pub animation_intensity: String,
    #[serde(rename = "Transition_Style")]
    pub transition_style: String,
    #[serde(rename = "Key_Components")]
    pub key_components: String,
    #[serde(rename = "Common_Pitfalls")]
    pub common_pitfalls: String,
    #[serde(rename = "Primary_Style")]
    pub primary_style: String,
    #[serde(rename = "Color_Mood")]
    pub color_mood: String,
    #[serde(rename = "Typography_Mood")]
    pub typography_mood: String,
}

impl Default for PatternRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            duration_min: Some(0),
            duration_max: Some(100),
            slide_count_min: Some(10),
            slide_count_max: Some(20),
            structure_format: String::new(),
            tone: String::new(),
            animation_intensity: String::new(),
            transition_style: String::new(),
            key_components: String::new(),
            common_pitfalls: String::new(),
            primary_style: String::new(),
            color_mood: String::new(),
            typography_mood: String::new(),
        }
    }
}

impl PatternRecord {
    /// The pattern used when no catalog row scores.
    pub fn standard_business() -> Self {
        Self {
            name: "Standard Business Presentation".to_string(),
            category: "business".to_string(),
            duration_min: Some(15),
            duration_max: Some(30),
            slide_count_min: Some(12),
            slide_count_max: Some(20),
            structure_format: "Opening→Agenda→Content→Q&A→Closing".to_string(),
            tone: "Professional".to_string(),
            animation_intensity: "Low".to_string(),
            transition_style: "Push or Fade".to_string(),
            key_components: "Opening,Content,Q&A".to_string(),
            common_pitfalls: "Text-heavy slides".to_string(),
            ..Self::default()
        }
    }
}

/// Visual style family and its projector suitability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleRecord {
    #[serde(rename = "Style_Category")]
    pub name: String,
    #[serde(rename = "Presentation_Suitability")]
    pub presentation_suitability: String,
    #[serde(rename = "Layout_Category")]
    pub layout_category: String,
    #[serde(rename = "Slide_Applications")]
    pub applications: String,
    #[serde(rename = "Slide_Title_Size")]
    pub title_size: String,
    #[serde(rename = "Slide_Body_Size")]
    pub body_size: String,
    #[serde(rename = "Slide_Caption_Size")]
    pub caption_size: String,
    #[serde(rename = "Animation_Recommendations")]
    pub animation_recommendations: String,
    #[serde(rename = "Contrast_Requirements")]
    pub contrast_requirements: String,
    #[serde(rename = "Projector_Safety_Score")]
    pub projector_safety_score: String,
    #[serde(rename = "Accessibility_Notes")]
    pub accessibility_notes: String,
}

impl StyleRecord {
    pub fn minimalism_swiss() -> Self {
        Self {
            name: "Minimalism & Swiss Style".to_string(),
            presentation_suitability: "Very High".to_string(),
            layout_category: "General".to_string(),
            applications: "All slide types".to_string(),
            title_size: "44-54pt".to_string(),
            body_size: "24-32pt".to_string(),
            caption_size: "18-20pt".to_string(),
            animation_recommendations: "Fade In, Appear".to_string(),
            contrast_requirements: "7:1 minimum".to_string(),
            projector_safety_score: "9/10".to_string(),
            accessibility_notes: "Excellent for projection".to_string(),
        }
    }
}

/// A projector-safe palette. Hex cells are kept as text and parsed by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorRecord {
    #[serde(rename = "Product_Type")]
    pub product_type: String,
    #[serde(rename = "Keywords")]
    pub keywords: String,
    #[serde(rename = "Primary_Hex")]
    pub primary_hex: String,
    #[serde(rename = "Secondary_Hex")]
    pub secondary_hex: String,
    #[serde(rename = "CTA_Hex")]
    pub cta_hex: String,
    #[serde(rename = "Projector_Primary")]
    pub projector_primary: String,
    #[serde(rename = "Projector_Background")]
    pub projector_background: String,
    #[serde(rename = "Projector_Text")]
    pub projector_text: String,
    #[serde(rename = "Projector_Safety")]
    pub projector_safety: String,
    #[serde(rename = "Contrast_Ratio")]
    pub contrast_ratio: String,
    #[serde(rename = "Projector_Notes")]
    pub projector_notes: String,
}

impl Default for ColorRecord {
    fn default() -> Self {
        Self {
            product_type: "Custom".to_string(),
            keywords: String::new(),
            primary_hex: "#003366".to_string(),
            secondary_hex: "#0066CC".to_string(),
            cta_hex: "#FF6600".to_string(),
            projector_primary: "#003366".to_string(),
            projector_background: "#FFFFFF".to_string(),
            projector_text: "#1A1A1A".to_string(),
            projector_safety: "Yes".to_string(),
            contrast_ratio: "7:1".to_string(),
            projector_notes: String::new(),
        }
    }
}

/// A heading/body font pairing sized for projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographyRecord {
    #[serde(rename = "Font_Pairing_Name")]
    pub name: String,
    #[serde(rename = "Heading_Font")]
    pub heading_font: String,
    #[serde(rename = "Body_Font")]
    pub body_font: String,
    #[serde(rename = "Slide_Title_Size")]
    pub title_size: String,
    #[serde(rename = "Slide_Body_Size")]
    pub body_size: String,
    #[serde(rename = "Slide_Caption_Size")]
    pub caption_size: String,
    #[serde(rename = "Google_Fonts_URL")]
    pub google_fonts_url: String,
    #[serde(rename = "CSS_Import")]
    pub css_import: String,
    #[serde(rename = "Mood_Style_Keywords")]
    pub mood: String,
    #[serde(rename = "Best_For_Presentation")]
    pub best_for: String,
    #[serde(rename = "Reading_Distance")]
    pub reading_distance: String,
}

impl Default for TypographyRecord {
    fn default() -> Self {
        Self {
            name: "Modern Professional".to_string(),
            heading_font: "Inter".to_string(),
            body_font: "Inter".to_string(),
            title_size: "44-54pt".to_string(),
            body_size: "24-32pt".to_string(),
            caption_size: "18-20pt".to_string(),
            google_fonts_url: String::new(),
            css_import: String::new(),
            mood: String::new(),
            best_for: String::new(),
            reading_distance: "15-30ft".to_string(),
        }
    }
}

impl TypographyRecord {
    pub fn modern_professional() -> Self {
        Self {
            heading_font: "Poppins".to_string(),
            body_font: "Open Sans".to_string(),
            google_fonts_url: "https://fonts.google.com/share?selection.family=Open+Sans|Poppins"
                .to_string(),
            css_import: "@import url('https://fonts.googleapis.com/css2?family=Open+Sans:wght@400;600&family=Poppins:wght@600;700&display=swap');".to_string(),
            mood: "Modern professional clean corporate".to_string(),
            best_for: "Corporate presentations, Business meetings".to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationRecord {
    #[serde(rename = "Animation_Name")]
    pub name: String,
    #[serde(rename = "Animation_Category")]
    pub category: String,
    #[serde(rename = "Effect_Type")]
    pub effect_type: String,
    #[serde(rename = "Duration_Seconds_Duration")]
    pub duration: String,
    #[serde(rename = "Best_For")]
    pub best_for: String,
    #[serde(rename = "Avoid_For")]
    pub avoid_for: String,
    #[serde(rename = "Applicability_Score")]
    pub applicability: String,
}

/// How to pitch content for one audience segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudienceGuideline {
    #[serde(rename = "Audience_Name")]
    pub audience_name: String,
    #[serde(rename = "Key_Characteristics")]
    pub characteristics: String,
    #[serde(rename = "Attention_Span")]
    pub attention_span: String,
    #[serde(rename = "Information_Preference")]
    pub information_preference: String,
    #[serde(rename = "Decision_Making_Style")]
    pub decision_style: String,
    #[serde(rename = "Motivation_Factors")]
    pub motivation_factors: String,
    #[serde(rename = "Visual_Preference")]
    pub visual_preference: String,
    #[serde(rename = "Data_Tolerance")]
    pub data_tolerance: String,
    #[serde(rename = "Engagement_Strategies")]
    pub engagement_strategies: String,
    #[serde(rename = "Talking_Speed")]
    pub talking_speed: String,
    #[serde(rename = "Slide_Density")]
    pub slide_density: String,
    #[serde(rename = "Content_Ratio")]
    pub content_ratio: String,
}

impl AudienceGuideline {
    pub fn general() -> Self {
        Self {
            audience_name: "General".to_string(),
            characteristics: "Mixed background and expertise".to_string(),
            attention_span: "Medium (10-15 min per topic)".to_string(),
            information_preference: "Clear and actionable".to_string(),
            decision_style: "Varied".to_string(),
            motivation_factors: "Professional growth".to_string(),
            visual_preference: "Clean and professional".to_string(),
            data_tolerance: "Medium".to_string(),
            engagement_strategies: "Interactive elements".to_string(),
            talking_speed: "Medium".to_string(),
            slide_density: "Medium".to_string(),
            content_ratio: "50% storytelling; 50% information".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechNote {
    #[serde(rename = "Slide_Type")]
    pub slide_type: String,
    #[serde(rename = "Note_Template")]
    pub note_template: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_numeric_columns_take_defaults() {
        let p: PatternRecord = serde_json::from_value(json!({ "Pattern_Name": "Lean" })).unwrap();
        assert_eq!(p.duration_min, Some(0));
        assert_eq!(p.duration_max, Some(100));
        assert_eq!(p.slide_count_min, Some(10));
        assert_eq!(p.slide_count_max, Some(20));
    }

    #[test]
    fn test_malformed_numerics_become_absent() {
        let p: PatternRecord = serde_json::from_value(json!({
            "Duration_Range_Min": "ten",
            "Duration_Range_Max": " 45 ",
            "Slide_Count_Min": "",
            "Slide_Count_Max": 18
        }))
        .unwrap();
        assert_eq!(p.duration_min, None);
        assert_eq!(p.duration_max, Some(45));
        assert_eq!(p.slide_count_min, None);
        assert_eq!(p.slide_count_max, Some(18));
    }

    #[test]
    fn test_column_names_survive_serialization() {
        let json = serde_json::to_value(ColorRecord::default()).unwrap();
        assert_eq!(json["CTA_Hex"], "#FF6600");
        assert_eq!(json["Product_Type"], "Custom");
    }
}
