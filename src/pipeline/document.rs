// src/pipeline/document.rs
use deckplan_reasoning::{AnimationIntensity, PresentationType, Reasoning, TransitionStyle};
use deckplan_slides::{PresentationMetadata, Slide};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::PipelineError;

/// The names behind a [`Reasoning`], as shown to people reading the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReasoningSummary {
    pub presentation_type: PresentationType,
    pub pattern: String,
    pub style: String,
    pub colors: String,
    pub typography: String,
    pub slide_count: u32,
    pub time_per_slide: f64,
    pub animation_intensity: AnimationIntensity,
    pub transition_style: TransitionStyle,
    pub tone_adjustment: String,
}

impl From<&Reasoning> for ReasoningSummary {
    fn from(reasoning: &Reasoning) -> Self {
        Self {
            presentation_type: reasoning.presentation_type,
            pattern: reasoning.pattern.name.clone(),
            style: reasoning.style.name.clone(),
            colors: reasoning.colors.name.clone(),
            typography: reasoning.typography.name.clone(),
            slide_count: reasoning.slide_count_estimate,
            time_per_slide: reasoning.time_per_slide,
            animation_intensity: reasoning.animation_intensity,
            transition_style: reasoning.transition_style,
            tone_adjustment: reasoning.tone_adjustment.clone(),
        }
    }
}

/// Everything one pipeline run produces. This is what the CLI prints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationDocument {
    pub metadata: PresentationMetadata,
    pub reasoning: ReasoningSummary,
    pub recommendations: Vec<String>,
    pub anti_patterns: Vec<String>,
    pub slides: Vec<Slide>,
}

impl PresentationDocument {
    pub fn to_json_string(&self) -> Result<String, PipelineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PipelineError> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}
