// src/pipeline/orchestrator.rs
use super::config::{GenerationOptions, METADATA_DATE_FORMAT, METADATA_VERSION};
use super::document::{PresentationDocument, ReasoningSummary};
use crate::executor::{Executor, ExecutorImpl};
use chrono::{DateTime, Utc};
use deckplan_reasoning::{
    AudienceType, Choice, PresentationRequest, PresentationType, Reasoning, ReasoningEngine, Tone,
};
use deckplan_rules::RuleTable;
use deckplan_slides::{PresentationMetadata, Slide, SlideContentGenerator};
use log::{debug, info};
use std::sync::Arc;

/// Keyword groups for [`detect_presentation_type`], checked in order.
const TYPE_KEYWORDS: &[(&[&str], PresentationType)] = &[
    (&["pitch", "investor", "vc", "fundraising"], PresentationType::InvestorPitch),
    (&["launch", "product", "announce"], PresentationType::ProductLaunch),
    (&["training", "workshop", "learn"], PresentationType::TrainingWorkshop),
    (&["quarterly", "review", "quarter"], PresentationType::QuarterlyReview),
    (&["conference", "talk", "speech"], PresentationType::ConferenceTalk),
    (&["technical", "engineering", "developer"], PresentationType::TechnicalWorkshop),
];

/// Guesses the presentation type from free text; defaults to a business presentation.
pub fn detect_presentation_type(query: &str) -> PresentationType {
    let lower = query.to_lowercase();
    TYPE_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map_or(PresentationType::BusinessPresentation, |(_, kind)| *kind)
}

/// Runs requests through reasoning, planning and slide generation.
///
/// Construct it with [`crate::PipelineBuilder`]. The orchestrator is read-only and
/// can be shared across threads.
#[derive(Debug, Clone)]
pub struct PresentationOrchestrator {
    engine: ReasoningEngine,
    options: GenerationOptions,
    executor: ExecutorImpl,
}

impl PresentationOrchestrator {
    pub fn new(rules: Arc<RuleTable>, options: GenerationOptions, executor: ExecutorImpl) -> Self {
        Self {
            engine: ReasoningEngine::new(rules),
            options,
            executor,
        }
    }

    pub fn engine(&self) -> &ReasoningEngine {
        &self.engine
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Slides and metadata for one request.
    pub fn generate(&self, request: &PresentationRequest) -> (Vec<Slide>, PresentationMetadata) {
        let document = self.generate_document(request);
        (document.slides, document.metadata)
    }

    pub fn generate_document(&self, request: &PresentationRequest) -> PresentationDocument {
        let timestamp = self.options.timestamp();
        let reasoning = self.engine.analyze(request);
        let plans = self.engine.generate_slide_plan(&reasoning, request);
        debug!("Planned {} slides for '{}'.", plans.len(), request.title);

        let metadata = self.build_metadata(request, &reasoning, plans.len() as u32, timestamp);
        let slides = SlideContentGenerator::new(&request.aspect_ratio, timestamp)
            .with_transitions(request.include_transitions)
            .generate(&reasoning, &plans, &metadata);
        info!(
            "Generated {} slides for '{}' in the '{}' theme.",
            slides.len(),
            request.title,
            metadata.theme
        );

        PresentationDocument {
            reasoning: ReasoningSummary::from(&reasoning),
            recommendations: reasoning.recommendations,
            anti_patterns: reasoning.anti_patterns,
            metadata,
            slides,
        }
    }

    /// Like [`Self::generate_document`], but from loosely typed inputs. Unknown
    /// names fall back to their defaults.
    pub fn generate_from_strings(
        &self,
        title: &str,
        presentation_type: &str,
        audience: &str,
        duration_minutes: u32,
        tone: &str,
    ) -> PresentationDocument {
        let request =
            PresentationRequest::from_strings(title, presentation_type, audience, duration_minutes, tone);
        self.generate_document(&request)
    }

    /// Builds a deck from a free-text query, detecting the presentation type from
    /// its keywords.
    pub fn quick_generate(&self, query: &str, duration_minutes: u32, audience: &str) -> PresentationDocument {
        let presentation_type = detect_presentation_type(query);
        info!("Quick generation detected '{}' for '{}'.", presentation_type, query);
        let request = PresentationRequest::builder(query)
            .presentation_type(presentation_type)
            .audience(AudienceType::parse_or_default(audience))
            .duration_minutes(duration_minutes)
            .tone(Tone::Professional)
            .build();
        self.generate_document(&request)
    }

    /// Generates many decks through the configured executor. Output order matches
    /// input order.
    pub fn generate_batch(&self, requests: Vec<PresentationRequest>) -> Vec<PresentationDocument> {
        info!(
            "Generating {} decks with parallelism {}.",
            requests.len(),
            self.executor.parallelism()
        );
        self.executor
            .execute_all(requests, |request| self.generate_document(&request))
    }

    pub fn available_presentation_types() -> Vec<Choice> {
        ReasoningEngine::available_presentation_types()
    }

    pub fn available_audiences() -> Vec<Choice> {
        ReasoningEngine::available_audiences()
    }

    pub fn available_tones() -> Vec<Choice> {
        ReasoningEngine::available_tones()
    }

    fn build_metadata(
        &self,
        request: &PresentationRequest,
        reasoning: &Reasoning,
        slide_count: u32,
        timestamp: DateTime<Utc>,
    ) -> PresentationMetadata {
        let industry = request.industry.trim();
        PresentationMetadata {
            title: request.title.clone(),
            subtitle: (!industry.is_empty()).then(|| format!("Presented by: {}", industry)),
            author: self.options.author.clone(),
            company: self.options.company.clone(),
            date: timestamp.format(METADATA_DATE_FORMAT).to_string(),
            version: METADATA_VERSION.to_string(),
            theme: reasoning.style.name.clone(),
            aspect_ratio: request.aspect_ratio.clone(),
            slide_count,
            estimated_duration_minutes: request.duration_minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::SyncExecutor;
    use chrono::TimeZone;

    fn orchestrator() -> PresentationOrchestrator {
        let options = GenerationOptions {
            author: Some("Ada Lovelace".to_string()),
            company: None,
            generated_at: Some(Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()),
        };
        PresentationOrchestrator::new(
            Arc::new(RuleTable::empty()),
            options,
            ExecutorImpl::Sync(SyncExecutor),
        )
    }

    #[test]
    fn test_detect_presentation_type() {
        assert_eq!(detect_presentation_type("Series A investor deck"), PresentationType::InvestorPitch);
        assert_eq!(detect_presentation_type("Announce the new app"), PresentationType::ProductLaunch);
        assert_eq!(detect_presentation_type("Onboarding workshop"), PresentationType::TrainingWorkshop);
        assert_eq!(detect_presentation_type("Q3 quarterly numbers"), PresentationType::QuarterlyReview);
        assert_eq!(detect_presentation_type("Keynote speech"), PresentationType::ConferenceTalk);
        assert_eq!(detect_presentation_type("Engineering all-hands"), PresentationType::TechnicalWorkshop);
        assert_eq!(detect_presentation_type("Budget"), PresentationType::BusinessPresentation);
        // Earlier groups win.
        assert_eq!(detect_presentation_type("Product pitch"), PresentationType::InvestorPitch);
    }

    #[test]
    fn test_metadata_from_request_and_options() {
        let request = PresentationRequest::builder("Roadmap")
            .industry("Fintech")
            .duration_minutes(15)
            .build();
        let (slides, metadata) = orchestrator().generate(&request);

        assert_eq!(metadata.slide_count as usize, slides.len());
        assert_eq!(metadata.subtitle.as_deref(), Some("Presented by: Fintech"));
        assert_eq!(metadata.author.as_deref(), Some("Ada Lovelace"));
        assert_eq!(metadata.company, None);
        assert_eq!(metadata.date, "January 15, 2025");
        assert_eq!(metadata.version, "1.0");
        assert_eq!(metadata.theme, "Minimalism & Swiss Style");
        assert_eq!(metadata.estimated_duration_minutes, 15);
        assert_eq!(slides[0].content("subtitle").unwrap().text, "Presented by: Fintech");
    }

    #[test]
    fn test_quick_generate_defaults() {
        let document = orchestrator().quick_generate("Investor pitch for seed round", 10, "unknown");
        assert_eq!(document.reasoning.presentation_type, PresentationType::InvestorPitch);
        assert!(!document.reasoning.tone_adjustment.is_empty());
        assert_eq!(document.metadata.estimated_duration_minutes, 10);
        assert_eq!(document.metadata.slide_count as usize, document.slides.len());
    }

    #[test]
    fn test_batch_keeps_order() {
        let requests: Vec<_> = [5, 15, 30]
            .into_iter()
            .map(|m| PresentationRequest::builder(format!("Deck {m}")).duration_minutes(m).build())
            .collect();
        let documents = orchestrator().generate_batch(requests);
        let titles: Vec<_> = documents.iter().map(|d| d.metadata.title.as_str()).collect();
        assert_eq!(titles, ["Deck 5", "Deck 15", "Deck 30"]);
    }
}
