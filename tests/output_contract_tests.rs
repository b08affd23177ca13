mod common;

use common::{TestResult, default_orchestrator, fixed_time};
use deckplan::{PipelineBuilder, PresentationDocument, PresentationMetadata, PresentationRequest, Slide};
use serde_json::json;

fn request() -> PresentationRequest {
    PresentationRequest::builder("Platform Roadmap")
        .industry("Logistics")
        .key_points(["Cut onboarding to one day", "Self-serve billing"])
        .objectives(["Agree on Q4 scope"])
        .contact_email("roadmap@example.com")
        .build()
}

#[test]
fn test_same_inputs_give_identical_json() -> TestResult {
    let first = default_orchestrator().generate_document(&request()).to_json_string()?;
    let second = default_orchestrator().generate_document(&request()).to_json_string()?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_document_round_trips() -> TestResult {
    let document = default_orchestrator().generate_document(&request());
    let back = PresentationDocument::from_json_str(&document.to_json_string()?)?;
    assert_eq!(back, document);

    for slide in &document.slides {
        let text = serde_json::to_string(slide)?;
        let parsed: Slide = serde_json::from_str(&text)?;
        assert_eq!(&parsed, slide);
    }
    let meta: PresentationMetadata = serde_json::from_value(serde_json::to_value(&document.metadata)?)?;
    assert_eq!(meta, document.metadata);
    Ok(())
}

#[test]
fn test_top_level_keys_and_metadata() -> TestResult {
    let orchestrator = PipelineBuilder::new()
        .with_author("Grace")
        .with_company("Acme")
        .with_generated_at(fixed_time())
        .build()?;
    let document = orchestrator.generate_document(&request());
    let value = serde_json::to_value(&document)?;

    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    for key in ["metadata", "reasoning", "recommendations", "antiPatterns", "slides"] {
        assert!(keys.contains(&key), "missing {key}");
    }
    assert_eq!(
        value["metadata"],
        json!({
            "title": "Platform Roadmap",
            "subtitle": "Presented by: Logistics",
            "author": "Grace",
            "company": "Acme",
            "date": "March 04, 2025",
            "version": "1.0",
            "theme": "Minimalism & Swiss Style",
            "aspectRatio": "16:9",
            "slideCount": 12,
            "estimatedDurationMinutes": 15
        })
    );
    assert_eq!(value["reasoning"]["presentationType"], "business_presentation");
    assert_eq!(value["reasoning"]["animationIntensity"], "low");
    Ok(())
}

#[test]
fn test_slide_json_contract() -> TestResult {
    let document = default_orchestrator().generate_document(&request());
    let slide = serde_json::to_value(&document.slides[0])?;

    assert_eq!(slide["id"], "1");
    assert_eq!(slide["type"], "title");
    assert_eq!(slide["slideNumber"], 1);
    assert_eq!(slide["aspectRatio"], "16:9");
    assert_eq!(slide["background"]["fillColor"], "#FFFFFF");
    assert_eq!(slide["createdAt"], "2025-03-04T09:30:00Z");
    assert_eq!(slide["modifiedAt"], slide["createdAt"]);
    assert_eq!(slide["customProperties"]["estimatedSeconds"], 60.0);

    let title = &slide["contents"][0];
    assert_eq!(title["id"], "1_title");
    assert_eq!(title["type"], "title");
    assert_eq!(title["text"], "Platform Roadmap");
    assert_eq!(title["position"], json!({"left": 0.5, "top": 2.5, "width": 12.0, "height": 1.5}));
    assert_eq!(title["style"]["fontSize"], 54);
    assert_eq!(title["style"]["textAlign"], "center");
    assert_eq!(title["animation"]["effect"], "fade");
    Ok(())
}

#[test]
fn test_request_content_reaches_slides() {
    let document = default_orchestrator().generate_document(&request());
    let texts: Vec<&str> = document
        .slides
        .iter()
        .flat_map(|s| s.contents.iter().map(|c| c.text.as_str()))
        .collect();

    assert!(texts.contains(&"Cut onboarding to one day"));
    assert!(texts.contains(&"1. Agree on Q4 scope"));
    assert!(texts.contains(&"Contact: roadmap@example.com"));
}

#[test]
fn test_disabled_animations_and_transitions() {
    let request = PresentationRequest::builder("Board update")
        .include_animations(false)
        .include_transitions(false)
        .build();
    let document = default_orchestrator().generate_document(&request);
    assert!(document.slides.iter().flat_map(|s| &s.contents).all(|c| c.animation.is_none()));
    assert!(
        document
            .slides
            .iter()
            .all(|s| s.transition.effect == deckplan_style::AnimationEffect::None)
    );
}

#[test]
fn test_write_to_file() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("deck.json");
    let document = default_orchestrator().generate_document(&request());
    document.write_to_file(&path)?;
    let back = PresentationDocument::from_json_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(back.slides.len(), document.slides.len());
    Ok(())
}
