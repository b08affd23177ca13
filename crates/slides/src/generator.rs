//! Expands slide plans into positioned, styled slides.

use crate::layout::{self, has_title_element, slide_type_for_layout, title_font_size, title_position};
use crate::model::{ContentType, PresentationMetadata, Slide, SlideContent, SlideType};
use chrono::{DateTime, Utc};
use deckplan_reasoning::{AnimationIntensity, ColorScheme, Reasoning, SlidePlan, TransitionStyle};
use deckplan_style::{
    Animation, AnimationDirection, AnimationEffect, AnimationTrigger, ShapeStyle, TextStyle,
    leading_size_or,
};
use deckplan_types::{Canvas, Color, Position};
use log::{debug, warn};
use serde_json::{Map, Value};

const FALLBACK_FONT_SIZE: u16 = 24;
const AGENDA_DELAY_STEP: f32 = 0.3;
const CONTENT_DELAY_STEP: f32 = 0.4;
const COLUMN_DELAY_STEP: f32 = 0.3;
const EMPHASIS_DURATION: f32 = 0.3;
const CLOSING_PROMPT: &str = "Questions?";

/// Deck-wide styles derived once from the reasoning.
#[derive(Debug, Clone)]
struct Theme {
    title: TextStyle,
    body: TextStyle,
    cta: TextStyle,
    background: ShapeStyle,
    transition: Animation,
    colors: ColorScheme,
    animate: bool,
}

impl Theme {
    fn new(reasoning: &Reasoning, include_transitions: bool) -> Self {
        let typography = &reasoning.typography;
        let colors = reasoning.colors.clone();

        let title = TextStyle::new(
            typography.heading_font.as_str(),
            leading_size_or(&typography.title_size, FALLBACK_FONT_SIZE),
        )
        .bold()
        .with_color(colors.text)
        .centered();
        let body = TextStyle::new(
            typography.body_font.as_str(),
            leading_size_or(&typography.body_size, FALLBACK_FONT_SIZE),
        )
        .with_color(colors.text);
        let cta = TextStyle::new(typography.heading_font.as_str(), 28)
            .bold()
            .with_color(Color::WHITE)
            .with_background(colors.cta)
            .centered();

        let effect = if include_transitions {
            match reasoning.transition_style {
                TransitionStyle::Fade => AnimationEffect::Fade,
                TransitionStyle::Slide => AnimationEffect::Slide,
                TransitionStyle::Push => AnimationEffect::Push,
                TransitionStyle::Zoom => AnimationEffect::Zoom,
            }
        } else {
            AnimationEffect::None
        };

        Self {
            title,
            body,
            cta,
            background: ShapeStyle::filled(colors.background),
            transition: Animation::transition(effect),
            animate: reasoning.animation_intensity != AnimationIntensity::None,
            colors,
        }
    }
}

/// Turns [`SlidePlan`]s into [`Slide`]s using per-type layout templates.
#[derive(Debug, Clone)]
pub struct SlideContentGenerator {
    canvas: Canvas,
    include_transitions: bool,
    timestamp: DateTime<Utc>,
}

impl SlideContentGenerator {
    /// `timestamp` becomes every slide's creation and modification time.
    pub fn new(aspect_ratio: &str, timestamp: DateTime<Utc>) -> Self {
        Self {
            canvas: Canvas::for_aspect_ratio(aspect_ratio),
            include_transitions: true,
            timestamp,
        }
    }

    pub fn with_transitions(mut self, include: bool) -> Self {
        self.include_transitions = include;
        self
    }

    pub fn generate(
        &self,
        reasoning: &Reasoning,
        plans: &[SlidePlan],
        metadata: &PresentationMetadata,
    ) -> Vec<Slide> {
        let theme = Theme::new(reasoning, self.include_transitions);
        plans
            .iter()
            .enumerate()
            .map(|(index, plan)| self.build_slide(&theme, index as u32 + 1, plan, metadata))
            .collect()
    }

    fn build_slide(
        &self,
        theme: &Theme,
        number: u32,
        plan: &SlidePlan,
        metadata: &PresentationMetadata,
    ) -> Slide {
        let slide_type = slide_type_for_layout(&plan.layout);
        let mut builder = SlideBuilder::new(theme, self.canvas, number.to_string(), plan);

        if has_title_element(slide_type) {
            builder.title(slide_type);
        }

        match slide_type {
            SlideType::Title => builder.title_details(metadata),
            SlideType::SectionDivider => builder.section_icon(),
            SlideType::Agenda => builder.agenda_items(),
            SlideType::Comparison => builder.comparison_columns(),
            SlideType::Quote => builder.quote(),
            SlideType::Cta => builder.cta_button(),
            SlideType::ThankYou => builder.thank_you(),
            _ => builder.content_items(),
        }
        debug!(
            "Slide {} '{}' built as {:?} with {} elements.",
            number,
            plan.title,
            slide_type,
            builder.contents.len()
        );

        let mut custom_properties = Map::new();
        custom_properties.insert(
            "estimatedSeconds".to_string(),
            Value::from(plan.estimated_seconds),
        );

        Slide {
            id: builder.id.clone(),
            slide_type,
            title: plan.title.clone(),
            layout: plan.layout.clone(),
            slide_number: number,
            aspect_ratio: metadata.aspect_ratio.clone(),
            background: theme.background.clone(),
            transition: theme.transition.clone(),
            contents: builder.contents,
            notes: plan.notes.clone(),
            created_at: self.timestamp,
            modified_at: self.timestamp,
            custom_properties,
        }
    }
}

/// Accumulates the elements of one slide.
struct SlideBuilder<'a> {
    theme: &'a Theme,
    canvas: Canvas,
    id: String,
    plan: &'a SlidePlan,
    contents: Vec<SlideContent>,
}

impl<'a> SlideBuilder<'a> {
    fn new(theme: &'a Theme, canvas: Canvas, id: String, plan: &'a SlidePlan) -> Self {
        Self {
            theme,
            canvas,
            id,
            plan,
            contents: Vec::new(),
        }
    }

    fn push(
        &mut self,
        suffix: &str,
        content_type: ContentType,
        text: impl Into<String>,
        position: Position,
        style: TextStyle,
        animation: Option<Animation>,
    ) -> &mut SlideContent {
        let position = self.canvas.place(position);
        if !self.canvas.contains(&position) {
            warn!("Element '{}' on slide {} falls outside the canvas.", suffix, self.id);
        }
        let content = SlideContent::new(
            format!("{}_{}", self.id, suffix),
            content_type,
            text,
            position,
            style,
        )
        .with_animation(animation);
        self.contents.push(content);
        let last = self.contents.len() - 1;
        &mut self.contents[last]
    }

    fn fade(&self, trigger: AnimationTrigger, delay: f32) -> Option<Animation> {
        self.theme
            .animate
            .then(|| Animation::new(AnimationEffect::Fade, trigger, delay))
    }

    /// Animation for the list item at `index`, following the plan's animation hint.
    ///
    /// The first item uses the entrance effect. Later items use the emphasis
    /// effect when the hint names one. Delays grow by `step` per item.
    fn reveal(&self, index: usize, step: f32) -> Option<Animation> {
        if !self.theme.animate {
            return None;
        }
        let delay = index as f32 * step;
        let hint = self.plan.animation.as_ref();
        let entrance = match hint.map(|h| h.entrance.as_str()) {
            Some("none") => return None,
            Some("slide_in") => Animation::new(AnimationEffect::Slide, AnimationTrigger::OnClick, delay)
                .with_direction(AnimationDirection::Left),
            _ => Animation::new(AnimationEffect::Fade, AnimationTrigger::OnClick, delay),
        };
        let emphasis = match hint.map(|h| h.emphasis.as_str()) {
            Some("pulse") => Some(AnimationEffect::Pulse),
            Some("appear") => Some(AnimationEffect::Appear),
            _ => None,
        };
        let animation = match emphasis {
            Some(effect) if index > 0 => Animation::new(effect, AnimationTrigger::OnClick, delay)
                .with_duration(EMPHASIS_DURATION),
            _ => entrance,
        };
        Some(animation.with_order(index as u32 + 1))
    }

    fn bullets_or(&self, placeholders: [&str; 3]) -> Vec<String> {
        if self.plan.bullets.is_empty() {
            placeholders.iter().map(|p| p.to_string()).collect()
        } else {
            self.plan.bullets.clone()
        }
    }

    fn secondary_body(&self, size: u16) -> TextStyle {
        self.theme
            .body
            .clone()
            .with_font_size(size)
            .with_color(self.theme.colors.secondary)
    }

    fn title(&mut self, slide_type: SlideType) {
        let style = self
            .theme
            .title
            .clone()
            .with_font_size(title_font_size(slide_type))
            .centered();
        let animation = self.fade(AnimationTrigger::OnClick, 0.0);
        let text = self.plan.title.clone();
        self.push("title", ContentType::Title, text, title_position(slide_type), style, animation);
    }

    fn title_details(&mut self, metadata: &PresentationMetadata) {
        if let Some(subtitle) = &metadata.subtitle {
            let style = self.secondary_body(20).centered();
            let animation = self.fade(AnimationTrigger::WithPrevious, 0.2);
            self.push("subtitle", ContentType::Subtitle, subtitle.as_str(), layout::SUBTITLE, style, animation);
        }
        if let Some(author) = &metadata.author {
            let style = self.secondary_body(16).centered();
            let animation = self.fade(AnimationTrigger::WithPrevious, 0.4);
            self.push("author", ContentType::Body, author.as_str(), layout::AUTHOR, style, animation);
        }
        let style = self.secondary_body(14);
        let animation = self.fade(AnimationTrigger::WithPrevious, 0.5);
        self.push("date", ContentType::Body, metadata.date.as_str(), layout::DATE, style, animation);
    }

    fn section_icon(&mut self) {
        let style = self
            .theme
            .body
            .clone()
            .with_font_size(48)
            .bold()
            .with_color(self.theme.colors.primary)
            .centered();
        let animation = self.fade(AnimationTrigger::OnClick, 0.0);
        self.push("section_number", ContentType::Icon, "///", layout::SECTION_ICON, style, animation);
    }

    fn agenda_items(&mut self) {
        let items = self.bullets_or(["Topic 1", "Topic 2", "Topic 3"]);
        for (i, item) in items.iter().enumerate() {
            let number = (i + 1).to_string();
            let text = if item.starts_with(&number) {
                item.clone()
            } else {
                format!("{}. {}", number, item)
            };
            let style = self
                .theme
                .body
                .clone()
                .with_font_size(28)
                .with_color(self.theme.colors.text);
            let position = layout::AGENDA_ITEM.offset_y(i as f32 * layout::AGENDA_STEP);
            let animation = self.reveal(i, AGENDA_DELAY_STEP);
            self.push(&format!("agenda_{i}"), ContentType::Bullet, text, position, style, animation);
        }
    }

    fn content_items(&mut self) {
        let items = self.bullets_or(["Key point 1", "Key point 2", "Key point 3"]);
        for (i, item) in items.into_iter().enumerate() {
            let style = self.theme.body.clone().with_font_size(26);
            let position = layout::CONTENT_ITEM.offset_y(i as f32 * layout::CONTENT_STEP);
            let animation = self.reveal(i, CONTENT_DELAY_STEP);
            self.push(&format!("content_{i}"), ContentType::Bullet, item, position, style, animation);
        }
    }

    /// Up to three bullets per column. Fewer than four bullets cannot fill both
    /// columns, so placeholders are used instead.
    fn comparison_columns(&mut self) {
        let bullets = &self.plan.bullets;
        let (left, right): (Vec<String>, Vec<String>) = if bullets.len() > 3 {
            (
                bullets[..3].to_vec(),
                bullets[3..bullets.len().min(6)].to_vec(),
            )
        } else {
            (
                ["Left point 1", "Left point 2", "Left point 3"].map(String::from).to_vec(),
                ["Right point 1", "Right point 2", "Right point 3"].map(String::from).to_vec(),
            )
        };

        for (i, item) in left.into_iter().enumerate() {
            let style = self.theme.body.clone().with_font_size(22);
            let position = layout::LEFT_COLUMN_ITEM.offset_y(i as f32 * layout::COLUMN_STEP);
            let animation = self.reveal(i, COLUMN_DELAY_STEP);
            self.push(&format!("left_{i}"), ContentType::Bullet, item, position, style, animation);
        }
        for (i, item) in right.into_iter().enumerate() {
            let style = self.theme.body.clone().with_font_size(22);
            let position = layout::RIGHT_COLUMN_ITEM.offset_y(i as f32 * layout::COLUMN_STEP);
            let animation = self.reveal(i + 3, COLUMN_DELAY_STEP);
            self.push(&format!("right_{i}"), ContentType::Bullet, item, position, style, animation);
        }
    }

    fn quote(&mut self) {
        let quote = self
            .plan
            .bullets
            .first()
            .map_or("Insert quote here", String::as_str);
        let style = self
            .theme
            .body
            .clone()
            .with_font_size(32)
            .italic()
            .with_color(self.theme.colors.primary)
            .centered();
        let animation = self.fade(AnimationTrigger::OnClick, 0.0);
        let text = format!("\"{}\"", quote);
        self.push("quote", ContentType::Quote, text, layout::QUOTE, style, animation);

        if let Some(author) = self.plan.bullets.get(1) {
            let style = self.secondary_body(18).centered();
            let animation = self.fade(AnimationTrigger::WithPrevious, 0.5);
            let text = format!("- {}", author);
            self.push("quote_author", ContentType::Body, text, layout::QUOTE_AUTHOR, style, animation);
        }
    }

    fn cta_button(&mut self) {
        let shape = ShapeStyle::filled(self.theme.colors.cta)
            .with_corner_radius(8.0)
            .with_shadow(Color::rgba(0, 0, 0, 0.2));
        let style = self.theme.cta.clone();
        let animation = self.fade(AnimationTrigger::OnClick, 0.0);
        let button = self.push("cta_button", ContentType::CtaButton, "Get Started", layout::CTA_BUTTON, style, animation);
        button.shape = Some(shape);
    }

    fn thank_you(&mut self) {
        let style = self.secondary_body(24).centered();
        let animation = self.fade(AnimationTrigger::WithPrevious, 0.2);
        self.push("subtitle", ContentType::Subtitle, CLOSING_PROMPT, layout::SUBTITLE, style, animation);

        let contact = self
            .plan
            .bullets
            .iter()
            .find(|b| b.as_str() != CLOSING_PROMPT)
            .cloned();
        if let Some(contact) = contact {
            let style = self.secondary_body(16).centered();
            let animation = self.fade(AnimationTrigger::WithPrevious, 0.4);
            self.push("contact", ContentType::Body, contact, layout::CONTACT, style, animation);
        }
    }
}
