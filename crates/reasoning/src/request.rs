//! Presentation requests and the closed vocabularies they are built from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a string names no variant of a request enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind}: '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! define_keyword_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal, default = $default:ident, { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The snake_case wire value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            /// The wire value with underscores replaced by spaces, used for catalog matching.
            pub fn keyword(&self) -> String {
                self.as_str().replace('_', " ")
            }

            /// Title-cased label, e.g. `"Investor Pitch"`.
            pub fn display_name(&self) -> String {
                title_case(self.as_str())
            }

            /// Parses a value, falling back to the default variant when it is unknown.
            pub fn parse_or_default(s: &str) -> Self {
                s.parse().unwrap_or_default()
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
                match normalized.as_str() {
                    $($value => Ok($name::$variant),)+
                    _ => Err(UnknownVariant { kind: $kind, value: s.to_string() }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_keyword_enum!(
    /// What kind of presentation is being planned.
    PresentationType, "presentation type", default = BusinessPresentation, {
        BusinessPresentation => "business_presentation",
        ProductLaunch => "product_launch",
        InvestorPitch => "investor_pitch",
        TrainingWorkshop => "training_workshop",
        ConferenceTalk => "conference_talk",
        QuarterlyReview => "quarterly_review",
        TechnicalWorkshop => "technical_workshop",
        CrisisCommunication => "crisis_communication",
        Webinar => "webinar",
        CaseStudy => "case_study",
        TeamMeeting => "team_meeting",
        StrategicPlanning => "strategic_planning",
        ExecutiveBriefing => "executive_briefing",
        CustomerPresentation => "customer_presentation",
        DesignReview => "design_review",
        AllHands => "all_hands",
        ProductDemo => "product_demo",
        InnovationWorkshop => "innovation_workshop",
        ComplianceTraining => "compliance_training",
        ChangeManagement => "change_management",
    }
);

define_keyword_enum!(
    AudienceType, "audience", default = GeneralEmployees, {
        SeniorExecutives => "senior_executives",
        MiddleManagers => "middle_managers",
        Investors => "investors",
        TechnicalTeams => "technical_teams",
        GeneralEmployees => "general_employees",
        CustomersProspects => "customers_prospects",
        CustomersExisting => "customers_existing",
        Partners => "partners",
        ExternalGuests => "external_guests",
        StudentsTrainees => "students_trainees",
        LeadershipTeam => "leadership_team",
        BoardOfDirectors => "board_of_directors",
        HrLd => "hr_ld",
        MarketingTeam => "marketing_team",
        EngineeringTeam => "engineering_team",
        ProductTeam => "product_team",
        LegalCompliance => "legal_compliance",
        FinanceTeam => "finance_team",
    }
);

define_keyword_enum!(
    Tone, "tone", default = Professional, {
        Professional => "professional",
        Casual => "casual",
        Inspiring => "inspiring",
        Urgent => "urgent",
        Educational => "educational",
        Persuasive => "persuasive",
        Technical => "technical",
        Supportive => "supportive",
        Authoritative => "authoritative",
        Empathetic => "empathetic",
    }
);

fn title_case(value: &str) -> String {
    value
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub const DEFAULT_DURATION_MINUTES: u32 = 15;
pub const DEFAULT_ASPECT_RATIO: &str = "16:9";
pub const DEFAULT_CONTACT_EMAIL: &str = "your@email.com";

/// A sparse description of the deck to plan. Immutable once built.
///
/// Deserialization goes through [`PresentationRequestBuilder`], so unknown enum
/// names take their defaults and a zero duration becomes one minute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RequestFields")]
pub struct PresentationRequest {
    pub title: String,
    pub presentation_type: PresentationType,
    pub audience: AudienceType,
    pub duration_minutes: u32,
    pub tone: Tone,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    pub aspect_ratio: String,
    pub include_animations: bool,
    pub include_transitions: bool,
}

impl PresentationRequest {
    pub fn builder(title: impl Into<String>) -> PresentationRequestBuilder {
        PresentationRequestBuilder::new(title)
    }

    /// Builds a request from loosely typed inputs; unknown names take their defaults.
    pub fn from_strings(
        title: &str,
        presentation_type: &str,
        audience: &str,
        duration_minutes: u32,
        tone: &str,
    ) -> Self {
        Self::builder(title)
            .presentation_type(PresentationType::parse_or_default(presentation_type))
            .audience(AudienceType::parse_or_default(audience))
            .duration_minutes(duration_minutes)
            .tone(Tone::parse_or_default(tone))
            .build()
    }

    pub fn contact_email(&self) -> &str {
        self.contact_email.as_deref().unwrap_or(DEFAULT_CONTACT_EMAIL)
    }
}

fn default_true() -> bool {
    true
}

/// Wire form of a request: enums as free text and every field but the title optional.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequestFields {
    title: String,
    #[serde(default)]
    presentation_type: String,
    #[serde(default)]
    audience: String,
    #[serde(default)]
    duration_minutes: Option<u32>,
    #[serde(default)]
    tone: String,
    #[serde(default)]
    industry: String,
    #[serde(default)]
    key_points: Vec<String>,
    #[serde(default)]
    objectives: Vec<String>,
    #[serde(default)]
    contact_email: Option<String>,
    #[serde(default)]
    aspect_ratio: Option<String>,
    #[serde(default = "default_true")]
    include_animations: bool,
    #[serde(default = "default_true")]
    include_transitions: bool,
}

impl From<RequestFields> for PresentationRequest {
    fn from(fields: RequestFields) -> Self {
        let mut builder = PresentationRequest::builder(fields.title)
            .presentation_type(PresentationType::parse_or_default(&fields.presentation_type))
            .audience(AudienceType::parse_or_default(&fields.audience))
            .duration_minutes(fields.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES))
            .tone(Tone::parse_or_default(&fields.tone))
            .industry(fields.industry)
            .key_points(fields.key_points)
            .objectives(fields.objectives)
            .include_animations(fields.include_animations)
            .include_transitions(fields.include_transitions);
        if let Some(email) = fields.contact_email {
            builder = builder.contact_email(email);
        }
        if let Some(ratio) = fields.aspect_ratio {
            builder = builder.aspect_ratio(ratio);
        }
        builder.build()
    }
}

/// Fluent builder for [`PresentationRequest`].
#[derive(Debug, Clone)]
pub struct PresentationRequestBuilder {
    request: PresentationRequest,
}

impl PresentationRequestBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            request: PresentationRequest {
                title: title.into(),
                presentation_type: PresentationType::default(),
                audience: AudienceType::default(),
                duration_minutes: DEFAULT_DURATION_MINUTES,
                tone: Tone::default(),
                industry: String::new(),
                key_points: Vec::new(),
                objectives: Vec::new(),
                contact_email: None,
                aspect_ratio: DEFAULT_ASPECT_RATIO.to_string(),
                include_animations: true,
                include_transitions: true,
            },
        }
    }

    pub fn presentation_type(mut self, presentation_type: PresentationType) -> Self {
        self.request.presentation_type = presentation_type;
        self
    }

    pub fn audience(mut self, audience: AudienceType) -> Self {
        self.request.audience = audience;
        self
    }

    /// Zero is treated as one minute so that timing stays meaningful.
    pub fn duration_minutes(mut self, minutes: u32) -> Self {
        self.request.duration_minutes = minutes.max(1);
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.request.tone = tone;
        self
    }

    pub fn industry(mut self, industry: impl Into<String>) -> Self {
        self.request.industry = industry.into();
        self
    }

    pub fn key_points<I, S>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.key_points = points.into_iter().map(Into::into).collect();
        self
    }

    pub fn objectives<I, S>(mut self, objectives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.objectives = objectives.into_iter().map(Into::into).collect();
        self
    }

    pub fn contact_email(mut self, email: impl Into<String>) -> Self {
        self.request.contact_email = Some(email.into());
        self
    }

    pub fn aspect_ratio(mut self, ratio: impl Into<String>) -> Self {
        self.request.aspect_ratio = ratio.into();
        self
    }

    pub fn include_animations(mut self, include: bool) -> Self {
        self.request.include_animations = include;
        self
    }

    pub fn include_transitions(mut self, include: bool) -> Self {
        self.request.include_transitions = include;
        self
    }

    pub fn build(self) -> PresentationRequest {
        self.request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_fallback() {
        assert_eq!(
            "Investor Pitch".parse::<PresentationType>(),
            Ok(PresentationType::InvestorPitch)
        );
        assert_eq!(
            PresentationType::parse_or_default("keynote"),
            PresentationType::BusinessPresentation
        );
        assert_eq!(AudienceType::parse_or_default("nobody"), AudienceType::GeneralEmployees);
        assert_eq!(Tone::parse_or_default("URGENT"), Tone::Urgent);
    }

    #[test]
    fn test_keyword_and_display_name() {
        assert_eq!(PresentationType::InvestorPitch.keyword(), "investor pitch");
        assert_eq!(PresentationType::AllHands.display_name(), "All Hands");
        assert_eq!(AudienceType::HrLd.display_name(), "Hr Ld");
        assert_eq!(PresentationType::ALL.len(), 20);
        assert_eq!(AudienceType::ALL.len(), 18);
        assert_eq!(Tone::ALL.len(), 10);
    }

    #[test]
    fn test_builder_defaults() {
        let request = PresentationRequest::builder("Q3 Update").build();
        assert_eq!(request.duration_minutes, 15);
        assert_eq!(request.aspect_ratio, "16:9");
        assert!(request.include_animations);
        assert_eq!(request.contact_email(), "your@email.com");
        assert_eq!(request.presentation_type, PresentationType::BusinessPresentation);
    }

    #[test]
    fn test_deserialize_goes_through_builder() {
        let request: PresentationRequest = serde_json::from_str(
            r#"{"title": "Pitch", "presentationType": "Investor Pitch", "audience": "aliens",
                "durationMinutes": 0, "tone": "mysterious"}"#,
        )
        .unwrap();
        assert_eq!(request.presentation_type, PresentationType::InvestorPitch);
        assert_eq!(request.audience, AudienceType::GeneralEmployees);
        assert_eq!(request.tone, Tone::default());
        assert_eq!(request.duration_minutes, 1);
        assert_eq!(request.aspect_ratio, "16:9");
        assert!(request.include_transitions);

        let full = PresentationRequest::builder("Roadmap")
            .presentation_type(PresentationType::ProductLaunch)
            .key_points(["Ship"])
            .contact_email("a@b.c")
            .include_animations(false)
            .build();
        let back: PresentationRequest =
            serde_json::from_str(&serde_json::to_string(&full).unwrap()).unwrap();
        assert_eq!(back, full);
    }

    #[test]
    fn test_serde_uses_snake_case_values() {
        let json = serde_json::to_value(PresentationType::ProductLaunch).unwrap();
        assert_eq!(json, "product_launch");
    }
}
