use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Patient gender options accepted from the intake surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

/// Demographics relevant to scoring. Age is validated upstream (0-130).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub age: u8,
    pub gender: Option<Gender>,
}

/// Reported symptoms with optional per-symptom detail.
///
/// Empty severity/duration maps mean the patient provided no detail of
/// that kind; partially filled maps are meaningful to the uncertainty
/// checks, which compare entry counts against the symptom count.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SymptomReport {
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub severity: BTreeMap<String, u8>,
    #[serde(default)]
    pub duration: BTreeMap<String, String>,
}

impl SymptomReport {
    pub fn has_severity(&self) -> bool {
        !self.severity.is_empty()
    }

    pub fn has_duration(&self) -> bool {
        !self.duration.is_empty()
    }
}

/// Values that count as an explicit "nothing to report" when they appear
/// as a history entry.
const DENIAL_VALUES: &[&str] = &["none", "[]", "no", "n/a"];

/// Patient-reported medical background.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MedicalHistory {
    #[serde(default)]
    pub past_conditions: Vec<String>,
    #[serde(default)]
    pub current_medications: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
}

impl MedicalHistory {
    /// Whether the history carries real content rather than filler.
    ///
    /// A collection counts only when some entry is not a literal denial
    /// ("none", "no", "n/a", "[]"). Both the confidence completeness
    /// component and the uncertainty checks must share this predicate.
    ///
    /// TODO: replace the string sniffing with an explicit
    /// absent / explicitly-none / populated representation.
    pub fn is_meaningful(&self) -> bool {
        has_meaningful_entries(&self.past_conditions)
            || has_meaningful_entries(&self.current_medications)
            || has_meaningful_entries(&self.allergies)
    }
}

fn has_meaningful_entries(entries: &[String]) -> bool {
    entries.iter().any(|entry| {
        let normalized = entry.trim().to_lowercase();
        !normalized.is_empty() && !DENIAL_VALUES.contains(&normalized.as_str())
    })
}

/// Validated request data the orchestrator assembles for one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentContext {
    pub patient: PatientProfile,
    pub symptoms: SymptomReport,
    pub medical_history: Option<MedicalHistory>,
    pub additional_context: Option<String>,
}

impl AssessmentContext {
    /// Whether the context carries meaningful medical history.
    pub fn has_meaningful_history(&self) -> bool {
        self.medical_history
            .as_ref()
            .is_some_and(MedicalHistory::is_meaningful)
    }
}

/// Diagnostic next steps extracted from the generated assessment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiagnosticPlan {
    #[serde(default)]
    pub recommended_tests: Vec<String>,
    #[serde(default)]
    pub red_flags: Vec<String>,
    pub follow_up: Option<String>,
}

/// Structured fields of the generated assessment.
///
/// Every field is optional because the generating model can omit any of
/// them; the consistency subscore counts how many survived.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssessmentFields {
    pub chief_complaint: Option<String>,
    pub history_present_illness: Option<String>,
    pub assessment: Option<String>,
    pub diagnostic_plan: Option<DiagnosticPlan>,
    pub otc_recommendations: Option<Vec<String>>,
}

impl AssessmentFields {
    pub(crate) const REQUIRED_FIELD_COUNT: usize = 5;

    /// Number of the five required fields the generating model produced.
    pub fn present_field_count(&self) -> usize {
        [
            self.chief_complaint.is_some(),
            self.history_present_illness.is_some(),
            self.assessment.is_some(),
            self.diagnostic_plan.is_some(),
            self.otc_recommendations.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    /// Red flags listed by the diagnostic plan, if any.
    pub fn red_flags(&self) -> &[String] {
        self.diagnostic_plan
            .as_ref()
            .map(|plan| plan.red_flags.as_slice())
            .unwrap_or_default()
    }

    /// The free-text assessment body, empty when the field was omitted.
    pub fn assessment_text(&self) -> &str {
        self.assessment.as_deref().unwrap_or_default()
    }
}

/// Knowledge snippet returned by the retrieval collaborator.
///
/// Retrieval backends disagree on where they put the relevance number
/// and the source label, so everything beyond the content text rides in
/// loose value maps and is probed by the accessors below.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RetrievalHit {
    pub content: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, Value>,
    #[serde(flatten)]
    pub extras: BTreeMap<String, Value>,
}

impl RetrievalHit {
    /// Numeric relevance, probing the accepted field names in priority
    /// order: top-level `similarity`, top-level `score`, then metadata
    /// `similarity` and `confidence`.
    pub fn relevance(&self) -> Option<f64> {
        self.extras
            .get("similarity")
            .or_else(|| self.extras.get("score"))
            .or_else(|| self.metadata.get("similarity"))
            .or_else(|| self.metadata.get("confidence"))
            .and_then(Value::as_f64)
    }

    /// Raw source label: metadata `topic`/`source`/`title`, then the
    /// top-level `topic`/`source` fields.
    pub fn source_label(&self) -> Option<&str> {
        self.metadata
            .get("topic")
            .or_else(|| self.metadata.get("source"))
            .or_else(|| self.metadata.get("title"))
            .or_else(|| self.extras.get("topic"))
            .or_else(|| self.extras.get("source"))
            .and_then(Value::as_str)
    }
}

/// Urgency classification supplied by the emergency-check collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Emergency,
    Urgent,
    Routine,
}

impl UrgencyLevel {
    pub const fn label(self) -> &'static str {
        match self {
            UrgencyLevel::Emergency => "emergency",
            UrgencyLevel::Urgent => "urgent",
            UrgencyLevel::Routine => "routine",
        }
    }
}
