//! Keyword tables backing the guardrail predicates. Matching is always
//! case-insensitive substring containment against the reported text.

/// Symptoms requiring immediate care regardless of confidence.
pub const EMERGENCY_SYMPTOMS: &[&str] = &[
    "chest pain",
    "severe chest pain",
    "crushing chest pain",
    "difficulty breathing",
    "shortness of breath",
    "can't breathe",
    "cannot breathe",
    "severe bleeding",
    "heavy bleeding",
    "bleeding won't stop",
    "unconscious",
    "unconsciousness",
    "passed out",
    "fainting",
    "severe headache",
    "worst headache",
    "thunderclap headache",
    "confusion",
    "disoriented",
    "altered mental status",
    "stroke symptoms",
    "face drooping",
    "arm weakness",
    "speech difficulty",
    "severe abdominal pain",
    "severe stomach pain",
    "seizure",
    "convulsion",
    "suicidal thoughts",
    "wanting to harm self",
];

/// Emergency language inside diagnostic-plan red flags.
pub const RED_FLAG_EMERGENCY_TERMS: &[&str] = &["emergency", "immediate", "urgent", "911"];

/// Findings that make any infant presentation concerning.
pub const INFANT_CONCERN_SYMPTOMS: &[&str] =
    &["fever", "vomiting", "diarrhea", "not feeding", "lethargic", "rash"];

/// High-risk presentations in elderly patients.
pub const ELDERLY_CONCERN_SYMPTOMS: &[&str] =
    &["fall", "fell", "confusion", "chest", "dizzy", "weakness"];

/// Indicators that a symptom could point at a serious condition.
pub const SERIOUS_SYMPTOM_INDICATORS: &[&str] = &[
    "pain", "fever", "bleeding", "swelling", "numbness", "vision", "hearing", "balance",
    "weakness", "severe",
];

/// Hedging language that conflicts with a high confidence score.
pub const HEDGING_PHRASES: &[&str] = &[
    "unclear",
    "uncertain",
    "difficult to determine",
    "may be",
    "could be",
    "possibly",
    "unable to determine",
    "requires further evaluation",
    "needs more information",
];

/// Whether any reported symptom contains an entry of the lexicon.
pub(crate) fn any_symptom_matches(symptoms: &[String], lexicon: &[&str]) -> Option<String> {
    symptoms
        .iter()
        .find(|symptom| {
            let lower = symptom.to_lowercase();
            lexicon.iter().any(|entry| lower.contains(entry))
        })
        .cloned()
}
