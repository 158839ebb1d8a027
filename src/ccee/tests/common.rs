use std::collections::BTreeMap;

use serde_json::{json, Value};

use crate::ccee::confidence::{ConfidenceBreakdown, ConfidenceEngine, ConfidenceLevel};
use crate::ccee::domain::{
    AssessmentContext, AssessmentFields, DiagnosticPlan, Gender, MedicalHistory, PatientProfile,
    RetrievalHit, SymptomReport,
};
use crate::ccee::safety::SafetyScorer;

pub(super) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(super) fn symptom_report(names: &[&str]) -> SymptomReport {
    SymptomReport {
        symptoms: strings(names),
        severity: BTreeMap::new(),
        duration: BTreeMap::new(),
    }
}

pub(super) fn severity_map(entries: &[(&str, u8)]) -> BTreeMap<String, u8> {
    entries
        .iter()
        .map(|(symptom, value)| (symptom.to_string(), *value))
        .collect()
}

pub(super) fn duration_map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(symptom, value)| (symptom.to_string(), value.to_string()))
        .collect()
}

pub(super) fn history() -> MedicalHistory {
    MedicalHistory {
        past_conditions: strings(&["Hypertension"]),
        current_medications: strings(&["Lisinopril"]),
        allergies: strings(&["Penicillin"]),
    }
}

/// Fully detailed request: demographics, history, and per-symptom detail.
pub(super) fn complete_context() -> AssessmentContext {
    AssessmentContext {
        patient: PatientProfile {
            age: 30,
            gender: Some(Gender::Male),
        },
        symptoms: SymptomReport {
            symptoms: strings(&["headache", "fever", "fatigue"]),
            severity: severity_map(&[("headache", 7), ("fever", 8), ("fatigue", 6)]),
            duration: duration_map(&[
                ("headache", "2 days"),
                ("fever", "2 days"),
                ("fatigue", "3 days"),
            ]),
        },
        medical_history: Some(history()),
        additional_context: Some("Symptoms began after travel abroad".to_string()),
    }
}

/// Bare-minimum request: one vague symptom and nothing else.
pub(super) fn minimal_context() -> AssessmentContext {
    AssessmentContext {
        patient: PatientProfile {
            age: 30,
            gender: None,
        },
        symptoms: symptom_report(&["tired"]),
        medical_history: None,
        additional_context: None,
    }
}

/// Generated assessment carrying all five required fields.
pub(super) fn full_fields() -> AssessmentFields {
    AssessmentFields {
        chief_complaint: Some("Headache and fever".to_string()),
        history_present_illness: Some("Symptoms started two days ago".to_string()),
        assessment: Some(
            "Findings are consistent with a self-limiting viral infection given the short \
             duration and moderate severity reported"
                .to_string(),
        ),
        diagnostic_plan: Some(DiagnosticPlan::default()),
        otc_recommendations: Some(strings(&["Rest and hydration"])),
    }
}

pub(super) fn fields_with_red_flags(flags: &[&str]) -> AssessmentFields {
    AssessmentFields {
        diagnostic_plan: Some(DiagnosticPlan {
            red_flags: strings(flags),
            ..DiagnosticPlan::default()
        }),
        ..full_fields()
    }
}

/// Retrieval hit with an optional source topic and similarity score.
pub(super) fn hit(content: &str, topic: Option<&str>, similarity: Option<f64>) -> RetrievalHit {
    let mut metadata = BTreeMap::new();
    if let Some(topic) = topic {
        metadata.insert("topic".to_string(), Value::String(topic.to_string()));
    }

    let mut extras = BTreeMap::new();
    if let Some(similarity) = similarity {
        extras.insert("similarity".to_string(), json!(similarity));
    }

    RetrievalHit {
        content: content.to_string(),
        metadata,
        extras,
    }
}

pub(super) fn breakdown_with_completeness(data_completeness: f64) -> ConfidenceBreakdown {
    ConfidenceBreakdown {
        data_completeness,
        symptom_signal_strength: 0.6,
        rag_relevance: 0.5,
        agent_agreement: 0.7,
        model_consistency: 1.0,
        overall_score: 0.65,
        level: ConfidenceLevel::Medium,
    }
}

pub(super) fn confidence_engine() -> ConfidenceEngine {
    ConfidenceEngine::default()
}

pub(super) fn scorer() -> SafetyScorer {
    SafetyScorer::default()
}
