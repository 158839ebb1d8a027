//! Uncertainty inventory: what is missing from the input data and what
//! additional information would most improve confidence.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::confidence::ConfidenceBreakdown;
use super::domain::{AssessmentContext, SymptomReport};

/// Generic complaint wordings that carry little diagnostic signal.
const VAGUE_SYMPTOM_TERMS: &[&str] =
    &["tired", "fatigue", "unwell", "sick", "not feeling good", "off"];

/// Additional context shorter than this is treated as absent.
const MIN_CONTEXT_CHARS: usize = 10;

/// Impact scaling for vague symptoms: percent per vague entry, capped.
const VAGUE_IMPACT_STEP: usize = 10;
const VAGUE_IMPACT_CAP: usize = 20;

/// Impact scaling for partially missing severity/duration entries.
const DETAIL_IMPACT_STEP: usize = 5;
const DETAIL_IMPACT_CAP: usize = 15;

/// Ceiling on data-improvement suggestions in one report.
pub const MAX_SUGGESTIONS: usize = 5;

/// Kind of gap a factor describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UncertaintyCategory {
    MissingData,
    VagueSymptoms,
    ConflictingInfo,
}

impl UncertaintyCategory {
    pub const fn label(self) -> &'static str {
        match self {
            UncertaintyCategory::MissingData => "missing_data",
            UncertaintyCategory::VagueSymptoms => "vague_symptoms",
            UncertaintyCategory::ConflictingInfo => "conflicting_info",
        }
    }
}

/// One concrete gap in the input data, with its approximate cost and
/// the data that would close it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UncertaintyFactor {
    pub category: UncertaintyCategory,
    pub description: String,
    pub impact: String,
    pub suggestion: String,
}

/// Detects uncertainty and missing information in assessment inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UncertaintyDetector;

impl UncertaintyDetector {
    /// Enumerate every uncertainty factor in the assessment inputs:
    /// missing-data gaps, vague symptom reporting, and per-symptom
    /// detail gaps.
    pub fn detect_uncertainty_factors(
        &self,
        context: &AssessmentContext,
        breakdown: &ConfidenceBreakdown,
    ) -> Vec<UncertaintyFactor> {
        let mut factors = missing_data_factors(context);
        factors.extend(vague_symptom_factors(&context.symptoms));
        factors.extend(symptom_detail_factors(&context.symptoms));

        debug!(
            factor_count = factors.len(),
            data_completeness = breakdown.data_completeness,
            "uncertainty factors detected"
        );

        factors
    }

    /// Suggest the additional data that would most improve the
    /// assessment, in priority order, capped at five entries.
    pub fn suggest_additional_data(&self, context: &AssessmentContext) -> Vec<String> {
        let mut suggestions = Vec::new();

        if !context.has_meaningful_history() {
            suggestions.push(
                "Provide past medical conditions, current medications, and known allergies"
                    .to_string(),
            );
        }

        if !context.symptoms.has_severity() {
            suggestions.push("Rate each symptom's severity on a scale of 1-10".to_string());
        }

        if !context.symptoms.has_duration() {
            suggestions.push(
                "Specify how long each symptom has been present (e.g., '2 days', '1 week')"
                    .to_string(),
            );
        }

        if context.patient.gender.is_none() {
            suggestions.push(
                "Provide gender for more accurate assessment of age-related conditions"
                    .to_string(),
            );
        }

        if !has_additional_context(context) {
            suggestions.push(
                "Share relevant context (recent travel, known exposures, symptom triggers)"
                    .to_string(),
            );
        }

        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }
}

fn has_additional_context(context: &AssessmentContext) -> bool {
    context
        .additional_context
        .as_deref()
        .is_some_and(|text| text.trim().len() >= MIN_CONTEXT_CHARS)
}

fn missing_data_factors(context: &AssessmentContext) -> Vec<UncertaintyFactor> {
    let mut factors = Vec::new();

    if !context.has_meaningful_history() {
        factors.push(UncertaintyFactor {
            category: UncertaintyCategory::MissingData,
            description: "No medical history provided".to_string(),
            impact: "Reduces confidence by approximately 15-30%".to_string(),
            suggestion:
                "Provide past medical conditions, medications, and known allergies for better context"
                    .to_string(),
        });
    }

    if context.patient.gender.is_none() {
        factors.push(UncertaintyFactor {
            category: UncertaintyCategory::MissingData,
            description: "Gender not specified".to_string(),
            impact: "Reduces confidence by approximately 5-10%".to_string(),
            suggestion:
                "Provide gender for more accurate assessment of gender-specific conditions"
                    .to_string(),
        });
    }

    if !has_additional_context(context) {
        factors.push(UncertaintyFactor {
            category: UncertaintyCategory::MissingData,
            description: "Limited additional context".to_string(),
            impact: "May reduce confidence by 5-15% depending on symptoms".to_string(),
            suggestion:
                "Share relevant details like recent activities, known exposures, or symptom patterns"
                    .to_string(),
        });
    }

    factors
}

fn vague_symptom_factors(report: &SymptomReport) -> Vec<UncertaintyFactor> {
    let mut factors = Vec::new();

    let vague_count = report
        .symptoms
        .iter()
        .filter(|symptom| {
            let lower = symptom.to_lowercase();
            VAGUE_SYMPTOM_TERMS.iter().any(|term| lower.contains(term))
        })
        .count();

    if vague_count > 0 && report.symptoms.len() <= 2 {
        let impact_percent = (vague_count * VAGUE_IMPACT_STEP).min(VAGUE_IMPACT_CAP);
        factors.push(UncertaintyFactor {
            category: UncertaintyCategory::VagueSymptoms,
            description: "Symptoms are non-specific".to_string(),
            impact: format!("Reduces confidence by approximately {impact_percent}%"),
            suggestion:
                "Describe specific symptoms (e.g., instead of 'tired', describe 'extreme exhaustion after minimal activity')"
                    .to_string(),
        });
    }

    if report.symptoms.len() == 1 {
        factors.push(UncertaintyFactor {
            category: UncertaintyCategory::VagueSymptoms,
            description: "Only one symptom reported".to_string(),
            impact: "Reduces confidence by approximately 10-15%".to_string(),
            suggestion: "Report all associated symptoms, even if minor, for complete picture"
                .to_string(),
        });
    }

    factors
}

fn symptom_detail_factors(report: &SymptomReport) -> Vec<UncertaintyFactor> {
    let mut factors = Vec::new();
    let symptom_count = report.symptoms.len();

    if !report.has_severity() {
        factors.push(UncertaintyFactor {
            category: UncertaintyCategory::MissingData,
            description: "No symptom severity ratings provided".to_string(),
            impact: "Reduces confidence by approximately 10-20%".to_string(),
            suggestion:
                "Rate each symptom's severity on a scale of 1-10 to help prioritize concerns"
                    .to_string(),
        });
    } else if report.severity.len() < symptom_count {
        let missing = symptom_count - report.severity.len();
        let impact_percent = (missing * DETAIL_IMPACT_STEP).min(DETAIL_IMPACT_CAP);
        factors.push(UncertaintyFactor {
            category: UncertaintyCategory::MissingData,
            description: format!("{missing} symptom(s) lack severity rating"),
            impact: format!("Reduces confidence by approximately {impact_percent}%"),
            suggestion: "Provide severity ratings for all symptoms".to_string(),
        });
    }

    if !report.has_duration() {
        factors.push(UncertaintyFactor {
            category: UncertaintyCategory::MissingData,
            description: "No symptom duration information".to_string(),
            impact: "Reduces confidence by approximately 10-20%".to_string(),
            suggestion:
                "Specify how long each symptom has been present (acute vs. chronic matters)"
                    .to_string(),
        });
    } else if report.duration.len() < symptom_count {
        let missing = symptom_count - report.duration.len();
        let impact_percent = (missing * DETAIL_IMPACT_STEP).min(DETAIL_IMPACT_CAP);
        factors.push(UncertaintyFactor {
            category: UncertaintyCategory::MissingData,
            description: format!("{missing} symptom(s) lack duration information"),
            impact: format!("Reduces confidence by approximately {impact_percent}%"),
            suggestion: "Provide duration for all symptoms".to_string(),
        });
    }

    factors
}
