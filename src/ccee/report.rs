use serde::{Deserialize, Serialize};

use super::confidence::{ConfidenceBreakdown, ConfidenceEngine, ConfidenceWeights};
use super::domain::{AssessmentContext, AssessmentFields, RetrievalHit, UrgencyLevel};
use super::explainability::{EvidenceItem, ExplainabilityEngine};
use super::safety::{SafetyConfig, SafetyResult, SafetyScorer};
use super::uncertainty::{UncertaintyDetector, UncertaintyFactor};

/// Complete review of one generated assessment, handed to the
/// report-assembly collaborator. Built once per assessment; it has no
/// update path and no identity beyond the call that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CceeReport {
    pub confidence: ConfidenceBreakdown,
    pub evidence: Vec<EvidenceItem>,
    pub explanation: String,
    pub uncertainty_factors: Vec<UncertaintyFactor>,
    pub data_suggestions: Vec<String>,
    pub safety: SafetyResult,
}

/// Composes the four leaf engines into one report.
///
/// The leaves never call each other; this engine sequences them:
/// confidence first, explainability and uncertainty over its output,
/// and the safety scorer last. The safety result is authoritative over
/// the confidence level wherever the two disagree.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewEngine {
    confidence: ConfidenceEngine,
    explainability: ExplainabilityEngine,
    uncertainty: UncertaintyDetector,
    safety: SafetyScorer,
}

impl ReviewEngine {
    pub fn new(weights: ConfidenceWeights, safety: SafetyConfig) -> Self {
        Self {
            confidence: ConfidenceEngine::new(weights),
            explainability: ExplainabilityEngine,
            uncertainty: UncertaintyDetector,
            safety: SafetyScorer::new(safety),
        }
    }

    /// Review a generated assessment against its request context and
    /// retrieval evidence.
    pub fn review(
        &self,
        context: &AssessmentContext,
        fields: &AssessmentFields,
        retrieval: Option<&[RetrievalHit]>,
        urgency: Option<UrgencyLevel>,
    ) -> CceeReport {
        let confidence = self
            .confidence
            .calculate_confidence_score(context, fields, retrieval, urgency);

        let evidence = self
            .explainability
            .generate_evidence_map(&context.symptoms.symptoms, retrieval);
        let explanation = self
            .explainability
            .generate_explanation_summary(&evidence, &confidence);

        let uncertainty_factors = self
            .uncertainty
            .detect_uncertainty_factors(context, &confidence);
        let data_suggestions = self.uncertainty.suggest_additional_data(context);

        let safety = self.safety.calculate_safety_score(
            &context.symptoms.symptoms,
            fields.assessment_text(),
            confidence.overall_score,
            context.patient.age,
            Some(fields.red_flags()),
        );

        CceeReport {
            confidence,
            evidence,
            explanation,
            uncertainty_factors,
            data_suggestions,
            safety,
        }
    }
}
