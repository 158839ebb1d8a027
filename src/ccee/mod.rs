//! Clinical confidence, explainability, uncertainty, and safety scoring
//! for AI-generated health assessments.
//!
//! Four leaf components — [`ConfidenceEngine`], [`ExplainabilityEngine`],
//! [`UncertaintyDetector`], and [`SafetyScorer`] — plus the
//! [`ReviewEngine`] that sequences them into a single [`CceeReport`].
//! The safety level is authoritative: a guardrail match overrides the
//! computed confidence for triage purposes.

pub mod confidence;
pub mod domain;
pub mod explainability;
pub mod intake;
pub mod report;
pub mod safety;
pub mod uncertainty;

#[cfg(test)]
mod tests;

pub use confidence::{ConfidenceBreakdown, ConfidenceEngine, ConfidenceLevel, ConfidenceWeights};
pub use domain::{
    AssessmentContext, AssessmentFields, DiagnosticPlan, Gender, MedicalHistory, PatientProfile,
    RetrievalHit, SymptomReport, UrgencyLevel,
};
pub use explainability::{
    EvidenceItem, ExplainabilityEngine, GENERAL_KNOWLEDGE_SOURCE, MAX_EVIDENCE_ITEMS,
};
pub use intake::{AssessmentSubmission, ContextGuard, ContextViolation};
pub use report::{CceeReport, ReviewEngine};
pub use safety::{SafetyConfig, SafetyLevel, SafetyResult, SafetyScorer};
pub use uncertainty::{
    UncertaintyCategory, UncertaintyDetector, UncertaintyFactor, MAX_SUGGESTIONS,
};
