//! Weighted, deterministic confidence scoring for generated assessments.
//!
//! No black-box model is involved: each component is an auditable
//! formula, the overall score is their weighted sum, and any internal
//! fault degrades to a documented conservative fallback instead of
//! surfacing an error.

mod components;
mod weights;

pub use weights::ConfidenceWeights;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::domain::{AssessmentContext, AssessmentFields, RetrievalHit, UrgencyLevel};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Confidence bands derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    pub const HIGH_THRESHOLD: f64 = 0.80;
    pub const MEDIUM_THRESHOLD: f64 = 0.60;

    /// Pure threshold mapping from an overall score.
    pub fn from_score(score: f64) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            ConfidenceLevel::High
        } else if score >= Self::MEDIUM_THRESHOLD {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::High => "high",
        }
    }
}

/// Detailed breakdown of the confidence score components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBreakdown {
    pub data_completeness: f64,
    pub symptom_signal_strength: f64,
    pub rag_relevance: f64,
    pub agent_agreement: f64,
    pub model_consistency: f64,
    pub overall_score: f64,
    pub level: ConfidenceLevel,
}

impl ConfidenceBreakdown {
    /// Conservative stand-in used when a component misbehaves.
    pub fn fallback() -> Self {
        Self {
            data_completeness: 0.5,
            symptom_signal_strength: 0.5,
            rag_relevance: 0.5,
            agent_agreement: 0.5,
            model_consistency: 0.5,
            overall_score: 0.5,
            level: ConfidenceLevel::Medium,
        }
    }
}

/// Internal computation fault. Never escapes the public surface; it
/// selects the fallback breakdown instead.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfidenceFault {
    #[error("component {component} produced out-of-range value {value}")]
    OutOfRange { component: &'static str, value: f64 },
}

fn unit_interval(component: &'static str, value: f64) -> Result<f64, ConfidenceFault> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfidenceFault::OutOfRange { component, value })
    }
}

/// Calculates confidence breakdowns for generated health assessments.
#[derive(Debug, Clone, Copy)]
pub struct ConfidenceEngine {
    weights: ConfidenceWeights,
}

impl Default for ConfidenceEngine {
    fn default() -> Self {
        Self::new(ConfidenceWeights::default())
    }
}

impl ConfidenceEngine {
    /// Build an engine with the given weights. A set that does not sum
    /// to 1.0 is replaced by the defaults so the overall score cannot
    /// leave the unit interval.
    pub fn new(weights: ConfidenceWeights) -> Self {
        let sanitized = if (weights.sum() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE {
            weights
        } else {
            ConfidenceWeights::default()
        };

        Self { weights: sanitized }
    }

    pub fn weights(&self) -> &ConfidenceWeights {
        &self.weights
    }

    /// Calculate the overall confidence score with a full component
    /// breakdown. Never fails: an internal fault is logged and the
    /// conservative fallback (all components 0.5, level medium) is
    /// returned so report generation is never blocked.
    pub fn calculate_confidence_score(
        &self,
        context: &AssessmentContext,
        fields: &AssessmentFields,
        retrieval: Option<&[RetrievalHit]>,
        urgency: Option<UrgencyLevel>,
    ) -> ConfidenceBreakdown {
        match self.try_calculate(context, fields, retrieval, urgency) {
            Ok(breakdown) => {
                info!(
                    overall_score = breakdown.overall_score,
                    level = breakdown.level.label(),
                    data_completeness = breakdown.data_completeness,
                    symptom_signal = breakdown.symptom_signal_strength,
                    rag_relevance = breakdown.rag_relevance,
                    agent_agreement = breakdown.agent_agreement,
                    model_consistency = breakdown.model_consistency,
                    "confidence calculated"
                );
                breakdown
            }
            Err(fault) => {
                error!(%fault, "confidence calculation failed, returning conservative fallback");
                ConfidenceBreakdown::fallback()
            }
        }
    }

    fn try_calculate(
        &self,
        context: &AssessmentContext,
        fields: &AssessmentFields,
        retrieval: Option<&[RetrievalHit]>,
        urgency: Option<UrgencyLevel>,
    ) -> Result<ConfidenceBreakdown, ConfidenceFault> {
        let data_completeness =
            unit_interval("data_completeness", components::data_completeness(context))?;
        let symptom_signal_strength = unit_interval(
            "symptom_signal_strength",
            components::symptom_signal_strength(&context.symptoms),
        )?;
        let rag_relevance = unit_interval("rag_relevance", components::rag_relevance(retrieval))?;
        let agent_agreement = unit_interval(
            "agent_agreement",
            components::agent_agreement(fields, urgency),
        )?;
        let model_consistency = unit_interval(
            "model_consistency",
            components::model_consistency(fields),
        )?;

        let overall_score = unit_interval(
            "overall_score",
            self.weights.data_completeness * data_completeness
                + self.weights.symptom_signal * symptom_signal_strength
                + self.weights.rag_relevance * rag_relevance
                + self.weights.agent_agreement * agent_agreement
                + self.weights.model_consistency * model_consistency,
        )?;

        Ok(ConfidenceBreakdown {
            data_completeness,
            symptom_signal_strength,
            rag_relevance,
            agent_agreement,
            model_consistency,
            overall_score,
            level: ConfidenceLevel::from_score(overall_score),
        })
    }
}
