//! Evidence mapping and explanation summaries.
//!
//! Shows symptoms → sources → conclusions without leaking model
//! chain-of-thought or raw document content. The explanation text is
//! composed from fixed clauses, never generated.

mod sources;

use serde::{Deserialize, Serialize};

use super::confidence::ConfidenceBreakdown;
use super::domain::RetrievalHit;

/// Attribution label used when no retrieved source supports a symptom.
pub const GENERAL_KNOWLEDGE_SOURCE: &str = "General medical knowledge";

/// Ceiling on evidence items in one report.
pub const MAX_EVIDENCE_ITEMS: usize = 5;

const COMPREHENSIVE_DETAIL_THRESHOLD: f64 = 0.8;
const MODERATE_DETAIL_THRESHOLD: f64 = 0.5;
const COMPLETENESS_CAVEAT_THRESHOLD: f64 = 0.7;
const MAX_LISTED_SOURCES: usize = 3;

/// Evidence mapping for one symptom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub symptom: String,
    pub supporting_sources: Vec<String>,
    pub confidence_contribution: f64,
}

/// Generates evidence maps and explanation summaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplainabilityEngine;

impl ExplainabilityEngine {
    /// Map symptoms to supporting medical sources.
    ///
    /// At most five items, one per symptom in report order, each
    /// carrying an equal share of the confidence. A symptom no
    /// retrieved content mentions falls back to the general-knowledge
    /// label, as does the whole map when retrieval was not used.
    pub fn generate_evidence_map(
        &self,
        symptoms: &[String],
        retrieval: Option<&[RetrievalHit]>,
    ) -> Vec<EvidenceItem> {
        let contribution = if symptoms.is_empty() {
            0.0
        } else {
            1.0 / symptoms.len() as f64
        };

        let labeled = retrieval
            .filter(|hits| !hits.is_empty())
            .map(sources::labeled_sources)
            .unwrap_or_default();

        symptoms
            .iter()
            .take(MAX_EVIDENCE_ITEMS)
            .map(|symptom| {
                let mut supporting = if labeled.is_empty() {
                    Vec::new()
                } else {
                    sources::relevant_sources(symptom, &labeled)
                };

                if supporting.is_empty() {
                    supporting.push(GENERAL_KNOWLEDGE_SOURCE.to_string());
                }

                EvidenceItem {
                    symptom: symptom.clone(),
                    supporting_sources: supporting,
                    confidence_contribution: contribution,
                }
            })
            .collect()
    }

    /// Compose a concise explanation of the assessment reasoning from
    /// the evidence map and the confidence breakdown.
    ///
    /// Up to four clauses in fixed order: symptom count, data quality,
    /// sources consulted, and a completeness caveat. The result always
    /// ends with a period.
    pub fn generate_explanation_summary(
        &self,
        evidence: &[EvidenceItem],
        confidence: &ConfidenceBreakdown,
    ) -> String {
        let mut unique_sources: Vec<&str> = Vec::new();
        for item in evidence {
            for source in &item.supporting_sources {
                if source != GENERAL_KNOWLEDGE_SOURCE && !unique_sources.contains(&source.as_str())
                {
                    unique_sources.push(source);
                }
            }
        }

        let mut clauses: Vec<String> = Vec::new();

        let symptom_count = evidence.len();
        if symptom_count > 0 {
            clauses.push(format!(
                "Assessment based on {symptom_count} reported symptom{}",
                if symptom_count == 1 { "" } else { "s" }
            ));
        }

        let completeness = confidence.data_completeness;
        let detail = if completeness >= COMPREHENSIVE_DETAIL_THRESHOLD {
            "with comprehensive medical details"
        } else if completeness >= MODERATE_DETAIL_THRESHOLD {
            "with moderate detail"
        } else {
            "with limited detail"
        };
        clauses.push(detail.to_string());

        match unique_sources.len() {
            0 => {}
            1 => clauses.push(format!("Medical source consulted: {}", unique_sources[0])),
            n if n <= MAX_LISTED_SOURCES => clauses.push(format!(
                "Medical sources consulted: {}",
                unique_sources.join(", ")
            )),
            n => clauses.push(format!("Referenced {n} medical knowledge sources")),
        }

        if completeness < COMPLETENESS_CAVEAT_THRESHOLD {
            let missing_percent = ((1.0 - completeness) * 100.0) as u32;
            clauses.push(format!(
                "Confidence limited by incomplete data (-{missing_percent}%)"
            ));
        }

        let mut summary = clauses.join(". ");
        if !summary.ends_with('.') {
            summary.push('.');
        }

        summary
    }
}
