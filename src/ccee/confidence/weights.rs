use serde::{Deserialize, Serialize};

/// Relative weight of each confidence component.
///
/// The weights must sum to 1.0 so the overall score stays inside the
/// unit interval; `ConfidenceEngine` rejects a set that does not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceWeights {
    pub data_completeness: f64,
    pub symptom_signal: f64,
    pub rag_relevance: f64,
    pub agent_agreement: f64,
    pub model_consistency: f64,
}

impl ConfidenceWeights {
    pub fn sum(&self) -> f64 {
        self.data_completeness
            + self.symptom_signal
            + self.rag_relevance
            + self.agent_agreement
            + self.model_consistency
    }
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            data_completeness: 0.30,
            symptom_signal: 0.25,
            rag_relevance: 0.25,
            agent_agreement: 0.10,
            model_consistency: 0.10,
        }
    }
}
