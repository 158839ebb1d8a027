//! Medical safety guardrails.
//!
//! A fixed chain of deterministic rules over symptoms, age, confidence,
//! and diagnostic red flags. The resulting triage level is authoritative
//! over the confidence level: a RED outcome stands even when the
//! confidence engine reports near-certainty. Exactly one rule fires per
//! evaluation, so the audit trail always has a single entry.

mod config;
pub mod lexicon;
mod rules;

pub use config::SafetyConfig;

use serde::{Deserialize, Serialize};

use rules::{green_default, SafetyInputs, RULE_CHAIN};

/// Triage levels, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyLevel {
    Green,
    Amber,
    Red,
}

impl SafetyLevel {
    pub const fn label(self) -> &'static str {
        match self {
            SafetyLevel::Green => "green",
            SafetyLevel::Amber => "amber",
            SafetyLevel::Red => "red",
        }
    }
}

/// Safety scoring result. `triggered_rules` names the one rule that
/// decided the outcome (or the green default reason).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyResult {
    pub safety_level: SafetyLevel,
    pub safety_notes: String,
    pub triggered_rules: Vec<String>,
    pub requires_immediate_care: bool,
}

/// Applies the guardrail chain with first-match-wins semantics.
#[derive(Debug, Clone, Copy, Default)]
pub struct SafetyScorer {
    config: SafetyConfig,
}

impl SafetyScorer {
    pub fn new(config: SafetyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SafetyConfig {
        &self.config
    }

    /// Evaluate the guardrails in priority order and return the first
    /// match. Pure and deterministic: identical inputs always produce
    /// an identical result, including the audit trail.
    ///
    /// Callers validate inputs beforehand (age 0-130, confidence in
    /// [0,1]); this layer does not re-check them.
    pub fn calculate_safety_score(
        &self,
        symptoms: &[String],
        assessment: &str,
        confidence: f64,
        age: u8,
        red_flags: Option<&[String]>,
    ) -> SafetyResult {
        let inputs = SafetyInputs {
            symptoms,
            assessment,
            confidence,
            age,
            red_flags: red_flags.unwrap_or_default(),
        };

        for rule in RULE_CHAIN {
            if let Some(result) = (rule.evaluate)(&inputs, &self.config) {
                tracing::debug!(
                    rule = rule.name,
                    level = result.safety_level.label(),
                    "safety rule fired"
                );
                return result;
            }
        }

        green_default(&inputs)
    }
}
