/// Tunable guardrail thresholds.
///
/// The defaults reproduce the clinically reviewed values; the brief
/// assessment bounds in particular are operational dials with no
/// derivation behind them, so they stay overridable rather than inlined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafetyConfig {
    /// Ages strictly below this are treated as infants.
    pub infant_age_years: u8,
    /// Ages strictly above this are treated as elderly.
    pub elderly_age_years: u8,
    /// Below this confidence the assessment is flagged as uncertain.
    pub low_confidence_threshold: f64,
    /// Below this confidence (but above the low bound) caution applies.
    pub medium_confidence_threshold: f64,
    /// At or above this confidence, hedging language is contradictory.
    pub hedging_confidence_floor: f64,
    /// An assessment shorter than this many characters is "brief".
    pub brief_assessment_chars: usize,
    /// Symptom count from which a brief assessment is suspicious.
    pub brief_assessment_symptom_count: usize,
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            infant_age_years: 2,
            elderly_age_years: 75,
            low_confidence_threshold: 0.50,
            medium_confidence_threshold: 0.70,
            hedging_confidence_floor: 0.75,
            brief_assessment_chars: 100,
            brief_assessment_symptom_count: 4,
        }
    }
}
