use tracing::warn;

use super::config::SafetyConfig;
use super::lexicon;
use super::{SafetyLevel, SafetyResult};

/// Everything a guardrail predicate may inspect.
pub(crate) struct SafetyInputs<'a> {
    pub symptoms: &'a [String],
    pub assessment: &'a str,
    pub confidence: f64,
    pub age: u8,
    pub red_flags: &'a [String],
}

type RulePredicate = fn(&SafetyInputs<'_>, &SafetyConfig) -> Option<SafetyResult>;

pub(crate) struct SafetyRule {
    pub name: &'static str,
    pub evaluate: RulePredicate,
}

/// Guardrails in priority order. The first rule that fires determines
/// the entire result; later rules are never evaluated.
pub(crate) const RULE_CHAIN: &[SafetyRule] = &[
    SafetyRule {
        name: "emergency_symptoms",
        evaluate: emergency_symptoms,
    },
    SafetyRule {
        name: "critical_red_flags",
        evaluate: critical_red_flags,
    },
    SafetyRule {
        name: "infant_high_risk",
        evaluate: infant_high_risk,
    },
    SafetyRule {
        name: "elderly_high_risk",
        evaluate: elderly_high_risk,
    },
    SafetyRule {
        name: "low_confidence",
        evaluate: low_confidence,
    },
    SafetyRule {
        name: "moderate_confidence",
        evaluate: moderate_confidence,
    },
    SafetyRule {
        name: "conflicting_signals",
        evaluate: conflicting_signals,
    },
];

fn emergency_symptoms(inputs: &SafetyInputs<'_>, _config: &SafetyConfig) -> Option<SafetyResult> {
    let matched = lexicon::any_symptom_matches(inputs.symptoms, lexicon::EMERGENCY_SYMPTOMS)?;
    warn!(symptom = %matched, "emergency symptom detected");

    Some(SafetyResult {
        safety_level: SafetyLevel::Red,
        safety_notes: "EMERGENCY: Symptoms suggest immediate medical attention needed. \
                       Call emergency services or go to nearest emergency room."
            .to_string(),
        triggered_rules: vec!["Emergency symptoms detected".to_string()],
        requires_immediate_care: true,
    })
}

fn critical_red_flags(inputs: &SafetyInputs<'_>, _config: &SafetyConfig) -> Option<SafetyResult> {
    let critical = inputs.red_flags.iter().any(|flag| {
        let lower = flag.to_lowercase();
        lexicon::RED_FLAG_EMERGENCY_TERMS
            .iter()
            .any(|term| lower.contains(term))
    });

    if !critical {
        return None;
    }

    Some(SafetyResult {
        safety_level: SafetyLevel::Red,
        safety_notes:
            "URGENT: Assessment identified concerning symptoms requiring prompt medical evaluation."
                .to_string(),
        triggered_rules: vec!["Critical red flags in diagnostic plan".to_string()],
        requires_immediate_care: true,
    })
}

fn infant_high_risk(inputs: &SafetyInputs<'_>, config: &SafetyConfig) -> Option<SafetyResult> {
    if inputs.age >= config.infant_age_years {
        return None;
    }
    lexicon::any_symptom_matches(inputs.symptoms, lexicon::INFANT_CONCERN_SYMPTOMS)?;

    Some(SafetyResult {
        safety_level: SafetyLevel::Red,
        safety_notes: "INFANT EMERGENCY: Any significant symptoms in infants under 2 require \
                       immediate pediatric evaluation."
            .to_string(),
        triggered_rules: vec![high_risk_age_label(inputs.age)],
        requires_immediate_care: true,
    })
}

fn elderly_high_risk(inputs: &SafetyInputs<'_>, config: &SafetyConfig) -> Option<SafetyResult> {
    if inputs.age <= config.elderly_age_years {
        return None;
    }
    lexicon::any_symptom_matches(inputs.symptoms, lexicon::ELDERLY_CONCERN_SYMPTOMS)?;

    Some(SafetyResult {
        safety_level: SafetyLevel::Amber,
        safety_notes:
            "CAUTION: Age-related risk factors present. Recommend prompt medical evaluation."
                .to_string(),
        triggered_rules: vec![high_risk_age_label(inputs.age)],
        requires_immediate_care: false,
    })
}

fn high_risk_age_label(age: u8) -> String {
    format!("High-risk age group (age {age}) with concerning symptoms")
}

fn low_confidence(inputs: &SafetyInputs<'_>, config: &SafetyConfig) -> Option<SafetyResult> {
    if inputs.confidence >= config.low_confidence_threshold {
        return None;
    }

    let potentially_serious =
        lexicon::any_symptom_matches(inputs.symptoms, lexicon::SERIOUS_SYMPTOM_INDICATORS)
            .is_some();

    let safety_notes = if potentially_serious {
        "UNCERTAIN ASSESSMENT: Confidence is low. Professional medical evaluation strongly \
         recommended."
            .to_string()
    } else {
        "Assessment confidence is limited. Consider consulting healthcare provider if symptoms \
         persist or worsen."
            .to_string()
    };

    Some(SafetyResult {
        safety_level: SafetyLevel::Amber,
        safety_notes,
        triggered_rules: vec![format!(
            "Low confidence ({:.0}%) on assessment",
            inputs.confidence * 100.0
        )],
        requires_immediate_care: false,
    })
}

fn moderate_confidence(inputs: &SafetyInputs<'_>, config: &SafetyConfig) -> Option<SafetyResult> {
    if inputs.confidence >= config.medium_confidence_threshold {
        return None;
    }

    Some(SafetyResult {
        safety_level: SafetyLevel::Amber,
        safety_notes:
            "Moderate confidence assessment. Monitor symptoms and seek care if condition changes."
                .to_string(),
        triggered_rules: vec![format!(
            "Medium confidence ({:.0}%)",
            inputs.confidence * 100.0
        )],
        requires_immediate_care: false,
    })
}

fn conflicting_signals(inputs: &SafetyInputs<'_>, config: &SafetyConfig) -> Option<SafetyResult> {
    let assessment_lower = inputs.assessment.to_lowercase();

    let hedged_despite_confidence = inputs.confidence >= config.hedging_confidence_floor
        && lexicon::HEDGING_PHRASES
            .iter()
            .any(|phrase| assessment_lower.contains(phrase));

    let brief_despite_symptoms = inputs.symptoms.len() >= config.brief_assessment_symptom_count
        && inputs.assessment.chars().count() < config.brief_assessment_chars;

    if !hedged_despite_confidence && !brief_despite_symptoms {
        return None;
    }

    Some(SafetyResult {
        safety_level: SafetyLevel::Amber,
        safety_notes:
            "Assessment contains some uncertainty. Recommend clinical evaluation for definitive \
             diagnosis."
                .to_string(),
        triggered_rules: vec![
            "Conflicting signals detected between assessment and symptoms".to_string(),
        ],
        requires_immediate_care: false,
    })
}

/// Outcome when no guardrail fires.
pub(crate) fn green_default(inputs: &SafetyInputs<'_>) -> SafetyResult {
    SafetyResult {
        safety_level: SafetyLevel::Green,
        safety_notes: "Assessment based on available information. Always consult healthcare \
                       provider for persistent or worsening symptoms."
            .to_string(),
        triggered_rules: vec![format!(
            "High confidence ({:.0}%), no emergency symptoms",
            inputs.confidence * 100.0
        )],
        requires_immediate_care: false,
    }
}
