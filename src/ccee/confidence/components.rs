use super::super::domain::{
    AssessmentContext, AssessmentFields, RetrievalHit, SymptomReport, UrgencyLevel,
};

/// How many top retrieval hits contribute to the relevance average.
const RELEVANCE_SAMPLE: usize = 3;

/// Additive completeness score over the request fields.
///
/// Age contributes unconditionally (it is required upstream); the
/// history component only counts when the history is meaningful, the
/// same predicate the uncertainty checks use.
pub(crate) fn data_completeness(context: &AssessmentContext) -> f64 {
    let mut score: f64 = 0.2;

    if context.patient.gender.is_some() {
        score += 0.1;
    }

    if context.has_meaningful_history() {
        score += 0.3;
    }

    if context.symptoms.has_severity() {
        score += 0.2;
    }

    if context.symptoms.has_duration() {
        score += 0.2;
    }

    score.min(1.0)
}

/// Signal strength from symptom count, average severity, and duration
/// specificity. Missing severity assumes a medium 5/10; missing
/// duration halves its share.
pub(crate) fn symptom_signal_strength(report: &SymptomReport) -> f64 {
    if report.symptoms.is_empty() {
        return 0.0;
    }

    let count_score = 0.3 * (report.symptoms.len() as f64 / 5.0).min(1.0);

    let severity_score = if report.has_severity() {
        let total: u32 = report.severity.values().map(|value| u32::from(*value)).sum();
        let average = f64::from(total) / report.severity.len() as f64;
        0.4 * (average / 10.0)
    } else {
        0.4 * 0.5
    };

    let duration_score = if report.has_duration() { 0.3 } else { 0.3 * 0.5 };

    (count_score + severity_score + duration_score).min(1.0)
}

/// Average relevance of the top retrieval hits.
///
/// 0.5 when retrieval was not used at all; 0.65 when hits exist but
/// none exposes a numeric relevance field.
pub(crate) fn rag_relevance(hits: Option<&[RetrievalHit]>) -> f64 {
    let hits = match hits {
        Some(hits) if !hits.is_empty() => hits,
        _ => return 0.5,
    };

    let relevances: Vec<f64> = hits
        .iter()
        .take(RELEVANCE_SAMPLE)
        .filter_map(RetrievalHit::relevance)
        .collect();

    if relevances.is_empty() {
        return 0.65;
    }

    let average = relevances.iter().sum::<f64>() / relevances.len() as f64;
    average.min(1.0)
}

/// Agreement between the urgency classification and the diagnostic
/// plan's red flags. An emergency call should come with red flags; a
/// routine call should come with few or none.
pub(crate) fn agent_agreement(
    fields: &AssessmentFields,
    urgency: Option<UrgencyLevel>,
) -> f64 {
    let red_flag_count = fields.red_flags().len();

    match urgency {
        Some(UrgencyLevel::Emergency) => {
            if red_flag_count > 0 {
                1.0
            } else {
                0.3
            }
        }
        Some(UrgencyLevel::Routine) => match red_flag_count {
            0 => 1.0,
            1..=2 => 0.7,
            _ => 0.5,
        },
        // No check performed, or an in-between classification.
        Some(UrgencyLevel::Urgent) | None => 0.7,
    }
}

/// Fraction of the five required assessment fields the model produced,
/// mapped onto a coarse consistency score.
pub(crate) fn model_consistency(fields: &AssessmentFields) -> f64 {
    let required = AssessmentFields::REQUIRED_FIELD_COUNT;
    let present = fields.present_field_count();

    if present == required {
        1.0
    } else if present >= required - 1 {
        0.9
    } else if present >= required - 2 {
        0.7
    } else {
        0.6
    }
}
