use super::common::*;
use crate::ccee::confidence::{
    ConfidenceBreakdown, ConfidenceEngine, ConfidenceLevel, ConfidenceWeights,
};
use crate::ccee::domain::{AssessmentFields, MedicalHistory, UrgencyLevel};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn default_weights_sum_to_one() {
    assert!((ConfidenceWeights::default().sum() - 1.0).abs() < 1e-6);
}

#[test]
fn engine_rejects_weights_that_do_not_sum_to_one() {
    let skewed = ConfidenceWeights {
        data_completeness: 0.9,
        symptom_signal: 0.9,
        rag_relevance: 0.1,
        agent_agreement: 0.1,
        model_consistency: 0.1,
    };

    let engine = ConfidenceEngine::new(skewed);

    assert_eq!(engine.weights(), &ConfidenceWeights::default());
}

#[test]
fn complete_request_scores_every_component() {
    let engine = confidence_engine();

    let breakdown =
        engine.calculate_confidence_score(&complete_context(), &full_fields(), None, None);

    assert_close(breakdown.data_completeness, 1.0);
    // 0.3 * 3/5 symptoms + 0.4 * 7/10 average severity + 0.3 duration
    assert_close(breakdown.symptom_signal_strength, 0.76);
    assert_close(breakdown.rag_relevance, 0.5);
    assert_close(breakdown.agent_agreement, 0.7);
    assert_close(breakdown.model_consistency, 1.0);
    assert_close(breakdown.overall_score, 0.785);
    assert_eq!(breakdown.level, ConfidenceLevel::Medium);
}

#[test]
fn minimal_request_scores_low() {
    let engine = confidence_engine();

    let breakdown =
        engine.calculate_confidence_score(&minimal_context(), &full_fields(), None, None);

    assert_close(breakdown.data_completeness, 0.2);
    assert!(breakdown.overall_score < 0.5);
    assert_eq!(breakdown.level, ConfidenceLevel::Low);
}

#[test]
fn meaningful_history_never_decreases_completeness() {
    let engine = confidence_engine();
    let without = engine.calculate_confidence_score(&minimal_context(), &full_fields(), None, None);

    let mut context = minimal_context();
    context.medical_history = Some(history());
    let with = engine.calculate_confidence_score(&context, &full_fields(), None, None);

    assert!(with.data_completeness >= without.data_completeness);
    assert_close(with.data_completeness, 0.5);
}

#[test]
fn denial_only_history_does_not_count_toward_completeness() {
    let engine = confidence_engine();

    let mut context = minimal_context();
    context.medical_history = Some(MedicalHistory {
        past_conditions: strings(&["None"]),
        current_medications: strings(&["n/a"]),
        allergies: Vec::new(),
    });

    let breakdown = engine.calculate_confidence_score(&context, &full_fields(), None, None);

    assert_close(breakdown.data_completeness, 0.2);
}

#[test]
fn missing_severity_assumes_medium_signal() {
    let engine = confidence_engine();

    let mut context = minimal_context();
    context.symptoms = symptom_report(&["cough", "sore throat"]);

    let breakdown = engine.calculate_confidence_score(&context, &full_fields(), None, None);

    // 0.3 * 2/5 + 0.4 * 0.5 assumed severity + 0.3 * 0.5 without duration
    assert_close(breakdown.symptom_signal_strength, 0.47);
}

#[test]
fn relevance_is_neutral_without_retrieval() {
    let engine = confidence_engine();

    let breakdown =
        engine.calculate_confidence_score(&complete_context(), &full_fields(), Some(&[]), None);

    assert_close(breakdown.rag_relevance, 0.5);
}

#[test]
fn relevance_averages_top_three_hits() {
    let engine = confidence_engine();
    let hits = vec![
        hit("fever overview", Some("fever_basics"), Some(0.9)),
        hit("headache overview", Some("headache_basics"), Some(0.8)),
        hit("fatigue overview", Some("fatigue_basics"), Some(0.7)),
        hit("unrelated", Some("unrelated"), Some(0.1)),
    ];

    let breakdown =
        engine.calculate_confidence_score(&complete_context(), &full_fields(), Some(&hits), None);

    assert_close(breakdown.rag_relevance, 0.8);
}

#[test]
fn relevance_without_numeric_scores_assumes_moderate() {
    let engine = confidence_engine();
    let hits = vec![hit("fever overview", Some("fever_basics"), None)];

    let breakdown =
        engine.calculate_confidence_score(&complete_context(), &full_fields(), Some(&hits), None);

    assert_close(breakdown.rag_relevance, 0.65);
}

#[test]
fn agreement_rewards_emergency_call_with_red_flags() {
    let engine = confidence_engine();
    let fields = fields_with_red_flags(&["Worsening shortness of breath"]);

    let breakdown = engine.calculate_confidence_score(
        &complete_context(),
        &fields,
        None,
        Some(UrgencyLevel::Emergency),
    );

    assert_close(breakdown.agent_agreement, 1.0);
}

#[test]
fn agreement_penalizes_emergency_call_without_red_flags() {
    let engine = confidence_engine();

    let breakdown = engine.calculate_confidence_score(
        &complete_context(),
        &full_fields(),
        None,
        Some(UrgencyLevel::Emergency),
    );

    assert_close(breakdown.agent_agreement, 0.3);
}

#[test]
fn agreement_grades_routine_call_by_red_flag_count() {
    let engine = confidence_engine();
    let context = complete_context();

    let none = engine.calculate_confidence_score(
        &context,
        &full_fields(),
        None,
        Some(UrgencyLevel::Routine),
    );
    let couple = engine.calculate_confidence_score(
        &context,
        &fields_with_red_flags(&["flag one", "flag two"]),
        None,
        Some(UrgencyLevel::Routine),
    );
    let many = engine.calculate_confidence_score(
        &context,
        &fields_with_red_flags(&["flag one", "flag two", "flag three"]),
        None,
        Some(UrgencyLevel::Routine),
    );

    assert_close(none.agent_agreement, 1.0);
    assert_close(couple.agent_agreement, 0.7);
    assert_close(many.agent_agreement, 0.5);
}

#[test]
fn agreement_is_neutral_without_urgency_check() {
    let engine = confidence_engine();
    let context = complete_context();

    let absent = engine.calculate_confidence_score(&context, &full_fields(), None, None);
    let urgent = engine.calculate_confidence_score(
        &context,
        &full_fields(),
        None,
        Some(UrgencyLevel::Urgent),
    );

    assert_close(absent.agent_agreement, 0.7);
    assert_close(urgent.agent_agreement, 0.7);
}

#[test]
fn consistency_tracks_present_field_count() {
    let engine = confidence_engine();
    let context = complete_context();

    let four = AssessmentFields {
        otc_recommendations: None,
        ..full_fields()
    };
    let three = AssessmentFields {
        otc_recommendations: None,
        diagnostic_plan: None,
        ..full_fields()
    };
    let one = AssessmentFields {
        chief_complaint: Some("Fatigue".to_string()),
        ..AssessmentFields::default()
    };

    let full = engine.calculate_confidence_score(&context, &full_fields(), None, None);
    let four = engine.calculate_confidence_score(&context, &four, None, None);
    let three = engine.calculate_confidence_score(&context, &three, None, None);
    let one = engine.calculate_confidence_score(&context, &one, None, None);

    assert_close(full.model_consistency, 1.0);
    assert_close(four.model_consistency, 0.9);
    assert_close(three.model_consistency, 0.7);
    assert_close(one.model_consistency, 0.6);
}

#[test]
fn level_thresholds_are_exact() {
    assert_eq!(ConfidenceLevel::from_score(0.80), ConfidenceLevel::High);
    assert_eq!(ConfidenceLevel::from_score(0.79999), ConfidenceLevel::Medium);
    assert_eq!(ConfidenceLevel::from_score(0.60), ConfidenceLevel::Medium);
    assert_eq!(ConfidenceLevel::from_score(0.59999), ConfidenceLevel::Low);
}

#[test]
fn fallback_breakdown_is_conservative() {
    let fallback = ConfidenceBreakdown::fallback();

    assert_close(fallback.overall_score, 0.5);
    assert_close(fallback.data_completeness, 0.5);
    assert_eq!(fallback.level, ConfidenceLevel::Medium);
}

#[test]
fn every_component_stays_in_unit_interval() {
    let engine = confidence_engine();
    let hits = vec![hit("fever overview", Some("fever_basics"), Some(0.99))];

    for context in [complete_context(), minimal_context()] {
        for fields in [full_fields(), AssessmentFields::default()] {
            let breakdown =
                engine.calculate_confidence_score(&context, &fields, Some(&hits), None);

            for value in [
                breakdown.data_completeness,
                breakdown.symptom_signal_strength,
                breakdown.rag_relevance,
                breakdown.agent_agreement,
                breakdown.model_consistency,
                breakdown.overall_score,
            ] {
                assert!((0.0..=1.0).contains(&value), "out of range: {value}");
            }
        }
    }
}
