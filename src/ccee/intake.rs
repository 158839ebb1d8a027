use super::domain::{AssessmentContext, MedicalHistory, PatientProfile, SymptomReport};

/// Validation errors raised while building an assessment context.
#[derive(Debug, thiserror::Error)]
pub enum ContextViolation {
    #[error("patient age {0} exceeds the supported range (0-130)")]
    AgeOutOfRange(u8),
    #[error("at least one symptom is required")]
    NoSymptoms,
    #[error("symptom entries must not be blank")]
    BlankSymptom,
    #[error("severity for '{symptom}' must be between 1 and 10 (found {value})")]
    SeverityOutOfRange { symptom: String, value: u8 },
}

pub const MAX_PATIENT_AGE: u8 = 130;

const MIN_SEVERITY: u8 = 1;
const MAX_SEVERITY: u8 = 10;

/// Raw request parts before validation and normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentSubmission {
    pub patient: PatientProfile,
    pub symptoms: SymptomReport,
    pub medical_history: Option<MedicalHistory>,
    pub additional_context: Option<String>,
}

/// Guard responsible for producing `AssessmentContext` instances.
///
/// The orchestrator normally validates requests at its own boundary;
/// this guard is the supported path when it wants the checks done here.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextGuard;

impl ContextGuard {
    /// Convert an inbound submission into a validated, trimmed context.
    pub fn context_from_submission(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<AssessmentContext, ContextViolation> {
        if submission.patient.age > MAX_PATIENT_AGE {
            return Err(ContextViolation::AgeOutOfRange(submission.patient.age));
        }

        if submission.symptoms.symptoms.is_empty() {
            return Err(ContextViolation::NoSymptoms);
        }

        let mut symptoms = Vec::with_capacity(submission.symptoms.symptoms.len());
        for symptom in &submission.symptoms.symptoms {
            let trimmed = symptom.trim();
            if trimmed.is_empty() {
                return Err(ContextViolation::BlankSymptom);
            }
            symptoms.push(trimmed.to_string());
        }

        for (symptom, value) in &submission.symptoms.severity {
            if !(MIN_SEVERITY..=MAX_SEVERITY).contains(value) {
                return Err(ContextViolation::SeverityOutOfRange {
                    symptom: symptom.clone(),
                    value: *value,
                });
            }
        }

        Ok(AssessmentContext {
            patient: submission.patient,
            symptoms: SymptomReport {
                symptoms,
                severity: submission.symptoms.severity,
                duration: submission.symptoms.duration,
            },
            medical_history: submission.medical_history,
            additional_context: submission.additional_context,
        })
    }
}
