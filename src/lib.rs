//! Clinical Confidence & Explainability Engine (CCEE).
//!
//! Pure, deterministic scoring for AI-generated health assessments: a
//! weighted confidence breakdown, a symptom-to-source evidence map, an
//! uncertainty inventory, and a medical safety guardrail chain whose
//! triage level overrides everything else. The library performs no I/O
//! and holds no state; every operation is a function of its inputs and
//! is safe to call concurrently.

pub mod ccee;
