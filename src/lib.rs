//! Five Pillars self-assessment scoring engine.
//!
//! Maps questionnaire answers to a normalized 0–10 score per life domain
//! and classifies answers into critical/strong areas plus narrative
//! insights. Purely synchronous and side-effect-free: callers own
//! persistence, transport, and presentation.

pub mod assessment;
mod definitions;
pub mod error;
pub mod insights;
pub mod registry;
pub mod scoring;
pub mod types;

pub use error::PillarError;
pub use registry::PillarRegistry;
pub use types::{
    AnswerMap, AnswerValue, InsightResult, OverallStatus, PillarDefinition, PillarKey, Question,
    QuestionType,
};

use std::sync::OnceLock;

static REGISTRY: OnceLock<PillarRegistry> = OnceLock::new();

/// Process-wide immutable registry backing the convenience functions below.
/// Safe for unlimited concurrent readers.
pub fn registry() -> &'static PillarRegistry {
    REGISTRY.get_or_init(PillarRegistry::new)
}

/// Score one pillar from a string key. Fails only on an unknown key;
/// malformed answer data degrades to the neutral default.
pub fn calculate_score(pillar_key: &str, answers: &AnswerMap) -> Result<f64, PillarError> {
    let key = PillarKey::parse(pillar_key)?;
    Ok(registry().calculate_score(key, answers))
}

/// Classify a scored submission from a string key.
pub fn generate_insights(
    pillar_key: &str,
    answers: &AnswerMap,
    score: f64,
) -> Result<InsightResult, PillarError> {
    let key = PillarKey::parse(pillar_key)?;
    Ok(registry().generate_insights(key, answers, score))
}

pub fn get_pillar_definition(pillar_key: &str) -> Result<&'static PillarDefinition, PillarError> {
    registry().definition_by_key(pillar_key)
}

/// Pillar keys in display order.
pub fn list_pillar_keys() -> [PillarKey; 6] {
    registry().priority_order()
}
