//! Error types for the scoring engine.
//!
//! Malformed *answer* data is never an error: incomplete or mistyped answers
//! degrade to the neutral default so partial assessments can still be
//! submitted. Only key resolution and definition validation can fail, and
//! both indicate a programming or configuration mistake in the caller.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PillarError {
    #[error("Unknown pillar key: {0}")]
    UnknownPillarKey(String),

    #[error("Duplicate question key '{key}' in pillar '{pillar}'")]
    DuplicateQuestionKey { pillar: String, key: String },
}
