//! Closed registry of the six pillar definitions.
//!
//! Built once, never mutated, safe for unlimited concurrent readers. There
//! is no dynamic registration; the pillar set is fixed at build time.

use std::collections::HashSet;

use crate::definitions;
use crate::error::PillarError;
use crate::insights;
use crate::scoring;
use crate::types::{AnswerMap, InsightResult, PillarDefinition, PillarKey};

pub struct PillarRegistry {
    // Indexed by PillarKey discriminant; build_all keeps the same order.
    definitions: [PillarDefinition; 6],
}

impl PillarRegistry {
    pub fn new() -> PillarRegistry {
        PillarRegistry {
            definitions: definitions::build_all(),
        }
    }

    pub fn definition(&self, key: PillarKey) -> &PillarDefinition {
        let definition = &self.definitions[key as usize];
        debug_assert_eq!(definition.key, key);
        definition
    }

    /// Resolve a persisted string key, e.g. from a stored assessment row.
    pub fn definition_by_key(&self, key: &str) -> Result<&PillarDefinition, PillarError> {
        Ok(self.definition(PillarKey::parse(key)?))
    }

    pub fn definitions(&self) -> &[PillarDefinition] {
        &self.definitions
    }

    /// Fixed, hand-curated display order (Self Care first). Presentation
    /// only; carries no scoring semantics.
    pub fn priority_order(&self) -> [PillarKey; 6] {
        PillarKey::ALL
    }

    /// Check the question-key uniqueness invariant across all pillars.
    pub fn validate(&self) -> Result<(), PillarError> {
        for definition in &self.definitions {
            let mut seen = HashSet::new();
            for question in &definition.questions {
                if !seen.insert(question.key.as_str()) {
                    return Err(PillarError::DuplicateQuestionKey {
                        pillar: definition.key.to_string(),
                        key: question.key.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn calculate_score(&self, key: PillarKey, answers: &AnswerMap) -> f64 {
        scoring::calculate_score(self.definition(key), answers)
    }

    pub fn generate_insights(
        &self,
        key: PillarKey,
        answers: &AnswerMap,
        score: f64,
    ) -> InsightResult {
        insights::generate_insights(self.definition(key), answers, score)
    }
}

impl Default for PillarRegistry {
    fn default() -> Self {
        PillarRegistry::new()
    }
}
