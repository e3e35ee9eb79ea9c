//! Insight generation: qualitative classification of a scored submission.
//!
//! Pure and stateless; re-run whenever the score is recomputed, never
//! cached independently of its source answers.

use std::collections::BTreeMap;

use crate::types::{
    AnswerMap, InsightResult, OverallStatus, PillarDefinition, Question, QuestionType,
};

/// Thresholds on percent-of-declared-range. For the dominant 0–100 slider
/// convention these are the raw values 30 and 80.
const CRITICAL_PERCENT: f64 = 30.0;
const STRONG_PERCENT: f64 = 80.0;

/// The hinder block keeps raw 1–10 thresholds with inverted semantics: a
/// high barrier value is bad.
const HINDER_CRITICAL_MIN: f64 = 8.0;
const HINDER_STRONG_MAX: f64 = 3.0;

/// Classify answers into critical/strong areas, derive the status tier from
/// the final score, and surface declared narrative fields verbatim.
pub fn generate_insights(
    definition: &PillarDefinition,
    answers: &AnswerMap,
    score: f64,
) -> InsightResult {
    let mut critical_areas = Vec::new();
    let mut strong_areas = Vec::new();
    let mut narratives = BTreeMap::new();

    for question in &definition.questions {
        match question.question_type {
            QuestionType::Slider => {
                let Some(value) = answers.get(&question.key).and_then(|v| v.as_number()) else {
                    continue;
                };
                let pct = percent_of_range(question, value);
                if pct <= CRITICAL_PERCENT {
                    critical_areas.push(question.key.clone());
                } else if pct >= STRONG_PERCENT {
                    strong_areas.push(question.key.clone());
                }
            }
            QuestionType::Scale => {
                let Some(value) = answers.get(&question.key).and_then(|v| v.as_number()) else {
                    continue;
                };
                if value >= HINDER_CRITICAL_MIN {
                    critical_areas.push(question.key.clone());
                } else if value <= HINDER_STRONG_MAX {
                    strong_areas.push(question.key.clone());
                }
            }
            QuestionType::Text | QuestionType::MultipleChoice => {}
        }

        if let Some(field) = &question.insight_field {
            if let Some(text) = answers.get(&question.key).and_then(|v| v.as_text()) {
                if !text.trim().is_empty() {
                    narratives.insert(field.clone(), text.to_string());
                }
            }
        }
    }

    InsightResult {
        critical_areas,
        strong_areas,
        overall_status: OverallStatus::from_score(score),
        narratives,
    }
}

fn percent_of_range(question: &Question, value: f64) -> f64 {
    let (min, max) = question.bounds();
    if max <= min {
        return 50.0;
    }
    (value.clamp(min, max) - min) / (max - min) * 100.0
}
