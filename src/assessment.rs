//! Persistence-shaped assessment records.
//!
//! The engine itself never stores anything; these types package a scored
//! submission the way the persistence sink expects it
//! (`userId, pillarKey, score, insights, timestamp`).

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::registry::PillarRegistry;
use crate::scoring;
use crate::types::{AnswerMap, InsightResult, OverallStatus, PillarKey};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentOutcome {
    pub id: Uuid,
    pub user_id: String,
    pub pillar_key: PillarKey,
    pub score: f64,
    pub insights: InsightResult,
    pub completed_at: DateTime<Utc>,
}

/// Score one pillar submission and assemble the outcome record.
pub fn assess(
    registry: &PillarRegistry,
    user_id: &str,
    pillar_key: PillarKey,
    answers: &AnswerMap,
) -> AssessmentOutcome {
    let score = registry.calculate_score(pillar_key, answers);
    let insights = registry.generate_insights(pillar_key, answers, score);

    AssessmentOutcome {
        id: Uuid::new_v4(),
        user_id: user_id.to_string(),
        pillar_key,
        score,
        insights,
        completed_at: Utc::now(),
    }
}

/// Cross-pillar summary for the dashboard's "where to start" view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub outcomes: Vec<AssessmentOutcome>,
    pub average_score: f64,
    /// Lowest-scoring submitted pillar; ties go to the earlier pillar in
    /// priority order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_pillar: Option<PillarKey>,
    pub needs_attention_count: u32,
}

/// Score every submitted pillar and summarize where to focus.
pub fn assess_profile(
    registry: &PillarRegistry,
    user_id: &str,
    submissions: &[(PillarKey, AnswerMap)],
) -> ProfileSummary {
    let outcomes: Vec<AssessmentOutcome> = submissions
        .iter()
        .map(|(key, answers)| assess(registry, user_id, *key, answers))
        .collect();

    let average_score = if outcomes.is_empty() {
        0.0
    } else {
        scoring::round_one_decimal(
            outcomes.iter().map(|o| o.score).sum::<f64>() / outcomes.len() as f64,
        )
    };

    let focus_pillar = outcomes
        .iter()
        .min_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal))
        .map(|o| o.pillar_key);

    let needs_attention_count = outcomes
        .iter()
        .filter(|o| o.insights.overall_status == OverallStatus::NeedsAttention)
        .count() as u32;

    ProfileSummary {
        outcomes,
        average_score,
        focus_pillar,
        needs_attention_count,
    }
}
