use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PillarError;

/// The closed set of assessed life/work domains.
///
/// Keys are stable identifiers used for persistence and lookup; adding a
/// pillar means adding a variant plus a definition module, never runtime
/// registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PillarKey {
    SelfCare,
    Skills,
    Talent,
    Brand,
    Economy,
    OpenTrack,
}

impl PillarKey {
    /// All pillar keys in display (priority) order. Self Care comes first;
    /// the order carries no scoring semantics.
    pub const ALL: [PillarKey; 6] = [
        PillarKey::SelfCare,
        PillarKey::Skills,
        PillarKey::Talent,
        PillarKey::Brand,
        PillarKey::Economy,
        PillarKey::OpenTrack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PillarKey::SelfCare => "self_care",
            PillarKey::Skills => "skills",
            PillarKey::Talent => "talent",
            PillarKey::Brand => "brand",
            PillarKey::Economy => "economy",
            PillarKey::OpenTrack => "open_track",
        }
    }

    /// Resolve a persisted string key. This is the only place an unknown
    /// pillar key can enter the engine, so it is the only fallible lookup.
    pub fn parse(value: &str) -> Result<PillarKey, PillarError> {
        PillarKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == value)
            .ok_or_else(|| PillarError::UnknownPillarKey(value.to_string()))
    }
}

impl fmt::Display for PillarKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Legacy 1–10 bounded numeric input. Only used by fallback blocks.
    Scale,
    /// 0–100 bounded numeric input, the dominant question type.
    Slider,
    /// Free-form text. Contributes to narrative insight fields only.
    Text,
    /// Categorical choice. Contributes to narrative/insight fields only,
    /// except yes/no blocks which feed the functional-access sub-score.
    MultipleChoice,
}

fn default_weight() -> f64 {
    1.0
}

/// One assessment item within a pillar's questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique within the pillar; the lookup key into the answer map.
    pub key: String,
    /// Prompt shown to the user. Not used in scoring.
    pub text: String,
    pub question_type: QuestionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Relative importance within the pillar's weighted average.
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// When set, the raw answer is copied verbatim into the insight result's
    /// `narratives` map under this name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insight_field: Option<String>,
}

impl Question {
    /// A 0–100 percentage slider, weight 1.0.
    pub fn slider(key: &str, text: &str) -> Question {
        Question {
            key: key.to_string(),
            text: text.to_string(),
            question_type: QuestionType::Slider,
            min: Some(0.0),
            max: Some(100.0),
            weight: default_weight(),
            options: Vec::new(),
            insight_field: None,
        }
    }

    /// A slider with explicit bounds (e.g. the 1–10 motivation sliders).
    pub fn slider_bounded(key: &str, text: &str, min: f64, max: f64) -> Question {
        Question {
            min: Some(min),
            max: Some(max),
            ..Question::slider(key, text)
        }
    }

    /// A legacy 1–10 scale item (hinder/barrier blocks).
    pub fn scale(key: &str, text: &str) -> Question {
        Question {
            key: key.to_string(),
            text: text.to_string(),
            question_type: QuestionType::Scale,
            min: Some(1.0),
            max: Some(10.0),
            weight: default_weight(),
            options: Vec::new(),
            insight_field: None,
        }
    }

    pub fn free_text(key: &str, text: &str) -> Question {
        Question {
            key: key.to_string(),
            text: text.to_string(),
            question_type: QuestionType::Text,
            min: None,
            max: None,
            weight: default_weight(),
            options: Vec::new(),
            insight_field: None,
        }
    }

    pub fn choice(key: &str, text: &str, options: &[&str]) -> Question {
        Question {
            key: key.to_string(),
            text: text.to_string(),
            question_type: QuestionType::MultipleChoice,
            min: None,
            max: None,
            weight: default_weight(),
            options: options.iter().map(|o| o.to_string()).collect(),
            insight_field: None,
        }
    }

    pub fn weight(mut self, weight: f64) -> Question {
        self.weight = weight;
        self
    }

    pub fn insight(mut self, field: &str) -> Question {
        self.insight_field = Some(field.to_string());
        self
    }

    /// Declared numeric bounds, with the type's conventional defaults.
    pub fn bounds(&self) -> (f64, f64) {
        let (default_min, default_max) = match self.question_type {
            QuestionType::Scale => (1.0, 10.0),
            _ => (0.0, 100.0),
        };
        (
            self.min.unwrap_or(default_min),
            self.max.unwrap_or(default_max),
        )
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self.question_type,
            QuestionType::Slider | QuestionType::Scale
        )
    }

    /// Yes/no choice questions form the legacy functional-access block.
    pub fn is_yes_no(&self) -> bool {
        self.question_type == QuestionType::MultipleChoice
            && self.options.len() == 2
            && self.options.iter().any(|o| o.eq_ignore_ascii_case("yes"))
            && self.options.iter().any(|o| o.eq_ignore_ascii_case("no"))
    }
}

/// Static configuration for one pillar. Immutable after registry
/// construction; display metadata passes through to the UI unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarDefinition {
    pub key: PillarKey,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub questions: Vec<Question>,
}

impl PillarDefinition {
    pub fn question(&self, key: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.key == key)
    }
}

/// One submitted answer. Unanswered questions are absent from the map, never
/// null-valued; a type mismatch is treated the same as absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
}

impl AnswerValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) => Some(*n),
            AnswerValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            AnswerValue::Number(_) => None,
        }
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        AnswerValue::Number(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

/// Answers for one pillar submission, keyed by question key.
pub type AnswerMap = HashMap<String, AnswerValue>;

/// Status tier derived from the final 0–10 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    Strong,
    Moderate,
    NeedsAttention,
}

impl OverallStatus {
    /// `>= 7.0` strong, `>= 5.0` moderate, below that needs attention.
    pub fn from_score(score: f64) -> OverallStatus {
        if score >= 7.0 {
            OverallStatus::Strong
        } else if score >= 5.0 {
            OverallStatus::Moderate
        } else {
            OverallStatus::NeedsAttention
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OverallStatus::Strong => "strong",
            OverallStatus::Moderate => "moderate",
            OverallStatus::NeedsAttention => "needs_attention",
        }
    }
}

/// Qualitative classification of a pillar submission.
///
/// `critical_areas`/`strong_areas` hold opaque question keys; the
/// presentation layer maps them back to display text via the pillar's
/// `questions` list. `narratives` carries selected free-text answers
/// verbatim for downstream AI/coach consumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightResult {
    pub critical_areas: Vec<String>,
    pub strong_areas: Vec<String>,
    pub overall_status: OverallStatus,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub narratives: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pillar_key_round_trips_through_strings() {
        for key in PillarKey::ALL {
            assert_eq!(PillarKey::parse(key.as_str()).unwrap(), key);
        }
    }

    #[test]
    fn pillar_key_rejects_unknown() {
        let err = PillarKey::parse("not_a_real_key").unwrap_err();
        assert!(matches!(err, PillarError::UnknownPillarKey(_)));
    }

    #[test]
    fn scale_defaults_to_one_through_ten() {
        let q = Question::scale("hinder_worry", "How much does worry hold you back?");
        assert_eq!(q.bounds(), (1.0, 10.0));
    }

    #[test]
    fn answer_value_deserializes_untagged() {
        let n: AnswerValue = serde_json::from_str("72.5").unwrap();
        assert_eq!(n.as_number(), Some(72.5));

        let t: AnswerValue = serde_json::from_str("\"three months\"").unwrap();
        assert_eq!(t.as_text(), Some("three months"));
    }

    #[test]
    fn status_tiers_at_boundaries() {
        assert_eq!(OverallStatus::from_score(7.0), OverallStatus::Strong);
        assert_eq!(OverallStatus::from_score(6.9), OverallStatus::Moderate);
        assert_eq!(OverallStatus::from_score(5.0), OverallStatus::Moderate);
        assert_eq!(
            OverallStatus::from_score(4.9),
            OverallStatus::NeedsAttention
        );
    }

    #[test]
    fn yes_no_detection_ignores_case() {
        let q = Question::choice("access_gym", "Do you have access to a gym?", &["Yes", "No"]);
        assert!(q.is_yes_no());

        let q = Question::choice("style", "Preferred learning style?", &["Visual", "Auditory"]);
        assert!(!q.is_yes_no());
    }
}
