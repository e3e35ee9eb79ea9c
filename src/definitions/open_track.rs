use crate::types::{PillarDefinition, PillarKey, Question};

// Question keys shared with the component-blend scorer in `scoring`.
pub(crate) const CHANGE_GOAL: &str = "change_goal";
pub(crate) const WHY_NOW: &str = "why_now";
pub(crate) const MOTIVATION_LEVEL: &str = "motivation_level";
pub(crate) const CONFIDENCE_LEVEL: &str = "confidence_level";
pub(crate) const URGENCY_LEVEL: &str = "urgency_level";
pub(crate) const TIMEFRAME: &str = "timeframe";
pub(crate) const FIRST_STEP: &str = "first_step";
pub(crate) const RESOURCES_AVAILABLE: &str = "resources_available";
pub(crate) const PLAN_66_DAY: &str = "plan_66_day";

/// Open Track is the free-choice change project. It is scored as a fixed
/// blend of four components (goal clarity, motivation, capacity/realism,
/// preparation) rather than a weighted question average.
pub fn definition() -> PillarDefinition {
    PillarDefinition {
        key: PillarKey::OpenTrack,
        name: "Open Track".to_string(),
        description: "The one change you have chosen to drive over the next 66 days.".to_string(),
        icon: "compass".to_string(),
        color: "#F4A261".to_string(),
        questions: vec![
            Question::free_text(CHANGE_GOAL, "What is the change you want to make?")
                .insight("changeGoal"),
            Question::free_text(WHY_NOW, "Why does this matter to you right now?"),
            Question::slider_bounded(
                MOTIVATION_LEVEL,
                "How motivated are you to make this change?",
                1.0,
                10.0,
            ),
            Question::slider_bounded(
                CONFIDENCE_LEVEL,
                "How confident are you that you can pull it off?",
                1.0,
                10.0,
            ),
            Question::slider_bounded(
                URGENCY_LEVEL,
                "How urgent does this feel, honestly?",
                1.0,
                10.0,
            ),
            Question::choice(
                TIMEFRAME,
                "What timeframe are you committing to?",
                &["1 month", "3 months", "6 months", "12 months"],
            ),
            Question::free_text(FIRST_STEP, "What is the very first step?"),
            Question::free_text(
                RESOURCES_AVAILABLE,
                "What resources and support do you already have?",
            ),
            Question::free_text(PLAN_66_DAY, "Sketch your 66-day plan.").insight("sixtySixDayPlan"),
        ],
    }
}
