use crate::types::{PillarDefinition, PillarKey, Question};

/// Self Care carries two legacy blocks alongside the sliders: a 1–10
/// "hinder" barrier block (inverted — high values are bad) and a yes/no
/// functional-access block. Both blend in at fixed low weights so legacy
/// data never dominates the slider answers.
pub fn definition() -> PillarDefinition {
    PillarDefinition {
        key: PillarKey::SelfCare,
        name: "Self Care".to_string(),
        description: "Sleep, energy, recovery and the habits that keep you running.".to_string(),
        icon: "heart".to_string(),
        color: "#E76F51".to_string(),
        questions: vec![
            Question::slider("sleep_quality", "How well are you sleeping at the moment?")
                .weight(1.5),
            Question::slider("energy_level", "How is your energy through a typical day?")
                .weight(1.2),
            Question::slider(
                "stress_recovery",
                "How well do you recover after stressful periods?",
            )
            .weight(1.2),
            Question::slider(
                "physical_activity",
                "How satisfied are you with your level of physical activity?",
            ),
            Question::slider(
                "nutrition_habits",
                "How consistent are your eating habits on a normal week?",
            )
            .weight(0.8),
            Question::slider(
                "personal_boundaries",
                "How good are you at protecting time for yourself?",
            )
            .weight(0.9),
            // Legacy hinder block (1–10, inverted).
            Question::scale("hinder_worry", "How much does worry hold you back day to day?"),
            Question::scale(
                "hinder_time_pressure",
                "How much does time pressure get in the way of taking care of yourself?",
            ),
            Question::scale(
                "hinder_sleep_debt",
                "How much is lack of sleep affecting your daily life?",
            ),
            // Legacy functional-access block (yes/no).
            Question::choice(
                "access_exercise",
                "Do you have somewhere you can exercise regularly?",
                &["yes", "no"],
            ),
            Question::choice(
                "access_healthy_food",
                "Do you have practical access to healthy food most days?",
                &["yes", "no"],
            ),
            Question::choice(
                "access_quiet_space",
                "Do you have a quiet space where you can rest undisturbed?",
                &["yes", "no"],
            ),
            Question::free_text(
                "self_care_reflection",
                "What would taking better care of yourself look like?",
            )
            .insight("selfCareReflection"),
        ],
    }
}
