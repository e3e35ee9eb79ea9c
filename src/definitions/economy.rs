use crate::types::{PillarDefinition, PillarKey, Question};

pub fn definition() -> PillarDefinition {
    PillarDefinition {
        key: PillarKey::Economy,
        name: "Economy".to_string(),
        description: "Financial stability, control and room to maneuver.".to_string(),
        icon: "wallet".to_string(),
        color: "#8AB17D".to_string(),
        questions: vec![
            Question::slider(
                "income_stability",
                "How predictable is your income month to month?",
            )
            .weight(1.5),
            Question::slider(
                "financial_buffer",
                "How long could you keep going if income stopped tomorrow?",
            )
            .weight(1.3),
            Question::slider(
                "spending_control",
                "How much control do you have over where your money goes?",
            ),
            Question::slider(
                "financial_calm",
                "How calm do you feel when you think about your finances?",
            )
            .weight(1.1),
            Question::slider(
                "pricing_confidence",
                "How confident are you charging what your work is worth?",
            )
            .weight(0.9),
            Question::choice(
                "income_streams",
                "How many income streams do you have today?",
                &["One", "Two", "Three or more"],
            ),
            Question::free_text(
                "financial_goal",
                "What would 'economically free enough' mean for you?",
            )
            .insight("financialGoal"),
        ],
    }
}
