use crate::types::{PillarDefinition, PillarKey, Question};

pub fn definition() -> PillarDefinition {
    PillarDefinition {
        key: PillarKey::Talent,
        name: "Talent".to_string(),
        description: "Knowing your natural strengths and putting them to work.".to_string(),
        icon: "sparkles".to_string(),
        color: "#E9C46A".to_string(),
        questions: vec![
            Question::slider(
                "talent_awareness",
                "How clearly can you name your natural strengths?",
            )
            .weight(1.2),
            Question::slider(
                "talent_usage",
                "How much of a normal week do you spend using those strengths?",
            )
            .weight(1.5),
            Question::slider(
                "flow_frequency",
                "How often do you lose track of time because the work absorbs you?",
            ),
            Question::slider(
                "external_recognition",
                "How often do others come to you for exactly these strengths?",
            )
            .weight(0.8),
            Question::free_text(
                "signature_talents",
                "Describe your signature talents in your own words.",
            )
            .insight("signatureTalents"),
            Question::free_text(
                "talent_story",
                "Tell about a moment when your talent clearly made the difference.",
            ),
        ],
    }
}
