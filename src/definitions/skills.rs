use crate::types::{PillarDefinition, PillarKey, Question};

pub fn definition() -> PillarDefinition {
    PillarDefinition {
        key: PillarKey::Skills,
        name: "Skills".to_string(),
        description: "Competence today and how deliberately you are building it.".to_string(),
        icon: "graduation-cap".to_string(),
        color: "#2A9D8F".to_string(),
        questions: vec![
            Question::slider(
                "current_skill_level",
                "How strong are your skills for the work you want to do?",
            )
            .weight(1.3),
            Question::slider(
                "practice_consistency",
                "How consistently do you practice or train deliberately?",
            )
            .weight(1.2),
            Question::slider(
                "learning_pace",
                "How quickly are you picking up new skills right now?",
            ),
            Question::slider(
                "feedback_usage",
                "How actively do you seek and use feedback on your work?",
            )
            .weight(0.8),
            Question::slider(
                "skill_breadth",
                "How broad is your toolbox beyond your core specialty?",
            )
            .weight(0.6),
            Question::choice(
                "learning_style",
                "How do you learn best?",
                &["Watching", "Listening", "Reading", "Doing"],
            ),
            Question::free_text(
                "skill_development_goal",
                "Which one skill, if sharpened, would change the most for you?",
            )
            .insight("skillDevelopmentGoal"),
        ],
    }
}
