use crate::types::{PillarDefinition, PillarKey, Question};

pub fn definition() -> PillarDefinition {
    PillarDefinition {
        key: PillarKey::Brand,
        name: "Brand".to_string(),
        description: "How clearly the right people understand what you offer.".to_string(),
        icon: "megaphone".to_string(),
        color: "#264653".to_string(),
        questions: vec![
            Question::slider(
                "brand_clarity",
                "How clearly could a stranger say what you stand for?",
            )
            .weight(1.4),
            Question::slider(
                "network_strength",
                "How strong is the network that can vouch for your work?",
            ),
            Question::slider(
                "online_presence",
                "How well does your online presence reflect what you actually do?",
            )
            .weight(0.8),
            Question::slider(
                "visibility_comfort",
                "How comfortable are you being visible about your work?",
            )
            .weight(0.7),
            Question::free_text(
                "value_proposition",
                "In one or two sentences: what do you offer, and to whom?",
            )
            .insight("valueProposition"),
            Question::free_text(
                "target_audience",
                "Who exactly do you want to reach with that offer?",
            ),
        ],
    }
}
