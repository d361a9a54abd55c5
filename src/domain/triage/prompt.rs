//! Classification request builder.
//!
//! Serializes the full turn history into a role-tagged transcript and
//! appends the fixed instruction block describing the two reply shapes,
//! the canonical specialty vocabulary, and the per-category heuristics
//! for when enough information has been given.

use crate::domain::conversation::Conversation;
use crate::domain::taxonomy::SpecialtyCatalog;

/// A fully rendered request for the external classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRequest {
    /// The complete prompt handed to the classifier.
    pub prompt: String,
}

impl ClassificationRequest {
    /// Builds a request from the conversation so far.
    ///
    /// The specialty vocabulary is taken from the catalog so the prompt
    /// and the matcher can never disagree about the canonical set.
    pub fn build(conversation: &Conversation, catalog: &SpecialtyCatalog) -> Self {
        let mut transcript = String::from(
            "This is an ongoing conversation between a user seeking medical advice and an \
             AI medical assistant. The assistant's goal is to understand the user's symptoms \
             fully, analyze their relevance, and provide guidance on the appropriate \
             specialist if enough information is available.\n\nConversation:\n",
        );

        for turn in conversation.turns() {
            let role = if turn.is_user() { "User" } else { "AI" };
            transcript.push_str(role);
            transcript.push_str(": ");
            transcript.push_str(&turn.text);
            transcript.push('\n');
        }

        let vocabulary = catalog.specialty_names().collect::<Vec<_>>().join(", ");

        let prompt = format!(
            "{transcript}\n\
             Instructions for the AI:\n\
             - Carefully analyze the conversation history to determine if the user has \
             provided sufficient medically relevant information, such as symptoms, duration, \
             intensity, location, and any other necessary context.\n\
             - Only if the provided information is incomplete or unclear should the assistant \
             ask for additional specific details. Avoid asking unnecessary questions if the \
             input already includes enough detail for an accurate recommendation.\n\
             - If there is enough information, recommend an appropriate specialist in the \
             following JSON format:\n\n\
             {{\n  \"message\": \"Based on your symptoms, it would be best to consult a \
             [specialist type].\",\n  \"speciality\": \"[specialist type]\"\n}}\n\
             where speciality can be: {vocabulary}\n\n\
             - If additional information is truly necessary, identify the missing information \
             and ask a specific follow-up question in the following JSON format. Ensure the \
             question is clear, concise, and directly relevant to making an accurate \
             recommendation:\n\n\
             {{\n  \"message\": \"Could you provide more information on [missing \
             information]? For example, [example question based on context].\",\n  \
             \"missing_information\": \"[missing category]\"\n}}\n\n\
             Guidelines for determining when additional information is needed:\n\
             - For pain: If location, severity, or duration is unclear, request these \
             specifics. Otherwise, proceed with the available information.\n\
             - For fatigue: If the duration, severity, or impact on daily activities is \
             missing, ask about these aspects. Do not ask if these are already covered.\n\
             - For respiratory issues: If relevant details like shortness of breath, cough \
             type, or duration are missing, request them. Avoid redundancy if covered.\n\
             - For digestive issues: Ask about nausea, vomiting, or specific triggers only \
             if not mentioned by the user.\n\n\
             The goal is to minimize repetitive or redundant questions while ensuring the \
             assistant gathers enough information to make an informed recommendation."
        );

        Self { prompt }
    }
}
