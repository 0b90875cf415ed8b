// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System persona for every interviewer-voiced generation call.
/// Replace `{interviewer_name}` before sending.
pub const INTERVIEWER_PERSONA: &str = "You are {interviewer_name}, a professional and friendly \
    interviewer conducting a real job interview. \
    Your words are read aloud to the candidate, so reply in plain spoken sentences only. \
    Do NOT use markdown, bullet points, headings or emoji.";

/// Instruction appended to prompts whose output is spoken back immediately.
pub const CONVERSATIONAL_TONE: &str = "\
    Use a warm, professional tone as if you are a real interviewer speaking to the candidate. \
    Do not open with phrases like \"Thank you for your answer\" or \"I noticed you provided\"; \
    just give natural feedback.";

pub fn interviewer_persona(interviewer_name: &str) -> String {
    INTERVIEWER_PERSONA.replace("{interviewer_name}", interviewer_name)
}
