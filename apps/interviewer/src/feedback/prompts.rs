// All LLM prompt constants for the Feedback module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Per-answer prompt when the question is known.
/// Replace: {question}, {answer}, {tone}
pub const ANSWER_FEEDBACK_PROMPT: &str = r#"You are giving natural, conversational feedback on a candidate's response.

Question: {question}
Answer: {answer}

Consider:
1. Relevance to the question
2. Clarity and communication
3. Specificity and examples
4. Professionalism
5. Areas for improvement

Give feedback in 2-3 sentences that sound natural and conversational. {tone}"#;

/// Per-answer prompt when no question is attached.
/// Replace: {answer}, {tone}
pub const ANSWER_ONLY_FEEDBACK_PROMPT: &str = r#"You are giving natural, conversational feedback on a candidate's response.

Answer: {answer}

Consider:
1. Clarity and communication
2. Specificity and examples
3. Professionalism
4. Areas for improvement

Give feedback in 2-3 sentences that sound natural and conversational. {tone}"#;

/// Whole-session prompt.
/// Replace: {total_questions}, {average_length}, {transcript}
pub const SESSION_FEEDBACK_PROMPT: &str = r#"You are giving overall feedback at the end of an interview session.

Interview summary:
- Total questions answered: {total_questions}
- Average answer length: {average_length} characters

Individual responses:
{transcript}

Give overall feedback on the candidate's interview performance. Consider:
1. Overall communication skills
2. Consistency in responses
3. Areas of strength
4. Areas for improvement
5. Overall impression

Give feedback in 3-4 sentences that sound natural and conversational, as if you are wrapping up a real interview. Be encouraging but honest about areas for improvement."#;
