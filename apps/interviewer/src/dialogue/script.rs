// Everything the interviewer says out loud, in dialogue order.
// Lines with placeholders are built by the functions below.

use crate::models::Role;

pub fn greeting(interviewer: &str) -> String {
    format!(
        "Hello! I'm {interviewer}, and I will be conducting your interview today. \
        I'm excited to meet you and learn more about your background and experience!"
    )
}

pub const ASK_NAME: &str = "What is your name?";

pub fn welcome_named(name: &str) -> String {
    format!("Pleased to meet you, {name}!")
}

pub const WELCOME_ANONYMOUS: &str = "Pleased to meet you!";

pub const ASK_MOOD: &str = "How are you doing today?";

pub const MOOD_POSITIVE: &str = "That's wonderful! I'm glad you're doing well. \
    I'm here to make this interview experience comfortable and professional for you.";

pub const MOOD_NEUTRAL: &str =
    "I understand! Let's make this interview experience comfortable and professional for you.";

pub const PROCEED_TO_PREPARATION: &str = "Now, let's proceed with your interview preparation.";

pub fn role_intro(addressee: &str) -> String {
    format!(
        "Now {addressee}, I'd like to understand what role you're interested in. \
        I have several positions available:"
    )
}

pub fn role_option(ordinal: usize, role: Role) -> String {
    format!("{ordinal}. {}", role.display_name())
}

pub const ASK_ROLE: &str = "Which role are you most interested in? \
    You can say the number or tell me the role name directly.";

pub fn role_selected(role: Role) -> String {
    format!(
        "Excellent! I'll be conducting your interview for the {} position.",
        role.display_name()
    )
}

pub fn role_defaulted(role: Role) -> String {
    format!(
        "I'll proceed with the {} role, which is a fantastic opportunity!",
        role.display_name()
    )
}

pub const OFFER_RESUME: &str = "Do you have a resume with you today that you'd like me to review? \
    If yes, please place it in the current directory and say 'yes'. Otherwise, say 'no'.";

pub fn resume_found(file_name: &str) -> String {
    format!("Perfect! I found {file_name}. Let me take a moment to review your background.")
}

pub const RESUME_MISSING: &str =
    "I couldn't find any PDF files in the current directory. We'll proceed without resume review.";

pub const RESUME_DECLINED: &str =
    "No problem at all! We'll proceed with the interview without resume review.";

pub const RESUME_UNREADABLE: &str = "I had a bit of trouble reading your resume, \
    but that's perfectly fine. We can proceed with the interview.";

pub const RESUME_ISSUE: &str = "I encountered a small issue reading your resume, \
    but that's okay. We can proceed with the interview.";

pub fn suggest_role(role: Role) -> String {
    format!(
        "Based on your resume, I think the {} role would be an excellent fit for your background. \
        Would you like to proceed with this role for our interview?",
        role.display_name()
    )
}

pub fn suggestion_accepted(role: Role) -> String {
    format!("Wonderful! I'll proceed with the {} role questions.", role.display_name())
}

pub const SUGGESTION_DECLINED: &str = "No problem! I'll use your previously selected role then.";

pub const PROCEED_TO_INTERVIEW: &str = "Now, let's proceed with the interview.";

pub fn question_count(count: usize, role: Role) -> String {
    format!(
        "Perfect! I'll be asking you {count} questions for the {} position.",
        role.display_name()
    )
}

pub const BEGIN_INTERVIEW: &str = "Let's begin the interview. Please speak clearly and take your \
    time with your answers. I'm here to conduct a thorough and professional interview.";

pub const FIRST_QUESTION: &str = "Let's start with our first question.";
pub const NEXT_QUESTION: &str = "Moving on to our next question.";
pub const FINAL_QUESTION: &str = "And now for our final question.";

/// Transition spoken before question `number` (1-based) of `total`.
pub fn question_transition(number: usize, total: usize) -> &'static str {
    if number == 1 {
        FIRST_QUESTION
    } else if number == total {
        FINAL_QUESTION
    } else {
        NEXT_QUESTION
    }
}

pub const INVITE_ANSWER: &str = "Please go ahead and share your thoughts.";

pub const REPEAT_PLEASE: &str = "I didn't catch that clearly. Could you please repeat?";

pub const BEFORE_FEEDBACK: &str =
    "Thank you for that detailed response. Let me provide you with some feedback.";

pub const CONTINUE_INTERVIEW: &str = "Thank you. Let's continue with our interview.";

pub const ANSWER_MISSED: &str =
    "I didn't catch your response clearly. Could you please repeat your answer?";

pub const BEFORE_FEEDBACK_RETRY: &str = "Thank you for clarifying. Let me provide some feedback.";

pub const SKIP_QUESTION: &str = "I understand. Let's move forward with the next question.";

pub const INTERVIEW_COMPLETE: &str = "Excellent! We've completed our interview. Let me take a moment \
    to review our conversation and provide you with a comprehensive evaluation.";

pub const REPORT_SAVED: &str = "Your interview report has been generated and saved.";

pub const REPORT_FAILED: &str = "I wasn't able to save your interview report this time.";

pub const INVITE_QUESTIONS: &str = "Thank you for participating in this interview with me today. \
    I hope this experience was helpful and professional for you. \
    Is there anything else you'd like to discuss or any questions you have for me?";

pub const CLOSING_AFTER_QUESTIONS: &str = "I appreciate your questions and feedback. \
    Thank you again for your time today. I wish you the very best in your career endeavors!";

pub const CLOSING: &str =
    "Thank you again for your time today. I wish you the very best in your career endeavors!";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_transitions() {
        assert_eq!(question_transition(1, 6), FIRST_QUESTION);
        assert_eq!(question_transition(3, 6), NEXT_QUESTION);
        assert_eq!(question_transition(6, 6), FINAL_QUESTION);
        // A single question is announced as the first.
        assert_eq!(question_transition(1, 1), FIRST_QUESTION);
    }

    #[test]
    fn test_role_lines_use_display_names() {
        assert_eq!(role_option(4, Role::UiUxDesigner), "4. UI/UX Designer");
        assert!(role_defaulted(Role::Sde).contains("Software Development Engineer"));
    }
}
