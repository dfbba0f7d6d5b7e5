//! Keyword classifier for canned replies
//!
//! Maps the latest user message onto one of seven canned responses by
//! case-insensitive substring matching against an ordered list of keyword
//! groups. First matching group wins; a message matching no group gets the
//! generic clarification prompt.

/// Canned reply for task/organization questions
pub const TASK_BREAKDOWN_REPLY: &str = "To help organize your tasks, try breaking them down into smaller steps. I recommend starting with just 1-3 tasks that are most important today.";

/// Canned reply for focus/concentration questions
pub const FOCUS_REPLY: &str = "For better focus, try the Pomodoro technique: 25 minutes of focused work followed by a 5-minute break. Also, minimize distractions by silencing notifications.";

/// Canned reply for deadline/procrastination questions
pub const DEADLINE_REPLY: &str = "To manage deadlines, try setting earlier personal deadlines with small rewards. Breaking the project into smaller milestones can also help prevent procrastination.";

/// Canned reply for overwhelm/stress questions
pub const OVERWHELM_REPLY: &str = "When feeling overwhelmed, pause and take a few deep breaths. Try writing everything down that's on your mind, then prioritize only what needs attention today.";

/// Canned reply for memory questions
pub const MEMORY_REPLY: &str = "To help with memory, try using external systems like calendar alerts, sticky notes, or apps with reminders. Writing things down immediately is also helpful.";

/// Canned reply for greetings
pub const GREETING_REPLY: &str = "Hello! I'm your AI assistant. I can help you with organization, focus, task management, and more. What would you like assistance with today?";

/// Canned reply when no keyword group matches
pub const CLARIFICATION_REPLY: &str = "I understand you need help. Could you share more specific details about what you're looking for assistance with? I can help with organization, focus, breaking down tasks, and managing ADHD challenges.";

/// Keyword groups in priority order. First group with any substring hit
/// determines the reply.
const KEYWORD_GROUPS: &[(&[&str], &str)] = &[
    (&["task", "todo", "to-do", "organize"], TASK_BREAKDOWN_REPLY),
    (&["focus", "concentrate", "distract"], FOCUS_REPLY),
    (&["deadline", "late", "procrastinate"], DEADLINE_REPLY),
    (&["overwhelm", "stress", "anxious"], OVERWHELM_REPLY),
    (&["forgot", "remember", "memory"], MEMORY_REPLY),
    (&["hello", "hi", "hey"], GREETING_REPLY),
];

/// Pick a canned reply for a user message.
pub fn classify(message: &str) -> &'static str {
    let message = message.to_lowercase();

    for &(keywords, reply) in KEYWORD_GROUPS {
        if keywords.iter().any(|keyword| message.contains(keyword)) {
            return reply;
        }
    }

    CLARIFICATION_REPLY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_group_matches() {
        assert_eq!(classify("help me with my tasks"), TASK_BREAKDOWN_REPLY);
        assert_eq!(classify("I can't focus at all"), FOCUS_REPLY);
        assert_eq!(classify("my deadline is tomorrow"), DEADLINE_REPLY);
        assert_eq!(classify("I feel overwhelmed"), OVERWHELM_REPLY);
        assert_eq!(classify("I forgot the meeting"), MEMORY_REPLY);
        assert_eq!(classify("hello there"), GREETING_REPLY);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(classify("TASK"), TASK_BREAKDOWN_REPLY);
        assert_eq!(classify("My DEADLINE slipped"), DEADLINE_REPLY);
    }

    #[test]
    fn test_matches_substring_at_any_position() {
        assert_eq!(classify("multitasking is hard"), TASK_BREAKDOWN_REPLY);
        assert_eq!(classify("so much to-do today"), TASK_BREAKDOWN_REPLY);
    }

    #[test]
    fn test_group_priority_is_fixed() {
        // Matches both the task group and the greeting group; the task
        // group comes first.
        assert_eq!(classify("hi, help me with a task"), TASK_BREAKDOWN_REPLY);
        // Matches both focus and overwhelm; focus comes first.
        assert_eq!(
            classify("stressed and can't concentrate"),
            FOCUS_REPLY
        );
    }

    #[test]
    fn test_no_match_returns_clarification() {
        assert_eq!(classify("what's the weather"), CLARIFICATION_REPLY);
        assert_eq!(classify(""), CLARIFICATION_REPLY);
    }
}
