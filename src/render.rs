use crate::engine::{Message, Speaker};

const ANSWER_PROMPT: &str = "Type your answer...";
const ELABORATION_PROMPT: &str =
    "Please elaborate your previous answer (give examples, steps, tools)...";

pub fn format_message(message: &Message) -> String {
    let avatar = match message.speaker {
        Speaker::Ai => "🤖",
        Speaker::User => "👤",
    };

    let mut lines = message.content.lines();
    let mut rendered = format!("{avatar} {}", lines.next().unwrap_or_default());
    for line in lines {
        rendered.push_str("\n   ");
        rendered.push_str(line);
    }
    rendered
}

pub fn input_prompt(awaiting_elaboration: bool) -> &'static str {
    if awaiting_elaboration {
        ELABORATION_PROMPT
    } else {
        ANSWER_PROMPT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn indents_continuation_lines() {
        let message = Message {
            id: 4,
            speaker: Speaker::Ai,
            content: "Key points identified in your answer: git.\n\nFeedback: Good depth.".to_owned(),
        };

        assert_eq!(
            format_message(&message),
            "🤖 Key points identified in your answer: git.\n   \n   Feedback: Good depth."
        );
    }

    #[test]
    fn user_messages_get_their_own_avatar() {
        let message = Message {
            id: 5,
            speaker: Speaker::User,
            content: "yes it works".to_owned(),
        };

        assert_eq!(format_message(&message), "👤 yes it works");
    }

    #[test]
    fn prompt_follows_elaboration_state() {
        assert_eq!(input_prompt(false), "Type your answer...");
        assert!(input_prompt(true).starts_with("Please elaborate"));
    }
}
