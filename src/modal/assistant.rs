// CLASSIFICATION: COMMUNITY
// Filename: assistant.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-13

//! Canned-answer chat bot.

use crate::content::QaPair;

pub const GREETING: &str = "Hello! I am your AI Assistant. Ask me anything about this portfolio!";
pub const FALLBACK: &str = "I don't have an answer for that. Try asking something else!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Ai,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub message: String,
}

/// First canned answer whose question occurs in `question`, ignoring case.
pub fn answer<'a>(pairs: &'a [QaPair], question: &str) -> &'a str {
    let asked = question.to_lowercase();
    pairs
        .iter()
        .find(|p| asked.contains(&p.question.to_lowercase()))
        .map(|p| p.answer.as_str())
        .unwrap_or(FALLBACK)
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    pub input: String,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                sender: Sender::Ai,
                message: GREETING.to_string(),
            }],
            input: String::new(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Submit the pending input. Blank input is ignored and returns `None`.
    pub fn submit(&mut self, pairs: &[QaPair]) -> Option<&str> {
        if self.input.trim().is_empty() {
            return None;
        }
        let question = std::mem::take(&mut self.input);
        let reply = answer(pairs, &question).to_string();
        self.messages.push(ChatMessage {
            sender: Sender::User,
            message: question,
        });
        self.messages.push(ChatMessage {
            sender: Sender::Ai,
            message: reply,
        });
        self.messages.last().map(|m| m.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs() -> Vec<QaPair> {
        vec![
            QaPair {
                question: "Skills".into(),
                answer: "Rust".into(),
            },
            QaPair {
                question: "skills list".into(),
                answer: "never reached".into(),
            },
        ]
    }

    #[test]
    fn first_substring_match_answers() {
        assert_eq!(answer(&pairs(), "What SKILLS list do you have?"), "Rust");
        assert_eq!(answer(&pairs(), "favourite colour?"), FALLBACK);
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut chat = ChatSession::new();
        chat.input = "   ".into();
        assert_eq!(chat.submit(&pairs()), None);
        assert_eq!(chat.messages().len(), 1);
        chat.input = "skills?".into();
        assert_eq!(chat.submit(&pairs()), Some("Rust"));
        assert_eq!(chat.messages()[1].sender, Sender::User);
        assert!(chat.input.is_empty());
    }
}
