use serde::{Deserialize, Serialize};

/// Greeting GOGO opens every session with.
pub const GREETING: &str =
    "Hii! I'm GOGO. Ready to explore something interesting together? Ask me anything!";

/// The role of a chat message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single message in the chat. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// Append-only log of one chat session. Lives for the lifetime of the
/// process and is only ever touched from the UI event loop, so there is
/// no locking and no eviction. Insertion order is the only ordering.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Start a fresh session, seeded with GOGO's greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                role: ChatRole::Assistant,
                text: GREETING.to_string(),
            }],
        }
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            role: ChatRole::User,
            text: text.into(),
        });
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            text: text.into(),
        });
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_seeded_with_greeting() {
        let convo = Conversation::new();
        assert_eq!(convo.len(), 1);
        assert_eq!(convo.messages()[0].role, ChatRole::Assistant);
        assert_eq!(convo.messages()[0].text, GREETING);
    }

    #[test]
    fn test_appends_preserve_insertion_order() {
        let mut convo = Conversation::new();
        convo.push_user("hello");
        convo.push_assistant("hi there 👻");
        convo.push_user("what's new?");

        let roles: Vec<ChatRole> = convo.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                ChatRole::Assistant,
                ChatRole::User,
                ChatRole::Assistant,
                ChatRole::User,
            ]
        );
        assert_eq!(convo.messages()[1].text, "hello");
        assert_eq!(convo.messages()[3].text, "what's new?");
    }
}
