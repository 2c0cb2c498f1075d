use tokio::task::JoinHandle;

use crate::config::Config;
use crate::conversation::Conversation;
use crate::gemini::{GatewayError, GeminiClient};

/// Shown in place of a reply when the gateway call fails, whatever the cause.
pub const FALLBACK_REPLY: &str = "Oops! My curiosity short-circuited. Can you try again?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Tour,
    Features,
    Chat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

pub struct App {
    // Core state
    pub should_quit: bool,
    pub screen: Screen,
    pub input_mode: InputMode,

    // Tour state
    pub tour_scroll: u16,
    pub tour_height: u16,
    pub total_tour_lines: u16,

    // Chat state
    pub chat_input: String,
    pub chat_cursor: usize, // char position in chat_input
    pub conversation: Conversation,
    pub chat_loading: bool,
    pub chat_scroll: u16,
    pub chat_height: u16, // inner chat area, for scroll calculations
    pub chat_width: u16,  // inner chat area, for wrap calculations
    pub chat_task: Option<JoinHandle<Result<String, GatewayError>>>,

    // Animation state
    pub animation_frame: u8, // cycles 0-2: mascot bob, thinking ellipsis

    pub gemini: GeminiClient,
}

impl App {
    pub fn new() -> Self {
        let config = Config::load().unwrap_or_else(|_| Config::new());
        let gemini = GeminiClient::new(config.resolve_api_key());

        Self {
            should_quit: false,
            screen: Screen::Tour,
            input_mode: InputMode::Normal,

            tour_scroll: 0,
            tour_height: 0,
            total_tour_lines: 0,

            chat_input: String::new(),
            chat_cursor: 0,
            conversation: Conversation::new(),
            chat_loading: false,
            chat_scroll: 0,
            chat_height: 0,
            chat_width: 0,
            chat_task: None,

            animation_frame: 0,

            gemini,
        }
    }

    /// First half of a submit. Rejects whitespace-only input and re-entry
    /// while a call is in flight; otherwise records the user message, marks
    /// the call in flight, and returns the utterance for dispatch. The
    /// gateway itself is never invoked for rejected input.
    pub fn begin_submit(&mut self) -> Option<String> {
        let text = self.chat_input.trim();
        if text.is_empty() || self.chat_loading {
            return None;
        }

        let text = text.to_string();
        self.conversation.push_user(text.clone());
        self.chat_input.clear();
        self.chat_cursor = 0;
        self.chat_loading = true;
        self.scroll_chat_to_bottom();
        Some(text)
    }

    /// Second half of a submit: exactly one assistant message per outcome,
    /// and the in-flight flag drops on every path.
    pub fn finish_submit(&mut self, result: Result<String, GatewayError>) {
        match result {
            Ok(reply) => self.conversation.push_assistant(reply),
            Err(err) => {
                tracing::warn!(error = %err, "gateway call failed");
                self.conversation.push_assistant(FALLBACK_REPLY);
            }
        }
        self.chat_loading = false;
        self.scroll_chat_to_bottom();
    }

    // Tour scrolling
    pub fn tour_scroll_down(&mut self) {
        if self.tour_scroll < self.total_tour_lines.saturating_sub(self.tour_height) {
            self.tour_scroll = self.tour_scroll.saturating_add(1);
        }
    }

    pub fn tour_scroll_up(&mut self) {
        self.tour_scroll = self.tour_scroll.saturating_sub(1);
    }

    pub fn tour_half_page_down(&mut self) {
        let half_page = self.tour_height / 2;
        let max_scroll = self.total_tour_lines.saturating_sub(self.tour_height);
        self.tour_scroll = (self.tour_scroll + half_page).min(max_scroll);
    }

    pub fn tour_half_page_up(&mut self) {
        let half_page = self.tour_height / 2;
        self.tour_scroll = self.tour_scroll.saturating_sub(half_page);
    }

    /// Tick animation frame (mascot bob, thinking ellipsis)
    pub fn tick_animation(&mut self) {
        self.animation_frame = (self.animation_frame + 1) % 3;
    }

    /// Scroll chat so the newest message (or "Thinking...") is visible.
    pub fn scroll_chat_to_bottom(&mut self) {
        // Use actual chat width for wrap calculation, default to 50 if not set
        let wrap_width = if self.chat_width > 0 {
            self.chat_width as usize
        } else {
            50
        };

        let mut total_lines: u16 = 0;

        for msg in self.conversation.messages() {
            total_lines += 1; // Role line ("You:" or "GOGO:")
            for line in msg.text.lines() {
                // Character count, not byte length, for proper UTF-8 handling
                let char_count = line.chars().count();
                if char_count == 0 {
                    total_lines += 1;
                } else {
                    total_lines += ((char_count / wrap_width) + 1) as u16;
                }
            }
            total_lines += 1; // Blank line after message
        }

        if self.chat_loading {
            total_lines += 2; // "GOGO:" + "Thinking..."
        }

        let visible_height = if self.chat_height > 0 {
            self.chat_height
        } else {
            20
        };

        if total_lines > visible_height {
            self.chat_scroll = total_lines.saturating_sub(visible_height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::{ChatRole, GREETING};
    use anyhow::anyhow;

    fn gateway_error() -> GatewayError {
        GatewayError::from(anyhow!("boom"))
    }

    #[test]
    fn test_submit_appends_user_then_assistant() {
        let mut app = App::new();
        app.chat_input = "hello".to_string();

        let sent = app.begin_submit().expect("submit should be accepted");
        assert_eq!(sent, "hello");
        assert!(app.chat_loading);
        assert_eq!(app.conversation.len(), 2); // seed + user
        assert!(app.chat_input.is_empty());

        app.finish_submit(Ok("Ooo, hii! 👻".to_string()));
        assert!(!app.chat_loading);
        let messages = app.conversation.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].text, GREETING);
        assert_eq!(messages[1].role, ChatRole::User);
        assert_eq!(messages[1].text, "hello");
        assert_eq!(messages[2].role, ChatRole::Assistant);
        assert_eq!(messages[2].text, "Ooo, hii! 👻");
    }

    #[test]
    fn test_whitespace_input_is_rejected_without_side_effects() {
        let mut app = App::new();
        app.chat_input = "   \t ".to_string();

        assert!(app.begin_submit().is_none());
        assert!(!app.chat_loading);
        assert_eq!(app.conversation.len(), 1); // seed only
    }

    #[test]
    fn test_input_is_trimmed_before_recording() {
        let mut app = App::new();
        app.chat_input = "  hello there  ".to_string();

        let sent = app.begin_submit().unwrap();
        assert_eq!(sent, "hello there");
        assert_eq!(app.conversation.messages()[1].text, "hello there");
    }

    #[test]
    fn test_resubmit_while_in_flight_is_a_noop() {
        let mut app = App::new();
        app.chat_input = "first".to_string();
        assert!(app.begin_submit().is_some());

        app.chat_input = "second".to_string();
        assert!(app.begin_submit().is_none());
        assert_eq!(app.conversation.len(), 2); // seed + first user only

        app.finish_submit(Ok("reply".to_string()));
        assert!(app.begin_submit().is_some()); // re-enabled after resolution
    }

    #[test]
    fn test_failure_appends_fallback_and_clears_in_flight() {
        let mut app = App::new();
        app.chat_input = "hello?".to_string();
        app.begin_submit();

        app.finish_submit(Err(gateway_error()));
        assert!(!app.chat_loading);
        let last = app.conversation.messages().last().unwrap();
        assert_eq!(last.role, ChatRole::Assistant);
        assert_eq!(last.text, FALLBACK_REPLY);
    }

    #[test]
    fn test_message_order_over_many_submits() {
        let mut app = App::new();
        for i in 0..4 {
            app.chat_input = format!("question {i}");
            app.begin_submit().unwrap();
            app.finish_submit(Ok(format!("answer {i}")));
        }

        let messages = app.conversation.messages();
        assert_eq!(messages.len(), 9); // seed + 4 pairs
        assert_eq!(messages[0].text, GREETING);
        for i in 0..4 {
            assert_eq!(messages[1 + i * 2].role, ChatRole::User);
            assert_eq!(messages[1 + i * 2].text, format!("question {i}"));
            assert_eq!(messages[2 + i * 2].role, ChatRole::Assistant);
            assert_eq!(messages[2 + i * 2].text, format!("answer {i}"));
        }
    }
}
