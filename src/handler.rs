use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::{App, InputMode, Screen};
use crate::tui::AppEvent;

/// Convert a character index to a byte index for UTF-8 safe string operations
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse),
        AppEvent::Resize(_, _) => {}
        AppEvent::Tick => {
            app.tick_animation();
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Works in any mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Editing => handle_chat_editing(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    // Screen switching works from any screen in normal mode
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('1') => {
            app.screen = Screen::Tour;
            return;
        }
        KeyCode::Char('2') => {
            app.screen = Screen::Features;
            return;
        }
        KeyCode::Char('3') | KeyCode::Char('t') => {
            open_chat(app);
            return;
        }
        KeyCode::Tab => {
            app.screen = match app.screen {
                Screen::Tour => Screen::Features,
                Screen::Features => Screen::Chat,
                Screen::Chat => Screen::Tour,
            };
            return;
        }
        _ => {}
    }

    match app.screen {
        Screen::Tour => handle_tour_normal(app, key),
        Screen::Features => handle_features_normal(app, key),
        Screen::Chat => handle_chat_normal(app, key),
    }
}

fn open_chat(app: &mut App) {
    app.screen = Screen::Chat;
    app.input_mode = InputMode::Editing;
    app.chat_cursor = app.chat_input.chars().count();
}

fn handle_tour_normal(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.tour_scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.tour_scroll_up(),
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.tour_half_page_down();
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.tour_half_page_up();
        }
        KeyCode::Char('g') => app.tour_scroll = 0,
        KeyCode::Char('G') => {
            app.tour_scroll = app.total_tour_lines.saturating_sub(app.tour_height);
        }
        KeyCode::Enter => open_chat(app),
        _ => {}
    }
}

fn handle_features_normal(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        app.screen = Screen::Tour;
    }
}

fn handle_chat_normal(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.screen = Screen::Tour;
        }
        KeyCode::Char('i') | KeyCode::Char('/') | KeyCode::Enter => {
            app.input_mode = InputMode::Editing;
            app.chat_cursor = app.chat_input.chars().count();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.chat_scroll = app.chat_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.chat_scroll = app.chat_scroll.saturating_sub(1);
        }
        KeyCode::Char('g') => app.chat_scroll = 0,
        KeyCode::Char('G') => app.scroll_chat_to_bottom(),
        _ => {}
    }
}

fn handle_chat_editing(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => {
            // begin_submit rejects blank input and in-flight re-entry, so a
            // task is only ever spawned for an accepted utterance.
            if let Some(text) = app.begin_submit() {
                let client = app.gemini.clone();
                app.chat_task = Some(tokio::spawn(async move {
                    client.generate(&text).await
                }));
            }
        }
        KeyCode::Backspace => {
            if app.chat_cursor > 0 {
                app.chat_cursor -= 1;
                let byte_pos = char_to_byte_index(&app.chat_input, app.chat_cursor);
                app.chat_input.remove(byte_pos);
            }
        }
        KeyCode::Delete => {
            let char_count = app.chat_input.chars().count();
            if app.chat_cursor < char_count {
                let byte_pos = char_to_byte_index(&app.chat_input, app.chat_cursor);
                app.chat_input.remove(byte_pos);
            }
        }
        KeyCode::Left => {
            app.chat_cursor = app.chat_cursor.saturating_sub(1);
        }
        KeyCode::Right => {
            let char_count = app.chat_input.chars().count();
            app.chat_cursor = (app.chat_cursor + 1).min(char_count);
        }
        KeyCode::Home => {
            app.chat_cursor = 0;
        }
        KeyCode::End => {
            app.chat_cursor = app.chat_input.chars().count();
        }
        KeyCode::Char(c) => {
            let byte_pos = char_to_byte_index(&app.chat_input, app.chat_cursor);
            app.chat_input.insert(byte_pos, c);
            app.chat_cursor += 1;
        }
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown => match app.screen {
            Screen::Tour => {
                app.tour_scroll_down();
                app.tour_scroll_down();
                app.tour_scroll_down();
            }
            Screen::Chat => {
                app.chat_scroll = app.chat_scroll.saturating_add(3);
            }
            Screen::Features => {}
        },
        MouseEventKind::ScrollUp => match app.screen {
            Screen::Tour => {
                app.tour_scroll_up();
                app.tour_scroll_up();
                app.tour_scroll_up();
            }
            Screen::Chat => {
                app.chat_scroll = app.chat_scroll.saturating_sub(3);
            }
            Screen::Features => {}
        },
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_to_byte_index_handles_multibyte() {
        let s = "a👻b";
        assert_eq!(char_to_byte_index(s, 0), 0);
        assert_eq!(char_to_byte_index(s, 1), 1);
        assert_eq!(char_to_byte_index(s, 2), 5);
        assert_eq!(char_to_byte_index(s, 3), 6);
        assert_eq!(char_to_byte_index(s, 99), 6);
    }

    #[test]
    fn test_enter_on_blank_input_spawns_no_task() {
        let mut app = App::new();
        open_chat(&mut app);
        app.chat_input = "  ".to_string();

        handle_chat_editing(&mut app, KeyEvent::from(KeyCode::Enter));
        assert!(app.chat_task.is_none());
        assert!(!app.chat_loading);
    }
}
