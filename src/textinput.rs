//! Single-line text entry used for the countdown duration.
//!
//! This is a deliberately small input: it inserts printable characters,
//! deletes backwards and forwards, and moves the cursor. It accepts any text;
//! validation belongs to whoever reads [`Model::value`].

use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthStr;

/// Text entry state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Text shown before the value.
    pub prompt: String,
    /// Style for the prompt.
    pub prompt_style: Style,
    /// Style for the entered text.
    pub text_style: Style,
    /// Text shown while the value is empty.
    pub placeholder: String,
    /// Style for the placeholder.
    pub placeholder_style: Style,
    /// Style for the character under the cursor.
    pub cursor_style: Style,
    /// Maximum number of characters; `0` means no limit.
    pub char_limit: usize,
    /// Minimum rendered width of the value area; `0` disables padding.
    pub width: usize,

    value: Vec<char>,
    pos: usize,
    focus: bool,
}

/// Creates an unfocused, empty input with a `"> "` prompt.
pub fn new() -> Model {
    Model {
        prompt: "> ".to_string(),
        prompt_style: Style::new(),
        text_style: Style::new(),
        placeholder: String::new(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        cursor_style: Style::new().reverse(true),
        char_limit: 0,
        width: 0,
        value: Vec::new(),
        pos: 0,
        focus: false,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Sets the placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the character limit.
    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.char_limit = limit;
        self
    }

    /// Sets the padded width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Replaces the value, truncating to the character limit, and moves the
    /// cursor to the end.
    pub fn set_value(&mut self, value: &str) {
        let mut chars: Vec<char> = value.chars().collect();
        if self.char_limit > 0 && chars.len() > self.char_limit {
            chars.truncate(self.char_limit);
        }
        self.value = chars;
        self.pos = self.value.len();
    }

    /// The current value.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Cursor position in characters.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Clears the value.
    pub fn reset(&mut self) {
        self.value.clear();
        self.pos = 0;
    }

    /// Inserts a character at the cursor unless the limit is reached.
    pub fn insert_char(&mut self, ch: char) {
        if self.char_limit > 0 && self.value.len() >= self.char_limit {
            return;
        }
        self.value.insert(self.pos, ch);
        self.pos += 1;
    }

    /// Deletes the character before the cursor.
    pub fn delete_backward(&mut self) {
        if self.pos > 0 {
            self.pos -= 1;
            self.value.remove(self.pos);
        }
    }

    /// Deletes the character under the cursor.
    pub fn delete_forward(&mut self) {
        if self.pos < self.value.len() {
            self.value.remove(self.pos);
        }
    }

    /// Handles an editing key. Returns `true` if the key was consumed.
    ///
    /// Keys are ignored while the input is blurred.
    pub fn update(&mut self, msg: &KeyMsg) -> bool {
        if !self.focus {
            return false;
        }
        let ctrl = msg.modifiers.contains(KeyModifiers::CONTROL);
        match msg.key {
            KeyCode::Char('a') if ctrl => self.pos = 0,
            KeyCode::Char('e') if ctrl => self.pos = self.value.len(),
            KeyCode::Char('u') if ctrl => {
                self.value = self.value.split_off(self.pos);
                self.pos = 0;
            }
            KeyCode::Char('k') if ctrl => self.value.truncate(self.pos),
            KeyCode::Char(_) if ctrl => return false,
            KeyCode::Char(ch) => self.insert_char(ch),
            KeyCode::Backspace => self.delete_backward(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Left => self.pos = self.pos.saturating_sub(1),
            KeyCode::Right => self.pos = (self.pos + 1).min(self.value.len()),
            KeyCode::Home => self.pos = 0,
            KeyCode::End => self.pos = self.value.len(),
            _ => return false,
        }
        true
    }

    /// Renders prompt, value (or placeholder) and, when focused, the cursor.
    pub fn view(&self) -> String {
        let prompt = self.prompt_style.render(&self.prompt);

        if self.value.is_empty() {
            let mut v = String::new();
            if self.focus {
                v.push_str(&self.cursor_style.render(" "));
            }
            v.push_str(&self.placeholder_style.render(&self.placeholder));
            let shown = usize::from(self.focus) + self.placeholder.width();
            v.push_str(&" ".repeat(self.width.saturating_sub(shown)));
            return format!("{}{}", prompt, v);
        }

        let before: String = self.value[..self.pos].iter().collect();
        let mut v = self.text_style.render(&before);
        let mut shown = before.width();

        if self.focus {
            let under = self.value.get(self.pos).copied().unwrap_or(' ');
            v.push_str(&self.cursor_style.render(&under.to_string()));
            shown += 1;
            if self.pos + 1 < self.value.len() {
                let after: String = self.value[self.pos + 1..].iter().collect();
                shown += after.width();
                v.push_str(&self.text_style.render(&after));
            }
        } else {
            let after: String = self.value[self.pos..].iter().collect();
            shown += after.width();
            v.push_str(&self.text_style.render(&after));
        }

        v.push_str(&" ".repeat(self.width.saturating_sub(shown)));
        format!("{}{}", prompt, v)
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn plain(s: &str) -> String {
        String::from_utf8(strip_ansi_escapes::strip(s)).unwrap_or_default()
    }

    #[test]
    fn test_new_defaults() {
        let input = new();
        assert_eq!(input.prompt, "> ");
        assert_eq!(input.value(), "");
        assert_eq!(input.position(), 0);
        assert!(!input.focused());
    }

    #[test]
    fn test_blurred_input_ignores_keys() {
        let mut input = new();
        assert!(!input.update(&key(KeyCode::Char('1'))));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_typing_and_editing() {
        let mut input = new();
        input.focus();
        for ch in "120".chars() {
            assert!(input.update(&key(KeyCode::Char(ch))));
        }
        assert_eq!(input.value(), "120");

        input.update(&key(KeyCode::Left));
        input.update(&key(KeyCode::Backspace));
        assert_eq!(input.value(), "10");
        assert_eq!(input.position(), 1);

        input.update(&key(KeyCode::Home));
        input.update(&key(KeyCode::Delete));
        assert_eq!(input.value(), "0");

        input.update(&key(KeyCode::End));
        input.update(&key(KeyCode::Char('5')));
        assert_eq!(input.value(), "05");
    }

    #[test]
    fn test_ctrl_u_and_ctrl_k() {
        let mut input = new();
        input.focus();
        input.set_value("12345");
        input.update(&key(KeyCode::Left));
        input.update(&key(KeyCode::Left));

        input.update(&KeyMsg {
            key: KeyCode::Char('k'),
            modifiers: KeyModifiers::CONTROL,
        });
        assert_eq!(input.value(), "123");

        input.update(&KeyMsg {
            key: KeyCode::Char('u'),
            modifiers: KeyModifiers::CONTROL,
        });
        assert_eq!(input.value(), "");
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn test_char_limit() {
        let mut input = new().with_char_limit(3);
        input.set_value("12345");
        assert_eq!(input.value(), "123");

        input.focus();
        input.update(&key(KeyCode::Char('9')));
        assert_eq!(input.value(), "123");
    }

    #[test]
    fn test_unhandled_keys_are_not_consumed() {
        let mut input = new();
        input.focus();
        assert!(!input.update(&key(KeyCode::Enter)));
        assert!(!input.update(&key(KeyCode::Tab)));
    }

    #[test]
    fn test_view_placeholder_and_value() {
        let mut input = new().with_placeholder("Enter duration in seconds");
        assert_eq!(plain(&input.view()), "> Enter duration in seconds");

        input.set_value("90");
        assert_eq!(plain(&input.view()), "> 90");

        input.focus();
        assert_eq!(plain(&input.view()), "> 90 ");
    }

    #[test]
    fn test_view_pads_to_width() {
        let mut input = new().with_width(6);
        input.set_value("42");
        assert_eq!(plain(&input.view()), "> 42    ");
    }
}
