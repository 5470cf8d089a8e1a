//! Key bindings for the countdown component.

use crate::help;
use crate::key::Binding;
use crossterm::event::KeyCode;

/// Keys the countdown reacts to.
///
/// `set` applies while the duration entry has focus; `start`, `pause` and
/// `reset` apply while the controls have focus. `switch_focus` works in both.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Apply the entered duration.
    pub set: Binding,
    /// Start or resume.
    pub start: Binding,
    /// Pause.
    pub pause: Binding,
    /// Reset to the full duration.
    pub reset: Binding,
    /// Move focus between the entry and the controls.
    pub switch_focus: Binding,
}

/// The default bindings.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        set: Binding::new(vec![KeyCode::Enter]).with_help("enter", "set"),
        start: Binding::new(vec![KeyCode::Char('s')]).with_help("s", "start"),
        pause: Binding::new(vec![KeyCode::Char('p')]).with_help("p", "pause"),
        reset: Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reset"),
        switch_focus: Binding::new(vec![KeyCode::Tab, KeyCode::BackTab])
            .with_help("tab", "controls"),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl help::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.set,
            &self.start,
            &self.pause,
            &self.reset,
            &self.switch_focus,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.set, &self.switch_focus],
            vec![&self.start, &self.pause, &self.reset],
        ]
    }
}
