//! Rendering for the countdown component.

use super::model::{Focus, Model};
use super::types::Status;
use crate::help::KeyMap as _;
use lipgloss_extras::prelude::*;

/// Styles for the countdown form.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Heading.
    pub title: Style,
    /// The `MM:SS` readout.
    pub clock: Style,
    /// The readout once the countdown has finished.
    pub clock_finished: Style,
    /// An enabled button.
    pub button: Style,
    /// A button whose action does nothing right now.
    pub button_disabled: Style,
    /// Marker in front of the focused section.
    pub focus_marker: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            title: Style::new().bold(true).foreground(Color::from("212")),
            clock: Style::new().bold(true).foreground(Color::from("255")),
            clock_finished: Style::new().bold(true).foreground(Color::from("203")),
            button: Style::new().foreground(Color::from("86")),
            button_disabled: Style::new().faint(true),
            focus_marker: Style::new().foreground(Color::from("212")),
        }
    }
}

impl Model {
    /// Renders the form: heading, entry, clock, buttons and help.
    pub fn view(&self) -> String {
        let mut lines = Vec::with_capacity(9);

        lines.push(self.styles.title.render(&self.title));
        lines.push(String::new());
        lines.push(format!(
            "{}{}",
            self.marker(Focus::Entry),
            self.input.view()
        ));
        lines.push(String::new());

        let clock_style = if self.is_finished() {
            &self.styles.clock_finished
        } else {
            &self.styles.clock
        };
        lines.push(format!("    {}", clock_style.render(&self.clock())));
        lines.push(String::new());
        lines.push(format!(
            "{}{}",
            self.marker(Focus::Controls),
            self.buttons_view()
        ));

        if self.show_help {
            lines.push(String::new());
            lines.push(self.help.view(&self.key_map));
        }

        lines.join("\n")
    }

    fn marker(&self, area: Focus) -> String {
        if self.focused && self.focus == area {
            self.styles.focus_marker.render("▸ ")
        } else {
            "  ".to_string()
        }
    }

    fn buttons_view(&self) -> String {
        let c = &self.controller;
        let buttons = [
            (self.start_label(), c.can_start()),
            ("Pause", c.status() == Status::Running),
            ("Reset", true),
        ];

        buttons
            .iter()
            .map(|(label, enabled)| {
                let text = format!("[ {} ]", label);
                if *enabled {
                    self.styles.button.render(&text)
                } else {
                    self.styles.button_disabled.render(&text)
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    }

    /// Bindings shown in the help line, for callers that render help
    /// themselves.
    pub fn help_view(&self) -> String {
        self.help.short_help_view(self.key_map.short_help())
    }
}
