//! The countdown component: controller, duration entry, keys and help.

use super::controller::{Controller, Tick, TickToken};
use super::keymap::{default_key_map, KeyMap};
use super::types::{Command, ControlMsg, FinishedMsg, Status, TickMsg};
use super::view::Styles;
use crate::help;
use crate::textinput;
use crate::Component;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use tracing::{debug, trace};

// Instance ids keep messages from reaching the wrong countdown.
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Default time between ticks.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Which part of the form receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The duration entry.
    Entry,
    /// The start/pause/reset controls.
    Controls,
}

/// Countdown timer component.
///
/// The user types a number of seconds into the entry and presses `enter` to
/// set it, then `tab`s over to the controls to start, pause and reset. The
/// clock reads `MM:SS`. Each tick is scheduled as a bubbletea command one
/// `interval` after the previous one.
///
/// ```rust
/// use bubbletea_countdown::countdown;
/// use std::time::Duration;
///
/// let timer = countdown::new()
///     .with_duration(90)
///     .with_interval(Duration::from_millis(500));
/// assert_eq!(timer.remaining(), 90);
/// assert_eq!(timer.clock(), "01:30");
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Heading shown above the form.
    pub title: String,
    /// Time between ticks. Each tick takes one second off the clock.
    pub interval: Duration,
    /// Key bindings.
    pub key_map: KeyMap,
    /// Help line renderer.
    pub help: help::Model,
    /// Whether the help line is rendered.
    pub show_help: bool,
    /// Visual styles.
    pub styles: Styles,

    pub(super) input: textinput::Model,
    pub(super) controller: Controller,
    pub(super) focus: Focus,
    pub(super) focused: bool,
    id: i64,
}

/// Creates a focused countdown with nothing set.
pub fn new() -> Model {
    let mut input = textinput::new()
        .with_placeholder("Enter duration in seconds")
        .with_char_limit(12);
    input.focus();

    let mut m = Model {
        title: "Custom Countdown Timer".to_string(),
        interval: DEFAULT_INTERVAL,
        key_map: default_key_map(),
        help: help::Model::new(),
        show_help: true,
        styles: Styles::default(),
        input,
        controller: Controller::new(),
        focus: Focus::Entry,
        focused: true,
        id: next_id(),
    };
    m.sync_bindings();
    m
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Sets the heading.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the tick interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the entry placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.input.placeholder = placeholder.into();
        self
    }

    /// Presets the duration as if the user had entered and set it.
    /// Zero is ignored.
    pub fn with_duration(mut self, secs: u64) -> Self {
        if self.controller.set_seconds(secs) {
            self.input.set_value(&secs.to_string());
            self.sync_bindings();
        }
        self
    }

    /// Sets the styles.
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Shows or hides the help line.
    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    /// This instance's id.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The underlying state machine.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Seconds left.
    pub fn remaining(&self) -> u64 {
        self.controller.remaining()
    }

    /// Current status.
    pub fn status(&self) -> Status {
        self.controller.status()
    }

    /// True while ticking.
    pub fn is_running(&self) -> bool {
        self.controller.is_running()
    }

    /// True once the countdown has reached zero.
    pub fn is_finished(&self) -> bool {
        self.controller.is_finished()
    }

    /// Remaining time as `MM:SS`.
    pub fn clock(&self) -> String {
        self.controller.clock()
    }

    /// Text currently in the duration entry.
    pub fn entry(&self) -> String {
        self.input.value()
    }

    /// Which part of the form has focus.
    pub fn focus_area(&self) -> Focus {
        self.focus
    }

    /// Label for the start control: `Resume` while paused.
    pub fn start_label(&self) -> &'static str {
        if self.status() == Status::Paused {
            "Resume"
        } else {
            "Start"
        }
    }

    /// Command that sets the duration from `input`.
    pub fn set(&self, input: impl Into<String>) -> Cmd {
        self.control(Command::Set(input.into()))
    }

    /// Command that starts or resumes.
    pub fn start(&self) -> Cmd {
        self.control(Command::Start)
    }

    /// Command that pauses.
    pub fn pause(&self) -> Cmd {
        self.control(Command::Pause)
    }

    /// Command that resets.
    pub fn reset(&self) -> Cmd {
        self.control(Command::Reset)
    }

    fn control(&self, command: Command) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(ControlMsg {
                id,
                command: command.clone(),
            }) as Msg
        })
    }

    fn tick_cmd(&self, token: TickToken) -> Cmd {
        let id = self.id;
        let tag = token.generation();
        bubbletea_tick(self.interval, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    fn finished_cmd(&self) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(FinishedMsg { id }) as Msg
        })
    }

    /// Applies a command right away.
    ///
    /// Returns the first tick when a countdown was started. Commands that do
    /// not apply in the current state change nothing.
    pub fn apply(&mut self, command: Command) -> Option<Cmd> {
        let cmd = match command {
            Command::Set(input) => {
                if self.controller.set(&input) {
                    debug!(id = self.id, duration = self.remaining(), "countdown set");
                }
                None
            }
            Command::Start => self.controller.start().map(|token| {
                debug!(id = self.id, remaining = self.remaining(), "countdown started");
                self.tick_cmd(token)
            }),
            Command::Pause => {
                if self.controller.pause() {
                    debug!(id = self.id, remaining = self.remaining(), "countdown paused");
                }
                None
            }
            Command::Reset => {
                self.controller.reset();
                debug!(id = self.id, remaining = self.remaining(), "countdown reset");
                None
            }
        };
        self.sync_bindings();
        cmd
    }

    /// Moves focus between the entry and the controls.
    pub fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Entry => {
                self.input.blur();
                Focus::Controls
            }
            Focus::Controls => {
                self.input.focus();
                Focus::Entry
            }
        };
        self.sync_bindings();
    }

    /// Handles key presses, control messages and ticks for this instance.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(tick) = msg.downcast_ref::<TickMsg>() {
            if tick.id != self.id {
                return None;
            }
            let cmd = match self.controller.tick(TickToken(tick.tag)) {
                Tick::Stale => None,
                Tick::Continue(token) => {
                    trace!(id = self.id, remaining = self.remaining(), "countdown tick");
                    Some(self.tick_cmd(token))
                }
                Tick::Finished => {
                    debug!(id = self.id, "countdown finished");
                    Some(self.finished_cmd())
                }
            };
            self.sync_bindings();
            return cmd;
        }

        if let Some(control) = msg.downcast_ref::<ControlMsg>() {
            if control.id != self.id {
                return None;
            }
            return self.apply(control.command.clone());
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key);
        }

        None
    }

    fn handle_key(&mut self, key: &KeyMsg) -> Option<Cmd> {
        if !self.focused {
            return None;
        }
        if self.key_map.switch_focus.matches(key) {
            self.switch_focus();
            return None;
        }

        match self.focus {
            Focus::Entry => {
                if self.key_map.set.matches(key) {
                    let input = self.input.value();
                    return self.apply(Command::Set(input));
                }
                self.input.update(key);
                None
            }
            Focus::Controls => {
                if self.key_map.start.matches(key) {
                    self.apply(Command::Start)
                } else if self.key_map.pause.matches(key) {
                    self.apply(Command::Pause)
                } else if self.key_map.reset.matches(key) {
                    self.apply(Command::Reset)
                } else {
                    None
                }
            }
        }
    }

    // Bindings that would do nothing are disabled so help hides them.
    fn sync_bindings(&mut self) {
        let entry = self.focus == Focus::Entry;
        self.key_map.set.set_enabled(entry);
        self.key_map
            .start
            .set_enabled(!entry && self.controller.can_start());
        self.key_map
            .pause
            .set_enabled(!entry && self.status() == Status::Running);
        self.key_map.reset.set_enabled(!entry);

        let start_desc = if self.status() == Status::Paused {
            "resume"
        } else {
            "start"
        };
        self.key_map.start.set_help("s", start_desc);
        self.key_map
            .switch_focus
            .set_help("tab", if entry { "controls" } else { "duration" });
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focused = true;
        if self.focus == Focus::Entry {
            self.input.focus();
        }
        None
    }

    fn blur(&mut self) {
        self.focused = false;
        self.input.blur();
    }

    fn focused(&self) -> bool {
        self.focused
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
