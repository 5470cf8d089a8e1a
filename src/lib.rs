#![warn(missing_docs)]

//! # bubbletea-countdown
//!
//! A countdown timer component for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The countdown lets a user type a duration in seconds, set it, then start,
//! pause, resume and reset a clock that counts down once per second and reads
//! `MM:SS`. Like other bubbletea components it follows the Elm Architecture
//! with `init()`, `update()` and `view()`.
//!
//! The state machine behind it, [`countdown::Controller`], has no runtime
//! dependencies and can drive any other front end.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`countdown`] | The countdown controller and component |
//! | [`clock`] | `MM:SS` formatting and duration parsing |
//! | [`textinput`] | Single-line entry used for the duration |
//! | [`key`] | Key bindings |
//! | [`help`] | Help line rendered from key bindings |
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_countdown::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     countdown: Countdown,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         (Self { countdown: countdown_new().with_duration(60) }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.countdown.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.countdown.view()
//!     }
//! }
//! ```

pub mod clock;
pub mod countdown;
pub mod help;
pub mod key;
pub mod textinput;

use bubbletea_rs::Cmd;

/// Focus management for components that take keyboard input.
///
/// A focused component reacts to key presses; a blurred one ignores them.
///
/// ```rust
/// use bubbletea_countdown::prelude::*;
///
/// let mut countdown = countdown_new();
/// assert!(countdown.focused());
///
/// countdown.blur();
/// assert!(!countdown.focused());
/// ```
pub trait Component {
    /// Gives the component focus. May return a command to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes focus.
    fn blur(&mut self);

    /// Whether the component has focus.
    fn focused(&self) -> bool;
}

pub use clock::{format_clock, parse_duration, DurationError};
pub use countdown::{
    new as countdown_new, Command as CountdownCommand, Controller as CountdownController,
    FinishedMsg as CountdownFinishedMsg, Model as Countdown, Status as CountdownStatus,
};
pub use help::Model as HelpModel;
pub use key::{matches, matches_binding, Binding, Help as KeyHelp, KeyPress};
pub use textinput::Model as TextInput;

/// Common imports.
pub mod prelude {
    pub use crate::clock::{format_clock, parse_duration, DurationError};
    pub use crate::countdown::{
        new as countdown_new, Command as CountdownCommand, Controller as CountdownController,
        FinishedMsg as CountdownFinishedMsg, Model as Countdown, Status as CountdownStatus,
        Tick as CountdownTick,
    };
    pub use crate::help::{KeyMap, Model as HelpModel};
    pub use crate::key::{matches, matches_binding, Binding, Help as KeyHelp, KeyPress};
    pub use crate::textinput::{new as textinput_new, Model as TextInput};
    pub use crate::Component;
}
