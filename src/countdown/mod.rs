//! Countdown timer component.
//!
//! The countdown holds a duration in seconds, counts it down one second per
//! tick and shows the remaining time as `MM:SS`. It is driven by four user
//! commands: set, start (resume when paused), pause and reset.
//!
//! The state machine lives in [`Controller`] and can be used on its own. The
//! [`Model`] wraps it as a bubbletea-rs component with a duration entry,
//! buttons and a help line.
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_countdown::countdown::{self, FinishedMsg};
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//!
//! struct App {
//!     countdown: countdown::Model,
//!     done: bool,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let countdown = countdown::new().with_duration(25 * 60);
//!         (App { countdown, done: false }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(finished) = msg.downcast_ref::<FinishedMsg>() {
//!             if finished.id == self.countdown.id() {
//!                 self.done = true;
//!             }
//!         }
//!         self.countdown.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.countdown.view()
//!     }
//! }
//! ```
//!
//! # Using the controller directly
//!
//! ```rust
//! use bubbletea_countdown::countdown::{Controller, Status, Tick};
//!
//! let mut c = Controller::new();
//! assert!(!c.set("abc"));
//! assert!(c.set("3"));
//!
//! let token = c.start().unwrap();
//! assert_eq!(c.tick(token), Tick::Continue(token));
//! assert_eq!(c.clock(), "00:02");
//!
//! c.pause();
//! assert_eq!(c.status(), Status::Paused);
//! assert_eq!(c.tick(token), Tick::Stale);
//! ```

pub mod controller;
pub mod keymap;
pub mod model;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use controller::{Controller, Tick, TickToken};
pub use keymap::{default_key_map, KeyMap};
pub use model::{new, Focus, Model, DEFAULT_INTERVAL};
pub use types::{Command, ControlMsg, FinishedMsg, Status, TickMsg};
pub use view::Styles;
