//! Status and message types for the countdown component.

use bubbletea_rs::Msg;

/// Where the countdown is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// Not counting: nothing set yet, just set, or reset.
    #[default]
    Idle,
    /// Started. Stays `Running` once the countdown has reached zero; check
    /// [`Controller::is_finished`](super::Controller::is_finished) for that.
    Running,
    /// Stopped part way; `start` resumes from the remaining time.
    Paused,
}

/// A user command for the countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the duration from raw input text.
    Set(String),
    /// Start, or resume when paused.
    Start,
    /// Pause a running countdown.
    Pause,
    /// Go back to the full duration.
    Reset,
}

/// Delivers a [`Command`] to one countdown instance.
///
/// Built by [`Model::set`](super::Model::set), [`Model::start`](super::Model::start),
/// [`Model::pause`](super::Model::pause) and [`Model::reset`](super::Model::reset).
#[derive(Debug, Clone)]
pub struct ControlMsg {
    /// The countdown this command is for.
    pub id: i64,
    /// What to do.
    pub command: Command,
}

/// One tick of a countdown's tick process.
///
/// Ticks from a cancelled process carry an outdated tag and are dropped.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// The countdown that scheduled this tick.
    pub id: i64,
    pub(crate) tag: u64,
}

/// Sent once when a countdown reaches zero.
#[derive(Debug, Clone)]
pub struct FinishedMsg {
    /// The countdown that finished.
    pub id: i64,
}

impl From<ControlMsg> for Msg {
    fn from(msg: ControlMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<FinishedMsg> for Msg {
    fn from(msg: FinishedMsg) -> Self {
        Box::new(msg) as Msg
    }
}
