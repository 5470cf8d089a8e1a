//! Tests for the countdown component.

use super::*;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use std::time::Duration;

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }) as Msg
}

fn type_text(m: &mut Model, text: &str) {
    for ch in text.chars() {
        m.update(key(KeyCode::Char(ch)));
    }
}

fn tick(m: &Model, tag: u64) -> Msg {
    Box::new(TickMsg { id: m.id(), tag }) as Msg
}

fn plain(s: &str) -> String {
    String::from_utf8(strip_ansi_escapes::strip(s)).unwrap_or_default()
}

/// A countdown with `secs` set and focus on the controls.
fn ready(secs: u64) -> Model {
    let mut m = new().with_duration(secs);
    m.switch_focus();
    m
}

async fn run(cmd: Cmd) -> Msg {
    cmd.await.expect("command should produce a message")
}

#[test]
fn test_new_defaults() {
    let m = new();
    assert_eq!(m.status(), Status::Idle);
    assert_eq!(m.remaining(), 0);
    assert_eq!(m.clock(), "00:00");
    assert_eq!(m.focus_area(), Focus::Entry);
    assert_eq!(m.interval, DEFAULT_INTERVAL);
    assert!(m.focused());
    assert!(m.controller().duration().is_none());
}

#[test]
fn test_unique_ids() {
    let a = new();
    let b = new();
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_bubbletea_init_has_no_command() {
    let (m, cmd) = <Model as BubbleTeaModel>::init();
    assert!(cmd.is_none());
    assert_eq!(m.status(), Status::Idle);
}

#[test]
fn test_typing_and_enter_sets_duration() {
    let mut m = new();
    type_text(&mut m, "90");
    assert_eq!(m.entry(), "90");
    assert_eq!(m.remaining(), 0);

    assert!(m.update(key(KeyCode::Enter)).is_none());
    assert_eq!(m.remaining(), 90);
    assert_eq!(m.status(), Status::Idle);
    assert_eq!(m.clock(), "01:30");
}

#[test]
fn test_invalid_entry_is_ignored() {
    let mut m = new().with_duration(10);

    for bad in ["abc", "0", "-5"] {
        m.input.reset();
        type_text(&mut m, bad);
        m.update(key(KeyCode::Enter));
        assert_eq!(m.remaining(), 10);
        assert_eq!(m.controller().duration(), Some(10));
        assert_eq!(m.status(), Status::Idle);
    }
}

#[test]
fn test_with_duration_zero_is_ignored() {
    let m = new().with_duration(0);
    assert_eq!(m.remaining(), 0);
    assert_eq!(m.entry(), "");
}

#[test]
fn test_control_keys_only_apply_in_controls() {
    let mut m = new().with_duration(10);

    // In the entry, 's' is just text.
    assert!(m.update(key(KeyCode::Char('s'))).is_none());
    assert_eq!(m.status(), Status::Idle);
    assert_eq!(m.entry(), "10s");

    m.update(key(KeyCode::Tab));
    assert_eq!(m.focus_area(), Focus::Controls);
    assert!(m.update(key(KeyCode::Char('s'))).is_some());
    assert_eq!(m.status(), Status::Running);
    assert_eq!(m.entry(), "10s");

    m.update(key(KeyCode::Tab));
    assert_eq!(m.focus_area(), Focus::Entry);
}

#[test]
fn test_start_twice_schedules_one_tick_process() {
    let mut m = ready(10);
    assert!(m.update(key(KeyCode::Char('s'))).is_some());
    assert!(m.update(key(KeyCode::Char('s'))).is_none());
    assert!(m.apply(Command::Start).is_none());
}

#[test]
fn test_start_with_nothing_set_is_noop() {
    let mut m = new();
    m.switch_focus();
    assert!(m.update(key(KeyCode::Char('s'))).is_none());
    assert_eq!(m.status(), Status::Idle);
}

#[test]
fn test_ticks_count_down_and_finish() {
    let mut m = ready(3);
    m.apply(Command::Start);

    assert!(m.update(tick(&m, 0)).is_some());
    assert_eq!(m.remaining(), 2);
    assert!(m.update(tick(&m, 0)).is_some());
    assert_eq!(m.remaining(), 1);

    // The final tick hands back the finished notification.
    assert!(m.update(tick(&m, 0)).is_some());
    assert_eq!(m.remaining(), 0);
    assert!(m.is_finished());
    assert!(!m.is_running());

    assert!(m.update(tick(&m, 0)).is_none());
    assert_eq!(m.remaining(), 0);
}

#[test]
fn test_pause_then_resume_continues_from_remaining() {
    let mut m = ready(10);
    m.apply(Command::Start);
    m.update(tick(&m, 0));
    m.update(tick(&m, 0));
    assert_eq!(m.remaining(), 8);

    m.update(key(KeyCode::Char('p')));
    assert_eq!(m.status(), Status::Paused);
    assert_eq!(m.start_label(), "Resume");
    for _ in 0..3 {
        assert!(m.update(tick(&m, 0)).is_none());
    }
    assert_eq!(m.remaining(), 8);

    assert!(m.update(key(KeyCode::Char('s'))).is_some());
    assert_eq!(m.status(), Status::Running);
    assert_eq!(m.start_label(), "Start");
    assert!(m.update(tick(&m, 1)).is_some());
    assert_eq!(m.remaining(), 7);
}

#[test]
fn test_pause_after_finish_shows_resume() {
    let mut m = ready(1);
    m.apply(Command::Start);
    m.update(tick(&m, 0));
    assert!(m.is_finished());
    assert!(m.key_map.pause.enabled());

    assert!(m.update(key(KeyCode::Char('p'))).is_none());
    assert_eq!(m.status(), Status::Paused);
    assert_eq!(m.remaining(), 0);
    assert_eq!(m.start_label(), "Resume");
    assert!(!m.key_map.pause.enabled());
    assert!(!m.key_map.start.enabled());

    assert!(m.update(key(KeyCode::Char('s'))).is_none());
    assert_eq!(m.status(), Status::Paused);
    assert_eq!(m.clock(), "00:00");
}

#[test]
fn test_only_advertised_keys_drive_controls() {
    let mut m = ready(10);
    assert!(m.update(key(KeyCode::Enter)).is_none());
    assert!(m.update(key(KeyCode::Char(' '))).is_none());
    assert_eq!(m.status(), Status::Idle);

    let help = plain(&m.help_view());
    assert!(help.contains("s start"));
    assert!(!help.contains("enter"));
}

#[test]
fn test_reset_drops_stale_ticks() {
    let mut m = ready(5);
    m.apply(Command::Start);
    m.update(tick(&m, 0));
    assert_eq!(m.remaining(), 4);

    m.update(key(KeyCode::Char('r')));
    assert_eq!(m.status(), Status::Idle);
    assert_eq!(m.remaining(), 5);
    assert!(m.update(tick(&m, 0)).is_none());
    assert_eq!(m.remaining(), 5);
}

#[test]
fn test_set_while_running_stops_ticking() {
    let mut m = new().with_duration(30);
    m.apply(Command::Start);
    m.input.reset();
    type_text(&mut m, "45");
    m.update(key(KeyCode::Enter));

    assert_eq!(m.status(), Status::Idle);
    assert_eq!(m.remaining(), 45);
    assert!(m.update(tick(&m, 0)).is_none());
    assert_eq!(m.remaining(), 45);
}

#[test]
fn test_messages_for_other_instances_are_ignored() {
    let mut m = ready(10);
    let other = new();
    m.apply(Command::Start);

    let foreign_tick = Box::new(TickMsg {
        id: other.id(),
        tag: 0,
    }) as Msg;
    assert!(m.update(foreign_tick).is_none());
    assert_eq!(m.remaining(), 10);

    let foreign_control = Box::new(ControlMsg {
        id: other.id(),
        command: Command::Reset,
    }) as Msg;
    assert!(m.update(foreign_control).is_none());
    assert_eq!(m.status(), Status::Running);
}

#[test]
fn test_control_messages_apply() {
    let mut m = new();
    m.update(ControlMsg {
        id: m.id(),
        command: Command::Set("65".to_string()),
    }
    .into());
    assert_eq!(m.clock(), "01:05");

    let cmd = m.update(
        ControlMsg {
            id: m.id(),
            command: Command::Start,
        }
        .into(),
    );
    assert!(cmd.is_some());
    assert!(m.is_running());
}

#[test]
fn test_blurred_countdown_ignores_keys() {
    let mut m = ready(10);
    m.blur();
    assert!(!m.focused());
    assert!(m.update(key(KeyCode::Char('s'))).is_none());
    assert_eq!(m.status(), Status::Idle);

    m.focus();
    assert!(m.update(key(KeyCode::Char('s'))).is_some());
}

#[test]
fn test_bindings_follow_state() {
    let mut m = new().with_duration(10);
    assert!(m.key_map.set.enabled());
    assert!(!m.key_map.start.enabled());
    assert!(!m.key_map.pause.enabled());

    m.switch_focus();
    assert!(!m.key_map.set.enabled());
    assert!(m.key_map.start.enabled());
    assert!(!m.key_map.pause.enabled());
    assert!(m.key_map.reset.enabled());

    m.apply(Command::Start);
    assert!(!m.key_map.start.enabled());
    assert!(m.key_map.pause.enabled());

    m.apply(Command::Pause);
    assert!(m.key_map.start.enabled());
    assert_eq!(m.key_map.start.help().desc, "resume");
}

#[test]
fn test_view_contents() {
    let mut m = new().with_duration(125);
    let view = plain(&m.view());
    assert!(view.contains("Custom Countdown Timer"));
    assert!(view.contains("02:05"));
    assert!(view.contains("[ Start ]"));
    assert!(view.contains("[ Pause ]"));
    assert!(view.contains("[ Reset ]"));
    assert!(view.contains("enter set"));

    m.switch_focus();
    m.apply(Command::Start);
    m.apply(Command::Pause);
    let view = plain(&m.view());
    assert!(view.contains("[ Resume ]"));
    assert!(view.contains("s resume"));
}

#[test]
fn test_view_placeholder_and_hidden_help() {
    let m = new().with_help(false).with_title("Tea");
    let view = plain(&m.view());
    assert!(view.starts_with("Tea"));
    assert!(view.contains("Enter duration in seconds"));
    assert!(!view.contains("enter set"));
}

#[tokio::test]
async fn test_commands_drive_a_full_countdown() {
    let mut m = new()
        .with_duration(3)
        .with_interval(Duration::from_millis(1));

    let control = run(m.start()).await;
    assert!(control.downcast_ref::<ControlMsg>().is_some());

    let mut next = m.update(control);
    let mut ticks = 0;
    let finished_id = loop {
        let cmd = next.expect("countdown stopped before finishing");
        let msg = run(cmd).await;
        if let Some(done) = msg.downcast_ref::<FinishedMsg>() {
            break done.id;
        }
        assert!(msg.downcast_ref::<TickMsg>().is_some());
        ticks += 1;
        next = m.update(msg);
    };

    assert_eq!(ticks, 3);
    assert_eq!(finished_id, m.id());
    assert_eq!(m.remaining(), 0);
    assert!(m.is_finished());
}

#[tokio::test]
async fn test_tick_from_before_pause_is_dropped() {
    let mut m = new()
        .with_duration(10)
        .with_interval(Duration::from_millis(1));

    let first = m.apply(Command::Start).expect("tick scheduled");
    m.apply(Command::Pause);
    m.apply(Command::Start);

    let stale = run(first).await;
    assert!(m.update(stale).is_none());
    assert_eq!(m.remaining(), 10);
}
