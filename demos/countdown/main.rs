//! Full-screen countdown timer.
//!
//! ```text
//! countdown --duration 90
//! countdown --interval-ms 100 --log-file countdown.log
//! ```

use anyhow::{anyhow, Context, Result};
use bubbletea_countdown::countdown::{self, FinishedMsg};
use bubbletea_countdown::key::Binding;
use bubbletea_rs::{quit, Cmd, KeyMsg, Model, Msg, Program};
use clap::Parser;
use crossterm::event::{KeyCode, KeyModifiers};
use std::fs::File;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive countdown timer", long_about = None)]
struct Cli {
    /// Preset duration in seconds
    #[arg(short, long, value_name = "SECS")]
    duration: Option<u64>,

    /// Milliseconds between ticks; each tick takes one second off the clock
    #[arg(long, value_name = "MS", default_value_t = 1000)]
    interval_ms: u64,

    /// Write logs to this file (RUST_LOG controls the level)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

// Model::init takes no arguments, so the parsed flags are parked here.
static CLI: OnceLock<Cli> = OnceLock::new();

struct App {
    countdown: countdown::Model,
    quit: Binding,
    finished: bool,
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let mut countdown = countdown::new();
        if let Some(cli) = CLI.get() {
            countdown = countdown.with_interval(Duration::from_millis(cli.interval_ms.max(1)));
            if let Some(secs) = cli.duration {
                countdown = countdown.with_duration(secs);
            }
        }

        let quit = Binding::new(vec![
            (KeyCode::Esc, KeyModifiers::NONE),
            (KeyCode::Char('c'), KeyModifiers::CONTROL),
        ])
        .with_help("esc", "quit");

        (
            App {
                countdown,
                quit,
                finished: false,
            },
            None,
        )
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            if self.quit.matches(key) {
                return Some(quit());
            }
            self.finished = false;
        }

        if let Some(done) = msg.downcast_ref::<FinishedMsg>() {
            if done.id == self.countdown.id() {
                tracing::info!("time is up");
                self.finished = true;
            }
            return None;
        }

        self.countdown.update(msg)
    }

    fn view(&self) -> String {
        let status = if self.finished { "Time's up!" } else { "" };
        format!(
            "\n{}\n\n  {}\n  {} {}\n",
            self.countdown.view(),
            status,
            self.quit.help().key,
            self.quit.help().desc
        )
    }
}

fn init_logging(path: &PathBuf) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }
    tracing::info!(duration = ?cli.duration, interval_ms = cli.interval_ms, "starting countdown");
    CLI.set(cli)
        .map_err(|_| anyhow!("command line parsed twice"))?;

    let program = Program::<App>::builder()
        .alt_screen(true)
        .build()
        .context("failed to build the terminal program")?;
    program.run().await.context("countdown exited with an error")?;
    Ok(())
}
