use {
  crate::{
    action::Action,
    app::{App, RawMode},
    arguments::Arguments,
    config::Config,
    error::Error,
    generator::CharacterSlot,
    keyboard::{Feedback, KeyHandle, KeyLookup, KeyStyle, Keyboard},
    session::{Flow, Mark, Session, State, Tally},
    settings::SettingsMenu,
    statistics::Statistics,
    test_type::TestType,
    timer::Timer,
  },
  anyhow::{Context, anyhow, bail, ensure},
  clap::{Parser, ValueEnum},
  crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    style::{Color, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
  },
  rand::Rng,
  serde::{Deserialize, Serialize},
  std::{
    fmt::{self, Display, Formatter},
    fs,
    io::{Write, stdout},
    path::{Path, PathBuf},
    process,
    str::FromStr,
    time::{Duration, Instant},
  },
  tracing::{debug, info, warn},
  tracing_appender::non_blocking::WorkerGuard,
  tracing_subscriber::EnvFilter,
};

macro_rules! command {
  ($($cmd:expr),+ $(,)?) => {
    { execute!(stdout(), $($cmd),+) }
  };
}

mod action;
mod app;
mod arguments;
mod config;
mod error;
mod generator;
mod keyboard;
mod session;
mod settings;
mod statistics;
mod test_type;
mod timer;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

/// Logs go to a file since the terminal belongs to the trainer. The filter is
/// read from `RUST_LOG`.
fn initialize_logging() -> Result<WorkerGuard> {
  let directory = dirs::data_dir()
    .unwrap_or_else(|| PathBuf::from("."))
    .join(env!("CARGO_PKG_NAME"));

  fs::create_dir_all(&directory)
    .with_context(|| format!("failed to create log directory `{}`", directory.display()))?;

  let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
    &directory,
    concat!(env!("CARGO_PKG_NAME"), ".log"),
  ));

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(writer)
    .with_ansi(false)
    .try_init()
    .map_err(|error| anyhow!("failed to install log subscriber: {error}"))?;

  Ok(guard)
}

fn main() {
  let guard = match initialize_logging() {
    Ok(guard) => Some(guard),
    Err(error) => {
      eprintln!("warning: logging disabled: {error}");
      None
    }
  };

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error:#}");
    drop(guard);
    process::exit(1);
  }
}
