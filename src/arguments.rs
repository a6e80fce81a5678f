use super::*;

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub(crate) enum Mode {
  Paragraph,
  Time,
}

impl From<Mode> for TestType {
  fn from(mode: Mode) -> Self {
    match mode {
      Mode::Paragraph => Self::ParagraphBased,
      Mode::Time => Self::TimeBased,
    }
  }
}

#[derive(Debug, Parser)]
#[clap(about = "Home row touch typing trainer")]
pub(crate) struct Arguments {
  #[clap(long, help = "Path to the config file")]
  config: Option<PathBuf>,
  #[clap(long, short, default_value = "360", help = "Maximum paragraph length")]
  length: usize,
  #[clap(long, short, value_enum, help = "Store and use this test type")]
  mode: Option<Mode>,
  #[clap(long, help = "Open the settings screen before starting")]
  settings: bool,
  #[clap(
    long,
    short,
    default_value = "300",
    value_parser = clap::value_parser!(u64).range(1..),
    help = "Seconds allowed in a time based test"
  )]
  time_limit: u64,
}

impl Arguments {
  /// Settings open first when asked for, or when the stored test type cannot
  /// start a session.
  fn needs_settings(&self, config: &Config) -> bool {
    match config.test_type() {
      Ok(_) => self.settings,
      Err(error) => {
        warn!(%error, "redirecting to settings");
        true
      }
    }
  }

  pub(crate) fn run(self) -> Result {
    ensure!(self.length > 0, "paragraph length must be at least 1");

    let path = self.config.clone().unwrap_or_else(Config::default_path);

    let mut config = Config::load(&path)?;

    if let Some(mode) = self.mode {
      config.set_test_type(mode.into());
      config.save(&path)?;
    }

    let _raw_mode = RawMode::enable()?;

    if self.needs_settings(&config) {
      if !SettingsMenu::run(&mut config, &path)? {
        command!(Clear(ClearType::All), MoveTo(0, 0))?;
        return Ok(());
      }
    }

    let session = Session::from_config(
      &config,
      self.length,
      self.time_limit,
      &mut rand::thread_rng(),
    )?;

    App::new(session).run()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults() {
    let arguments = Arguments::try_parse_from(["homerow"]).unwrap();

    assert_eq!(arguments.length, 360);
    assert_eq!(arguments.time_limit, 300);
    assert_eq!(arguments.mode, None);
    assert!(!arguments.settings);
    assert_eq!(arguments.config, None);
  }

  #[test]
  fn mode() {
    let arguments = Arguments::try_parse_from(["homerow", "--mode", "paragraph"]).unwrap();

    assert_eq!(arguments.mode.map(TestType::from), Some(TestType::ParagraphBased));

    let arguments = Arguments::try_parse_from(["homerow", "-m", "time"]).unwrap();

    assert_eq!(arguments.mode.map(TestType::from), Some(TestType::TimeBased));
  }

  #[test]
  fn invalid_mode() {
    assert!(Arguments::try_parse_from(["homerow", "--mode", "words"]).is_err());
  }

  #[test]
  fn zero_time_limit() {
    assert!(Arguments::try_parse_from(["homerow", "--time-limit", "0"]).is_err());
  }

  #[test]
  fn invalid_test_type_needs_settings() {
    let arguments = Arguments::try_parse_from(["homerow"]).unwrap();

    for value in ["", "Sprint", "time based"] {
      let config = Config {
        test_type: value.into(),
        ..Config::default()
      };

      assert!(arguments.needs_settings(&config), "{value:?}");
    }
  }

  #[test]
  fn valid_test_type_skips_settings() {
    let arguments = Arguments::try_parse_from(["homerow"]).unwrap();

    for test_type in TestType::ALL {
      let mut config = Config::default();
      config.set_test_type(test_type);

      assert!(!arguments.needs_settings(&config));
    }
  }

  #[test]
  fn settings_flag_opens_settings() {
    let arguments = Arguments::try_parse_from(["homerow", "--settings"]).unwrap();

    let mut config = Config::default();
    config.set_test_type(TestType::TimeBased);

    assert!(arguments.needs_settings(&config));
  }

  #[test]
  fn zero_length() {
    let arguments = Arguments::try_parse_from(["homerow", "--length", "0"]).unwrap();
    assert!(arguments.run().is_err());
  }
}
