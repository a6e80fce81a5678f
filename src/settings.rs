use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Setting {
  KeyboardType,
  Language,
  TestType,
}

struct Item {
  options: &'static [(&'static str, bool)],
  section: &'static str,
  setting: Setting,
  title: &'static str,
}

const ITEM_COUNT: usize = 3;

static ITEMS: [Item; ITEM_COUNT] = [
  Item {
    options: &[("Time based", true), ("Paragraph based", true)],
    section: "Trainer",
    setting: Setting::TestType,
    title: "Select the type of test you want to take",
  },
  Item {
    options: &[("QWERTY", true), ("DVORAK", false), ("COLEMAK", false)],
    section: "Configuration",
    setting: Setting::KeyboardType,
    title: "Keyboard Type",
  },
  Item {
    options: &[("English", true), ("Hindi", false), ("French", false)],
    section: "Configuration",
    setting: Setting::Language,
    title: "Language",
  },
];

#[derive(Debug, PartialEq)]
pub(crate) enum Outcome {
  Continuing,
  Quit,
  Saved,
}

/// Settings screen state. The cursor only ever rests on enabled options.
#[derive(Debug)]
pub(crate) struct SettingsMenu {
  cursor: (usize, usize),
  message: Option<&'static str>,
  selected: [Option<usize>; ITEM_COUNT],
}

impl SettingsMenu {
  pub(crate) fn new(config: &Config) -> Self {
    let mut selected = [None; ITEM_COUNT];

    for (slot, item) in selected.iter_mut().zip(&ITEMS) {
      let current = match item.setting {
        Setting::KeyboardType => config.keyboard_type.as_str(),
        Setting::Language => config.language.as_str(),
        Setting::TestType => config.test_type.as_str(),
      };

      *slot = item
        .options
        .iter()
        .position(|(name, enabled)| *enabled && *name == current);
    }

    Self {
      cursor: (0, 0),
      message: None,
      selected,
    }
  }

  /// Writes the chosen options into `config`. Fails when no test type has
  /// been chosen.
  pub(crate) fn apply(&self, config: &mut Config) -> Result<(), Error> {
    for (item, selected) in ITEMS.iter().zip(self.selected) {
      let Some(index) = selected else {
        continue;
      };

      let name = item.options[index].0;

      match item.setting {
        Setting::KeyboardType => config.keyboard_type = name.into(),
        Setting::Language => config.language = name.into(),
        Setting::TestType => config.set_test_type(name.parse()?),
      }
    }

    config.test_type().map(|_| ())
  }

  fn enabled_options() -> impl Iterator<Item = (usize, usize)> {
    ITEMS.iter().enumerate().flat_map(|(item, entry)| {
      entry
        .options
        .iter()
        .enumerate()
        .filter(|(_, (_, enabled))| *enabled)
        .map(move |(option, _)| (item, option))
    })
  }

  pub(crate) fn handle_action(&mut self, action: Action) -> Outcome {
    self.message = None;

    match action {
      Action::Confirm => {
        if self.selected_test_type().is_some() {
          return Outcome::Saved;
        }

        self.message = Some("Choose a test type before starting");
      }
      Action::Down => self.move_cursor(1),
      Action::Escape | Action::Quit => return Outcome::Quit,
      Action::Insert(' ') => self.selected[self.cursor.0] = Some(self.cursor.1),
      Action::Up => self.move_cursor(-1),
      Action::Insert(_) | Action::Toggle => {}
    }

    Outcome::Continuing
  }

  fn move_cursor(&mut self, step: isize) {
    let options = Self::enabled_options().collect::<Vec<(usize, usize)>>();

    let Some(current) = options.iter().position(|option| *option == self.cursor) else {
      return;
    };

    let next = (current as isize + step).rem_euclid(options.len() as isize);

    self.cursor = options[next as usize];
  }

  pub(crate) fn selected_test_type(&self) -> Option<TestType> {
    let index = ITEMS
      .iter()
      .position(|item| item.setting == Setting::TestType)?;

    self.selected[index]
      .and_then(|option| ITEMS[index].options[option].0.parse().ok())
  }

  pub(crate) fn display(&self) -> Result {
    command!(Clear(ClearType::All), MoveTo(0, 0))?;

    let mut section = "";

    for (index, item) in ITEMS.iter().enumerate() {
      if item.section != section {
        section = item.section;
        command!(SetForegroundColor(Color::Cyan))?;
        print!("{section}\r\n");
      }

      command!(ResetColor)?;
      print!("  {}\r\n", item.title);

      for (option, (name, enabled)) in item.options.iter().enumerate() {
        let marker = if self.selected[index] == Some(option) {
          "(*)"
        } else {
          "( )"
        };

        command!(SetForegroundColor(if !enabled {
          Color::DarkGrey
        } else if self.cursor == (index, option) {
          Color::Yellow
        } else {
          Color::White
        }))?;

        print!("    {marker} {name}\r\n");
      }
    }

    command!(ResetColor)?;

    print!("\r\nUp/Down: move | Space: select | Enter: save and start | Esc: quit\r\n");

    if let Some(message) = self.message {
      command!(SetForegroundColor(Color::Red))?;
      print!("{message}\r\n");
      command!(ResetColor)?;
    }

    stdout().flush()?;

    Ok(())
  }

  /// Runs the settings screen until the user saves or quits. Returns whether a
  /// valid configuration was saved to `path`.
  pub(crate) fn run(config: &mut Config, path: &Path) -> Result<bool> {
    let mut menu = Self::new(config);

    info!("opening settings");

    loop {
      menu.display()?;

      let Some(action) = Action::from_event(event::read()?) else {
        continue;
      };

      match menu.handle_action(action) {
        Outcome::Continuing => {}
        Outcome::Quit => return Ok(false),
        Outcome::Saved => {
          menu.apply(config)?;
          config.save(path)?;
          info!(test_type = %config.test_type, path = %path.display(), "settings saved");
          return Ok(true);
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_preselects_configured_options() {
    let mut config = Config::default();
    config.set_test_type(TestType::ParagraphBased);

    let menu = SettingsMenu::new(&config);

    assert_eq!(menu.selected, [Some(1), Some(0), Some(0)]);
    assert_eq!(menu.selected_test_type(), Some(TestType::ParagraphBased));
  }

  #[test]
  fn new_ignores_invalid_and_disabled_values() {
    let config = Config {
      keyboard_type: "DVORAK".into(),
      test_type: "Sprint".into(),
      ..Config::default()
    };

    let menu = SettingsMenu::new(&config);

    assert_eq!(menu.selected, [None, None, Some(0)]);
  }

  #[test]
  fn cursor_skips_disabled_options() {
    let mut menu = SettingsMenu::new(&Config::default());

    let mut visited = vec![menu.cursor];

    for _ in 0..4 {
      menu.handle_action(Action::Down);
      visited.push(menu.cursor);
    }

    assert_eq!(visited, vec![(0, 0), (0, 1), (1, 0), (2, 0), (0, 0)]);

    menu.handle_action(Action::Up);
    assert_eq!(menu.cursor, (2, 0));
  }

  #[test]
  fn confirm_requires_test_type() {
    let mut menu = SettingsMenu::new(&Config::default());

    assert_eq!(menu.handle_action(Action::Confirm), Outcome::Continuing);
    assert!(menu.message.is_some());

    menu.handle_action(Action::Down);
    menu.handle_action(Action::Insert(' '));

    assert_eq!(menu.handle_action(Action::Confirm), Outcome::Saved);
    assert_eq!(menu.selected_test_type(), Some(TestType::ParagraphBased));
  }

  #[test]
  fn apply_writes_selection() {
    let mut config = Config::default();
    let mut menu = SettingsMenu::new(&config);

    assert!(matches!(menu.apply(&mut config), Err(Error::InvalidTestType(_))));

    menu.handle_action(Action::Insert(' '));
    menu.apply(&mut config).unwrap();

    assert_eq!(config.test_type().unwrap(), TestType::TimeBased);
    assert_eq!(config.keyboard_type, "QWERTY");
    assert_eq!(config.language, "English");
  }

  #[test]
  fn escape_quits() {
    let mut menu = SettingsMenu::new(&Config::default());
    assert_eq!(menu.handle_action(Action::Escape), Outcome::Quit);
    assert_eq!(menu.handle_action(Action::Quit), Outcome::Quit);
  }
}
