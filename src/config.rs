use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct Config {
  #[serde(default)]
  pub(crate) test_type: String,
  #[serde(default = "default_keyboard_type")]
  pub(crate) keyboard_type: String,
  #[serde(default = "default_language")]
  pub(crate) language: String,
}

fn default_keyboard_type() -> String {
  "QWERTY".into()
}

fn default_language() -> String {
  "English".into()
}

impl Default for Config {
  fn default() -> Self {
    Self {
      test_type: String::new(),
      keyboard_type: default_keyboard_type(),
      language: default_language(),
    }
  }
}

impl Config {
  pub(crate) fn default_path() -> PathBuf {
    dirs::config_dir()
      .unwrap_or_else(|| PathBuf::from("."))
      .join(env!("CARGO_PKG_NAME"))
      .join("config.toml")
  }

  /// Loads the config at `path`, falling back to defaults when the file does
  /// not exist yet.
  pub(crate) fn load(path: &Path) -> Result<Self, Error> {
    if !path.exists() {
      return Ok(Self::default());
    }

    let content = fs::read_to_string(path)?;

    toml::from_str(&content).map_err(|source| Error::ConfigParse {
      path: path.into(),
      source,
    })
  }

  pub(crate) fn save(&self, path: &Path) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }

    fs::write(path, toml::to_string_pretty(self)?)?;

    Ok(())
  }

  pub(crate) fn test_type(&self) -> Result<TestType, Error> {
    self.test_type.parse()
  }

  pub(crate) fn set_test_type(&mut self, test_type: TestType) {
    self.test_type = test_type.name().into();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let config = Config::load(&dir.path().join("config.toml")).unwrap();

    assert_eq!(config.test_type, "");
    assert_eq!(config.keyboard_type, "QWERTY");
    assert_eq!(config.language, "English");
    assert!(matches!(config.test_type(), Err(Error::InvalidTestType(_))));
  }

  #[test]
  fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::load(&path).unwrap();
    config.set_test_type(TestType::ParagraphBased);
    config.save(&path).unwrap();

    let loaded = Config::load(&path).unwrap();

    assert_eq!(loaded, config);
    assert_eq!(loaded.test_type().unwrap(), TestType::ParagraphBased);
  }

  #[test]
  fn unknown_test_type_is_kept_but_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    fs::write(&path, "test_type = \"Sprint\"\n").unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.test_type, "Sprint");
    assert_eq!(config.keyboard_type, "QWERTY");
    assert!(matches!(
      config.test_type(),
      Err(Error::InvalidTestType(value)) if value == "Sprint"
    ));
  }

  #[test]
  fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    fs::write(&path, "test_type = [").unwrap();

    assert!(matches!(
      Config::load(&path),
      Err(Error::ConfigParse { path: error_path, .. }) if error_path == path
    ));
  }
}
